// File: crates/chart-core/tests/snapshot.rs
// Purpose: Golden snapshot harness with bless flow.
// Behavior:
// - Renders a deterministic dual-axis chart to PNG bytes.
// - If env UPDATE_SNAPSHOTS=1, (re)writes the snapshot file.
// - Else, if snapshot exists, compares decoded pixels for exact match.
// - Else, logs a note; the frame checks below still run without a golden file.

use chart_core::{Axis, AxisSide, Chart, LineSeries, RenderOptions, Rgba, TickFormat};

fn render_bytes() -> Vec<u8> {
    let mut chart = Chart::new();
    chart.categories = (1..=6).map(|i| i.to_string()).collect();
    chart.y_axes = vec![
        Axis::value("y-axis-1", AxisSide::Left).with_ticks(TickFormat::Unit),
        Axis::value("y-axis-2", AxisSide::Right).with_ticks(TickFormat::Unit).without_grid(),
    ];
    chart.add_series(
        LineSeries::new("White Speeds", Rgba::rgb(0xef, 0xef, 0xef))
            .on_axis("y-axis-1")
            .with_values(vec![Some(1.0e6), Some(1.4e6), Some(1.2e6), None, Some(2.0e6), Some(2.2e6)]),
    );
    chart.add_series(
        LineSeries::new("Black Speed", Rgba::rgb(0, 0, 0))
            .on_axis("y-axis-2")
            .with_values(vec![Some(3.0e6), Some(2.5e6), Some(2.9e6), Some(3.3e6), Some(3.1e6)]),
    );
    chart.autoscale();

    let mut opts = RenderOptions::default();
    opts.draw_labels = false; // avoid text nondeterminism across platforms
    chart.render_to_png_bytes(&opts).expect("render bytes")
}

#[test]
fn dual_axis_frame_shows_both_series() {
    let bytes = render_bytes();
    let img = image::load_from_memory(&bytes).expect("decode png").to_rgba8();
    let opts = RenderOptions::default();
    assert_eq!((img.width(), img.height()), (opts.width as u32, opts.height as u32));

    // dark theme chrome stays between 64 and 160; only the series strokes leave that band
    let corner = img.get_pixel(0, 0).0;
    assert_eq!(corner, [64, 64, 70, 255]);
    let near_white = img.pixels().filter(|p| p.0[0] > 220 && p.0[1] > 220 && p.0[2] > 220).count();
    let near_black = img.pixels().filter(|p| p.0[0] < 20 && p.0[1] < 20 && p.0[2] < 20).count();
    assert!(near_white > 50, "white series missing: {near_white} px");
    assert!(near_black > 50, "black series missing: {near_black} px");

    // the renderer is deterministic
    let again = image::load_from_memory(&render_bytes()).expect("decode png").to_rgba8();
    assert_eq!(img.as_raw(), again.as_raw());
}

#[test]
fn golden_dual_axis_chart() {
    let bytes = render_bytes();
    let snap_dir = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/__snapshots__");
    let snap_path = snap_dir.join("dual_axis_chart.png");

    let update = std::env::var("UPDATE_SNAPSHOTS").ok().map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false);

    if update {
        std::fs::create_dir_all(&snap_dir).expect("create snapshots dir");
        std::fs::write(&snap_path, &bytes).expect("write snapshot");
        eprintln!("[snapshot] Updated {} ({} bytes)", snap_path.display(), bytes.len());
        return;
    }

    if snap_path.exists() {
        let want = std::fs::read(&snap_path).expect("read snapshot");
        // Compare decoded pixel buffers to avoid PNG encoder variance
        let got_img = image::load_from_memory(&bytes).expect("decode got").to_rgba8();
        let want_img = image::load_from_memory(&want).expect("decode want").to_rgba8();
        assert_eq!(got_img.as_raw(), want_img.as_raw(), "rendered pixels differ from golden snapshot: {}", snap_path.display());
    } else {
        eprintln!("[snapshot] Missing snapshot {}; set UPDATE_SNAPSHOTS=1 to bless.", snap_path.display());
        // Skip without failing on first run
    }
}
