// File: crates/chart-core/src/chart.rs
// Summary: Chart struct and headless PNG rendering pipeline using Skia CPU raster surfaces.

use std::path::Path;

use anyhow::{Context, Result};
use skia_safe as skia;
use tracing::debug;

use crate::axis::{Axis, AxisSide};
use crate::error::RenderError;
use crate::grid::{linspace, skip_ticks};
use crate::series::LineSeries;
use crate::theme::Theme;
use crate::types::{Insets, Rgba, HEIGHT, LEGEND_HEIGHT, WIDTH};

/// Number of horizontal grid lines / y ticks per axis.
const Y_TICKS: usize = 6;

#[derive(Clone, Debug)]
pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
    pub theme: Theme,
    /// Tick labels and legend text. Off for pixel-stable output.
    pub draw_labels: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            theme: Theme::default(),
            draw_labels: true,
        }
    }
}

/// Line chart over a category (label) x axis with one or more value axes.
#[derive(Clone, Debug)]
pub struct Chart {
    /// X axis labels; slot `i` of every series sits under `categories[i]`.
    pub categories: Vec<String>,
    pub series: Vec<LineSeries>,
    /// First axis is the default binding for series without an axis id.
    pub y_axes: Vec<Axis>,
    pub legend: bool,
    /// Connect lines across missing points instead of breaking them.
    pub span_gaps: bool,
    pub max_x_ticks: usize,
    /// Overrides the theme background.
    pub background: Option<Rgba>,
}

impl Default for Chart {
    fn default() -> Self {
        Self::new()
    }
}

impl Chart {
    pub fn new() -> Self {
        Self {
            categories: Vec::new(),
            series: Vec::new(),
            y_axes: vec![Axis::value("y", AxisSide::Left)],
            legend: false,
            span_gaps: false,
            max_x_ticks: 25,
            background: None,
        }
    }

    pub fn add_series(&mut self, series: LineSeries) {
        self.series.push(series);
    }

    /// Index into `y_axes` the series is plotted against.
    pub fn axis_index(&self, series: &LineSeries) -> usize {
        series
            .axis_id
            .as_deref()
            .and_then(|id| self.y_axes.iter().position(|a| a.id == id))
            .unwrap_or(0)
    }

    /// Number of x slots: labels or the longest series, whichever is wider.
    pub fn slot_count(&self) -> usize {
        self.series
            .iter()
            .map(|s| s.values.len())
            .fold(self.categories.len(), usize::max)
    }

    /// Fit every y axis to the points bound to it, with a 2% margin.
    pub fn autoscale(&mut self) {
        let ranges: Vec<(f64, f64)> = (0..self.y_axes.len())
            .map(|idx| {
                let (mut lo, mut hi) = (f64::INFINITY, f64::NEG_INFINITY);
                for s in self.series.iter().filter(|s| self.axis_index(s) == idx) {
                    for (_, y) in s.points() {
                        lo = lo.min(y);
                        hi = hi.max(y);
                    }
                }
                if !lo.is_finite() || !hi.is_finite() {
                    return (0.0, 1.0);
                }
                if (hi - lo).abs() < 1e-9 {
                    hi = lo + 1.0;
                }
                let m = (hi - lo) * 0.02;
                (lo - m, hi + m)
            })
            .collect();
        for (axis, (lo, hi)) in self.y_axes.iter_mut().zip(ranges) {
            axis.min = lo;
            axis.max = hi;
        }
    }

    /// Render the chart into PNG bytes using a CPU raster surface.
    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>, RenderError> {
        let mut surface = skia::surfaces::raster_n32_premul((opts.width, opts.height))
            .ok_or(RenderError::Surface { width: opts.width, height: opts.height })?;
        let canvas = surface.canvas();

        let background = self.background.map(Rgba::to_skia).unwrap_or(opts.theme.background);
        canvas.clear(background);

        let insets = if self.legend { opts.insets.grow_bottom(LEGEND_HEIGHT) } else { opts.insets };
        let plot = PlotRect {
            l: insets.left as f32,
            t: insets.top as f32,
            r: (opts.width - insets.right as i32) as f32,
            b: (opts.height - insets.bottom as i32) as f32,
            slots: self.slot_count(),
        };
        let x_ticks = skip_ticks(plot.slots, self.max_x_ticks);

        draw_grid(canvas, &plot, &self.y_axes, &x_ticks, &opts.theme);
        draw_axes(canvas, &plot, &self.y_axes, &opts.theme);
        if opts.draw_labels {
            draw_tick_labels(canvas, &plot, &self.y_axes, &self.categories, &x_ticks, &opts.theme);
        }

        for s in &self.series {
            if let Some(axis) = self.y_axes.get(self.axis_index(s)) {
                draw_line_series(canvas, &plot, axis, s, self.span_gaps);
            }
        }

        if self.legend && opts.draw_labels {
            draw_legend(canvas, &self.series, insets.left as f32, (opts.height - 10) as f32, &opts.theme);
        }

        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or(RenderError::Encode)?;
        debug!(series = self.series.len(), slots = plot.slots, bytes = data.as_bytes().len(), "rendered chart");
        Ok(data.as_bytes().to_vec())
    }

    /// Render the chart to a PNG at `output_png_path`.
    pub fn render_to_png(&self, opts: &RenderOptions, output_png_path: impl AsRef<Path>) -> Result<()> {
        let path = output_png_path.as_ref();
        let bytes = self.render_to_png_bytes(opts)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
        std::fs::write(path, bytes).with_context(|| format!("writing {}", path.display()))?;
        Ok(())
    }
}

// ---- helpers ----------------------------------------------------------------

struct PlotRect {
    l: f32,
    t: f32,
    r: f32,
    b: f32,
    slots: usize,
}

impl PlotRect {
    fn sx(&self, slot: usize) -> f32 {
        if self.slots <= 1 {
            return (self.l + self.r) * 0.5;
        }
        self.l + slot as f32 / (self.slots - 1) as f32 * (self.r - self.l)
    }

    fn sy(&self, axis: &Axis, y: f64) -> f32 {
        self.b - ((y - axis.min) / axis.span()) as f32 * (self.b - self.t)
    }
}

fn text_paint(color: skia::Color) -> (skia::Paint, skia::Font) {
    let mut paint = skia::Paint::default();
    paint.set_color(color);
    paint.set_anti_alias(true);
    let mut font = skia::Font::default();
    font.set_size(11.0);
    (paint, font)
}

// rough advance for 11px glyphs; avoids a shaping pass per label
fn approx_width(text: &str) -> f32 {
    text.chars().count() as f32 * 6.5
}

fn draw_grid(canvas: &skia::Canvas, plot: &PlotRect, axes: &[Axis], x_ticks: &[usize], theme: &Theme) {
    let mut paint = skia::Paint::default();
    paint.set_color(theme.grid);
    paint.set_anti_alias(true);
    paint.set_stroke_width(1.0);

    for &i in x_ticks {
        let x = plot.sx(i);
        canvas.draw_line((x, plot.t), (x, plot.b), &paint);
    }
    if axes.iter().any(|a| a.grid) {
        for y in linspace(plot.t as f64, plot.b as f64, Y_TICKS) {
            canvas.draw_line((plot.l, y as f32), (plot.r, y as f32), &paint);
        }
    }
}

fn draw_axes(canvas: &skia::Canvas, plot: &PlotRect, axes: &[Axis], theme: &Theme) {
    let mut paint = skia::Paint::default();
    paint.set_color(theme.axis_line);
    paint.set_anti_alias(true);
    paint.set_stroke_width(1.5);

    canvas.draw_line((plot.l, plot.b), (plot.r, plot.b), &paint);
    for axis in axes {
        let x = match axis.side {
            AxisSide::Left => plot.l,
            AxisSide::Right => plot.r,
        };
        canvas.draw_line((x, plot.t), (x, plot.b), &paint);
    }
}

fn draw_tick_labels(
    canvas: &skia::Canvas,
    plot: &PlotRect,
    axes: &[Axis],
    categories: &[String],
    x_ticks: &[usize],
    theme: &Theme,
) {
    let (paint, font) = text_paint(theme.tick);

    for &i in x_ticks {
        if let Some(label) = categories.get(i).filter(|l| !l.is_empty()) {
            let x = plot.sx(i) - approx_width(label) * 0.5;
            canvas.draw_str(label, (x, plot.b + 16.0), &font, &paint);
        }
    }

    for axis in axes {
        for (value, y) in linspace(axis.min, axis.max, Y_TICKS)
            .into_iter()
            .zip(linspace(plot.b as f64, plot.t as f64, Y_TICKS))
        {
            let text = axis.ticks.format(value);
            let x = match axis.side {
                AxisSide::Left => plot.l - 6.0 - approx_width(&text),
                AxisSide::Right => plot.r + 6.0,
            };
            canvas.draw_str(&text, (x, y as f32 + 4.0), &font, &paint);
        }
    }
}

fn draw_line_series(canvas: &skia::Canvas, plot: &PlotRect, axis: &Axis, series: &LineSeries, span_gaps: bool) {
    let mut stroke = skia::Paint::default();
    stroke.set_anti_alias(true);
    stroke.set_style(skia::paint::Style::Stroke);
    stroke.set_stroke_width(2.0);
    stroke.set_color(series.color.to_skia());
    if let Some(dash) = series.dash.as_deref().filter(|d| d.len() >= 2) {
        stroke.set_path_effect(skia::PathEffect::dash(dash, 0.0));
    }

    let mut dot = skia::Paint::default();
    dot.set_anti_alias(true);
    dot.set_style(skia::paint::Style::Fill);
    dot.set_color(series.color.to_skia());

    for run in series.segments(span_gaps) {
        match run.as_slice() {
            [] => {}
            [(i, y)] => {
                canvas.draw_circle((plot.sx(*i), plot.sy(axis, *y)), 2.5, &dot);
            }
            [(i0, y0), rest @ ..] => {
                let mut builder = skia::PathBuilder::new();
                builder.move_to((plot.sx(*i0), plot.sy(axis, *y0)));
                for (i, y) in rest {
                    builder.line_to((plot.sx(*i), plot.sy(axis, *y)));
                }
                let path = builder.detach();
                canvas.draw_path(&path, &stroke);
            }
        }
    }
}

fn draw_legend(canvas: &skia::Canvas, series: &[LineSeries], left: f32, baseline: f32, theme: &Theme) {
    let (paint, font) = text_paint(theme.axis_label);
    let mut swatch = skia::Paint::default();
    swatch.set_style(skia::paint::Style::Fill);

    let mut x = left;
    for s in series {
        swatch.set_color(s.color.to_skia());
        canvas.draw_rect(skia::Rect::from_xywh(x, baseline - 9.0, 10.0, 10.0), &swatch);
        canvas.draw_str(&s.label, (x + 14.0, baseline), &font, &paint);
        x += 14.0 + approx_width(&s.label) + 16.0;
    }
}
