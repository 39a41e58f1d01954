// File: crates/engine-graph/src/skia_view.rs
// Summary: Chart backend drawing category charts with chart-core's Skia raster renderer.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chart_core::{Axis, AxisSide, Chart, LineSeries, RenderOptions, Rgba, TickFormat};
use tracing::{debug, warn};

use crate::category::Category;
use crate::dataset::DatasetCollection;
use crate::options::{ChartOptions, Side};
use crate::view::{ChartBackend, ChartView};

/// Renders every redraw to PNG; optionally mirrors frames to `<out_dir>/<canvas id>.png`.
#[derive(Clone, Debug, Default)]
pub struct SkiaBackend {
    pub render: RenderOptions,
    pub out_dir: Option<PathBuf>,
}

impl SkiaBackend {
    pub fn new(render: RenderOptions) -> Self {
        Self { render, out_dir: None }
    }

    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.out_dir = Some(dir.into());
        self
    }
}

impl ChartBackend for SkiaBackend {
    type View = SkiaChartView;

    fn create_view(&mut self, category: Category, options: &ChartOptions, _data: &DatasetCollection) -> SkiaChartView {
        let out_path = self.out_dir.as_ref().map(|dir| dir.join(format!("{}.png", options.canvas_id)));
        debug!(%category, out = ?out_path, "creating skia chart view");
        SkiaChartView {
            category,
            options: options.clone(),
            render: self.render.clone(),
            out_path,
            frame: None,
            redraws: 0,
        }
    }
}

pub struct SkiaChartView {
    category: Category,
    options: ChartOptions,
    render: RenderOptions,
    out_path: Option<PathBuf>,
    frame: Option<Vec<u8>>,
    redraws: usize,
}

impl SkiaChartView {
    /// PNG bytes of the latest successful redraw.
    pub fn frame(&self) -> Option<&[u8]> {
        self.frame.as_deref()
    }

    pub fn redraws(&self) -> usize {
        self.redraws
    }

    pub fn out_path(&self) -> Option<&Path> {
        self.out_path.as_deref()
    }
}

impl ChartView for SkiaChartView {
    fn redraw(&mut self, data: &DatasetCollection) {
        self.redraws += 1;
        let chart = build_chart(&self.options, data);
        match chart.render_to_png_bytes(&self.render) {
            Ok(bytes) => {
                if let Some(path) = &self.out_path {
                    if let Err(err) = write_frame(path, &bytes) {
                        warn!(category = %self.category, error = %format!("{err:#}"), "could not save chart frame");
                    }
                }
                self.frame = Some(bytes);
            }
            Err(err) => warn!(category = %self.category, error = %err, "chart render failed"),
        }
    }
}

fn write_frame(path: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).with_context(|| format!("creating {}", parent.display()))?;
    }
    std::fs::write(path, bytes).with_context(|| format!("writing {}", path.display()))
}

fn parse_color(text: &str) -> Rgba {
    text.parse().unwrap_or_else(|err| {
        warn!(error = %err, "using gray");
        Rgba::GRAY
    })
}

/// Build the chart-core chart for a category collection: one slot per label,
/// one line per series, axes per the category options, y ranges fitted.
pub fn build_chart(options: &ChartOptions, data: &DatasetCollection) -> Chart {
    let mut chart = Chart::new();
    chart.categories = data
        .labels
        .iter()
        .map(|l| l.map(|n| n.to_string()).unwrap_or_default())
        .collect();
    chart.y_axes = options
        .y_axes
        .iter()
        .map(|a| {
            let side = match a.side {
                Side::Left => AxisSide::Left,
                Side::Right => AxisSide::Right,
            };
            let mut axis = Axis::value(a.id, side);
            if a.unit_ticks {
                axis = axis.with_ticks(TickFormat::Unit);
            }
            if !a.grid {
                axis = axis.without_grid();
            }
            axis
        })
        .collect();
    chart.legend = options.legend;
    chart.span_gaps = options.span_gaps;
    chart.max_x_ticks = options.max_x_ticks;
    chart.background = options.background.map(parse_color);

    for s in &data.series {
        let values = s.data.iter().map(|p| p.as_ref().map(|p| p.y)).collect();
        let mut line = LineSeries::new(&s.label, parse_color(&s.border_color)).with_values(values);
        if let Some(id) = &s.y_axis_id {
            line = line.on_axis(id.clone());
        }
        if let Some(dash) = &s.border_dash {
            line = line.with_dash(dash.clone());
        }
        chart.add_series(line);
    }
    chart.autoscale();
    chart
}
