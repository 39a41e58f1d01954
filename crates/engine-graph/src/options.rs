// File: crates/engine-graph/src/options.rs
// Summary: Per-category series table and chart options (axes, legend, tooltips).

use chart_core::{format_clock, format_unit, TickFormat};

use crate::category::Category;
use crate::config::GraphConfig;
use crate::dataset::{DatasetCollection, Point, Series};

const DASH: [f32; 2] = [10.0, 5.0];

/// Dataset collection for `category`: empty labels, styled but empty series.
pub fn new_collection(category: Category, config: &GraphConfig) -> DatasetCollection {
    let white = config.color_white.as_str();
    let black = config.color_black.as_str();
    let series = match category {
        Category::Depth => vec![
            Series::new("White Depth", white),
            Series::new("Black Depth", "#1a1a1a").dashed(DASH.to_vec()),
            Series::new("W. Sel Depth", "#b1b1b1"),
            Series::new("B. Sel Depth", "#7e7e7e").dashed(DASH.to_vec()),
        ],
        Category::Eval => config.engines().map(|(name, color)| Series::new(name, color)).collect(),
        Category::Node | Category::Speed => vec![
            Series::new("White Speeds", white).on_axis("y-axis-1"),
            Series::new("Black Speed", black).on_axis("y-axis-2"),
        ],
        Category::Tb => vec![
            Series::new("White TB Hits", white).on_axis("tb-y-axis-1"),
            Series::new("Black TB Hits", black).on_axis("tb-y-axis-2"),
        ],
        Category::Time => vec![Series::new("White Time", white), Series::new("Black Time", black)],
    };
    DatasetCollection::new(series)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

#[derive(Clone, Debug, PartialEq)]
pub struct AxisOptions {
    pub id: &'static str,
    pub side: Side,
    /// Ticks printed with SI suffixes.
    pub unit_ticks: bool,
    /// Grid lines drawn across the chart area.
    pub grid: bool,
}

impl AxisOptions {
    const fn left(id: &'static str) -> Self {
        Self { id, side: Side::Left, unit_ticks: false, grid: true }
    }

    /// Left/right pair for two-scale charts; only the left one grids the plot.
    fn dual(left: &'static str, right: &'static str) -> Vec<Self> {
        vec![
            Self { id: left, side: Side::Left, unit_ticks: true, grid: true },
            Self { id: right, side: Side::Right, unit_ticks: true, grid: false },
        ]
    }
}

/// What the hover text shows for a point.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tooltip {
    /// The plotted value.
    Value,
    Nodes,
    SpeedWithNodes,
    Hits,
    Clock,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ChartOptions {
    pub canvas_id: String,
    pub y_axes: Vec<AxisOptions>,
    /// Legend at the bottom of the chart.
    pub legend: bool,
    pub span_gaps: bool,
    pub max_x_ticks: usize,
    pub tooltip: Tooltip,
    pub background: Option<&'static str>,
}

impl ChartOptions {
    pub fn for_category(category: Category, config: &GraphConfig) -> Self {
        let (y_axes, tooltip) = match category {
            Category::Depth => (vec![AxisOptions::left("d-y-axis-1")], Tooltip::Value),
            Category::Eval => (vec![AxisOptions::left("e-y-axis-1")], Tooltip::Value),
            Category::Node => (AxisOptions::dual("y-axis-1", "y-axis-2"), Tooltip::Nodes),
            Category::Speed => (AxisOptions::dual("y-axis-1", "y-axis-2"), Tooltip::SpeedWithNodes),
            Category::Tb => (AxisOptions::dual("tb-y-axis-1", "tb-y-axis-2"), Tooltip::Hits),
            Category::Time => (vec![AxisOptions::left("t-y-axis-1")], Tooltip::Clock),
        };
        Self {
            canvas_id: category.canvas_id(),
            y_axes,
            legend: matches!(category, Category::Depth | Category::Eval),
            span_gaps: category == Category::Eval,
            max_x_ticks: config.max_x_ticks,
            tooltip,
            background: (category == Category::Time).then_some("rgb(10,10,10)"),
        }
    }

    /// Hover text for `point`.
    pub fn tooltip_label(&self, point: &Point) -> String {
        match self.tooltip {
            Tooltip::Value => match &point.eval {
                Some(raw) => raw.to_string(),
                None => TickFormat::Plain.format(point.y),
            },
            Tooltip::Nodes => format_unit(point.nodes.unwrap_or(point.y)),
            Tooltip::SpeedWithNodes => {
                let nodes = point.nodes.map(format_unit).unwrap_or_else(|| "-".to_string());
                format!("{}nps ({} nodes)", format_unit(point.y), nodes)
            }
            Tooltip::Hits => format_unit(point.y),
            Tooltip::Clock => format_clock(point.y),
        }
    }
}
