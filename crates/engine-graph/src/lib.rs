// File: crates/engine-graph/src/lib.rs
// Summary: Engine analysis graphs: shapes move/analysis records into per-category
// line-chart datasets (eval, time, speed, node, depth, tb) and keeps chart views in sync.

pub mod adapter;
pub mod category;
pub mod config;
pub mod dataset;
pub mod error;
pub mod eval;
pub mod moves;
pub mod options;
pub mod shape;
pub mod skia_view;
pub mod view;

pub use adapter::{GraphAdapter, MAX_PLY};
pub use category::Category;
pub use config::GraphConfig;
pub use dataset::{DatasetCollection, Point, Series};
pub use error::{GraphError, GraphResult};
pub use eval::{clamp_eval, EvalScore, MAX_EVAL};
pub use moves::{load_moves, parse_moves, MoveRecord};
pub use options::ChartOptions;
pub use skia_view::{SkiaBackend, SkiaChartView};
pub use view::{ChartBackend, ChartView, HeadlessBackend, HeadlessView};
