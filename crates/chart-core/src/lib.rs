// File: crates/chart-core/src/lib.rs
// Summary: Core library entry point; exports the line-chart model and its Skia renderer.

pub mod chart;
pub mod series;
pub mod axis;
pub mod grid;
pub mod types;
pub mod theme;
pub mod format;
pub mod error;

pub use chart::{Chart, RenderOptions};
pub use series::LineSeries;
pub use axis::{Axis, AxisSide, TickFormat};
pub use theme::Theme;
pub use types::{Insets, Rgba};
pub use format::{format_clock, format_unit};
pub use error::RenderError;
