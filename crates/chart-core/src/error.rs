// File: crates/chart-core/src/error.rs
// Summary: Error type for color parsing and raster rendering.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("invalid color '{0}'")]
    InvalidColor(String),
    #[error("failed to create {width}x{height} raster surface")]
    Surface { width: i32, height: i32 },
    #[error("encode PNG failed")]
    Encode,
}
