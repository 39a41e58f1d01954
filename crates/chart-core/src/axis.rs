// File: crates/chart-core/src/axis.rs
// Summary: Axis model: identity, side, range, grid and tick label format.

use crate::format::format_unit;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AxisSide {
    Left,
    Right,
}

/// How tick values are printed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickFormat {
    /// Up to two decimals, trailing zeros trimmed.
    Plain,
    /// SI-suffixed (`1.5k`, `23.1M`).
    Unit,
}

impl TickFormat {
    pub fn format(self, value: f64) -> String {
        match self {
            TickFormat::Plain => trim_decimals(value),
            TickFormat::Unit => format_unit(value),
        }
    }
}

pub(crate) fn trim_decimals(value: f64) -> String {
    let s = format!("{value:.2}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" { "0".to_string() } else { s.to_string() }
}

#[derive(Clone, Debug)]
pub struct Axis {
    pub id: String,
    pub min: f64,
    pub max: f64,
    pub side: AxisSide,
    /// Draw horizontal grid lines across the plot for this axis.
    pub grid: bool,
    pub ticks: TickFormat,
}

impl Axis {
    /// Value axis with an identifier series can bind to; range starts at `0..1`.
    pub fn value(id: impl Into<String>, side: AxisSide) -> Self {
        Self {
            id: id.into(),
            min: 0.0,
            max: 1.0,
            side,
            grid: true,
            ticks: TickFormat::Plain,
        }
    }

    pub fn with_ticks(mut self, ticks: TickFormat) -> Self {
        self.ticks = ticks;
        self
    }

    pub fn without_grid(mut self) -> Self {
        self.grid = false;
        self
    }

    pub fn span(&self) -> f64 {
        (self.max - self.min).max(1e-9)
    }
}
