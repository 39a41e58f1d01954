// File: crates/chart-core/src/series.rs
// Summary: Line series over category slots, with per-series color, dash and axis binding.

use crate::types::Rgba;

/// One line of a chart. `values[i]` is the y value at category slot `i`;
/// `None` is a gap.
#[derive(Clone, Debug)]
pub struct LineSeries {
    pub label: String,
    pub color: Rgba,
    /// Dash pattern in pixels (on, off, ...). Solid when `None`.
    pub dash: Option<Vec<f32>>,
    /// Identifier of the y axis this series is plotted against; the first axis when `None`.
    pub axis_id: Option<String>,
    pub values: Vec<Option<f64>>,
}

impl LineSeries {
    pub fn new(label: impl Into<String>, color: Rgba) -> Self {
        Self { label: label.into(), color, dash: None, axis_id: None, values: Vec::new() }
    }

    pub fn with_values(mut self, values: Vec<Option<f64>>) -> Self {
        self.values = values;
        self
    }

    pub fn with_dash(mut self, dash: Vec<f32>) -> Self {
        self.dash = Some(dash);
        self
    }

    pub fn on_axis(mut self, id: impl Into<String>) -> Self {
        self.axis_id = Some(id.into());
        self
    }

    /// Present (slot, value) pairs, skipping gaps and non-finite values.
    pub fn points(&self) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.values
            .iter()
            .enumerate()
            .filter_map(|(i, v)| v.filter(|y| y.is_finite()).map(|y| (i, y)))
    }

    /// Runs of consecutive present points. With `span_gaps` every point lands in one run.
    pub fn segments(&self, span_gaps: bool) -> Vec<Vec<(usize, f64)>> {
        let mut runs: Vec<Vec<(usize, f64)>> = Vec::new();
        let mut last: Option<usize> = None;
        for (i, y) in self.points() {
            let contiguous = matches!(last, Some(prev) if prev + 1 == i);
            match runs.last_mut() {
                Some(run) if span_gaps || contiguous => run.push((i, y)),
                _ => runs.push(vec![(i, y)]),
            }
            last = Some(i);
        }
        runs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series(values: Vec<Option<f64>>) -> LineSeries {
        LineSeries::new("s", Rgba::GRAY).with_values(values)
    }

    #[test]
    fn gaps_split_segments() {
        let s = series(vec![Some(1.0), Some(2.0), None, Some(3.0)]);
        let runs = s.segments(false);
        assert_eq!(runs.len(), 2);
        assert_eq!(runs[0], vec![(0, 1.0), (1, 2.0)]);
        assert_eq!(runs[1], vec![(3, 3.0)]);
    }

    #[test]
    fn span_gaps_joins_segments() {
        let s = series(vec![None, Some(2.0), None, Some(3.0)]);
        assert_eq!(s.segments(true), vec![vec![(1, 2.0), (3, 3.0)]]);
    }
}
