// File: crates/chart-core/src/grid.rs
// Summary: Grid/tick layout helpers.

pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    if steps < 2 { return vec![start, end]; }
    let step = (end - start) / (steps as f64 - 1.0);
    (0..steps).map(|i| start + step * i as f64).collect()
}

/// Indices of category labels to draw when at most `max_ticks` fit.
/// Keeps an even stride starting at 0, so the first label is always shown.
pub fn skip_ticks(count: usize, max_ticks: usize) -> Vec<usize> {
    if count == 0 || max_ticks == 0 { return Vec::new(); }
    let stride = count.div_ceil(max_ticks).max(1);
    (0..count).step_by(stride).collect()
}
