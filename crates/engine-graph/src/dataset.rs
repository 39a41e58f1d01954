// File: crates/engine-graph/src/dataset.rs
// Summary: Per-category dataset collections: move-number labels plus sparse point series.
// Notes:
// - Serializes to the Chart.js `data` object shape (labels + datasets).
// - Sparse storage is `Vec<Option<_>>`: an unfilled index is "no point" and
//   serializes as `null`.

use serde::Serialize;

use crate::eval::EvalScore;

/// One plotted point. `y` is what is drawn; `eval`/`nodes` keep raw values for tooltips.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Point {
    /// Move number (1-based).
    pub x: u32,
    pub y: f64,
    /// Ply the point came from.
    pub ply: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eval: Option<EvalScore>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nodes: Option<f64>,
}

impl Point {
    pub fn new(x: u32, ply: u32, y: f64) -> Self {
        Self { x, y, ply, eval: None, nodes: None }
    }
}

/// One line of a category chart, with its fixed style.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Series {
    pub label: String,
    pub background_color: String,
    pub border_color: String,
    pub data: Vec<Option<Point>>,
    pub fill: bool,
    pub line_tension: f64,
    #[serde(rename = "yAxisID", skip_serializing_if = "Option::is_none")]
    pub y_axis_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_dash: Option<Vec<f32>>,
}

impl Series {
    pub fn new(label: impl Into<String>, color: impl Into<String>) -> Self {
        let color = color.into();
        Self {
            label: label.into(),
            background_color: color.clone(),
            border_color: color,
            data: Vec::new(),
            fill: false,
            line_tension: 0.0,
            y_axis_id: None,
            border_dash: None,
        }
    }

    pub fn on_axis(mut self, id: impl Into<String>) -> Self {
        self.y_axis_id = Some(id.into());
        self
    }

    pub fn dashed(mut self, pattern: Vec<f32>) -> Self {
        self.border_dash = Some(pattern);
        self
    }

    pub fn point(&self, index: usize) -> Option<&Point> {
        self.data.get(index).and_then(Option::as_ref)
    }

    /// Store (or clear, with `None`) the point at `index`, growing with gaps as needed.
    pub fn set_point(&mut self, index: usize, point: Option<Point>) {
        if index >= self.data.len() {
            if point.is_none() {
                return;
            }
            self.data.resize(index + 1, None);
        }
        self.data[index] = point;
    }

    /// Number of present points.
    pub fn point_count(&self) -> usize {
        self.data.iter().flatten().count()
    }

    pub fn clear(&mut self) {
        self.data.clear();
    }
}

/// Labels and series of one category chart.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct DatasetCollection {
    /// Move number per slot; `None` is an empty tick.
    pub labels: Vec<Option<u32>>,
    #[serde(rename = "datasets")]
    pub series: Vec<Series>,
}

impl DatasetCollection {
    pub fn new(series: Vec<Series>) -> Self {
        Self { labels: Vec::new(), series }
    }

    pub fn label(&self, index: usize) -> Option<u32> {
        self.labels.get(index).copied().flatten()
    }

    /// Label slot `index` with its move number (`index + 1`).
    pub fn set_label(&mut self, index: usize) {
        if index >= self.labels.len() {
            self.labels.resize(index + 1, None);
        }
        self.labels[index] = Some(index as u32 + 1);
    }

    /// Fill empty label slots from `index` down to 0, stopping at the first filled one.
    pub fn backfill_labels(&mut self, index: usize) {
        for i in (0..=index).rev() {
            if self.label(i).is_some() {
                break;
            }
            self.set_label(i);
        }
    }

    /// True when every slot in `0..=index` carries a label.
    pub fn labels_filled_through(&self, index: usize) -> bool {
        (0..=index).all(|i| self.label(i).is_some())
    }

    pub fn series(&self, index: usize) -> Option<&Series> {
        self.series.get(index)
    }

    pub fn series_mut(&mut self, index: usize) -> Option<&mut Series> {
        self.series.get_mut(index)
    }

    /// Empty labels and every series, keeping the series definitions.
    pub fn clear(&mut self) {
        self.labels.clear();
        for s in &mut self.series {
            s.clear();
        }
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty() && self.series.iter().all(|s| s.data.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collection() -> DatasetCollection {
        DatasetCollection::new(vec![Series::new("White", "#efefef"), Series::new("Black", "#000000")])
    }

    #[test]
    fn backfill_stops_at_filled_slot() {
        let mut data = collection();
        data.set_label(1);
        data.backfill_labels(4);
        assert_eq!(data.labels, vec![None, Some(2), Some(3), Some(4), Some(5)]);

        data.backfill_labels(0);
        assert!(data.labels_filled_through(4));
        assert_eq!(data.label(0), Some(1));
    }

    #[test]
    fn set_point_grows_with_gaps() {
        let mut s = Series::new("White", "#efefef");
        s.set_point(3, Some(Point::new(4, 6, 1.0)));
        assert_eq!(s.data.len(), 4);
        assert!(s.point(0).is_none());
        assert_eq!(s.point(3).map(|p| p.x), Some(4));
        assert_eq!(s.point_count(), 1);

        // clearing past the end is a no-op
        s.set_point(9, None);
        assert_eq!(s.data.len(), 4);
        s.set_point(3, None);
        assert_eq!(s.point_count(), 0);
    }

    #[test]
    fn clear_keeps_series() {
        let mut data = collection();
        data.backfill_labels(2);
        data.series[0].set_point(2, Some(Point::new(3, 4, 0.5)));
        data.clear();
        assert!(data.is_empty());
        assert_eq!(data.series.len(), 2);
        assert_eq!(data.series[1].label, "Black");
    }

    #[test]
    fn serializes_to_chartjs_shape() {
        let mut data = collection();
        data.series[1] = Series::new("Black", "#000000").on_axis("y-axis-2").dashed(vec![10.0, 5.0]);
        data.backfill_labels(1);
        data.series[0].set_point(1, Some(Point::new(2, 2, 0.4)));

        let json = serde_json::to_value(&data).unwrap();
        assert_eq!(json["labels"], serde_json::json!([1, 2]));
        let white = &json["datasets"][0];
        assert_eq!(white["borderColor"], "#efefef");
        assert_eq!(white["lineTension"], 0.0);
        assert_eq!(white["fill"], false);
        assert!(white["data"][0].is_null());
        assert_eq!(white["data"][1]["x"], 2);
        assert!(white.get("yAxisID").is_none());
        assert_eq!(json["datasets"][1]["yAxisID"], "y-axis-2");
        assert_eq!(json["datasets"][1]["borderDash"], serde_json::json!([10.0, 5.0]));
    }
}
