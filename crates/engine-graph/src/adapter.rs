// File: crates/engine-graph/src/adapter.rs
// Summary: GraphAdapter: owns the per-category dataset collections and chart views,
// applies batch and live updates, and resets charts.

use std::collections::BTreeMap;

use tracing::{debug, trace, warn};

use crate::category::Category;
use crate::config::GraphConfig;
use crate::dataset::{DatasetCollection, Point};
use crate::error::GraphResult;
use crate::eval::clamp_eval;
use crate::moves::MoveRecord;
use crate::options::{new_collection, ChartOptions};
use crate::view::{ChartBackend, ChartView};

/// Highest ply the charts accept. Slots are stored densely, so plies past
/// this are ignored instead of growing every series to match.
pub const MAX_PLY: u32 = 12_000;

/// Chart data adapter for one board.
///
/// Lifecycle: [`initialize_categories`](Self::initialize_categories) builds the
/// collections, [`ensure_chart_views`](Self::ensure_chart_views) binds one view
/// per category, then updates mutate the collections in place and redraw the
/// affected view. Updates addressed to a category that has no collection (or
/// no view) yet are silently skipped.
pub struct GraphAdapter<B: ChartBackend> {
    config: GraphConfig,
    backend: B,
    data: BTreeMap<Category, DatasetCollection>,
    views: BTreeMap<Category, B::View>,
    active: Category,
}

impl<B: ChartBackend> GraphAdapter<B> {
    pub fn new(config: GraphConfig, backend: B) -> Self {
        Self {
            config,
            backend,
            data: BTreeMap::new(),
            views: BTreeMap::new(),
            active: Category::Eval,
        }
    }

    pub fn config(&self) -> &GraphConfig {
        &self.config
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Category used by batch updates that do not name one.
    pub fn active_category(&self) -> Category {
        self.active
    }

    pub fn set_active_category(&mut self, category: Category) {
        self.active = category;
    }

    pub fn dataset(&self, category: Category) -> Option<&DatasetCollection> {
        self.data.get(&category)
    }

    pub fn view(&self, category: Category) -> Option<&B::View> {
        self.views.get(&category)
    }

    /// Build (or rebuild) every category's collection: empty labels, styled empty series.
    pub fn initialize_categories(&mut self) {
        for category in Category::ALL {
            self.data.insert(category, new_collection(category, &self.config));
        }
        debug!(categories = self.data.len(), "chart data created");
    }

    /// Create the view of every category that has a collection but no view yet.
    /// Existing views, and the data they show, are left alone.
    pub fn ensure_chart_views(&mut self) {
        for (&category, data) in &self.data {
            if self.views.contains_key(&category) {
                continue;
            }
            let options = ChartOptions::for_category(category, &self.config);
            let view = self.backend.create_view(category, &options, data);
            self.views.insert(category, view);
            debug!(%category, canvas = %options.canvas_id, "chart view created");
        }
    }

    /// Post-load startup: build data and views, then plot `moves` from ply 0
    /// into the active category.
    pub fn init(&mut self, moves: &[Option<MoveRecord>]) {
        self.initialize_categories();
        self.ensure_chart_views();
        self.apply_move_batch(None, moves, 0);
    }

    /// Empty one category's labels and points, then redraw its view.
    /// No-op when the category has no view yet.
    pub fn reset_one(&mut self, category: Category) {
        let Some(view) = self.views.get_mut(&category) else { return };
        let Some(data) = self.data.get_mut(&category) else { return };
        data.clear();
        view.redraw(data);
        debug!(%category, "chart reset");
    }

    pub fn reset_all(&mut self) {
        for category in Category::ALL {
            self.reset_one(category);
        }
    }

    /// Plot one live evaluation on the eval chart.
    ///
    /// `series_index` picks the line: 0 white, 1 black, 2.. extra engines.
    /// Live plies count from 1, so ply `p` lands in move slot `(p - 1) / 2`.
    pub fn apply_live_update(&mut self, mv: &MoveRecord, series_index: usize) {
        let max_eval = self.config.max_eval;
        let Some(data) = self.data.get_mut(&Category::Eval) else { return };
        if series_index >= data.series.len() {
            warn!(series_index, series = data.series.len(), "live update for unknown eval series ignored");
            return;
        }
        let Some(ply) = mv.ply.checked_sub(1) else {
            warn!("live update without a ply ignored");
            return;
        };
        if mv.ply > MAX_PLY {
            warn!(ply = mv.ply, max = MAX_PLY, "live update past the last chartable ply ignored");
            return;
        }
        let num = (ply / 2) as usize;

        data.backfill_labels(num);
        let point = Point {
            eval: mv.eval.clone(),
            ..Point::new(num as u32 + 1, ply, clamp_eval(mv.eval.as_ref(), max_eval))
        };
        trace!(series_index, num, y = point.y, "live eval point");
        if let Some(series) = data.series_mut(series_index) {
            series.set_point(num, Some(point));
        }

        if let Some(view) = self.views.get_mut(&Category::Eval) {
            view.redraw(data);
        }
    }

    /// Plot a run of moves (white and black alternating) starting at `start_ply`.
    ///
    /// A given `category` becomes the active one; `None` keeps the current.
    /// Every move labels its slot; absent and book moves plot nothing. Points
    /// already present in the range are overwritten. Plies past [`MAX_PLY`] are dropped.
    pub fn apply_move_batch(&mut self, category: Option<Category>, moves: &[Option<MoveRecord>], start_ply: u32) {
        if let Some(category) = category {
            self.active = category;
        }
        let category = self.active;
        let max_eval = self.config.max_eval;
        let Some(data) = self.data.get_mut(&category) else { return };
        if start_ply > MAX_PLY {
            warn!(start_ply, max = MAX_PLY, "batch past the last chartable ply ignored");
            return;
        }

        data.backfill_labels((start_ply / 2) as usize);

        let mut plotted = 0usize;
        for (ply, mv) in (start_ply..=MAX_PLY).zip(moves) {
            let num = (ply / 2) as usize;
            data.set_label(num);
            let Some(mv) = mv.as_ref().filter(|m| !m.book) else { continue };

            let shaped = category.shape(mv, num, ply, max_eval);
            if let Some(idx) = category.secondary_series(ply) {
                if let Some(series) = data.series_mut(idx) {
                    series.set_point(num, shaped.secondary);
                }
            }
            if let Some(series) = data.series_mut((ply % 2) as usize) {
                series.set_point(num, shaped.primary);
            }
            plotted += 1;
        }
        let chartable = (MAX_PLY - start_ply) as usize + 1;
        if moves.len() > chartable {
            warn!(%category, dropped = moves.len() - chartable, max = MAX_PLY, "moves past the last chartable ply ignored");
        }
        trace!(%category, start_ply, moves = moves.len(), plotted, "batch applied");

        if let Some(view) = self.views.get_mut(&category) {
            view.redraw(data);
        }
    }

    /// The category's collection as Chart.js `data` JSON, if it exists.
    pub fn export_json(&self, category: Category) -> GraphResult<Option<String>> {
        self.data
            .get(&category)
            .map(|data| serde_json::to_string_pretty(data).map_err(Into::into))
            .transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::HeadlessBackend;

    fn adapter() -> GraphAdapter<HeadlessBackend> {
        let mut a = GraphAdapter::new(GraphConfig::default(), HeadlessBackend);
        a.initialize_categories();
        a.ensure_chart_views();
        a
    }

    #[test]
    fn updates_before_initialization_are_noops() {
        let mut a = GraphAdapter::new(GraphConfig::default(), HeadlessBackend);
        a.apply_live_update(&MoveRecord::new(3).with_eval(1.0), 0);
        a.apply_move_batch(Some(Category::Node), &[Some(MoveRecord::new(0))], 0);
        a.reset_all();
        assert!(a.dataset(Category::Eval).is_none());
        assert_eq!(a.active_category(), Category::Node);
        assert_eq!(a.export_json(Category::Eval).unwrap(), None);
    }

    #[test]
    fn data_without_views_is_updated_but_not_drawn() {
        let mut a = GraphAdapter::new(GraphConfig::default(), HeadlessBackend);
        a.initialize_categories();
        a.apply_move_batch(Some(Category::Eval), &[Some(MoveRecord::new(0).with_eval(0.5))], 0);
        assert_eq!(a.dataset(Category::Eval).unwrap().series[0].point_count(), 1);
        assert!(a.view(Category::Eval).is_none());

        // reset needs a bound view
        a.reset_one(Category::Eval);
        assert_eq!(a.dataset(Category::Eval).unwrap().series[0].point_count(), 1);
    }

    #[test]
    fn live_update_rejects_unknown_series_and_ply_zero() {
        let mut a = adapter();
        a.apply_live_update(&MoveRecord::new(5).with_eval(1.0), 9);
        a.apply_live_update(&MoveRecord::new(0).with_eval(1.0), 0);
        let eval = a.dataset(Category::Eval).unwrap();
        assert!(eval.labels.is_empty());
        assert_eq!(a.view(Category::Eval).unwrap().redraws, 0);
    }

    #[test]
    fn plies_past_the_limit_do_not_grow_storage() {
        let mut a = adapter();
        a.apply_live_update(&MoveRecord::new(400_000_001).with_eval(1.0), 0);
        a.apply_live_update(&MoveRecord::new(u32::MAX).with_eval(1.0), 1);
        a.apply_move_batch(Some(Category::Eval), &[Some(MoveRecord::new(0).with_eval(0.5))], u32::MAX);
        let eval = a.dataset(Category::Eval).unwrap();
        assert!(eval.is_empty());
        assert_eq!(a.view(Category::Eval).unwrap().redraws, 0);

        // the last chartable ply still lands, the one after it is dropped
        let moves = vec![Some(MoveRecord::new(0).with_eval(0.5)); 3];
        a.apply_move_batch(None, &moves, MAX_PLY - 1);
        let eval = a.dataset(Category::Eval).unwrap();
        assert_eq!(eval.labels.len(), (MAX_PLY / 2) as usize + 1);
        assert_eq!(eval.series[0].point_count() + eval.series[1].point_count(), 2);

        a.apply_live_update(&MoveRecord::new(MAX_PLY).with_eval(1.0), 2);
        assert!(a.dataset(Category::Eval).unwrap().series[2].point(((MAX_PLY - 1) / 2) as usize).is_some());
    }

    #[test]
    fn batch_redraws_only_active_view() {
        let mut a = adapter();
        a.apply_move_batch(Some(Category::Time), &[Some(MoveRecord { time_ms: Some(2_000.0), ..MoveRecord::new(0) })], 0);
        assert_eq!(a.view(Category::Time).unwrap().redraws, 1);
        assert_eq!(a.view(Category::Eval).unwrap().redraws, 0);
    }

    #[test]
    fn export_is_chartjs_data() {
        let mut a = adapter();
        a.apply_move_batch(Some(Category::Eval), &[Some(MoveRecord::new(0).with_eval("M5"))], 0);
        let json = a.export_json(Category::Eval).unwrap().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["labels"][0], 1);
        assert_eq!(value["datasets"][0]["data"][0]["y"], 10.0);
        assert_eq!(value["datasets"][0]["data"][0]["eval"], "M5");
        assert_eq!(value["datasets"].as_array().map(Vec::len), Some(4));
    }
}
