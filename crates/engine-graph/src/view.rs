// File: crates/engine-graph/src/view.rs
// Summary: Chart view seam: backends create one view per category, views redraw from their collection.

use tracing::trace;

use crate::category::Category;
use crate::dataset::DatasetCollection;
use crate::options::ChartOptions;

/// A drawn chart bound to one category's dataset collection.
pub trait ChartView {
    /// Redraw from the current contents of the bound collection.
    /// Failures are the view's business; nothing is reported upward.
    fn redraw(&mut self, data: &DatasetCollection);
}

/// Creates chart views, the way a charting library instantiates charts on canvases.
pub trait ChartBackend {
    type View: ChartView;

    fn create_view(&mut self, category: Category, options: &ChartOptions, data: &DatasetCollection) -> Self::View;
}

/// Backend without drawing: views only count redraws. For JSON export and tests.
#[derive(Clone, Copy, Debug, Default)]
pub struct HeadlessBackend;

#[derive(Clone, Debug)]
pub struct HeadlessView {
    pub category: Category,
    pub options: ChartOptions,
    pub redraws: usize,
}

impl ChartView for HeadlessView {
    fn redraw(&mut self, data: &DatasetCollection) {
        self.redraws += 1;
        trace!(category = %self.category, labels = data.labels.len(), redraws = self.redraws, "headless redraw");
    }
}

impl ChartBackend for HeadlessBackend {
    type View = HeadlessView;

    fn create_view(&mut self, category: Category, options: &ChartOptions, _data: &DatasetCollection) -> HeadlessView {
        HeadlessView { category, options: options.clone(), redraws: 0 }
    }
}
