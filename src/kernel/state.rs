use crate::kernel::services::ports::Settings;
use crate::models::Layout;

#[derive(Debug, Clone, PartialEq)]
pub struct LayoutState {
    pub layout: Layout,
    pub min_columns: usize,
}

impl LayoutState {
    pub fn new(layout: Layout, settings: &Settings) -> Self {
        Self {
            layout,
            min_columns: settings.min_columns,
        }
    }

    /// Drops trailing empty columns beyond the configured minimum width.
    pub fn pruned(&self, layout: Layout) -> Layout {
        layout.delete_empty_columns_keeping(self.min_columns)
    }
}
