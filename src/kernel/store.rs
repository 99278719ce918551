use crate::models::{Column, DropRejection, Layout};

use super::{Action, LayoutState};

mod drag_drop;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchResult {
    pub state_changed: bool,
    pub rejection: Option<DropRejection>,
}

impl DispatchResult {
    fn unchanged() -> Self {
        Self {
            state_changed: false,
            rejection: None,
        }
    }

    fn rejected(rejection: DropRejection) -> Self {
        Self {
            state_changed: false,
            rejection: Some(rejection),
        }
    }
}

pub struct Store {
    state: LayoutState,
}

impl Store {
    pub fn new(state: LayoutState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &LayoutState {
        &self.state
    }

    pub fn layout(&self) -> &Layout {
        &self.state.layout
    }

    pub fn dispatch(&mut self, action: Action) -> DispatchResult {
        tracing::debug!(?action, "dispatch");
        match action {
            Action::ExpandItem { item_id, children } => {
                let Some(column_index) = self.state.layout.get_item_column_index(&item_id) else {
                    tracing::warn!(item_id = %item_id, "expand: unknown item");
                    return DispatchResult::unchanged();
                };
                let next = match self.state.layout.activate_item(&item_id) {
                    Ok(layout) => layout,
                    Err(err) => {
                        tracing::warn!(error = %err, "expand failed");
                        return DispatchResult::unchanged();
                    }
                };
                let next = next
                    .clear_following_columns(column_index)
                    .with_column(column_index + 1, Column::new(children));
                self.commit_validated(next)
            }
            Action::CollapseItem { item_id } => {
                let Some(column_index) = self.state.layout.get_item_column_index(&item_id) else {
                    tracing::warn!(item_id = %item_id, "collapse: unknown item");
                    return DispatchResult::unchanged();
                };
                let next = match self.state.layout.deactivate_item(&item_id) {
                    Ok(layout) => layout.clear_following_columns(column_index),
                    Err(err) => {
                        tracing::warn!(error = %err, "collapse failed");
                        return DispatchResult::unchanged();
                    }
                };
                self.commit(next)
            }
            Action::AppendItem { item, column_index } => {
                match self.state.layout.append_item_to_column(item, column_index) {
                    Ok(next) => self.commit_validated(next),
                    Err(err) => {
                        tracing::warn!(error = %err, "append ignored");
                        DispatchResult::unchanged()
                    }
                }
            }
            Action::RemoveItem { item_id } => {
                let Some(column_index) = self.state.layout.get_item_column_index(&item_id) else {
                    return DispatchResult::unchanged();
                };
                let mut next = self.state.layout.remove_item(&item_id);
                // An expanded item takes its visible subtree with it.
                if self.state.layout.column_is_item_child(column_index + 1, &item_id) {
                    next = next.clear_following_columns(column_index);
                }
                self.commit(next)
            }
            Action::MoveItem {
                source_item_id,
                target_item_id,
                target_column_index,
            } => self.reduce_move_item(
                &source_item_id,
                target_item_id.as_deref(),
                target_column_index,
            ),
        }
    }

    /// Commits a layout that received items from outside the store, refusing
    /// it when an incoming id collides with one already shown.
    fn commit_validated(&mut self, next: Layout) -> DispatchResult {
        if let Err(err) = next.validate() {
            tracing::warn!(error = %err, "action would break layout invariants");
            return DispatchResult::unchanged();
        }
        self.commit(next)
    }

    fn commit(&mut self, next: Layout) -> DispatchResult {
        let next = self.state.pruned(next);
        let state_changed = next != self.state.layout;
        self.state.layout = next;
        DispatchResult {
            state_changed,
            rejection: None,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/store.rs"]
mod tests;
