use crate::models::{DropRejection, Item};

use super::DispatchResult;

impl super::Store {
    pub(super) fn reduce_move_item(
        &mut self,
        source_item_id: &str,
        target_item_id: Option<&str>,
        target_column_index: Option<usize>,
    ) -> DispatchResult {
        let layout = &self.state.layout;

        let Some(source_column) = layout.get_item_column_index(source_item_id) else {
            tracing::warn!(source_item_id, "move: unknown source item");
            return DispatchResult::unchanged();
        };

        let target_column = match target_item_id {
            Some(target_id) => match layout.get_item_column_index(target_id) {
                Some(index) => Some(target_column_index.unwrap_or(index)),
                None => {
                    tracing::warn!(target_id, "move: unknown target item");
                    return DispatchResult::unchanged();
                }
            },
            None => target_column_index,
        };

        if let Err(rejection) = layout.check_drop(source_item_id, target_item_id, target_column) {
            tracing::warn!(source_item_id, %rejection, "move rejected");
            return DispatchResult::rejected(rejection);
        }

        // Children of a collapsed item are not in the layout, so the store has
        // nowhere to put the source.
        let target_collapsed = target_item_id
            .and_then(|target_id| layout.get_item(target_id))
            .is_some_and(|target| !target.active);
        if target_collapsed {
            let rejection = DropRejection::OntoCollapsedItem;
            tracing::warn!(source_item_id, %rejection, "move rejected");
            return DispatchResult::rejected(rejection);
        }

        let Some(source) = layout.get_item(source_item_id) else {
            return DispatchResult::unchanged();
        };
        let moved: Item = source.clone().with_active(false);
        let source_was_expanded = source.active;

        let mut next = layout.remove_item(source_item_id);
        if source_was_expanded {
            next = next.clear_following_columns(source_column);
        }

        let next = match target_item_id {
            Some(target_id) => {
                let Some(target_index) = next.get_item_column_index(target_id) else {
                    return DispatchResult::unchanged();
                };
                let child_index = target_index + 1;
                let column = next.column(child_index).cloned().unwrap_or_default();
                next.with_column(child_index, column.with_pushed(moved))
            }
            None => {
                let Some(column_index) = target_column else {
                    return DispatchResult::unchanged();
                };
                match next.append_item_to_column(moved, column_index) {
                    Ok(layout) => layout,
                    Err(err) => {
                        tracing::warn!(error = %err, "move: bad target column");
                        return DispatchResult::unchanged();
                    }
                }
            }
        };

        self.commit(next)
    }
}
