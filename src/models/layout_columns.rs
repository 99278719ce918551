//! Column operations over a [`Layout`].
//!
//! Every operation leaves `self` untouched. Transforms build a new layout in
//! which only the columns that actually change are reallocated; the rest are
//! shared with the input.

use super::layout::{Column, Item, Layout, LayoutError};
use std::fmt;

/// Columns below this index are kept even when empty.
pub const MIN_COLUMNS: usize = 3;

/// Why a drag-and-drop move was refused.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum DropRejection {
    MissingTarget,
    OntoItself,
    IntoOwnDescendant,
    /// The target item is collapsed; its children are not loaded.
    OntoCollapsedItem,
}

impl DropRejection {
    pub fn message_key(self) -> &'static str {
        match self {
            DropRejection::MissingTarget => "please-select-a-destination",
            DropRejection::OntoItself => "an-item-cannot-be-moved-onto-itself",
            DropRejection::IntoOwnDescendant => "an-item-cannot-be-moved-into-its-own-child",
            DropRejection::OntoCollapsedItem => {
                "expand-the-destination-before-moving-items-into-it"
            }
        }
    }
}

impl fmt::Display for DropRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DropRejection::MissingTarget => write!(f, "no drop target"),
            DropRejection::OntoItself => write!(f, "item dropped onto itself"),
            DropRejection::IntoOwnDescendant => {
                write!(f, "item dropped into its own subtree")
            }
            DropRejection::OntoCollapsedItem => write!(f, "item dropped onto a collapsed item"),
        }
    }
}

impl Layout {
    pub fn append_item_to_column(
        &self,
        item: Item,
        column_index: usize,
    ) -> Result<Layout, LayoutError> {
        let target = self
            .column(column_index)
            .ok_or(LayoutError::ColumnOutOfRange {
                index: column_index,
                len: self.len(),
            })?;

        let mut columns = self.columns().to_vec();
        columns[column_index] = target.with_pushed(item);
        Ok(Layout::new(columns))
    }

    /// Empties every column after `start_index`; the length is preserved.
    pub fn clear_following_columns(&self, start_index: usize) -> Layout {
        let columns = self
            .columns()
            .iter()
            .enumerate()
            .map(|(index, column)| {
                if index > start_index {
                    Column::empty()
                } else {
                    column.clone()
                }
            })
            .collect();
        Layout::new(columns)
    }

    /// Whether `column_index` lies to the right of the expanded item
    /// `item_id`. Collapsed items have no children anywhere.
    pub fn column_is_item_child(&self, column_index: usize, item_id: &str) -> bool {
        let Some(item) = self.get_item(item_id) else {
            return false;
        };
        item.active
            && self
                .get_item_column_index(item_id)
                .is_some_and(|index| index < column_index)
    }

    pub fn delete_empty_columns(&self) -> Layout {
        self.delete_empty_columns_keeping(MIN_COLUMNS)
    }

    /// Drops the run of empty columns starting at `min_columns`, stopping at
    /// the first non-empty one.
    pub fn delete_empty_columns_keeping(&self, min_columns: usize) -> Layout {
        let mut columns = self.columns().to_vec();
        while columns.len() > min_columns && columns[min_columns].is_empty() {
            columns.remove(min_columns);
        }
        Layout::new(columns)
    }

    pub fn drop_is_valid(
        &self,
        source_item_id: &str,
        target_item_id: Option<&str>,
        target_column_index: Option<usize>,
    ) -> bool {
        self.check_drop(source_item_id, target_item_id, target_column_index)
            .is_ok()
    }

    pub fn check_drop(
        &self,
        source_item_id: &str,
        target_item_id: Option<&str>,
        target_column_index: Option<usize>,
    ) -> Result<(), DropRejection> {
        if target_item_id.is_none() && target_column_index.is_none() {
            return Err(DropRejection::MissingTarget);
        }
        if target_item_id == Some(source_item_id) {
            return Err(DropRejection::OntoItself);
        }
        if let Some(column_index) = target_column_index {
            if self.column_is_item_child(column_index, source_item_id) {
                return Err(DropRejection::IntoOwnDescendant);
            }
        }
        Ok(())
    }

    pub fn get_column_active_item(&self, column_index: usize) -> Option<&Item> {
        self.column(column_index)?.iter().find(|item| item.active)
    }

    pub fn get_column_last_item(&self, column_index: usize) -> Option<&Item> {
        self.column(column_index)?.last()
    }

    pub fn get_item(&self, item_id: &str) -> Option<&Item> {
        self.columns()
            .iter()
            .find_map(|column| column.iter().find(|item| item.id == item_id))
    }

    pub fn get_item_column(&self, item_id: &str) -> Option<&Column> {
        self.columns().iter().find(|column| column.contains(item_id))
    }

    pub fn get_item_column_index(&self, item_id: &str) -> Option<usize> {
        self.columns()
            .iter()
            .position(|column| column.contains(item_id))
    }

    /// Whether `child_item_id` sits to the right of the expanded item
    /// `parent_item_id`.
    pub fn item_is_parent(
        &self,
        child_item_id: &str,
        parent_item_id: &str,
    ) -> Result<bool, LayoutError> {
        let parent = self
            .get_item(parent_item_id)
            .ok_or_else(|| LayoutError::ItemNotFound(parent_item_id.into()))?;
        let parent_index = self
            .get_item_column_index(parent_item_id)
            .ok_or_else(|| LayoutError::ItemNotFound(parent_item_id.into()))?;

        Ok(parent.active
            && self
                .get_item_column_index(child_item_id)
                .is_some_and(|child_index| child_index > parent_index))
    }

    pub fn remove_item(&self, item_id: &str) -> Layout {
        let mut columns = self.columns().to_vec();
        let found = columns
            .iter()
            .enumerate()
            .find_map(|(index, column)| column.position(item_id).map(|pos| (index, pos)));

        if let Some((column_index, item_index)) = found {
            columns[column_index] = columns[column_index].without(item_index);
        }
        Layout::new(columns)
    }

    /// Marks `item_id` as the only active item of its column.
    pub fn activate_item(&self, item_id: &str) -> Result<Layout, LayoutError> {
        self.set_item_active(item_id, true)
    }

    pub fn deactivate_item(&self, item_id: &str) -> Result<Layout, LayoutError> {
        self.set_item_active(item_id, false)
    }

    fn set_item_active(&self, item_id: &str, active: bool) -> Result<Layout, LayoutError> {
        let column_index = self
            .get_item_column_index(item_id)
            .ok_or_else(|| LayoutError::ItemNotFound(item_id.into()))?;

        let mut columns = self.columns().to_vec();
        columns[column_index] = columns[column_index].map_items(|item| {
            let mut next = item.clone();
            if item.id == item_id {
                next.active = active;
            } else if active {
                next.active = false;
            }
            next
        });
        Ok(Layout::new(columns))
    }

    /// Replaces the column at `column_index`, growing the layout with empty
    /// columns when it is too short.
    pub fn with_column(&self, column_index: usize, column: Column) -> Layout {
        let mut columns = self.columns().to_vec();
        if columns.len() <= column_index {
            columns.resize_with(column_index + 1, Column::empty);
        }
        columns[column_index] = column;
        Layout::new(columns)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/models/layout_columns.rs"]
mod tests;
