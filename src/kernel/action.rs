use compact_str::CompactString;
use serde::{Deserialize, Serialize};

use crate::models::Item;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Action {
    /// Expand an item; `children` become the column to its right.
    ExpandItem {
        item_id: CompactString,
        #[serde(default)]
        children: Vec<Item>,
    },
    CollapseItem {
        item_id: CompactString,
    },
    AppendItem {
        item: Item,
        column_index: usize,
    },
    RemoveItem {
        item_id: CompactString,
    },
    /// Drag-and-drop: onto an item (becomes its child) or onto a column
    /// (appended to it).
    MoveItem {
        source_item_id: CompactString,
        #[serde(default)]
        target_item_id: Option<CompactString>,
        #[serde(default)]
        target_column_index: Option<usize>,
    },
}
