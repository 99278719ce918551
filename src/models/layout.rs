//! Miller-columns layout model: columns of items, one column per depth.

use compact_str::CompactString;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::{fmt, sync::Arc};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    ItemNotFound(CompactString),
    ColumnOutOfRange { index: usize, len: usize },
    DuplicateItemId(CompactString),
    MultipleActiveItems { column: usize },
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayoutError::ItemNotFound(id) => write!(f, "item not found: {id}"),
            LayoutError::ColumnOutOfRange { index, len } => {
                write!(f, "column {index} out of range (layout has {len} columns)")
            }
            LayoutError::DuplicateItemId(id) => write!(f, "duplicate item id: {id}"),
            LayoutError::MultipleActiveItems { column } => {
                write!(f, "column {column} has more than one active item")
            }
        }
    }
}

impl std::error::Error for LayoutError {}

/// A navigator entry. Everything besides `id` and `active` is carried as an
/// opaque payload and written back untouched.
///
/// `plid` is accepted as the id key on input, but the id is always written
/// back as `id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    #[serde(alias = "plid")]
    pub id: CompactString,
    #[serde(default)]
    pub active: bool,
    #[serde(flatten)]
    pub payload: Map<String, Value>,
}

impl Item {
    pub fn new(id: impl Into<CompactString>) -> Self {
        Self {
            id: id.into(),
            active: false,
            payload: Map::new(),
        }
    }

    pub fn with_active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.payload.insert(key.into(), value.into());
        self
    }
}

/// Immutable, shareable list of sibling items.
///
/// Columns are never edited in place: every change builds a new column, so a
/// layout handed out earlier keeps seeing its own columns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Column {
    items: Arc<[Item]>,
}

impl Column {
    pub fn new(items: Vec<Item>) -> Self {
        Self {
            items: Arc::from(items),
        }
    }

    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Item> {
        self.items.iter()
    }

    pub fn last(&self) -> Option<&Item> {
        self.items.last()
    }

    pub fn position(&self, item_id: &str) -> Option<usize> {
        self.items.iter().position(|item| item.id == item_id)
    }

    pub fn contains(&self, item_id: &str) -> bool {
        self.position(item_id).is_some()
    }

    /// Whether both columns are the same allocation (not merely equal).
    pub fn ptr_eq(&self, other: &Column) -> bool {
        Arc::ptr_eq(&self.items, &other.items)
    }

    pub(crate) fn with_pushed(&self, item: Item) -> Column {
        let mut items = Vec::with_capacity(self.items.len() + 1);
        items.extend_from_slice(&self.items);
        items.push(item);
        Column::new(items)
    }

    pub(crate) fn without(&self, index: usize) -> Column {
        let mut items = self.items.to_vec();
        items.remove(index);
        Column::new(items)
    }

    pub(crate) fn map_items(&self, f: impl FnMut(&Item) -> Item) -> Column {
        Column::new(self.items.iter().map(f).collect())
    }
}

impl Default for Column {
    fn default() -> Self {
        Self::empty()
    }
}

impl From<Vec<Item>> for Column {
    fn from(items: Vec<Item>) -> Self {
        Self::new(items)
    }
}

impl<'a> IntoIterator for &'a Column {
    type Item = &'a Item;
    type IntoIter = std::slice::Iter<'a, Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Ordered columns; index 0 is the root (leftmost) column.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Layout {
    columns: Vec<Column>,
}

impl Layout {
    pub fn new(columns: Vec<Column>) -> Self {
        Self { columns }
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column(&self, index: usize) -> Option<&Column> {
        self.columns.get(index)
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Checks the structural invariants the operations rely on: unique ids
    /// across the layout and at most one active item per column.
    pub fn validate(&self) -> Result<(), LayoutError> {
        let mut seen: FxHashSet<&str> = FxHashSet::default();
        for (index, column) in self.columns.iter().enumerate() {
            let mut active = 0usize;
            for item in column {
                if !seen.insert(item.id.as_str()) {
                    return Err(LayoutError::DuplicateItemId(item.id.clone()));
                }
                if item.active {
                    active += 1;
                }
            }
            if active > 1 {
                return Err(LayoutError::MultipleActiveItems { column: index });
            }
        }
        Ok(())
    }
}

impl From<Vec<Column>> for Layout {
    fn from(columns: Vec<Column>) -> Self {
        Self::new(columns)
    }
}

impl From<Vec<Vec<Item>>> for Layout {
    fn from(columns: Vec<Vec<Item>>) -> Self {
        Self::new(columns.into_iter().map(Column::new).collect())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/models/layout.rs"]
mod tests;
