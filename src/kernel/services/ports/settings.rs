use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::models::MIN_COLUMNS;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Columns at indices below this are never pruned, even when empty.
    #[serde(default = "default_min_columns")]
    pub min_columns: usize,
    /// Message key -> displayed text.
    #[serde(default)]
    pub messages: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_filter: Option<String>,
}

fn default_min_columns() -> usize {
    MIN_COLUMNS
}

impl Default for Settings {
    fn default() -> Self {
        let messages = [
            ("please-select-a-destination", "Please select a destination."),
            (
                "an-item-cannot-be-moved-onto-itself",
                "An item cannot be moved onto itself.",
            ),
            (
                "an-item-cannot-be-moved-into-its-own-child",
                "An item cannot be moved into one of its children.",
            ),
            (
                "expand-the-destination-before-moving-items-into-it",
                "Expand the destination before moving items into it.",
            ),
        ]
        .into_iter()
        .map(|(key, text)| (key.to_string(), text.to_string()))
        .collect();

        Self {
            min_columns: MIN_COLUMNS,
            messages,
            log_filter: None,
        }
    }
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/ports/settings.rs"]
mod tests;
