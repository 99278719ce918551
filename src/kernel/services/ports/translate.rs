//! Message lookup injected into presentation code.

use compact_str::CompactString;
use rustc_hash::FxHashMap;

use super::settings::Settings;
use crate::models::DropRejection;

pub trait Translate {
    fn translate(&self, key: &str) -> String;
}

impl<F> Translate for F
where
    F: Fn(&str) -> String,
{
    fn translate(&self, key: &str) -> String {
        self(key)
    }
}

/// Key/value message table. Unknown keys translate to themselves.
#[derive(Debug, Clone, Default)]
pub struct MessageTable {
    messages: FxHashMap<CompactString, String>,
}

impl MessageTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_settings(settings: &Settings) -> Self {
        settings
            .messages
            .iter()
            .map(|(key, text)| (key.as_str(), text.as_str()))
            .collect()
    }

    pub fn insert(&mut self, key: impl Into<CompactString>, text: impl Into<String>) {
        self.messages.insert(key.into(), text.into());
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for MessageTable
where
    K: Into<CompactString>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut table = MessageTable::new();
        for (key, text) in iter {
            table.insert(key, text);
        }
        table
    }
}

impl Translate for MessageTable {
    fn translate(&self, key: &str) -> String {
        self.messages
            .get(key)
            .cloned()
            .unwrap_or_else(|| key.to_string())
    }
}

pub fn rejection_message(rejection: DropRejection, translator: &dyn Translate) -> String {
    translator.translate(rejection.message_key())
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/ports/translate.rs"]
mod tests;
