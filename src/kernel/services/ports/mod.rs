//! Service ports: traits + data contracts.

pub mod settings;
pub mod translate;

pub use settings::Settings;
pub use translate::{rejection_message, MessageTable, Translate};
