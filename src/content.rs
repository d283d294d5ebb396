use crate::store::WidgetStore;
use serde::{Deserialize, Serialize};

pub const WORD_KEY: &str = "word";
pub const DEFINITION_KEY: &str = "definition";

pub const PLACEHOLDER_WORD: &str = "Loading...";
pub const PLACEHOLDER_DEFINITION: &str = "Fetching definition...";

/// The two text fields shown on a widget instance.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct WidgetContentRecord {
    pub word: String,
    pub definition: String,
}

impl WidgetContentRecord {
    /// Read the word and definition out of `store`, substituting the fixed
    /// placeholders for missing or blank entries. A missing entry is the
    /// normal state before the content job has run, not an error.
    pub fn from_store(store: &dyn WidgetStore) -> Self {
        Self {
            word: read_or(store, WORD_KEY, PLACEHOLDER_WORD),
            definition: read_or(store, DEFINITION_KEY, PLACEHOLDER_DEFINITION),
        }
    }
}

fn read_or(store: &dyn WidgetStore, key: &str, fallback: &str) -> String {
    match store.get(key) {
        Some(value) if !value.trim().is_empty() => value,
        _ => fallback.to_string(),
    }
}
