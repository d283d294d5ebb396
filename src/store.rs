use std::collections::HashMap;

/// Flat key-value store populated by external collaborators. The widget only
/// ever reads it.
pub trait WidgetStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
}

/// In-memory store, mainly useful when embedding or testing.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
    }
}

impl WidgetStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }
}

/// Store backed by a flat JSON object file of string values. A missing or
/// empty file simply yields an empty store, since the content job may not
/// have run yet.
#[derive(Debug, Default, Clone)]
pub struct JsonFileStore {
    values: HashMap<String, String>,
}

impl JsonFileStore {
    pub fn load(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path).unwrap_or_default();
        if content.is_empty() {
            return Ok(Self::default());
        }
        Ok(Self {
            values: serde_json::from_str(&content)?,
        })
    }
}

impl WidgetStore for JsonFileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }
}
