use indexmap::IndexMap;
use serde::Serialize;

/// A parsed compose file. `root` is the untyped YAML tree; `source` names the
/// file it came from for diagnostics.
#[derive(Debug, Clone, PartialEq)]
pub struct ComposeDocument {
    pub source: String,
    pub root: serde_yaml::Value,
}

impl ComposeDocument {
    pub fn new(source: impl Into<String>, root: serde_yaml::Value) -> Self {
        Self {
            source: source.into(),
            root,
        }
    }
}

/// The projection written for one service.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ServiceRecord {
    pub labels: serde_json::Value,
    pub ports: serde_json::Value,
}

impl Default for ServiceRecord {
    fn default() -> Self {
        Self {
            labels: serde_json::Value::Object(serde_json::Map::new()),
            ports: serde_json::Value::Array(Vec::new()),
        }
    }
}

/// Service name to record, in compose document order. Serializes as a JSON
/// object.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ServiceCatalog {
    entries: IndexMap<String, ServiceRecord>,
}

impl ServiceCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a record. A name that is already present keeps its position and
    /// takes the new record.
    pub fn insert(&mut self, name: String, record: ServiceRecord) {
        self.entries.insert(name, record);
    }

    pub fn get(&self, name: &str) -> Option<&ServiceRecord> {
        self.entries.get(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ServiceRecord)> {
        self.entries.iter().map(|(name, record)| (name.as_str(), record))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
