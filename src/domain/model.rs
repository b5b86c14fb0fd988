use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One component-package description. Keys stay sorted so documents built
/// from the same record are always identical.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record {
    pub data: Map<String, Value>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.data.insert(key.to_string(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.data.get(key)
    }
}

impl From<Map<String, Value>> for Record {
    fn from(data: Map<String, Value>) -> Self {
        Self { data }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImportReport {
    pub database: String,
    pub collection: String,
    pub deleted: u64,
    pub inserted: usize,
}

impl ImportReport {
    pub fn wrote_data(&self) -> bool {
        self.inserted > 0
    }
}
