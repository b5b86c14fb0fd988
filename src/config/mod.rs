#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const DEFAULT_URI: &str = "mongodb://localhost:27017/";
pub const DEFAULT_DATABASE: &str = "electronics_db";
pub const DEFAULT_COLLECTION: &str = "component_packages";
pub const DEFAULT_CONNECT_TIMEOUT_MS: u64 = 5000;

const MAX_CONNECT_TIMEOUT_MS: u64 = 600_000;

/// Where the import goes and how long the first contact may take.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreSettings {
    pub uri: String,
    pub database: String,
    pub collection: String,
    pub connect_timeout_ms: u64,
}

impl Default for StoreSettings {
    fn default() -> Self {
        Self {
            uri: DEFAULT_URI.to_string(),
            database: DEFAULT_DATABASE.to_string(),
            collection: DEFAULT_COLLECTION.to_string(),
            connect_timeout_ms: DEFAULT_CONNECT_TIMEOUT_MS,
        }
    }
}

impl StoreSettings {
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_millis(self.connect_timeout_ms)
    }
}

impl Validate for StoreSettings {
    fn validate(&self) -> Result<()> {
        validation::validate_mongo_uri("store.uri", &self.uri)?;
        validation::validate_non_empty_string("store.database", &self.database)?;
        validation::validate_non_empty_string("store.collection", &self.collection)?;
        validation::validate_range(
            "store.connect_timeout_ms",
            self.connect_timeout_ms,
            1,
            MAX_CONNECT_TIMEOUT_MS,
        )?;
        Ok(())
    }
}
