use crate::config::StoreSettings;
use crate::utils::error::{ImportError, Result};
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Optional config file. Every key may be omitted; missing ones keep their defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub store: StoreSection,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoreSection {
    pub uri: Option<String>,
    pub database: Option<String>,
    pub collection: Option<String>,
    pub connect_timeout_ms: Option<u64>,
}

impl TomlConfig {
    /// Loads the config from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(ImportError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// Parses the config from a TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| ImportError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` placeholders with environment values; unset ones stay as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| ImportError::ConfigValidationError {
            field: "environment".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.into_owned())
    }

    /// Overlays the keys present in the file onto `settings`.
    pub fn apply_to(&self, settings: &mut StoreSettings) {
        let store = &self.store;
        if let Some(uri) = &store.uri {
            settings.uri = uri.clone();
        }
        if let Some(database) = &store.database {
            settings.database = database.clone();
        }
        if let Some(collection) = &store.collection {
            settings.collection = collection.clone();
        }
        if let Some(timeout) = store.connect_timeout_ms {
            settings.connect_timeout_ms = timeout;
        }
    }
}
