use thiserror::Error;

#[derive(Error, Debug)]
pub enum ImportError {
    #[error("Could not connect to MongoDB at {uri}: {source}")]
    Connection {
        uri: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("Store operation failed: {0}")]
    Store(#[from] mongodb::error::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Unexpected error: {message}")]
    Unexpected { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Connection,
    Configuration,
    Unexpected,
}

impl ImportError {
    pub fn unexpected(message: impl Into<String>) -> Self {
        Self::Unexpected {
            message: message.into(),
        }
    }

    /// Reclassifies a failure seen while establishing the connection.
    pub fn connection(uri: &str, error: impl Into<ImportError>) -> Self {
        let source: Box<dyn std::error::Error + Send + Sync> = match error.into() {
            ImportError::Store(e) => Box::new(e),
            ImportError::Connection { source, .. } => source,
            other => Box::new(other),
        };
        Self::Connection {
            uri: uri.to_string(),
            source,
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            ImportError::Connection { .. } => ErrorCategory::Connection,
            ImportError::ConfigValidationError { .. }
            | ImportError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            ImportError::Store(_)
            | ImportError::IoError(_)
            | ImportError::SerializationError(_)
            | ImportError::Unexpected { .. } => ErrorCategory::Unexpected,
        }
    }

    pub fn is_connection_error(&self) -> bool {
        self.category() == ErrorCategory::Connection
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Connection => {
                "Please ensure your MongoDB server is running and accessible."
            }
            ErrorCategory::Configuration => {
                "Check the command line flags and the [store] table of the config file."
            }
            ErrorCategory::Unexpected => {
                "The collection may hold a partial import; re-run the importer to replace it."
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Connection => "Error: Could not connect to MongoDB.".to_string(),
            ErrorCategory::Configuration => format!("Invalid configuration: {}", self),
            ErrorCategory::Unexpected => format!("An unexpected error occurred: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, ImportError>;
