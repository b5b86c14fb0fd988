pub mod adapters;
pub mod catalog;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use adapters::{MongoConnector, MongoStore};
pub use config::StoreSettings;
pub use core::importer::Importer;
pub use domain::model::{ImportReport, Record};
pub use utils::error::{ImportError, Result};
