use crate::config::toml_config::TomlConfig;
use crate::config::StoreSettings;
use crate::utils::error::Result;
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "package-importer")]
#[command(about = "Replace a MongoDB collection with the component package lookup table")]
pub struct CliConfig {
    /// Optional TOML file with a [store] table
    #[arg(short, long)]
    pub config: Option<String>,

    /// MongoDB connection string
    #[arg(long)]
    pub uri: Option<String>,

    #[arg(long)]
    pub database: Option<String>,

    #[arg(long)]
    pub collection: Option<String>,

    /// Bound on connecting and the initial ping
    #[arg(long)]
    pub timeout_ms: Option<u64>,

    /// Print the normalized documents instead of importing them
    #[arg(long)]
    pub dry_run: bool,

    #[arg(long, help = "Log as JSON lines on stderr")]
    pub json_logs: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// Defaults, then the config file, then flags.
    pub fn resolve(&self) -> Result<StoreSettings> {
        let mut settings = StoreSettings::default();

        if let Some(path) = &self.config {
            TomlConfig::from_file(path)?.apply_to(&mut settings);
        }

        if let Some(uri) = &self.uri {
            settings.uri = uri.clone();
        }
        if let Some(database) = &self.database {
            settings.database = database.clone();
        }
        if let Some(collection) = &self.collection {
            settings.collection = collection.clone();
        }
        if let Some(timeout) = self.timeout_ms {
            settings.connect_timeout_ms = timeout;
        }

        Ok(settings)
    }
}
