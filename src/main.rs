use clap::Parser;
use package_importer::catalog;
use package_importer::core::normalize::normalize_all;
use package_importer::utils::{logger, validation::Validate};
use package_importer::{CliConfig, ImportError, Importer, MongoConnector};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    if config.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting package-importer");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    let settings = match config.resolve().and_then(|s| s.validate().map(|_| s)) {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!("❌ Configuration failed: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    let table = catalog::package_records();
    tracing::info!("Loaded {} package records", table.len());

    if config.dry_run {
        tracing::info!("🔍 DRY RUN MODE - nothing will be written");
        let cleaned = normalize_all(&table);
        println!("{}", serde_json::to_string_pretty(&cleaned)?);
        println!(
            "\n{} documents would replace '{}.{}'",
            cleaned.len(),
            settings.database,
            settings.collection
        );
        return Ok(());
    }

    let importer = Importer::new(MongoConnector::new(), settings);

    match importer.run(&table).await {
        Ok(report) if report.wrote_data() => {
            println!("\nSuccess! Inserted {} documents into:", report.inserted);
            println!("  - Database:   '{}'", report.database);
            println!("  - Collection: '{}'", report.collection);
        }
        Ok(_) => println!("No data to insert."),
        Err(e) => report_failure(&e),
    }

    Ok(())
}

fn report_failure(e: &ImportError) {
    tracing::error!("❌ Import failed: {} (Category: {:?})", e, e.category());

    eprintln!("\n{}", e.user_friendly_message());
    if e.is_connection_error() {
        eprintln!("{}", e.recovery_suggestion());
        eprintln!("Details: {}", e);
    }
}
