use crate::config::StoreSettings;
use crate::core::normalize::normalize_all;
use crate::domain::model::{ImportReport, Record};
use crate::domain::ports::{DocumentStore, StoreConnector};
use crate::utils::error::{ImportError, Result};

/// Replace-all import of a record table into one collection.
pub struct Importer<K: StoreConnector> {
    connector: K,
    settings: StoreSettings,
}

impl<K: StoreConnector> Importer<K> {
    pub fn new(connector: K, settings: StoreSettings) -> Self {
        Self {
            connector,
            settings,
        }
    }

    /// Opens a handle and pings it. A failed ping is a connection failure and
    /// the handle is closed before returning.
    pub async fn connect(&self) -> Result<K::Store> {
        tracing::debug!(
            "Connecting to {} (timeout {} ms)",
            self.settings.uri,
            self.settings.connect_timeout_ms
        );
        let store = self.connector.connect(&self.settings).await?;

        let probe = store.ping().await;
        if let Err(e) = probe {
            store.close().await;
            return Err(ImportError::connection(&self.settings.uri, e));
        }

        println!("Successfully connected to MongoDB at {}", self.settings.uri);
        Ok(store)
    }

    /// Connect, clean, clear, insert. The handle is closed whatever the outcome
    /// once the connection succeeded.
    pub async fn run(&self, table: &[Record]) -> Result<ImportReport> {
        let store = self.connect().await?;

        let outcome = self.clean_and_replace(&store, table).await;

        store.close().await;
        println!("MongoDB connection closed.");

        outcome
    }

    async fn clean_and_replace(&self, store: &K::Store, table: &[Record]) -> Result<ImportReport> {
        let cleaned = normalize_all(table);
        println!("Data cleaning complete. Converted string-lists to arrays.");

        self.replace_all(store, &cleaned).await
    }

    /// Empties the collection if needed, then bulk-inserts `records`.
    /// Nothing is rolled back if the insert fails after the delete.
    pub async fn replace_all<S: DocumentStore>(
        &self,
        store: &S,
        records: &[Record],
    ) -> Result<ImportReport> {
        let mut report = ImportReport {
            database: self.settings.database.clone(),
            collection: self.settings.collection.clone(),
            deleted: 0,
            inserted: 0,
        };

        let existing = store.count_documents().await?;
        if existing > 0 {
            println!(
                "Collection '{}' is not empty. Clearing it before new import...",
                self.settings.collection
            );
            report.deleted = store.delete_all().await?;
            println!("Collection cleared.");
            tracing::debug!("Removed {} of {} existing documents", report.deleted, existing);
        }

        if records.is_empty() {
            tracing::warn!("Input table is empty, skipping insert");
            return Ok(report);
        }

        report.inserted = store.insert_many(records).await?;
        if report.inserted != records.len() {
            return Err(ImportError::unexpected(format!(
                "store acknowledged {} of {} documents",
                report.inserted,
                records.len()
            )));
        }
        tracing::info!(
            "Inserted {} documents into {}.{}",
            report.inserted,
            report.database,
            report.collection
        );

        Ok(report)
    }
}
