use async_trait::async_trait;
use package_importer::catalog;
use package_importer::domain::ports::{DocumentStore, StoreConnector};
use package_importer::utils::error::ErrorCategory;
use package_importer::{ImportError, Importer, Record, Result, StoreSettings};
use serde_json::json;
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Default)]
struct MockState {
    documents: Vec<Record>,
    unreachable: bool,
    fail_ping: bool,
    fail_insert: bool,
    short_ack: bool,
    calls: Vec<&'static str>,
    open_handles: i32,
}

#[derive(Clone, Default)]
struct MockConnector {
    state: Arc<Mutex<MockState>>,
}

impl MockConnector {
    async fn seed(&self, documents: Vec<Record>) {
        self.state.lock().await.documents = documents;
    }

    async fn documents(&self) -> Vec<Record> {
        self.state.lock().await.documents.clone()
    }

    async fn calls(&self) -> Vec<&'static str> {
        self.state.lock().await.calls.clone()
    }

    async fn open_handles(&self) -> i32 {
        self.state.lock().await.open_handles
    }
}

struct MockStore {
    state: Arc<Mutex<MockState>>,
}

#[async_trait]
impl StoreConnector for MockConnector {
    type Store = MockStore;

    async fn connect(&self, settings: &StoreSettings) -> Result<MockStore> {
        let mut state = self.state.lock().await;
        state.calls.push("connect");
        if state.unreachable {
            return Err(ImportError::connection(
                &settings.uri,
                mongodb::error::Error::custom("server selection timeout"),
            ));
        }
        state.open_handles += 1;
        Ok(MockStore {
            state: self.state.clone(),
        })
    }
}

#[async_trait]
impl DocumentStore for MockStore {
    async fn ping(&self) -> Result<()> {
        let mut state = self.state.lock().await;
        state.calls.push("ping");
        if state.fail_ping {
            return Err(ImportError::Store(mongodb::error::Error::custom(
                "no primary available",
            )));
        }
        Ok(())
    }

    async fn count_documents(&self) -> Result<u64> {
        let mut state = self.state.lock().await;
        state.calls.push("count_documents");
        Ok(state.documents.len() as u64)
    }

    async fn delete_all(&self) -> Result<u64> {
        let mut state = self.state.lock().await;
        state.calls.push("delete_all");
        let deleted = state.documents.len() as u64;
        state.documents.clear();
        Ok(deleted)
    }

    async fn insert_many(&self, records: &[Record]) -> Result<usize> {
        let mut state = self.state.lock().await;
        state.calls.push("insert_many");
        if state.fail_insert {
            return Err(ImportError::unexpected("bulk write interrupted"));
        }
        state.documents.extend_from_slice(records);
        if state.short_ack {
            return Ok(records.len().saturating_sub(1));
        }
        Ok(records.len())
    }

    async fn close(self) {
        let mut state = self.state.lock().await;
        state.calls.push("close");
        state.open_handles -= 1;
    }
}

fn sample_table() -> Vec<Record> {
    vec![
        Record::new()
            .with("Package", "DIP-8")
            .with("Typical_Pins", "[8]")
            .with("Pitch", "[2.54]"),
        Record::new()
            .with("Package", "BGA")
            .with("Typical_Pins", "Variable")
            .with("Pitch", "[0.5,0.8]"),
    ]
}

#[tokio::test]
async fn test_import_into_empty_collection() {
    let connector = MockConnector::default();
    let importer = Importer::new(connector.clone(), StoreSettings::default());

    let report = importer.run(&sample_table()).await.unwrap();

    assert_eq!(report.inserted, 2);
    assert_eq!(report.deleted, 0);
    assert_eq!(report.database, "electronics_db");
    assert_eq!(report.collection, "component_packages");

    let documents = connector.documents().await;
    assert_eq!(documents.len(), 2);
    assert_eq!(documents[0].get("Package"), Some(&json!("DIP-8")));
    assert_eq!(documents[0].get("Typical_Pins"), Some(&json!([8])));
    assert_eq!(documents[0].get("Pitch"), Some(&json!([2.54])));
    assert_eq!(documents[1].get("Package"), Some(&json!("BGA")));
    assert_eq!(documents[1].get("Typical_Pins"), Some(&json!("Variable")));
    assert_eq!(documents[1].get("Pitch"), Some(&json!([0.5, 0.8])));

    assert_eq!(
        connector.calls().await,
        vec!["connect", "ping", "count_documents", "insert_many", "close"]
    );
    assert_eq!(connector.open_handles().await, 0);
}

#[tokio::test]
async fn test_import_is_idempotent() {
    let connector = MockConnector::default();
    let importer = Importer::new(connector.clone(), StoreSettings::default());
    let table = sample_table();

    importer.run(&table).await.unwrap();
    let after_first = connector.documents().await;

    let report = importer.run(&table).await.unwrap();
    let after_second = connector.documents().await;

    assert_eq!(report.deleted, 2);
    assert_eq!(report.inserted, 2);
    assert_eq!(after_first, after_second);
}

#[tokio::test]
async fn test_prior_contents_are_replaced() {
    let connector = MockConnector::default();
    connector
        .seed(vec![
            Record::new().with("Package", "stale-1"),
            Record::new().with("Package", "stale-2"),
            Record::new().with("Package", "stale-3"),
        ])
        .await;
    let importer = Importer::new(connector.clone(), StoreSettings::default());

    let report = importer.run(&sample_table()).await.unwrap();

    assert_eq!(report.deleted, 3);
    let packages: Vec<String> = connector
        .documents()
        .await
        .iter()
        .filter_map(|r| r.get("Package").and_then(|v| v.as_str()).map(String::from))
        .collect();
    assert_eq!(packages, vec!["DIP-8", "BGA"]);
}

#[tokio::test]
async fn test_empty_table_skips_insert() {
    let connector = MockConnector::default();
    connector
        .seed(vec![Record::new().with("Package", "stale")])
        .await;
    let importer = Importer::new(connector.clone(), StoreSettings::default());

    let report = importer.run(&[]).await.unwrap();

    assert!(!report.wrote_data());
    assert_eq!(report.deleted, 1);
    assert!(connector.documents().await.is_empty());

    let calls = connector.calls().await;
    assert!(!calls.contains(&"insert_many"));
    assert_eq!(calls.last(), Some(&"close"));
    assert_eq!(connector.open_handles().await, 0);
}

#[tokio::test]
async fn test_unreachable_store_leaves_collection_untouched() {
    let connector = MockConnector::default();
    let existing = vec![Record::new().with("Package", "keep-me")];
    connector.seed(existing.clone()).await;
    connector.state.lock().await.unreachable = true;
    let importer = Importer::new(connector.clone(), StoreSettings::default());

    let err = importer.run(&sample_table()).await.unwrap_err();

    assert!(err.is_connection_error());
    assert_eq!(connector.calls().await, vec!["connect"]);
    assert_eq!(connector.documents().await, existing);
}

#[tokio::test]
async fn test_failed_ping_is_connection_error_and_closes() {
    let connector = MockConnector::default();
    let existing = vec![Record::new().with("Package", "keep-me")];
    connector.seed(existing.clone()).await;
    connector.state.lock().await.fail_ping = true;
    let importer = Importer::new(connector.clone(), StoreSettings::default());

    let err = importer.run(&sample_table()).await.unwrap_err();

    assert!(err.is_connection_error());
    assert!(err.to_string().contains("mongodb://localhost:27017/"));
    assert_eq!(connector.calls().await, vec!["connect", "ping", "close"]);
    assert_eq!(connector.open_handles().await, 0);
    assert_eq!(connector.documents().await, existing);
}

#[tokio::test]
async fn test_short_acknowledgement_is_unexpected() {
    let connector = MockConnector::default();
    connector.state.lock().await.short_ack = true;
    let importer = Importer::new(connector.clone(), StoreSettings::default());

    let err = importer.run(&sample_table()).await.unwrap_err();

    assert_eq!(err.category(), ErrorCategory::Unexpected);
    assert!(err.to_string().contains("1 of 2"));
    assert_eq!(connector.calls().await.last(), Some(&"close"));
    assert_eq!(connector.open_handles().await, 0);
}

#[tokio::test]
async fn test_failed_insert_still_closes_connection() {
    let connector = MockConnector::default();
    connector
        .seed(vec![Record::new().with("Package", "stale")])
        .await;
    connector.state.lock().await.fail_insert = true;
    let importer = Importer::new(connector.clone(), StoreSettings::default());

    let err = importer.run(&sample_table()).await.unwrap_err();

    assert_eq!(err.category(), ErrorCategory::Unexpected);
    assert_eq!(connector.calls().await.last(), Some(&"close"));
    assert_eq!(connector.open_handles().await, 0);
    // the delete already went through and is not undone
    assert!(connector.documents().await.is_empty());
}

#[tokio::test]
async fn test_catalog_import() {
    let connector = MockConnector::default();
    let importer = Importer::new(connector.clone(), StoreSettings::default());
    let table = catalog::package_records();

    let report = importer.run(&table).await.unwrap();
    assert_eq!(report.inserted, catalog::PACKAGE_LOOKUP_TABLE.len());

    let documents = connector.documents().await;
    let bga = documents
        .iter()
        .find(|r| r.get("Package") == Some(&json!("BGA")))
        .unwrap();
    assert_eq!(bga.get("Typical_Pins"), Some(&json!("Variable")));
    assert_eq!(bga.get("Pitch"), Some(&json!([0.5, 0.8, 1.0, 1.27])));

    let soic = documents
        .iter()
        .find(|r| r.get("Package") == Some(&json!("SOIC")))
        .unwrap();
    assert_eq!(soic.get("Typical_Pins"), Some(&json!([8, 14, 16, 20, 24, 28])));

    // the injected table itself is left as written
    assert_eq!(table[0].get("Pitch"), Some(&json!("[2.54]")));
}
