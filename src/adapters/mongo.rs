use crate::config::StoreSettings;
use crate::domain::model::Record;
use crate::domain::ports::{DocumentStore, StoreConnector};
use crate::utils::error::{ImportError, Result};
use async_trait::async_trait;
use mongodb::bson::{doc, Bson, Document};
use mongodb::options::ClientOptions;
use mongodb::{Client, Collection};
use serde_json::Value;

const APP_NAME: &str = "package-importer";

#[derive(Debug, Clone, Copy, Default)]
pub struct MongoConnector;

impl MongoConnector {
    pub fn new() -> Self {
        Self
    }

    async fn open(settings: &StoreSettings) -> mongodb::error::Result<Client> {
        let mut options = ClientOptions::parse(settings.uri.as_str()).await?;
        options.server_selection_timeout = Some(settings.connect_timeout());
        options.connect_timeout = Some(settings.connect_timeout());
        options.app_name = Some(APP_NAME.to_string());
        Client::with_options(options)
    }
}

#[async_trait]
impl StoreConnector for MongoConnector {
    type Store = MongoStore;

    async fn connect(&self, settings: &StoreSettings) -> Result<MongoStore> {
        let client = Self::open(settings)
            .await
            .map_err(|e| ImportError::connection(&settings.uri, e))?;

        Ok(MongoStore {
            collection: client
                .database(&settings.database)
                .collection::<Document>(&settings.collection),
            client,
        })
    }
}

pub struct MongoStore {
    client: Client,
    collection: Collection<Document>,
}

#[async_trait]
impl DocumentStore for MongoStore {
    async fn ping(&self) -> Result<()> {
        self.client
            .database("admin")
            .run_command(doc! { "ping": 1 })
            .await?;
        Ok(())
    }

    async fn count_documents(&self) -> Result<u64> {
        Ok(self.collection.count_documents(doc! {}).await?)
    }

    async fn delete_all(&self) -> Result<u64> {
        let result = self.collection.delete_many(doc! {}).await?;
        Ok(result.deleted_count)
    }

    async fn insert_many(&self, records: &[Record]) -> Result<usize> {
        let documents: Vec<Document> = records.iter().map(record_to_document).collect();
        let result = self.collection.insert_many(documents).await?;
        Ok(result.inserted_ids.len())
    }

    async fn close(self) {
        let MongoStore { client, collection } = self;
        drop(collection);
        client.shutdown().await;
    }
}

pub fn record_to_document(record: &Record) -> Document {
    record
        .data
        .iter()
        .map(|(key, value)| (key.clone(), json_to_bson(value)))
        .collect()
}

/// Integers that fit in 32 bits are stored as `Int32`, the rest as `Int64`;
/// anything with a fractional part is a `Double`.
pub fn json_to_bson(value: &Value) -> Bson {
    match value {
        Value::Null => Bson::Null,
        Value::Bool(b) => Bson::Boolean(*b),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                i32::try_from(i).map_or(Bson::Int64(i), Bson::Int32)
            } else {
                Bson::Double(n.as_f64().unwrap_or(f64::NAN))
            }
        }
        Value::String(s) => Bson::String(s.clone()),
        Value::Array(items) => Bson::Array(items.iter().map(json_to_bson).collect()),
        Value::Object(map) => Bson::Document(
            map.iter()
                .map(|(key, value)| (key.clone(), json_to_bson(value)))
                .collect(),
        ),
    }
}
