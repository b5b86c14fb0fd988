use crate::config::StoreSettings;
use crate::domain::model::Record;
use crate::utils::error::Result;
use async_trait::async_trait;

/// A live handle on the target collection.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Cheap administrative round trip used as the liveness probe.
    async fn ping(&self) -> Result<()>;
    async fn count_documents(&self) -> Result<u64>;
    async fn delete_all(&self) -> Result<u64>;
    /// Single bulk insert. Returns the number of documents acknowledged.
    async fn insert_many(&self, records: &[Record]) -> Result<usize>;
    async fn close(self)
    where
        Self: Sized;
}

#[async_trait]
pub trait StoreConnector: Send + Sync {
    type Store: DocumentStore;

    /// Opens a handle bounded by the configured timeout. Failures come back as
    /// `ImportError::Connection`; liveness is checked by the caller with `ping`.
    async fn connect(&self, settings: &StoreSettings) -> Result<Self::Store>;
}
