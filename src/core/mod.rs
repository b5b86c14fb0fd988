pub mod importer;
pub mod normalize;

pub use crate::domain::model::{ImportReport, Record};
pub use crate::domain::ports::{DocumentStore, StoreConnector};
pub use crate::utils::error::Result;
