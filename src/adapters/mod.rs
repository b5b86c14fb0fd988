// Adapters layer: concrete implementations of the store ports.

pub mod mongo;

pub use mongo::{MongoConnector, MongoStore};
