use async_trait::async_trait;
use serde_json::{Map, Value};
use thiserror::Error;

/// A stored record: a flat JSON object keyed by attribute name.
pub type Record = Map<String, Value>;

/// An equality filter: attribute name -> required value. Filters are built by
/// the query layer and forwarded here opaquely.
pub type Filter = Map<String, Value>;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("unknown collection: {0}")]
    UnknownCollection(String),

    #[error("failed to read seed file {path}")]
    SeedIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to decode seed file {path}")]
    SeedDecode {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("seed file {path} must contain a JSON array of objects")]
    SeedShape { path: String },
}

/// Persistence-layer capability the query core calls into.
///
/// Collections are addressed by name. A record matches a filter when every
/// filter attribute is present in the record with an equal value.
#[async_trait]
pub trait Store: Send + Sync {
    async fn list_by_filter(
        &self,
        collection: &str,
        filter: &Filter,
    ) -> Result<Vec<Record>, StoreError>;

    /// Removes every matching record and returns how many were removed.
    async fn delete_by_filter(&self, collection: &str, filter: &Filter)
        -> Result<u64, StoreError>;
}
