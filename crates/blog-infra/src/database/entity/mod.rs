//! MongoDB document shapes and their mapping to domain records.

pub mod author;
pub mod blog_post;

use blog_core::error::RepoError;
use serde::{Serialize, de::DeserializeOwned};
use uuid::Uuid;

/// A document stored in its own collection, keyed by a UUID `_id`.
pub trait MongoDocument: Serialize + DeserializeOwned + Unpin + Send + Sync + 'static {
    /// Name of the collection holding these documents.
    const COLLECTION: &'static str;

    /// The domain record this document stores.
    type Record: Send + Sync + 'static;

    fn from_record(record: &Self::Record) -> Self;

    fn into_record(self) -> Result<Self::Record, RepoError>;
}

pub(crate) fn parse_id(field: &str, raw: &str) -> Result<Uuid, RepoError> {
    Uuid::parse_str(raw)
        .map_err(|e| RepoError::InvalidRecord(format!("`{field}` is not a valid id ({raw}): {e}")))
}
