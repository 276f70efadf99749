use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::{Document, doc};
use mongodb::error::{Error as MongoError, ErrorKind, WriteFailure};
use mongodb::options::ReturnDocument;
use mongodb::{Collection, Database};
use uuid::Uuid;

use blog_core::error::RepoError;
use blog_core::ports::BaseRepository;

use super::entity::MongoDocument;

/// Server error code for a unique index violation.
const DUPLICATE_KEY: i32 = 11000;

/// Generic MongoDB repository implementation over one collection.
pub struct MongoBaseRepository<D>
where
    D: MongoDocument,
{
    pub(crate) collection: Collection<D>,
}

impl<D> MongoBaseRepository<D>
where
    D: MongoDocument,
{
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection(D::COLLECTION),
        }
    }

    /// Apply a `$set` to the document with `id` and return the updated record.
    /// An empty `set` only reads the document back.
    pub(crate) async fn set_fields(
        &self,
        id: Uuid,
        set: Document,
    ) -> Result<Option<D::Record>, RepoError> {
        let filter = doc! { "_id": id.to_string() };

        let result = if set.is_empty() {
            self.collection.find_one(filter).await
        } else {
            self.collection
                .find_one_and_update(filter, doc! { "$set": set })
                .return_document(ReturnDocument::After)
                .await
        };

        let document = result.map_err(map_mongo_error)?;
        document.map(D::into_record).transpose()
    }
}

#[async_trait]
impl<D> BaseRepository<D::Record, Uuid> for MongoBaseRepository<D>
where
    D: MongoDocument,
{
    async fn find_all(&self) -> Result<Vec<D::Record>, RepoError> {
        let documents: Vec<D> = self
            .collection
            .find(doc! {})
            .await
            .map_err(map_mongo_error)?
            .try_collect()
            .await
            .map_err(map_mongo_error)?;

        documents
            .into_iter()
            .map(D::into_record)
            .collect()
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<D::Record>, RepoError> {
        let result = self
            .collection
            .find_one(doc! { "_id": id.to_string() })
            .await
            .map_err(map_mongo_error)?;

        result.map(D::into_record).transpose()
    }

    async fn insert(&self, entity: D::Record) -> Result<D::Record, RepoError> {
        self.collection
            .insert_one(D::from_record(&entity))
            .await
            .map_err(map_mongo_error)?;

        Ok(entity)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, RepoError> {
        let result = self
            .collection
            .delete_one(doc! { "_id": id.to_string() })
            .await
            .map_err(map_mongo_error)?;

        Ok(result.deleted_count > 0)
    }
}

/// Translate a driver error, singling out unique index violations.
pub(crate) fn map_mongo_error(err: MongoError) -> RepoError {
    match err.kind.as_ref() {
        ErrorKind::Write(WriteFailure::WriteError(write)) if write.code == DUPLICATE_KEY => {
            RepoError::Constraint(write.message.clone())
        }
        ErrorKind::Command(command) if command.code == DUPLICATE_KEY => {
            RepoError::Constraint(command.message.clone())
        }
        ErrorKind::ServerSelection { .. } => RepoError::Connection(err.to_string()),
        _ => RepoError::Query(err.to_string()),
    }
}
