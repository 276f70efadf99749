//! MongoDB repository implementations.

use async_trait::async_trait;
use mongodb::IndexModel;
use mongodb::bson::doc;
use mongodb::options::IndexOptions;
use uuid::Uuid;

use blog_core::domain::{Author, AuthorPatch, BlogPost, BlogPostPatch};
use blog_core::error::RepoError;
use blog_core::ports::{AuthorRepository, BlogPostRepository};

use super::entity::MongoDocument;
use super::entity::author::{self, AuthorDocument};
use super::entity::blog_post::{self, BlogPostDocument};
use super::mongo_base::{MongoBaseRepository, map_mongo_error};

/// MongoDB author repository.
pub type MongoAuthorRepository = MongoBaseRepository<AuthorDocument>;

/// MongoDB blog post repository.
pub type MongoBlogPostRepository = MongoBaseRepository<BlogPostDocument>;

impl MongoAuthorRepository {
    /// Create the unique index on `userName`. Idempotent.
    pub async fn ensure_indexes(&self) -> Result<(), RepoError> {
        let index = IndexModel::builder()
            .keys(doc! { "userName": 1 })
            .options(IndexOptions::builder().unique(true).build())
            .build();

        self.collection
            .create_index(index)
            .await
            .map_err(map_mongo_error)?;

        tracing::debug!("Unique index on authors.userName ensured");
        Ok(())
    }
}

#[async_trait]
impl AuthorRepository for MongoAuthorRepository {
    async fn find_by_user_name(&self, user_name: &str) -> Result<Option<Author>, RepoError> {
        tracing::debug!(user_name, "Finding author by user name");

        let result = self
            .collection
            .find_one(doc! { "userName": user_name })
            .await
            .map_err(map_mongo_error)?;

        result.map(AuthorDocument::into_record).transpose()
    }

    async fn update(&self, id: Uuid, patch: &AuthorPatch) -> Result<Option<Author>, RepoError> {
        self.set_fields(id, author::set_document(patch)).await
    }
}

#[async_trait]
impl BlogPostRepository for MongoBlogPostRepository {
    async fn update(
        &self,
        id: Uuid,
        patch: &BlogPostPatch,
    ) -> Result<Option<BlogPost>, RepoError> {
        self.set_fields(id, blog_post::set_document(patch)).await
    }

    async fn delete_by_author(&self, author: Uuid) -> Result<u64, RepoError> {
        let result = self
            .collection
            .delete_many(doc! { "author": author.to_string() })
            .await
            .map_err(map_mongo_error)?;

        tracing::debug!(%author, deleted = result.deleted_count, "Deleted posts by author");
        Ok(result.deleted_count)
    }
}
