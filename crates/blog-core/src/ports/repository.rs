use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{Author, AuthorPatch, BlogPost, BlogPostPatch};
use crate::error::RepoError;

/// Generic repository trait defining standard CRUD operations.
#[async_trait]
pub trait BaseRepository<T, ID>: Send + Sync {
    /// Fetch every entity, in storage order.
    async fn find_all(&self) -> Result<Vec<T>, RepoError>;

    /// Find an entity by its unique ID.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError>;

    /// Insert a new entity.
    async fn insert(&self, entity: T) -> Result<T, RepoError>;

    /// Delete an entity by its ID. Returns whether anything was removed.
    async fn delete(&self, id: ID) -> Result<bool, RepoError>;
}

/// Author repository.
#[async_trait]
pub trait AuthorRepository: BaseRepository<Author, Uuid> {
    /// Find the author holding `user_name`, if any.
    async fn find_by_user_name(&self, user_name: &str) -> Result<Option<Author>, RepoError>;

    /// Merge `patch` into the stored author, returning the updated record.
    /// `Ok(None)` means no author has that ID.
    async fn update(&self, id: Uuid, patch: &AuthorPatch) -> Result<Option<Author>, RepoError>;
}

/// Blog post repository.
#[async_trait]
pub trait BlogPostRepository: BaseRepository<BlogPost, Uuid> {
    /// Merge `patch` into the stored post, returning the updated record.
    /// `Ok(None)` means no post has that ID.
    async fn update(&self, id: Uuid, patch: &BlogPostPatch)
    -> Result<Option<BlogPost>, RepoError>;

    /// Delete every post referencing `author`, returning how many were removed.
    async fn delete_by_author(&self, author: Uuid) -> Result<u64, RepoError>;
}
