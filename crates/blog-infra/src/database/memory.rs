//! In-memory repositories - used when no database is configured, and in tests.
//!
//! Records live in insertion order behind an async RwLock.
//! Note: Data is lost on process restart.

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use blog_core::domain::{Author, AuthorPatch, BlogPost, BlogPostPatch};
use blog_core::error::RepoError;
use blog_core::ports::{AuthorRepository, BaseRepository, BlogPostRepository};

/// In-memory author repository. Enforces `user_name` uniqueness the way the
/// database index does.
#[derive(Default)]
pub struct InMemoryAuthorRepository {
    store: RwLock<Vec<Author>>,
}

impl InMemoryAuthorRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

fn user_name_taken(user_name: &str) -> RepoError {
    RepoError::Constraint(format!("user name `{user_name}` already exists"))
}

#[async_trait]
impl BaseRepository<Author, Uuid> for InMemoryAuthorRepository {
    async fn find_all(&self) -> Result<Vec<Author>, RepoError> {
        Ok(self.store.read().await.clone())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Author>, RepoError> {
        let store = self.store.read().await;
        Ok(store.iter().find(|a| a.id == id).cloned())
    }

    async fn insert(&self, entity: Author) -> Result<Author, RepoError> {
        let mut store = self.store.write().await;

        if store.iter().any(|a| a.user_name == entity.user_name) {
            return Err(user_name_taken(&entity.user_name));
        }

        store.push(entity.clone());
        Ok(entity)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, RepoError> {
        let mut store = self.store.write().await;
        let before = store.len();
        store.retain(|a| a.id != id);
        Ok(store.len() < before)
    }
}

#[async_trait]
impl AuthorRepository for InMemoryAuthorRepository {
    async fn find_by_user_name(&self, user_name: &str) -> Result<Option<Author>, RepoError> {
        let store = self.store.read().await;
        Ok(store.iter().find(|a| a.user_name == user_name).cloned())
    }

    async fn update(&self, id: Uuid, patch: &AuthorPatch) -> Result<Option<Author>, RepoError> {
        let mut store = self.store.write().await;

        if let Some(user_name) = &patch.user_name {
            if store.iter().any(|a| a.id != id && &a.user_name == user_name) {
                return Err(user_name_taken(user_name));
            }
        }

        Ok(store.iter_mut().find(|a| a.id == id).map(|author| {
            author.apply(patch);
            author.clone()
        }))
    }
}

/// In-memory blog post repository.
#[derive(Default)]
pub struct InMemoryBlogPostRepository {
    store: RwLock<Vec<BlogPost>>,
}

impl InMemoryBlogPostRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BaseRepository<BlogPost, Uuid> for InMemoryBlogPostRepository {
    async fn find_all(&self) -> Result<Vec<BlogPost>, RepoError> {
        Ok(self.store.read().await.clone())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<BlogPost>, RepoError> {
        let store = self.store.read().await;
        Ok(store.iter().find(|p| p.id == id).cloned())
    }

    async fn insert(&self, entity: BlogPost) -> Result<BlogPost, RepoError> {
        let mut store = self.store.write().await;

        if store.iter().any(|p| p.id == entity.id) {
            return Err(RepoError::Constraint(format!(
                "blog post {} already exists",
                entity.id
            )));
        }

        store.push(entity.clone());
        Ok(entity)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, RepoError> {
        let mut store = self.store.write().await;
        let before = store.len();
        store.retain(|p| p.id != id);
        Ok(store.len() < before)
    }
}

#[async_trait]
impl BlogPostRepository for InMemoryBlogPostRepository {
    async fn update(
        &self,
        id: Uuid,
        patch: &BlogPostPatch,
    ) -> Result<Option<BlogPost>, RepoError> {
        let mut store = self.store.write().await;

        Ok(store.iter_mut().find(|p| p.id == id).map(|post| {
            post.apply(patch);
            post.clone()
        }))
    }

    async fn delete_by_author(&self, author: Uuid) -> Result<u64, RepoError> {
        let mut store = self.store.write().await;
        let before = store.len();
        store.retain(|p| p.author != author);
        Ok((before - store.len()) as u64)
    }
}
