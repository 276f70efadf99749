//! Author join for blog posts.
//!
//! Every read path resolves a post's author reference here before the post
//! is serialized, so responses can carry the author's display name.

use crate::domain::{Author, BlogPost};
use crate::error::DomainError;
use crate::ports::AuthorRepository;

/// A blog post together with its resolved author.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpandedPost {
    pub post: BlogPost,
    pub author: Author,
}

impl ExpandedPost {
    /// Display name of the post's author.
    pub fn author_full_name(&self) -> String {
        self.author.full_name()
    }
}

/// Resolve the author of `post`. A dangling reference is an error, never a
/// partial record.
pub async fn expand_post(
    post: BlogPost,
    authors: &dyn AuthorRepository,
) -> Result<ExpandedPost, DomainError> {
    match authors.find_by_id(post.author).await? {
        Some(author) => Ok(ExpandedPost { post, author }),
        None => Err(DomainError::UnresolvedAuthor {
            post: post.id,
            author: post.author,
        }),
    }
}

/// Resolve the authors of `posts` one after another, keeping their order.
pub async fn expand_posts(
    posts: Vec<BlogPost>,
    authors: &dyn AuthorRepository,
) -> Result<Vec<ExpandedPost>, DomainError> {
    let mut expanded = Vec::with_capacity(posts.len());
    for post in posts {
        expanded.push(expand_post(post, authors).await?);
    }
    Ok(expanded)
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use uuid::Uuid;

    use super::*;
    use crate::domain::AuthorPatch;
    use crate::error::RepoError;
    use crate::ports::BaseRepository;

    /// Fixed set of authors; only lookups are exercised.
    struct Authors(Vec<Author>);

    #[async_trait]
    impl BaseRepository<Author, Uuid> for Authors {
        async fn find_all(&self) -> Result<Vec<Author>, RepoError> {
            Ok(self.0.clone())
        }

        async fn find_by_id(&self, id: Uuid) -> Result<Option<Author>, RepoError> {
            Ok(self.0.iter().find(|a| a.id == id).cloned())
        }

        async fn insert(&self, entity: Author) -> Result<Author, RepoError> {
            Ok(entity)
        }

        async fn delete(&self, _id: Uuid) -> Result<bool, RepoError> {
            Ok(false)
        }
    }

    #[async_trait]
    impl AuthorRepository for Authors {
        async fn find_by_user_name(&self, user_name: &str) -> Result<Option<Author>, RepoError> {
            Ok(self.0.iter().find(|a| a.user_name == user_name).cloned())
        }

        async fn update(
            &self,
            _id: Uuid,
            _patch: &AuthorPatch,
        ) -> Result<Option<Author>, RepoError> {
            Ok(None)
        }
    }

    fn ada() -> Author {
        Author::new(Some("Ada".into()), Some("Lovelace".into()), "ada".into())
    }

    #[tokio::test]
    async fn test_expand_resolves_author() {
        let author = ada();
        let post = BlogPost::new("T".into(), "C".into(), author.id).unwrap();
        let repo = Authors(vec![author.clone()]);

        let expanded = expand_post(post.clone(), &repo).await.unwrap();

        assert_eq!(expanded.post, post);
        assert_eq!(expanded.author, author);
        assert_eq!(expanded.author_full_name(), "Ada Lovelace");
    }

    #[tokio::test]
    async fn test_expand_fails_on_dangling_reference() {
        let post = BlogPost::new("T".into(), "C".into(), Uuid::new_v4()).unwrap();
        let repo = Authors(vec![ada()]);

        let err = expand_post(post.clone(), &repo).await.unwrap_err();

        assert!(matches!(
            err,
            DomainError::UnresolvedAuthor { post: p, author: a } if p == post.id && a == post.author
        ));
    }

    #[tokio::test]
    async fn test_expand_posts_keeps_order_and_fails_fast() {
        let author = ada();
        let repo = Authors(vec![author.clone()]);
        let first = BlogPost::new("1".into(), "C".into(), author.id).unwrap();
        let second = BlogPost::new("2".into(), "C".into(), author.id).unwrap();

        let expanded = expand_posts(vec![first.clone(), second.clone()], &repo)
            .await
            .unwrap();
        assert_eq!(expanded[0].post.id, first.id);
        assert_eq!(expanded[1].post.id, second.id);

        let orphan = BlogPost::new("3".into(), "C".into(), Uuid::new_v4()).unwrap();
        assert!(expand_posts(vec![first, orphan], &repo).await.is_err());
    }
}
