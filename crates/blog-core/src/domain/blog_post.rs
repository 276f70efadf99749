use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DomainError;

/// Comment embedded in a blog post. Not addressable on its own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub content: Option<String>,
}

/// BlogPost entity - an article written by an author.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlogPost {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    /// Id of the referenced author. Resolved by [`crate::expand_post`].
    pub author: Uuid,
    pub comments: Vec<Comment>,
    pub created: DateTime<Utc>,
}

impl BlogPost {
    /// Create a new post with a generated ID, no comments, and `created` set
    /// to now.
    pub fn new(title: String, content: String, author: Uuid) -> Result<Self, DomainError> {
        require_text("title", &title)?;
        require_text("content", &content)?;

        Ok(Self {
            id: Uuid::new_v4(),
            title,
            content,
            author,
            comments: Vec::new(),
            created: Utc::now(),
        })
    }

    /// Merge the submitted fields of `patch` into this post.
    pub fn apply(&mut self, patch: &BlogPostPatch) {
        if let Some(title) = &patch.title {
            self.title = title.clone();
        }
        if let Some(content) = &patch.content {
            self.content = content.clone();
        }
        if let Some(author) = patch.author {
            self.author = author;
        }
    }
}

/// Allow-listed blog post fields for a partial update.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlogPostPatch {
    pub title: Option<String>,
    pub content: Option<String>,
    pub author: Option<Uuid>,
}

impl BlogPostPatch {
    /// Reject submitted fields that would break the post's invariants.
    pub fn validate(&self) -> Result<(), DomainError> {
        if let Some(title) = &self.title {
            require_text("title", title)?;
        }
        if let Some(content) = &self.content {
            require_text("content", content)?;
        }
        Ok(())
    }
}

fn require_text(field: &str, value: &str) -> Result<(), DomainError> {
    if value.is_empty() {
        return Err(DomainError::Validation(format!("`{field}` must not be empty")));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_post_defaults() {
        let author = Uuid::new_v4();
        let before = Utc::now();
        let post = BlogPost::new("T".into(), "C".into(), author).unwrap();

        assert_eq!(post.author, author);
        assert!(post.comments.is_empty());
        assert!(post.created >= before);
    }

    #[test]
    fn test_new_post_rejects_empty_title() {
        let err = BlogPost::new(String::new(), "C".into(), Uuid::new_v4()).unwrap_err();
        assert!(matches!(err, DomainError::Validation(msg) if msg.contains("title")));
    }

    #[test]
    fn test_patch_rejects_empty_content() {
        let patch = BlogPostPatch {
            content: Some(String::new()),
            ..Default::default()
        };
        assert!(patch.validate().is_err());
        assert!(BlogPostPatch::default().validate().is_ok());
    }

    #[test]
    fn test_apply_keeps_unsubmitted_fields() {
        let mut post = BlogPost::new("T".into(), "C".into(), Uuid::new_v4()).unwrap();
        let original = post.clone();

        post.apply(&BlogPostPatch {
            title: Some("New".into()),
            ..Default::default()
        });

        assert_eq!(post.title, "New");
        assert_eq!(post.content, original.content);
        assert_eq!(post.author, original.author);
        assert_eq!(post.created, original.created);
    }
}
