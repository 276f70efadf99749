//! Blog post document for the `blogposts` collection. Comments are embedded.

use chrono::{DateTime, Utc};
use mongodb::bson::{self, Document, doc};
use serde::{Deserialize, Serialize};

use blog_core::domain::{BlogPost, BlogPostPatch, Comment};
use blog_core::error::RepoError;

use super::{MongoDocument, parse_id};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentDocument {
    #[serde(default)]
    pub content: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BlogPostDocument {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub content: String,
    /// `_id` of the referenced author document.
    pub author: String,
    #[serde(default)]
    pub comments: Vec<CommentDocument>,
    pub created: bson::DateTime,
}

impl MongoDocument for BlogPostDocument {
    const COLLECTION: &'static str = "blogposts";

    type Record = BlogPost;

    fn from_record(post: &BlogPost) -> Self {
        Self {
            id: post.id.to_string(),
            title: post.title.clone(),
            content: post.content.clone(),
            author: post.author.to_string(),
            comments: post
                .comments
                .iter()
                .map(|comment| CommentDocument {
                    content: comment.content.clone(),
                })
                .collect(),
            created: bson::DateTime::from_millis(post.created.timestamp_millis()),
        }
    }

    fn into_record(self) -> Result<BlogPost, RepoError> {
        let millis = self.created.timestamp_millis();
        let created = DateTime::<Utc>::from_timestamp_millis(millis).ok_or_else(|| {
            RepoError::InvalidRecord(format!("`created` is out of range: {millis}"))
        })?;

        Ok(BlogPost {
            id: parse_id("_id", &self.id)?,
            title: self.title,
            content: self.content,
            author: parse_id("author", &self.author)?,
            comments: self
                .comments
                .into_iter()
                .map(|comment| Comment {
                    content: comment.content,
                })
                .collect(),
            created,
        })
    }
}

/// `$set` body for a partial blog post update. Unsubmitted fields are omitted.
pub fn set_document(patch: &BlogPostPatch) -> Document {
    let mut set = doc! {};
    if let Some(title) = &patch.title {
        set.insert("title", title.as_str());
    }
    if let Some(content) = &patch.content {
        set.insert("content", content.as_str());
    }
    if let Some(author) = patch.author {
        set.insert("author", author.to_string());
    }
    set
}
