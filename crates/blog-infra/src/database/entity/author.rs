//! Author document for the `authors` collection.

use mongodb::bson::{Document, doc};
use serde::{Deserialize, Serialize};

use blog_core::domain::{Author, AuthorPatch};
use blog_core::error::RepoError;

use super::{MongoDocument, parse_id};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorDocument {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    /// Backed by a unique index.
    pub user_name: String,
}

impl MongoDocument for AuthorDocument {
    const COLLECTION: &'static str = "authors";

    type Record = Author;

    fn from_record(author: &Author) -> Self {
        Self {
            id: author.id.to_string(),
            first_name: author.first_name.clone(),
            last_name: author.last_name.clone(),
            user_name: author.user_name.clone(),
        }
    }

    fn into_record(self) -> Result<Author, RepoError> {
        Ok(Author {
            id: parse_id("_id", &self.id)?,
            first_name: self.first_name,
            last_name: self.last_name,
            user_name: self.user_name,
        })
    }
}

/// `$set` body for a partial author update. Unsubmitted fields are omitted.
pub fn set_document(patch: &AuthorPatch) -> Document {
    let mut set = doc! {};
    if let Some(first_name) = &patch.first_name {
        set.insert("firstName", first_name.as_str());
    }
    if let Some(last_name) = &patch.last_name {
        set.insert("lastName", last_name.as_str());
    }
    if let Some(user_name) = &patch.user_name {
        set.insert("userName", user_name.as_str());
    }
    set
}
