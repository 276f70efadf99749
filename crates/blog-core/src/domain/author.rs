use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Author entity - the writer a blog post refers to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub id: Uuid,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    /// Unique across all authors.
    pub user_name: String,
}

impl Author {
    /// Create a new author with a generated ID.
    pub fn new(first_name: Option<String>, last_name: Option<String>, user_name: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            first_name,
            last_name,
            user_name,
        }
    }

    /// Display name: first and last name joined by a space, trimmed so a
    /// missing part leaves no stray whitespace.
    pub fn full_name(&self) -> String {
        format!(
            "{} {}",
            self.first_name.as_deref().unwrap_or_default(),
            self.last_name.as_deref().unwrap_or_default()
        )
        .trim()
        .to_string()
    }

    /// Merge the submitted fields of `patch` into this author.
    pub fn apply(&mut self, patch: &AuthorPatch) {
        if let Some(first_name) = &patch.first_name {
            self.first_name = Some(first_name.clone());
        }
        if let Some(last_name) = &patch.last_name {
            self.last_name = Some(last_name.clone());
        }
        if let Some(user_name) = &patch.user_name {
            self.user_name = user_name.clone();
        }
    }
}

/// Allow-listed author fields for a partial update. `None` leaves the stored
/// value untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthorPatch {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub user_name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn author(first: Option<&str>, last: Option<&str>) -> Author {
        Author::new(first.map(String::from), last.map(String::from), "ab1".into())
    }

    #[test]
    fn test_full_name_joins_parts() {
        assert_eq!(author(Some("Ada"), Some("Lovelace")).full_name(), "Ada Lovelace");
    }

    #[test]
    fn test_full_name_trims_missing_parts() {
        assert_eq!(author(Some("Ada"), Some("")).full_name(), "Ada");
        assert_eq!(author(None, Some("Lovelace")).full_name(), "Lovelace");
        assert_eq!(author(None, None).full_name(), "");
    }

    #[test]
    fn test_apply_only_touches_submitted_fields() {
        let mut author = author(Some("Ada"), Some("Lovelace"));
        let id = author.id;

        author.apply(&AuthorPatch {
            last_name: Some("Byron".into()),
            ..Default::default()
        });

        assert_eq!(author.id, id);
        assert_eq!(author.first_name.as_deref(), Some("Ada"));
        assert_eq!(author.last_name.as_deref(), Some("Byron"));
        assert_eq!(author.user_name, "ab1");
    }
}
