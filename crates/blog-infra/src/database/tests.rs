#[cfg(test)]
mod tests {
    use crate::database::entity::MongoDocument;
    use crate::database::entity::author::{self, AuthorDocument};
    use crate::database::entity::blog_post::{self, BlogPostDocument, CommentDocument};
    use blog_core::domain::{Author, AuthorPatch, BlogPost, BlogPostPatch, Comment};
    use blog_core::error::RepoError;
    use mongodb::bson::{self, doc};
    use uuid::Uuid;

    #[test]
    fn test_author_document_round_trip() {
        let author = Author::new(Some("Ada".into()), None, "ada".into());

        let document = AuthorDocument::from_record(&author);
        assert_eq!(document.id, author.id.to_string());

        let stored = bson::to_document(&document).unwrap();
        assert_eq!(stored.get_str("_id").unwrap(), author.id.to_string());
        assert_eq!(stored.get_str("userName").unwrap(), "ada");
        assert!(!stored.contains_key("lastName"));

        assert_eq!(document.into_record().unwrap(), author);
    }

    #[test]
    fn test_blog_post_document_keeps_comments_and_millis() {
        let mut post = BlogPost::new("T".into(), "C".into(), Uuid::new_v4()).unwrap();
        post.comments.push(Comment {
            content: Some("first".into()),
        });

        let record = BlogPostDocument::from_record(&post).into_record().unwrap();

        assert_eq!(record.id, post.id);
        assert_eq!(record.author, post.author);
        assert_eq!(record.comments, post.comments);
        assert_eq!(
            record.created.timestamp_millis(),
            post.created.timestamp_millis()
        );
    }

    #[test]
    fn test_blog_post_document_with_bad_author_is_invalid() {
        let document = BlogPostDocument {
            id: Uuid::new_v4().to_string(),
            title: "T".into(),
            content: "C".into(),
            author: "not-an-id".into(),
            comments: vec![CommentDocument { content: None }],
            created: bson::DateTime::now(),
        };

        assert!(matches!(
            document.into_record(),
            Err(RepoError::InvalidRecord(msg)) if msg.contains("author")
        ));
    }

    #[test]
    fn test_author_set_document_only_has_submitted_fields() {
        let patch = AuthorPatch {
            user_name: Some("ab2".into()),
            ..Default::default()
        };

        assert_eq!(author::set_document(&patch), doc! { "userName": "ab2" });
        assert!(author::set_document(&AuthorPatch::default()).is_empty());
    }

    #[test]
    fn test_blog_post_set_document_stores_author_as_string() {
        let id = Uuid::new_v4();
        let patch = BlogPostPatch {
            title: Some("New".into()),
            author: Some(id),
            ..Default::default()
        };

        assert_eq!(
            blog_post::set_document(&patch),
            doc! { "title": "New", "author": id.to_string() }
        );
    }
}
