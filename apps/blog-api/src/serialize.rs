//! Reshape domain records into their public JSON form.

use chrono::SecondsFormat;

use blog_core::ExpandedPost;
use blog_core::domain::Author;
use blog_shared::dto::{AuthorResponse, BlogPostResponse, CommentResponse};

pub fn author(author: &Author) -> AuthorResponse {
    AuthorResponse {
        id: author.id.to_string(),
        name: author.full_name(),
        user_name: author.user_name.clone(),
    }
}

/// A post with the author's display name in place of the reference.
pub fn blog_post(expanded: &ExpandedPost) -> BlogPostResponse {
    let post = &expanded.post;

    BlogPostResponse {
        id: post.id.to_string(),
        title: post.title.clone(),
        content: post.content.clone(),
        author: expanded.author_full_name(),
        created: post.created.to_rfc3339_opts(SecondsFormat::Millis, true),
        comments: post
            .comments
            .iter()
            .map(|comment| CommentResponse {
                content: comment.content.clone(),
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use blog_core::domain::{BlogPost, Comment};
    use chrono::{TimeZone, Utc};

    use super::*;

    #[test]
    fn test_author_shape() {
        let ada = Author::new(Some("Ada".into()), Some(String::new()), "ada".into());
        let response = author(&ada);

        assert_eq!(response.id, ada.id.to_string());
        assert_eq!(response.name, "Ada");
        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            serde_json::json!({ "id": ada.id.to_string(), "name": "Ada", "userName": "ada" })
        );
    }

    #[test]
    fn test_blog_post_shape() {
        let ada = Author::new(Some("Ada".into()), Some("Lovelace".into()), "ada".into());
        let mut post = BlogPost::new("T".into(), "C".into(), ada.id).unwrap();
        post.created = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        post.comments.push(Comment {
            content: Some("nice".into()),
        });

        let response = blog_post(&ExpandedPost {
            post: post.clone(),
            author: ada,
        });

        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            serde_json::json!({
                "id": post.id.to_string(),
                "title": "T",
                "content": "C",
                "author": "Ada Lovelace",
                "created": "2024-05-01T12:00:00.000Z",
                "comments": [{ "content": "nice" }],
            })
        );
    }
}
