//! Domain entities - the core business objects.

mod author;

mod blog_post;

pub use author::{Author, AuthorPatch};
pub use blog_post::{BlogPost, BlogPostPatch, Comment};
