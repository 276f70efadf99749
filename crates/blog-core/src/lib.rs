//! # Blog Core
//!
//! The domain layer of the blog backend.
//! Records, validation rules, and the author join live here, with zero
//! infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod expand;
pub mod ports;
pub mod validation;

pub use error::{DomainError, RepoError};
pub use expand::{ExpandedPost, expand_post, expand_posts};
