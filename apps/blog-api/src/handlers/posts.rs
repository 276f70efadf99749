//! Blog post handlers.

use actix_web::{HttpResponse, web};
use serde_json::Value;
use uuid::Uuid;

use blog_core::domain::{BlogPost, BlogPostPatch};
use blog_core::validation::{pick_updatable, validate_required_fields, validate_update_identity};
use blog_core::{expand_post, expand_posts};
use blog_shared::dto::{BlogPostListResponse, CreateBlogPostRequest, UpdateBlogPostRequest};

use super::{into_body, parse_request, path_id};
use crate::middleware::error::{AppError, AppResult};
use crate::serialize;
use crate::state::AppState;

const REQUIRED_FIELDS: &[&str] = &["title", "content", "author"];
const UPDATABLE_FIELDS: &[&str] = &["title", "content", "author"];

/// GET /posts
pub async fn list_posts(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = state.posts.find_all().await?;
    let expanded = expand_posts(posts, &*state.authors).await?;

    Ok(HttpResponse::Ok().json(BlogPostListResponse {
        blogposts: expanded.iter().map(serialize::blog_post).collect(),
    }))
}

/// GET /posts/{id}
pub async fn get_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let id = path_id("blog post", &path.into_inner())?;

    let post = state
        .posts
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::Internal(format!("blog post {id} not found")))?;
    let expanded = expand_post(post, &*state.authors).await?;

    Ok(HttpResponse::Ok().json(serialize::blog_post(&expanded)))
}

/// POST /posts
pub async fn create_post(
    state: web::Data<AppState>,
    body: web::Json<Value>,
) -> AppResult<HttpResponse> {
    let body = into_body(body.into_inner())?;
    validate_required_fields(&body, REQUIRED_FIELDS)?;
    let req: CreateBlogPostRequest = parse_request(body)?;

    let author = existing_author(&state, &req.author).await?;
    let post = BlogPost::new(req.title, req.content, author)?;
    let saved = state.posts.insert(post).await?;
    let expanded = expand_post(saved, &*state.authors).await?;

    tracing::info!(post_id = %expanded.post.id, author_id = %author, "Blog post created");
    Ok(HttpResponse::Created().json(serialize::blog_post(&expanded)))
}

/// PUT /posts/{id}
pub async fn update_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<Value>,
) -> AppResult<HttpResponse> {
    let raw_id = path.into_inner();
    let body = into_body(body.into_inner())?;
    validate_update_identity(Some(raw_id.as_str()), body.get("id"))?;

    let req: UpdateBlogPostRequest = parse_request(pick_updatable(&body, UPDATABLE_FIELDS))?;
    let id = path_id("blog post", &raw_id)?;

    let author = match &req.author {
        Some(raw) => Some(existing_author(&state, raw).await?),
        None => None,
    };
    let patch = BlogPostPatch {
        title: req.title,
        content: req.content,
        author,
    };
    patch.validate()?;

    let updated = state
        .posts
        .update(id, &patch)
        .await?
        .ok_or_else(|| AppError::Internal(format!("blog post {id} not found for update")))?;
    let expanded = expand_post(updated, &*state.authors).await?;

    Ok(HttpResponse::Ok().json(serialize::blog_post(&expanded)))
}

/// DELETE /posts/{id}
///
/// Succeeds whether or not the post existed.
pub async fn delete_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let id = path_id("blog post", &path.into_inner())?;

    let removed = state.posts.delete(id).await?;

    tracing::info!(post_id = %id, removed, "Blog post deleted");
    Ok(HttpResponse::NoContent().finish())
}

/// Resolve a submitted author reference, which must name an existing author.
async fn existing_author(state: &AppState, raw: &str) -> AppResult<Uuid> {
    let unknown = || AppError::Validation(format!("Author `{raw}` does not exist"));

    let id = Uuid::parse_str(raw).map_err(|_| unknown())?;
    match state.authors.find_by_id(id).await? {
        Some(_) => Ok(id),
        None => Err(unknown()),
    }
}
