//! Author handlers.

use actix_web::{HttpResponse, web};
use serde_json::Value;

use blog_core::DomainError;
use blog_core::domain::{Author, AuthorPatch};
use blog_core::validation::{pick_updatable, validate_required_fields, validate_update_identity};
use blog_shared::dto::{CreateAuthorRequest, UpdateAuthorRequest};

use super::{into_body, parse_request, path_id};
use crate::middleware::error::{AppError, AppResult, DUPLICATE_USER_NAME};
use crate::serialize;
use crate::state::AppState;

const REQUIRED_FIELDS: &[&str] = &["firstName", "lastName", "userName"];
const UPDATABLE_FIELDS: &[&str] = &["firstName", "lastName", "userName"];

/// POST /authors
pub async fn create_author(
    state: web::Data<AppState>,
    body: web::Json<Value>,
) -> AppResult<HttpResponse> {
    let body = into_body(body.into_inner())?;
    validate_required_fields(&body, REQUIRED_FIELDS)?;
    let req: CreateAuthorRequest = parse_request(body)?;

    // Check if user name is already taken
    if state.authors.find_by_user_name(&req.user_name).await?.is_some() {
        return Err(DomainError::Duplicate(DUPLICATE_USER_NAME.to_string()).into());
    }

    let author = Author::new(req.first_name, req.last_name, req.user_name);
    let saved = state.authors.insert(author).await?;

    tracing::info!(author_id = %saved.id, user_name = %saved.user_name, "Author created");
    Ok(HttpResponse::Created().json(serialize::author(&saved)))
}

/// PUT /authors/{id}
pub async fn update_author(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<Value>,
) -> AppResult<HttpResponse> {
    let raw_id = path.into_inner();
    let body = into_body(body.into_inner())?;
    validate_update_identity(Some(raw_id.as_str()), body.get("id"))?;

    let req: UpdateAuthorRequest = parse_request(pick_updatable(&body, UPDATABLE_FIELDS))?;
    let id = path_id("author", &raw_id)?;

    // A submitted user name must not belong to another author
    if let Some(user_name) = &req.user_name {
        if let Some(holder) = state.authors.find_by_user_name(user_name).await? {
            if holder.id != id {
                return Err(DomainError::Duplicate(DUPLICATE_USER_NAME.to_string()).into());
            }
        }
    }

    let patch = AuthorPatch {
        first_name: req.first_name,
        last_name: req.last_name,
        user_name: req.user_name,
    };

    let updated = state
        .authors
        .update(id, &patch)
        .await?
        .ok_or_else(|| AppError::Internal(format!("author {id} not found for update")))?;

    Ok(HttpResponse::Ok().json(serialize::author(&updated)))
}

/// DELETE /authors/{id}
///
/// Posts by the author go first so none are left pointing at a missing author.
pub async fn delete_author(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let id = path_id("author", &path.into_inner())?;

    let removed_posts = state.posts.delete_by_author(id).await?;
    let removed = state.authors.delete(id).await?;

    tracing::info!(author_id = %id, removed, removed_posts, "Author deleted");
    Ok(HttpResponse::NoContent().finish())
}
