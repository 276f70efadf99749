//! HTTP handlers and route configuration.

mod authors;
mod posts;


use actix_web::{HttpRequest, HttpResponse, web};
use serde::de::DeserializeOwned;
use serde_json::Value;
use uuid::Uuid;

use blog_core::validation::Body;

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// Register state and all application routes.
///
/// Authors have no list route.
pub fn configure(state: AppState) -> impl FnOnce(&mut web::ServiceConfig) {
    move |cfg| {
        cfg.app_data(web::Data::new(state))
            .app_data(json_config())
            .service(
                web::scope("/authors")
                    .service(
                        web::resource(["", "/"])
                            .route(web::post().to(authors::create_author))
                            .default_service(web::to(not_found)),
                    )
                    .service(
                        web::resource("/{id}")
                            .route(web::put().to(authors::update_author))
                            .route(web::delete().to(authors::delete_author))
                            .default_service(web::to(not_found)),
                    )
                    .default_service(web::to(not_found)),
            )
            .service(
                web::scope("/posts")
                    .service(
                        web::resource(["", "/"])
                            .route(web::get().to(posts::list_posts))
                            .route(web::post().to(posts::create_post))
                            .default_service(web::to(not_found)),
                    )
                    .service(
                        web::resource("/{id}")
                            .route(web::get().to(posts::get_post))
                            .route(web::put().to(posts::update_post))
                            .route(web::delete().to(posts::delete_post))
                            .default_service(web::to(not_found)),
                    )
                    .default_service(web::to(not_found)),
            );
    }
}

/// Fallback for unmatched routes.
pub async fn not_found(req: HttpRequest) -> AppResult<HttpResponse> {
    Err(AppError::NotFound(format!("{} {}", req.method(), req.uri())))
}

/// Malformed JSON is a client error with the same body shape as any other.
/// Bodies are read as JSON whatever their content type.
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .content_type_required(false)
        .error_handler(|err, _req| AppError::Validation(format!("Invalid JSON body: {err}")).into())
}

fn into_body(value: Value) -> AppResult<Body> {
    match value {
        Value::Object(body) => Ok(body),
        _ => Err(AppError::Validation(
            "Request body must be a JSON object".to_string(),
        )),
    }
}

/// Deserialize a presence-checked body into its typed request.
fn parse_request<T: DeserializeOwned>(body: Body) -> AppResult<T> {
    serde_json::from_value(Value::Object(body))
        .map_err(|e| AppError::Validation(format!("Invalid request body: {e}")))
}

/// Ids in the path are opaque until parsed here. A malformed one cannot name
/// any record and is treated like a failed lookup.
fn path_id(resource: &str, raw: &str) -> AppResult<Uuid> {
    Uuid::parse_str(raw)
        .map_err(|e| AppError::Internal(format!("malformed {resource} id `{raw}`: {e}")))
}
