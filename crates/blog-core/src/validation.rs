//! Request body validation shared by every resource.
//!
//! Bodies arrive as raw JSON objects so presence can be checked before they
//! are deserialized into typed requests.

use serde_json::{Map, Value};

use crate::error::DomainError;

/// JSON object body of a request.
pub type Body = Map<String, Value>;

/// Fail with the first field of `fields`, in order, that is absent from
/// `body`. Only presence is checked.
pub fn validate_required_fields(body: &Body, fields: &[&str]) -> Result<(), DomainError> {
    match fields.iter().find(|field| !body.contains_key(**field)) {
        Some(field) => Err(DomainError::Validation(format!(
            "Missing `{field}` in request body"
        ))),
        None => Ok(()),
    }
}

/// Require both ids to be present and equal. A body id that is not a JSON
/// string never matches.
pub fn validate_update_identity(
    path_id: Option<&str>,
    body_id: Option<&Value>,
) -> Result<(), DomainError> {
    match (path_id, body_id) {
        (Some(path), Some(Value::String(body))) if !path.is_empty() && path == body => Ok(()),
        _ => Err(DomainError::Validation(format!(
            "Request path id ({}) and request body id ({}) must match",
            path_id.unwrap_or("none"),
            body_id.map_or_else(|| "none".to_string(), display_id),
        ))),
    }
}

/// Copy the allow-listed keys present in `body`. Keys outside the list and
/// keys the client did not send are left out.
pub fn pick_updatable(body: &Body, allow_list: &[&str]) -> Body {
    allow_list
        .iter()
        .filter_map(|field| {
            body.get(*field)
                .map(|value| ((*field).to_string(), value.clone()))
        })
        .collect()
}

fn display_id(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn body(value: Value) -> Body {
        match value {
            Value::Object(map) => map,
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_required_fields_present() {
        let body = body(json!({"title": "T", "content": "C", "author": "x"}));
        assert!(validate_required_fields(&body, &["title", "content", "author"]).is_ok());
    }

    #[test]
    fn test_required_fields_names_first_missing() {
        let body = body(json!({"content": "C"}));
        let err = validate_required_fields(&body, &["title", "content", "author"]).unwrap_err();
        assert_eq!(err.to_string(), "Missing `title` in request body");
    }

    #[test]
    fn test_required_fields_checks_presence_only() {
        let body = body(json!({"firstName": "", "lastName": null, "userName": 3}));
        assert!(validate_required_fields(&body, &["firstName", "lastName", "userName"]).is_ok());
    }

    #[test]
    fn test_update_identity_matches() {
        assert!(validate_update_identity(Some("abc"), Some(&json!("abc"))).is_ok());
    }

    #[test]
    fn test_update_identity_mismatch_names_both_ids() {
        let err = validate_update_identity(Some("abc"), Some(&json!("xyz"))).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Request path id (abc) and request body id (xyz) must match"
        );
    }

    #[test]
    fn test_update_identity_missing_body_id() {
        let err = validate_update_identity(Some("abc"), None).unwrap_err();
        assert!(err.to_string().contains("request body id (none)"));
    }

    #[test]
    fn test_update_identity_non_string_never_matches() {
        assert!(validate_update_identity(Some("1"), Some(&json!(1))).is_err());
    }

    #[test]
    fn test_pick_updatable_filters_to_allow_list() {
        let body = body(json!({"id": "1", "title": "T", "created": "now"}));
        let picked = pick_updatable(&body, &["title", "content", "author"]);

        assert_eq!(picked.len(), 1);
        assert_eq!(picked.get("title"), Some(&json!("T")));
    }
}
