use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use guildbank_core::DomainError;

/// Map a domain failure onto the HTTP surface. Business-rule failures are
/// 4xx with a human-readable message; inconsistencies are 500 with a
/// generic body. Internals are logged, never leaked.
pub fn domain_error_to_response(err: DomainError) -> axum::response::Response {
    match err {
        DomainError::Validation { field, message } => json_field_error(field, message),
        DomainError::NotFound => json_error(StatusCode::NOT_FOUND, "not_found", "profile not found"),
        DomainError::InvalidTarget(msg) => json_error(StatusCode::BAD_REQUEST, "invalid_target", msg),
        DomainError::InsufficientFunds(msg) => {
            json_error(StatusCode::BAD_REQUEST, "insufficient_funds", msg)
        }
        DomainError::Inconsistency(msg) => {
            tracing::error!("ledger inconsistency: {msg}");
            json_error(StatusCode::INTERNAL_SERVER_ERROR, "internal_error", "internal error")
        }
    }
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}

/// Validation failure carrying the offending field.
pub fn json_field_error(field: &str, message: impl Into<String>) -> axum::response::Response {
    (
        StatusCode::BAD_REQUEST,
        axum::Json(json!({
            "error": "validation_error",
            "field": field,
            "message": message.into(),
        })),
    )
        .into_response()
}
