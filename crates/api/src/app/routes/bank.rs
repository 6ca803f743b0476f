use std::sync::Arc;

use axum::{extract::Extension, http::StatusCode, response::IntoResponse, Json};

use crate::app::errors;
use crate::app::services::AppServices;

pub async fn get_bank(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    match services.bank() {
        Ok(bank) => (StatusCode::OK, Json(bank)).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}
