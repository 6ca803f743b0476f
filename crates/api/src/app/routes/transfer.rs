use std::sync::Arc;

use axum::{extract::Extension, http::StatusCode, response::IntoResponse, Json};

use guildbank_core::DomainError;
use guildbank_ledger::Funds;

use crate::app::routes::common::parse_body_id;
use crate::app::services::AppServices;
use crate::app::{dto, errors};

pub async fn transfer(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::TransferRequest>,
) -> axum::response::Response {
    let from = match parse_body_id(&body.from_id, "fromId") {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    let to = match parse_body_id(&body.to_id, "toId") {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    let amount = match Funds::new(body.amount) {
        Ok(v) => v,
        Err(DomainError::Validation { message, .. }) => {
            return errors::json_field_error("amount", message)
        }
        Err(e) => return errors::domain_error_to_response(e),
    };

    match services.transfer(from, to, amount) {
        Ok((from, to)) => (
            StatusCode::OK,
            Json(serde_json::json!({ "from": from, "to": to })),
        )
            .into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}
