use std::sync::Arc;

use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, patch, post},
    Json, Router,
};

use guildbank_ledger::{Funds, Level, PlayerName};

use crate::app::routes::common::parse_id;
use crate::app::services::AppServices;
use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/", post(create_profile).get(list_profiles))
        .route("/:id", get(get_profile).delete(delete_profile))
        .route("/:id/funds", patch(update_funds))
        .route("/:id/name", patch(update_name))
}

pub async fn list_profiles(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    match services.profiles() {
        Ok(profiles) => (StatusCode::OK, Json(profiles)).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn get_profile(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id = match parse_id(&id) {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    match services.get(id) {
        Ok(profile) => (StatusCode::OK, Json(profile)).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn create_profile(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::CreateProfileRequest>,
) -> axum::response::Response {
    let name = match PlayerName::new(&body.name) {
        Ok(v) => v,
        Err(e) => return errors::domain_error_to_response(e),
    };
    let level = match Level::new(body.level) {
        Ok(v) => v,
        Err(e) => return errors::domain_error_to_response(e),
    };
    let funds = match Funds::new(body.funds.unwrap_or(0)) {
        Ok(v) => v,
        Err(e) => return errors::domain_error_to_response(e),
    };

    match services.create_profile(name, level, funds, body.avatar_url) {
        Ok(profile) => (StatusCode::CREATED, Json(profile)).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn update_funds(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    Json(body): Json<dto::UpdateFundsRequest>,
) -> axum::response::Response {
    let id = match parse_id(&id) {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    let funds = match Funds::new(body.funds) {
        Ok(v) => v,
        Err(e) => return errors::domain_error_to_response(e),
    };

    match services.update_funds(id, funds) {
        Ok(profile) => (StatusCode::OK, Json(profile)).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn update_name(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    Json(body): Json<dto::UpdateNameRequest>,
) -> axum::response::Response {
    let id = match parse_id(&id) {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    let name = match PlayerName::new(&body.name) {
        Ok(v) => v,
        Err(e) => return errors::domain_error_to_response(e),
    };

    match services.rename(id, name) {
        Ok(profile) => (StatusCode::OK, Json(profile)).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn delete_profile(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id = match parse_id(&id) {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    match services.delete_profile(id) {
        Ok(_removed) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}
