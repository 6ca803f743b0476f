use axum::{
    routing::{get, post},
    Router,
};

pub mod bank;
pub mod common;
pub mod profiles;
pub mod system;
pub mod transfer;

/// Router for all endpoints that need the service handle.
pub fn router() -> Router {
    Router::new()
        .route("/status", get(system::status))
        .route("/bank", get(bank::get_bank))
        .route("/transfer", post(transfer::transfer))
        .nest("/profiles", profiles::router())
}
