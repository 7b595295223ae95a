use axum::{routing::get, Router};

use shared_utils::AppState;

use crate::handlers;

pub fn doctor_routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::list_doctors))
        .route("/{speciality}", get(handlers::list_doctors_by_speciality))
        .with_state(state)
}
