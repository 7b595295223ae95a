// libs/appointment-cell/src/router.rs
use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use shared_utils::AppState;

use crate::handlers::{self, AppointmentState};
use crate::services::booking::BookingHandler;

pub fn appointment_routes(state: AppState, booking: Arc<dyn BookingHandler>) -> Router {
    let state = AppointmentState { app: state, booking };

    Router::new()
        .route("/{doctor_id}", get(handlers::get_appointment_detail))
        .route("/{doctor_id}/book", post(handlers::book_appointment))
        .with_state(state)
}
