// libs/appointment-cell/src/handlers.rs
use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use tracing::debug;

use shared_models::error::AppError;
use shared_utils::AppState;

use crate::error::AppointmentError;
use crate::models::{BookAppointmentRequest, BookingReceipt, DetailPage, DetailQuery};
use crate::services::booking::BookingHandler;
use crate::services::detail::{DetailSession, DetailState, DetailView};

#[derive(Clone)]
pub struct AppointmentState {
    pub app: AppState,
    pub booking: Arc<dyn BookingHandler>,
}

async fn load_session(state: &AppointmentState, doctor_id: &str) -> Result<DetailSession, AppError> {
    let directory = state.app.directory.snapshot().await;
    let now = state.app.clock.now();

    match DetailView::resolve(directory.as_deref(), doctor_id, now) {
        DetailState::Ready(session) => Ok(session),
        DetailState::NotFound(id) => Err(AppointmentError::DoctorNotFound(id).into()),
        DetailState::Loading => Err(AppError::Unavailable(
            "Doctor directory is still loading".to_string(),
        )),
    }
}

#[axum::debug_handler]
pub async fn get_appointment_detail(
    State(state): State<AppointmentState>,
    Path(doctor_id): Path<String>,
    Query(query): Query<DetailQuery>,
) -> Result<Json<DetailPage>, AppError> {
    let mut session = load_session(&state, &doctor_id).await?;

    session.select_day(query.day.unwrap_or(0))?;
    if let Some(slot) = query.slot.as_deref() {
        session.select_slot(slot)?;
    }

    Ok(Json(session.render()))
}

#[axum::debug_handler]
pub async fn book_appointment(
    State(state): State<AppointmentState>,
    Path(doctor_id): Path<String>,
    Json(request): Json<BookAppointmentRequest>,
) -> Result<(StatusCode, Json<BookingReceipt>), AppError> {
    debug!("Booking request for doctor {}: day {} at {}", doctor_id, request.day, request.slot);

    let mut session = load_session(&state, &doctor_id).await?;
    session.select_day(request.day)?;
    session.select_slot(&request.slot)?;

    let receipt = session.book(state.booking.as_ref()).await?;
    Ok((StatusCode::ACCEPTED, Json(receipt)))
}
