use axum::{
    extract::{Path, Query, State},
    Json,
};

use shared_models::error::AppError;
use shared_utils::AppState;

use crate::models::{ListingQuery, ListingView};
use crate::services::listing::ListingService;

#[axum::debug_handler]
pub async fn list_doctors(
    State(state): State<AppState>,
    Query(query): Query<ListingQuery>,
) -> Result<Json<ListingView>, AppError> {
    let directory = state.directory_snapshot().await?;
    let view = ListingService::new(&directory).build(None, query.show_filters);
    Ok(Json(view))
}

#[axum::debug_handler]
pub async fn list_doctors_by_speciality(
    State(state): State<AppState>,
    Path(speciality): Path<String>,
    Query(query): Query<ListingQuery>,
) -> Result<Json<ListingView>, AppError> {
    let directory = state.directory_snapshot().await?;
    let view = ListingService::new(&directory).build(Some(&speciality), query.show_filters);
    Ok(Json(view))
}
