use std::sync::Arc;

use axum::{routing::get, Router};

use appointment_cell::{appointment_routes, BookingHandler};
use doctor_cell::router::doctor_routes;
use shared_utils::AppState;

pub fn create_router(state: AppState, booking: Arc<dyn BookingHandler>) -> Router {
    Router::new()
        .route("/", get(|| async { "Clinic Directory API is running!" }))
        .nest("/doctors", doctor_routes(state.clone()))
        .nest("/appointment", appointment_routes(state, booking))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use tower::ServiceExt;

    use appointment_cell::LoggingBookingHandler;
    use shared_utils::test_utils::{at, test_state};

    fn app() -> Router {
        create_router(test_state(at(2024, 5, 6, 9, 0)), Arc::new(LoggingBookingHandler))
    }

    async fn status_of(uri: &str) -> StatusCode {
        let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
        app().oneshot(request).await.unwrap().status()
    }

    #[tokio::test]
    async fn test_root_is_alive() {
        assert_eq!(status_of("/").await, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_cells_are_mounted() {
        assert_eq!(status_of("/doctors").await, StatusCode::OK);
        assert_eq!(status_of("/doctors/Dermatologist").await, StatusCode::OK);
        assert_eq!(status_of("/appointment/doc3").await, StatusCode::OK);
        assert_eq!(status_of("/appointment/unknown").await, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_listing_routes_point_at_detail_pages() {
        let request = Request::builder().uri("/doctors/Gynecologist").body(Body::empty()).unwrap();
        let response = app().oneshot(request).await.unwrap();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

        for card in json["doctors"].as_array().unwrap() {
            let route = card["route"].as_str().unwrap();
            assert_eq!(status_of(route).await, StatusCode::OK);
        }
    }
}
