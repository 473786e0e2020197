use std::sync::Arc;
use axum::body::Bytes;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Extension, Json, Router};
use crate::controller::AppState;
use crate::errors::ReservationError;
use crate::services::reservation_service::{decode_reservation, ReservationService};

pub fn router(app_state: AppState) -> Router {
    Router::new()
        .route(
            "/reservations",
            get(get_reservations)
                .post(create_reservation)
                .options(reservations_options),
        )
        .route_layer(Extension(app_state.reservation_service))
}

pub async fn get_reservations(
    Extension(reservation_service): Extension<Arc<ReservationService>>,
) -> Result<impl IntoResponse, ReservationError> {
    let reservations = reservation_service.list_reservations().await?;

    Ok((StatusCode::OK, Json(reservations)))
}

/// Decodes the raw body so a missing `Content-Type` header is not an error.
pub async fn create_reservation(
    Extension(reservation_service): Extension<Arc<ReservationService>>,
    body: Bytes,
) -> Result<impl IntoResponse, ReservationError> {
    let reservation = decode_reservation(&body)?;
    let created = reservation_service.create_reservation(reservation).await?;

    Ok((StatusCode::CREATED, Json(created)))
}

async fn reservations_options() -> StatusCode {
    StatusCode::OK
}
