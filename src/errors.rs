use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use bb8_postgres::bb8::RunError;
use bb8_postgres::tokio_postgres;
use thiserror::Error;
use tracing::warn;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("failed to acquire a store connection: {0}")]
    Connection(String),

    #[error("store statement failed: {0}")]
    Postgres(#[from] tokio_postgres::Error),

    #[error("stored document does not match the reservation shape: {0}")]
    Decode(#[from] serde_json::Error),
}

impl From<RunError<tokio_postgres::Error>> for StoreError {
    fn from(err: RunError<tokio_postgres::Error>) -> Self {
        match err {
            RunError::User(e) => StoreError::Postgres(e),
            RunError::TimedOut => StoreError::Connection("timed out waiting for a pooled connection".to_string()),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StoreOperation {
    List,
    Create,
}

#[derive(Error, Debug)]
pub enum ReservationError {
    #[error("invalid reservation payload: {0}")]
    Validation(#[source] serde_json::Error),

    #[error("no reservations found")]
    NotFound,

    #[error("{operation:?} reservations failed: {source}")]
    Store {
        operation: StoreOperation,
        #[source]
        source: StoreError,
    },
}

impl ReservationError {
    pub fn store(operation: StoreOperation, source: StoreError) -> Self {
        ReservationError::Store { operation, source }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            ReservationError::Validation(_) => StatusCode::BAD_REQUEST,
            ReservationError::NotFound => StatusCode::NOT_FOUND,
            ReservationError::Store { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Plain-text message returned to the client; detail stays in the logs.
    pub fn client_message(&self) -> &'static str {
        match self {
            ReservationError::Validation(_) => "Invalid request payload",
            ReservationError::NotFound => "No reservations found",
            ReservationError::Store { operation: StoreOperation::List, source: StoreError::Decode(_) } => {
                "Failed to parse reservations"
            }
            ReservationError::Store { operation: StoreOperation::List, .. } => "Failed to fetch reservations",
            ReservationError::Store { operation: StoreOperation::Create, .. } => "Failed to create reservation",
        }
    }
}

impl IntoResponse for ReservationError {
    fn into_response(self) -> Response {
        match &self {
            ReservationError::NotFound => {}
            e => warn!("Reservation request failed due to: {}", e),
        }
        (self.status_code(), self.client_message()).into_response()
    }
}
