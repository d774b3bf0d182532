use crate::booking::error::BookingError;
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use tracing::error;

/// Type-erased error response
///
/// NOTE: This type is inspired by RFC7807 (Problem Details for HTTP APIs) but spares on a lot of
/// the details to avoid complexity.
///
/// See: <https://www.rfc-editor.org/rfc/rfc7807.html>
#[derive(Debug, Serialize)]
pub struct ApiErrorResponse {
	r#type: &'static str,
	status: u16,
	message: String,
}

impl ApiErrorResponse {
	pub fn room_not_found(message: String) -> Self {
		Self {
			r#type: "room-not-found",
			status: StatusCode::NOT_FOUND.as_u16(),
			message,
		}
	}

	pub fn conflict(r#type: &'static str, message: String) -> Self {
		Self {
			r#type,
			status: StatusCode::CONFLICT.as_u16(),
			message,
		}
	}
}

impl From<BookingError> for ApiErrorResponse {
	fn from(error: BookingError) -> Self {
		use BookingError::*;
		match error {
			DuplicateRoom(_) => Self::conflict("room-already-exists", error.to_string()),
			Database(_) | TransactionAttemptsExhausted { .. } => {
				error!(%error, "Booking store failed");
				Self {
					r#type: "storage-failure",
					status: StatusCode::INTERNAL_SERVER_ERROR.as_u16(),
					message: "The booking store is unavailable.".to_owned(),
				}
			}
		}
	}
}

impl IntoResponse for ApiErrorResponse {
	fn into_response(self) -> Response {
		let status_code = StatusCode::from_u16(self.status).expect("StatusCode could not be mapped.");
		(status_code, Json(self)).into_response()
	}
}
