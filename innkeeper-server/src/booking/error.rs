use crate::database::error::DatabaseError;
use crate::database::transaction::TransactionError;
use crate::room::model::RoomNumber;
use thiserror::Error;

/// Failures the booking store can't recover from.
///
/// Rejected bookings and checkouts are not errors, see [`crate::booking::outcome`].
#[derive(Error, Debug)]
pub enum BookingError {
	#[error("Room {0} already exists.")]
	DuplicateRoom(RoomNumber),
	#[error("Storage failure: {0}")]
	Database(#[from] DatabaseError),
	#[error("Gave up after {limit} attempts, the database stayed busy.")]
	TransactionAttemptsExhausted { limit: usize },
}

impl From<TransactionError> for BookingError {
	fn from(error: TransactionError) -> Self {
		match error {
			TransactionError::Database(error) => Self::Database(error),
			TransactionError::AttemptsExhausted { limit } => Self::TransactionAttemptsExhausted { limit },
		}
	}
}
