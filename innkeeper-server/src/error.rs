use crate::booking::error::BookingError;
use crate::configuration::ConfigurationError;
use crate::database::error::DatabaseError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum InnkeeperError {
	#[error("Failed to load configuration: {0}")]
	Configuration(#[from] ConfigurationError),
	#[error("Failed to open booking store: {0}")]
	Database(#[from] DatabaseError),
	#[error("{0}")]
	Booking(#[from] BookingError),
	#[error("Failed to set up logging: {0}")]
	Logging(String),
	#[error("IO error: {0}")]
	Io(#[from] std::io::Error),
	/// An expected, but unsuccessful outcome, e.g. booking an occupied room.
	#[error("{0}")]
	Rejected(String),
}
