use thiserror::Error;

/// Malformed user input, rejected before it reaches the booking store.
#[derive(Error, Debug, PartialEq)]
pub enum InputError {
	#[error("Invalid room number '{0}', expected an integer.")]
	InvalidRoomNumber(String),
	#[error("Invalid price '{0}', expected a number.")]
	InvalidPrice(String),
	#[error("Price must not be negative, got {0}.")]
	NegativePrice(f64),
	#[error("Price must be a finite number.")]
	NonFinitePrice,
}
