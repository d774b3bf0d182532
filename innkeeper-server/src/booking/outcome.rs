//! Expected results of booking and checking out, including the rejected ones.

use crate::customer::model::Customer;
use crate::room::model::RoomNumber;
use std::fmt::{Display, Formatter};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BookingOutcome {
	Booked(Customer),
	RoomNotFound(RoomNumber),
	RoomOccupied(RoomNumber),
}

impl BookingOutcome {
	pub fn is_success(&self) -> bool {
		matches!(self, Self::Booked(_))
	}
}

impl Display for BookingOutcome {
	fn fmt(&self, formatter: &mut Formatter) -> std::fmt::Result {
		use BookingOutcome::*;
		match self {
			Booked(customer) => write!(
				formatter,
				"Room {} booked successfully for {}!",
				customer.room_number, customer.name
			),
			RoomNotFound(room_number) => write!(formatter, "Room {room_number} is not available: no such room."),
			RoomOccupied(room_number) => write!(formatter, "Room {room_number} is not available: it is occupied."),
		}
	}
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CheckoutOutcome {
	CheckedOut(Customer),
	RoomVacant(RoomNumber),
	RoomNotFound(RoomNumber),
}

impl CheckoutOutcome {
	pub fn is_success(&self) -> bool {
		matches!(self, Self::CheckedOut(_))
	}
}

impl Display for CheckoutOutcome {
	fn fmt(&self, formatter: &mut Formatter) -> std::fmt::Result {
		use CheckoutOutcome::*;
		match self {
			CheckedOut(customer) => write!(formatter, "Room {} checked out successfully!", customer.room_number),
			RoomVacant(room_number) => write!(formatter, "No customer found in Room {room_number}."),
			RoomNotFound(room_number) => write!(formatter, "No customer found in Room {room_number}: no such room."),
		}
	}
}
