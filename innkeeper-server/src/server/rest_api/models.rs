use crate::customer::model::Customer;
use crate::room::model::{Price, Room, RoomNumber};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

#[derive(Deserialize)]
pub struct AddRoomRequest {
	pub room_number: RoomNumber,
	pub room_type: String,
	pub price: Price,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct RoomResponse {
	pub room_number: i64,
	pub room_type: String,
	pub price: f64,
	pub available: bool,
}

impl From<Room> for RoomResponse {
	fn from(room: Room) -> Self {
		Self {
			room_number: room.room_number.into(),
			room_type: room.room_type,
			price: room.price.value(),
			available: room.available,
		}
	}
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct AvailabilityResponse {
	pub room_number: i64,
	pub available: bool,
}

#[derive(Deserialize)]
pub struct BookingRequest {
	pub name: String,
	pub contact: String,
	pub room_number: RoomNumber,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct CustomerResponse {
	pub name: String,
	pub contact: String,
	pub room_number: i64,
}

impl From<Customer> for CustomerResponse {
	fn from(customer: Customer) -> Self {
		Self {
			name: customer.name,
			contact: customer.contact,
			room_number: customer.room_number.into(),
		}
	}
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct OperationResponse {
	pub success: bool,
	pub message: String,
}

impl OperationResponse {
	pub fn success(outcome: &impl Display) -> Self {
		Self {
			success: true,
			message: outcome.to_string(),
		}
	}
}
