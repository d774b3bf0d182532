use crate::room::model::RoomNumber;
use serde::Serialize;
use sqlx::FromRow;
use std::fmt::{Display, Formatter};

/// Booking record of the customer currently occupying a room.
///
/// Rooms are referenced by number only, look them up in the room repository for details.
#[derive(FromRow, Serialize, Clone, Debug, PartialEq, Eq)]
pub struct Customer {
	pub name: String,
	pub contact: String,
	#[sqlx(rename = "room_booked")]
	pub room_number: RoomNumber,
}

impl Display for Customer {
	fn fmt(&self, formatter: &mut Formatter) -> std::fmt::Result {
		write!(
			formatter,
			"Customer Name: {}, Contact: {}, Room Booked: {}",
			self.name, self.contact, self.room_number
		)
	}
}
