use serde::Serialize;
use sqlx::FromRow;
use std::fmt::{Display, Formatter};

pub use crate::room::number::RoomNumber;
pub use crate::room::price::Price;

#[derive(FromRow, Serialize, Clone, Debug, PartialEq)]
pub struct Room {
	pub room_number: RoomNumber,
	pub room_type: String,
	pub price: Price,
	#[sqlx(rename = "availability")]
	pub available: bool,
}

impl Display for Room {
	fn fmt(&self, formatter: &mut Formatter) -> std::fmt::Result {
		write!(
			formatter,
			"Room Number: {}, Type: {}, Price: {}, Available: {}",
			self.room_number,
			self.room_type,
			self.price,
			if self.available { "Yes" } else { "No" }
		)
	}
}
