use super::{MemoryRepository, memory_connection};
use crate::database::Connection;
use crate::database::error::DatabaseError;
use crate::room::model::{Price, Room, RoomNumber};
use crate::room::repository::RoomRepository;
use anyhow::anyhow;
use async_trait::async_trait;
use std::collections::btree_map::Entry;

#[async_trait]
impl RoomRepository for MemoryRepository {
	async fn create(
		&self,
		connection: &mut dyn Connection,
		room_number: RoomNumber,
		room_type: &str,
		price: Price,
	) -> Result<Room, DatabaseError> {
		let connection = memory_connection(connection)?;

		connection.write_state(|state| {
			let Entry::Vacant(entry) = state.rooms.entry(room_number) else {
				return Err(DatabaseError::UniqueViolation(anyhow!(
					"Room {room_number} already exists"
				)));
			};

			let room = Room {
				room_number,
				room_type: room_type.to_owned(),
				price,
				available: true,
			};
			Ok(entry.insert(room).clone())
		})
		.await
	}

	async fn get(&self, connection: &mut dyn Connection, room_number: RoomNumber) -> Result<Option<Room>, DatabaseError> {
		let connection = memory_connection(connection)?;

		Ok(connection.read_state(|state| state.rooms.get(&room_number).cloned()))
	}

	async fn list(&self, connection: &mut dyn Connection) -> Result<Vec<Room>, DatabaseError> {
		let connection = memory_connection(connection)?;

		Ok(connection.read_state(|state| state.rooms.values().cloned().collect()))
	}

	async fn set_availability(
		&self,
		connection: &mut dyn Connection,
		room_number: RoomNumber,
		available: bool,
	) -> Result<(), DatabaseError> {
		let connection = memory_connection(connection)?;

		connection.write_state(|state| {
			let room = state
				.rooms
				.get_mut(&room_number)
				.ok_or_else(|| DatabaseError::NotFound(anyhow!("Room {room_number} not found")))?;
			room.available = available;
			Ok(())
		})
		.await
	}
}
