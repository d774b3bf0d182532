use super::{SqliteRepository, sqlite_connection};
use crate::database::Connection;
use crate::database::error::DatabaseError;
use crate::room::model::{Price, Room, RoomNumber};
use crate::room::repository::RoomRepository;
use anyhow::anyhow;
use async_trait::async_trait;
use sqlx::{query, query_as};

#[async_trait]
impl RoomRepository for SqliteRepository {
	async fn create(
		&self,
		connection: &mut dyn Connection,
		room_number: RoomNumber,
		room_type: &str,
		price: Price,
	) -> Result<Room, DatabaseError> {
		let connection = sqlite_connection(connection)?;

		query_as(
			r"INSERT INTO rooms(room_number, room_type, price, availability) VALUES (?1, ?2, ?3, 1)
			RETURNING
				room_number,
				room_type,
				price,
				availability",
		)
		.bind(room_number)
		.bind(room_type)
		.bind(price)
		.fetch_one(connection)
		.await
		.map_err(Into::into)
	}

	async fn get(&self, connection: &mut dyn Connection, room_number: RoomNumber) -> Result<Option<Room>, DatabaseError> {
		let connection = sqlite_connection(connection)?;

		query_as(
			r"SELECT room_number, room_type, price, availability
			FROM rooms
			WHERE room_number = ?1",
		)
		.bind(room_number)
		.fetch_optional(connection)
		.await
		.map_err(Into::into)
	}

	async fn list(&self, connection: &mut dyn Connection) -> Result<Vec<Room>, DatabaseError> {
		let connection = sqlite_connection(connection)?;

		query_as(
			r"SELECT room_number, room_type, price, availability
			FROM rooms
			ORDER BY room_number ASC",
		)
		.fetch_all(connection)
		.await
		.map_err(Into::into)
	}

	async fn set_availability(
		&self,
		connection: &mut dyn Connection,
		room_number: RoomNumber,
		available: bool,
	) -> Result<(), DatabaseError> {
		let connection = sqlite_connection(connection)?;

		let result = query(r"UPDATE rooms SET availability = ?1 WHERE room_number = ?2")
			.bind(available)
			.bind(room_number)
			.execute(connection)
			.await?;

		if result.rows_affected() == 0 {
			return Err(DatabaseError::NotFound(anyhow!("Room {room_number} not found")));
		}
		Ok(())
	}
}
