use super::{SqliteRepository, sqlite_connection};
use crate::customer::model::Customer;
use crate::customer::repository::CustomerRepository;
use crate::database::Connection;
use crate::database::error::DatabaseError;
use crate::room::model::RoomNumber;
use async_trait::async_trait;
use sqlx::{query, query_as};

#[async_trait]
impl CustomerRepository for SqliteRepository {
	async fn create(
		&self,
		connection: &mut dyn Connection,
		name: &str,
		contact: &str,
		room_number: RoomNumber,
	) -> Result<Customer, DatabaseError> {
		let connection = sqlite_connection(connection)?;

		query_as(
			r"INSERT INTO customers(name, contact, room_booked) VALUES (?1, ?2, ?3)
			RETURNING
				name,
				contact,
				room_booked",
		)
		.bind(name)
		.bind(contact)
		.bind(room_number)
		.fetch_one(connection)
		.await
		.map_err(Into::into)
	}

	async fn get_by_room(
		&self,
		connection: &mut dyn Connection,
		room_number: RoomNumber,
	) -> Result<Option<Customer>, DatabaseError> {
		let connection = sqlite_connection(connection)?;

		query_as(
			r"SELECT name, contact, room_booked
			FROM customers
			WHERE room_booked = ?1",
		)
		.bind(room_number)
		.fetch_optional(connection)
		.await
		.map_err(Into::into)
	}

	async fn list(&self, connection: &mut dyn Connection) -> Result<Vec<Customer>, DatabaseError> {
		let connection = sqlite_connection(connection)?;

		query_as(
			r"SELECT name, contact, room_booked
			FROM customers
			ORDER BY rowid ASC",
		)
		.fetch_all(connection)
		.await
		.map_err(Into::into)
	}

	async fn remove_by_room(&self, connection: &mut dyn Connection, room_number: RoomNumber) -> Result<(), DatabaseError> {
		let connection = sqlite_connection(connection)?;

		query(r"DELETE FROM customers WHERE room_booked = ?1")
			.bind(room_number)
			.execute(connection)
			.await?;
		Ok(())
	}
}
