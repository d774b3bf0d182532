use super::{MemoryRepository, memory_connection};
use crate::customer::model::Customer;
use crate::customer::repository::CustomerRepository;
use crate::database::Connection;
use crate::database::error::DatabaseError;
use crate::room::model::RoomNumber;
use anyhow::anyhow;
use async_trait::async_trait;

#[async_trait]
impl CustomerRepository for MemoryRepository {
	async fn create(
		&self,
		connection: &mut dyn Connection,
		name: &str,
		contact: &str,
		room_number: RoomNumber,
	) -> Result<Customer, DatabaseError> {
		let connection = memory_connection(connection)?;

		connection.write_state(|state| {
			if !state.rooms.contains_key(&room_number) {
				return Err(DatabaseError::ForeignKeyViolation(anyhow!(
					"Room {room_number} does not exist"
				)));
			}

			if state.customers.iter().any(|customer| customer.room_number == room_number) {
				return Err(DatabaseError::UniqueViolation(anyhow!(
					"Room {room_number} already has a customer"
				)));
			}

			let customer = Customer {
				name: name.to_owned(),
				contact: contact.to_owned(),
				room_number,
			};
			state.customers.push(customer.clone());
			Ok(customer)
		})
		.await
	}

	async fn get_by_room(
		&self,
		connection: &mut dyn Connection,
		room_number: RoomNumber,
	) -> Result<Option<Customer>, DatabaseError> {
		let connection = memory_connection(connection)?;

		Ok(connection.read_state(|state| {
			state
				.customers
				.iter()
				.find(|customer| customer.room_number == room_number)
				.cloned()
		}))
	}

	async fn list(&self, connection: &mut dyn Connection) -> Result<Vec<Customer>, DatabaseError> {
		let connection = memory_connection(connection)?;

		Ok(connection.read_state(|state| state.customers.clone()))
	}

	async fn remove_by_room(&self, connection: &mut dyn Connection, room_number: RoomNumber) -> Result<(), DatabaseError> {
		let connection = memory_connection(connection)?;

		connection
			.write_state(|state| state.customers.retain(|customer| customer.room_number != room_number))
			.await;
		Ok(())
	}
}
