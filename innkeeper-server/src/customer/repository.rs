use crate::customer::model;
use crate::database::Connection;
use crate::database::error::DatabaseError;
use crate::room::model::RoomNumber;
use async_trait::async_trait;
use static_assertions::assert_obj_safe;


#[async_trait]
pub trait CustomerRepository: Send + Sync + 'static {
	/// Fails with [`DatabaseError::ForeignKeyViolation`] for unknown rooms
	/// and with [`DatabaseError::UniqueViolation`] if the room already has a customer.
	async fn create(
		&self,
		connection: &mut dyn Connection,
		name: &str,
		contact: &str,
		room_number: RoomNumber,
	) -> Result<model::Customer, DatabaseError>;
	async fn get_by_room(
		&self,
		connection: &mut dyn Connection,
		room_number: RoomNumber,
	) -> Result<Option<model::Customer>, DatabaseError>;
	/// All customers in the order they were booked.
	async fn list(&self, connection: &mut dyn Connection) -> Result<Vec<model::Customer>, DatabaseError>;
	async fn remove_by_room(&self, connection: &mut dyn Connection, room_number: RoomNumber) -> Result<(), DatabaseError>;
}

assert_obj_safe!(CustomerRepository);
