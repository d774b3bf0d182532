use crate::database::Connection;
use crate::database::error::DatabaseError;
use crate::room::model::{Price, Room, RoomNumber};
use async_trait::async_trait;
use static_assertions::assert_obj_safe;


#[async_trait]
pub trait RoomRepository: Send + Sync + 'static {
	/// Create an available room, fails with [`DatabaseError::UniqueViolation`] if the number is taken.
	async fn create(
		&self,
		connection: &mut dyn Connection,
		room_number: RoomNumber,
		room_type: &str,
		price: Price,
	) -> Result<Room, DatabaseError>;
	async fn get(&self, connection: &mut dyn Connection, room_number: RoomNumber)
	-> Result<Option<Room>, DatabaseError>;
	/// All rooms, ordered by room number.
	async fn list(&self, connection: &mut dyn Connection) -> Result<Vec<Room>, DatabaseError>;
	/// Fails with [`DatabaseError::NotFound`] if there is no such room.
	async fn set_availability(
		&self,
		connection: &mut dyn Connection,
		room_number: RoomNumber,
		available: bool,
	) -> Result<(), DatabaseError>;
}

assert_obj_safe!(RoomRepository);
