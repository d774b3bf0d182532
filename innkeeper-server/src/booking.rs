use crate::booking::error::BookingError;
use crate::customer::model::Customer;
use crate::database::error::DatabaseError;
use crate::database::transaction::{ConnectionTransactionExtension, TransactionError};
use crate::database::{Connection, Database, Repository};
use crate::room::model::{Price, Room, RoomNumber};
use futures_util::FutureExt;
use std::sync::Arc;
use tracing::{debug, info};

pub mod error;
pub mod outcome;

pub use outcome::{BookingOutcome, CheckoutOutcome};

/// Rooms and their customers, kept on an injected storage backend.
///
/// Every mutation runs in a single transaction, so a room's availability and its customer record
/// always change together.
#[derive(Clone)]
pub struct BookingStore {
	database: Arc<dyn Database>,
	repository: Arc<dyn Repository>,
}

impl BookingStore {
	pub fn new(database: Arc<dyn Database>, repository: Arc<dyn Repository>) -> Self {
		Self { database, repository }
	}

	pub async fn add_room(&self, room_number: RoomNumber, room_type: &str, price: Price) -> Result<Room, BookingError> {
		let mut connection = self.database.connection().await?;
		let room_type = room_type.to_owned();

		let result = connection
			.run_in_transaction(|connection| {
				let repository = self.repository.clone();
				let room_type = room_type.clone();
				async move {
					repository
						.room()
						.create(connection, room_number, &room_type, price)
						.await
				}
				.boxed()
			})
			.await;

		match result {
			Ok(room) => {
				info!(%room_number, room_type = %room.room_type, %price, "Added room");
				Ok(room)
			}
			Err(TransactionError::Database(DatabaseError::UniqueViolation(_))) => {
				Err(BookingError::DuplicateRoom(room_number))
			}
			Err(error) => Err(error.into()),
		}
	}

	pub async fn list_rooms(&self) -> Result<Vec<Room>, BookingError> {
		let mut connection = self.database.connection().await?;
		Ok(self.repository.room().list(&mut *connection).await?)
	}

	/// Returns `None` if there is no such room.
	pub async fn check_availability(&self, room_number: RoomNumber) -> Result<Option<bool>, BookingError> {
		let mut connection = self.database.connection().await?;
		let room = self.repository.room().get(&mut *connection, room_number).await?;

		Ok(room.map(|room| room.available))
	}

	pub async fn book_room(
		&self,
		name: &str,
		contact: &str,
		room_number: RoomNumber,
	) -> Result<BookingOutcome, BookingError> {
		let mut connection = self.database.connection().await?;
		let name = name.to_owned();
		let contact = contact.to_owned();

		let outcome = connection
			.run_in_transaction(|connection| {
				reserve(
					self.repository.clone(),
					connection,
					name.clone(),
					contact.clone(),
					room_number,
				)
				.boxed()
			})
			.await?;

		match &outcome {
			BookingOutcome::Booked(customer) => info!(%room_number, name = %customer.name, "Booked room"),
			rejected => debug!(%room_number, "Booking rejected: {rejected}"),
		}
		Ok(outcome)
	}

	pub async fn list_customers(&self) -> Result<Vec<Customer>, BookingError> {
		let mut connection = self.database.connection().await?;
		Ok(self.repository.customer().list(&mut *connection).await?)
	}

	pub async fn checkout(&self, room_number: RoomNumber) -> Result<CheckoutOutcome, BookingError> {
		let mut connection = self.database.connection().await?;

		let outcome = connection
			.run_in_transaction(|connection| release(self.repository.clone(), connection, room_number).boxed())
			.await?;

		match &outcome {
			CheckoutOutcome::CheckedOut(customer) => info!(%room_number, name = %customer.name, "Checked out room"),
			rejected => debug!(%room_number, "Checkout rejected: {rejected}"),
		}
		Ok(outcome)
	}

	/// Release the storage backend, the store is unusable afterwards.
	pub async fn close(&self) {
		self.database.close().await;
	}
}

async fn reserve(
	repository: Arc<dyn Repository>,
	connection: &mut dyn Connection,
	name: String,
	contact: String,
	room_number: RoomNumber,
) -> Result<BookingOutcome, DatabaseError> {
	let Some(room) = repository.room().get(&mut *connection, room_number).await? else {
		return Ok(BookingOutcome::RoomNotFound(room_number));
	};

	if !room.available {
		return Ok(BookingOutcome::RoomOccupied(room_number));
	}

	repository
		.room()
		.set_availability(&mut *connection, room_number, false)
		.await?;
	let customer = repository
		.customer()
		.create(&mut *connection, &name, &contact, room_number)
		.await?;

	Ok(BookingOutcome::Booked(customer))
}

async fn release(
	repository: Arc<dyn Repository>,
	connection: &mut dyn Connection,
	room_number: RoomNumber,
) -> Result<CheckoutOutcome, DatabaseError> {
	let Some(customer) = repository.customer().get_by_room(&mut *connection, room_number).await? else {
		let room = repository.room().get(&mut *connection, room_number).await?;
		return Ok(match room {
			Some(_) => CheckoutOutcome::RoomVacant(room_number),
			None => CheckoutOutcome::RoomNotFound(room_number),
		});
	};

	repository
		.room()
		.set_availability(&mut *connection, room_number, true)
		.await?;
	repository
		.customer()
		.remove_by_room(&mut *connection, room_number)
		.await?;

	Ok(CheckoutOutcome::CheckedOut(customer))
}
