//! In-memory backend, used for tests and throwaway runs.
//!
//! Transactions work on a private snapshot of the shared state that replaces it on commit.
//! Writers are serialised: an open transaction holds the writer lock until it ends, so no
//! committed change is overwritten by another snapshot.

use crate::customer::model::Customer;
use crate::customer::repository::CustomerRepository;
use crate::database::error::DatabaseError;
use crate::database::transaction::Transaction;
use crate::database::{Connection, Database, Repository};
use crate::room::model::{Room, RoomNumber};
use crate::room::repository::RoomRepository;
use anyhow::anyhow;
use async_trait::async_trait;
use parking_lot::Mutex;
use std::any::Any;
use std::collections::BTreeMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::{Mutex as WriterLock, OwnedMutexGuard};

mod customer;
mod room;
#[cfg(test)]
pub mod test_utils;

#[derive(Clone, Debug, Default)]
struct MemoryState {
	rooms: BTreeMap<RoomNumber, Room>,
	customers: Vec<Customer>,
}

#[derive(Clone, Default)]
pub struct MemoryDatabase {
	state: Arc<Mutex<MemoryState>>,
	writer: Arc<WriterLock<()>>,
	closed: Arc<AtomicBool>,
}

#[async_trait]
impl Database for MemoryDatabase {
	async fn migrate(&self) -> Result<(), DatabaseError> {
		Ok(())
	}

	async fn connection(&self) -> Result<Box<dyn Connection>, DatabaseError> {
		if self.closed.load(Ordering::Acquire) {
			return Err(DatabaseError::Connection(anyhow!("In-memory database was closed")));
		}

		Ok(Box::new(MemoryConnection {
			state: self.state.clone(),
			writer: self.writer.clone(),
			transaction: None,
		}))
	}

	async fn close(&self) {
		self.closed.store(true, Ordering::Release);
	}
}

pub struct MemoryConnection {
	state: Arc<Mutex<MemoryState>>,
	writer: Arc<WriterLock<()>>,
	transaction: Option<OpenTransaction>,
}

struct OpenTransaction {
	/// Working copy of the state, published on commit.
	snapshot: MemoryState,
	_writer: OwnedMutexGuard<()>,
}

impl MemoryConnection {
	fn read_state<Output>(&self, operation: impl FnOnce(&MemoryState) -> Output) -> Output {
		match &self.transaction {
			Some(transaction) => operation(&transaction.snapshot),
			None => operation(&*self.state.lock()),
		}
	}

	/// Outside of a transaction, the write waits for open transactions of other connections.
	async fn write_state<Output>(&mut self, operation: impl FnOnce(&mut MemoryState) -> Output) -> Output {
		match &mut self.transaction {
			Some(transaction) => operation(&mut transaction.snapshot),
			None => {
				let _writer = self.writer.lock().await;
				operation(&mut *self.state.lock())
			}
		}
	}
}

#[async_trait]
impl Connection for MemoryConnection {
	async fn begin_transaction<'connection>(
		&'connection mut self,
	) -> Result<Box<dyn Transaction + 'connection>, DatabaseError> {
		if self.transaction.is_some() {
			return Err(DatabaseError::Database(anyhow!(
				"Nested transactions are not supported by the in-memory database"
			)));
		}

		let writer = self.writer.clone().lock_owned().await;
		self.transaction = Some(OpenTransaction {
			snapshot: self.state.lock().clone(),
			_writer: writer,
		});
		Ok(Box::new(MemoryTransaction { connection: self }))
	}
}

struct MemoryTransaction<'connection> {
	connection: &'connection mut MemoryConnection,
}

#[async_trait]
impl<'connection> Transaction for MemoryTransaction<'connection> {
	fn as_connection(&mut self) -> &mut dyn Connection {
		&mut *self.connection
	}

	async fn commit(self: Box<Self>) -> Result<(), DatabaseError> {
		if let Some(transaction) = self.connection.transaction.take() {
			*self.connection.state.lock() = transaction.snapshot;
		}
		Ok(())
	}

	async fn rollback(self: Box<Self>) -> Result<(), DatabaseError> {
		self.connection.transaction = None;
		Ok(())
	}
}

impl Drop for MemoryTransaction<'_> {
	fn drop(&mut self) {
		self.connection.transaction = None;
	}
}

#[derive(Default, Clone, Copy)]
pub struct MemoryRepository;

impl Repository for MemoryRepository {
	fn room(&self) -> &dyn RoomRepository {
		self
	}

	fn customer(&self) -> &dyn CustomerRepository {
		self
	}
}

fn memory_connection(connection: &mut dyn Connection) -> Result<&mut MemoryConnection, DatabaseError> {
	let type_name = connection.type_name();

	let connection: &mut dyn Any = connection;
	connection.downcast_mut::<MemoryConnection>().ok_or_else(|| {
		DatabaseError::DatabaseMismatch(anyhow!("Expected in-memory connection, got {type_name}"))
	})
}
