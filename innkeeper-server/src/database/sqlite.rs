use crate::configuration::DatabaseConfiguration;
use crate::customer::repository::CustomerRepository;
use crate::database::error::{DatabaseError, IntoStoreResult};
use crate::database::transaction::Transaction;
use crate::database::{Connection, Database, Repository};
use crate::room::repository::RoomRepository;
use anyhow::anyhow;
use async_trait::async_trait;
use sqlx::pool::PoolConnection;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Sqlite, SqliteConnection, SqlitePool, migrate};
use std::any::Any;
use std::ops::DerefMut;
use std::str::FromStr;

mod customer;
mod room;
#[cfg(test)]
pub mod test_utils;

#[derive(Clone)]
pub struct SqliteDatabase {
	pool: SqlitePool,
}

impl SqliteDatabase {
	pub async fn connect(configuration: &DatabaseConfiguration) -> Result<Self, DatabaseError> {
		let options = SqliteConnectOptions::from_str(&configuration.url)
			.connection_error("Invalid SQLite database URL")?
			.create_if_missing(true)
			.foreign_keys(true)
			.busy_timeout(configuration.busy_timeout);
		let pool = SqlitePoolOptions::new()
			.max_connections(configuration.max_connections)
			// in-memory databases vanish with their last connection
			.idle_timeout(None)
			.max_lifetime(None)
			.connect_with(options)
			.await
			.connection_error("Failed to connect to database")?;

		Ok(Self { pool })
	}
}

#[async_trait]
impl Database for SqliteDatabase {
	async fn migrate(&self) -> Result<(), DatabaseError> {
		migrate!().run(&self.pool).await.map_err(Into::into)
	}

	async fn connection(&self) -> Result<Box<dyn Connection>, DatabaseError> {
		self.pool
			.acquire()
			.await
			.map(|connection| Box::new(connection) as Box<dyn Connection>)
			.map_err(Into::into)
	}

	async fn close(&self) {
		self.pool.close().await;
	}
}

#[async_trait]
impl Connection for SqliteConnection {
	async fn begin_transaction<'connection>(
		&'connection mut self,
	) -> Result<Box<dyn Transaction + 'connection>, DatabaseError> {
		let transaction = sqlx::Connection::begin(self).await?;
		Ok(Box::new(transaction))
	}
}

#[async_trait]
impl Connection for PoolConnection<Sqlite> {
	async fn begin_transaction<'connection>(
		&'connection mut self,
	) -> Result<Box<dyn Transaction + 'connection>, DatabaseError> {
		let transaction = sqlx::Connection::begin(self.deref_mut()).await?;
		Ok(Box::new(transaction))
	}
}

#[async_trait]
impl<'connection> Transaction for sqlx::Transaction<'connection, Sqlite> {
	fn as_connection(&mut self) -> &mut dyn Connection {
		self.deref_mut()
	}

	async fn commit(self: Box<Self>) -> Result<(), DatabaseError> {
		sqlx::Transaction::commit(*self).await.map_err(Into::into)
	}

	async fn rollback(self: Box<Self>) -> Result<(), DatabaseError> {
		sqlx::Transaction::rollback(*self).await.map_err(Into::into)
	}
}

#[derive(Default, Clone, Copy)]
pub struct SqliteRepository;

impl Repository for SqliteRepository {
	fn room(&self) -> &dyn RoomRepository {
		self
	}

	fn customer(&self) -> &dyn CustomerRepository {
		self
	}
}

fn sqlite_connection(connection: &mut dyn Connection) -> Result<&mut SqliteConnection, DatabaseError> {
	let type_name = connection.type_name();

	let connection: &mut dyn Any = connection;

	if connection.is::<PoolConnection<Sqlite>>() {
		return connection
			.downcast_mut::<PoolConnection<Sqlite>>()
			.map(DerefMut::deref_mut)
			.ok_or_else(|| DatabaseError::DatabaseMismatch(anyhow!("Failed to downcast {type_name}")));
	}

	connection
		.downcast_mut::<SqliteConnection>()
		.ok_or_else(|| DatabaseError::DatabaseMismatch(anyhow!("Expected SQLite connection, got {type_name}")))
}
