use crate::booking::BookingStore;
use crate::configuration::{Backend, Configuration};
use crate::database::error::DatabaseError;
use crate::database::memory::{MemoryDatabase, MemoryRepository};
use crate::database::sqlite::{SqliteDatabase, SqliteRepository};
use crate::database::{Database, Repository};
use axum::extract::FromRef;
use std::sync::Arc;
use tracing::info;

#[derive(Clone, FromRef)]
pub struct ApplicationContext {
	pub configuration: Configuration,
	pub booking_store: BookingStore,
}

impl ApplicationContext {
	/// Open the configured storage backend and bring its schema up to date.
	pub async fn new(configuration: Configuration) -> Result<ApplicationContext, DatabaseError> {
		let database_configuration = &configuration.database;
		let (database, repository): (Arc<dyn Database>, Arc<dyn Repository>) = match database_configuration.backend {
			Backend::Sqlite => (
				Arc::new(SqliteDatabase::connect(database_configuration).await?),
				Arc::new(SqliteRepository),
			),
			Backend::Memory => (Arc::new(MemoryDatabase::default()), Arc::new(MemoryRepository)),
		};
		database.migrate().await?;
		info!(backend = ?database_configuration.backend, "Opened booking store");

		Ok(Self {
			booking_store: BookingStore::new(database, repository),
			configuration,
		})
	}
}
