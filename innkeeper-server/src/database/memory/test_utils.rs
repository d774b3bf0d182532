use crate::database::memory::{MemoryDatabase, MemoryRepository};
use crate::database::test::TestFactory;
use crate::database::{Connection, Database, Repository};
use std::sync::Arc;

pub struct MemoryTestFactory;

impl TestFactory for MemoryTestFactory {
	async fn connection() -> Box<dyn Connection> {
		Self::database()
			.await
			.connection()
			.await
			.expect("Failed to connect to database")
	}

	async fn database() -> Arc<dyn Database> {
		Arc::new(MemoryDatabase::default())
	}

	fn repository() -> Arc<dyn Repository> {
		Arc::new(MemoryRepository)
	}
}
