use crate::customer::repository::CustomerRepository;
use crate::database::error::DatabaseError;
use crate::database::transaction::Transaction;
use crate::room::repository::RoomRepository;
use async_trait::async_trait;
use static_assertions::assert_obj_safe;
use std::any::{Any, type_name};

pub mod memory;
pub mod sqlite;

pub mod error;
pub mod transaction;

#[async_trait]
pub trait Database: Send + Sync {
	async fn migrate(&self) -> Result<(), DatabaseError>;

	async fn connection(&self) -> Result<Box<dyn Connection>, DatabaseError>;

	/// Release the underlying storage handle. Connections acquired afterwards fail.
	async fn close(&self);
}

assert_obj_safe!(Database);

#[async_trait]
pub trait Connection: Any + Send + Sync {
	fn type_name(&self) -> &'static str {
		type_name::<Self>()
	}

	async fn begin_transaction<'connection>(
		&'connection mut self,
	) -> Result<Box<dyn Transaction + 'connection>, DatabaseError>;
}

assert_obj_safe!(Connection);

pub trait Repository: RoomRepository + CustomerRepository + Send + Sync + 'static {
	fn room(&self) -> &dyn RoomRepository;
	fn customer(&self) -> &dyn CustomerRepository;
}

assert_obj_safe!(Repository);

#[cfg(test)]
pub(crate) mod test {
	use crate::database::{Connection, Database, Repository};
	use std::sync::Arc;

	pub trait TestFactory {
		async fn connection() -> Box<dyn Connection>;
		async fn database() -> Arc<dyn Database>;
		fn repository() -> Arc<dyn Repository>;
	}
}
