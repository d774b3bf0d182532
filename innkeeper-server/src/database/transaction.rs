use crate::database::Connection;
use crate::database::error::DatabaseError;
use async_trait::async_trait;
use futures_util::future::BoxFuture;
use static_assertions::assert_obj_safe;
use std::future::Future;
use tracing::warn;

#[derive(Debug, thiserror::Error)]
pub enum TransactionError {
	#[error("Database error: {0}")]
	Database(#[from] DatabaseError),
	#[error("Maximum attempts exceeded ({limit})")]
	AttemptsExhausted { limit: usize },
}

pub trait ConnectionTransactionExtension {
	/// Run `operation` inside a transaction, committing on success and rolling back on error.
	///
	/// The whole operation is retried while the database reports that it is busy.
	fn run_in_transaction<Operation, Output>(
		&mut self,
		operation: Operation,
	) -> impl Future<Output = Result<Output, TransactionError>> + Send
	where
		Output: Send,
		Operation: for<'tx> FnMut(&'tx mut dyn Connection) -> BoxFuture<'tx, Result<Output, DatabaseError>> + Send;
}

impl<C: Connection + ?Sized> ConnectionTransactionExtension for C {
	async fn run_in_transaction<Operation, Output>(&mut self, mut operation: Operation) -> Result<Output, TransactionError>
	where
		Output: Send,
		Operation: for<'tx> FnMut(&'tx mut dyn Connection) -> BoxFuture<'tx, Result<Output, DatabaseError>> + Send,
	{
		const MAXIMUM_ATTEMPTS: usize = 5;
		for attempt in 1..=MAXIMUM_ATTEMPTS {
			let mut transaction = self.begin_transaction().await?;
			let busy_error = match operation(transaction.as_connection()).await {
				Ok(output) => match transaction.commit().await {
					Ok(()) => return Ok(output),
					Err(DatabaseError::Busy(error)) => error,
					Err(error) => return Err(error.into()),
				},
				Err(DatabaseError::Busy(error)) => {
					transaction.rollback().await?;
					error
				}
				Err(error) => {
					transaction.rollback().await?;
					return Err(error.into());
				}
			};

			warn!(attempt, ?busy_error, "Database busy, retrying transaction: {}", busy_error);
		}

		Err(TransactionError::AttemptsExhausted {
			limit: MAXIMUM_ATTEMPTS,
		})
	}
}

#[async_trait]
pub trait Transaction: Send + Sync {
	fn as_connection(&mut self) -> &mut dyn Connection;

	async fn commit(self: Box<Self>) -> Result<(), DatabaseError>;
	async fn rollback(self: Box<Self>) -> Result<(), DatabaseError>;
}

assert_obj_safe!(Transaction);
