use crate::context::ApplicationContext;
use crate::error::InnkeeperError;
use axum::Router;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

pub mod rest_api;

pub async fn run_server(application_context: ApplicationContext) -> Result<(), InnkeeperError> {
	let address = application_context.configuration.address;
	let listener = TcpListener::bind(address).await?;
	info!(%address, "Listening for HTTP requests");

	axum::serve(listener, create_router(application_context))
		.with_graceful_shutdown(shutdown_signal())
		.await?;

	info!("Server stopped");
	Ok(())
}

pub fn create_router(application_context: ApplicationContext) -> Router {
	Router::new()
		.nest("/api", rest_api::rest_api())
		.layer(TraceLayer::new_for_http())
		.with_state(application_context)
}

async fn shutdown_signal() {
	match tokio::signal::ctrl_c().await {
		Ok(()) => info!("Received Ctrl-C, shutting down"),
		Err(error) => {
			// Without a signal handler, only killing the process stops the server.
			error!(%error, "Failed to listen for Ctrl-C");
			std::future::pending::<()>().await;
		}
	}
}
