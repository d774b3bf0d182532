use crate::commandline::Commandline;
use clap::Parser;
use std::process::ExitCode;

mod booking;
mod commandline;
mod configuration;
mod context;
mod customer;
mod database;
mod error;
mod room;
mod server;

#[tokio::main]
async fn main() -> ExitCode {
	let commandline = Commandline::parse();
	match commandline.run().await {
		Ok(()) => ExitCode::SUCCESS,
		Err(error) => {
			eprintln!("{error}");
			ExitCode::FAILURE
		}
	}
}
