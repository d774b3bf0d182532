use crate::booking::BookingStore;
use crate::configuration::Configuration;
use crate::context::ApplicationContext;
use crate::error::InnkeeperError;
use crate::room::model::{Price, RoomNumber};
use crate::server::run_server;
use std::io::Write;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(clap::Parser)]
#[command(version, about = "Rooms and customers of a small hotel")]
pub struct Commandline {
	#[arg(short = 'c', long = "config-file", default_value = "configuration.toml")]
	pub configuration_file_path: String,
	#[command(subcommand)]
	pub command: Option<BaseCommand>,
}

#[derive(clap::Subcommand, Debug, Default, PartialEq)]
pub enum BaseCommand {
	/// Serve the HTTP API
	#[default]
	Serve,
	/// Print the configuration
	Configuration,
	/// Add a new, available room
	AddRoom {
		#[arg(allow_negative_numbers = true)]
		room_number: RoomNumber,
		room_type: String,
		price: Price,
	},
	/// List all rooms
	Rooms,
	/// Check whether a room can be booked
	Availability {
		#[arg(allow_negative_numbers = true)]
		room_number: RoomNumber,
	},
	/// Book a room for a customer
	Book {
		#[arg(long)]
		name: String,
		#[arg(long)]
		contact: String,
		#[arg(allow_negative_numbers = true)]
		room_number: RoomNumber,
	},
	/// List all customers
	Customers,
	/// Check the customer out of a room
	Checkout {
		#[arg(allow_negative_numbers = true)]
		room_number: RoomNumber,
	},
}

impl Commandline {
	pub async fn run(self) -> Result<(), InnkeeperError> {
		let configuration = Configuration::from_file(&self.configuration_file_path)?;
		initialize_logging(&configuration.log_filters)?;

		let base_command = self.command.unwrap_or_default();
		if base_command == BaseCommand::Configuration {
			let text = toml::to_string_pretty(&configuration).map_err(std::io::Error::other)?;
			print!("{text}");
			return Ok(());
		}

		let application_context = ApplicationContext::new(configuration).await?;
		let result = match base_command {
			BaseCommand::Serve => {
				info!(
					"Starting server. The API is available at 'http://{}/api'.",
					application_context.configuration.address
				);
				run_server(application_context.clone()).await
			}
			command => command.execute(&application_context.booking_store, &mut std::io::stdout()).await,
		};
		application_context.booking_store.close().await;

		result
	}
}

impl BaseCommand {
	/// Run one of the store operations, writing the human readable result to `output`.
	async fn execute(self, store: &BookingStore, output: &mut impl Write) -> Result<(), InnkeeperError> {
		use BaseCommand::*;
		match self {
			Serve | Configuration => {}
			AddRoom {
				room_number,
				room_type,
				price,
			} => {
				store.add_room(room_number, &room_type, price).await?;
				writeln!(output, "Room {room_number} added successfully!")?;
			}
			Rooms => {
				let rooms = store.list_rooms().await?;
				if rooms.is_empty() {
					writeln!(output, "No rooms available.")?;
				}
				for room in rooms {
					writeln!(output, "{room}")?;
				}
			}
			Availability { room_number } => match store.check_availability(room_number).await? {
				Some(true) => writeln!(output, "Room {room_number} is available.")?,
				Some(false) => writeln!(output, "Room {room_number} is occupied.")?,
				None => return Err(InnkeeperError::Rejected(format!("Room {room_number} does not exist."))),
			},
			Book {
				name,
				contact,
				room_number,
			} => {
				let outcome = store.book_room(&name, &contact, room_number).await?;
				if !outcome.is_success() {
					return Err(InnkeeperError::Rejected(outcome.to_string()));
				}
				writeln!(output, "{outcome}")?;
			}
			Customers => {
				let customers = store.list_customers().await?;
				if customers.is_empty() {
					writeln!(output, "No customer records.")?;
				}
				for customer in customers {
					writeln!(output, "{customer}")?;
				}
			}
			Checkout { room_number } => {
				let outcome = store.checkout(room_number).await?;
				if !outcome.is_success() {
					return Err(InnkeeperError::Rejected(outcome.to_string()));
				}
				writeln!(output, "{outcome}")?;
			}
		}
		Ok(())
	}
}

/// Logs go to stderr, stdout is reserved for command output.
fn initialize_logging(log_filters: &str) -> Result<(), InnkeeperError> {
	let filter = EnvFilter::try_new(log_filters).map_err(|error| InnkeeperError::Logging(error.to_string()))?;
	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.try_init()
		.map_err(|error| InnkeeperError::Logging(error.to_string()))
}

#[cfg(test)]
mod test {
	use super::*;
	use crate::database::memory::{MemoryDatabase, MemoryRepository};
	use clap::Parser;
	use std::sync::Arc;

	fn store() -> BookingStore {
		BookingStore::new(Arc::new(MemoryDatabase::default()), Arc::new(MemoryRepository))
	}

	async fn execute(store: &BookingStore, command: BaseCommand) -> Result<String, InnkeeperError> {
		let mut output = Vec::new();
		command.execute(store, &mut output).await?;
		Ok(String::from_utf8(output).expect("Output is not UTF-8"))
	}

	fn parse(arguments: &[&str]) -> BaseCommand {
		Commandline::try_parse_from(std::iter::once("innkeeper").chain(arguments.iter().copied()))
			.expect("Failed to parse commandline")
			.command
			.unwrap_or_default()
	}

	#[test]
	fn should_default_to_serving() {
		let commandline = Commandline::try_parse_from(["innkeeper"]).unwrap();

		assert_eq!("configuration.toml", commandline.configuration_file_path);
		assert_eq!(BaseCommand::Serve, commandline.command.unwrap_or_default());
	}

	#[test]
	fn should_parse_booking() {
		let command = parse(&["book", "--name", "Alice", "--contact", "555-1111", "101"]);

		assert_eq!(
			BaseCommand::Book {
				name: "Alice".to_owned(),
				contact: "555-1111".to_owned(),
				room_number: RoomNumber::from(101),
			},
			command
		);
	}

	#[test]
	fn should_parse_negative_room_numbers() {
		assert_eq!(
			BaseCommand::Availability {
				room_number: RoomNumber::from(-3),
			},
			parse(&["availability", "-3"])
		);
		assert_eq!(
			BaseCommand::Checkout {
				room_number: RoomNumber::from(-3),
			},
			parse(&["checkout", "-3"])
		);
		assert_eq!(
			BaseCommand::Book {
				name: "Alice".to_owned(),
				contact: "555-1111".to_owned(),
				room_number: RoomNumber::from(-3),
			},
			parse(&["book", "--name", "Alice", "--contact", "555-1111", "-3"])
		);
	}

	#[test]
	fn should_reject_malformed_numbers() {
		assert!(Commandline::try_parse_from(["innkeeper", "availability", "abc"]).is_err());
		assert!(Commandline::try_parse_from(["innkeeper", "add-room", "101", "Single", "cheap"]).is_err());
	}

	#[tokio::test]
	async fn should_report_empty_listings() {
		let store = store();

		assert_eq!("No rooms available.\n", execute(&store, BaseCommand::Rooms).await.unwrap());
		assert_eq!("No customer records.\n", execute(&store, BaseCommand::Customers).await.unwrap());
	}

	#[tokio::test]
	async fn should_book_and_check_out() {
		let store = store();

		let added = execute(&store, parse(&["add-room", "101", "Single", "50"])).await.unwrap();
		assert_eq!("Room 101 added successfully!\n", added);
		let rooms = execute(&store, BaseCommand::Rooms).await.unwrap();
		assert_eq!("Room Number: 101, Type: Single, Price: 50.00, Available: Yes\n", rooms);

		let booked = execute(&store, parse(&["book", "--name", "Alice", "--contact", "555-1111", "101"]))
			.await
			.unwrap();
		assert_eq!("Room 101 booked successfully for Alice!\n", booked);
		let availability = execute(&store, parse(&["availability", "101"])).await.unwrap();
		assert_eq!("Room 101 is occupied.\n", availability);
		let customers = execute(&store, BaseCommand::Customers).await.unwrap();
		assert_eq!("Customer Name: Alice, Contact: 555-1111, Room Booked: 101\n", customers);

		let checked_out = execute(&store, parse(&["checkout", "101"])).await.unwrap();
		assert_eq!("Room 101 checked out successfully!\n", checked_out);
	}

	#[tokio::test]
	async fn should_fail_on_rejected_booking() {
		let store = store();

		let result = execute(&store, parse(&["book", "--name", "Bob", "--contact", "555-2222", "999"])).await;

		assert!(
			matches!(&result, Err(InnkeeperError::Rejected(message)) if message.contains("not available")),
			"Expected rejection, got: {result:?}"
		);
	}

	#[tokio::test]
	async fn should_fail_on_missing_room_availability() {
		let store = store();

		let result = execute(&store, parse(&["availability", "999"])).await;

		assert!(matches!(result, Err(InnkeeperError::Rejected(_))));
	}
}
