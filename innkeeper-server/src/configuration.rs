use serde::{Deserialize, Serialize};
use std::fs::read_to_string;
use std::net::SocketAddr;
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct Configuration {
	#[serde(with = "socket_addr_serde")]
	pub address: SocketAddr,
	pub log_filters: String,
	pub database: DatabaseConfiguration,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct DatabaseConfiguration {
	pub backend: Backend,
	/// Only used by the sqlite backend.
	pub url: String,
	#[serde(with = "humantime_serde")]
	pub busy_timeout: Duration,
	pub max_connections: u32,
}

#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
	Sqlite,
	Memory,
}

#[cfg(test)]
impl DatabaseConfiguration {
	pub fn in_memory_sqlite() -> Self {
		Self {
			backend: Backend::Sqlite,
			url: "sqlite::memory:".to_owned(),
			busy_timeout: Duration::from_secs(5),
			max_connections: 1,
		}
	}
}

impl Configuration {
	pub fn from_file(path: impl AsRef<Path>) -> Result<Configuration, ConfigurationError> {
		let text = read_to_string(path)?;

		Ok(Configuration::try_from(text.as_str())?)
	}
}

impl TryFrom<&str> for Configuration {
	type Error = toml::de::Error;

	fn try_from(text: &str) -> Result<Self, Self::Error> {
		toml::from_str(text)
	}
}

#[derive(Error, Debug)]
pub enum ConfigurationError {
	#[error("Failed to deserialize with error: {0}")]
	DeserializationError(#[from] toml::de::Error),
	#[error("IO operation failed: {0}")]
	IoError(#[from] std::io::Error),
}

// See https://serde.rs/custom-date-format.html
mod socket_addr_serde {
	use serde::{self, Deserialize, Deserializer, Serializer};
	use std::net::SocketAddr;
	use std::str::FromStr;

	pub fn serialize<S>(address: &SocketAddr, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		serializer.collect_str(address)
	}

	pub fn deserialize<'deserializer, D>(deserializer: D) -> Result<SocketAddr, D::Error>
	where
		D: Deserializer<'deserializer>,
	{
		let string = String::deserialize(deserializer)?;
		SocketAddr::from_str(string.as_str()).map_err(serde::de::Error::custom)
	}
}

#[cfg(test)]
mod test {
	use super::*;
	use std::str::FromStr;

	#[test]
	fn should_deserialize_configuration() {
		const TEST_FILE_PATH: &str = "test/files/test-configuration.toml";

		let Configuration {
			address,
			log_filters,
			database,
		} = Configuration::from_file(TEST_FILE_PATH).unwrap();

		assert_eq!(SocketAddr::from_str("127.0.0.1:8000").unwrap(), address);
		assert_eq!("info", log_filters);
		assert_eq!(
			DatabaseConfiguration {
				backend: Backend::Memory,
				url: "sqlite://test.db".to_owned(),
				busy_timeout: Duration::from_secs(2),
				max_connections: 3,
			},
			database
		);
	}

	#[test]
	fn should_reject_unknown_backend() {
		let text = r#"
			address = "127.0.0.1:8000"
			log_filters = "info"

			[database]
			backend = "postgres"
			url = ""
			busy_timeout = "1s"
			max_connections = 1
		"#;

		assert!(Configuration::try_from(text).is_err());
	}

	#[test]
	fn should_print_configuration_as_toml() {
		let configuration = Configuration {
			address: SocketAddr::from_str("0.0.0.0:80").unwrap(),
			log_filters: "debug".to_owned(),
			database: DatabaseConfiguration::in_memory_sqlite(),
		};

		let text = toml::to_string(&configuration).unwrap();

		assert_eq!(configuration, Configuration::try_from(text.as_str()).unwrap());
	}
}
