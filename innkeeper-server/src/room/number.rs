use crate::room::error::InputError;
use serde::{Deserialize, Serialize};
use sqlx::encode::IsNull;
use sqlx::error::BoxDynError;
use sqlx::{Database, Decode, Encode};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Unique identifier of a room.
#[derive(
	derive_more::From,
	derive_more::Into,
	Debug,
	Clone,
	Copy,
	PartialEq,
	Eq,
	PartialOrd,
	Ord,
	Hash,
	Serialize,
	Deserialize,
)]
#[serde(transparent)]
pub struct RoomNumber(i64);

impl FromStr for RoomNumber {
	type Err = InputError;

	fn from_str(text: &str) -> Result<Self, Self::Err> {
		text.trim()
			.parse()
			.map(RoomNumber)
			.map_err(|_| InputError::InvalidRoomNumber(text.to_owned()))
	}
}

impl Display for RoomNumber {
	fn fmt(&self, formatter: &mut Formatter) -> std::fmt::Result {
		write!(formatter, "{}", self.0)
	}
}

impl<'r, Db> Decode<'r, Db> for RoomNumber
where
	Db: Database,
	i64: Decode<'r, Db>,
{
	fn decode(value: <Db as Database>::ValueRef<'r>) -> Result<Self, BoxDynError> {
		i64::decode(value).map(RoomNumber)
	}
}

impl<'q, Db> Encode<'q, Db> for RoomNumber
where
	Db: Database,
	i64: Encode<'q, Db>,
{
	fn encode_by_ref(&self, buffer: &mut <Db as Database>::ArgumentBuffer<'q>) -> Result<IsNull, BoxDynError> {
		self.0.encode_by_ref(buffer)
	}
}

impl<Db> sqlx::Type<Db> for RoomNumber
where
	Db: Database,
	i64: sqlx::Type<Db>,
{
	fn type_info() -> Db::TypeInfo {
		i64::type_info()
	}

	fn compatible(type_info: &Db::TypeInfo) -> bool {
		i64::compatible(type_info)
	}
}
