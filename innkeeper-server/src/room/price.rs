use crate::room::error::InputError;
use serde::{Deserialize, Serialize};
use sqlx::encode::IsNull;
use sqlx::error::BoxDynError;
use sqlx::{Database, Decode, Encode};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Price of a room, always finite and non-negative.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Price(f64);

impl Price {
	pub fn value(self) -> f64 {
		self.0
	}
}

impl TryFrom<f64> for Price {
	type Error = InputError;

	fn try_from(value: f64) -> Result<Self, Self::Error> {
		if !value.is_finite() {
			return Err(InputError::NonFinitePrice);
		}

		if value < 0.0 {
			return Err(InputError::NegativePrice(value));
		}

		// -0.0 passes the check above
		Ok(Self(value.abs()))
	}
}

impl From<Price> for f64 {
	fn from(Price(value): Price) -> Self {
		value
	}
}

impl FromStr for Price {
	type Err = InputError;

	fn from_str(text: &str) -> Result<Self, Self::Err> {
		let value = text
			.trim()
			.parse::<f64>()
			.map_err(|_| InputError::InvalidPrice(text.to_owned()))?;
		Price::try_from(value)
	}
}

impl Display for Price {
	fn fmt(&self, formatter: &mut Formatter) -> std::fmt::Result {
		write!(formatter, "{:.2}", self.0)
	}
}

impl<'r, Db> Decode<'r, Db> for Price
where
	Db: Database,
	f64: Decode<'r, Db>,
{
	fn decode(value: <Db as Database>::ValueRef<'r>) -> Result<Self, BoxDynError> {
		let value = f64::decode(value)?;
		Ok(Price::try_from(value)?)
	}
}

impl<'q, Db> Encode<'q, Db> for Price
where
	Db: Database,
	f64: Encode<'q, Db>,
{
	fn encode_by_ref(&self, buffer: &mut <Db as Database>::ArgumentBuffer<'q>) -> Result<IsNull, BoxDynError> {
		self.0.encode_by_ref(buffer)
	}
}

impl<Db> sqlx::Type<Db> for Price
where
	Db: Database,
	f64: sqlx::Type<Db>,
{
	fn type_info() -> Db::TypeInfo {
		f64::type_info()
	}

	fn compatible(type_info: &Db::TypeInfo) -> bool {
		f64::compatible(type_info)
	}
}

#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn should_parse_non_negative_prices() {
		assert_eq!(Price(50.0), "50".parse().expect("Failed to parse price"));
		assert_eq!(Price(0.0), "0.0".parse().expect("Failed to parse price"));
		assert_eq!(Price(99.95), " 99.95".parse().expect("Failed to parse price"));
	}

	#[test]
	fn should_not_parse_non_numeric_prices() {
		let error = "fifty".parse::<Price>().expect_err("Parsed price although it shouldn't");

		assert_eq!(InputError::InvalidPrice("fifty".to_owned()), error);
	}

	#[test]
	fn should_reject_negative_prices() {
		let error = "-1.5".parse::<Price>().expect_err("Parsed negative price");

		assert_eq!(InputError::NegativePrice(-1.5), error);
	}

	#[test]
	fn should_reject_non_finite_prices() {
		assert_eq!(Err(InputError::NonFinitePrice), Price::try_from(f64::NAN));
		assert_eq!(Err(InputError::NonFinitePrice), Price::try_from(f64::INFINITY));
		assert_eq!(Err(InputError::NonFinitePrice), "inf".parse::<Price>());
	}

	#[test]
	fn should_normalize_negative_zero() {
		let price = Price::try_from(-0.0).expect("Rejected negative zero");

		assert!(price.value().is_sign_positive());
		assert_eq!("0.00", price.to_string());
		assert_eq!("0.00", "-0".parse::<Price>().expect("Failed to parse price").to_string());
	}

	#[test]
	fn should_display_price_with_two_decimals() {
		assert_eq!("50.00", Price(50.0).to_string());
		assert_eq!("12.50", Price(12.5).to_string());
	}

	#[test]
	fn should_not_deserialize_negative_price_from_json() {
		serde_json::from_str::<Price>("-10.0").expect_err("Deserialized negative price");
	}
}
