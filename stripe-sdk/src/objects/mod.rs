//! Wire types returned by the Stripe API.
//!
//! Success bodies decode into [`Customer`] or [`Charge`]; failure bodies
//! decode into [`ApiError`]. Every body must be a JSON object; unknown fields
//! are ignored and known fields that are absent or `null` take their zero
//! value.

pub mod charge;
pub mod customer;
pub mod error;

pub use charge::Charge;
pub use customer::Customer;
pub use error::{ApiError, ErrorType};

use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

/// Deserialize `T` only from a JSON object.
///
/// Derived struct impls also accept a JSON array as positional fields, which
/// the API never sends.
pub(crate) fn object<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let fields = Map::<String, Value>::deserialize(deserializer)?;
    T::deserialize(Value::Object(fields)).map_err(D::Error::custom)
}

/// Deserialize a field that the API may send as `null`, falling back to the
/// type's default.
pub(crate) fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}
