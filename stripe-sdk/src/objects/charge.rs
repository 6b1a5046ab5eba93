//! Charge objects.

use serde::{Deserialize, Deserializer};

use super::{nullable, object};

/// Snapshot of a charge as returned by `POST /v1/charges` and
/// `GET /v1/charges/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Charge {
    pub id: String,
    /// Amount in minor currency units (cents for USD).
    pub amount: i64,
    pub paid: bool,
    /// `succeeded`, `pending` or `failed`.
    pub status: String,
    /// Set when the charge was declined even though the request succeeded.
    pub failure_code: Option<String>,
    pub failure_message: Option<String>,
}

impl Charge {
    /// Whether the processor reported a failure for this charge.
    pub fn is_failed(&self) -> bool {
        self.failure_code.is_some() || self.status == "failed"
    }
}

#[derive(Default, Deserialize)]
#[serde(default)]
struct ChargeObject {
    #[serde(deserialize_with = "nullable")]
    id: String,
    #[serde(deserialize_with = "nullable")]
    amount: i64,
    #[serde(deserialize_with = "nullable")]
    paid: bool,
    #[serde(deserialize_with = "nullable")]
    status: String,
    failure_code: Option<String>,
    failure_message: Option<String>,
}

impl<'de> Deserialize<'de> for Charge {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let ChargeObject {
            id,
            amount,
            paid,
            status,
            failure_code,
            failure_message,
        } = object(deserializer)?;
        Ok(Self {
            id,
            amount,
            paid,
            status,
            failure_code,
            failure_message,
        })
    }
}
