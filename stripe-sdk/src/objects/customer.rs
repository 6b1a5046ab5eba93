//! Customer objects.

use serde::{Deserialize, Deserializer};

use super::{nullable, object};

/// Snapshot of a customer record as returned by `POST /v1/customers`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Customer {
    /// Customer identifier (`cus_…`).
    pub id: String,
    /// Identifier of the default payment source (`card_…`), if one is attached.
    pub default_source: Option<String>,
    pub email: Option<String>,
}

#[derive(Default, Deserialize)]
#[serde(default)]
struct CustomerObject {
    #[serde(deserialize_with = "nullable")]
    id: String,
    default_source: Option<String>,
    email: Option<String>,
}

impl<'de> Deserialize<'de> for Customer {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let CustomerObject {
            id,
            default_source,
            email,
        } = object(deserializer)?;
        Ok(Self {
            id,
            default_source,
            email,
        })
    }
}
