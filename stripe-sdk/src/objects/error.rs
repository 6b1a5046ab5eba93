//! API error objects and the error envelope codec.
//!
//! Stripe reports failures as a JSON object with the fields nested one level
//! under an `error` key:
//!
//! ```json
//! {
//!   "error": {
//!     "code": "resource_missing",
//!     "doc_url": "https://stripe.com/docs/error-codes/resource-missing",
//!     "message": "No such customer: cus_123",
//!     "param": "customer",
//!     "type": "invalid_request_error"
//!   }
//! }
//! ```
//!
//! [`ApiError`] is the flat in-memory form. A body that is a JSON object
//! without the `error` key decodes to an empty [`ApiError`]; anything that
//! is not a JSON object is rejected. Both directions go through the
//! explicit envelope structs below, so encoding then decoding an
//! [`ApiError`] always yields an equal value.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::{nullable, object};

/// A structured error reported by the Stripe API.
///
/// Every field is empty when the API omitted it or sent `null`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, thiserror::Error)]
#[error("{code} See {doc_url} for more information.")]
pub struct ApiError {
    /// Fine-grained error code, e.g. `resource_missing` or `expired_card`.
    pub code: String,
    pub doc_url: String,
    /// Human-readable message.
    pub message: String,
    /// Name of the request parameter the error relates to.
    pub param: String,
    /// Error category, the primary discriminator. See [`ErrorType`].
    pub error_type: String,
}

impl ApiError {
    /// Decode a failure response body.
    pub fn from_body(body: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(body)
    }

    /// Encode into the nested wire representation.
    pub fn to_body(&self) -> Result<Vec<u8>, serde_json::Error> {
        serde_json::to_vec(self)
    }

    pub fn is_card_error(&self) -> bool {
        self.error_type == ErrorType::CARD_ERROR
    }

    pub fn is_invalid_request(&self) -> bool {
        self.error_type == ErrorType::INVALID_REQUEST_ERROR
    }
}

/// Well-known values of [`ApiError::error_type`].
pub struct ErrorType;

impl ErrorType {
    /// Problems on Stripe's side.
    pub const API_ERROR: &'static str = "api_error";

    /// The card could not be charged, e.g. it was declined or has expired.
    pub const CARD_ERROR: &'static str = "card_error";

    /// An idempotency key was reused with different parameters.
    pub const IDEMPOTENCY_ERROR: &'static str = "idempotency_error";

    /// The request had invalid parameters or referenced a missing object.
    pub const INVALID_REQUEST_ERROR: &'static str = "invalid_request_error";
}

// ---------------------------------------------------------------------------
// Envelope codec
// ---------------------------------------------------------------------------

#[derive(Deserialize)]
struct ErrorEnvelope {
    #[serde(default, deserialize_with = "nullable")]
    error: ErrorFields,
}

#[derive(Default, Deserialize)]
#[serde(default)]
struct ErrorFields {
    #[serde(deserialize_with = "nullable")]
    code: String,
    #[serde(deserialize_with = "nullable")]
    doc_url: String,
    #[serde(deserialize_with = "nullable")]
    message: String,
    #[serde(deserialize_with = "nullable")]
    param: String,
    #[serde(rename = "type", deserialize_with = "nullable")]
    error_type: String,
}

#[derive(Serialize)]
struct ErrorEnvelopeRef<'a> {
    error: ErrorFieldsRef<'a>,
}

#[derive(Serialize)]
struct ErrorFieldsRef<'a> {
    code: &'a str,
    doc_url: &'a str,
    message: &'a str,
    param: &'a str,
    #[serde(rename = "type")]
    error_type: &'a str,
}

impl Serialize for ApiError {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        ErrorEnvelopeRef {
            error: ErrorFieldsRef {
                code: &self.code,
                doc_url: &self.doc_url,
                message: &self.message,
                param: &self.param,
                error_type: &self.error_type,
            },
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for ApiError {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let ErrorEnvelope { error } = object(deserializer)?;
        Ok(Self {
            code: error.code,
            doc_url: error.doc_url,
            message: error.message,
            param: error.param,
            error_type: error.error_type,
        })
    }
}
