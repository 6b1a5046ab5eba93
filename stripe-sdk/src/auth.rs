//! Headers and body encoding shared by every Stripe request.
//!
//! Each request carries two fixed headers:
//!
//! ```text
//! Authorization: Basic base64("{secret_key}:")
//! Stripe-Version: 2018-09-24
//! ```
//!
//! Requests with a body send it as `application/x-www-form-urlencoded`.

use http::HeaderValue;

/// Header name pinning the server-side API revision.
pub const VERSION_HEADER: &str = "Stripe-Version";

/// The API revision every request is pinned to.
pub const API_VERSION: &str = "2018-09-24";

/// Content type of every request body.
pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Build the `Authorization` header value for a secret key.
///
/// Stripe takes the key as the basic-auth username with an empty password.
/// The value is marked sensitive so it is masked in `Debug` output.
pub fn basic_auth(secret_key: &str) -> Result<HeaderValue, http::header::InvalidHeaderValue> {
    let credentials = fast32::base64::RFC4648.encode(format!("{secret_key}:").as_bytes());
    let mut value = HeaderValue::from_str(&format!("Basic {credentials}"))?;
    value.set_sensitive(true);
    Ok(value)
}

/// Encode key/value pairs as a form body, percent-encoding both sides.
pub fn encode_form(params: &[(&str, &str)]) -> String {
    params
        .iter()
        .map(|(key, value)| {
            format!(
                "{}={}",
                urlencoding::encode(key),
                urlencoding::encode(value)
            )
        })
        .collect::<Vec<_>>()
        .join("&")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_auth_uses_empty_password() {
        let value = basic_auth("sk_test_123").unwrap();
        assert_eq!(value.to_str().unwrap(), "Basic c2tfdGVzdF8xMjM6");
        assert!(value.is_sensitive());
    }

    #[test]
    fn test_basic_auth_is_header_safe_for_any_key() {
        // base64 output never contains bytes a header value rejects
        let value = basic_auth("sk_test\n").unwrap();
        assert_eq!(value.to_str().unwrap(), "Basic c2tfdGVzdAo6");
        assert_eq!(basic_auth("").unwrap().to_str().unwrap(), "Basic Og==");
    }

    #[test]
    fn test_encode_form() {
        let body = encode_form(&[("source", "tok_amex"), ("email", "test@example.com")]);
        assert_eq!(body, "source=tok_amex&email=test%40example.com");
    }

    #[test]
    fn test_encode_form_escapes_separators() {
        let body = encode_form(&[("email", "a b&c=d")]);
        assert_eq!(body, "email=a%20b%26c%3Dd");
        assert_eq!(encode_form(&[]), "");
    }
}
