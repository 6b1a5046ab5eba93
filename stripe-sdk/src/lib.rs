//! A small blocking client for the Stripe API.
//!
//! Three calls are modelled: creating a customer from a payment source
//! token, charging a stored customer, and fetching a charge by id. Every
//! response is decoded into either a typed object or a [`ClientError`],
//! with API-reported failures carried as a structured [`ApiError`].
//!
//! The client is generic over a [`Transport`], so tests can swap the
//! network for an in-memory stand-in.
//!
//! ```no_run
//! use stripe_sdk::client::StripeClient;
//!
//! let client = StripeClient::new("sk_test_123");
//! let customer = client.create_customer("tok_amex", "test@example.com")?;
//! let charge = client.create_charge(&customer.id, 1234)?;
//! assert_eq!(charge.amount, 1234);
//! # Ok::<(), stripe_sdk::client::ClientError>(())
//! ```
//!
//! [`ClientError`]: client::ClientError
//! [`ApiError`]: objects::ApiError
//! [`Transport`]: transport::Transport

pub mod auth;
pub mod client;
pub mod config;
pub mod objects;
pub mod transport;
