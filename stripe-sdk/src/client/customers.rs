//! `customers` resource.

use http::Method;

use super::{ClientError, StripeClient};
use crate::objects::Customer;
use crate::transport::Transport;

impl<T: Transport> StripeClient<T> {
    /// `POST /customers` – create a customer whose default source is the
    /// payment method behind `source_token`.
    ///
    /// An unknown token yields an `invalid_request_error`; a token for a card
    /// the processor rejects (e.g. an expired card) yields a `card_error`.
    pub fn create_customer(
        &self,
        source_token: &str,
        email: &str,
    ) -> Result<Customer, ClientError> {
        self.request(
            Method::POST,
            "customers",
            &[("source", source_token), ("email", email)],
        )
    }
}
