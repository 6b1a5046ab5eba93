//! `charges` resource.

use http::Method;

use super::{ClientError, StripeClient};
use crate::objects::Charge;
use crate::transport::Transport;

/// Currency every charge is created in.
pub const DEFAULT_CURRENCY: &str = "usd";

impl<T: Transport> StripeClient<T> {
    /// `POST /charges` – charge `amount` minor units of [`DEFAULT_CURRENCY`]
    /// to the customer's default source.
    ///
    /// Repeating the call creates another charge.
    pub fn create_charge(&self, customer_id: &str, amount: i64) -> Result<Charge, ClientError> {
        let amount = amount.to_string();
        self.request(
            Method::POST,
            "charges",
            &[
                ("customer", customer_id),
                ("amount", &amount),
                ("currency", DEFAULT_CURRENCY),
            ],
        )
    }

    /// `GET /charges/{charge_id}` – fetch the current state of a charge.
    pub fn get_charge(&self, charge_id: &str) -> Result<Charge, ClientError> {
        self.request(
            Method::GET,
            &format!("charges/{}", urlencoding::encode(charge_id)),
            &[],
        )
    }
}
