//! In-memory transport and canned API bodies for client tests.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use bytes::Bytes;
use http::{Request, Response, StatusCode};

use crate::transport::Transport;

#[derive(Debug, thiserror::Error)]
#[error("connection refused")]
pub(crate) struct ConnectionRefused;

/// Replays queued responses in order and records every request it receives.
/// Once the queue is empty every call fails with [`ConnectionRefused`].
#[derive(Debug, Default)]
pub(crate) struct StubTransport {
    responses: Mutex<VecDeque<(u16, &'static str)>>,
    requests: Mutex<Vec<Request<Bytes>>>,
}

impl StubTransport {
    pub(crate) fn replying(status: u16, body: &'static str) -> Arc<Self> {
        Self::sequence(&[(status, body)])
    }

    pub(crate) fn sequence(responses: &[(u16, &'static str)]) -> Arc<Self> {
        Arc::new(Self {
            responses: Mutex::new(responses.iter().copied().collect()),
            requests: Mutex::default(),
        })
    }

    pub(crate) fn failing() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub(crate) fn requests(&self) -> Vec<Request<Bytes>> {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .map(|req| {
                let mut copy = Request::new(req.body().clone());
                *copy.method_mut() = req.method().clone();
                *copy.uri_mut() = req.uri().clone();
                *copy.headers_mut() = req.headers().clone();
                copy
            })
            .collect()
    }
}

impl Transport for StubTransport {
    type Error = ConnectionRefused;

    fn send(&self, request: Request<Bytes>) -> Result<Response<Bytes>, Self::Error> {
        self.requests.lock().unwrap().push(request);
        let (status, body) = self
            .responses
            .lock()
            .unwrap()
            .pop_front()
            .ok_or(ConnectionRefused)?;

        let mut response = Response::new(Bytes::from_static(body.as_bytes()));
        *response.status_mut() = StatusCode::from_u16(status).unwrap();
        Ok(response)
    }
}

pub(crate) const CUSTOMER_AMEX: &str = r#"{
  "id": "cus_Dy0b4uW0E4kP1V",
  "object": "customer",
  "account_balance": 0,
  "created": 1542125640,
  "currency": null,
  "default_source": "card_1DW3Ou2eZvKYlo2CV0ZtJAeI",
  "delinquent": false,
  "description": null,
  "discount": null,
  "email": "test@example.com",
  "invoice_prefix": "5E6E5F2",
  "livemode": false,
  "metadata": {},
  "shipping": null,
  "sources": {
    "object": "list",
    "data": [],
    "has_more": false,
    "total_count": 1,
    "url": "/v1/customers/cus_Dy0b4uW0E4kP1V/sources"
  },
  "tax_info": null,
  "tax_info_verification": null
}"#;

pub(crate) const ERROR_INVALID_TOKEN: &str = r#"{
  "error": {
    "code": "resource_missing",
    "doc_url": "https://stripe.com/docs/error-codes/resource-missing",
    "message": "No such token: tok_alsdkjfa",
    "param": "source",
    "type": "invalid_request_error"
  }
}"#;

pub(crate) const ERROR_EXPIRED_CARD: &str = r#"{
  "error": {
    "code": "expired_card",
    "doc_url": "https://stripe.com/docs/error-codes/expired-card",
    "message": "Your card has expired.",
    "param": "exp_month",
    "type": "card_error"
  }
}"#;

pub(crate) const ERROR_NO_SUCH_CUSTOMER: &str = r#"{
  "error": {
    "code": "resource_missing",
    "doc_url": "https://stripe.com/docs/error-codes/resource-missing",
    "message": "No such customer: cus_missing",
    "param": "customer",
    "type": "invalid_request_error"
  }
}"#;

pub(crate) const ERROR_NO_SUCH_CHARGE: &str = r#"{
  "error": {
    "code": "resource_missing",
    "doc_url": "https://stripe.com/docs/error-codes/resource-missing",
    "message": "No such charge: ch_missing",
    "param": "id",
    "type": "invalid_request_error"
  }
}"#;

pub(crate) const CHARGE_1234: &str = r#"{
  "id": "ch_1DW3Ov2eZvKYlo2CWmqkVhFO",
  "object": "charge",
  "amount": 1234,
  "amount_refunded": 0,
  "captured": true,
  "created": 1542125641,
  "currency": "usd",
  "customer": "cus_Dy0b4uW0E4kP1V",
  "failure_code": null,
  "failure_message": null,
  "livemode": false,
  "outcome": {
    "network_status": "approved_by_network",
    "risk_level": "normal",
    "seller_message": "Payment complete.",
    "type": "authorized"
  },
  "paid": true,
  "refunded": false,
  "status": "succeeded"
}"#;
