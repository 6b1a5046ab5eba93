//! Default transport backed by `reqwest::blocking`.

use bytes::Bytes;
use http::{Request, Response};
use reqwest::blocking::Client;

use super::Transport;

/// [`Transport`] that sends requests over the network with a blocking
/// `reqwest` client.
///
/// No timeout is added beyond reqwest's own default; configure one on the
/// `reqwest::blocking::Client` passed to [`with_http_client`].
///
/// [`with_http_client`]: ReqwestTransport::with_http_client
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    http: Client,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self { http: Client::new() }
    }

    /// Use a custom `reqwest::blocking::Client` (e.g. to configure timeouts
    /// or a proxy).
    pub fn with_http_client(client: Client) -> Self {
        Self { http: client }
    }
}

impl Transport for ReqwestTransport {
    type Error = reqwest::Error;

    fn send(&self, request: Request<Bytes>) -> Result<Response<Bytes>, Self::Error> {
        let (parts, body) = request.into_parts();

        let mut builder = self
            .http
            .request(parts.method, parts.uri.to_string())
            .headers(parts.headers);
        if !body.is_empty() {
            builder = builder.body(body);
        }
        let resp = builder.send()?;

        let status = resp.status();
        let headers = resp.headers().clone();
        let body = resp.bytes()?;

        let mut response = Response::new(body);
        *response.status_mut() = status;
        *response.headers_mut() = headers;
        Ok(response)
    }
}
