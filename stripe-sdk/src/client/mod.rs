//! Blocking HTTP client for the Stripe API.
//!
//! Every call goes through the same dispatch path: the parameters are
//! form-encoded, the request is signed with basic auth and pinned to
//! [`API_VERSION`], the [`Transport`] executes it, and the body is decoded
//! into the success type or, for a status of 400 and above, into an
//! [`ApiError`].
//!
//! [`API_VERSION`]: crate::auth::API_VERSION

mod charges;
mod customers;
#[cfg(test)]
mod testing;

pub use charges::DEFAULT_CURRENCY;

use bytes::Bytes;
use http::header::{AUTHORIZATION, CONTENT_TYPE};
use http::{Method, Request, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};
use url::Url;

use crate::auth::{self, API_VERSION, FORM_CONTENT_TYPE, VERSION_HEADER};
use crate::config::ClientConfig;
use crate::objects::ApiError;
use crate::transport::Transport;
#[cfg(feature = "client")]
use crate::transport::ReqwestTransport;

/// Errors produced by [`StripeClient`].
///
/// Transport failures, undecodable bodies and API-reported errors are
/// distinct variants; only [`ClientError::Api`] carries an [`ApiError`].
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The request could not be sent or the response not fully received.
    #[error("transport error: {0}")]
    Transport(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The API reported an error.
    #[error("api error: status {status}, {error}")]
    Api {
        status: StatusCode,
        #[source]
        error: ApiError,
    },

    /// A successful response body could not be deserialized.
    #[error("json error: {0}")]
    Decode(#[from] serde_json::Error),

    /// A failure response body was not a well-formed error envelope.
    #[error("malformed error body: status {status}, {source}")]
    ErrorBody {
        status: StatusCode,
        source: serde_json::Error,
    },

    /// The request could not be assembled.
    #[error("invalid request: {0}")]
    Request(#[from] http::Error),

    /// The base URL could not be joined with the resource path.
    #[error("invalid url: {0}")]
    Url(#[from] url::ParseError),
}

impl ClientError {
    /// The API error, if the API reported one.
    pub fn api_error(&self) -> Option<&ApiError> {
        match self {
            ClientError::Api { error, .. } => Some(error),
            _ => None,
        }
    }

    /// The HTTP status of the response, if one was received.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ClientError::Api { status, .. } | ClientError::ErrorBody { status, .. } => {
                Some(*status)
            }
            _ => None,
        }
    }
}

/// Typed client for the Stripe **customers** and **charges** resources.
///
/// The transport is a type parameter so tests can substitute an in-memory
/// stand-in. With the `client` feature enabled, [`StripeClient::new`] uses
/// [`ReqwestTransport`].
///
/// The client holds no mutable state and can be shared between threads when
/// its transport can.
#[cfg(feature = "client")]
#[derive(Debug, Clone)]
pub struct StripeClient<T = ReqwestTransport> {
    transport: T,
    config: ClientConfig,
}

/// Typed client for the Stripe **customers** and **charges** resources.
///
/// Without the `client` feature there is no default transport; supply one
/// with [`StripeClient::with_transport`].
#[cfg(not(feature = "client"))]
#[derive(Debug, Clone)]
pub struct StripeClient<T> {
    transport: T,
    config: ClientConfig,
}

#[cfg(feature = "client")]
impl StripeClient {
    /// Create a client for the production endpoint.
    pub fn new(secret_key: impl Into<String>) -> Self {
        Self::from_config(ClientConfig::new(secret_key))
    }

    /// Create a client from an already-loaded [`ClientConfig`].
    pub fn from_config(config: ClientConfig) -> Self {
        Self::with_transport(config, ReqwestTransport::new())
    }
}

impl<T: Transport> StripeClient<T> {
    /// Create a client that sends every request through `transport`.
    pub fn with_transport(config: ClientConfig, transport: T) -> Self {
        Self { transport, config }
    }

    /// Target a different endpoint, e.g. a local mock server.
    pub fn with_base_url(mut self, base_url: Url) -> Self {
        self.config = self.config.with_base_url(base_url);
        self
    }

    pub fn base_url(&self) -> &Url {
        self.config.base_url()
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    fn endpoint(&self, path: &str) -> Result<Url, ClientError> {
        let base = self.config.base_url().as_str().trim_end_matches('/');
        let url = Url::parse(&format!("{base}/{}", path.trim_start_matches('/')))?;
        Ok(url)
    }

    fn build_request(
        &self,
        method: &Method,
        url: &Url,
        params: &[(&str, &str)],
    ) -> Result<Request<Bytes>, ClientError> {
        let authorization =
            auth::basic_auth(self.config.secret_key()).map_err(http::Error::from)?;

        let mut builder = Request::builder()
            .method(method.clone())
            .uri(url.as_str())
            .header(AUTHORIZATION, authorization)
            .header(VERSION_HEADER, API_VERSION);

        let body = if *method == Method::GET {
            Bytes::new()
        } else {
            builder = builder.header(CONTENT_TYPE, FORM_CONTENT_TYPE);
            Bytes::from(auth::encode_form(params))
        };

        Ok(builder.body(body)?)
    }

    /// Send a request to `path` and decode the response into `R`.
    fn request<R: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        params: &[(&str, &str)],
    ) -> Result<R, ClientError> {
        let url = self.endpoint(path)?;
        let request = self.build_request(&method, &url, params)?;

        debug!(%method, %url, "sending stripe request");
        let response = self.transport.send(request).map_err(|e| {
            debug!(%method, %url, error = %e, "stripe request failed");
            ClientError::Transport(Box::new(e))
        })?;

        let status = response.status();
        let body = response.into_body();
        debug!(%method, %url, %status, bytes = body.len(), "received stripe response");

        parse_response(status, &body)
    }
}

fn parse_response<R: DeserializeOwned>(status: StatusCode, body: &[u8]) -> Result<R, ClientError> {
    if status.as_u16() >= 400 {
        return Err(match ApiError::from_body(body) {
            Ok(error) => {
                warn!(
                    %status,
                    error_type = %error.error_type,
                    code = %error.code,
                    "stripe api error"
                );
                ClientError::Api { status, error }
            }
            Err(source) => {
                warn!(%status, error = %source, "undecodable stripe error body");
                ClientError::ErrorBody { status, source }
            }
        });
    }
    Ok(serde_json::from_slice(body)?)
}
