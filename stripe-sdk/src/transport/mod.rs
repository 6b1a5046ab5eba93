//! The transport the client sends requests through.
//!
//! [`Transport`] is the single capability the client needs from the network:
//! take a fully-formed request and hand back a fully-buffered response. The
//! default implementation, [`ReqwestTransport`], is gated behind the `client`
//! cargo feature; tests and alternative stacks can implement the trait
//! directly.

#[cfg(feature = "client")]
mod blocking;

#[cfg(feature = "client")]
pub use blocking::ReqwestTransport;

use std::sync::Arc;

use bytes::Bytes;
use http::{Request, Response};

/// Sends a request and blocks until the whole response has been received.
pub trait Transport {
    /// Transport-level failure (DNS, TLS, connection reset, …).
    type Error: std::error::Error + Send + Sync + 'static;

    /// Execute `request`. The returned body must be read to completion.
    fn send(&self, request: Request<Bytes>) -> Result<Response<Bytes>, Self::Error>;
}

impl<T: Transport + ?Sized> Transport for &T {
    type Error = T::Error;

    fn send(&self, request: Request<Bytes>) -> Result<Response<Bytes>, Self::Error> {
        (**self).send(request)
    }
}

impl<T: Transport + ?Sized> Transport for Arc<T> {
    type Error = T::Error;

    fn send(&self, request: Request<Bytes>) -> Result<Response<Bytes>, Self::Error> {
        (**self).send(request)
    }
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    type Error = T::Error;

    fn send(&self, request: Request<Bytes>) -> Result<Response<Bytes>, Self::Error> {
        (**self).send(request)
    }
}
