//! HTTP client capability used to talk to the sidecar.
//!
//! The library never configures timeouts, TLS or proxies. Whatever client is
//! handed over is used as is.

use std::sync::Arc;

use async_trait::async_trait;
use bytes::Bytes;
use http::{Request, Response};
use http_body::Body;

use crate::error::BoxError;

/// Minimal "send a request, get a response" contract.
///
/// Implemented for [`reqwest::Client`] and
/// [`reqwest_middleware::ClientWithMiddleware`] behind the default features. Any
/// other client (or a fake in tests) can be plugged in by implementing this
/// trait.
///
/// An `Err` from [`send`](HttpClient::send) means no response was received.
/// The response body is drained lazily, so errors while reading it are
/// reported through [`Body::Error`].
#[async_trait]
pub trait HttpClient: Send + Sync {
    /// Body type of the responses produced by this client.
    type Body: Body<Data = Bytes, Error: Into<BoxError>> + Send;

    /// Sends a single request and waits for the response head.
    async fn send(&self, request: Request<Bytes>) -> Result<Response<Self::Body>, BoxError>;
}

#[async_trait]
impl<T> HttpClient for Arc<T>
where
    T: HttpClient + ?Sized,
{
    type Body = T::Body;

    async fn send(&self, request: Request<Bytes>) -> Result<Response<Self::Body>, BoxError> {
        self.as_ref().send(request).await
    }
}

#[cfg(feature = "reqwest")]
#[async_trait]
impl HttpClient for reqwest::Client {
    type Body = reqwest::Body;

    async fn send(&self, request: Request<Bytes>) -> Result<Response<Self::Body>, BoxError> {
        let request = reqwest::Request::try_from(request)?;
        let response = self.execute(request).await?;
        Ok(response.into())
    }
}

#[cfg(feature = "middleware")]
#[async_trait]
impl HttpClient for reqwest_middleware::ClientWithMiddleware {
    type Body = reqwest::Body;

    async fn send(&self, request: Request<Bytes>) -> Result<Response<Self::Body>, BoxError> {
        let request = reqwest::Request::try_from(request)?;
        let response = self.execute(request).await?;
        Ok(response.into())
    }
}
