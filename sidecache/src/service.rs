//! Request building and response interpretation for the sidecar protocol.

use bytes::Bytes;
use http::header::{CONTENT_TYPE, HeaderValue};
use http::{Method, Request, StatusCode};
use http_body_util::BodyExt;
use tracing::{debug, trace};

use crate::client::HttpClient;
use crate::error::{Error, Result};

/// Address of the sidecar cache service. Keys are appended verbatim.
pub const DEFAULT_BASE_URL: &str = "http://localhost:9191/";

/// Header carrying the TTL of an invalidation request.
pub const TTL_HEADER: &str = "tysidecarcachable";

/// Builds the [`TTL_HEADER`] value for the given number of seconds.
///
/// ```
/// assert_eq!(sidecache::ttl_header_value(60), "ttl=60");
/// assert_eq!(sidecache::ttl_header_value(-1), "ttl=-1");
/// ```
pub fn ttl_header_value(ttl_seconds: i64) -> String {
    format!("ttl={ttl_seconds}")
}

/// Statuses in `200..400` count as a successful read.
fn is_success(status: StatusCode) -> bool {
    (200..400).contains(&status.as_u16())
}

/// Talks to the sidecar over a caller supplied [`HttpClient`].
///
/// Holds nothing but the client and the base address, so it is safe to share
/// exactly as far as the client itself is.
#[derive(Debug, Clone)]
pub struct CacheService<C> {
    client: C,
    base_url: String,
}

impl<C> CacheService<C>
where
    C: HttpClient,
{
    /// Creates a service bound to `client` and [`DEFAULT_BASE_URL`].
    pub fn new(client: C) -> Self {
        Self::with_base_url(client, DEFAULT_BASE_URL)
    }

    /// Creates a service bound to `client` and a custom base address.
    pub fn with_base_url(client: C, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// Base address keys are appended to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Underlying HTTP client.
    pub fn client(&self) -> &C {
        &self.client
    }

    /// Address used for `key`. No escaping is applied.
    pub fn url_for(&self, key: &str) -> String {
        format!("{}{}", self.base_url, key)
    }

    /// Fetches the cached payload stored under `key`.
    ///
    /// The body is returned untouched when the status is in `200..400`.
    /// Any other status yields [`Error::Remote`] and the body is dropped
    /// unread.
    pub async fn get_cache(&self, key: &str) -> Result<Bytes> {
        let url = self.url_for(key);
        trace!(%url, "GET sidecar cache");

        let request = Request::builder()
            .method(Method::GET)
            .uri(&url)
            .body(Bytes::new())
            .map_err(Error::transport)?;

        let response = self
            .client
            .send(request)
            .await
            .map_err(Error::Transport)?;

        let status = response.status();
        if !is_success(status) {
            debug!(%url, status = status.as_u16(), "sidecar cache returned unsuccessful status");
            return Err(Error::Remote { status });
        }

        let payload = response
            .into_body()
            .collect()
            .await
            .map_err(Error::io)?
            .to_bytes();
        trace!(%url, status = status.as_u16(), len = payload.len(), "sidecar cache hit");
        Ok(payload)
    }

    /// Invalidates `key` on the sidecar with the given TTL in seconds.
    ///
    /// The response status is not inspected. Any response counts as success
    /// and its body is discarded, so only a transport failure is an error.
    pub async fn invalidate_cache(&self, key: &str, ttl_seconds: i64) -> Result<()> {
        let url = self.url_for(key);
        let ttl = HeaderValue::try_from(ttl_header_value(ttl_seconds)).map_err(Error::transport)?;
        trace!(%url, ttl_seconds, "PUT sidecar cache invalidation");

        let request = Request::builder()
            .method(Method::PUT)
            .uri(&url)
            .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
            .header(TTL_HEADER, ttl)
            .body(Bytes::new())
            .map_err(Error::transport)?;

        let response = self
            .client
            .send(request)
            .await
            .map_err(Error::Transport)?;

        // Status is deliberately ignored here, see the method docs.
        debug!(%url, status = response.status().as_u16(), "sidecar cache invalidated");
        Ok(())
    }
}
