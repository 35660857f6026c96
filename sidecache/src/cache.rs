//! Public handle for the sidecar cache.

use bytes::Bytes;

use crate::builder::SidecacheBuilder;
use crate::client::HttpClient;
use crate::error::Result;
use crate::service::CacheService;

/// Handle exposing the two sidecar cache operations.
///
/// Every call issues exactly one request through the injected client and
/// hands the outcome straight back.
///
/// # Examples
///
/// ```no_run
/// use sidecache::Sidecache;
///
/// #[tokio::main]
/// async fn main() -> Result<(), sidecache::Error> {
///     let cache = Sidecache::builder().client(reqwest::Client::new()).build()?;
///
///     let payload = cache.get_cache("user:42").await?;
///     println!("{}", String::from_utf8_lossy(&payload));
///
///     cache.invalidate_cache("user:42", 60).await?;
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Sidecache<C> {
    service: CacheService<C>,
}

impl<C> Sidecache<C>
where
    C: HttpClient,
{
    /// Creates a new builder with default settings.
    #[must_use]
    pub fn builder() -> SidecacheBuilder<C> {
        SidecacheBuilder::default()
    }

    /// Creates a handle bound to `client` with default settings.
    pub fn new(client: C) -> Self {
        Self::from_service(CacheService::new(client))
    }

    /// Creates a handle from an optional client.
    ///
    /// Returns [`crate::Error::InvalidArgument`] when `client` is `None`.
    pub fn from_client(client: Option<C>) -> Result<Self> {
        SidecacheBuilder::with_client(client).build()
    }

    pub(crate) fn from_service(service: CacheService<C>) -> Self {
        Self { service }
    }

    /// Fetches the payload stored under `key`.
    ///
    /// See [`CacheService::get_cache`].
    pub async fn get_cache(&self, key: &str) -> Result<Bytes> {
        self.service.get_cache(key).await
    }

    /// Invalidates `key` with a TTL in seconds.
    ///
    /// See [`CacheService::invalidate_cache`].
    pub async fn invalidate_cache(&self, key: &str, ttl_seconds: i64) -> Result<()> {
        self.service.invalidate_cache(key, ttl_seconds).await
    }

    /// Base address keys are appended to.
    pub fn base_url(&self) -> &str {
        self.service.base_url()
    }

    /// Wrapped cache access service.
    pub fn service(&self) -> &CacheService<C> {
        &self.service
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::service::DEFAULT_BASE_URL;
    use crate::service::tests::{FakeClient, Reply};

    #[test]
    fn from_client_rejects_missing_client() {
        let error = Sidecache::<FakeClient>::from_client(None).unwrap_err();
        assert!(matches!(error, Error::InvalidArgument(_)), "{error:?}");
    }

    #[tokio::test]
    async fn operations_delegate_to_service() {
        let client = FakeClient::replying([Reply::Status(200, r#"{"id":42}"#), Reply::Status(500, "")]);
        let cache = Sidecache::from_client(Some(client)).unwrap();
        assert_eq!(cache.base_url(), DEFAULT_BASE_URL);

        let payload = cache.get_cache("user:42").await.unwrap();
        assert_eq!(payload, Bytes::from_static(br#"{"id":42}"#));
        cache.invalidate_cache("user:42", 60).await.unwrap();

        let sent = cache.service().client().sent();
        assert_eq!(sent.len(), 2);
        assert_eq!(sent[1].uri, "http://localhost:9191/user:42");
    }

    #[tokio::test]
    async fn remote_error_passes_through_unchanged() {
        let cache = Sidecache::new(FakeClient::replying([Reply::Status(404, "")]));

        let error = cache.get_cache("missing").await.unwrap_err();
        assert!(error.to_string().contains("404"));
    }
}
