//! Builder for configuring [`Sidecache`].

use crate::cache::Sidecache;
use crate::client::HttpClient;
use crate::error::{Error, Result};
use crate::service::{CacheService, DEFAULT_BASE_URL};

/// Part of builder pattern implementation for [`Sidecache`].
///
/// The HTTP client is the only required setting. [`build`](Self::build)
/// fails with [`Error::InvalidArgument`] when it was never supplied.
///
/// # Examples
///
/// ```
/// use sidecache::{Error, Sidecache};
///
/// let missing = Sidecache::<reqwest::Client>::builder().build();
/// assert!(matches!(missing, Err(Error::InvalidArgument(_))));
///
/// let cache = Sidecache::builder()
///     .client(reqwest::Client::new())
///     .base_url("http://127.0.0.1:9191/")
///     .build()
///     .unwrap();
/// assert_eq!(cache.base_url(), "http://127.0.0.1:9191/");
/// ```
#[derive(Debug)]
pub struct SidecacheBuilder<C> {
    client: Option<C>,
    base_url: String,
}

impl<C> Default for SidecacheBuilder<C> {
    fn default() -> Self {
        Self {
            client: None,
            base_url: DEFAULT_BASE_URL.to_owned(),
        }
    }
}

impl<C> SidecacheBuilder<C>
where
    C: HttpClient,
{
    pub(crate) fn with_client(client: Option<C>) -> Self {
        Self {
            client,
            ..Self::default()
        }
    }

    /// Set the pre-configured HTTP client used for every request.
    ///
    /// Timeouts, TLS and proxies are taken from the client as is.
    pub fn client(mut self, client: C) -> Self {
        self.client = Some(client);
        self
    }

    /// Set the address keys are appended to.
    ///
    /// Defaults to [`DEFAULT_BASE_URL`]. No separator is inserted, so the
    /// value normally ends with `/`.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Create new [`Sidecache`] with passed settings.
    pub fn build(self) -> Result<Sidecache<C>> {
        let client = self
            .client
            .ok_or(Error::InvalidArgument("client is nil"))?;
        Ok(Sidecache::from_service(CacheService::with_base_url(
            client,
            self.base_url,
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::tests::FakeClient;

    #[test]
    fn build_without_client_fails() {
        let error = SidecacheBuilder::<FakeClient>::default()
            .base_url("http://example.invalid/")
            .build()
            .unwrap_err();
        assert!(matches!(error, Error::InvalidArgument(_)));
        assert_eq!(error.to_string(), "invalid argument: client is nil");
    }

    #[test]
    fn defaults_to_local_sidecar() {
        let cache = SidecacheBuilder::default()
            .client(FakeClient::default())
            .build()
            .unwrap();
        assert_eq!(cache.base_url(), "http://localhost:9191/");
    }
}
