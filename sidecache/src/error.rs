//! Error types for sidecar cache operations.
//!
//! Every failure is surfaced to the caller as it happens. Nothing is retried
//! and nothing is recovered locally.

use http::StatusCode;

/// Boxed error used for failures coming from the injected HTTP client.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Result alias for sidecar cache operations.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Error type for sidecar cache operations.
///
/// # When You'll Encounter This
///
/// - [`InvalidArgument`](Error::InvalidArgument) when a [`Sidecache`] is
///   built without an HTTP client
/// - [`Transport`](Error::Transport) when a request cannot be built or the
///   sidecar cannot be reached
/// - [`Remote`](Error::Remote) when [`get_cache`] receives a status code
///   outside of `200..400`
/// - [`Io`](Error::Io) when the body of a successful response cannot be read
///
/// [`Sidecache`]: crate::Sidecache
/// [`get_cache`]: crate::Sidecache::get_cache
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// An argument supplied at construction time is missing or unusable.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),

    /// The request could not be built or sent.
    ///
    /// Covers malformed URIs, invalid header values, refused connections
    /// and any other failure reported by the HTTP client.
    #[error("sidecar cache transport error: {0}")]
    Transport(#[source] BoxError),

    /// The sidecar answered with an unsuccessful status code.
    #[error("cache returns unsuccessful response code: {}", status.as_u16())]
    Remote {
        /// Status code returned by the sidecar.
        status: StatusCode,
    },

    /// The body of a successful response could not be drained.
    #[error("failed to read sidecar cache response body: {0}")]
    Io(#[source] BoxError),
}

impl Error {
    pub(crate) fn transport(error: impl Into<BoxError>) -> Self {
        Self::Transport(error.into())
    }

    pub(crate) fn io(error: impl Into<BoxError>) -> Self {
        Self::Io(error.into())
    }

    /// Returns `true` if the request never produced a response.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }

    /// Returns `true` if the sidecar answered with an unsuccessful status.
    pub fn is_remote(&self) -> bool {
        matches!(self, Self::Remote { .. })
    }

    /// Status code of a [`Remote`](Error::Remote) error.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Remote { status } => Some(*status),
            _ => None,
        }
    }
}
