/// The error taxonomy shared by every crate in this workspace (spec §7).
///
/// Each layer maps its concrete failures onto this sum type; nothing above
/// the backend client or storage adapters is allowed to "catch all".
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Parameter validation failed. Surfaced as 4xx at the HTTP edge.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// A named resource (point / campaign / job) is unknown.
    #[error("not found: {0}")]
    NotFound(String),

    /// The circuit breaker is open, or the backend failed terminally after
    /// retries were exhausted. Surfaced as 503.
    #[error("imagery backend unavailable: {0}")]
    BackendUnavailable(String),

    /// A retryable 429 from the backend. Only ever observed *inside* the
    /// backend client; by the time it crosses a crate boundary it has
    /// either succeeded or become [`Error::BackendUnavailable`].
    #[error("imagery backend is throttling requests")]
    BackendThrottled,

    /// L2 metadata claimed an L3 object existed but it could not be read.
    /// Self-healing: the caller deletes the L2 record and treats this as a
    /// single re-materializable miss.
    #[error("cache entry degraded, metadata pointed at a missing payload")]
    CacheDegraded,

    /// A transient, worker-local error (network blip); the worker retries.
    #[error("transient error: {0}")]
    Transient(String),

    /// A configuration or startup invariant was violated. The process must
    /// exit nonzero.
    #[error("fatal error: {0}")]
    Fatal(String),
}

impl Error {
    pub fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidRequest(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    /// Whether this error is safe to retry by re-running the same
    /// operation from scratch (as opposed to one that will reliably repeat).
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Transient(_) | Self::BackendThrottled)
    }
}

pub type Result<T> = std::result::Result<T, Error>;
