//! Error types for football-data API calls.
//!
//! Every failure is returned to the caller as an [`Error`]. Nothing is retried
//! or swallowed inside the client, so the variants are shaped to let callers
//! tell "could not reach the service" apart from "the service rejected the
//! request".

use http::{HeaderMap, StatusCode};

use crate::rate_limit::RateLimitInfo;

/// The main error type for football-data API calls.
///
/// # Examples
///
/// ```no_run
/// use football_data::{Client, Error};
///
/// # async fn example() -> Result<(), Error> {
/// let client = Client::from_env()?;
///
/// match client.players().find("44").await {
///     Ok(player) => println!("Found {:?}", player.name),
///     Err(Error::Api { status, message, .. }) => {
///         eprintln!("API rejected the request ({status}): {message:?}");
///     }
///     Err(e) if e.is_transport() => eprintln!("Could not reach the API: {e}"),
///     Err(e) => eprintln!("Other error: {e}"),
/// }
/// # Ok(())
/// # }
/// ```
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The client is missing configuration it needs to send a request.
    ///
    /// Raised before any network I/O, most commonly because no API token
    /// could be resolved.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// A required request parameter was missing or empty.
    ///
    /// Raised before any network I/O.
    #[error("Validation error: {0}")]
    Validation(String),

    /// A network-level error occurred (connection failed, DNS lookup failed, etc.).
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The request exceeded the configured timeout.
    #[error("Request timed out")]
    Timeout,

    /// The request was aborted through its [`CancellationToken`](crate::CancellationToken).
    #[error("Request cancelled")]
    Cancelled,

    /// The API answered with a status other than `200 OK`.
    ///
    /// The display text carries the HTTP status line (e.g. `404 Not Found`);
    /// the upstream error payload, when it could be parsed, is available in
    /// `message` and `code`.
    #[error("API error: {status}")]
    Api {
        /// The HTTP status code
        status: StatusCode,
        /// The `message` field of the upstream error payload, if any
        message: Option<String>,
        /// The numeric error code of the upstream error payload, if any
        code: Option<i64>,
        /// The raw response body
        raw_response: String,
        /// The response headers
        headers: HeaderMap,
        /// Rate limit counters reported alongside the error
        rate_limit: Option<RateLimitInfo>,
    },

    /// Failed to deserialize a `200 OK` body into the expected type.
    #[error("Failed to deserialize response (status {status}): {serde_error}")]
    DeserializationFailed {
        /// The raw response body that failed to deserialize
        raw_response: String,
        /// The serde error message
        serde_error: String,
        /// The HTTP status code
        status: StatusCode,
    },

    /// A filter object could not be encoded as query parameters.
    #[error("Failed to serialize request: {0}")]
    SerializationFailed(String),

    /// An invalid URL was provided or produced.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl Error {
    /// Returns `true` if the service could not be reached.
    ///
    /// Covers network failures, timeouts, and cancellations.
    pub fn is_transport(&self) -> bool {
        matches!(self, Error::Network(_) | Error::Timeout | Error::Cancelled)
    }

    /// Returns `true` if this error is potentially retryable.
    ///
    /// The client never retries on its own; this is a classification aid for
    /// callers that wrap it in their own retry policy. Network errors,
    /// timeouts, `429`, and 5xx API errors qualify.
    ///
    /// # Examples
    ///
    /// ```
    /// use football_data::Error;
    /// use http::StatusCode;
    ///
    /// let err = Error::Api {
    ///     status: StatusCode::TOO_MANY_REQUESTS,
    ///     message: None,
    ///     code: Some(429),
    ///     raw_response: String::new(),
    ///     headers: http::HeaderMap::new(),
    ///     rate_limit: None,
    /// };
    /// assert!(err.is_retryable());
    ///
    /// let err = Error::Validation("team identifier is required".into());
    /// assert!(!err.is_retryable());
    /// ```
    pub fn is_retryable(&self) -> bool {
        match self {
            Error::Network(_) | Error::Timeout => true,
            Error::Api { status, .. } => {
                status.is_server_error() || *status == StatusCode::TOO_MANY_REQUESTS
            }
            Error::Configuration(_)
            | Error::Validation(_)
            | Error::Cancelled
            | Error::DeserializationFailed { .. }
            | Error::SerializationFailed(_)
            | Error::InvalidUrl(_) => false,
        }
    }

    /// Returns the HTTP status code if this error has one.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Error::Api { status, .. } => Some(*status),
            Error::DeserializationFailed { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Returns the raw response body if this error has one.
    pub fn raw_response(&self) -> Option<&str> {
        match self {
            Error::Api { raw_response, .. } => Some(raw_response),
            Error::DeserializationFailed { raw_response, .. } => Some(raw_response),
            _ => None,
        }
    }

    /// Returns rate limit information reported with an API error.
    pub fn rate_limit_info(&self) -> Option<&RateLimitInfo> {
        match self {
            Error::Api { rate_limit, .. } => rate_limit.as_ref(),
            _ => None,
        }
    }
}

/// A specialized `Result` type for football-data API calls.
pub type Result<T> = std::result::Result<T, Error>;
