//! Response wrapper that preserves both parsed data and raw response details.
//!
//! Resource accessors hand back the decoded data directly. The lower-level
//! [`Client::get`](crate::Client::get) and [`Client::call`](crate::Client::call)
//! return a [`Response`] so callers can also see headers, timing, and the raw
//! body.

use http::{HeaderMap, StatusCode};
use std::time::Duration;

use crate::rate_limit::RateLimitInfo;

/// A successful HTTP response together with its decoded body.
///
/// # Examples
///
/// ```no_run
/// use football_data::{Client, types::AreaList};
///
/// # async fn example() -> Result<(), football_data::Error> {
/// let client = Client::from_env()?;
///
/// let response = client.get::<AreaList, ()>("areas", None).await?;
/// println!("{:?} areas in {:?}", response.data.count, response.latency);
///
/// if let Some(limits) = response.rate_limit() {
///     println!("{:?} requests left this minute", limits.remaining);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Response<T> {
    /// The deserialized response data.
    pub data: T,

    /// The raw response body as a string.
    pub raw_body: String,

    /// The HTTP status code of the response.
    pub status: StatusCode,

    /// The response headers.
    pub headers: HeaderMap,

    /// Time from sending the request until the body was read.
    pub latency: Duration,
}

impl<T> Response<T> {
    /// Creates a new `Response`.
    pub fn new(
        data: T,
        raw_body: String,
        status: StatusCode,
        headers: HeaderMap,
        latency: Duration,
    ) -> Self {
        Self {
            data,
            raw_body,
            status,
            headers,
            latency,
        }
    }

    /// Maps the response data to a different type using the provided function.
    ///
    /// # Examples
    ///
    /// ```
    /// # use football_data::Response;
    /// # use http::{HeaderMap, StatusCode};
    /// # use std::time::Duration;
    /// let response = Response::new(
    ///     42,
    ///     "42".to_string(),
    ///     StatusCode::OK,
    ///     HeaderMap::new(),
    ///     Duration::from_millis(100),
    /// );
    ///
    /// let string_response = response.map(|n| n.to_string());
    /// assert_eq!(string_response.data, "42");
    /// ```
    pub fn map<U, F>(self, f: F) -> Response<U>
    where
        F: FnOnce(T) -> U,
    {
        Response {
            data: f(self.data),
            raw_body: self.raw_body,
            status: self.status,
            headers: self.headers,
            latency: self.latency,
        }
    }

    /// Consumes the response and returns the decoded data.
    pub fn into_data(self) -> T {
        self.data
    }

    /// Returns a header value by name.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name)?.to_str().ok()
    }

    /// Returns the rate limit counters reported with this response.
    pub fn rate_limit(&self) -> Option<RateLimitInfo> {
        RateLimitInfo::from_headers(&self.headers)
    }
}

impl<T> AsRef<T> for Response<T> {
    fn as_ref(&self) -> &T {
        &self.data
    }
}

impl<T> std::ops::Deref for Response<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::HeaderValue;

    #[test]
    fn test_header_and_rate_limit_lookup() {
        let mut headers = HeaderMap::new();
        headers.insert("content-type", HeaderValue::from_static("application/json"));
        headers.insert("x-requests-available-minute", HeaderValue::from_static("9"));

        let response = Response::new(
            (),
            String::new(),
            StatusCode::OK,
            headers,
            Duration::from_millis(5),
        );

        assert_eq!(response.header("content-type"), Some("application/json"));
        assert_eq!(response.header("x-missing"), None);
        assert_eq!(response.rate_limit().unwrap().remaining, Some(9));
    }
}
