//! Rate limit header parsing.
//!
//! football-data.org reports its per-minute request budget in response
//! headers. The client only parses them; it never waits or reschedules on
//! their behalf.

use http::HeaderMap;
use std::time::{Duration, SystemTime};

/// Information extracted from rate limit headers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RateLimitInfo {
    /// Requests left in the current window (`X-Requests-Available-Minute`).
    pub remaining: Option<u64>,

    /// Time until the request counter resets (`X-RequestCounter-Reset`).
    pub reset_in: Option<Duration>,

    /// How long the server asked callers to wait (`Retry-After`).
    pub retry_after: Option<Duration>,
}

impl RateLimitInfo {
    /// Extracts rate limit information from HTTP response headers.
    ///
    /// Returns `None` if none of the known headers are present.
    ///
    /// # Examples
    ///
    /// ```
    /// use football_data::rate_limit::RateLimitInfo;
    /// use http::HeaderMap;
    ///
    /// let mut headers = HeaderMap::new();
    /// headers.insert("x-requests-available-minute", "0".parse().unwrap());
    /// headers.insert("x-requestcounter-reset", "42".parse().unwrap());
    ///
    /// let info = RateLimitInfo::from_headers(&headers).unwrap();
    /// assert!(info.is_exhausted());
    /// ```
    pub fn from_headers(headers: &HeaderMap) -> Option<Self> {
        let info = Self {
            remaining: parse_remaining(headers),
            reset_in: parse_counter_reset(headers),
            retry_after: parse_retry_after(headers),
        };

        if info.remaining.is_none() && info.reset_in.is_none() && info.retry_after.is_none() {
            None
        } else {
            Some(info)
        }
    }

    /// Returns `true` if the current window has no requests left.
    pub fn is_exhausted(&self) -> bool {
        self.retry_after.is_some() || self.remaining == Some(0)
    }

    /// How long a caller would have to wait for the budget to refill.
    ///
    /// Prefers `Retry-After` over the counter reset.
    pub fn wait_hint(&self) -> Option<Duration> {
        self.retry_after.or(self.reset_in)
    }
}

fn parse_remaining(headers: &HeaderMap) -> Option<u64> {
    ["x-requests-available-minute", "x-ratelimit-remaining"]
        .iter()
        .find_map(|name| headers.get(*name)?.to_str().ok()?.trim().parse().ok())
}

/// The counter reset is reported in seconds relative to now.
fn parse_counter_reset(headers: &HeaderMap) -> Option<Duration> {
    let header = headers.get("x-requestcounter-reset")?.to_str().ok()?;
    header.trim().parse::<u64>().ok().map(Duration::from_secs)
}

/// Parses the Retry-After header.
///
/// Supports both delay-seconds (integer) and HTTP-date formats.
fn parse_retry_after(headers: &HeaderMap) -> Option<Duration> {
    let header = headers.get("retry-after")?.to_str().ok()?;

    if let Ok(seconds) = header.trim().parse::<u64>() {
        return Some(Duration::from_secs(seconds));
    }

    let date_time = httpdate::parse_http_date(header).ok()?;
    Some(
        date_time
            .duration_since(SystemTime::now())
            .unwrap_or(Duration::ZERO),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::HeaderValue;

    #[test]
    fn test_no_headers_no_info() {
        assert_eq!(RateLimitInfo::from_headers(&HeaderMap::new()), None);
    }

    #[test]
    fn test_football_data_headers() {
        let mut headers = HeaderMap::new();
        headers.insert("x-requests-available-minute", HeaderValue::from_static("7"));
        headers.insert("x-requestcounter-reset", HeaderValue::from_static("31"));

        let info = RateLimitInfo::from_headers(&headers).unwrap();
        assert_eq!(info.remaining, Some(7));
        assert_eq!(info.reset_in, Some(Duration::from_secs(31)));
        assert!(!info.is_exhausted());
        assert_eq!(info.wait_hint(), Some(Duration::from_secs(31)));
    }

    #[test]
    fn test_parse_retry_after_seconds() {
        let mut headers = HeaderMap::new();
        headers.insert("retry-after", HeaderValue::from_static("60"));

        assert_eq!(parse_retry_after(&headers), Some(Duration::from_secs(60)));
    }

    #[test]
    fn test_parse_retry_after_http_date_in_past() {
        let mut headers = HeaderMap::new();
        headers.insert(
            "retry-after",
            HeaderValue::from_static("Wed, 21 Oct 2015 07:28:00 GMT"),
        );

        assert_eq!(parse_retry_after(&headers), Some(Duration::ZERO));
    }

    #[test]
    fn test_retry_after_preferred_over_reset() {
        let info = RateLimitInfo {
            remaining: Some(0),
            reset_in: Some(Duration::from_secs(50)),
            retry_after: Some(Duration::from_secs(10)),
        };
        assert!(info.is_exhausted());
        assert_eq!(info.wait_hint(), Some(Duration::from_secs(10)));
    }

    #[test]
    fn test_generic_remaining_header_fallback() {
        let mut headers = HeaderMap::new();
        headers.insert("x-ratelimit-remaining", HeaderValue::from_static("0"));

        let info = RateLimitInfo::from_headers(&headers).unwrap();
        assert!(info.is_exhausted());
    }
}
