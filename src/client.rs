//! HTTP client and the request/response pipeline.
//!
//! The [`Client`] type is the main entry point. Every resource accessor goes
//! through the same steps: expand its route, encode its filter, resolve the
//! API token, send one GET request, and decode the body.

use crate::{
    auth::{TokenSource, AUTH_HEADER},
    cancel::CancellationToken,
    metadata::RequestMetadata,
    rate_limit::RateLimitInfo,
    resources::{Areas, Competitions, Matches, Players, Teams},
    routes::Route,
    Error, Response, Result,
};
use http::{header, HeaderMap, HeaderName, HeaderValue, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use std::sync::Arc;
use std::time::{Duration, Instant};
use url::Url;

/// Versioned root of the football-data.org API.
pub const DEFAULT_BASE_URL: &str = "https://api.football-data.org/v2";

/// A client for the football-data.org API.
///
/// The client is cheap to clone and safe to share between tasks: it holds no
/// per-request state, and connection pooling is left to the underlying
/// `reqwest::Client`.
///
/// # Examples
///
/// ```no_run
/// use football_data::Client;
/// use std::time::Duration;
///
/// # async fn example() -> Result<(), football_data::Error> {
/// let client = Client::builder()
///     .token("your-api-token")
///     .timeout(Duration::from_secs(10))
///     .build()?;
///
/// let area = client.areas().find("2000").await?;
/// println!("{:?}", area.name);
///
/// let competition = client.competitions().find("PL").await?;
/// println!("{:?}", competition.current_season);
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct Client {
    inner: Arc<ClientInner>,
}

#[derive(Debug)]
struct ClientInner {
    http_client: reqwest::Client,
    base_url: Url,
    default_headers: HeaderMap,
    token: Option<TokenSource>,
    timeout: Option<Duration>,
}

impl Client {
    /// Creates a new `ClientBuilder` for configuring a client.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Creates a client that authenticates with the given token.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(token: impl Into<TokenSource>) -> Result<Self> {
        Self::builder().token(token).build()
    }

    /// Creates a client that reads `FOOTBALL_API_TOKEN` on every request.
    ///
    /// A missing variable is only reported when a request is attempted, as
    /// [`Error::Configuration`].
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn from_env() -> Result<Self> {
        Self::builder().token(TokenSource::default_env()).build()
    }

    /// The base URL every route is resolved against.
    pub fn base_url(&self) -> &Url {
        &self.inner.base_url
    }

    /// Area lookups.
    pub fn areas(&self) -> Areas<'_> {
        Areas::new(self)
    }

    /// Competition lookups, listings, and per-competition collections.
    pub fn competitions(&self) -> Competitions<'_> {
        Competitions::new(self)
    }

    /// Match lookups and listings.
    pub fn matches(&self) -> Matches<'_> {
        Matches::new(self)
    }

    /// Player lookups and match history.
    pub fn players(&self) -> Players<'_> {
        Players::new(self)
    }

    /// Team lookups and match history.
    pub fn teams(&self) -> Teams<'_> {
        Teams::new(self)
    }

    /// Makes a GET request to a path relative to the base URL.
    ///
    /// `filter` is encoded into the query string; `None` sends no query
    /// string at all.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use football_data::{Client, types::CompetitionList, CompetitionFilters, Plan};
    ///
    /// # async fn example() -> Result<(), football_data::Error> {
    /// let client = Client::from_env()?;
    /// let filters = CompetitionFilters {
    ///     plan: Some(Plan::TierOne),
    ///     ..Default::default()
    /// };
    ///
    /// let response = client
    ///     .get::<CompetitionList, _>("competitions", Some(&filters))
    ///     .await?;
    /// println!("{:?} competitions", response.data.count);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn get<T, F>(&self, path: impl AsRef<str>, filter: Option<&F>) -> Result<Response<T>>
    where
        T: DeserializeOwned,
        F: Serialize + ?Sized,
    {
        let metadata = RequestMetadata::new(path).with_filter(filter)?;
        self.call(metadata, None).await
    }

    /// Sends one request and decodes its body as `T`.
    ///
    /// If `cancel` is given and gets cancelled before the response body has
    /// been read, the request is dropped and [`Error::Cancelled`] is returned.
    ///
    /// # Errors
    ///
    /// * [`Error::Configuration`] if no API token can be resolved. Nothing is sent.
    /// * [`Error::Network`], [`Error::Timeout`], or [`Error::Cancelled`] if the
    ///   exchange with the server fails.
    /// * [`Error::Api`] if the server answers with anything but `200 OK`.
    /// * [`Error::DeserializationFailed`] if the body is not valid JSON for `T`.
    pub async fn call<T>(
        &self,
        metadata: RequestMetadata,
        cancel: Option<&CancellationToken>,
    ) -> Result<Response<T>>
    where
        T: DeserializeOwned,
    {
        let request = self.build_request(&metadata)?;
        let start_time = Instant::now();

        let exchange = Self::exchange(request);
        let (status, headers, raw_body) = match cancel {
            Some(token) => {
                tokio::select! {
                    biased;
                    _ = token.cancelled() => {
                        tracing::debug!(path = ?metadata.segments, "Request cancelled");
                        return Err(Error::Cancelled);
                    }
                    result = exchange => result?,
                }
            }
            None => exchange.await?,
        };

        let latency = start_time.elapsed();
        tracing::debug!(
            status = status.as_u16(),
            latency_ms = latency.as_millis(),
            "Received HTTP response"
        );

        Self::parse_response(status, headers, raw_body, latency)
    }

    /// Validates, builds, and executes the request behind one accessor.
    ///
    /// A `null` body decodes to `T::default()`, a record with nothing set.
    pub(crate) async fn fetch<T, F>(
        &self,
        route: &Route,
        id: Option<&str>,
        filter: Option<&F>,
        cancel: Option<&CancellationToken>,
    ) -> Result<T>
    where
        T: DeserializeOwned + Default,
        F: Serialize + ?Sized,
    {
        let metadata = RequestMetadata::for_route(route, id)?.with_filter(filter)?;
        let response = self.call::<Option<T>>(metadata, cancel).await?;
        Ok(response.into_data().unwrap_or_default())
    }

    fn build_request(&self, metadata: &RequestMetadata) -> Result<reqwest::RequestBuilder> {
        let token = self
            .inner
            .token
            .as_ref()
            .ok_or_else(|| Error::Configuration("No API token configured".to_string()))?
            .resolve()?;

        let url = metadata.url(&self.inner.base_url)?;

        tracing::debug!(
            method = %metadata.method,
            url = %url,
            "Executing HTTP request"
        );

        let mut request = self
            .inner
            .http_client
            .request(metadata.method.clone(), url)
            .headers(self.inner.default_headers.clone())
            .headers(metadata.headers.clone())
            .header(AUTH_HEADER, token);

        if let Some(timeout) = self.inner.timeout {
            request = request.timeout(timeout);
        }

        Ok(request)
    }

    /// Sends the request and reads the whole body.
    async fn exchange(request: reqwest::RequestBuilder) -> Result<(StatusCode, HeaderMap, String)> {
        let response = request.send().await.map_err(transport_error)?;
        let status = response.status();
        let headers = response.headers().clone();
        let raw_body = response.text().await.map_err(transport_error)?;
        Ok((status, headers, raw_body))
    }

    fn parse_response<T>(
        status: StatusCode,
        headers: HeaderMap,
        raw_body: String,
        latency: Duration,
    ) -> Result<Response<T>>
    where
        T: DeserializeOwned,
    {
        if status != StatusCode::OK {
            let (message, code) = parse_error_payload(&raw_body);
            let rate_limit = RateLimitInfo::from_headers(&headers);

            tracing::debug!(
                status = status.as_u16(),
                message = ?message,
                "API returned an error status"
            );

            return Err(Error::Api {
                status,
                message,
                code,
                raw_response: raw_body,
                headers,
                rate_limit,
            });
        }

        match serde_json::from_str::<T>(&raw_body) {
            Ok(data) => Ok(Response::new(data, raw_body, status, headers, latency)),
            Err(e) => {
                tracing::debug!(error = %e, "Failed to deserialize response");

                Err(Error::DeserializationFailed {
                    raw_response: raw_body,
                    serde_error: e.to_string(),
                    status,
                })
            }
        }
    }
}

fn transport_error(error: reqwest::Error) -> Error {
    if error.is_timeout() {
        Error::Timeout
    } else {
        Error::Network(error)
    }
}

/// Pulls `message` and the numeric error code out of an error body.
///
/// The API has used both `error` and `errorCode` for the code.
fn parse_error_payload(raw_body: &str) -> (Option<String>, Option<i64>) {
    let Ok(Value::Object(payload)) = serde_json::from_str::<Value>(raw_body) else {
        return (None, None);
    };

    let message = payload
        .get("message")
        .and_then(Value::as_str)
        .map(str::to_string);
    let code = ["errorCode", "error"]
        .iter()
        .find_map(|key| payload.get(*key).and_then(Value::as_i64));

    (message, code)
}

/// Builder for configuring and creating a [`Client`].
///
/// # Examples
///
/// ```no_run
/// use football_data::{ClientBuilder, TokenSource};
/// use std::time::Duration;
///
/// # fn example() -> Result<(), football_data::Error> {
/// let client = ClientBuilder::new()
///     .token(TokenSource::Env("MY_FOOTBALL_TOKEN".into()))
///     .timeout(Duration::from_secs(15))
///     .default_header("User-Agent", "my-app/1.0")?
///     .build()?;
/// # Ok(())
/// # }
/// ```
pub struct ClientBuilder {
    base_url: Option<Url>,
    default_headers: HeaderMap,
    token: Option<TokenSource>,
    http_client: Option<reqwest::Client>,
    timeout: Option<Duration>,
}

impl ClientBuilder {
    /// Creates a new `ClientBuilder` with default settings.
    pub fn new() -> Self {
        Self {
            base_url: None,
            default_headers: HeaderMap::new(),
            token: None,
            http_client: None,
            timeout: None,
        }
    }

    /// Overrides the base URL, e.g. to point at a mock server.
    ///
    /// Defaults to [`DEFAULT_BASE_URL`].
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is invalid.
    pub fn base_url(mut self, url: impl AsRef<str>) -> Result<Self> {
        self.base_url = Some(Url::parse(url.as_ref())?);
        Ok(self)
    }

    /// Sets where the API token comes from.
    ///
    /// A plain string is used as the token itself. Without a token source
    /// every request fails with [`Error::Configuration`].
    pub fn token(mut self, token: impl Into<TokenSource>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Uses a caller-configured `reqwest::Client` as the transport.
    pub fn http_client(mut self, client: reqwest::Client) -> Self {
        self.http_client = Some(client);
        self
    }

    /// Adds a default header that will be included in all requests.
    ///
    /// # Errors
    ///
    /// Returns an error if the header name or value is invalid.
    pub fn default_header(mut self, name: impl AsRef<str>, value: impl AsRef<str>) -> Result<Self> {
        let name = HeaderName::try_from(name.as_ref())
            .map_err(|e| Error::Configuration(format!("Invalid header name: {}", e)))?;
        let value = HeaderValue::try_from(value.as_ref())
            .map_err(|e| Error::Configuration(format!("Invalid header value: {}", e)))?;
        self.default_headers.insert(name, value);
        Ok(self)
    }

    /// Sets the per-request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Builds the configured `Client`.
    ///
    /// # Errors
    ///
    /// Returns an error if the default base URL cannot be parsed or the HTTP
    /// client cannot be built.
    pub fn build(self) -> Result<Client> {
        let base_url = match self.base_url {
            Some(url) => url,
            None => Url::parse(DEFAULT_BASE_URL)?,
        };

        let http_client = match self.http_client {
            Some(client) => client,
            None => reqwest::Client::builder().build().map_err(|e| {
                Error::Configuration(format!("Failed to build HTTP client: {}", e))
            })?,
        };

        let mut default_headers = HeaderMap::new();
        default_headers.insert(header::ACCEPT, HeaderValue::from_static("application/json"));
        default_headers.extend(self.default_headers);

        Ok(Client {
            inner: Arc::new(ClientInner {
                http_client,
                base_url,
                default_headers,
                token: self.token,
                timeout: self.timeout,
            }),
        })
    }
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_base_url() {
        let client = Client::new("token").unwrap();
        assert_eq!(client.base_url().as_str(), DEFAULT_BASE_URL);
    }

    #[test]
    fn test_missing_token_fails_before_sending() {
        let client = Client::builder().build().unwrap();
        let result = client.build_request(&RequestMetadata::new("areas"));
        assert!(matches!(result, Err(Error::Configuration(_))));
    }

    #[test]
    fn test_parse_error_payload() {
        let (message, code) = parse_error_payload(
            r#"{"message": "The resource you are looking for does not exist.", "error": 404}"#,
        );
        assert_eq!(
            message.as_deref(),
            Some("The resource you are looking for does not exist.")
        );
        assert_eq!(code, Some(404));

        let (_, code) = parse_error_payload(r#"{"errorCode": 403, "message": "Restricted"}"#);
        assert_eq!(code, Some(403));

        assert_eq!(parse_error_payload("<html>oops</html>"), (None, None));
    }

    #[test]
    fn test_non_ok_status_is_api_error() {
        let result = Client::parse_response::<Value>(
            StatusCode::NOT_FOUND,
            HeaderMap::new(),
            r#"{"message": "nope", "error": 404}"#.to_string(),
            Duration::ZERO,
        );
        match result {
            Err(Error::Api {
                status, message, ..
            }) => {
                assert_eq!(status, StatusCode::NOT_FOUND);
                assert_eq!(message.as_deref(), Some("nope"));
            }
            other => panic!("Expected Api error, got {:?}", other),
        }
    }

    #[test]
    fn test_malformed_body_is_deserialization_error() {
        let result = Client::parse_response::<Value>(
            StatusCode::OK,
            HeaderMap::new(),
            "{not json".to_string(),
            Duration::ZERO,
        );
        assert!(matches!(result, Err(Error::DeserializationFailed { .. })));
    }
}
