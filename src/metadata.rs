//! Request metadata and query-string encoding.
//!
//! A [`RequestMetadata`] describes one GET request relative to the client's
//! base URL. Filter objects are encoded into query pairs using their serde
//! field names, which are the API's wire names.

use http::{HeaderMap, HeaderName, HeaderValue, Method};
use serde::Serialize;
use serde_json::Value;
use url::Url;

use crate::routes::Route;
use crate::{Error, Result};

/// Metadata for an individual HTTP request.
#[derive(Debug, Clone)]
pub struct RequestMetadata {
    /// The HTTP method. The API is read-only, so this is always GET.
    pub method: Method,

    /// Path segments appended to the base URL. Each one is percent-encoded.
    pub segments: Vec<String>,

    /// Additional headers for this request.
    pub headers: HeaderMap,

    /// Query parameters for this request, in insertion order.
    pub query_params: Vec<(String, String)>,
}

impl RequestMetadata {
    /// Creates a GET request for a relative path such as `competitions/PL`.
    pub fn new(path: impl AsRef<str>) -> Self {
        Self::from_segments(
            path.as_ref()
                .split('/')
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect(),
        )
    }

    /// Creates a GET request for an expanded [`Route`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] if the route needs an identifier and
    /// `id` is missing or blank.
    pub fn for_route(route: &Route, id: Option<&str>) -> Result<Self> {
        Ok(Self::from_segments(route.expand(id)?))
    }

    fn from_segments(segments: Vec<String>) -> Self {
        Self {
            method: Method::GET,
            segments,
            headers: HeaderMap::new(),
            query_params: Vec::new(),
        }
    }

    /// Adds a header to the request.
    ///
    /// # Errors
    ///
    /// Returns an error if the header name or value is invalid.
    pub fn with_header(mut self, name: impl AsRef<str>, value: impl AsRef<str>) -> Result<Self> {
        let name = HeaderName::try_from(name.as_ref())
            .map_err(|e| Error::Configuration(format!("Invalid header name: {}", e)))?;
        let value = HeaderValue::try_from(value.as_ref())
            .map_err(|e| Error::Configuration(format!("Invalid header value: {}", e)))?;
        self.headers.insert(name, value);
        Ok(self)
    }

    /// Adds a query parameter to the request.
    pub fn with_query_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query_params.push((key.into(), value.into()));
        self
    }

    /// Adds every set field of `filter` as a query parameter.
    ///
    /// `None` adds nothing, so the request goes out without a query string.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SerializationFailed`] if the filter does not
    /// serialize to a flat object.
    pub fn with_filter<F>(mut self, filter: Option<&F>) -> Result<Self>
    where
        F: Serialize + ?Sized,
    {
        if let Some(filter) = filter {
            self.query_params.extend(encode_filter(filter)?);
        }
        Ok(self)
    }

    /// Resolves the full request URL against `base`.
    ///
    /// The base URL's own path (e.g. `/v2`) is kept and the segments are
    /// appended after it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidUrl`] if `base` cannot carry a path.
    pub fn url(&self, base: &Url) -> Result<Url> {
        let mut url = base.clone();
        {
            let mut path = url
                .path_segments_mut()
                .map_err(|_| Error::InvalidUrl(url::ParseError::RelativeUrlWithCannotBeABaseBase))?;
            path.pop_if_empty();
            path.extend(&self.segments);
        }

        url.set_query(None);
        if !self.query_params.is_empty() {
            url.query_pairs_mut().extend_pairs(&self.query_params);
        }

        Ok(url)
    }
}

/// Encodes a filter object as `(wire name, value)` pairs.
///
/// Absent (`null`) and empty fields are skipped, lists become a single
/// comma-separated value, and scalars are rendered as plain text.
pub(crate) fn encode_filter<F>(filter: &F) -> Result<Vec<(String, String)>>
where
    F: Serialize + ?Sized,
{
    let value =
        serde_json::to_value(filter).map_err(|e| Error::SerializationFailed(e.to_string()))?;

    let fields = match value {
        Value::Object(fields) => fields,
        Value::Null => return Ok(Vec::new()),
        other => {
            return Err(Error::SerializationFailed(format!(
                "filter must serialize to an object, got {other}"
            )))
        }
    };

    let mut pairs = Vec::with_capacity(fields.len());
    for (key, value) in fields {
        if let Some(value) = encode_value(&key, value)? {
            pairs.push((key, value));
        }
    }
    Ok(pairs)
}

fn encode_value(key: &str, value: Value) -> Result<Option<String>> {
    let encoded = match value {
        Value::Null => return Ok(None),
        Value::Array(items) => {
            let mut parts = Vec::with_capacity(items.len());
            for item in items {
                if let Some(part) = encode_scalar(key, item)? {
                    parts.push(part);
                }
            }
            parts.join(",")
        }
        scalar => match encode_scalar(key, scalar)? {
            Some(s) => s,
            None => return Ok(None),
        },
    };

    Ok((!encoded.is_empty()).then_some(encoded))
}

fn encode_scalar(key: &str, value: Value) -> Result<Option<String>> {
    match value {
        Value::Null => Ok(None),
        Value::String(s) => Ok(Some(s)),
        Value::Number(n) => Ok(Some(n.to_string())),
        Value::Bool(b) => Ok(Some(b.to_string())),
        Value::Array(_) | Value::Object(_) => Err(Error::SerializationFailed(format!(
            "filter field `{key}` must be a scalar or a list of scalars"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;

    #[derive(Serialize, Default)]
    #[serde(rename_all = "camelCase")]
    struct SampleFilters {
        date_from: Option<String>,
        status: Option<Vec<&'static str>>,
        limit: Option<u32>,
        areas: Option<Vec<u32>>,
    }

    fn base() -> Url {
        Url::parse("https://api.football-data.org/v2").unwrap()
    }

    #[test]
    fn test_url_keeps_base_path() {
        let url = RequestMetadata::new("competitions/PL/teams")
            .url(&base())
            .unwrap();
        assert_eq!(
            url.as_str(),
            "https://api.football-data.org/v2/competitions/PL/teams"
        );
        assert_eq!(url.query(), None);
    }

    #[test]
    fn test_url_with_trailing_slash_base() {
        let base = Url::parse("http://127.0.0.1:8080/v2/").unwrap();
        let url = RequestMetadata::new("areas").url(&base).unwrap();
        assert_eq!(url.path(), "/v2/areas");
    }

    #[test]
    fn test_id_segment_is_escaped() {
        let meta = RequestMetadata::from_segments(vec!["players".into(), "1/../2".into()]);
        let url = meta.url(&base()).unwrap();
        assert_eq!(url.path(), "/v2/players/1%2F..%2F2");
    }

    #[test]
    fn test_absent_fields_are_omitted() {
        let filters = SampleFilters {
            areas: Some(vec![2001]),
            ..Default::default()
        };
        let pairs = encode_filter(&filters).unwrap();
        assert_eq!(pairs, vec![("areas".to_string(), "2001".to_string())]);
    }

    #[test]
    fn test_lists_are_comma_joined() {
        let filters = SampleFilters {
            status: Some(vec!["SCHEDULED", "LIVE"]),
            limit: Some(5),
            ..Default::default()
        };
        let url = RequestMetadata::new("matches")
            .with_filter(Some(&filters))
            .unwrap()
            .url(&base())
            .unwrap();
        let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
        assert!(pairs.contains(&("status".into(), "SCHEDULED,LIVE".into())));
        assert!(pairs.contains(&("limit".into(), "5".into())));
        assert_eq!(pairs.len(), 2);
    }

    #[test]
    fn test_empty_values_are_omitted() {
        let filters = SampleFilters {
            date_from: Some(String::new()),
            status: Some(vec![]),
            ..Default::default()
        };
        assert!(encode_filter(&filters).unwrap().is_empty());
    }

    #[test]
    fn test_no_filter_means_no_query_string() {
        let url = RequestMetadata::new("matches")
            .with_filter::<SampleFilters>(None)
            .unwrap()
            .url(&base())
            .unwrap();
        assert_eq!(url.query(), None);
    }

    #[test]
    fn test_nested_object_rejected() {
        #[derive(Serialize)]
        struct Nested {
            inner: SampleFilters,
        }
        let result = encode_filter(&Nested {
            inner: SampleFilters::default(),
        });
        assert!(matches!(result, Err(Error::SerializationFailed(_))));
    }

    #[test]
    fn test_for_route_validates_id() {
        let result = RequestMetadata::for_route(&crate::routes::TEAM, Some(""));
        assert!(matches!(result, Err(Error::Validation(_))));
    }
}
