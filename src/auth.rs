//! API token resolution.
//!
//! football-data.org authenticates every request with an `X-Auth-Token`
//! header. The token is resolved each time a request is built, so a token
//! read from the environment can be rotated without rebuilding the client.

use http::HeaderValue;

use crate::{Error, Result};

/// Header carrying the API token on every request.
pub const AUTH_HEADER: &str = "X-Auth-Token";

/// Environment variable read by [`TokenSource::default_env`].
pub const DEFAULT_TOKEN_ENV: &str = "FOOTBALL_API_TOKEN";

/// Where the client gets its API token from.
///
/// # Examples
///
/// ```
/// use football_data::TokenSource;
///
/// let explicit = TokenSource::from("my-token");
/// let from_env = TokenSource::Env("MY_APP_FOOTBALL_TOKEN".into());
/// # let _ = (explicit, from_env);
/// ```
#[derive(Clone, PartialEq, Eq)]
pub enum TokenSource {
    /// A token injected at construction time.
    Static(String),
    /// The name of an environment variable read on every request.
    Env(String),
}

impl TokenSource {
    /// Reads the token from `FOOTBALL_API_TOKEN` on every request.
    pub fn default_env() -> Self {
        TokenSource::Env(DEFAULT_TOKEN_ENV.to_string())
    }

    /// Resolves the current token as a header value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Configuration`] if the token is missing, empty, or
    /// contains characters that cannot be sent in a header.
    pub fn resolve(&self) -> Result<HeaderValue> {
        let token = match self {
            TokenSource::Static(token) => token.clone(),
            TokenSource::Env(var) => std::env::var(var).map_err(|e| {
                Error::Configuration(format!("API token not available from ${var}: {e}"))
            })?,
        };

        let token = token.trim();
        if token.is_empty() {
            return Err(Error::Configuration("API token is empty".to_string()));
        }

        let mut value = HeaderValue::from_str(token)
            .map_err(|e| Error::Configuration(format!("Invalid API token: {e}")))?;
        value.set_sensitive(true);
        Ok(value)
    }
}

impl Default for TokenSource {
    fn default() -> Self {
        Self::default_env()
    }
}

impl From<&str> for TokenSource {
    fn from(token: &str) -> Self {
        TokenSource::Static(token.to_string())
    }
}

impl From<String> for TokenSource {
    fn from(token: String) -> Self {
        TokenSource::Static(token)
    }
}

// Keep tokens out of debug output.
impl std::fmt::Debug for TokenSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenSource::Static(_) => f.write_str("Static(<redacted>)"),
            TokenSource::Env(var) => f.debug_tuple("Env").field(var).finish(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_token_resolves_sensitive_header() {
        let value = TokenSource::from("abc123").resolve().unwrap();
        assert_eq!(value, "abc123");
        assert!(value.is_sensitive());
    }

    #[test]
    fn test_empty_token_is_configuration_error() {
        let result = TokenSource::from("   ").resolve();
        assert!(matches!(result, Err(Error::Configuration(_))));
    }

    #[test]
    fn test_missing_env_var_is_configuration_error() {
        let source = TokenSource::Env("FOOTBALL_DATA_AUTH_TEST_NEVER_SET".into());
        match source.resolve() {
            Err(Error::Configuration(msg)) => {
                assert!(msg.contains("FOOTBALL_DATA_AUTH_TEST_NEVER_SET"))
            }
            other => panic!("Expected Configuration, got {:?}", other),
        }
    }

    #[test]
    fn test_default_env_reads_football_api_token() {
        let source = TokenSource::default_env();
        assert!(matches!(&source, TokenSource::Env(var) if var == "FOOTBALL_API_TOKEN"));

        std::env::set_var("FOOTBALL_API_TOKEN", "from-env");
        assert_eq!(source.resolve().unwrap(), "from-env");
        std::env::remove_var("FOOTBALL_API_TOKEN");
    }

    #[test]
    fn test_env_token_read_on_each_resolve() {
        let var = "FOOTBALL_DATA_AUTH_TEST_ROTATION";
        let source = TokenSource::Env(var.into());

        std::env::set_var(var, "first");
        assert_eq!(source.resolve().unwrap(), "first");

        std::env::set_var(var, "second");
        assert_eq!(source.resolve().unwrap(), "second");

        std::env::remove_var(var);
        assert!(source.resolve().is_err());
    }

    #[test]
    fn test_debug_redacts_static_token() {
        let debug = format!("{:?}", TokenSource::from("secret-token"));
        assert!(!debug.contains("secret-token"));
    }

    #[test]
    fn test_header_unsafe_token_rejected() {
        let result = TokenSource::from("bad\ntoken").resolve();
        assert!(matches!(result, Err(Error::Configuration(_))));
    }
}
