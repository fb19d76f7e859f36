//! Configuration for the arXiv search MCP server.

use std::time::Duration;

/// API configuration constants.
pub mod api {
    use std::time::Duration;

    /// arXiv search endpoint on RapidAPI.
    pub const SEARCH_URL: &str = "https://arxiv-research-paper-search.p.rapidapi.com/arxiv_search";

    /// Value of the `x-rapidapi-host` header.
    pub const API_HOST: &str = "arxiv-research-paper-search.p.rapidapi.com";

    /// Environment variable holding the RapidAPI key.
    pub const API_KEY_ENV: &str = "RAPID_API_KEY";

    /// Environment variable overriding the search endpoint.
    pub const SEARCH_URL_ENV: &str = "ARXIV_SEARCH_API_URL";

    /// Total timeout for a single search call, connect included.
    pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
}

/// Search request defaults.
pub mod defaults {
    /// Default maximum number of results.
    pub const NUM_RESULTS: i32 = 50;

    /// Default pagination offset.
    pub const START: i32 = 0;
}

/// Server configuration.
#[derive(Clone)]
pub struct Config {
    /// RapidAPI key. Sent as `x-rapidapi-key` when present.
    pub api_key: Option<String>,

    /// Full URL of the search endpoint (overridable for mock servers).
    pub search_url: String,

    /// Value sent in the `x-rapidapi-host` header.
    pub api_host: String,

    /// Total request timeout, connect included.
    pub request_timeout: Duration,
}

impl Config {
    /// Create a new configuration with an optional API key.
    ///
    /// A missing key is not rejected here; the upstream answers with an
    /// authentication failure instead.
    #[must_use]
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            api_key,
            search_url: api::SEARCH_URL.to_string(),
            api_host: api::API_HOST.to_string(),
            request_timeout: api::REQUEST_TIMEOUT,
        }
    }

    /// Create a test configuration pointing at a mock server.
    #[must_use]
    pub fn for_testing(base_url: &str) -> Self {
        Self {
            api_key: Some("test-key".to_string()),
            search_url: format!("{}/arxiv_search", base_url.trim_end_matches('/')),
            api_host: api::API_HOST.to_string(),
            request_timeout: Duration::from_secs(5),
        }
    }

    /// Create configuration from environment variables.
    ///
    /// Reads `RAPID_API_KEY` and, if set, `ARXIV_SEARCH_API_URL`.
    pub fn from_env() -> anyhow::Result<Self> {
        let api_key = std::env::var(api::API_KEY_ENV).ok();
        let mut config = Self::new(api_key);

        if let Ok(url) = std::env::var(api::SEARCH_URL_ENV) {
            config = config.try_with_search_url(url)?;
        }

        Ok(config)
    }

    /// Override the search endpoint URL, rejecting anything that does not parse.
    ///
    /// # Errors
    ///
    /// Returns error if `url` is not an absolute URL.
    pub fn try_with_search_url(self, url: impl Into<String>) -> anyhow::Result<Self> {
        let url = url.into();
        url::Url::parse(&url).map_err(|e| anyhow::anyhow!("invalid search URL {url:?}: {e}"))?;
        Ok(self.with_search_url(url))
    }

    /// Replace the API key.
    #[must_use]
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Override the search endpoint URL.
    #[must_use]
    pub fn with_search_url(mut self, url: impl Into<String>) -> Self {
        self.search_url = url.into();
        self
    }

    /// Override the request timeout.
    #[must_use]
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Check if an API key is configured.
    #[must_use]
    pub const fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(None)
    }
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("has_api_key", &self.has_api_key())
            .field("search_url", &self.search_url)
            .field("api_host", &self.api_host)
            .field("request_timeout", &self.request_timeout)
            .finish()
    }
}
