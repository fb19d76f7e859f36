//! arXiv search API client.
//!
//! One GET per call, bounded by the configured timeout, with no retry and
//! no caching. [`ArxivSearchClient::search`] never fails: every error is
//! logged and folded into a [`FailureResult`](crate::models::FailureResult).

use std::time::Duration;

use reqwest::Client;
use reqwest::header::{HeaderMap, HeaderValue};
use url::Url;

use crate::config::Config;
use crate::error::{ClientError, ClientResult};
use crate::models::{SearchOutcome, SearchRequest};

/// Header naming the RapidAPI host.
const HOST_HEADER: &str = "x-rapidapi-host";

/// Header carrying the RapidAPI key.
const KEY_HEADER: &str = "x-rapidapi-key";

/// arXiv search API client.
#[derive(Clone)]
pub struct ArxivSearchClient {
    /// HTTP client with the RapidAPI headers installed.
    client: Client,

    /// Search endpoint.
    search_url: Url,

    /// Whether `x-rapidapi-key` is sent.
    has_api_key: bool,

    /// Total request timeout, reported in timeout errors.
    request_timeout: Duration,
}

impl ArxivSearchClient {
    /// Create a new client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the endpoint URL or a header value is invalid, or if
    /// HTTP client initialization fails.
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let search_url = Url::parse(&config.search_url)?;

        let mut headers = HeaderMap::new();
        headers.insert(HOST_HEADER, HeaderValue::from_str(&config.api_host)?);

        if let Some(ref key) = config.api_key {
            let mut value = HeaderValue::from_str(key)?;
            value.set_sensitive(true);
            headers.insert(KEY_HEADER, value);
        }

        let client = Client::builder()
            .default_headers(headers)
            .timeout(config.request_timeout)
            .gzip(true)
            .build()?;

        Ok(Self {
            client,
            search_url,
            has_api_key: config.api_key.is_some(),
            request_timeout: config.request_timeout,
        })
    }

    /// Check if an API key is configured.
    #[must_use]
    pub const fn has_api_key(&self) -> bool {
        self.has_api_key
    }

    /// Search endpoint this client queries.
    #[must_use]
    pub const fn search_url(&self) -> &Url {
        &self.search_url
    }

    /// Search for papers.
    ///
    /// Returns the upstream JSON unchanged on success. Transport errors,
    /// timeouts, non-success statuses and undecodable bodies are logged at
    /// `warn` and returned as a failure record.
    pub async fn search(&self, request: &SearchRequest) -> SearchOutcome {
        match self.fetch(request).await {
            Ok(value) => SearchOutcome::Found(value),
            Err(err) => {
                tracing::warn!(
                    search_term = %request.search_term,
                    error = %err,
                    detail = ?err,
                    "arXiv search failed"
                );
                SearchOutcome::failed(err.to_string())
            }
        }
    }

    /// Search for papers, keeping the typed error.
    ///
    /// # Errors
    ///
    /// Returns error on transport failure, timeout, non-success status or
    /// invalid JSON.
    pub async fn fetch(&self, request: &SearchRequest) -> ClientResult<serde_json::Value> {
        let params = request.query_params();
        tracing::debug!(url = %self.search_url, ?params, "Querying arXiv search API");

        let response = self
            .client
            .get(self.search_url.clone())
            .query(&params)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let response = Self::handle_response(response).await?;
        let body = response.text().await.map_err(|e| self.transport_error(e))?;

        Ok(serde_json::from_str(&body)?)
    }

    /// Reject non-success statuses before the body is decoded.
    async fn handle_response(response: reqwest::Response) -> ClientResult<reqwest::Response> {
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        let text = response.text().await.unwrap_or_default();
        let message = if text.trim().is_empty() {
            status.canonical_reason().unwrap_or("Unknown status").to_string()
        } else {
            text
        };

        Err(ClientError::status(status.as_u16(), message))
    }

    fn transport_error(&self, err: reqwest::Error) -> ClientError {
        if err.is_timeout() {
            ClientError::Timeout(self.request_timeout)
        } else {
            ClientError::Http(err)
        }
    }
}

impl std::fmt::Debug for ArxivSearchClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ArxivSearchClient")
            .field("search_url", &self.search_url.as_str())
            .field("has_api_key", &self.has_api_key())
            .finish()
    }
}
