//
//  shopsavvy
//  api/client.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # HTTP Client Wrapper for the ShopSavvy Data API
//!
//! This module provides the core HTTP client for interacting with the
//! ShopSavvy Data API. It validates configuration up front, injects the
//! authentication headers, and turns every response into either a typed
//! envelope or a typed [`ApiError`].
//!
//! ## Features
//!
//! - API key format validation at construction (no network I/O)
//! - Bearer authentication, JSON content type and SDK User-Agent on every request
//! - Per-request timeout from the client configuration
//! - Status code to error-kind mapping via [`ApiError::from_response`]
//!
//! Endpoint methods live next to their payload types in
//! [`products`](super::products), [`offers`](super::offers),
//! [`schedule`](super::schedule) and [`usage`](super::usage).

use std::fmt;
use std::time::Duration;

use once_cell::sync::Lazy;
use regex::Regex;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;
use url::Url;

use super::common::{ApiError, Result};

/// Production endpoint used when no base URL override is given.
pub const DEFAULT_BASE_URL: &str = "https://api.shopsavvy.com/v1";

/// Request timeout used when no override is given.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Valid keys look like `ss_live_abc123` or `ss_test_abc123`.
static API_KEY_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^ss_(live|test)_[a-zA-Z0-9]+$").unwrap());

/// Query string parameters in the order they are sent.
pub(crate) type QueryParams = Vec<(&'static str, String)>;

/// Returns the User-Agent sent with every request.
///
/// # Example
///
/// ```rust
/// let agent = shopsavvy::api::client::user_agent();
/// assert!(agent.starts_with("ShopSavvy-Rust-SDK/"));
/// ```
pub fn user_agent() -> String {
    format!("ShopSavvy-Rust-SDK/{}", crate::VERSION)
}

/// Checks that an API key is present and has the `ss_(live|test)_<alphanumeric>` shape.
///
/// # Errors
///
/// Returns [`ApiError::Configuration`] for an empty or malformed key.
///
/// # Example
///
/// ```rust
/// use shopsavvy::api::client::validate_api_key;
///
/// assert!(validate_api_key("ss_live_abc123").is_ok());
/// assert!(validate_api_key("ss_prod_abc123").is_err());
/// ```
pub fn validate_api_key(api_key: &str) -> Result<()> {
    if api_key.is_empty() {
        return Err(ApiError::Configuration(
            "API key is required. Get one at https://shopsavvy.com/data".to_string(),
        ));
    }

    if !API_KEY_PATTERN.is_match(api_key) {
        return Err(ApiError::Configuration(
            "invalid API key format. API keys should start with ss_live_ or ss_test_".to_string(),
        ));
    }

    Ok(())
}

/// Joins identifiers into the single comma-separated value batch endpoints expect.
///
/// Order is preserved exactly as given.
///
/// # Example
///
/// ```rust
/// use shopsavvy::api::client::join_identifiers;
///
/// assert_eq!(join_identifiers(&["012345678901", "B08N5WRWNW"]), "012345678901,B08N5WRWNW");
/// ```
pub fn join_identifiers<S: AsRef<str>>(identifiers: &[S]) -> String {
    identifiers
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(",")
}

/// Appends `name=value` when `value` is present and non-empty.
pub(crate) fn push_optional(params: &mut QueryParams, name: &'static str, value: Option<&str>) {
    if let Some(value) = value.filter(|value| !value.is_empty()) {
        params.push((name, value.to_string()));
    }
}

/// Optional overrides applied on top of the default configuration.
///
/// # Example
///
/// ```rust
/// use std::time::Duration;
/// use shopsavvy::api::client::ClientOptions;
///
/// let options = ClientOptions::new()
///     .base_url("https://staging.shopsavvy.example/v1")
///     .timeout(Duration::from_secs(10));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ClientOptions {
    /// Base URL override; defaults to [`DEFAULT_BASE_URL`].
    pub base_url: Option<String>,
    /// Timeout override; defaults to [`DEFAULT_TIMEOUT`].
    pub timeout: Option<Duration>,
}

impl ClientOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

/// Effective, validated configuration of a [`ShopSavvyClient`].
///
/// Immutable once the client is built. The `Debug` output never contains
/// the full API key.
#[derive(Clone)]
pub struct ClientConfig {
    api_key: String,
    base_url: String,
    timeout: Duration,
}

impl ClientConfig {
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Base URL without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_key", &redact(&self.api_key))
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// Keeps the `ss_live_` / `ss_test_` prefix and hides the secret part.
pub fn redact(api_key: &str) -> String {
    match api_key.match_indices('_').nth(1) {
        Some((index, _)) => format!("{}****", &api_key[..=index]),
        None => "****".to_string(),
    }
}

fn normalize_base_url(base_url: &str) -> Result<String> {
    let trimmed = base_url.trim().trim_end_matches('/');
    let parsed = Url::parse(trimmed)
        .map_err(|e| ApiError::Configuration(format!("invalid base URL '{base_url}': {e}")))?;

    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(ApiError::Configuration(format!(
            "invalid base URL '{base_url}': scheme must be http or https"
        )));
    }

    // Endpoint paths are appended to the base, so it must end at the path.
    if parsed.query().is_some() || parsed.fragment().is_some() {
        return Err(ApiError::Configuration(format!(
            "invalid base URL '{base_url}': query strings and fragments are not allowed"
        )));
    }

    Ok(trimmed.to_string())
}

/// The main HTTP client for the ShopSavvy Data API.
///
/// The client holds only immutable configuration and a `reqwest` connection
/// pool, so a single instance can be shared across tasks. Cloning is cheap and
/// shares the pool. Dropping the last clone releases the pool.
///
/// # Creating a Client
///
/// ```rust,no_run
/// use std::time::Duration;
/// use shopsavvy::{ClientOptions, ShopSavvyClient};
///
/// let client = ShopSavvyClient::new("ss_live_abc123")?;
///
/// let staging = ShopSavvyClient::with_options(
///     "ss_test_abc123",
///     ClientOptions::new().timeout(Duration::from_secs(5)),
/// )?;
/// # Ok::<(), shopsavvy::ApiError>(())
/// ```
///
/// # Making Calls
///
/// ```rust,no_run
/// use shopsavvy::ShopSavvyClient;
///
/// # async fn example() -> Result<(), shopsavvy::ApiError> {
/// let client = ShopSavvyClient::new("ss_live_abc123")?;
/// let response = client.get_product_details("012345678901", None).await?;
/// for product in &response.data {
///     println!("{}", product.title);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ShopSavvyClient {
    /// The underlying HTTP client
    http: Client,
    /// Validated configuration
    config: ClientConfig,
}

impl ShopSavvyClient {
    /// Creates a client with the default base URL and a 30 second timeout.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Configuration`] if the key is empty or malformed.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::with_options(api_key, ClientOptions::default())
    }

    /// Creates a client with explicit overrides.
    ///
    /// Validation happens entirely in-process; nothing is sent over the
    /// network until the first endpoint call.
    ///
    /// # Parameters
    ///
    /// * `api_key` - Key of the form `ss_live_...` or `ss_test_...`
    /// * `options` - Base URL and timeout overrides
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Configuration`] if:
    /// - The API key is empty or does not match the expected format
    /// - The base URL is not an absolute http(s) URL
    /// - The timeout is zero
    /// - The underlying HTTP client cannot be initialised
    pub fn with_options(api_key: impl Into<String>, options: ClientOptions) -> Result<Self> {
        let api_key = api_key.into();
        validate_api_key(&api_key)?;

        let base_url =
            normalize_base_url(options.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL))?;

        let timeout = options.timeout.unwrap_or(DEFAULT_TIMEOUT);
        if timeout.is_zero() {
            return Err(ApiError::Configuration(
                "timeout must be greater than zero".to_string(),
            ));
        }

        let mut authorization = HeaderValue::from_str(&format!("Bearer {api_key}"))
            .map_err(|e| ApiError::Configuration(format!("invalid API key header: {e}")))?;
        authorization.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, authorization);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let http = Client::builder()
            .user_agent(user_agent())
            .default_headers(headers)
            .timeout(timeout)
            .build()
            .map_err(|e| ApiError::Configuration(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            http,
            config: ClientConfig {
                api_key,
                base_url,
                timeout,
            },
        })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn base_url(&self) -> &str {
        self.config.base_url()
    }

    pub fn timeout(&self) -> Duration {
        self.config.timeout()
    }

    /// Whether the client uses a sandbox (`ss_test_`) key.
    pub fn is_test_key(&self) -> bool {
        self.config.api_key.starts_with("ss_test_")
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url, path)
    }

    /// Makes an HTTP GET request with the given query parameters.
    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str, query: &QueryParams) -> Result<T> {
        tracing::debug!("GET {} ({} params)", path, query.len());
        let request = self.http.get(self.url(path)).query(query);
        self.execute(request).await
    }

    /// Makes an HTTP POST request with a JSON body.
    pub(crate) async fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        tracing::debug!("POST {}", path);
        let request = self.http.post(self.url(path)).json(body);
        self.execute(request).await
    }

    /// Makes an HTTP DELETE request with a JSON body.
    pub(crate) async fn delete<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        tracing::debug!("DELETE {}", path);
        let request = self.http.delete(self.url(path)).json(body);
        self.execute(request).await
    }

    /// Sends the request and converts the outcome into a typed result.
    ///
    /// Transport failures map through [`ApiError::from_transport`], non-2xx
    /// statuses through [`ApiError::from_response`] even when their body cannot
    /// be read. A 2xx body that does not
    /// decode into `T` becomes [`ApiError::Api`] carrying the status.
    async fn execute<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T> {
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::from_transport(&e))?;
        let status = response.status();
        tracing::debug!("Response status {}", status);

        if !status.is_success() {
            // The status decides the error kind; an unreadable body only
            // loses the server message.
            let text = response.text().await.unwrap_or_default();
            return Err(ApiError::from_response(status.as_u16(), &text));
        }

        let text = response
            .text()
            .await
            .map_err(|e| ApiError::from_transport(&e))?;

        serde_json::from_str(&text).map_err(|e| ApiError::Api {
            status: status.as_u16(),
            message: format!("failed to decode response: {e}"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::common::ErrorKind;

    #[test]
    fn test_malformed_keys_are_configuration_errors() {
        let keys = [
            "",
            "abc123",
            "ss_abc123",
            "ss_prod_abc123",
            "sk_live_abc123",
            "ss-live-abc123",
            "ss_live-abc123",
            "ss_live_",
            "ss_live_abc-123",
            "ss_live_abc 123",
            " ss_live_abc123",
            "SS_LIVE_abc123",
        ];

        for key in keys {
            let err = ShopSavvyClient::new(key).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::Configuration, "key {key:?}");
        }
    }

    #[test]
    fn test_empty_key_message_mentions_requirement() {
        let err = ShopSavvyClient::new("").unwrap_err();
        assert!(err.message().contains("API key is required"));
    }

    #[test]
    fn test_valid_keys_are_accepted() {
        for key in ["ss_live_abc123", "ss_test_ABC", "ss_live_0", "ss_test_a1B2c3D4"] {
            assert!(ShopSavvyClient::new(key).is_ok(), "key {key:?}");
        }
    }

    #[test]
    fn test_defaults() {
        let client = ShopSavvyClient::new("ss_live_abc123").unwrap();
        assert_eq!(client.base_url(), "https://api.shopsavvy.com/v1");
        assert_eq!(client.timeout(), Duration::from_secs(30));
        assert_eq!(client.config().api_key(), "ss_live_abc123");
        assert!(!client.is_test_key());
    }

    #[test]
    fn test_overrides() {
        let options = ClientOptions::new()
            .base_url("http://localhost:8080/v1/")
            .timeout(Duration::from_secs(5));
        let client = ShopSavvyClient::with_options("ss_test_abc123", options).unwrap();
        assert_eq!(client.base_url(), "http://localhost:8080/v1");
        assert_eq!(client.timeout(), Duration::from_secs(5));
        assert!(client.is_test_key());
    }

    #[test]
    fn test_invalid_base_url_rejected() {
        for base_url in ["not a url", "ftp://api.shopsavvy.com/v1", "/v1"] {
            let options = ClientOptions::new().base_url(base_url);
            let err = ShopSavvyClient::with_options("ss_live_abc123", options).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::Configuration, "base url {base_url:?}");
        }
    }

    #[test]
    fn test_base_url_with_query_or_fragment_rejected() {
        for base_url in [
            "https://api.shopsavvy.com/v1?region=us",
            "https://api.shopsavvy.com/v1#docs",
            "https://api.shopsavvy.com/v1?",
        ] {
            let options = ClientOptions::new().base_url(base_url);
            let err = ShopSavvyClient::with_options("ss_live_abc123", options).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::Configuration, "base url {base_url:?}");
            assert!(err.message().contains("query strings and fragments"));
        }
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let options = ClientOptions::new().timeout(Duration::ZERO);
        let err = ShopSavvyClient::with_options("ss_live_abc123", options).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Configuration);
    }

    #[test]
    fn test_debug_redacts_key() {
        let client = ShopSavvyClient::new("ss_live_supersecret42").unwrap();
        let debug = format!("{:?}", client.config());
        assert!(debug.contains("ss_live_****"));
        assert!(!debug.contains("supersecret42"));
    }

    #[test]
    fn test_join_identifiers_preserves_order() {
        assert_eq!(join_identifiers(&["c", "a", "b"]), "c,a,b");
        assert_eq!(join_identifiers(&["only"]), "only");
        assert_eq!(join_identifiers::<&str>(&[]), "");

        let owned = vec!["012345678901".to_string(), "B08N5WRWNW".to_string()];
        assert_eq!(join_identifiers(&owned), "012345678901,B08N5WRWNW");
    }

    #[test]
    fn test_push_optional_skips_empty() {
        let mut params = QueryParams::new();
        push_optional(&mut params, "retailer", None);
        push_optional(&mut params, "retailer", Some(""));
        assert!(params.is_empty());

        push_optional(&mut params, "retailer", Some("amazon"));
        assert_eq!(params, vec![("retailer", "amazon".to_string())]);
    }

    #[test]
    fn test_user_agent_carries_version() {
        assert_eq!(user_agent(), format!("ShopSavvy-Rust-SDK/{}", crate::VERSION));
    }
}
