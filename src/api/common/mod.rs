//
//  shopsavvy
//  api/common/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Common API Types for the ShopSavvy Data API
//!
//! This module provides the types shared by every endpoint group: the error
//! type, the generic response envelope, and the usage metadata attached to
//! each response.
//!
//! # Overview
//!
//! - [`ApiError`] - Unified error type for all API operations
//! - [`ErrorKind`] - Field-less discriminant of [`ApiError`] for branching
//! - [`ApiResponse`] - Generic envelope wrapping every successful response
//! - [`ApiMeta`] - Credit usage and rate-limit metadata
//! - [`Identified`] - Items in batch responses that can be matched by identifier
//! - Pagination types (re-exported from [`pagination`] submodule)
//!
//! # Example
//!
//! ```rust
//! use shopsavvy::api::common::{ApiError, ErrorKind};
//!
//! let err = ApiError::from_response(429, r#"{"error":"too many requests"}"#);
//! assert_eq!(err.kind(), ErrorKind::RateLimit);
//! assert_eq!(err.message(), "too many requests");
//! ```
//!
//! # Notes
//!
//! - Status mapping is a pure function of the status code and body, so it can
//!   be tested without a live server
//! - The client never retries; callers decide what to do with a
//!   [`ApiError::RateLimit`] or [`ApiError::Timeout`]

use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

mod pagination;

pub use pagination::*;

/// Result alias used by every client method.
pub type Result<T> = std::result::Result<T, ApiError>;

/// Unified error type for all ShopSavvy API operations.
///
/// Exactly one variant is produced per failed call. HTTP variants are chosen by
/// status code; transport variants are chosen by the failure category reported
/// by `reqwest`. Configuration errors only come from client construction.
///
/// # Variants
///
/// | Variant | Cause | HTTP Status |
/// |---------|-------|-------------|
/// | `Configuration` | Malformed API key or base URL | N/A |
/// | `Authentication` | Missing, invalid or revoked key | 401 |
/// | `NotFound` | Unknown product or schedule | 404 |
/// | `Validation` | Rejected parameters | 422 |
/// | `RateLimit` | Too many requests | 429 |
/// | `Api` | Any other non-2xx, or an undecodable 2xx body | other |
/// | `Network` | No response received | N/A |
/// | `Timeout` | Configured deadline exceeded | N/A |
///
/// # Example
///
/// ```rust
/// use shopsavvy::api::common::ApiError;
///
/// fn describe(err: &ApiError) -> String {
///     match err {
///         ApiError::RateLimit { .. } => "slow down".to_string(),
///         ApiError::NotFound { message, .. } => format!("missing: {message}"),
///         other => other.to_string(),
///     }
/// }
///
/// let err = ApiError::from_response(404, "");
/// assert_eq!(describe(&err), "missing: HTTP 404: Not Found");
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The client could not be constructed from the supplied settings.
    ///
    /// Raised synchronously by the constructor; no request was sent.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The API rejected the credentials (HTTP 401).
    #[error("Authentication failed ({status}): {message}")]
    Authentication {
        /// HTTP status code returned by the API
        status: u16,
        /// Server-provided or fallback message
        message: String,
    },

    /// The requested product, offer or schedule does not exist (HTTP 404).
    #[error("Not found ({status}): {message}")]
    NotFound {
        /// HTTP status code returned by the API
        status: u16,
        /// Server-provided or fallback message
        message: String,
    },

    /// The API rejected the request parameters (HTTP 422).
    #[error("Validation failed ({status}): {message}")]
    Validation {
        /// HTTP status code returned by the API
        status: u16,
        /// Server-provided or fallback message
        message: String,
    },

    /// The account exceeded its request rate (HTTP 429).
    ///
    /// Callers that want to retry should back off before doing so.
    #[error("Rate limit exceeded ({status}): {message}")]
    RateLimit {
        /// HTTP status code returned by the API
        status: u16,
        /// Server-provided or fallback message
        message: String,
    },

    /// Any other API failure.
    ///
    /// Covers non-2xx statuses without a dedicated variant and successful
    /// responses whose body could not be decoded into the expected type.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code returned by the API
        status: u16,
        /// Server-provided or fallback message
        message: String,
    },

    /// The request never produced an HTTP response.
    ///
    /// Connection refused, DNS failure, TLS failure and similar.
    #[error("Network error: {0}")]
    Network(String),

    /// The request exceeded the configured timeout.
    #[error("Request timed out: {0}")]
    Timeout(String),
}

/// Field-less discriminant of [`ApiError`].
///
/// Useful when a caller only needs to branch on the category of failure,
/// for instance to pick an exit code or decide whether to retry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Configuration,
    Authentication,
    NotFound,
    Validation,
    RateLimit,
    Api,
    Network,
    Timeout,
}

impl ApiError {
    /// Maps a non-success HTTP response to the matching error variant.
    ///
    /// The message is the `error` field of a JSON body when present and
    /// non-empty; otherwise it falls back to `"HTTP <code>: <reason>"`.
    /// The function is deterministic: the same inputs always yield the same
    /// error value.
    ///
    /// # Parameters
    ///
    /// * `status` - The HTTP status code of the response
    /// * `body` - The raw response body (may be empty or non-JSON)
    ///
    /// # Example
    ///
    /// ```rust
    /// use shopsavvy::api::common::ApiError;
    ///
    /// let err = ApiError::from_response(500, "<html>oops</html>");
    /// assert_eq!(
    ///     err,
    ///     ApiError::Api { status: 500, message: "HTTP 500: Internal Server Error".to_string() }
    /// );
    /// ```
    pub fn from_response(status: u16, body: &str) -> Self {
        let message = error_message(status, body);

        match status {
            401 => Self::Authentication { status, message },
            404 => Self::NotFound { status, message },
            422 => Self::Validation { status, message },
            429 => Self::RateLimit { status, message },
            _ => Self::Api { status, message },
        }
    }

    /// Maps a transport failure (no HTTP response) to `Timeout` or `Network`.
    pub fn from_transport(err: &reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout(err.to_string())
        } else {
            Self::Network(err.to_string())
        }
    }

    /// Returns the category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Configuration(_) => ErrorKind::Configuration,
            Self::Authentication { .. } => ErrorKind::Authentication,
            Self::NotFound { .. } => ErrorKind::NotFound,
            Self::Validation { .. } => ErrorKind::Validation,
            Self::RateLimit { .. } => ErrorKind::RateLimit,
            Self::Api { .. } => ErrorKind::Api,
            Self::Network(_) => ErrorKind::Network,
            Self::Timeout(_) => ErrorKind::Timeout,
        }
    }

    /// Returns the HTTP status code, if the error came from an HTTP response.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Authentication { status, .. }
            | Self::NotFound { status, .. }
            | Self::Validation { status, .. }
            | Self::RateLimit { status, .. }
            | Self::Api { status, .. } => Some(*status),
            Self::Configuration(_) | Self::Network(_) | Self::Timeout(_) => None,
        }
    }

    /// Returns the human-readable message without the category prefix.
    pub fn message(&self) -> &str {
        match self {
            Self::Authentication { message, .. }
            | Self::NotFound { message, .. }
            | Self::Validation { message, .. }
            | Self::RateLimit { message, .. }
            | Self::Api { message, .. } => message,
            Self::Configuration(message) | Self::Network(message) | Self::Timeout(message) => {
                message
            }
        }
    }

    /// Whether repeating the same call later could plausibly succeed.
    ///
    /// True for rate limits, timeouts, network failures and 5xx responses.
    /// The client itself never retries.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::RateLimit { .. } | Self::Network(_) | Self::Timeout(_) => true,
            Self::Api { status, .. } => *status >= 500,
            _ => false,
        }
    }
}

/// Error body returned by the API on failure: `{"error": "..."}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}

fn error_message(status: u16, body: &str) -> String {
    serde_json::from_str::<ApiErrorBody>(body)
        .ok()
        .and_then(|parsed| parsed.error)
        .filter(|message| !message.is_empty())
        .unwrap_or_else(|| {
            let reason = StatusCode::from_u16(status)
                .ok()
                .and_then(|code| code.canonical_reason())
                .unwrap_or("Unknown Status");
            format!("HTTP {status}: {reason}")
        })
}

/// Credit usage metadata attached to API responses.
///
/// # Fields
///
/// | Field | Type | Description |
/// |-------|------|-------------|
/// | `credits_used` | `i64` | Credits consumed by this call |
/// | `credits_remaining` | `i64` | Credits left in the billing period |
/// | `rate_limit_remaining` | `Option<i64>` | Requests left in the current rate window |
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ApiMeta {
    #[serde(default)]
    pub credits_used: i64,

    #[serde(default)]
    pub credits_remaining: i64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rate_limit_remaining: Option<i64>,
}

/// Generic envelope wrapping every successful API response.
///
/// The payload type `T` depends on the endpoint: a single confirmation, a
/// list of products, a list of batch results, and so on.
///
/// # Type Parameters
///
/// - `T` - The type of the `data` payload
///
/// # Example
///
/// ```rust
/// use shopsavvy::api::common::ApiResponse;
/// use shopsavvy::api::products::ProductDetails;
///
/// let json = r#"{
///     "success": true,
///     "data": [{"title": "Widget", "shopsavvy": "ss-1"}],
///     "meta": {"credits_used": 1, "credits_remaining": 99}
/// }"#;
///
/// let response: ApiResponse<Vec<ProductDetails>> = serde_json::from_str(json).unwrap();
/// assert_eq!(response.data[0].title, "Widget");
/// assert_eq!(response.credits_remaining(), 99);
/// ```
///
/// # Notes
///
/// - `pagination` is only sent by the search endpoint
/// - Envelopes are transient values; nothing is cached by the client
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiResponse<T> {
    /// Whether the API reported the call as successful.
    #[serde(default)]
    pub success: bool,

    /// The endpoint-specific payload.
    pub data: T,

    /// Optional human-readable message from the API.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    /// Credit and rate-limit metadata.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<ApiMeta>,

    /// Pagination details for search results.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pagination: Option<PaginationInfo>,
}

impl<T> ApiResponse<T> {
    /// Credits consumed by this call, or 0 when the API sent no metadata.
    pub fn credits_used(&self) -> i64 {
        self.meta.as_ref().map_or(0, |meta| meta.credits_used)
    }

    /// Credits left in the billing period, or 0 when the API sent no metadata.
    pub fn credits_remaining(&self) -> i64 {
        self.meta.as_ref().map_or(0, |meta| meta.credits_remaining)
    }

    /// Requests left in the current rate-limit window, if reported.
    pub fn rate_limit_remaining(&self) -> Option<i64> {
        self.meta.as_ref().and_then(|meta| meta.rate_limit_remaining)
    }
}

/// Items in a batch response that echo back the identifier they belong to.
///
/// Batch endpoints return lists aligned with, but not guaranteed to match,
/// the order and length of the submitted identifiers. Match results through
/// [`ApiResponse::find`] instead of indexing.
pub trait Identified {
    /// The identifier this item was produced for.
    fn identifier(&self) -> &str;
}

impl<T: Identified> ApiResponse<Vec<T>> {
    /// Finds the item produced for `identifier`, regardless of its position.
    ///
    /// # Example
    ///
    /// ```rust
    /// use shopsavvy::api::common::ApiResponse;
    /// use shopsavvy::api::schedule::RemoveBatchResponse;
    ///
    /// let json = r#"{"success": true, "data": [
    ///     {"identifier": "B", "removed": false},
    ///     {"identifier": "A", "removed": true}
    /// ]}"#;
    /// let response: ApiResponse<Vec<RemoveBatchResponse>> = serde_json::from_str(json).unwrap();
    /// assert!(response.find("A").unwrap().removed);
    /// assert!(response.find("C").is_none());
    /// ```
    pub fn find(&self, identifier: &str) -> Option<&T> {
        self.data.iter().find(|item| item.identifier() == identifier)
    }
}
