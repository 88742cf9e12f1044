//
//  shopsavvy
//  lib.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # ShopSavvy Data API Client
//!
//! A typed, async client for the ShopSavvy Data API, plus the `shopsavvy`
//! command-line tool built on top of it.
//!
//! ## Overview
//!
//! The API answers questions about retail products: what a barcode, ASIN,
//! URL or model number refers to, which retailers currently sell it and at
//! what price, and how that price has moved over time. Accounts can also
//! schedule products for periodic price refreshes and check their credit usage.
//!
//! ## Module Structure
//!
//! - [`api`]: HTTP client, wire types and error mapping
//! - [`config`]: Configuration file used by the CLI
//! - [`output`]: Output formatting (Table, JSON)
//! - [`cli`]: Command-line interface definitions using clap
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use shopsavvy::ShopSavvyClient;
//!
//! # async fn example() -> Result<(), shopsavvy::ApiError> {
//! let client = ShopSavvyClient::new("ss_live_abc123")?;
//!
//! let offers = client.get_current_offers("012345678901", None, None).await?;
//! for product in &offers.data {
//!     if let Some(best) = product.best_offer() {
//!         println!("{}: {:?} at {:?}", product.product.title, best.price, best.retailer);
//!     }
//! }
//! println!("{} credits left", offers.credits_remaining());
//! # Ok(())
//! # }
//! ```
//!
//! ## Errors
//!
//! Every call returns [`ApiError`]. HTTP failures are classified by status
//! code, transport failures as `Network` or `Timeout`. Nothing is retried.

/// API client for the ShopSavvy Data API.
pub mod api;

/// Command-line interface definitions.
pub mod cli;

/// Configuration file management for the CLI.
///
/// Settings live in the platform config directory:
/// - Linux: `~/.config/shopsavvy/config.toml`
/// - macOS: `~/Library/Application Support/com.shopsavvy.shopsavvy/config.toml`
/// - Windows: `%APPDATA%\shopsavvy\shopsavvy\config\config.toml`
pub mod config;

/// Output formatting for table and JSON modes.
pub mod output;

pub use api::offers::{Offer, OfferWithHistory, PriceHistoryEntry, ProductWithOffers};
pub use api::products::{ProductDetails, ResponseFormat};
pub use api::schedule::{Frequency, ScheduledProduct};
pub use api::usage::UsageInfo;
pub use api::{ApiError, ApiMeta, ApiResponse, ClientOptions, ErrorKind, ShopSavvyClient};

/// Re-export of the main CLI struct.
pub use cli::Cli;

/// Application version, taken from Cargo.toml at compile time.
///
/// Also sent in the `User-Agent` header as `ShopSavvy-Rust-SDK/<VERSION>`.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Exit codes for the CLI.
///
/// Scripts can branch on these to tell apart the ways a call can fail.
///
/// # Example
///
/// ```rust,no_run
/// use shopsavvy::exit_codes;
/// use std::process;
///
/// process::exit(exit_codes::AUTH_ERROR);
/// ```
pub mod exit_codes {
    use crate::api::{ApiError, ErrorKind};

    /// Successful execution.
    pub const SUCCESS: i32 = 0;

    /// Any error not covered below.
    pub const ERROR: i32 = 1;

    /// Invalid arguments or configuration, including a malformed API key.
    pub const USAGE: i32 = 2;

    /// The API rejected the key (HTTP 401).
    pub const AUTH_ERROR: i32 = 4;

    /// No product matched the identifier (HTTP 404).
    pub const NOT_FOUND: i32 = 8;

    /// The API rejected the request parameters (HTTP 422).
    pub const VALIDATION: i32 = 16;

    /// Rate limit exceeded (HTTP 429).
    pub const RATE_LIMIT: i32 = 32;

    /// The request never completed: connection failure or timeout.
    pub const NETWORK: i32 = 64;

    /// Picks the exit code for an API error.
    pub fn for_api_error(err: &ApiError) -> i32 {
        match err.kind() {
            ErrorKind::Configuration => USAGE,
            ErrorKind::Authentication => AUTH_ERROR,
            ErrorKind::NotFound => NOT_FOUND,
            ErrorKind::Validation => VALIDATION,
            ErrorKind::RateLimit => RATE_LIMIT,
            ErrorKind::Network | ErrorKind::Timeout => NETWORK,
            ErrorKind::Api => ERROR,
        }
    }

    /// Picks the exit code for any command error.
    ///
    /// API errors map through [`for_api_error`]; clap validation errors raised
    /// after parsing are usage errors; everything else is [`ERROR`].
    pub fn for_error(err: &anyhow::Error) -> i32 {
        if let Some(api_err) = err.downcast_ref::<ApiError>() {
            for_api_error(api_err)
        } else if err.downcast_ref::<clap::Error>().is_some() {
            USAGE
        } else {
            ERROR
        }
    }

}
