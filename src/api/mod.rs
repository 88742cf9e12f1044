//
//  shopsavvy
//  api/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # API Client Layer
//!
//! This module maps the ShopSavvy Data API onto typed async method calls.
//!
//! ## Architecture
//!
//! - [`client`]: Core HTTP client with configuration, authentication and error mapping
//! - [`common`]: Shared types (response envelope, usage metadata, errors, pagination)
//! - [`products`]: Keyword search and product lookup
//! - [`offers`]: Current offers and price history
//! - [`schedule`]: Product monitoring schedules
//! - [`usage`]: Account credit usage
//!
//! ## Endpoints
//!
//! | Method | Path | Client methods |
//! |--------|------|----------------|
//! | GET | `/products/search` | `search_products` |
//! | GET | `/products` | `get_product_details`, `get_product_details_batch` |
//! | GET | `/products/offers` | `get_current_offers`, `get_current_offers_batch` |
//! | GET | `/products/offers/history` | `get_price_history`, `get_price_history_batch` |
//! | POST | `/products/schedule` | `schedule_product_monitoring`, `schedule_product_monitoring_batch` |
//! | GET | `/products/scheduled` | `get_scheduled_products` |
//! | DELETE | `/products/schedule` | `remove_product_from_schedule`, `remove_products_from_schedule` |
//! | GET | `/usage` | `get_usage` |
//!
//! ## Error Handling
//!
//! Every method returns [`ApiError`] on failure, chosen by HTTP status:
//!
//! - `Authentication`: 401 Unauthorized
//! - `NotFound`: 404 Not Found
//! - `Validation`: 422 Unprocessable Entity
//! - `RateLimit`: 429 Too Many Requests
//! - `Api`: any other non-2xx
//!
//! or by transport failure (`Network`, `Timeout`).

/// Core HTTP client for the ShopSavvy Data API.
pub mod client;

/// Common types shared by every endpoint.
pub mod common;

/// Product search and lookup.
pub mod products;

/// Current offers and price history.
pub mod offers;

/// Monitoring schedules.
pub mod schedule;

/// Account usage.
pub mod usage;

pub use client::{ClientConfig, ClientOptions, ShopSavvyClient};
pub use common::{ApiError, ApiMeta, ApiResponse, ErrorKind, PaginationInfo};
