//
//  shopsavvy
//  api/products.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Product search and lookup.
//!
//! Products are resolved server-side from any identifier the API understands:
//! a barcode (UPC/EAN), a marketplace ID such as an Amazon ASIN, a product
//! URL, or a ShopSavvy internal ID.
//!
//! # Example
//!
//! ```rust,no_run
//! use shopsavvy::ShopSavvyClient;
//!
//! # async fn example() -> Result<(), shopsavvy::ApiError> {
//! let client = ShopSavvyClient::new("ss_live_abc123")?;
//!
//! let results = client.search_products("wireless earbuds", Some(10), None).await?;
//! for product in &results.data {
//!     println!("{} ({})", product.title, product.shopsavvy);
//! }
//!
//! let batch = client
//!     .get_product_details_batch(&["012345678901", "B08N5WRWNW"], None)
//!     .await?;
//! println!("{} products, {} credits left", batch.data.len(), batch.credits_remaining());
//! # Ok(())
//! # }
//! ```

use serde::{Deserialize, Serialize};

use super::client::{join_identifiers, push_optional, QueryParams, ShopSavvyClient};
use super::common::{ApiResponse, Result};

/// Output format hint passed through to the API as `format=`.
///
/// The client always decodes the body as JSON. Asking for CSV is only useful
/// to callers that handle the raw response themselves; through this client a
/// CSV body surfaces as an [`ApiError::Api`](super::common::ApiError::Api)
/// decode failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseFormat {
    Json,
    Csv,
}

impl ResponseFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Csv => "csv",
        }
    }
}

/// Detailed product information.
///
/// # Fields
///
/// * `title` - Product name
/// * `shopsavvy` - ShopSavvy internal product ID
/// * `brand`, `category`, `model`, `mpn`, `color` - Optional catalogue attributes
/// * `barcode` - UPC/EAN, when known
/// * `amazon` - Amazon ASIN, when known
/// * `images` - Image URLs, possibly empty
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ProductDetails {
    pub title: String,

    pub shopsavvy: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub images: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub barcode: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amazon: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mpn: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

fn lookup_params(ids: String, format: Option<ResponseFormat>) -> QueryParams {
    let mut params = vec![("ids", ids)];
    push_optional(&mut params, "format", format.map(|f| f.as_str()));
    params
}

impl ShopSavvyClient {
    /// Searches products by keyword.
    ///
    /// `limit` and `offset` are only sent when given. The response carries
    /// [`PaginationInfo`](super::common::PaginationInfo) in its `pagination`
    /// field.
    pub async fn search_products(
        &self,
        query: &str,
        limit: Option<u32>,
        offset: Option<u32>,
    ) -> Result<ApiResponse<Vec<ProductDetails>>> {
        let mut params = vec![("q", query.to_string())];
        if let Some(limit) = limit {
            params.push(("limit", limit.to_string()));
        }
        if let Some(offset) = offset {
            params.push(("offset", offset.to_string()));
        }

        self.get("/products/search", &params).await
    }

    /// Looks up a single product by identifier.
    pub async fn get_product_details(
        &self,
        identifier: &str,
        format: Option<ResponseFormat>,
    ) -> Result<ApiResponse<Vec<ProductDetails>>> {
        self.get("/products", &lookup_params(identifier.to_string(), format))
            .await
    }

    /// Looks up several products in one request.
    ///
    /// The returned list is not guaranteed to follow the order or length of
    /// `identifiers`.
    pub async fn get_product_details_batch<S: AsRef<str>>(
        &self,
        identifiers: &[S],
        format: Option<ResponseFormat>,
    ) -> Result<ApiResponse<Vec<ProductDetails>>> {
        self.get("/products", &lookup_params(join_identifiers(identifiers), format))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_roundtrip() {
        let product = ProductDetails {
            title: "Apple AirPods Pro".to_string(),
            shopsavvy: "ss-123".to_string(),
            brand: Some("Apple".to_string()),
            category: Some("Electronics".to_string()),
            images: vec!["https://img.example/1.jpg".to_string()],
            barcode: Some("190199246850".to_string()),
            amazon: Some("B07ZPC9QD4".to_string()),
            model: Some("MWP22AM/A".to_string()),
            mpn: None,
            color: Some("White".to_string()),
        };

        let json = serde_json::to_string(&product).unwrap();
        let back: ProductDetails = serde_json::from_str(&json).unwrap();
        assert_eq!(back, product);
    }

    #[test]
    fn test_product_minimal_shape() {
        let product: ProductDetails =
            serde_json::from_str(r#"{"title": "Widget", "shopsavvy": "ss-1"}"#).unwrap();
        assert_eq!(product.title, "Widget");
        assert!(product.images.is_empty());
        assert!(product.brand.is_none());

        let value = serde_json::to_value(&product).unwrap();
        assert_eq!(value, serde_json::json!({"title": "Widget", "shopsavvy": "ss-1"}));
    }

    #[test]
    fn test_lookup_params() {
        let params = lookup_params("a,b".to_string(), Some(ResponseFormat::Csv));
        assert_eq!(
            params,
            vec![("ids", "a,b".to_string()), ("format", "csv".to_string())]
        );

        let params = lookup_params("a".to_string(), None);
        assert_eq!(params, vec![("ids", "a".to_string())]);
    }
}
