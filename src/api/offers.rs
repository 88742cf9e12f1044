//
//  shopsavvy
//  api/offers.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Current offers and price history.
//!
//! An offer is one retailer's listing for a product: price, condition,
//! availability and a link. Current offers come back grouped by product;
//! historical offers come back as offers carrying their price history.
//!
//! # Notes
//!
//! - The offer link is sent by the API as `URL`; `url` is also accepted, but
//!   an offer carrying both keys fails to decode as a duplicate field
//! - Dates are `YYYY-MM-DD` strings and are passed through unchanged
//! - An empty retailer filter is treated as no filter

use serde::{Deserialize, Serialize};

use super::client::{join_identifiers, push_optional, QueryParams, ShopSavvyClient};
use super::common::{ApiResponse, Result};
use super::products::{ProductDetails, ResponseFormat};

/// A single price point.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PriceHistoryEntry {
    /// Date of the observation (`YYYY-MM-DD`).
    pub date: String,

    pub price: f64,

    pub availability: String,
}

/// A product offer from a retailer.
///
/// # Fields
///
/// * `id` - Offer identifier
/// * `retailer` - Retailer name (e.g., `amazon`, `walmart`)
/// * `price` / `currency` - Current price, when the retailer exposes it
/// * `availability` - e.g., `in_stock`, `out_of_stock`
/// * `condition` - e.g., `new`, `used`, `refurbished`
/// * `url` - Link to the listing
/// * `seller` - Marketplace seller, when different from the retailer
/// * `timestamp` - When the offer was last observed
/// * `history` - Inline price history, when the API includes it
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Offer {
    pub id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub retailer: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub availability: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condition: Option<String>,

    /// Decoded from `URL` or `url`. Both keys in one object is a
    /// duplicate-field error rather than a silent pick.
    #[serde(
        default,
        rename = "URL",
        alias = "url",
        skip_serializing_if = "Option::is_none"
    )]
    pub url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seller: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub history: Vec<PriceHistoryEntry>,
}

/// A product together with its current offers.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ProductWithOffers {
    #[serde(flatten)]
    pub product: ProductDetails,

    #[serde(default)]
    pub offers: Vec<Offer>,
}

impl ProductWithOffers {
    /// The cheapest offer that has a price.
    pub fn best_offer(&self) -> Option<&Offer> {
        self.offers
            .iter()
            .filter(|offer| offer.price.is_some())
            .min_by(|a, b| {
                a.price
                    .unwrap_or(f64::INFINITY)
                    .total_cmp(&b.price.unwrap_or(f64::INFINITY))
            })
    }
}

/// An offer together with its price history over the requested range.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct OfferWithHistory {
    #[serde(flatten)]
    pub offer: Offer,

    #[serde(default)]
    pub price_history: Vec<PriceHistoryEntry>,
}

fn offer_params(ids: String, retailer: Option<&str>, format: Option<ResponseFormat>) -> QueryParams {
    let mut params = vec![("ids", ids)];
    push_optional(&mut params, "retailer", retailer);
    push_optional(&mut params, "format", format.map(|f| f.as_str()));
    params
}

fn history_params(
    ids: String,
    start_date: &str,
    end_date: &str,
    retailer: Option<&str>,
    format: Option<ResponseFormat>,
) -> QueryParams {
    let mut params = vec![
        ("ids", ids),
        ("start_date", start_date.to_string()),
        ("end_date", end_date.to_string()),
    ];
    push_optional(&mut params, "retailer", retailer);
    push_optional(&mut params, "format", format.map(|f| f.as_str()));
    params
}

impl ShopSavvyClient {
    /// Gets current offers for one product, optionally for a single retailer.
    pub async fn get_current_offers(
        &self,
        identifier: &str,
        retailer: Option<&str>,
        format: Option<ResponseFormat>,
    ) -> Result<ApiResponse<Vec<ProductWithOffers>>> {
        let params = offer_params(identifier.to_string(), retailer, format);
        self.get("/products/offers", &params).await
    }

    /// Gets current offers for several products in one request.
    pub async fn get_current_offers_batch<S: AsRef<str>>(
        &self,
        identifiers: &[S],
        retailer: Option<&str>,
        format: Option<ResponseFormat>,
    ) -> Result<ApiResponse<Vec<ProductWithOffers>>> {
        let params = offer_params(join_identifiers(identifiers), retailer, format);
        self.get("/products/offers", &params).await
    }

    /// Gets historical offers for one product between two dates (`YYYY-MM-DD`).
    pub async fn get_price_history(
        &self,
        identifier: &str,
        start_date: &str,
        end_date: &str,
        retailer: Option<&str>,
        format: Option<ResponseFormat>,
    ) -> Result<ApiResponse<Vec<OfferWithHistory>>> {
        let params = history_params(identifier.to_string(), start_date, end_date, retailer, format);
        self.get("/products/offers/history", &params).await
    }

    /// Gets historical offers for several products between two dates.
    pub async fn get_price_history_batch<S: AsRef<str>>(
        &self,
        identifiers: &[S],
        start_date: &str,
        end_date: &str,
        retailer: Option<&str>,
        format: Option<ResponseFormat>,
    ) -> Result<ApiResponse<Vec<OfferWithHistory>>> {
        let params = history_params(
            join_identifiers(identifiers),
            start_date,
            end_date,
            retailer,
            format,
        );
        self.get("/products/offers/history", &params).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn offer(id: &str, price: Option<f64>) -> Offer {
        Offer {
            id: id.to_string(),
            retailer: Some("amazon".to_string()),
            price,
            currency: Some("USD".to_string()),
            availability: Some("in_stock".to_string()),
            condition: Some("new".to_string()),
            url: Some("https://amazon.com/dp/B07ZPC9QD4".to_string()),
            seller: None,
            timestamp: Some("2024-01-15T10:30:00Z".to_string()),
            history: Vec::new(),
        }
    }

    #[test]
    fn test_offer_url_uses_uppercase_wire_name() {
        let value = serde_json::to_value(offer("o-1", Some(199.0))).unwrap();
        assert_eq!(value["URL"], "https://amazon.com/dp/B07ZPC9QD4");
        assert!(value.get("url").is_none());

        let lower: Offer =
            serde_json::from_str(r#"{"id": "o-2", "url": "https://walmart.com/ip/1"}"#).unwrap();
        assert_eq!(lower.url.as_deref(), Some("https://walmart.com/ip/1"));
    }

    #[test]
    fn test_offer_with_both_url_keys_is_rejected() {
        let err = serde_json::from_str::<Offer>(
            r#"{"id": "o-3", "URL": "https://a.example/1", "url": "https://b.example/2"}"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("duplicate field"), "{err}");
    }

    #[test]
    fn test_product_with_offers_flattens_product() {
        let json = r#"{
            "title": "AirPods Pro",
            "shopsavvy": "ss-1",
            "brand": "Apple",
            "offers": [{"id": "o-1", "retailer": "target", "price": 229.99, "URL": "https://target.com/p/1"}]
        }"#;
        let parsed: ProductWithOffers = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.product.title, "AirPods Pro");
        assert_eq!(parsed.product.brand.as_deref(), Some("Apple"));
        assert_eq!(parsed.offers.len(), 1);
        assert_eq!(parsed.offers[0].price, Some(229.99));
    }

    #[test]
    fn test_product_with_offers_roundtrip() {
        let value = ProductWithOffers {
            product: ProductDetails {
                title: "AirPods Pro".to_string(),
                shopsavvy: "ss-1".to_string(),
                barcode: Some("190199246850".to_string()),
                ..Default::default()
            },
            offers: vec![offer("o-1", Some(199.0)), offer("o-2", None)],
        };
        let json = serde_json::to_string(&value).unwrap();
        let back: ProductWithOffers = serde_json::from_str(&json).unwrap();
        assert_eq!(back, value);
    }

    #[test]
    fn test_offer_with_history_roundtrip() {
        let mut base = offer("o-1", Some(189.5));
        base.history = vec![PriceHistoryEntry {
            date: "2024-01-01".to_string(),
            price: 199.0,
            availability: "in_stock".to_string(),
        }];
        let value = OfferWithHistory {
            offer: base,
            price_history: vec![
                PriceHistoryEntry {
                    date: "2024-01-01".to_string(),
                    price: 199.0,
                    availability: "in_stock".to_string(),
                },
                PriceHistoryEntry {
                    date: "2024-01-02".to_string(),
                    price: 189.5,
                    availability: "limited".to_string(),
                },
            ],
        };
        let json = serde_json::to_string(&value).unwrap();
        let back: OfferWithHistory = serde_json::from_str(&json).unwrap();
        assert_eq!(back, value);
    }

    #[test]
    fn test_best_offer_ignores_unpriced() {
        let product = ProductWithOffers {
            product: ProductDetails::default(),
            offers: vec![
                offer("a", Some(20.0)),
                offer("b", None),
                offer("c", Some(12.5)),
            ],
        };
        assert_eq!(product.best_offer().map(|o| o.id.as_str()), Some("c"));

        let empty = ProductWithOffers::default();
        assert!(empty.best_offer().is_none());
    }

    #[test]
    fn test_history_params_order() {
        let params = history_params(
            "a,b".to_string(),
            "2024-01-01",
            "2024-01-31",
            Some(""),
            Some(ResponseFormat::Json),
        );
        assert_eq!(
            params,
            vec![
                ("ids", "a,b".to_string()),
                ("start_date", "2024-01-01".to_string()),
                ("end_date", "2024-01-31".to_string()),
                ("format", "json".to_string()),
            ]
        );
    }

    #[test]
    fn test_offer_params_with_retailer() {
        let params = offer_params("x".to_string(), Some("bestbuy"), None);
        assert_eq!(
            params,
            vec![("ids", "x".to_string()), ("retailer", "bestbuy".to_string())]
        );
    }
}
