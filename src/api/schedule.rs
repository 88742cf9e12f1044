//
//  shopsavvy
//  api/schedule.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Product monitoring schedules.
//!
//! Scheduling a product asks ShopSavvy to refresh its offers periodically.
//! Schedules are created with POST and removed with DELETE on the same path;
//! both take a JSON body. Batch variants send the identifiers as one
//! comma-separated string and return one confirmation per identifier.
//!
//! # Example
//!
//! ```rust,no_run
//! use shopsavvy::{Frequency, ShopSavvyClient};
//!
//! # async fn example() -> Result<(), shopsavvy::ApiError> {
//! let client = ShopSavvyClient::new("ss_live_abc123")?;
//! let ids = ["012345678901", "B08N5WRWNW"];
//!
//! let response = client
//!     .schedule_product_monitoring_batch(&ids, Frequency::Daily, None)
//!     .await?;
//!
//! for id in ids {
//!     match response.find(id) {
//!         Some(result) if result.scheduled => println!("{id}: scheduled"),
//!         Some(_) => println!("{id}: rejected"),
//!         None => println!("{id}: no result"),
//!     }
//! }
//! # Ok(())
//! # }
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use super::client::{join_identifiers, ShopSavvyClient};
use super::common::{ApiResponse, Identified, Result};

const SCHEDULE_PATH: &str = "/products/schedule";

/// How often a scheduled product is refreshed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    Hourly,
    Daily,
    Weekly,
}

impl Frequency {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hourly => "hourly",
            Self::Daily => "daily",
            Self::Weekly => "weekly",
        }
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A product currently scheduled for monitoring.
///
/// `frequency` is kept as the raw string the API returns so that values
/// added server-side still deserialize.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ScheduledProduct {
    pub product_id: String,

    pub identifier: String,

    pub frequency: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub retailer: Option<String>,

    pub created_at: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_refreshed: Option<String>,
}

/// Confirmation for a single scheduled product.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ScheduleResponse {
    pub scheduled: bool,
    pub product_id: String,
}

/// Per-identifier confirmation from a batch schedule.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ScheduleBatchResponse {
    pub identifier: String,
    pub scheduled: bool,
    pub product_id: String,
}

/// Confirmation for a single removal.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct RemoveResponse {
    pub removed: bool,
}

/// Per-identifier confirmation from a batch removal.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct RemoveBatchResponse {
    pub identifier: String,
    pub removed: bool,
}

impl Identified for ScheduledProduct {
    fn identifier(&self) -> &str {
        &self.identifier
    }
}

impl Identified for ScheduleBatchResponse {
    fn identifier(&self) -> &str {
        &self.identifier
    }
}

impl Identified for RemoveBatchResponse {
    fn identifier(&self) -> &str {
        &self.identifier
    }
}

// Request bodies

#[derive(Debug, Serialize)]
struct ScheduleRequest<'a> {
    identifier: &'a str,
    frequency: Frequency,
    #[serde(skip_serializing_if = "Option::is_none")]
    retailer: Option<&'a str>,
}

#[derive(Debug, Serialize)]
struct ScheduleBatchRequest<'a> {
    identifiers: String,
    frequency: Frequency,
    #[serde(skip_serializing_if = "Option::is_none")]
    retailer: Option<&'a str>,
}

#[derive(Debug, Serialize)]
struct RemoveRequest<'a> {
    identifier: &'a str,
}

#[derive(Debug, Serialize)]
struct RemoveBatchRequest {
    identifiers: String,
}

impl ShopSavvyClient {
    /// Schedules one product for periodic monitoring.
    pub async fn schedule_product_monitoring(
        &self,
        identifier: &str,
        frequency: Frequency,
        retailer: Option<&str>,
    ) -> Result<ApiResponse<ScheduleResponse>> {
        let body = ScheduleRequest {
            identifier,
            frequency,
            retailer: retailer.filter(|r| !r.is_empty()),
        };
        self.post(SCHEDULE_PATH, &body).await
    }

    /// Schedules several products with the same frequency and retailer filter.
    ///
    /// Use [`ApiResponse::find`] to read the confirmation for a given identifier.
    pub async fn schedule_product_monitoring_batch<S: AsRef<str>>(
        &self,
        identifiers: &[S],
        frequency: Frequency,
        retailer: Option<&str>,
    ) -> Result<ApiResponse<Vec<ScheduleBatchResponse>>> {
        let body = ScheduleBatchRequest {
            identifiers: join_identifiers(identifiers),
            frequency,
            retailer: retailer.filter(|r| !r.is_empty()),
        };
        self.post(SCHEDULE_PATH, &body).await
    }

    /// Lists every product scheduled on this account.
    pub async fn get_scheduled_products(&self) -> Result<ApiResponse<Vec<ScheduledProduct>>> {
        self.get("/products/scheduled", &Vec::new()).await
    }

    /// Removes one product from monitoring.
    pub async fn remove_product_from_schedule(
        &self,
        identifier: &str,
    ) -> Result<ApiResponse<RemoveResponse>> {
        self.delete(SCHEDULE_PATH, &RemoveRequest { identifier }).await
    }

    /// Removes several products from monitoring.
    pub async fn remove_products_from_schedule<S: AsRef<str>>(
        &self,
        identifiers: &[S],
    ) -> Result<ApiResponse<Vec<RemoveBatchResponse>>> {
        let body = RemoveBatchRequest {
            identifiers: join_identifiers(identifiers),
        };
        self.delete(SCHEDULE_PATH, &body).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_frequency_wire_names() {
        assert_eq!(serde_json::to_value(Frequency::Hourly).unwrap(), json!("hourly"));
        assert_eq!(serde_json::to_value(Frequency::Weekly).unwrap(), json!("weekly"));
        let parsed: Frequency = serde_json::from_str(r#""daily""#).unwrap();
        assert_eq!(parsed, Frequency::Daily);
        assert_eq!(Frequency::Daily.to_string(), "daily");
    }

    #[test]
    fn test_schedule_request_shape() {
        let body = ScheduleRequest {
            identifier: "012345678901",
            frequency: Frequency::Daily,
            retailer: None,
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({"identifier": "012345678901", "frequency": "daily"})
        );

        let body = ScheduleBatchRequest {
            identifiers: join_identifiers(&["a", "b"]),
            frequency: Frequency::Hourly,
            retailer: Some("amazon"),
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({"identifiers": "a,b", "frequency": "hourly", "retailer": "amazon"})
        );
    }

    #[test]
    fn test_remove_request_shape() {
        assert_eq!(
            serde_json::to_value(RemoveRequest { identifier: "x" }).unwrap(),
            json!({"identifier": "x"})
        );
        assert_eq!(
            serde_json::to_value(RemoveBatchRequest {
                identifiers: "x,y".to_string()
            })
            .unwrap(),
            json!({"identifiers": "x,y"})
        );
    }

    #[test]
    fn test_scheduled_product_roundtrip() {
        let product = ScheduledProduct {
            product_id: "ss-1".to_string(),
            identifier: "012345678901".to_string(),
            frequency: "daily".to_string(),
            retailer: Some("walmart".to_string()),
            created_at: "2024-01-15T10:30:00Z".to_string(),
            last_refreshed: None,
        };
        let json = serde_json::to_string(&product).unwrap();
        assert!(!json.contains("last_refreshed"));
        let back: ScheduledProduct = serde_json::from_str(&json).unwrap();
        assert_eq!(back, product);
    }

    #[test]
    fn test_confirmation_roundtrips() {
        let single = ScheduleResponse {
            scheduled: true,
            product_id: "ss-1".to_string(),
        };
        let back: ScheduleResponse =
            serde_json::from_str(&serde_json::to_string(&single).unwrap()).unwrap();
        assert_eq!(back, single);

        let batch = vec![
            ScheduleBatchResponse {
                identifier: "a".to_string(),
                scheduled: true,
                product_id: "ss-a".to_string(),
            },
            ScheduleBatchResponse {
                identifier: "b".to_string(),
                scheduled: false,
                product_id: String::new(),
            },
        ];
        let back: Vec<ScheduleBatchResponse> =
            serde_json::from_str(&serde_json::to_string(&batch).unwrap()).unwrap();
        assert_eq!(back, batch);

        let removed = RemoveBatchResponse {
            identifier: "a".to_string(),
            removed: true,
        };
        let back: RemoveBatchResponse =
            serde_json::from_str(&serde_json::to_string(&removed).unwrap()).unwrap();
        assert_eq!(back, removed);

        let back: RemoveResponse = serde_json::from_str(r#"{"removed": false}"#).unwrap();
        assert_eq!(back, RemoveResponse { removed: false });
    }

    #[test]
    fn test_find_matches_by_identifier_not_position() {
        let response = ApiResponse {
            success: true,
            data: vec![
                ScheduleBatchResponse {
                    identifier: "second".to_string(),
                    scheduled: false,
                    product_id: String::new(),
                },
                ScheduleBatchResponse {
                    identifier: "first".to_string(),
                    scheduled: true,
                    product_id: "ss-1".to_string(),
                },
            ],
            message: None,
            meta: None,
            pagination: None,
        };

        assert_eq!(response.find("first").unwrap().product_id, "ss-1");
        assert!(!response.find("second").unwrap().scheduled);
        assert!(response.find("third").is_none());
    }
}
