//
//  shopsavvy
//  api/usage.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Account usage and credit summary.

use serde::{Deserialize, Serialize};

use super::client::ShopSavvyClient;
use super::common::{ApiResponse, Result};

/// Credit usage for the current billing period.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct UsagePeriod {
    pub start_date: String,
    pub end_date: String,
    pub credits_used: i64,
    pub credits_limit: i64,
    pub credits_remaining: i64,
    pub requests_made: i64,
}

/// API usage and credit information for the account.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct UsageInfo {
    pub current_period: UsagePeriod,

    /// Share of the period's credit limit already consumed, 0 to 100.
    pub usage_percentage: f64,
}

impl ShopSavvyClient {
    /// Gets the account's usage for the current billing period.
    pub async fn get_usage(&self) -> Result<ApiResponse<UsageInfo>> {
        self.get("/usage", &Vec::new()).await
    }
}
