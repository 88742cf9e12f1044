//
//  shopsavvy
//  cli/usage.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Account usage command

use anyhow::Result;
use clap::Args;
use comfy_table::Table;

use crate::api::usage::UsageInfo;
use crate::output::{TableBuilder, TableOutput};

use super::GlobalOptions;

/// Show API credit usage for the current billing period
#[derive(Args, Debug)]
pub struct UsageCommand {}

impl TableOutput for UsageInfo {
    fn table(&self, color: bool) -> Table {
        let period = &self.current_period;
        TableBuilder::new()
            .color(color)
            .headers(["Field", "Value"])
            .rows([
                ["Period".to_string(), format!("{} to {}", period.start_date, period.end_date)],
                ["Credits used".to_string(), period.credits_used.to_string()],
                ["Credits limit".to_string(), period.credits_limit.to_string()],
                ["Credits remaining".to_string(), period.credits_remaining.to_string()],
                ["Requests made".to_string(), period.requests_made.to_string()],
                ["Usage".to_string(), format!("{:.1}%", self.usage_percentage)],
            ])
            .build()
    }
}

impl UsageCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let client = global.client()?;
        let response = client.get_usage().await?;
        global.output().write_response(&response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::usage::UsagePeriod;

    #[test]
    fn test_usage_table() {
        let usage = UsageInfo {
            current_period: UsagePeriod {
                start_date: "2024-01-01".to_string(),
                end_date: "2024-01-31".to_string(),
                credits_used: 250,
                credits_limit: 1000,
                credits_remaining: 750,
                requests_made: 120,
            },
            usage_percentage: 25.0,
        };

        let rendered = usage.table(false).to_string();
        assert!(rendered.contains("2024-01-01 to 2024-01-31"));
        assert!(rendered.contains("750"));
        assert!(rendered.contains("25.0%"));
    }
}
