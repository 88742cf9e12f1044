//
//  shopsavvy
//  cli/product.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Product search and lookup commands

use anyhow::Result;
use clap::Args;
use comfy_table::Table;

use crate::api::common::PaginationInfo;
use crate::api::products::ProductDetails;
use crate::output::{or_dash, truncate, OutputFormat, TableBuilder, TableOutput};

use super::GlobalOptions;

/// Search products by keyword
#[derive(Args, Debug)]
pub struct SearchCommand {
    /// Search keywords
    #[arg(required = true, num_args = 1..)]
    pub query: Vec<String>,

    /// Maximum number of results
    #[arg(long, short = 'l')]
    pub limit: Option<u32>,

    /// Number of results to skip
    #[arg(long, short = 'o')]
    pub offset: Option<u32>,
}

/// Look up product details
#[derive(Args, Debug)]
pub struct ProductCommand {
    /// Barcode, ASIN, URL, model number or ShopSavvy ID (several allowed)
    #[arg(required = true, num_args = 1..)]
    pub identifiers: Vec<String>,
}

impl TableOutput for Vec<ProductDetails> {
    fn table(&self, color: bool) -> Table {
        TableBuilder::new()
            .color(color)
            .headers(["Title", "Brand", "Category", "Barcode", "ShopSavvy ID"])
            .rows(self.iter().map(|p| {
                vec![
                    truncate(&p.title, 60),
                    or_dash(p.brand.as_deref()),
                    or_dash(p.category.as_deref()),
                    or_dash(p.barcode.as_deref()),
                    p.shopsavvy.clone(),
                ]
            }))
            .build()
    }
}

impl SearchCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let client = global.client()?;
        let query = self.query.join(" ");
        let response = client
            .search_products(&query, self.limit, self.offset)
            .await?;

        let writer = global.output();
        writer.write_response(&response)?;

        if writer.format() == OutputFormat::Table {
            if let Some(page) = response.pagination {
                writer.write_info(&page_summary(&page));
                if let Some(next) = page.next_offset() {
                    writer.write_info(&format!("More results: --offset {}", next));
                }
            }
        }

        Ok(())
    }
}

/// `Showing <first>-<last> of <total>`, 1-based.
fn page_summary(page: &PaginationInfo) -> String {
    let first = if page.returned == 0 {
        0
    } else {
        page.offset.saturating_add(1)
    };
    format!("Showing {}-{} of {}", first, page.end(), page.total)
}

impl ProductCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let client = global.client()?;
        let response = match self.identifiers.as_slice() {
            [identifier] => client.get_product_details(identifier, None).await?,
            identifiers => client.get_product_details_batch(identifiers, None).await?,
        };

        let writer = global.output();
        if response.data.is_empty() && writer.format() == OutputFormat::Table {
            writer.write_warning("No products matched the given identifiers");
            return Ok(());
        }
        writer.write_response(&response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_summary() {
        let page = PaginationInfo {
            total: 40,
            limit: 20,
            offset: 20,
            returned: 20,
        };
        assert_eq!(page_summary(&page), "Showing 21-40 of 40");

        let empty = PaginationInfo {
            total: 0,
            ..Default::default()
        };
        assert_eq!(page_summary(&empty), "Showing 0-0 of 0");
    }

    #[test]
    fn test_page_summary_saturates() {
        let page = PaginationInfo {
            total: u64::MAX,
            limit: 1,
            offset: u64::MAX,
            returned: 3,
        };
        let max = u64::MAX;
        assert_eq!(page_summary(&page), format!("Showing {max}-{max} of {max}"));
    }

    #[test]
    fn test_product_table() {
        let products = vec![ProductDetails {
            title: "Apple AirPods Pro".to_string(),
            shopsavvy: "ss-123".to_string(),
            brand: Some("Apple".to_string()),
            ..Default::default()
        }];

        let rendered = products.table(false).to_string();
        assert!(rendered.contains("Apple AirPods Pro"));
        assert!(rendered.contains("ss-123"));
        assert!(rendered.contains("ShopSavvy ID"));
    }
}
