//
//  shopsavvy
//  cli/offers.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Current offer and price history commands
//!
//! Both commands accept one or more identifiers. A single identifier uses the
//! single-product endpoint variant; several are sent as one batch request.

use anyhow::Result;
use chrono::NaiveDate;
use clap::{Args, CommandFactory, ValueEnum};
use comfy_table::Table;

use crate::api::offers::{OfferWithHistory, ProductWithOffers};
use crate::api::products::ResponseFormat;
use crate::output::{
    format_availability, format_price, or_dash, truncate, TableBuilder, TableOutput,
};

use super::{Cli, GlobalOptions};

/// `--format` values.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatArg {
    Json,
    Csv,
}

impl From<FormatArg> for ResponseFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Json => ResponseFormat::Json,
            FormatArg::Csv => ResponseFormat::Csv,
        }
    }
}

/// Show current offers for products
#[derive(Args, Debug)]
pub struct OffersCommand {
    /// Product identifiers (barcode, ASIN, URL, model number or ShopSavvy ID)
    #[arg(required = true, num_args = 1..)]
    pub identifiers: Vec<String>,

    /// Only show offers from this retailer
    #[arg(long, short = 'r')]
    pub retailer: Option<String>,

    /// Response format requested from the API
    #[arg(long, value_enum)]
    pub format: Option<FormatArg>,
}

/// Show price history for products
#[derive(Args, Debug)]
pub struct HistoryCommand {
    /// Product identifiers (barcode, ASIN, URL, model number or ShopSavvy ID)
    #[arg(required = true, num_args = 1..)]
    pub identifiers: Vec<String>,

    /// First day of the range (YYYY-MM-DD)
    #[arg(long, short = 's')]
    pub start: NaiveDate,

    /// Last day of the range (YYYY-MM-DD)
    #[arg(long, short = 'e')]
    pub end: NaiveDate,

    /// Only show history for this retailer
    #[arg(long, short = 'r')]
    pub retailer: Option<String>,

    /// Response format requested from the API
    #[arg(long, value_enum)]
    pub format: Option<FormatArg>,
}

impl TableOutput for Vec<ProductWithOffers> {
    fn table(&self, color: bool) -> Table {
        let rows = self.iter().flat_map(|product| {
            let best = product.best_offer().map(|offer| offer.id.as_str());
            product.offers.iter().map(move |offer| {
                let marker = if Some(offer.id.as_str()) == best { "*" } else { "" };
                vec![
                    truncate(&product.product.title, 40),
                    or_dash(offer.retailer.as_deref()),
                    format!(
                        "{}{}",
                        format_price(offer.price, offer.currency.as_deref()),
                        marker
                    ),
                    format_availability(offer.availability.as_deref().unwrap_or("-"), color),
                    or_dash(offer.condition.as_deref()),
                    or_dash(offer.url.as_deref()),
                ]
            })
        });

        TableBuilder::new()
            .color(color)
            .headers(["Product", "Retailer", "Price", "Availability", "Condition", "URL"])
            .rows(rows)
            .build()
    }
}

impl TableOutput for Vec<OfferWithHistory> {
    fn table(&self, color: bool) -> Table {
        let rows = self.iter().flat_map(|entry| {
            let offer = &entry.offer;
            entry.price_history.iter().map(move |point| {
                vec![
                    or_dash(offer.retailer.as_deref()),
                    point.date.clone(),
                    format_price(Some(point.price), offer.currency.as_deref()),
                    format_availability(&point.availability, color),
                ]
            })
        });

        TableBuilder::new()
            .color(color)
            .headers(["Retailer", "Date", "Price", "Availability"])
            .rows(rows)
            .build()
    }
}

impl OffersCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let client = global.client()?;
        let retailer = self.retailer.as_deref();
        let response = match self.identifiers.as_slice() {
            [identifier] => {
                client
                    .get_current_offers(identifier, retailer, self.format.map(Into::into))
                    .await?
            }
            identifiers => {
                client
                    .get_current_offers_batch(identifiers, retailer, self.format.map(Into::into))
                    .await?
            }
        };

        global.output().write_response(&response)
    }
}

impl HistoryCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        check_date_range(self.start, self.end)?;

        let client = global.client()?;
        let start = self.start.format("%Y-%m-%d").to_string();
        let end = self.end.format("%Y-%m-%d").to_string();
        let retailer = self.retailer.as_deref();

        let response = match self.identifiers.as_slice() {
            [identifier] => {
                client
                    .get_price_history(identifier, &start, &end, retailer, self.format.map(Into::into))
                    .await?
            }
            identifiers => {
                client
                    .get_price_history_batch(identifiers, &start, &end, retailer, self.format.map(Into::into))
                    .await?
            }
        };

        global.output().write_response(&response)
    }
}

/// Rejects ranges whose start falls after their end.
fn check_date_range(start: NaiveDate, end: NaiveDate) -> Result<()> {
    if start > end {
        let err = Cli::command().error(
            clap::error::ErrorKind::ValueValidation,
            format!("--start ({start}) must not be after --end ({end})"),
        );
        return Err(err.into());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::offers::{Offer, PriceHistoryEntry};
    use crate::api::products::ProductDetails;
    use clap::Parser;

    fn offer(id: &str, retailer: &str, price: f64) -> Offer {
        Offer {
            id: id.to_string(),
            retailer: Some(retailer.to_string()),
            price: Some(price),
            currency: Some("USD".to_string()),
            availability: Some("in_stock".to_string()),
            condition: None,
            url: None,
            seller: None,
            timestamp: None,
            history: Vec::new(),
        }
    }

    #[test]
    fn test_history_dates_are_parsed() {
        let cli = Cli::try_parse_from([
            "shopsavvy",
            "history",
            "012345678901",
            "--start",
            "2024-01-01",
            "--end",
            "2024-01-31",
        ])
        .unwrap();
        match cli.command {
            super::super::Commands::History(cmd) => {
                assert_eq!(cmd.start, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
                assert_eq!(cmd.identifiers, vec!["012345678901"]);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_format_flag_maps_to_request_format() {
        let cli = Cli::try_parse_from([
            "shopsavvy",
            "offers",
            "012345678901",
            "--format",
            "csv",
        ])
        .unwrap();
        match cli.command {
            super::super::Commands::Offers(cmd) => {
                assert_eq!(cmd.format, Some(FormatArg::Csv));
                assert_eq!(cmd.format.map(ResponseFormat::from), Some(ResponseFormat::Csv));
            }
            other => panic!("unexpected command: {other:?}"),
        }
        assert_eq!(ResponseFormat::from(FormatArg::Json), ResponseFormat::Json);

        let result = Cli::try_parse_from(["shopsavvy", "offers", "x", "--format", "xml"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_history_rejects_malformed_date() {
        let result = Cli::try_parse_from([
            "shopsavvy",
            "history",
            "012345678901",
            "--start",
            "01/01/2024",
            "--end",
            "2024-01-31",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_check_date_range() {
        let jan1 = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let jan31 = NaiveDate::from_ymd_opt(2024, 1, 31).unwrap();
        assert!(check_date_range(jan1, jan31).is_ok());
        assert!(check_date_range(jan1, jan1).is_ok());

        let err = check_date_range(jan31, jan1).unwrap_err();
        assert!(err.downcast_ref::<clap::Error>().is_some());
    }

    #[test]
    fn test_offers_table_marks_best_offer() {
        let products = vec![ProductWithOffers {
            product: ProductDetails {
                title: "Widget".to_string(),
                shopsavvy: "ss-1".to_string(),
                ..Default::default()
            },
            offers: vec![offer("o1", "amazon", 20.0), offer("o2", "walmart", 15.0)],
        }];

        let rendered = products.table(false).to_string();
        assert!(rendered.contains("$15.00*"));
        assert!(rendered.contains("$20.00"));
        assert!(!rendered.contains("$20.00*"));
    }

    #[test]
    fn test_history_table_has_row_per_point() {
        let history = vec![OfferWithHistory {
            offer: offer("o1", "amazon", 20.0),
            price_history: vec![
                PriceHistoryEntry {
                    date: "2024-01-01".to_string(),
                    price: 24.0,
                    availability: "in_stock".to_string(),
                },
                PriceHistoryEntry {
                    date: "2024-01-02".to_string(),
                    price: 22.5,
                    availability: "in_stock".to_string(),
                },
            ],
        }];

        let rendered = history.table(false).to_string();
        assert!(rendered.contains("2024-01-01"));
        assert!(rendered.contains("$22.50"));
    }
}
