//
//  shopsavvy
//  cli/schedule.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Price-monitoring schedule commands

use anyhow::Result;
use clap::{Args, Subcommand, ValueEnum};
use comfy_table::Table;

use crate::api::common::{ApiResponse, Identified};
use crate::api::schedule::{
    Frequency, RemoveBatchResponse, RemoveResponse, ScheduleBatchResponse, ScheduleResponse,
    ScheduledProduct,
};
use crate::output::{format_bool, or_dash, OutputFormat, OutputWriter, TableBuilder, TableOutput};

use super::GlobalOptions;

/// Manage price-monitoring schedules
#[derive(Args, Debug)]
pub struct ScheduleCommand {
    #[command(subcommand)]
    pub command: ScheduleSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum ScheduleSubcommand {
    /// Schedule products for monitoring
    Add(AddArgs),

    /// List scheduled products
    #[command(visible_alias = "ls")]
    List,

    /// Stop monitoring products
    #[command(visible_alias = "rm")]
    Remove(RemoveArgs),
}

/// `--frequency` values.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrequencyArg {
    Hourly,
    Daily,
    Weekly,
}

impl From<FrequencyArg> for Frequency {
    fn from(arg: FrequencyArg) -> Self {
        match arg {
            FrequencyArg::Hourly => Frequency::Hourly,
            FrequencyArg::Daily => Frequency::Daily,
            FrequencyArg::Weekly => Frequency::Weekly,
        }
    }
}

#[derive(Args, Debug)]
pub struct AddArgs {
    /// Product identifiers to monitor
    #[arg(required = true, num_args = 1..)]
    pub identifiers: Vec<String>,

    /// How often to refresh prices
    #[arg(long, short = 'f', value_enum, default_value_t = FrequencyArg::Daily)]
    pub frequency: FrequencyArg,

    /// Only monitor offers from this retailer
    #[arg(long, short = 'r')]
    pub retailer: Option<String>,
}

#[derive(Args, Debug)]
pub struct RemoveArgs {
    /// Product identifiers to stop monitoring
    #[arg(required = true, num_args = 1..)]
    pub identifiers: Vec<String>,
}

impl TableOutput for Vec<ScheduledProduct> {
    fn table(&self, color: bool) -> Table {
        TableBuilder::new()
            .color(color)
            .headers(["Identifier", "Product ID", "Frequency", "Retailer", "Created", "Last Refreshed"])
            .rows(self.iter().map(|p| {
                vec![
                    p.identifier.clone(),
                    p.product_id.clone(),
                    p.frequency.clone(),
                    or_dash(p.retailer.as_deref()),
                    p.created_at.clone(),
                    or_dash(p.last_refreshed.as_deref()),
                ]
            }))
            .build()
    }
}

impl TableOutput for ScheduleResponse {
    fn table(&self, color: bool) -> Table {
        TableBuilder::new()
            .color(color)
            .headers(["Product ID", "Scheduled"])
            .row([self.product_id.clone(), format_bool(self.scheduled, color)])
            .build()
    }
}

impl TableOutput for Vec<ScheduleBatchResponse> {
    fn table(&self, color: bool) -> Table {
        TableBuilder::new()
            .color(color)
            .headers(["Identifier", "Product ID", "Scheduled"])
            .rows(self.iter().map(|r| {
                vec![
                    r.identifier.clone(),
                    r.product_id.clone(),
                    format_bool(r.scheduled, color),
                ]
            }))
            .build()
    }
}

impl TableOutput for RemoveResponse {
    fn table(&self, color: bool) -> Table {
        TableBuilder::new()
            .color(color)
            .headers(["Removed"])
            .row([format_bool(self.removed, color)])
            .build()
    }
}

impl TableOutput for Vec<RemoveBatchResponse> {
    fn table(&self, color: bool) -> Table {
        TableBuilder::new()
            .color(color)
            .headers(["Identifier", "Removed"])
            .rows(self.iter().map(|r| vec![r.identifier.clone(), format_bool(r.removed, color)]))
            .build()
    }
}

impl ScheduleCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        match &self.command {
            ScheduleSubcommand::Add(args) => self.add(args, global).await,
            ScheduleSubcommand::List => self.list(global).await,
            ScheduleSubcommand::Remove(args) => self.remove(args, global).await,
        }
    }

    async fn add(&self, args: &AddArgs, global: &GlobalOptions) -> Result<()> {
        let client = global.client()?;
        let retailer = args.retailer.as_deref();
        let writer = global.output();

        match args.identifiers.as_slice() {
            [identifier] => {
                let response = client
                    .schedule_product_monitoring(identifier, args.frequency.into(), retailer)
                    .await?;
                writer.write_response(&response)?;
            }
            identifiers => {
                let response = client
                    .schedule_product_monitoring_batch(identifiers, args.frequency.into(), retailer)
                    .await?;
                writer.write_response(&response)?;
                warn_missing(&writer, identifiers, &response);
            }
        }

        Ok(())
    }

    async fn list(&self, global: &GlobalOptions) -> Result<()> {
        let client = global.client()?;
        let response = client.get_scheduled_products().await?;

        let writer = global.output();
        if response.data.is_empty() && writer.format() == OutputFormat::Table {
            writer.write_info("No products are scheduled for monitoring");
            return Ok(());
        }
        writer.write_response(&response)
    }

    async fn remove(&self, args: &RemoveArgs, global: &GlobalOptions) -> Result<()> {
        let client = global.client()?;
        let writer = global.output();

        match args.identifiers.as_slice() {
            [identifier] => {
                let response = client.remove_product_from_schedule(identifier).await?;
                writer.write_response(&response)?;
            }
            identifiers => {
                let response = client.remove_products_from_schedule(identifiers).await?;
                writer.write_response(&response)?;
                warn_missing(&writer, identifiers, &response);
            }
        }

        Ok(())
    }
}

/// Identifiers the batch response carried no result for.
fn missing_identifiers<'a, T: Identified>(
    requested: &'a [String],
    response: &ApiResponse<Vec<T>>,
) -> Vec<&'a str> {
    requested
        .iter()
        .map(String::as_str)
        .filter(|id| response.find(id).is_none())
        .collect()
}

fn warn_missing<T: Identified>(
    writer: &OutputWriter,
    requested: &[String],
    response: &ApiResponse<Vec<T>>,
) {
    if writer.format() != OutputFormat::Table {
        return;
    }
    for id in missing_identifiers(requested, response) {
        writer.write_warning(&format!("No result returned for '{}'", id));
    }
}
