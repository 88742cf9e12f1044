//
//  shopsavvy
//  output/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Output Module
//!
//! Output formatting for the `shopsavvy` CLI:
//!
//! - **Table format**: Human-readable tables for interactive terminal use
//! - **JSON format**: The full response envelope, for scripting and automation
//!
//! ## Core Components
//!
//! - [`OutputFormat`]: Enum representing the available output formats
//! - [`OutputWriter`]: Main entry point for writing formatted output
//! - [`TableOutput`]: Trait for payloads that can be rendered as tables

mod json;
mod table;

pub use json::*;
pub use table::*;

use comfy_table::Table;
use console::style;
use serde::Serialize;

use crate::api::common::ApiResponse;

/// Represents the available output formats for CLI output.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum OutputFormat {
    /// Human-readable table format with optional color support.
    #[default]
    Table,
    /// Pretty-printed JSON of the whole response envelope.
    Json,
}

/// A trait for payloads that can be rendered as a table.
pub trait TableOutput {
    /// Builds the table for this payload.
    ///
    /// # Parameters
    ///
    /// * `color` - Whether color output is enabled
    fn table(&self, color: bool) -> Table;
}

/// Writes response envelopes and status messages in the selected format.
///
/// # Example
///
/// ```rust,ignore
/// use shopsavvy::output::OutputWriter;
///
/// let writer = OutputWriter::new(OutputFormat::Table);
/// writer.write_response(&response)?;
/// writer.write_success("Set timeout_secs = 10");
/// ```
///
/// # Notes
///
/// Color output is automatically detected based on terminal capabilities.
/// Colors are disabled when output is piped or redirected.
pub struct OutputWriter {
    format: OutputFormat,
    color: bool,
}

impl OutputWriter {
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            color: console::colors_enabled(),
        }
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Writes an API response to stdout.
    ///
    /// JSON output keeps the whole envelope (`success`, `data`, `meta`, ...)
    /// so scripts can read credit usage. Table output renders the payload and
    /// then a one-line credit summary when the API sent one.
    pub fn write_response<T: Serialize + TableOutput>(
        &self,
        response: &ApiResponse<T>,
    ) -> anyhow::Result<()> {
        match self.format {
            OutputFormat::Json => write_json(response)?,
            OutputFormat::Table => {
                println!("{}", response.data.table(self.color));
                if let Some(message) = &response.message {
                    self.write_info(message);
                }
                if let Some(footer) = credits_footer(response) {
                    if self.color {
                        println!("{}", style(footer).dim());
                    } else {
                        println!("{}", footer);
                    }
                }
            }
        }
        Ok(())
    }

    /// Writes an error message to stderr.
    pub fn write_error(&self, msg: &str) {
        if self.color {
            eprintln!("{} {}", style("error:").red().bold(), msg);
        } else {
            eprintln!("error: {}", msg);
        }
    }

    /// Writes a warning message to stderr.
    pub fn write_warning(&self, msg: &str) {
        if self.color {
            eprintln!("{} {}", style("warning:").yellow().bold(), msg);
        } else {
            eprintln!("warning: {}", msg);
        }
    }

    pub fn write_info(&self, msg: &str) {
        println!("{}", msg);
    }

    pub fn write_success(&self, msg: &str) {
        if self.color {
            println!("{} {}", style("✓").green().bold(), msg);
        } else {
            println!("✓ {}", msg);
        }
    }
}

/// Summarises credit usage, e.g. `Credits: 2 used, 98 remaining`.
///
/// Returns `None` when the response carried no usage metadata.
pub fn credits_footer<T>(response: &ApiResponse<T>) -> Option<String> {
    let meta = response.meta.as_ref()?;
    let mut footer = format!(
        "Credits: {} used, {} remaining",
        meta.credits_used, meta.credits_remaining
    );
    if let Some(rate) = meta.rate_limit_remaining {
        footer.push_str(&format!(" (rate limit remaining: {})", rate));
    }
    Some(footer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::common::ApiMeta;

    fn response(meta: Option<ApiMeta>) -> ApiResponse<Vec<u32>> {
        ApiResponse {
            success: true,
            data: Vec::new(),
            message: None,
            meta,
            pagination: None,
        }
    }

    #[test]
    fn test_credits_footer() {
        assert_eq!(credits_footer(&response(None)), None);

        let footer = credits_footer(&response(Some(ApiMeta {
            credits_used: 2,
            credits_remaining: 98,
            rate_limit_remaining: None,
        })));
        assert_eq!(footer.as_deref(), Some("Credits: 2 used, 98 remaining"));

        let footer = credits_footer(&response(Some(ApiMeta {
            credits_used: 1,
            credits_remaining: 0,
            rate_limit_remaining: Some(5),
        })));
        assert_eq!(
            footer.as_deref(),
            Some("Credits: 1 used, 0 remaining (rate limit remaining: 5)")
        );
    }

    #[test]
    fn test_default_format_is_table() {
        assert_eq!(OutputFormat::default(), OutputFormat::Table);
        assert_eq!(OutputWriter::new(OutputFormat::Json).format(), OutputFormat::Json);
    }
}
