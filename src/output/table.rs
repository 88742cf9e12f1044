//
//  shopsavvy
//  output/table.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Table Output Formatting
//!
//! Helpers for rendering API payloads as terminal tables with `comfy_table`.
//!
//! ## Example
//!
//! ```rust,ignore
//! use shopsavvy::output::TableBuilder;
//!
//! let table = TableBuilder::new()
//!     .headers(["Retailer", "Price"])
//!     .row(["amazon", "$249.99"])
//!     .build();
//! println!("{}", table);
//! ```

use comfy_table::{presets::UTF8_FULL, Cell, Color, ContentArrangement, Table};

/// Creates a new table with UTF-8 borders and dynamic column widths.
pub fn create_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

/// A builder for constructing tables with a fluent API.
///
/// Headers are drawn in cyan when color is enabled. Color support is
/// detected on creation; use [`color`](TableBuilder::color) to override it.
pub struct TableBuilder {
    table: Table,
    color: bool,
}

impl TableBuilder {
    pub fn new() -> Self {
        Self {
            table: create_table(),
            color: console::colors_enabled(),
        }
    }

    /// Sets whether color output is enabled.
    pub fn color(mut self, enabled: bool) -> Self {
        self.color = enabled;
        self
    }

    /// Sets the table headers. Call this before adding rows.
    pub fn headers<I, S>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let headers: Vec<String> = headers.into_iter().map(|s| s.into()).collect();
        if self.color {
            let cells: Vec<Cell> = headers.iter().map(|h| Cell::new(h).fg(Color::Cyan)).collect();
            self.table.set_header(cells);
        } else {
            self.table.set_header(headers);
        }
        self
    }

    pub fn row<I, S>(mut self, cells: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let row: Vec<String> = cells.into_iter().map(|s| s.into()).collect();
        self.table.add_row(row);
        self
    }

    /// Adds several rows at once.
    pub fn rows<I, R, S>(mut self, rows: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for row in rows {
            let row: Vec<String> = row.into_iter().map(|s| s.into()).collect();
            self.table.add_row(row);
        }
        self
    }

    pub fn build(self) -> Table {
        self.table
    }
}

impl Default for TableBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Formats a price with its currency.
///
/// USD amounts get a `$` prefix; other currencies are suffixed with their
/// code. A missing price renders as `-`.
///
/// ```rust
/// use shopsavvy::output::format_price;
///
/// assert_eq!(format_price(Some(249.99), Some("USD")), "$249.99");
/// assert_eq!(format_price(Some(19.5), Some("EUR")), "19.50 EUR");
/// assert_eq!(format_price(None, Some("USD")), "-");
/// ```
pub fn format_price(price: Option<f64>, currency: Option<&str>) -> String {
    match (price, currency) {
        (None, _) => "-".to_string(),
        (Some(price), None) | (Some(price), Some("USD")) => format!("${:.2}", price),
        (Some(price), Some(code)) => format!("{:.2} {}", price, code),
    }
}

/// Formats an availability string with semantic colors.
///
/// Matching is case-insensitive. Unknown values are returned unstyled.
pub fn format_availability(availability: &str, color: bool) -> String {
    if !color {
        return availability.to_string();
    }

    use console::style;
    match availability.to_lowercase().as_str() {
        "in_stock" | "in stock" | "available" => style(availability).green().to_string(),
        "limited" | "low_stock" | "preorder" => style(availability).yellow().to_string(),
        "out_of_stock" | "out of stock" | "unavailable" | "discontinued" => {
            style(availability).red().to_string()
        }
        _ => availability.to_string(),
    }
}

/// Formats a boolean value as `Yes` or `No`.
pub fn format_bool(value: bool, color: bool) -> String {
    if color {
        use console::style;
        if value {
            style("Yes").green().to_string()
        } else {
            style("No").dim().to_string()
        }
    } else if value {
        "Yes".to_string()
    } else {
        "No".to_string()
    }
}

/// Renders an optional field, using `-` for missing values.
pub fn or_dash(value: Option<&str>) -> String {
    value.filter(|v| !v.is_empty()).unwrap_or("-").to_string()
}

/// Truncates a string to at most `max_len` characters, ending in `...`.
///
/// Counts characters rather than bytes, so product titles with accents or
/// symbols are never split mid-character.
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len > 3 {
        let head: String = s.chars().take(max_len - 3).collect();
        format!("{}...", head)
    } else {
        s.chars().take(max_len).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(Some(5.0), None), "$5.00");
        assert_eq!(format_price(Some(1299.0), Some("GBP")), "1299.00 GBP");
        assert_eq!(format_price(None, None), "-");
    }

    #[test]
    fn test_format_availability_without_color() {
        assert_eq!(format_availability("in_stock", false), "in_stock");
    }

    #[test]
    fn test_or_dash() {
        assert_eq!(or_dash(Some("Apple")), "Apple");
        assert_eq!(or_dash(Some("")), "-");
        assert_eq!(or_dash(None), "-");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("hello", 10), "hello");
        assert_eq!(truncate("hello world", 8), "hello...");
        assert_eq!(truncate("hello", 3), "hel");
        assert_eq!(truncate("Crème brûlée torch", 8), "Crème...");
    }

    #[test]
    fn test_builder_renders_rows() {
        let table = TableBuilder::new()
            .color(false)
            .headers(["Retailer", "Price"])
            .rows(vec![vec!["amazon", "$1.00"], vec!["walmart", "$2.00"]])
            .build();
        let rendered = table.to_string();
        assert!(rendered.contains("Retailer"));
        assert!(rendered.contains("walmart"));
    }
}
