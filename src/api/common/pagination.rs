//
//  shopsavvy
//  api/common/pagination.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Pagination Types for ShopSavvy Search Responses
//!
//! Keyword search is the only paginated endpoint. It uses offset-based
//! pagination: request pages with `limit` and `offset`, and read the totals
//! back from the `pagination` object in the response envelope.
//!
//! # Example
//!
//! ```rust
//! use shopsavvy::api::common::PaginationInfo;
//!
//! let page = PaginationInfo { total: 45, limit: 20, offset: 20, returned: 20 };
//! assert!(page.has_more());
//! assert_eq!(page.next_offset(), Some(40));
//! ```

use serde::{Deserialize, Serialize};

/// Offset-based pagination details returned by the search endpoint.
///
/// # Fields
///
/// | Field | Type | Description |
/// |-------|------|-------------|
/// | `total` | `u64` | Total number of matching products |
/// | `limit` | `u64` | Page size that was applied |
/// | `offset` | `u64` | Index of the first product in this page |
/// | `returned` | `u64` | Number of products actually returned |
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PaginationInfo {
    #[serde(default)]
    pub total: u64,

    #[serde(default)]
    pub limit: u64,

    #[serde(default)]
    pub offset: u64,

    #[serde(default)]
    pub returned: u64,
}

impl PaginationInfo {
    /// Checks if more results exist past this page.
    ///
    /// # Returns
    ///
    /// - `true` - `offset + returned` is still below `total`
    /// - `false` - This is the last page, or the page was empty
    pub fn has_more(&self) -> bool {
        self.returned > 0 && self.end() < self.total
    }

    /// Returns the offset to request for the next page, if there is one.
    pub fn next_offset(&self) -> Option<u64> {
        self.has_more().then(|| self.end())
    }

    /// One past the last result on this page, saturating at `u64::MAX`.
    pub fn end(&self) -> u64 {
        self.offset.saturating_add(self.returned)
    }
}
