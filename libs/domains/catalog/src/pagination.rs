//! Pagination normalization for the list endpoints.

/// Normalized pagination window.
///
/// Raw `page` and `limit` query values arrive as free-form strings. Anything
/// that does not parse as a positive integer falls back to the default, and
/// `limit` is capped so one request cannot pull the whole table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    /// 1-based page number
    pub page: u64,
    /// Rows per page, in `1..=MAX_LIMIT`
    pub limit: u64,
}

impl PageRequest {
    pub const DEFAULT_LIMIT: u64 = 20;
    pub const MAX_LIMIT: u64 = 100;

    /// Build a window from raw query values. Malformed input degrades to
    /// the defaults rather than failing the request.
    pub fn from_raw(page: Option<&str>, limit: Option<&str>) -> Self {
        let page = parse_positive(page).unwrap_or(1);
        let limit = parse_positive(limit)
            .unwrap_or(Self::DEFAULT_LIMIT)
            .min(Self::MAX_LIMIT);
        Self { page, limit }
    }

    /// Number of rows skipped before this page starts.
    pub fn offset(&self) -> u64 {
        (self.page - 1) * self.limit
    }

    /// Total page count for `total` matching rows.
    pub fn total_pages(&self, total: u64) -> u64 {
        total.div_ceil(self.limit)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 1,
            limit: Self::DEFAULT_LIMIT,
        }
    }
}

fn parse_positive(raw: Option<&str>) -> Option<u64> {
    raw.and_then(|value| value.trim().parse::<u64>().ok())
        .filter(|value| *value > 0)
}
