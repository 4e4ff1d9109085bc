//! Page/limit handling shared by every list endpoint

pub const DEFAULT_PAGE: u64 = 1;
pub const DEFAULT_LIMIT: u64 = 10;
pub const MAX_LIMIT: u64 = 100;

/// Largest offset the database accepts (SQLite binds it as a signed 64-bit integer).
const MAX_OFFSET: u64 = i64::MAX as u64;

/// A resolved page window. `page` is 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: u64,
    pub limit: u64,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl Pagination {
    pub fn new(page: u64, limit: u64) -> Self {
        Self {
            page: page.max(1),
            limit: limit.clamp(1, MAX_LIMIT),
        }
    }

    /// Resolve raw query-string values. Anything that is not a number >= 1
    /// falls back to the default; fractions are truncated.
    pub fn from_raw(page: Option<&str>, limit: Option<&str>) -> Self {
        Self::new(
            parse_positive(page).unwrap_or(DEFAULT_PAGE),
            parse_positive(limit).unwrap_or(DEFAULT_LIMIT),
        )
    }

    /// Rows to skip before this page starts.
    pub fn offset(&self) -> u64 {
        (self.page - 1).saturating_mul(self.limit).min(MAX_OFFSET)
    }
}

fn parse_positive(raw: Option<&str>) -> Option<u64> {
    let value: f64 = raw?.trim().parse().ok()?;
    if value.is_finite() && value >= 1.0 {
        // `as` saturates, so absurd pages simply land past the end
        Some(value.trunc() as u64)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_missing() {
        let p = Pagination::from_raw(None, None);
        assert_eq!(p, Pagination { page: 1, limit: 10 });
        assert_eq!(p.offset(), 0);
    }

    #[test]
    fn parses_numbers_and_truncates() {
        let p = Pagination::from_raw(Some("3"), Some("2.9"));
        assert_eq!(p, Pagination { page: 3, limit: 2 });
        assert_eq!(p.offset(), 4);
    }

    #[test]
    fn falls_back_on_garbage_zero_and_negative() {
        assert_eq!(Pagination::from_raw(Some("abc"), Some("")), Pagination::default());
        assert_eq!(Pagination::from_raw(Some("0"), Some("-5")), Pagination::default());
        assert_eq!(Pagination::from_raw(Some("NaN"), Some("inf")), Pagination::default());
    }

    #[test]
    fn huge_pages_keep_offset_in_range() {
        let p = Pagination::from_raw(Some("1e30"), Some("100"));
        assert_eq!(p.offset(), i64::MAX as u64);

        let p = Pagination::from_raw(Some("100000000000000000"), Some("100"));
        assert_eq!(p.offset(), i64::MAX as u64);
    }

    #[test]
    fn caps_limit() {
        assert_eq!(Pagination::from_raw(None, Some("5000")).limit, MAX_LIMIT);
    }
}
