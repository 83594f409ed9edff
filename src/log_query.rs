//! Resolution of log query parameters into a date range and a count.

use crate::dates::parse_timestamp;
use crate::models::LogParams;

pub const DEFAULT_LIMIT: usize = 100;

/// A resolved log query. Bounds are inclusive epoch milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogQuery {
    pub lower: i64,
    pub upper: i64,
    pub limit: usize,
}

impl LogQuery {
    /// Resolve raw query-string values.
    ///
    /// A missing or unparseable `from` means the epoch, a missing or
    /// unparseable `to` means `now_ms`, and a missing or unparseable
    /// `limit` means [`DEFAULT_LIMIT`]. Reversed bounds are swapped.
    pub fn resolve(params: &LogParams, now_ms: i64) -> Self {
        let from = params
            .from
            .as_deref()
            .and_then(parse_timestamp)
            .unwrap_or(0);
        let to = params
            .to
            .as_deref()
            .and_then(parse_timestamp)
            .unwrap_or(now_ms);
        let limit = params
            .limit
            .as_deref()
            .and_then(|l| l.trim().parse().ok())
            .unwrap_or(DEFAULT_LIMIT);

        Self {
            lower: from.min(to),
            upper: from.max(to),
            limit,
        }
    }

    /// `limit` as an SQL `LIMIT` value.
    pub fn sql_limit(&self) -> i64 {
        i64::try_from(self.limit).unwrap_or(i64::MAX)
    }
}
