use serde::{Deserialize, Serialize};

use crate::error::{AxisError, AxisResult};

/// Wall-clock window in unix seconds, `start <= end`.
///
/// Tick emission treats the window as half-open: a tick may land exactly
/// on `start` but never on `end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeRange {
    start: i64,
    end: i64,
}

impl TimeRange {
    pub fn new(start: i64, end: i64) -> AxisResult<Self> {
        if start > end {
            return Err(AxisError::InvalidArgument(format!(
                "time range start {start} exceeds end {end}"
            )));
        }
        Ok(Self { start, end })
    }

    #[must_use]
    pub fn start(self) -> i64 {
        self.start
    }

    #[must_use]
    pub fn end(self) -> i64 {
        self.end
    }

    #[must_use]
    pub fn span_seconds(self) -> i64 {
        self.end - self.start
    }

    #[must_use]
    pub fn is_empty(self) -> bool {
        self.start == self.end
    }
}

/// A tick query: the visible window plus a target label count.
///
/// `desired_count` is a target, not a guarantee; granularity rounding may
/// produce fewer or more ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickRequest {
    range: TimeRange,
    desired_count: usize,
}

impl TickRequest {
    pub fn new(range: TimeRange, desired_count: usize) -> AxisResult<Self> {
        if desired_count == 0 {
            return Err(AxisError::InvalidArgument(
                "desired tick count must be > 0".to_owned(),
            ));
        }
        Ok(Self {
            range,
            desired_count,
        })
    }

    #[must_use]
    pub fn range(self) -> TimeRange {
        self.range
    }

    #[must_use]
    pub fn desired_count(self) -> usize {
        self.desired_count
    }
}
