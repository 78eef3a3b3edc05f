use serde::{Deserialize, Serialize};

use crate::core::calendar::Calendar;
use crate::core::types::TimeRange;
use crate::error::AxisResult;

const DAY_SECONDS: i64 = 86_400;

/// Half-open `[start, end)` span of one weekend day, in unix seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeRegion {
    pub start: i64,
    pub end: i64,
}

/// Collects one region per Saturday or Sunday whose calendar day overlaps
/// `range`, in the calendar's timezone.
///
/// Consecutive weekend days are reported separately so downstream shading
/// can keep per-day styling; merging is the consumer's call.
pub fn weekend_regions<C: Calendar>(range: TimeRange, calendar: &C) -> AxisResult<Vec<TimeRegion>> {
    let first_day = calendar.start_of_day(range.start())?;
    let last_day = calendar.start_of_day(range.end())?;
    let day_count = calendar.whole_days_between(first_day, last_day) + 1;

    let mut regions = Vec::new();
    let mut day = first_day;
    for _ in 0..day_count {
        if calendar.is_weekend(day)? {
            regions.push(TimeRegion {
                start: day,
                end: day + DAY_SECONDS,
            });
        }
        day += DAY_SECONDS;
    }

    Ok(regions)
}
