use serde::{Deserialize, Serialize};

use crate::core::calendar::Calendar;
use crate::core::granularity::{Granularity, TimeUnit, UnitSpans, select_granularity};
use crate::core::types::TickRequest;
use crate::error::AxisResult;

/// The chosen granularity plus the strictly increasing instants it
/// produced, all inside the requested half-open window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickSequence {
    granularity: Granularity,
    instants: Vec<i64>,
}

impl TickSequence {
    #[must_use]
    pub fn granularity(&self) -> Granularity {
        self.granularity
    }

    #[must_use]
    pub fn instants(&self) -> &[i64] {
        &self.instants
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.instants.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.instants.is_empty()
    }
}

/// Selects a calendar-aligned granularity and emits tick instants.
///
/// Ticks land on round wall-clock boundaries for the chosen step and stay
/// put while the window pans, because alignment is anchored to fixed
/// calendar origins rather than to `range.start`: day steps to the
/// day-of-year grid, hour steps to midnight of the start day, minute
/// steps to the top of the hour, second steps to the top of the minute.
///
/// The sequence covers `[range.start, range.end)`; a zero-length range
/// yields an empty sequence in constant time.
pub fn select_ticks<C: Calendar>(request: TickRequest, calendar: &C) -> AxisResult<TickSequence> {
    let range = request.range();
    let start = range.start();
    let end = range.end();

    let spans = UnitSpans {
        days: calendar.whole_days_between(start, end) + 1,
        hours: calendar.whole_hours_between(start, end),
        minutes: calendar.whole_minutes_between(start, end),
        seconds: calendar.whole_seconds_between(start, end),
    };
    let granularity = select_granularity(spans, request.desired_count());

    let step_seconds = granularity.step_seconds();
    let mut next = first_aligned_boundary(start, granularity, calendar)?;

    let mut instants = Vec::new();
    while next < end {
        instants.push(next);
        next += step_seconds;
    }

    Ok(TickSequence {
        granularity,
        instants,
    })
}

/// First boundary at or after `start` that is a whole multiple of the
/// step measured from the granularity's calendar anchor.
fn first_aligned_boundary<C: Calendar>(
    start: i64,
    granularity: Granularity,
    calendar: &C,
) -> AxisResult<i64> {
    let step = granularity.step();
    let unit_seconds = granularity.unit().seconds();

    let mut boundary = match granularity.unit() {
        TimeUnit::Days => {
            // Day ticks snap to the day-of-year grid so month boundaries
            // stay visually stable while the window scrolls through days.
            let ordinal = calendar.day_of_year(start)?;
            let aligned = ceil_to_multiple(ordinal, step);
            calendar.start_of_day(start)? + (aligned - ordinal) * unit_seconds
        }
        TimeUnit::Hours => {
            let hour = calendar.hour_of_day(start)?;
            calendar.start_of_day(start)? + ceil_to_multiple(hour, step) * unit_seconds
        }
        TimeUnit::Minutes => {
            let minute = calendar.minute_of_hour(start)?;
            calendar.start_of_hour(start)? + ceil_to_multiple(minute, step) * unit_seconds
        }
        TimeUnit::Seconds => {
            let second = calendar.second_of_minute(start)?;
            calendar.start_of_minute(start)? + ceil_to_multiple(second, step) * unit_seconds
        }
    };

    // The start can sit inside an already-aligned unit (e.g. 06:30 with a
    // 6-hour step); the boundary then predates the window and moves
    // forward one step.
    while boundary < start {
        boundary += step * unit_seconds;
    }

    Ok(boundary)
}

fn ceil_to_multiple(value: i64, multiple: i64) -> i64 {
    // Equivalent to `value.div_ceil(multiple)` (signed `div_ceil` is still
    // unstable on this toolchain).
    let q = value / multiple;
    let r = value % multiple;
    let div_ceil = if (r > 0 && multiple > 0) || (r < 0 && multiple < 0) {
        q + 1
    } else {
        q
    };
    div_ceil * multiple
}
