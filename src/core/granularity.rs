use serde::{Deserialize, Serialize};

/// Calendar units a tick step can be expressed in, coarsest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimeUnit {
    Days,
    Hours,
    Minutes,
    Seconds,
}

impl TimeUnit {
    /// Length of one unit in seconds.
    #[must_use]
    pub fn seconds(self) -> i64 {
        match self {
            Self::Days => 86_400,
            Self::Hours => 3_600,
            Self::Minutes => 60,
            Self::Seconds => 1,
        }
    }
}

// Hand-tuned step tables. Every entry divides its unit's parent span
// (24 hours, 60 minutes, 60 seconds) so aligned ticks land on familiar
// wall-clock boundaries; the values are constants, never derived.
pub(crate) const HOURS_DIVISORS: [i64; 6] = [12, 6, 4, 3, 2, 1];
pub(crate) const MINUTES_DIVISORS: [i64; 8] = [30, 20, 15, 10, 5, 3, 2, 1];
pub(crate) const SECONDS_DIVISORS: [i64; 8] = [30, 20, 15, 10, 5, 3, 2, 1];

/// A concrete calendar-aligned tick step: unit plus step multiplier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Granularity {
    Days { step: i64 },
    Hours { step: i64 },
    Minutes { step: i64 },
    Seconds { step: i64 },
}

impl Granularity {
    #[must_use]
    pub fn unit(self) -> TimeUnit {
        match self {
            Self::Days { .. } => TimeUnit::Days,
            Self::Hours { .. } => TimeUnit::Hours,
            Self::Minutes { .. } => TimeUnit::Minutes,
            Self::Seconds { .. } => TimeUnit::Seconds,
        }
    }

    /// Step multiplier within the unit, always >= 1.
    #[must_use]
    pub fn step(self) -> i64 {
        match self {
            Self::Days { step }
            | Self::Hours { step }
            | Self::Minutes { step }
            | Self::Seconds { step } => step,
        }
    }

    /// Full step length in seconds.
    #[must_use]
    pub fn step_seconds(self) -> i64 {
        self.unit().seconds() * self.step()
    }
}

/// Whole-unit spans of a time range, as reported by the calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct UnitSpans {
    /// Whole days between the endpoints plus one, so the start day counts.
    pub(crate) days: i64,
    pub(crate) hours: i64,
    pub(crate) minutes: i64,
    pub(crate) seconds: i64,
}

/// Picks the coarsest unit whose span covers `desired_count`, then the
/// largest table divisor the integer per-label span still covers.
///
/// Unit selection is strictly ordered: a span that qualifies at the day
/// level never falls through to hours, regardless of how the finer step
/// would round.
#[must_use]
pub(crate) fn select_granularity(spans: UnitSpans, desired_count: usize) -> Granularity {
    let desired = desired_count as i64;

    if spans.days >= desired {
        let step = (spans.days / desired).max(1);
        return Granularity::Days { step };
    }

    if spans.hours >= desired {
        let step = first_fitting_divisor(&HOURS_DIVISORS, spans.hours, desired);
        return Granularity::Hours { step };
    }

    if spans.minutes >= desired {
        let step = first_fitting_divisor(&MINUTES_DIVISORS, spans.minutes, desired);
        return Granularity::Minutes { step };
    }

    let step = first_fitting_divisor(&SECONDS_DIVISORS, spans.seconds, desired);
    Granularity::Seconds { step }
}

/// First table entry the integer per-label span still covers; 1 otherwise.
fn first_fitting_divisor(table: &[i64], span: i64, desired: i64) -> i64 {
    let per_label = span / desired;
    table
        .iter()
        .copied()
        .find(|&divisor| per_label >= divisor)
        .unwrap_or(1)
}
