use chrono::{DateTime, FixedOffset, Utc};

use crate::core::Granularity;
use crate::error::{AxisError, AxisResult};

use super::{AxisLabelLocale, TickLabelPolicy};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum TickLabelPattern {
    Date,
    DateMinute,
    DateSecond,
    TimeMinute,
    TimeSecond,
}

/// Maps policy plus granularity onto a concrete pattern.
///
/// Adaptive labeling keeps day ticks as dates and sub-day ticks as
/// time-of-day; seconds only appear when the step itself is in seconds.
pub(super) fn resolve_tick_label_pattern(
    policy: TickLabelPolicy,
    granularity: Granularity,
) -> TickLabelPattern {
    match policy {
        TickLabelPolicy::DateTime { show_seconds } => {
            if show_seconds {
                TickLabelPattern::DateSecond
            } else {
                TickLabelPattern::DateMinute
            }
        }
        TickLabelPolicy::GranularityAdaptive => match granularity {
            Granularity::Days { .. } => TickLabelPattern::Date,
            Granularity::Hours { .. } | Granularity::Minutes { .. } => TickLabelPattern::TimeMinute,
            Granularity::Seconds { .. } => TickLabelPattern::TimeSecond,
        },
    }
}

pub(super) fn format_tick_label(
    instant: i64,
    pattern: TickLabelPattern,
    locale: AxisLabelLocale,
    offset: FixedOffset,
) -> AxisResult<String> {
    let dt = DateTime::<Utc>::from_timestamp(instant, 0)
        .ok_or(AxisError::UnrepresentableTime { seconds: instant })?;
    let local_dt = dt.with_timezone(&offset);

    let pattern = match (locale, pattern) {
        (AxisLabelLocale::EnUs, TickLabelPattern::Date) => "%Y-%m-%d",
        (AxisLabelLocale::EnUs, TickLabelPattern::DateMinute) => "%Y-%m-%d %H:%M",
        (AxisLabelLocale::EnUs, TickLabelPattern::DateSecond) => "%Y-%m-%d %H:%M:%S",
        (AxisLabelLocale::EnUs, TickLabelPattern::TimeMinute) => "%H:%M",
        (AxisLabelLocale::EnUs, TickLabelPattern::TimeSecond) => "%H:%M:%S",
        (AxisLabelLocale::EsEs, TickLabelPattern::Date) => "%d/%m/%Y",
        (AxisLabelLocale::EsEs, TickLabelPattern::DateMinute) => "%d/%m/%Y %H:%M",
        (AxisLabelLocale::EsEs, TickLabelPattern::DateSecond) => "%d/%m/%Y %H:%M:%S",
        (AxisLabelLocale::EsEs, TickLabelPattern::TimeMinute) => "%H:%M",
        (AxisLabelLocale::EsEs, TickLabelPattern::TimeSecond) => "%H:%M:%S",
    };
    Ok(local_dt.format(pattern).to_string())
}
