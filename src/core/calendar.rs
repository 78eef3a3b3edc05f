use chrono::{DateTime, Datelike, FixedOffset, Timelike, Utc, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::{AxisError, AxisResult};

/// Timezone alignment used for calendar anchors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum AxisTimeZone {
    #[default]
    Utc,
    FixedOffsetMinutes {
        minutes: i16,
    },
}

impl AxisTimeZone {
    #[must_use]
    pub(crate) fn offset_minutes(self) -> i16 {
        match self {
            Self::Utc => 0,
            Self::FixedOffsetMinutes { minutes } => minutes,
        }
    }

    #[must_use]
    pub(crate) fn fixed_offset(self) -> FixedOffset {
        let seconds = i32::from(self.offset_minutes()) * 60;
        FixedOffset::east_opt(seconds)
            .unwrap_or_else(|| FixedOffset::east_opt(0).expect("zero UTC offset is valid"))
    }
}

/// Calendar operations the tick core consumes.
///
/// The core never does calendar math itself; this seam supplies boundary
/// snapping, ordinals, components, and whole-unit spans. Implementations
/// must be deterministic for the lifetime of an engine.
pub trait Calendar {
    /// Midnight of the day containing `instant`, in unix seconds.
    fn start_of_day(&self, instant: i64) -> AxisResult<i64>;

    /// Top of the hour containing `instant`.
    fn start_of_hour(&self, instant: i64) -> AxisResult<i64>;

    /// Top of the minute containing `instant`.
    fn start_of_minute(&self, instant: i64) -> AxisResult<i64>;

    /// 1-based ordinal of the day within its year.
    fn day_of_year(&self, instant: i64) -> AxisResult<i64>;

    fn hour_of_day(&self, instant: i64) -> AxisResult<i64>;

    fn minute_of_hour(&self, instant: i64) -> AxisResult<i64>;

    fn second_of_minute(&self, instant: i64) -> AxisResult<i64>;

    /// Saturday/Sunday test in the calendar's timezone.
    fn is_weekend(&self, instant: i64) -> AxisResult<bool>;

    /// Whole days elapsed between two instants.
    fn whole_days_between(&self, start: i64, end: i64) -> i64 {
        (end - start) / 86_400
    }

    fn whole_hours_between(&self, start: i64, end: i64) -> i64 {
        (end - start) / 3_600
    }

    fn whole_minutes_between(&self, start: i64, end: i64) -> i64 {
        (end - start) / 60
    }

    fn whole_seconds_between(&self, start: i64, end: i64) -> i64 {
        end - start
    }
}

/// `chrono`-backed calendar with a fixed UTC offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedOffsetCalendar {
    offset: FixedOffset,
}

impl FixedOffsetCalendar {
    #[must_use]
    pub fn new(timezone: AxisTimeZone) -> Self {
        Self {
            offset: timezone.fixed_offset(),
        }
    }

    #[must_use]
    pub fn utc() -> Self {
        Self::new(AxisTimeZone::Utc)
    }

    #[must_use]
    pub(crate) fn offset(&self) -> FixedOffset {
        self.offset
    }

    fn local(&self, instant: i64) -> AxisResult<DateTime<FixedOffset>> {
        let utc = DateTime::<Utc>::from_timestamp(instant, 0)
            .ok_or(AxisError::UnrepresentableTime { seconds: instant })?;
        Ok(utc.with_timezone(&self.offset))
    }
}

impl Calendar for FixedOffsetCalendar {
    fn start_of_day(&self, instant: i64) -> AxisResult<i64> {
        let local = self.local(instant)?;
        Ok(instant - i64::from(local.num_seconds_from_midnight()))
    }

    fn start_of_hour(&self, instant: i64) -> AxisResult<i64> {
        let local = self.local(instant)?;
        Ok(instant - i64::from(local.minute()) * 60 - i64::from(local.second()))
    }

    fn start_of_minute(&self, instant: i64) -> AxisResult<i64> {
        let local = self.local(instant)?;
        Ok(instant - i64::from(local.second()))
    }

    fn day_of_year(&self, instant: i64) -> AxisResult<i64> {
        Ok(i64::from(self.local(instant)?.ordinal()))
    }

    fn hour_of_day(&self, instant: i64) -> AxisResult<i64> {
        Ok(i64::from(self.local(instant)?.hour()))
    }

    fn minute_of_hour(&self, instant: i64) -> AxisResult<i64> {
        Ok(i64::from(self.local(instant)?.minute()))
    }

    fn second_of_minute(&self, instant: i64) -> AxisResult<i64> {
        Ok(i64::from(self.local(instant)?.second()))
    }

    fn is_weekend(&self, instant: i64) -> AxisResult<bool> {
        let local = self.local(instant)?;
        Ok(matches!(local.weekday(), Weekday::Sat | Weekday::Sun))
    }
}
