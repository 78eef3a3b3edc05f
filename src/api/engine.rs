use tracing::{debug, trace};

use crate::core::{
    Calendar, FixedOffsetCalendar, Granularity, TickRequest, TickSequence, TimeRange, TimeRegion,
    select_ticks, weekend_regions,
};
use crate::error::{AxisError, AxisResult};

use super::TickEngineConfig;
use super::label_format::{format_tick_label, resolve_tick_label_pattern};

/// Host-facing tick facade bundling a calendar with label configuration.
///
/// All operations take `&self`; the engine holds no mutable state between
/// queries and is safe to share across threads.
#[derive(Debug)]
pub struct TickEngine {
    config: TickEngineConfig,
    calendar: FixedOffsetCalendar,
}

impl TickEngine {
    pub fn new(config: TickEngineConfig) -> AxisResult<Self> {
        let config = config.validate()?;
        Ok(Self {
            config,
            calendar: FixedOffsetCalendar::new(config.timezone),
        })
    }

    #[must_use]
    pub fn config(&self) -> TickEngineConfig {
        self.config
    }

    /// Replaces the engine configuration; the calendar follows the
    /// configured timezone.
    pub fn set_config(&mut self, config: TickEngineConfig) -> AxisResult<()> {
        let config = config.validate()?;
        self.config = config;
        self.calendar = FixedOffsetCalendar::new(config.timezone);
        Ok(())
    }

    /// Selects granularity and tick instants for a validated request.
    pub fn select_ticks(&self, request: TickRequest) -> AxisResult<TickSequence> {
        let ticks = select_ticks(request, &self.calendar)?;
        debug!(
            desired = request.desired_count(),
            produced = ticks.len(),
            granularity = ?ticks.granularity(),
            "selected axis ticks"
        );
        Ok(ticks)
    }

    /// Accepts the host's logical f64 seconds and quantizes to whole
    /// seconds before selection.
    ///
    /// Non-finite endpoints are rejected; otherwise this is equivalent to
    /// building a `TickRequest` from the quantized range.
    pub fn select_ticks_logical(
        &self,
        start: f64,
        end: f64,
        desired_count: usize,
    ) -> AxisResult<TickSequence> {
        let range = TimeRange::new(quantize_unix_seconds(start)?, quantize_unix_seconds(end)?)?;
        self.select_ticks(TickRequest::new(range, desired_count)?)
    }

    /// Formats one tick label under the engine's locale and timezone.
    pub fn format_tick_label(&self, instant: i64, granularity: Granularity) -> AxisResult<String> {
        let pattern = resolve_tick_label_pattern(self.config.policy, granularity);
        format_tick_label(instant, pattern, self.config.locale, self.calendar.offset())
    }

    /// Labels for every instant of a sequence, in order.
    pub fn tick_labels(&self, ticks: &TickSequence) -> AxisResult<Vec<String>> {
        ticks
            .instants()
            .iter()
            .map(|&instant| self.format_tick_label(instant, ticks.granularity()))
            .collect()
    }

    /// True when the instant sits on local midnight. Downstream renderers
    /// use this to emphasize day boundaries among sub-day ticks.
    pub fn is_major_tick(&self, instant: i64) -> AxisResult<bool> {
        Ok(self.calendar.hour_of_day(instant)? == 0
            && self.calendar.minute_of_hour(instant)? == 0
            && self.calendar.second_of_minute(instant)? == 0)
    }

    /// Weekend day spans overlapping `range`, for downstream shading.
    pub fn weekend_regions(&self, range: TimeRange) -> AxisResult<Vec<TimeRegion>> {
        let regions = weekend_regions(range, &self.calendar)?;
        trace!(count = regions.len(), "computed weekend regions");
        Ok(regions)
    }
}

fn quantize_unix_seconds(value: f64) -> AxisResult<i64> {
    if !value.is_finite() {
        return Err(AxisError::InvalidArgument(
            "logical time must be finite".to_owned(),
        ));
    }

    let seconds = value.round();
    if seconds >= (i64::MAX as f64) || seconds <= (i64::MIN as f64) {
        return Err(AxisError::InvalidArgument(
            "logical time is outside the representable unix range".to_owned(),
        ));
    }
    Ok(seconds as i64)
}
