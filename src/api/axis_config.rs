use serde::{Deserialize, Serialize};

use crate::core::AxisTimeZone;
use crate::error::{AxisError, AxisResult};

/// Locale preset used by tick label formatting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum AxisLabelLocale {
    #[default]
    EnUs,
    EsEs,
}

/// Built-in policy used for tick labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum TickLabelPolicy {
    /// Pick the date/time pattern from the tick granularity.
    #[default]
    GranularityAdaptive,
    /// Always render a full date-time stamp.
    DateTime { show_seconds: bool },
}

/// Engine bootstrap configuration.
///
/// This type is serializable so host applications can persist/load axis
/// setup without inventing their own ad-hoc format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct TickEngineConfig {
    pub locale: AxisLabelLocale,
    pub policy: TickLabelPolicy,
    pub timezone: AxisTimeZone,
}

impl TickEngineConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the label locale preset.
    #[must_use]
    pub fn with_locale(mut self, locale: AxisLabelLocale) -> Self {
        self.locale = locale;
        self
    }

    /// Sets the label pattern policy.
    #[must_use]
    pub fn with_policy(mut self, policy: TickLabelPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Sets the timezone calendar anchors and labels are expressed in.
    #[must_use]
    pub fn with_timezone(mut self, timezone: AxisTimeZone) -> Self {
        self.timezone = timezone;
        self
    }

    pub(super) fn validate(self) -> AxisResult<Self> {
        if let AxisTimeZone::FixedOffsetMinutes { minutes } = self.timezone {
            if i32::from(minutes).abs() >= 24 * 60 {
                return Err(AxisError::InvalidData(format!(
                    "timezone offset of {minutes} minutes is outside the valid UTC offset range"
                )));
            }
        }
        Ok(self)
    }

    /// Serializes config to pretty JSON for debug/config files.
    pub fn to_json_pretty(self) -> AxisResult<String> {
        serde_json::to_string_pretty(&self)
            .map_err(|e| AxisError::InvalidData(format!("failed to serialize config: {e}")))
    }

    /// Deserializes config from JSON.
    pub fn from_json_str(input: &str) -> AxisResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| AxisError::InvalidData(format!("failed to parse config: {e}")))
    }
}
