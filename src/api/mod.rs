mod axis_config;
mod engine;
mod label_format;

pub use axis_config::{AxisLabelLocale, TickEngineConfig, TickLabelPolicy};
pub use engine::TickEngine;

pub use crate::core::AxisTimeZone;
