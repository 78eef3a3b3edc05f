//! tick-axis-rs: calendar-aware time-axis tick selection.
//!
//! This crate isolates the adaptive tick-granularity logic of a charting
//! time axis as a pure, renderer-agnostic core: a visible time range plus
//! a desired label count in, calendar-aligned tick instants out. Alignment
//! is anchored to fixed calendar origins so ticks do not jitter while the
//! host pans or zooms the window.

pub mod api;
pub mod core;
pub mod error;
pub mod telemetry;

pub use api::{TickEngine, TickEngineConfig};
pub use error::{AxisError, AxisResult};
