pub mod calendar;
pub mod granularity;
pub mod regions;
pub mod ticks;
pub mod types;

pub use calendar::{AxisTimeZone, Calendar, FixedOffsetCalendar};
pub use granularity::{Granularity, TimeUnit};
pub use regions::{TimeRegion, weekend_regions};
pub use ticks::{TickSequence, select_ticks};
pub use types::{TickRequest, TimeRange};
