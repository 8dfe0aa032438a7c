use chrono::{FixedOffset, Utc};
use std::fmt;
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::time::FormatTime;

/// Wall-clock timestamps in a fixed offset, 12-hour clock.
#[derive(Debug, Clone, Copy)]
pub struct TimezoneTimer {
    timezone: FixedOffset,
}

impl TimezoneTimer {
    pub fn new(timezone: FixedOffset) -> Self {
        Self { timezone }
    }
}

impl FormatTime for TimezoneTimer {
    fn format_time(&self, w: &mut Writer<'_>) -> fmt::Result {
        let local_time = Utc::now().with_timezone(&self.timezone);
        write!(w, "{}", local_time.format("%Y-%m-%d %I:%M:%S%.3f %p"))
    }
}
