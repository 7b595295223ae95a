use chrono::{FixedOffset, NaiveDateTime, Offset, Utc};
use tracing::warn;

use shared_config::AppConfig;

/// Source of the clinic-local "now" used for slot generation.
pub trait Clock: Send + Sync {
    fn now(&self) -> NaiveDateTime;
}

#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    offset: FixedOffset,
}

impl SystemClock {
    pub fn new(offset: FixedOffset) -> Self {
        Self { offset }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        let offset = FixedOffset::east_opt(config.clinic_utc_offset_minutes * 60).unwrap_or_else(|| {
            warn!(
                "Invalid clinic offset {} minutes, using UTC",
                config.clinic_utc_offset_minutes
            );
            Utc.fix()
        });
        Self::new(offset)
    }
}

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Utc::now().with_timezone(&self.offset).naive_local()
    }
}

/// Always returns the same instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}
