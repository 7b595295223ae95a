// libs/appointment-cell/src/services/slots.rs
use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime, Timelike};

use crate::models::{DayBucket, Slot};

/// Clinic business window used to generate bookable slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotSchedule {
    pub open_hour: u32,
    pub close_hour: u32,
    pub step_minutes: i64,
    pub days: usize,
}

impl Default for SlotSchedule {
    fn default() -> Self {
        Self {
            open_hour: 10,
            close_hour: 21,
            step_minutes: 30,
            days: 7,
        }
    }
}

/// Seven days of half-hour slots between 10:00 and 21:00, starting today.
pub fn generate_slots(now: NaiveDateTime) -> Vec<DayBucket> {
    SlotSchedule::default().generate(now)
}

impl SlotSchedule {
    /// One bucket per day, index `i` covering `now.date() + i`.
    pub fn generate(&self, now: NaiveDateTime) -> Vec<DayBucket> {
        let today = now.date();

        (0..self.days)
            .map(|offset| {
                let Some(date) = today.checked_add_signed(Duration::days(offset as i64)) else {
                    return DayBucket::new();
                };

                let start = if offset == 0 {
                    self.same_day_start(now.time())
                } else {
                    NaiveTime::from_hms_opt(self.open_hour, 0, 0)
                };

                match start {
                    Some(start) => self.day_slots(date, start),
                    None => DayBucket::new(),
                }
            })
            .collect()
    }

    /// First candidate slot for today. Past opening the hour is bumped by one
    /// and the minute snapped to :00 or :30 (never a true ceiling). `None`
    /// when that lands past midnight.
    fn same_day_start(&self, now: NaiveTime) -> Option<NaiveTime> {
        let hour = if now.hour() > self.open_hour {
            now.hour() + 1
        } else {
            self.open_hour
        };
        let minute = if now.minute() > 30 { 30 } else { 0 };

        NaiveTime::from_hms_opt(hour, minute, 0)
    }

    fn day_slots(&self, date: NaiveDate, start: NaiveTime) -> DayBucket {
        let Some(close) = date.and_hms_opt(self.close_hour, 0, 0) else {
            return DayBucket::new();
        };

        let step = Duration::minutes(self.step_minutes.max(1));
        let mut current = date.and_time(start);
        let mut bucket = DayBucket::new();

        while current < close {
            bucket.push(Slot {
                datetime: current,
                time: format_slot_label(current),
            });
            current += step;
        }

        bucket
    }
}

/// `"HH:MM AM"` style label, e.g. `"01:30 PM"`.
pub fn format_slot_label(datetime: NaiveDateTime) -> String {
    datetime.format("%I:%M %p").to_string()
}
