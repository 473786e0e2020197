use std::fmt;
use time::format_description::FormatItem;
use time::macros::format_description;
use time::{Duration, Time};

pub const OPENING_HOUR: i64 = 9;
pub const CLOSING_HOUR: i64 = 17;
pub const SLOT_MINUTES: i64 = 30;

const CLOCK_FORMAT: &[FormatItem<'static>] =
    format_description!("[hour repr:12 padding:none]:[minute] [period]");

/// Half-hour interval of the business day, rendered as `"9:00 AM - 9:30 AM"`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Timeslot {
    pub start: Time,
    pub end: Time,
}

impl fmt::Display for Timeslot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let start = self.start.format(CLOCK_FORMAT).map_err(|_| fmt::Error)?;
        let end = self.end.format(CLOCK_FORMAT).map_err(|_| fmt::Error)?;
        write!(f, "{} - {}", start, end)
    }
}

/// Every bookable slot between opening and closing, in order.
pub fn timeslots() -> Vec<Timeslot> {
    let slot_count = (CLOSING_HOUR - OPENING_HOUR) * 60 / SLOT_MINUTES;
    let opening = Time::MIDNIGHT + Duration::hours(OPENING_HOUR);

    (0..slot_count)
        .map(|slot| {
            let start = opening + Duration::minutes(slot * SLOT_MINUTES);
            Timeslot {
                start,
                end: start + Duration::minutes(SLOT_MINUTES),
            }
        })
        .collect()
}

pub fn generate_timeslots() -> Vec<String> {
    timeslots()
        .iter()
        .map(Timeslot::to_string)
        .collect()
}
