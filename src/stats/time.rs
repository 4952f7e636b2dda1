use std::fmt;

use chrono::Weekday;

use super::mode::mode;
use super::UNAVAILABLE;
use crate::data::model::{month_name, weekday_name, Dataset};

/// Most frequent travel times. Every field is `None` for an empty dataset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeStats {
    pub month: Option<u32>,
    pub weekday: Option<Weekday>,
    pub hour: Option<u32>,
}

pub fn time_stats(dataset: &Dataset) -> TimeStats {
    let trips = &dataset.records;
    TimeStats {
        month: mode(trips.iter().map(|r| r.month)),
        weekday: mode(trips.iter().map(|r| r.weekday)),
        hour: mode(trips.iter().map(|r| r.hour)),
    }
}

impl fmt::Display for TimeStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let month = self.month.and_then(month_name).unwrap_or(UNAVAILABLE);
        let day = self.weekday.map(weekday_name).unwrap_or(UNAVAILABLE);
        let hour = self
            .hour
            .map(|h| format!("{h}:00"))
            .unwrap_or_else(|| UNAVAILABLE.to_string());

        writeln!(f, "The most frequent month is {month}")?;
        writeln!(f, "The most frequent day of the week is {day}")?;
        writeln!(f, "The most frequent start time of the day is {hour}")
    }
}
