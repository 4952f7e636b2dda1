use chrono::{Datelike, Month, NaiveDateTime, Timelike, Weekday};

// ---------------------------------------------------------------------------
// TripRecord – one row of a city file
// ---------------------------------------------------------------------------

/// A single bikeshare trip with its calendar fields derived at load time.
#[derive(Debug, Clone, PartialEq)]
pub struct TripRecord {
    pub start_time: NaiveDateTime,
    /// Absent when the source has no `End Time` column or the cell is empty.
    pub end_time: Option<NaiveDateTime>,
    pub start_station: String,
    pub end_station: String,
    /// Trip duration in seconds.
    pub duration_secs: f64,
    pub user_type: Option<String>,
    pub gender: Option<String>,
    pub birth_year: Option<i32>,

    /// Derived: month number, 1–12.
    pub month: u32,
    /// Derived: day of week of `start_time`.
    pub weekday: Weekday,
    /// Derived: start hour, 0–23.
    pub hour: u32,
}

impl TripRecord {
    /// Build a record and compute its derived fields from `start_time`.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        start_time: NaiveDateTime,
        end_time: Option<NaiveDateTime>,
        start_station: String,
        end_station: String,
        duration_secs: f64,
        user_type: Option<String>,
        gender: Option<String>,
        birth_year: Option<i32>,
    ) -> Self {
        Self {
            month: start_time.month(),
            weekday: start_time.weekday(),
            hour: start_time.hour(),
            start_time,
            end_time,
            start_station,
            end_station,
            duration_secs,
            user_type,
            gender,
            birth_year,
        }
    }
}

// ---------------------------------------------------------------------------
// Schema – which optional columns the source file carries
// ---------------------------------------------------------------------------

/// Capability flags, decided once from the CSV header.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Schema {
    pub has_end_time: bool,
    pub has_gender: bool,
    pub has_birth_year: bool,
}

// ---------------------------------------------------------------------------
// Dataset – ordered trips for one city
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    pub records: Vec<TripRecord>,
    pub schema: Schema,
}

impl Dataset {
    pub fn new(records: Vec<TripRecord>, schema: Schema) -> Self {
        Self { records, schema }
    }

    /// Number of trips.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Calendar labels
// ---------------------------------------------------------------------------

/// "January" for 1, …; `None` outside 1–12.
pub fn month_name(month: u32) -> Option<&'static str> {
    u8::try_from(month)
        .ok()
        .and_then(|m| Month::try_from(m).ok())
        .map(|m| m.name())
}

/// Full English weekday name, e.g. "Monday".
pub fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derives_calendar_fields_from_start_time() {
        let start = NaiveDateTime::parse_from_str("2017-06-05 17:42:10", "%Y-%m-%d %H:%M:%S")
            .unwrap();
        let rec = TripRecord::new(
            start,
            None,
            "A".into(),
            "B".into(),
            300.0,
            Some("Subscriber".into()),
            None,
            None,
        );
        assert_eq!(rec.month, 6);
        assert_eq!(rec.weekday, Weekday::Mon);
        assert_eq!(rec.hour, 17);
    }

    #[test]
    fn calendar_labels() {
        assert_eq!(month_name(1), Some("January"));
        assert_eq!(month_name(6), Some("June"));
        assert_eq!(month_name(13), None);
        assert_eq!(month_name(0), None);
        assert_eq!(weekday_name(Weekday::Sun), "Sunday");
    }
}
