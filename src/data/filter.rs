use chrono::Weekday;

use super::model::{month_name, weekday_name, Dataset, TripRecord};

/// Months covered by the source files, in calendar order.
pub const SUPPORTED_MONTHS: [&str; 6] = ["january", "february", "march", "april", "may", "june"];

pub const WEEKDAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

// ---------------------------------------------------------------------------
// Selectors
// ---------------------------------------------------------------------------

/// Month selector: "all" or one of the six supported months.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MonthFilter {
    #[default]
    All,
    /// Month number, 1–6.
    Month(u32),
}

impl MonthFilter {
    /// Case-insensitive, trimmed. `None` for anything outside "all" + the supported months.
    pub fn parse(input: &str) -> Option<Self> {
        let input = input.trim().to_lowercase();
        if input == "all" {
            return Some(MonthFilter::All);
        }
        SUPPORTED_MONTHS
            .iter()
            .position(|m| *m == input)
            .map(|i| MonthFilter::Month(i as u32 + 1))
    }

    pub fn label(&self) -> &'static str {
        match self {
            MonthFilter::All => "All",
            MonthFilter::Month(m) => month_name(*m).unwrap_or("Unknown"),
        }
    }

    fn matches(&self, record: &TripRecord) -> bool {
        match self {
            MonthFilter::All => true,
            MonthFilter::Month(m) => record.month == *m,
        }
    }
}

/// Weekday selector: "all" or one of the seven day names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DayFilter {
    #[default]
    All,
    Day(Weekday),
}

impl DayFilter {
    /// Case-insensitive, trimmed full day name or "all".
    pub fn parse(input: &str) -> Option<Self> {
        let input = input.trim().to_lowercase();
        if input == "all" {
            return Some(DayFilter::All);
        }
        WEEKDAYS
            .iter()
            .find(|d| weekday_name(**d).to_lowercase() == input)
            .map(|d| DayFilter::Day(*d))
    }

    pub fn label(&self) -> &'static str {
        match self {
            DayFilter::All => "All",
            DayFilter::Day(d) => weekday_name(*d),
        }
    }

    fn matches(&self, record: &TripRecord) -> bool {
        match self {
            DayFilter::All => true,
            DayFilter::Day(d) => record.weekday == *d,
        }
    }
}

/// Conjunction of a month and a day selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TripFilter {
    pub month: MonthFilter,
    pub day: DayFilter,
}

impl TripFilter {
    pub fn new(month: MonthFilter, day: DayFilter) -> Self {
        Self { month, day }
    }

    pub fn matches(&self, record: &TripRecord) -> bool {
        self.month.matches(record) && self.day.matches(record)
    }
}

// ---------------------------------------------------------------------------
// Filtering
// ---------------------------------------------------------------------------

/// Indices of trips that pass both selectors, in original order.
pub fn filtered_indices(dataset: &Dataset, filter: &TripFilter) -> Vec<usize> {
    dataset
        .records
        .iter()
        .enumerate()
        .filter(|(_, rec)| filter.matches(rec))
        .map(|(i, _)| i)
        .collect()
}

/// Build a new dataset holding only the matching trips. The input is left untouched
/// and an empty result is not an error.
pub fn apply_filter(dataset: &Dataset, filter: &TripFilter) -> Dataset {
    let records: Vec<TripRecord> = filtered_indices(dataset, filter)
        .into_iter()
        .map(|i| dataset.records[i].clone())
        .collect();
    log::debug!(
        "filter {}/{} kept {} of {} trips",
        filter.month.label(),
        filter.day.label(),
        records.len(),
        dataset.len()
    );
    Dataset::new(records, dataset.schema)
}
