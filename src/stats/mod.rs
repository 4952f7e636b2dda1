/// Descriptive statistics over a (possibly filtered) dataset.
///
/// The four aggregators are independent and read-only; each returns a plain
/// struct whose `Display` impl renders the report lines.

pub mod duration;
pub mod mode;
pub mod station;
pub mod time;
pub mod user;

use std::io::{self, Write};
use std::time::Instant;

use crate::data::model::Dataset;

pub use duration::{duration_stats, DurationStats};
pub use station::{station_stats, StationStats};
pub use time::{time_stats, TimeStats};
pub use user::{user_stats, BirthYears, UserStats};

/// Placeholder for statistics that cannot be computed over zero trips.
pub const UNAVAILABLE: &str = "unavailable";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Time,
    Stations,
    Duration,
    Users,
}

impl Section {
    pub const ALL: [Section; 4] = [Section::Time, Section::Stations, Section::Duration, Section::Users];

    pub fn heading(self) -> &'static str {
        match self {
            Section::Time => "Calculating The Most Frequent Times of Travel...",
            Section::Stations => "Calculating The Most Popular Stations and Trip...",
            Section::Duration => "Calculating Trip Duration...",
            Section::Users => "Calculating User Stats...",
        }
    }

    pub fn render(self, dataset: &Dataset) -> String {
        match self {
            Section::Time => time_stats(dataset).to_string(),
            Section::Stations => station_stats(dataset).to_string(),
            Section::Duration => duration_stats(dataset).to_string(),
            Section::Users => user_stats(dataset).to_string(),
        }
    }
}

/// Print every section with its heading and how long it took.
pub fn write_report<W: Write>(out: &mut W, dataset: &Dataset) -> io::Result<()> {
    for section in Section::ALL {
        writeln!(out, "\n{}\n", section.heading())?;
        let started = Instant::now();
        let body = section.render(dataset);
        let elapsed = started.elapsed();
        write!(out, "{body}")?;
        writeln!(out, "\nThis took {} seconds.", elapsed.as_secs_f64())?;
        writeln!(out, "{}", "-".repeat(40))?;
    }
    Ok(())
}
