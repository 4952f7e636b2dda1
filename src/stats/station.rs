use std::fmt;

use super::mode::mode;
use super::UNAVAILABLE;
use crate::data::model::Dataset;

/// Most popular start station, end station and start→end trip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StationStats {
    pub start_station: Option<String>,
    pub end_station: Option<String>,
    /// The pair is counted as one compound key.
    pub trip: Option<(String, String)>,
}

pub fn station_stats(dataset: &Dataset) -> StationStats {
    let trips = &dataset.records;
    let start = mode(trips.iter().map(|r| r.start_station.as_str()));
    let end = mode(trips.iter().map(|r| r.end_station.as_str()));
    let trip = mode(
        trips
            .iter()
            .map(|r| (r.start_station.as_str(), r.end_station.as_str())),
    );

    StationStats {
        start_station: start.map(str::to_string),
        end_station: end.map(str::to_string),
        trip: trip.map(|(s, e)| (s.to_string(), e.to_string())),
    }
}

impl fmt::Display for StationStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let start = self.start_station.as_deref().unwrap_or(UNAVAILABLE);
        let end = self.end_station.as_deref().unwrap_or(UNAVAILABLE);
        writeln!(f, "The most popular starting station is {start}")?;
        writeln!(f, "The most popular destination is {end}")?;
        match &self.trip {
            Some((s, e)) => writeln!(f, "The most popular trip is {s} to {e}"),
            None => writeln!(f, "The most popular trip is {UNAVAILABLE}"),
        }
    }
}
