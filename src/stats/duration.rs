use std::fmt;

use crate::data::model::Dataset;

/// Total travel time in hours and mean trip length in minutes, both to 2 dp.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DurationStats {
    pub trips: usize,
    pub total_hours: f64,
    /// `None` when there are no trips to average over.
    pub mean_minutes: Option<f64>,
}

pub fn duration_stats(dataset: &Dataset) -> DurationStats {
    let trips = dataset.len();
    // An empty f64 `sum()` is -0.0; start from +0.0 so no trips prints "0 hours".
    let total_secs = dataset.records.iter().fold(0.0, |acc, r| acc + r.duration_secs);

    DurationStats {
        trips,
        total_hours: round2(total_secs / 3600.0),
        mean_minutes: (trips > 0).then(|| round2(total_secs / trips as f64 / 60.0)),
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

impl fmt::Display for DurationStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Total travel time is {} hours", self.total_hours)?;
        match self.mean_minutes {
            Some(mean) => writeln!(f, "The mean trip duration is {mean} minutes"),
            None => writeln!(f, "A mean cannot be calculated if 0 trips (unavailable)"),
        }
    }
}
