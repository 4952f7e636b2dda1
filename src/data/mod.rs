/// Data layer: trip records, loading, filtering and synthetic samples.
///
/// Architecture:
/// ```text
///  chicago.csv / new_york_city.csv / washington.csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse CSV → Dataset (derived month / weekday / hour)
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  Dataset  │  Vec<TripRecord>, Schema capabilities
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  month ∧ weekday selectors → new Dataset
///   └──────────┘
/// ```

pub mod filter;
pub mod loader;
pub mod model;
pub mod sample;
