use std::path::PathBuf;

use thiserror::Error;

/// Data-format failures while loading a city file. Any of these aborts the run.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("cannot open data file {path}")]
    Open {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("data file is missing required column '{0}'")]
    MissingColumn(&'static str),

    #[error("row {row}: cannot parse {column} '{value}'")]
    Timestamp {
        row: usize,
        column: &'static str,
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("row {row}: trip duration {value} is negative")]
    NegativeDuration { row: usize, value: f64 },

    #[error("row {row}: malformed record")]
    Csv {
        row: usize,
        #[source]
        source: csv::Error,
    },
}
