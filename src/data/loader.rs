use std::io;
use std::path::Path;

use chrono::NaiveDateTime;
use serde::Deserialize;

use super::model::{Dataset, Schema, TripRecord};
use crate::config::{City, CityRegistry};
use crate::error::DataError;

/// Timestamp layout used by all three city files. Fractional seconds are optional.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.f";

const START_TIME: &str = "Start Time";
const END_TIME: &str = "End Time";
const TRIP_DURATION: &str = "Trip Duration";
const START_STATION: &str = "Start Station";
const END_STATION: &str = "End Station";
const USER_TYPE: &str = "User Type";
const GENDER: &str = "Gender";
const BIRTH_YEAR: &str = "Birth Year";

const REQUIRED_COLUMNS: [&str; 5] = [START_TIME, START_STATION, END_STATION, TRIP_DURATION, USER_TYPE];

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load the dataset for `city` from the file the registry maps it to.
pub fn load_city(registry: &CityRegistry, city: City) -> Result<Dataset, DataError> {
    load_file(&registry.path_for(city))
}

/// Load a trip dataset from a CSV file on disk.
pub fn load_file(path: &Path) -> Result<Dataset, DataError> {
    let reader = reader_builder().from_path(path).map_err(|source| DataError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let dataset = read_trips(reader)?;
    log::info!("loaded {} trips from {}", dataset.len(), path.display());
    Ok(dataset)
}

/// Load a trip dataset from any CSV byte stream (header row first).
pub fn load_reader<R: io::Read>(reader: R) -> Result<Dataset, DataError> {
    read_trips(reader_builder().from_reader(reader))
}

// ---------------------------------------------------------------------------
// CSV parsing
// ---------------------------------------------------------------------------

fn reader_builder() -> csv::ReaderBuilder {
    let mut builder = csv::ReaderBuilder::new();
    builder.trim(csv::Trim::Headers);
    builder
}

/// Raw row as it appears in the file. Unknown columns (such as the unnamed
/// leading index column) are ignored.
#[derive(Debug, Deserialize)]
struct RawTrip {
    #[serde(rename = "Start Time")]
    start_time: String,
    #[serde(rename = "End Time", default)]
    end_time: Option<String>,
    #[serde(rename = "Trip Duration")]
    trip_duration: f64,
    #[serde(rename = "Start Station")]
    start_station: String,
    #[serde(rename = "End Station")]
    end_station: String,
    #[serde(rename = "User Type", default)]
    user_type: Option<String>,
    #[serde(rename = "Gender", default)]
    gender: Option<String>,
    /// Written as `1992.0` in some files.
    #[serde(rename = "Birth Year", default)]
    birth_year: Option<f64>,
}

fn read_trips<R: io::Read>(mut reader: csv::Reader<R>) -> Result<Dataset, DataError> {
    let headers = reader
        .headers()
        .map_err(|source| DataError::Csv { row: 0, source })?
        .clone();
    let has_column = |name: &str| headers.iter().any(|h| h == name);

    if let Some(missing) = REQUIRED_COLUMNS.iter().find(|c| !has_column(**c)) {
        return Err(DataError::MissingColumn(*missing));
    }

    let schema = Schema {
        has_end_time: has_column(END_TIME),
        has_gender: has_column(GENDER),
        has_birth_year: has_column(BIRTH_YEAR),
    };
    log::debug!("schema capabilities: {schema:?}");

    let mut records = Vec::new();
    for (row_no, result) in reader.deserialize::<RawTrip>().enumerate() {
        let raw = result.map_err(|source| DataError::Csv { row: row_no, source })?;
        records.push(to_record(raw, row_no)?);
    }

    Ok(Dataset::new(records, schema))
}

fn to_record(raw: RawTrip, row: usize) -> Result<TripRecord, DataError> {
    let start_time = parse_timestamp(&raw.start_time, row, START_TIME)?;
    let end_time = match non_empty(raw.end_time) {
        Some(text) => Some(parse_timestamp(&text, row, END_TIME)?),
        None => None,
    };

    if raw.trip_duration < 0.0 {
        return Err(DataError::NegativeDuration {
            row,
            value: raw.trip_duration,
        });
    }

    let birth_year = raw
        .birth_year
        .filter(|y| y.is_finite())
        .map(|y| y.trunc() as i32);

    Ok(TripRecord::new(
        start_time,
        end_time,
        raw.start_station,
        raw.end_station,
        raw.trip_duration,
        non_empty(raw.user_type),
        non_empty(raw.gender),
        birth_year,
    ))
}

fn parse_timestamp(text: &str, row: usize, column: &'static str) -> Result<NaiveDateTime, DataError> {
    NaiveDateTime::parse_from_str(text.trim(), TIMESTAMP_FORMAT).map_err(|source| {
        DataError::Timestamp {
            row,
            column,
            value: text.to_string(),
            source,
        }
    })
}

/// Blank cells count as missing values.
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use chrono::Weekday;

    use super::*;

    const CHICAGO_LIKE: &str = "\
,Start Time,End Time,Trip Duration,Start Station,End Station,User Type,Gender,Birth Year
1423854,2017-06-23 15:09:32,2017-06-23 15:14:53,321,Wood St & Hubbard St,Damen Ave & Chicago Ave,Subscriber,Male,1992.0
955915,2017-05-25 18:19:03,2017-05-25 18:45:53,1610,Theater on the Lake,Sheffield Ave & Waveland Ave,Subscriber,Female,1992.0
9031,2017-01-04 08:27:49,2017-01-04 08:34:45,416,May St & Taylor St,Wood St & Taylor St,Customer,,
";

    const WASHINGTON_LIKE: &str = "\
,Start Time,End Time,Trip Duration,Start Station,End Station,User Type
1621326,2017-06-21 08:36:34,2017-06-21 08:44:43,489.066,14th & Belmont St NW,15th & K St NW,Subscriber
482740,2017-03-11 10:40:00.5,2017-03-11 11:00:00,1199.5,Yuma St & Tenley Circle NW,Connecticut Ave & Yuma St NW,
";

    #[test]
    fn loads_rows_with_optional_columns() {
        let ds = load_reader(CHICAGO_LIKE.as_bytes()).unwrap();
        assert_eq!(ds.len(), 3);
        assert_eq!(
            ds.schema,
            Schema {
                has_end_time: true,
                has_gender: true,
                has_birth_year: true
            }
        );

        let first = &ds.records[0];
        assert_eq!(first.start_station, "Wood St & Hubbard St");
        assert_eq!(first.duration_secs, 321.0);
        assert_eq!(first.gender.as_deref(), Some("Male"));
        assert_eq!(first.birth_year, Some(1992));
        assert_eq!((first.month, first.weekday, first.hour), (6, Weekday::Fri, 15));
        assert!(first.end_time.is_some());

        let third = &ds.records[2];
        assert_eq!(third.user_type.as_deref(), Some("Customer"));
        assert_eq!(third.gender, None);
        assert_eq!(third.birth_year, None);
    }

    #[test]
    fn missing_optional_columns_are_recorded_in_schema() {
        let ds = load_reader(WASHINGTON_LIKE.as_bytes()).unwrap();
        assert_eq!(ds.len(), 2);
        assert!(ds.schema.has_end_time);
        assert!(!ds.schema.has_gender);
        assert!(!ds.schema.has_birth_year);
        assert_eq!(ds.records[1].duration_secs, 1199.5);
        assert_eq!(ds.records[1].user_type, None);
        assert_eq!(ds.records[1].hour, 10);
    }

    #[test]
    fn missing_required_column_fails_the_load() {
        let csv = "Start Time,Start Station,End Station,User Type\n2017-01-01 00:00:00,A,B,Customer\n";
        let err = load_reader(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, DataError::MissingColumn("Trip Duration")));
    }

    #[test]
    fn unparsable_start_time_aborts_the_load() {
        let csv = "\
Start Time,Trip Duration,Start Station,End Station,User Type
2017-01-01 00:00:00,60,A,B,Customer
yesterday,60,A,B,Customer
";
        let err = load_reader(csv.as_bytes()).unwrap_err();
        match err {
            DataError::Timestamp { row, column, value, .. } => {
                assert_eq!(row, 1);
                assert_eq!(column, "Start Time");
                assert_eq!(value, "yesterday");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn negative_duration_is_rejected() {
        let csv = "\
Start Time,Trip Duration,Start Station,End Station,User Type
2017-01-01 00:00:00,-5,A,B,Customer
";
        assert!(matches!(
            load_reader(csv.as_bytes()),
            Err(DataError::NegativeDuration { row: 0, .. })
        ));
    }

    #[test]
    fn missing_file_is_an_open_error() {
        let err = load_file(Path::new("/nonexistent/chicago.csv")).unwrap_err();
        assert!(matches!(err, DataError::Open { .. }));
    }
}
