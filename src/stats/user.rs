use std::fmt;

use super::mode::{mode, value_counts};
use crate::data::model::Dataset;

/// Oldest / youngest / most common birth year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BirthYears {
    /// The city file has no `Birth Year` column.
    NotCollected,
    /// Column exists but no trip in the selection carries a value.
    NoValues,
    Summary {
        oldest: i32,
        youngest: i32,
        most_common: i32,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserStats {
    pub user_types: Vec<(String, usize)>,
    /// `None` when the city file has no `Gender` column.
    pub genders: Option<Vec<(String, usize)>>,
    pub birth_years: BirthYears,
}

pub fn user_stats(dataset: &Dataset) -> UserStats {
    let trips = &dataset.records;

    let user_types = owned(value_counts(
        trips.iter().filter_map(|r| r.user_type.as_deref()),
    ));

    let genders = dataset
        .schema
        .has_gender
        .then(|| owned(value_counts(trips.iter().filter_map(|r| r.gender.as_deref()))));

    let birth_years = if !dataset.schema.has_birth_year {
        BirthYears::NotCollected
    } else {
        let years = || trips.iter().filter_map(|r| r.birth_year);
        match (years().min(), years().max(), mode(years())) {
            (Some(oldest), Some(youngest), Some(most_common)) => BirthYears::Summary {
                oldest,
                youngest,
                most_common,
            },
            _ => BirthYears::NoValues,
        }
    };

    UserStats {
        user_types,
        genders,
        birth_years,
    }
}

fn owned(counts: Vec<(&str, usize)>) -> Vec<(String, usize)> {
    counts.into_iter().map(|(v, n)| (v.to_string(), n)).collect()
}

fn write_counts(f: &mut fmt::Formatter<'_>, counts: &[(String, usize)]) -> fmt::Result {
    if counts.is_empty() {
        return writeln!(f, "  (no values for the selected trips)");
    }
    let width = counts.iter().map(|(v, _)| v.chars().count()).max().unwrap_or(0);
    for (value, count) in counts {
        writeln!(f, "  {value:<width$}  {count}")?;
    }
    Ok(())
}

impl fmt::Display for UserStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Number of users by type:")?;
        write_counts(f, &self.user_types)?;

        writeln!(f)?;
        match &self.genders {
            Some(counts) => {
                writeln!(f, "Number of users by gender:")?;
                write_counts(f, counts)?;
            }
            None => writeln!(f, "No gender data available for this city")?,
        }

        writeln!(f)?;
        match self.birth_years {
            BirthYears::Summary {
                oldest,
                youngest,
                most_common,
            } => {
                writeln!(f, "Ages of Users:")?;
                writeln!(f, "Oldest user birth year is {oldest}")?;
                writeln!(f, "Youngest user birth year is {youngest}")?;
                writeln!(f, "Most common birth year is {most_common}")
            }
            BirthYears::NoValues => writeln!(f, "No birth year data available for the selected trips"),
            BirthYears::NotCollected => writeln!(f, "No birth year data available for this city"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::loader::load_reader;

    const WITH_DEMOGRAPHICS: &str = "\
Start Time,Trip Duration,Start Station,End Station,User Type,Gender,Birth Year
2017-01-01 10:00:00,60,A,B,Subscriber,Male,1985.0
2017-01-01 10:00:00,60,A,B,Customer,,
2017-01-01 10:00:00,60,A,B,Subscriber,Female,1990.0
2017-01-01 10:00:00,60,A,B,Subscriber,Male,1990.0
2017-01-01 10:00:00,60,A,B,Customer,Male,1939.0
2017-01-01 10:00:00,60,A,B,Subscriber,Female,2001.0
";

    #[test]
    fn full_demographics() {
        let stats = user_stats(&load_reader(WITH_DEMOGRAPHICS.as_bytes()).unwrap());
        assert_eq!(
            stats.user_types,
            vec![("Subscriber".to_string(), 4), ("Customer".to_string(), 2)]
        );
        assert_eq!(
            stats.genders,
            Some(vec![("Male".to_string(), 3), ("Female".to_string(), 2)])
        );
        assert_eq!(
            stats.birth_years,
            BirthYears::Summary {
                oldest: 1939,
                youngest: 2001,
                most_common: 1990
            }
        );

        let text = stats.to_string();
        assert!(text.contains("Oldest user birth year is 1939"));
        assert!(text.contains("Youngest user birth year is 2001"));
        assert!(text.contains("Most common birth year is 1990"));
    }

    #[test]
    fn missing_columns_degrade_per_field() {
        let csv = "\
Start Time,Trip Duration,Start Station,End Station,User Type
2017-01-01 10:00:00,60,A,B,Subscriber
";
        let stats = user_stats(&load_reader(csv.as_bytes()).unwrap());
        assert_eq!(stats.genders, None);
        assert_eq!(stats.birth_years, BirthYears::NotCollected);

        let text = stats.to_string();
        assert!(text.contains("No gender data available for this city"));
        assert!(text.contains("No birth year data available for this city"));
    }

    #[test]
    fn gender_without_birth_year() {
        let csv = "\
Start Time,Trip Duration,Start Station,End Station,User Type,Gender
2017-01-01 10:00:00,60,A,B,Subscriber,Female
";
        let stats = user_stats(&load_reader(csv.as_bytes()).unwrap());
        assert_eq!(stats.genders, Some(vec![("Female".to_string(), 1)]));
        assert_eq!(stats.birth_years, BirthYears::NotCollected);
    }

    #[test]
    fn table_columns_align_with_non_ascii_values() {
        let csv = "\
Start Time,Trip Duration,Start Station,End Station,User Type
2017-01-01 10:00:00,60,A,B,Abonné
2017-01-01 10:00:00,60,A,B,Abonné
2017-01-01 10:00:00,60,A,B,Guest
";
        let text = user_stats(&load_reader(csv.as_bytes()).unwrap()).to_string();
        assert!(text.contains("  Abonné  2\n"));
        assert!(text.contains("  Guest   1\n"));
    }

    #[test]
    fn empty_selection_does_not_fail() {
        let mut ds = load_reader(WITH_DEMOGRAPHICS.as_bytes()).unwrap();
        ds.records.clear();
        let stats = user_stats(&ds);
        assert!(stats.user_types.is_empty());
        assert_eq!(stats.genders, Some(Vec::new()));
        assert_eq!(stats.birth_years, BirthYears::NoValues);
        assert!(stats.to_string().contains("No birth year data available for the selected trips"));
    }
}
