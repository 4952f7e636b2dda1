use std::fmt;
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// City – the three supported bikeshare systems
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum City {
    Chicago,
    NewYorkCity,
    Washington,
}

impl City {
    pub const ALL: [City; 3] = [City::Chicago, City::NewYorkCity, City::Washington];

    /// Parse user input (case-insensitive, surrounding whitespace ignored).
    pub fn parse(input: &str) -> Option<City> {
        match input.trim().to_lowercase().as_str() {
            "chicago" => Some(City::Chicago),
            "new york city" => Some(City::NewYorkCity),
            "washington" => Some(City::Washington),
            _ => None,
        }
    }

    /// Display label, e.g. "New York City".
    pub fn name(self) -> &'static str {
        match self {
            City::Chicago => "Chicago",
            City::NewYorkCity => "New York City",
            City::Washington => "Washington",
        }
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ---------------------------------------------------------------------------
// CityRegistry – read-only city → source file mapping
// ---------------------------------------------------------------------------

/// Built once at start-up; maps each city to its CSV file under `data_dir`.
#[derive(Debug, Clone)]
pub struct CityRegistry {
    data_dir: PathBuf,
    files: [(City, &'static str); 3],
}

impl CityRegistry {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            files: [
                (City::Chicago, "chicago.csv"),
                (City::NewYorkCity, "new_york_city.csv"),
                (City::Washington, "washington.csv"),
            ],
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn file_name(&self, city: City) -> &'static str {
        self.files
            .iter()
            .find(|(c, _)| *c == city)
            .map(|(_, f)| *f)
            .unwrap_or_default()
    }

    pub fn path_for(&self, city: City) -> PathBuf {
        self.data_dir.join(self.file_name(city))
    }
}

impl Default for CityRegistry {
    fn default() -> Self {
        Self::new(".")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_city_names_loosely() {
        assert_eq!(City::parse("  Chicago "), Some(City::Chicago));
        assert_eq!(City::parse("NEW YORK CITY"), Some(City::NewYorkCity));
        assert_eq!(City::parse("washington"), Some(City::Washington));
        assert_eq!(City::parse("boston"), None);
        assert_eq!(City::parse("new york"), None);
    }

    #[test]
    fn registry_maps_every_city_to_a_file() {
        let registry = CityRegistry::new("/data");
        assert_eq!(
            registry.path_for(City::NewYorkCity),
            Path::new("/data/new_york_city.csv")
        );
        for city in City::ALL {
            assert!(registry.file_name(city).ends_with(".csv"));
        }
    }
}
