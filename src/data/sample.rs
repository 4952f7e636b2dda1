use std::io;

use chrono::{Duration, NaiveDate, NaiveDateTime};

use crate::config::{City, CityRegistry};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

fn stations(city: City) -> &'static [&'static str] {
    match city {
        City::Chicago => &[
            "Streeter Dr & Grand Ave",
            "Lake Shore Dr & Monroe St",
            "Clinton St & Washington Blvd",
            "Canal St & Adams St",
            "Theater on the Lake",
            "Michigan Ave & Oak St",
        ],
        City::NewYorkCity => &[
            "Pershing Square North",
            "E 17 St & Broadway",
            "W 21 St & 6 Ave",
            "West St & Chambers St",
            "Broadway & E 22 St",
            "8 Ave & W 31 St",
        ],
        City::Washington => &[
            "Columbus Circle / Union Station",
            "Lincoln Memorial",
            "Jefferson Dr & 14th St SW",
            "Massachusetts Ave & Dupont Circle NW",
            "15th & P St NW",
            "Thomas Circle",
        ],
    }
}

/// Minimal deterministic PRNG (xoshiro256**)
pub struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    pub fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    pub fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    /// Uniform in `0..n` (n > 0).
    pub fn below(&mut self, n: u64) -> u64 {
        self.next_u64() % n
    }

    /// Pick from `items`, biased towards the front of the slice.
    fn pick_skewed<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        let a = self.below(items.len() as u64);
        let b = self.below(items.len() as u64);
        &items[a.min(b) as usize]
    }
}

/// Write `rows` synthetic trips for `city` in the same layout as the published files.
/// Washington gets no gender or birth-year columns.
pub fn write_city_csv<W: io::Write>(writer: W, city: City, rows: usize, seed: u64) -> csv::Result<()> {
    let mut rng = SimpleRng::new(seed);
    let mut out = csv::Writer::from_writer(writer);
    let demographics = city != City::Washington;

    let mut header = vec![
        "",
        "Start Time",
        "End Time",
        "Trip Duration",
        "Start Station",
        "End Station",
        "User Type",
    ];
    if demographics {
        header.extend(["Gender", "Birth Year"]);
    }
    out.write_record(&header)?;

    let season_start = NaiveDate::from_ymd_opt(2017, 1, 1)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .unwrap_or(NaiveDateTime::MIN);
    let hours: [i64; 12] = [17, 8, 18, 16, 7, 12, 13, 9, 15, 19, 11, 22];
    let names = stations(city);

    for row in 0..rows {
        // January through June 2017 is 181 days.
        let day = rng.below(181) as i64;
        let hour = *rng.pick_skewed(&hours[..]);
        let start = season_start
            + Duration::days(day)
            + Duration::hours(hour)
            + Duration::minutes(rng.below(60) as i64)
            + Duration::seconds(rng.below(60) as i64);
        let duration = 60 + rng.below(1800) + rng.below(1800);
        let end = start + Duration::seconds(duration as i64);

        let user_type = if rng.below(5) == 0 { "Customer" } else { "Subscriber" };

        let mut record = vec![
            (row + 1).to_string(),
            start.format(TIMESTAMP_FORMAT).to_string(),
            end.format(TIMESTAMP_FORMAT).to_string(),
            duration.to_string(),
            rng.pick_skewed(names).to_string(),
            rng.pick_skewed(names).to_string(),
            user_type.to_string(),
        ];
        if demographics {
            // Customers usually leave demographics blank.
            if user_type == "Customer" && rng.below(3) != 0 {
                record.extend([String::new(), String::new()]);
            } else {
                let gender = if rng.below(4) == 0 { "Female" } else { "Male" };
                let birth_year = 1950 + rng.below(25) + rng.below(25);
                record.extend([gender.to_string(), format!("{birth_year}.0")]);
            }
        }
        out.write_record(&record)?;
    }

    out.flush()?;
    Ok(())
}

/// Write a synthetic file for every city into the registry's data directory.
pub fn write_all(registry: &CityRegistry, rows: usize, seed: u64) -> csv::Result<Vec<(City, usize)>> {
    let mut written = Vec::new();
    for (i, city) in City::ALL.into_iter().enumerate() {
        let path = registry.path_for(city);
        let file = std::fs::File::create(&path)?;
        write_city_csv(io::BufWriter::new(file), city, rows, seed.wrapping_add(i as u64))?;
        log::info!("wrote {rows} synthetic trips to {}", path.display());
        written.push((city, rows));
    }
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::loader::load_reader;

    #[test]
    fn generated_files_load_with_expected_schema() {
        for city in City::ALL {
            let mut buf = Vec::new();
            write_city_csv(&mut buf, city, 50, 7).unwrap();
            let ds = load_reader(buf.as_slice()).unwrap();
            assert_eq!(ds.len(), 50);
            assert_eq!(ds.schema.has_gender, city != City::Washington);
            assert_eq!(ds.schema.has_birth_year, city != City::Washington);
            assert!(ds.records.iter().all(|r| (1..=6).contains(&r.month)));
        }
    }

    #[test]
    fn same_seed_same_bytes() {
        let mut a = Vec::new();
        let mut b = Vec::new();
        write_city_csv(&mut a, City::Chicago, 20, 42).unwrap();
        write_city_csv(&mut b, City::Chicago, 20, 42).unwrap();
        assert_eq!(a, b);
    }
}
