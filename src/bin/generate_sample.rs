use std::path::PathBuf;

use anyhow::{Context, Result};
use bikeshare_explorer::config::CityRegistry;
use bikeshare_explorer::data::sample::write_all;

const ROWS_PER_CITY: usize = 5_000;
const SEED: u64 = 42;

fn main() -> Result<()> {
    env_logger::init();

    // Optional first argument: output directory (default: current directory).
    let dir = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));
    std::fs::create_dir_all(&dir).with_context(|| format!("creating {}", dir.display()))?;

    let registry = CityRegistry::new(&dir);
    let written = write_all(&registry, ROWS_PER_CITY, SEED).context("writing sample files")?;

    for (city, rows) in written {
        println!("Wrote {rows} trips for {city} to {}", registry.path_for(city).display());
    }
    Ok(())
}
