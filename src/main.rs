use std::io;
use std::process::ExitCode;

use bikeshare_explorer::config::CityRegistry;
use bikeshare_explorer::shell::{cancel_on_interrupt, Outcome, Shell};

fn main() -> ExitCode {
    env_logger::init();

    if let Err(err) = cancel_on_interrupt() {
        log::warn!("{err:#}");
    }

    let registry = CityRegistry::default();
    log::debug!("reading city files from {}", registry.data_dir().display());

    let stdin = io::stdin();
    let mut shell = Shell::new(registry, stdin.lock(), io::stdout());
    match shell.run() {
        Ok(Outcome::Finished) | Ok(Outcome::Cancelled) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err:#}");
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
