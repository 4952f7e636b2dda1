use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};

use crate::config::{City, CityRegistry};
use crate::data::filter::{apply_filter, DayFilter, MonthFilter, TripFilter};
use crate::data::loader::load_city;
use crate::data::model::{Dataset, TripRecord};
use crate::stats::write_report;

/// Rows revealed per raw-data confirmation.
pub const PAGE_SIZE: usize = 5;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub const CANCEL_MESSAGE: &str = "Done - Program canceled by User";

/// Write the line printed when a session is cancelled.
pub fn announce_cancel<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "\n{CANCEL_MESSAGE}\n")?;
    out.flush()
}

/// Route Ctrl-C at any prompt to the cancelled exit: print the cancel line and
/// terminate with status 0.
///
/// `read_line` restarts after the signal, so the handler ends the process itself
/// instead of waking the blocked prompt.
pub fn cancel_on_interrupt() -> Result<()> {
    ctrlc::set_handler(|| {
        log::debug!("shell state: cancelled (interrupt)");
        let _ = announce_cancel(&mut io::stdout());
        std::process::exit(0);
    })
    .context("installing interrupt handler")
}

// ---------------------------------------------------------------------------
// State machine
// ---------------------------------------------------------------------------

/// A city plus month/day selectors chosen at the prompts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub city: City,
    pub filter: TripFilter,
}

/// How an interactive session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The user declined to restart.
    Finished,
    /// Input ended while a prompt was waiting.
    Cancelled,
}

enum State {
    PromptFilters,
    Load(Selection),
    Report(Dataset),
    PaginateRaw { dataset: Dataset, shown: usize },
    PromptRestart,
    Finished,
    Cancelled,
}

impl State {
    fn name(&self) -> &'static str {
        match self {
            State::PromptFilters => "prompt-filters",
            State::Load(_) => "load",
            State::Report(_) => "report",
            State::PaginateRaw { .. } => "paginate-raw",
            State::PromptRestart => "prompt-restart",
            State::Finished => "finished",
            State::Cancelled => "cancelled",
        }
    }
}

// ---------------------------------------------------------------------------
// Shell
// ---------------------------------------------------------------------------

/// Prompt-driven session over any line input and text output.
pub struct Shell<R, W> {
    registry: CityRegistry,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(registry: CityRegistry, input: R, output: W) -> Self {
        Self {
            registry,
            input,
            output,
        }
    }

    /// Run until the user declines to restart or input ends.
    ///
    /// A data file that is missing or malformed is returned as an error.
    pub fn run(&mut self) -> Result<Outcome> {
        let mut state = State::PromptFilters;
        loop {
            log::debug!("shell state: {}", state.name());
            state = match state {
                State::PromptFilters => match self.prompt_filters()? {
                    Some(selection) => State::Load(selection),
                    None => State::Cancelled,
                },
                State::Load(selection) => {
                    let dataset = load_city(&self.registry, selection.city)
                        .with_context(|| format!("loading data for {}", selection.city))?;
                    State::Report(apply_filter(&dataset, &selection.filter))
                }
                State::Report(dataset) => {
                    write_report(&mut self.output, &dataset)?;
                    State::PaginateRaw { dataset, shown: 0 }
                }
                State::PaginateRaw { dataset, shown } => self.paginate(dataset, shown)?,
                State::PromptRestart => {
                    match self.ask("\nWould you like to restart? Enter yes or no.\n")? {
                        Some(answer) if is_yes(&answer) => State::PromptFilters,
                        Some(_) => State::Finished,
                        None => State::Cancelled,
                    }
                }
                State::Finished => return Ok(Outcome::Finished),
                State::Cancelled => {
                    announce_cancel(&mut self.output)?;
                    return Ok(Outcome::Cancelled);
                }
            };
        }
    }

    fn prompt_filters(&mut self) -> Result<Option<Selection>> {
        writeln!(self.output, "Hello! Let's explore some US bikeshare data!")?;
        writeln!(self.output, "\nBikeshare data is available in the following cities:")?;

        let Some(city) = self.prompt_until_valid(
            "\nEnter a city - Chicago, New York City, or Washington: ",
            City::parse,
            "Sorry, that entry is not in the list of available cities",
        )?
        else {
            return Ok(None);
        };
        let Some(month) = self.prompt_until_valid(
            "\nEnter a month (January thru June) or \"all\": ",
            MonthFilter::parse,
            "Sorry, that entry is not in the list of available months",
        )?
        else {
            return Ok(None);
        };
        let Some(day) = self.prompt_until_valid(
            "\nEnter a day of the week or \"all\": ",
            DayFilter::parse,
            "Sorry, try again, Eg., Monday",
        )?
        else {
            return Ok(None);
        };

        let rule = "-".repeat(54);
        writeln!(self.output, "{rule}")?;
        writeln!(
            self.output,
            "Stats for {}, Month: {}, Day of Week: {}",
            city,
            month.label(),
            day.label()
        )?;
        writeln!(self.output, "{rule}")?;

        Ok(Some(Selection {
            city,
            filter: TripFilter::new(month, day),
        }))
    }

    /// Re-prompt until `parse` accepts the answer. `None` when input ends.
    fn prompt_until_valid<T>(
        &mut self,
        prompt: &str,
        parse: impl Fn(&str) -> Option<T>,
        rejection: &str,
    ) -> Result<Option<T>> {
        loop {
            let Some(answer) = self.ask(prompt)? else {
                return Ok(None);
            };
            match parse(&answer) {
                Some(value) => return Ok(Some(value)),
                None => {
                    log::debug!("rejected input {:?}", answer.trim());
                    writeln!(self.output, "{rejection}")?;
                }
            }
        }
    }

    fn paginate(&mut self, dataset: Dataset, shown: usize) -> Result<State> {
        let prompt = if shown == 0 {
            "\nWould you like to see some raw data? Enter yes or no. "
        } else {
            "\nWould you like to see more raw data? Enter yes or no. "
        };
        let Some(answer) = self.ask(prompt)? else {
            return Ok(State::Cancelled);
        };
        if !is_yes(&answer) {
            return Ok(State::PromptRestart);
        }

        let end = (shown + PAGE_SIZE).min(dataset.len());
        for (index, record) in dataset.records[shown..end].iter().enumerate() {
            writeln!(self.output, "{}", format_row(shown + index, record, &dataset))?;
        }

        if end >= dataset.len() {
            writeln!(self.output, "No more raw data to display.")?;
            return Ok(State::PromptRestart);
        }
        Ok(State::PaginateRaw { dataset, shown: end })
    }

    /// Write `prompt` and read one line. `None` at end of input.
    fn ask(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        let read = self.input.read_line(&mut line).context("reading user input")?;
        Ok((read > 0).then_some(line))
    }
}

fn is_yes(answer: &str) -> bool {
    answer.trim().eq_ignore_ascii_case("yes")
}

fn format_row(index: usize, record: &TripRecord, dataset: &Dataset) -> String {
    let end_time = record
        .end_time
        .map(|t| t.format(TIMESTAMP_FORMAT).to_string())
        .unwrap_or_else(|| "-".to_string());

    let mut row = format!(
        "[{index}] {} -> {} | {} -> {} | {} s | {}",
        record.start_time.format(TIMESTAMP_FORMAT),
        end_time,
        record.start_station,
        record.end_station,
        record.duration_secs,
        record.user_type.as_deref().unwrap_or("-"),
    );
    if dataset.schema.has_gender {
        row.push_str(" | ");
        row.push_str(record.gender.as_deref().unwrap_or("-"));
    }
    if dataset.schema.has_birth_year {
        row.push_str(" | ");
        match record.birth_year {
            Some(year) => row.push_str(&year.to_string()),
            None => row.push('-'),
        }
    }
    row
}
