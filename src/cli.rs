//! Minimal CLI: schedule + command → (table | map | json)
use clap::{Parser, ValueEnum};
use colored::Colorize;

use crate::schedule::{self, Schedule};

// ————————————————————————————————————————————————————————————————————————————
// TYPES
// ————————————————————————————————————————————————————————————————————————————

/// expand a cron-style schedule into the minutes, hours, days and months it fires on
#[derive(Parser, Debug)]
#[command(name = "cron-table")]
pub struct CommandLineInterface {
    /// five whitespace-separated time fields, e.g. "*/15 0 1,15 * 1-5"
    ///
    /// When COMMAND is omitted this is read as a whole crontab line and
    /// everything after the fifth field becomes the command.
    schedule: String,

    /// the command the schedule runs
    command: Option<String>,

    /// output format
    #[arg(long, value_enum, default_value_t = Format::Table)]
    format: Format,

    /// more diagnostic logging on stderr (repeatable)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// debugging
    #[arg(long)]
    no_op: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// boxed table
    Table,
    /// one-line `{key=value, ...}` dump
    Map,
    /// JSON object with integer arrays
    Json,
}

// ————————————————————————————————————————————————————————————————————————————
// IMPLEMENTATION
// ————————————————————————————————————————————————————————————————————————————

impl CommandLineInterface {
    pub fn load() -> Self {
        Self::parse()
    }

    pub fn verbosity(&self) -> u8 {
        self.verbose
    }

    pub fn parse_input(&self) -> crate::Result<Schedule> {
        match self.command.as_deref() {
            Some(command) => {
                let tokens = self.schedule.split_whitespace().collect::<Vec<_>>();
                schedule::parse_schedule(tokens.as_slice(), command)
            }
            None => schedule::parse_line(&self.schedule),
        }
    }

    pub fn render(&self, schedule: &Schedule) -> anyhow::Result<String> {
        Ok(match self.format {
            Format::Table => crate::render::table(schedule),
            Format::Map => crate::render::map(schedule),
            Format::Json => {
                let mut src = crate::render::json(schedule)?;
                src.push('\n');
                src
            }
        })
    }

    /// Run to completion. Returns `false` when the schedule was rejected; the
    /// diagnostic has already been printed.
    pub fn run(&self) -> anyhow::Result<bool> {
        // debug path
        if self.no_op {
            eprintln!("{self:#?}");
            return Ok(true);
        }

        let schedule = match self.parse_input() {
            Ok(x) => x,
            Err(error) => {
                tracing::debug!(kind = error.kind(), "schedule rejected");
                eprintln!("{} {error}", "error:".red().bold());
                return Ok(false);
            }
        };
        print!("{}", self.render(&schedule)?);
        Ok(true)
    }
}

// ————————————————————————————————————————————————————————————————————————————
// TESTS
// ————————————————————————————————————————————————————————————————————————————
