//! upop: drive a headless select or combobox over a list of books.
//!
//! Without `--script` it opens an interactive terminal session. With
//! `--script` it runs the given actions and prints one JSON line per step.

mod books;
mod error;
mod interactive;
mod script;
mod terminal;

use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use log::{LevelFilter, info};
use simplelog::{Config, WriteLogger};

use error::CliError;

#[derive(Parser)]
#[command(name = "upop")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Headless select and combobox playground", long_about = None)]
struct Cli {
    /// Widget to drive
    #[arg(value_enum)]
    widget: WidgetKind,

    /// Actions to run instead of an interactive session (e.g. item-click:1)
    #[arg(short, long, num_args = 1.., value_name = "ACTION")]
    script: Vec<String>,

    /// File that receives the log
    #[arg(long, default_value = "upop.log")]
    log_file: PathBuf,

    /// Log level
    #[arg(long, value_enum, default_value = "info")]
    log_level: LogLevel,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum WidgetKind {
    Select,
    Combobox,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let log_file = File::create(&cli.log_file)?;
    WriteLogger::init(cli.log_level.into(), Config::default(), log_file)?;

    info!("upop {} ({:?})", env!("CARGO_PKG_VERSION"), cli.widget);

    if cli.script.is_empty() {
        interactive::run(cli.widget)
    } else {
        script::run(cli.widget, &cli.script, &mut io::stdout().lock())
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_script_args() {
        let cli = Cli::try_parse_from([
            "upop",
            "combobox",
            "--script",
            "input-value-changed:war",
            "input-key-down:ArrowDown",
        ])
        .unwrap();

        assert!(matches!(cli.widget, WidgetKind::Combobox));
        assert_eq!(cli.script.len(), 2);
        assert!(matches!(cli.log_level, LogLevel::Info));
    }
}
