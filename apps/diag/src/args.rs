use clap::{ArgAction, Parser, ValueEnum};
use std::path::PathBuf;
use themis_logger::LevelFilter;

/// Command-line arguments of `themis-diag`.
#[derive(Debug, Parser)]
#[command(name = "themis-diag")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Report the build identity of this THeMIS build")]
pub struct Cli {
    /// Output format of the report
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    pub format: Format,

    /// Also write logs to rolling files in this directory
    #[arg(long)]
    pub log_dir: Option<PathBuf>,

    /// Increase log verbosity on stderr (-v info, -vv debug); `RUST_LOG`, when set, wins
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Log level derived from the number of `-v` flags.
    #[must_use]
    pub const fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::WARN,
            1 => LevelFilter::INFO,
            _ => LevelFilter::DEBUG,
        }
    }
}

/// Report output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// Human-readable lines, version first
    Text,
    /// The full configuration as JSON
    Json,
}
