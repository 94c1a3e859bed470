//! # CLI Argument Definitions
//!
//! Subcommands of `cargo xtask`, the developer toolkit of the THeMIS workspace.

use clap::{Parser, Subcommand};

/// The main CLI structure parsing command-line arguments.
#[derive(Debug, Parser)]
#[command(name = "cargo xtask")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(arg_required_else_help = true)]
#[command(about = "Developer toolkit for the THeMIS workspace")]
pub struct Cli {
    #[command(subcommand)]
    pub command: AppCommands,
}

#[derive(Debug, Subcommand)]
pub enum AppCommands {
    /// Run tests (workspace by default)
    Test {
        /// Run tests for a specific crate (auto-prefixes with 'themis-' if missing)
        project: Option<String>,
    },
    /// Run doc tests (workspace by default)
    Doctest {
        /// Run doc tests for a specific crate (auto-prefixes with 'themis-' if missing)
        project: Option<String>,
    },
    /// Run a binary crate
    Run {
        /// Crate to run (auto-prefixes with 'themis-' if missing)
        project: String,
        /// Arguments forwarded to the binary
        #[arg(last = true)]
        args: Vec<String>,
    },
    /// Verify HEAD is tagged with the compiled version and the tree is clean
    ReleaseCheck {
        /// Report uncommitted changes without failing
        #[arg(long)]
        allow_dirty: bool,
    },
}
