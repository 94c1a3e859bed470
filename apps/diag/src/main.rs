#![allow(clippy::print_stdout)]

use anyhow::Context;
use clap::Parser;
use themis_config::VehicleConfig;
use themis_diag::{Cli, Diagnostics};
use themis_logger::Logger;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = VehicleConfig::current();

    let builder = Logger::builder()
        .name(env!("CARGO_PKG_NAME"))
        .identity(config.get_version())
        .level(cli.log_level());
    let _logger = match &cli.log_dir {
        Some(dir) => builder.path(dir).init(),
        None => builder.init(),
    }
    .context("Failed to initialize logging")?;

    let report = Diagnostics::new(config).render(cli.format)?;
    println!("{report}");

    Ok(())
}
