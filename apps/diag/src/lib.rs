//! Diagnostics for a THeMIS build.
//!
//! The report is rendered from a [`VehicleConfig`] handed in by the caller; this crate never
//! reads the compile-time constants itself.

pub mod args;

use anyhow::Context;
use themis_config::VehicleConfig;
use tracing::debug;

pub use crate::args::{Cli, Format};

/// Renders the build identity of the configuration it was given.
#[derive(Debug, Clone)]
pub struct Diagnostics {
    config: VehicleConfig,
}

impl Diagnostics {
    #[must_use]
    pub const fn new(config: VehicleConfig) -> Self {
        Self { config }
    }

    /// Renders the report.
    ///
    /// Text output starts with the version line (`Version: X.Y.Z[-test]`), followed by the
    /// UDP buffer size and the fan count.
    ///
    /// # Errors
    /// Returns an error if the JSON serialization fails.
    pub fn render(&self, format: Format) -> anyhow::Result<String> {
        debug!(?format, "Rendering diagnostics report");

        match format {
            Format::Text => Ok(self.render_text()),
            Format::Json => serde_json::to_string_pretty(&*self.config)
                .context("Failed to serialize vehicle configuration"),
        }
    }

    fn render_text(&self) -> String {
        format!(
            "{}\nUDP buffer size: {} bytes\nFan count: {}",
            self.config.get_version(),
            self.config.udp_buffer_size(),
            self.config.fan_count(),
        )
    }
}
