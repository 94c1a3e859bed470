//! # Logger
//!
//! Process-wide logging for THeMIS binaries: a compact console layer on stderr (stdout stays
//! free for program output), an optional rolling log file written by a non-blocking worker,
//! and `RUST_LOG`-style filtering.
//!
//! * The builder is typestate-checked: a name is required before [`LoggerBuilder::init`],
//!   and file-only options (rotation, retention, JSON) exist only after [`LoggerBuilder::path`].
//! * [`LoggerBuilder::identity`] records the build identity (usually the version line) as the
//!   first event once the subscriber is installed, so every log starts with what produced it.
//!
//! ## Example
//!
//! ```rust
//! # use themis_logger::{Logger, LevelFilter};
//!
//! let _logger = Logger::builder()
//!     .name("vehicle")
//!     .identity("Version: 1.2.0")
//!     .level(LevelFilter::DEBUG)
//!     .init()
//!     .unwrap();
//! ```

mod error;

pub use crate::error::{LoggerError, LoggerErrorExt};
pub use tracing::level_filters::LevelFilter;
pub use tracing_appender::rolling::Rotation;

use private::Sealed;
use std::fmt::Display;
use std::fs;
use std::marker::PhantomData;
use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::RollingFileAppender;
use tracing_subscriber::fmt::layer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

const DEFAULT_MAX_FILES: usize = 10;
const LOG_FILE_SUFFIX: &str = "log";

#[derive(Debug)]
struct LoggerConfig {
    console: bool,
    path: Option<PathBuf>,
    level: LevelFilter,
    rotation: Rotation,
    max_files: usize,
    json: bool,
    env_filter: Option<String>,
    identity: Option<String>,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            console: true,
            path: None,
            level: LevelFilter::INFO,
            rotation: Rotation::DAILY,
            max_files: DEFAULT_MAX_FILES,
            json: false,
            env_filter: None,
            identity: None,
        }
    }
}

#[derive(Debug)]
pub struct NoName;
#[derive(Debug)]
pub struct WithName(String);
#[derive(Debug)]
pub struct NoFile;
#[derive(Debug)]
pub struct WithFile;

mod private {
    pub trait Sealed {}
}
impl Sealed for NoName {}
impl Sealed for WithName {}
impl Sealed for NoFile {}
impl Sealed for WithFile {}

/// Configures and installs the global tracing subscriber.
#[derive(Debug)]
pub struct LoggerBuilder<N: Sealed = NoName, F: Sealed = NoFile> {
    config: LoggerConfig,
    name: N,
    file_state: PhantomData<F>,
}

impl<F: Sealed> LoggerBuilder<NoName, F> {
    /// Names the logger; also the prefix of rolling log files.
    pub fn name(self, name: impl Into<String>) -> LoggerBuilder<WithName, F> {
        LoggerBuilder { name: WithName(name.into()), config: self.config, file_state: PhantomData }
    }
}

impl LoggerBuilder<WithName, WithFile> {
    /// Number of rotated log files to keep.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub const fn max_files(mut self, max: usize) -> Self {
        self.config.max_files = max;
        self
    }

    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub const fn rotation(mut self, rotation: Rotation) -> Self {
        self.config.rotation = rotation;
        self
    }

    /// Writes the log file as JSON lines.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub const fn json(mut self) -> Self {
        self.config.json = true;
        self
    }
}

impl<F: Sealed> LoggerBuilder<WithName, F> {
    /// Minimum level emitted when no filter directive matches.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub const fn level(mut self, level: LevelFilter) -> Self {
        self.config.level = level;
        self
    }

    /// Explicit filter directives (e.g. `themis=debug,themis_diag=trace`).
    ///
    /// Takes precedence over `RUST_LOG`. An invalid filter makes [`LoggerBuilder::init`] fail.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub fn env_filter(mut self, filter: impl Into<String>) -> Self {
        self.config.env_filter = Some(filter.into());
        self
    }

    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub const fn console(mut self, enabled: bool) -> Self {
        self.config.console = enabled;
        self
    }

    /// Build identity logged right after the subscriber is installed.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub fn identity(mut self, identity: impl Display) -> Self {
        self.config.identity = Some(identity.to_string());
        self
    }

    /// Directory for rolling log files; created on [`LoggerBuilder::init`] if missing.
    pub fn path(self, path: impl Into<PathBuf>) -> LoggerBuilder<WithName, WithFile> {
        let mut config = self.config;
        config.path = Some(path.into());
        LoggerBuilder { config, name: self.name, file_state: PhantomData }
    }

    /// Installs the global tracing subscriber.
    ///
    /// Keep the returned [`Logger`] alive for the lifetime of the process: it owns the
    /// background worker that flushes the log file.
    ///
    /// # Errors
    /// Returns [`LoggerError::Subscriber`] if a global subscriber is already installed,
    /// [`LoggerError::Io`] if the log directory cannot be created, and
    /// [`LoggerError::InvalidConfiguration`] for unusable builder settings.
    pub fn init(self) -> Result<Logger, LoggerError> {
        validate_config(&self.config, &self.name.0)?;

        let env_filter = build_env_filter(&self.config)?;

        let mut layers = Vec::new();

        if self.config.console {
            layers.push(layer().compact().with_writer(std::io::stderr).with_ansi(true).boxed());
        }

        let guard = if let Some(path) = &self.config.path {
            fs::create_dir_all(path)
                .context(format!("Failed to create log directory {}", path.display()))?;

            let file_appender = RollingFileAppender::builder()
                .rotation(self.config.rotation.clone())
                .filename_prefix(&self.name.0)
                .filename_suffix(LOG_FILE_SUFFIX)
                .max_log_files(self.config.max_files)
                .build(path)?;

            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
            let file_layer = layer().with_writer(non_blocking).with_ansi(false);

            let boxed =
                if self.config.json { file_layer.json().boxed() } else { file_layer.boxed() };

            layers.push(boxed);
            Some(guard)
        } else {
            None
        };

        if layers.is_empty() {
            return Err(LoggerError::InvalidConfiguration {
                message: "No logging layers enabled. Enable console or file output.".into(),
                context: None,
            });
        }

        tracing_subscriber::registry().with(env_filter).with(layers).try_init()?;

        if let Some(identity) = &self.config.identity {
            tracing::info!(logger = %self.name.0, %identity, "Logging initialized");
        }

        Ok(Logger { guard })
    }
}

/// Handle to the installed logging system.
///
/// Dropping it stops the background file writer, so drop it only on shutdown.
#[must_use = "Dropping this handle will stop background logging threads."]
#[derive(Debug)]
pub struct Logger {
    guard: Option<WorkerGuard>,
}

impl Logger {
    /// Starts configuring the global tracing subscriber.
    ///
    /// ```rust
    /// use themis_logger::{LevelFilter, Logger};
    ///
    /// let _logger = Logger::builder().name("fan-control").level(LevelFilter::WARN).init().unwrap();
    /// ```
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder { config: LoggerConfig::default(), name: NoName, file_state: PhantomData }
    }

    /// File writer guard; `None` for console-only loggers.
    #[must_use]
    pub const fn guard(&self) -> Option<&WorkerGuard> {
        self.guard.as_ref()
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        if self.guard.is_some() {
            tracing::info!("Logging system shutting down, flushing buffers...");
        }
    }
}

fn validate_config(config: &LoggerConfig, name: &str) -> Result<(), LoggerError> {
    if name.trim().is_empty() {
        return Err(LoggerError::InvalidConfiguration {
            message: "Logger name cannot be empty".into(),
            context: None,
        });
    }

    if config.max_files == 0 {
        return Err(LoggerError::InvalidConfiguration {
            message: "max_files must be greater than zero".into(),
            context: None,
        });
    }

    Ok(())
}

fn build_env_filter(config: &LoggerConfig) -> Result<EnvFilter, LoggerError> {
    let builder = EnvFilter::builder().with_default_directive(config.level.into());
    config.env_filter.as_ref().map_or_else(
        || Ok(builder.from_env_lossy()),
        |filter| {
            builder.parse(filter).map_err(|e| LoggerError::InvalidConfiguration {
                message: format!("Invalid env filter '{filter}': {e}").into(),
                context: None,
            })
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn builder_defaults() {
        let builder = Logger::builder().name("vehicle").identity("Version: 1.2.0");
        assert!(builder.config.console);
        assert_eq!(builder.config.level, LevelFilter::INFO);
        assert_eq!(builder.config.identity.as_deref(), Some("Version: 1.2.0"));
        assert!(builder.config.path.is_none());
        assert!(!builder.config.json);
    }

    #[test]
    fn file_options_are_recorded() {
        let builder = Logger::builder()
            .name("vehicle")
            .env_filter("themis=debug")
            .path("/tmp/themis-logs")
            .max_files(3)
            .json();

        assert_eq!(builder.config.max_files, 3);
        assert!(builder.config.json);
        assert_eq!(builder.config.env_filter.as_deref(), Some("themis=debug"));
        assert_eq!(builder.config.path, Some(PathBuf::from("/tmp/themis-logs")));
    }

    #[test]
    #[serial]
    fn blank_name_is_rejected() {
        let err = Logger::builder().name("   ").init().expect_err("blank name");
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));
    }

    #[test]
    #[serial]
    fn no_layers_is_rejected() {
        let err = Logger::builder().name("silent").console(false).init().expect_err("no layers");
        assert!(err.to_string().contains("No logging layers enabled"));
    }

    #[test]
    #[serial]
    fn invalid_filter_is_rejected() {
        let err =
            Logger::builder().name("vehicle").env_filter("themis=loud").init().expect_err("filter");
        assert!(err.to_string().contains("Invalid env filter"));
    }
}
