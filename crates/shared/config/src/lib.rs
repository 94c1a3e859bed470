//! # Vehicle configuration
//!
//! Build-time facts every THeMIS subsystem reads: the software version, the UDP datagram
//! buffer size and the number of cooling fans. Nothing here is mutable and nothing can fail.
//!
//! Subsystems should receive a [`VehicleConfig`] at startup instead of reaching for the
//! constants directly:
//!
//! ```rust
//! use themis_config::VehicleConfig;
//!
//! let config = VehicleConfig::current();
//! assert!(config.get_version().starts_with("Version: 1.2.0"));
//! assert_eq!(config.udp.buffer().len(), 2014);
//! assert_eq!(config.fan.ids().count(), 5);
//! ```
//!
//! Build `themis-config` with the `test-build` feature to mark the binary as a test/debug
//! build; its version string then carries the `-test` suffix.

pub mod config;
pub mod constants;
pub mod version;

pub use crate::config::{FanConfig, UdpConfig, VehicleConfig, VehicleConfigInner};
pub use crate::constants::{FAN_COUNT, UDP_BUFFER_SIZE, VERSION};
pub use crate::version::{BuildKind, Version};

/// Version string of this build, e.g. `Version: 1.2.0` or `Version: 1.2.0-test`.
#[must_use]
pub fn get_version() -> String {
    VERSION.label()
}
