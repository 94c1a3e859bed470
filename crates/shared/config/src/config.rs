use crate::constants::{FAN_COUNT, UDP_BUFFER_SIZE, VERSION};
use crate::version::Version;
use serde::Serialize;
use std::num::{NonZeroU8, NonZeroU16};
use std::ops::{Deref, Range};
use std::sync::Arc;

/// Build identity and fixed platform parameters shared by all subsystems.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VehicleConfigInner {
    pub version: Version,
    pub udp: UdpConfig,
    pub fan: FanConfig,
}

/// Immutable, Arc-wrapped config for inexpensive cloning into subsystems.
///
/// Read-only after construction: there is no `DerefMut`.
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VehicleConfig {
    #[serde(flatten)]
    inner: Arc<VehicleConfigInner>,
}

impl VehicleConfig {
    /// The configuration compiled into this binary.
    #[must_use]
    pub fn current() -> Self {
        Self::default()
    }

    /// Wraps explicit values, e.g. for a simulator that emulates another build.
    #[must_use]
    pub fn new(inner: VehicleConfigInner) -> Self {
        Self { inner: Arc::new(inner) }
    }

    /// Version line such as `Version: 1.2.0` (release) or `Version: 1.2.0-test`.
    #[must_use]
    pub fn get_version(&self) -> String {
        self.inner.version.label()
    }

    #[must_use]
    pub fn udp_buffer_size(&self) -> NonZeroU16 {
        self.inner.udp.buffer_size
    }

    #[must_use]
    pub fn fan_count(&self) -> NonZeroU8 {
        self.inner.fan.count
    }
}

impl Deref for VehicleConfig {
    type Target = VehicleConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl From<VehicleConfigInner> for VehicleConfig {
    fn from(inner: VehicleConfigInner) -> Self {
        Self::new(inner)
    }
}

/// UDP transport parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct UdpConfig {
    /// Maximum datagram payload in bytes.
    pub buffer_size: NonZeroU16,
}

impl UdpConfig {
    #[must_use]
    pub const fn new(buffer_size: NonZeroU16) -> Self {
        Self { buffer_size }
    }

    /// Buffer size in bytes, as an allocation length.
    #[must_use]
    pub fn capacity(&self) -> usize {
        usize::from(self.buffer_size.get())
    }

    /// A zeroed datagram buffer of exactly `buffer_size` bytes.
    #[must_use]
    pub fn buffer(&self) -> Vec<u8> {
        vec![0; self.capacity()]
    }
}

/// Cooling-fan topology.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct FanConfig {
    /// Number of physical fan units.
    pub count: NonZeroU8,
}

impl FanConfig {
    #[must_use]
    pub const fn new(count: NonZeroU8) -> Self {
        Self { count }
    }

    /// Fan indices `0..count`, the addresses used by the fan-control layer.
    #[must_use]
    pub fn ids(&self) -> Range<u8> {
        0..self.count.get()
    }

    /// Number of slots a per-fan control array needs.
    #[must_use]
    pub fn slots(&self) -> usize {
        usize::from(self.count.get())
    }
}

// --- Default ---

impl Default for VehicleConfigInner {
    fn default() -> Self {
        Self { version: VERSION, udp: UdpConfig::default(), fan: FanConfig::default() }
    }
}

impl Default for UdpConfig {
    fn default() -> Self {
        Self::new(UDP_BUFFER_SIZE)
    }
}

impl Default for FanConfig {
    fn default() -> Self {
        Self::new(FAN_COUNT)
    }
}
