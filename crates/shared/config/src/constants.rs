//! Values compiled into the binary. A zero buffer size or fan count fails the build.

use crate::version::{BuildKind, Version};
use std::num::{NonZeroU8, NonZeroU16};

const BUILD: BuildKind =
    if cfg!(feature = "test-build") { BuildKind::Test } else { BuildKind::Release };

/// Version of this build.
pub const VERSION: Version = Version::new(1, 2, 0, BUILD);

/// Maximum UDP payload, in bytes, the transport layer allocates send/receive buffers for.
pub const UDP_BUFFER_SIZE: NonZeroU16 = match NonZeroU16::new(2014) {
    Some(size) => size,
    None => panic!("UDP buffer size must be non-zero"),
};

/// Number of cooling-fan units the hardware layer drives.
pub const FAN_COUNT: NonZeroU8 = match NonZeroU8::new(5) {
    Some(count) => count,
    None => panic!("fan count must be non-zero"),
};
