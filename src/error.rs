//! Error kinds and host status codes.
//!
//! The host firmware speaks in negative errno values: listeners and init
//! hooks return `0` on success and `-E*` on failure. [`status`] bridges
//! our `Result`s to that convention.

use core::fmt;

/// No such device
pub const ENODEV: i32 = 19;
/// I/O error
pub const EIO: i32 = 5;
/// Device or resource busy
pub const EBUSY: i32 = 16;
/// Invalid argument
pub const EINVAL: i32 = 22;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The strip device handle was never provided
    DeviceAbsent,
    /// The strip exists but cannot accept writes right now
    DeviceNotReady,
    /// The driver accepted the write but reported a failure status
    WriteFailed(i32),
    /// The delivered event is not a layer-change event
    InvalidEvent,
    /// A configured pixel index does not fit the strip
    ConfigurationOutOfRange { index: usize, len: usize },
    /// The event bus already delivers to another listener
    AlreadySubscribed,
}

impl Error {
    /// Whether this error must abort startup.
    ///
    /// Not-ready and failed writes only delay visual feedback, the next
    /// successful write reconciles the strip with the buffer.
    pub const fn is_fatal(self) -> bool {
        matches!(
            self,
            Self::DeviceAbsent | Self::ConfigurationOutOfRange { .. } | Self::AlreadySubscribed
        )
    }

    /// Negative status code in the host convention
    pub const fn errno(self) -> i32 {
        match self {
            Self::DeviceAbsent | Self::DeviceNotReady => -ENODEV,
            Self::WriteFailed(_) => -EIO,
            Self::InvalidEvent | Self::ConfigurationOutOfRange { .. } => -EINVAL,
            Self::AlreadySubscribed => -EBUSY,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DeviceAbsent => f.write_str("LED strip device pointer is missing"),
            Self::DeviceNotReady => f.write_str("LED strip device not ready"),
            Self::WriteFailed(code) => write!(f, "failed to update LEDs: {code}"),
            Self::InvalidEvent => f.write_str("invalid layer state changed event"),
            Self::ConfigurationOutOfRange { index, len } => {
                write!(f, "pixel index {index} is out of range for {len} LEDs")
            }
            Self::AlreadySubscribed => f.write_str("event bus already has a listener"),
        }
    }
}

impl core::error::Error for Error {}

/// Convert a result into a host status code (`0` or negative errno)
pub fn status<T>(result: &Result<T, Error>) -> i32 {
    match result {
        Ok(_) => 0,
        Err(err) => err.errno(),
    }
}
