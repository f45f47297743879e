//! Error types for bring-up.
//!
//! All variants carry only fixed-size data - no `alloc`. `defmt::Format`
//! is derived behind the `defmt` feature for on-target logging.

use crate::link::{LinkError, VersionString};
use crate::version::FirmwareVersion;

/// Terminal failure of a single bring-up attempt.
///
/// The controller never retries internally; it surfaces the first failure
/// to the caller, which decides whether to retry, halt, or degrade. Each
/// variant is specific enough to tell the operator whether the fix is
/// wiring, a module firmware update, or configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BringUpError {
    /// The SPI link could not be established at all.
    LinkUnavailable(LinkError),

    /// The module did not acknowledge the factory reset command.
    ResetFailed(LinkError),

    /// The module did not come back up after its post-reset reboot.
    LinkLostAfterReset(LinkError),

    /// The firmware version query itself failed at the transport level.
    VersionQueryFailed(LinkError),

    /// The module's firmware is older than the configured minimum.
    ///
    /// `reported` is the raw string from the module (which may be
    /// malformed); `required` is the configured minimum. Not retryable:
    /// the module must be updated out-of-band.
    FirmwareTooOld {
        reported: VersionString,
        required: FirmwareVersion,
    },

    /// The module refused the identity configuration.
    ConfigurationRejected(LinkError),
}

impl core::fmt::Display for BringUpError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::LinkUnavailable(e) => write!(f, "SPI link unavailable: {e}"),
            Self::ResetFailed(e) => write!(f, "factory reset not acknowledged: {e}"),
            Self::LinkLostAfterReset(e) => write!(f, "link lost after factory reset: {e}"),
            Self::VersionQueryFailed(e) => write!(f, "firmware version query failed: {e}"),
            Self::FirmwareTooOld { reported, required } => write!(
                f,
                "module firmware {} is older than required {}",
                reported.as_str(),
                required
            ),
            Self::ConfigurationRejected(e) => write!(f, "module rejected configuration: {e}"),
        }
    }
}

/// Construction-time configuration error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// `minimum_firmware_version` is not a dotted numeric version.
    BadMinimumVersion,
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::BadMinimumVersion => {
                f.write_str("minimum firmware version is not a dotted numeric version")
            }
        }
    }
}
