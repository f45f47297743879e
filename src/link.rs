//! The radio-link capability consumed by the bring-up controller.
//!
//! The concrete implementation wraps the module's SDEP/AT command channel
//! over hardware SPI and lives outside this crate; the controller only
//! depends on the four operations below.

use heapless::String;

/// Longest firmware version string the module is expected to report.
pub const VERSION_STRING_CAPACITY: usize = 16;

/// Firmware version as reported by the module, before parsing.
pub type VersionString = String<VERSION_STRING_CAPACITY>;

/// Transport-level failure of a single link operation.
///
/// Every operation is blocking; the implementation folds its own deadline
/// into `Timeout` rather than blocking forever.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LinkError {
    /// The operation did not complete within the transport deadline.
    Timeout,
    /// SPI transfer failed at the bus level.
    Bus,
    /// The module answered with an error response.
    Rejected,
}

impl core::fmt::Display for LinkError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let s = match self {
            Self::Timeout => "timeout",
            Self::Bus => "SPI bus error",
            Self::Rejected => "error response",
        };
        f.write_str(s)
    }
}

/// Command surface of the SPI-attached radio module.
///
/// Implementations own the SPI bus and the pins named in
/// [`SpiPins`](crate::config::SpiPins).
pub trait RadioLink {
    /// Establish (or re-establish) the SPI link and verify the module
    /// responds to commands.
    fn establish(&mut self) -> Result<(), LinkError>;

    /// Issue a factory reset, erasing stored configuration and bonding
    /// data. The module reboots afterwards, dropping the link.
    fn reset(&mut self) -> Result<(), LinkError>;

    /// Ask the module for its firmware revision string.
    fn query_firmware_version(&mut self) -> Result<VersionString, LinkError>;

    /// Set the advertised BLE device name.
    fn set_device_name(&mut self, name: &str) -> Result<(), LinkError>;
}
