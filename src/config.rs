//! Compile-time configuration for the bring-up sequence.
//!
//! All deployment-specific values live here so they can be tuned in one
//! place: the advertised name, the SPI pin assignments, the factory-reset
//! policy and the minimum acceptable module firmware version.

use crate::error::ConfigError;
use crate::version::FirmwareVersion;

/// Advertised BLE device name.
pub const BLE_NAME: &str = "Realforce R2";

// Hardware SPI pin assignments
//
// SCK, MISO and MOSI go to the hardware SPI pins of the host MCU; only
// the module-specific lines are named here. For nRF51822-based Bluefruit
// LE modules driven over SPI.

/// Chip-select GPIO.
pub const BLUEFRUIT_SPI_CS: u8 = 17;

/// IRQ GPIO the module raises when it has data for the host.
pub const BLUEFRUIT_SPI_IRQ: u8 = 16;

/// Hardware reset GPIO. Optional but recommended; `None` if the reset
/// line is not wired.
pub const BLUEFRUIT_SPI_RST: Option<u8> = Some(15);

/// Perform a factory reset during bring-up.
///
/// Enabling this puts the module in a known-good state and clears any
/// configuration left over from previous deployments, so running it at
/// least once is a good idea. Leave it disabled for deployed units:
/// factory reset erases the module's non-volatile memory, including the
/// bonding data a HID keyboard needs for the central to reconnect.
pub const FACTORYRESET_ENABLE: bool = false;

/// Minimum module firmware version required by the features this sketch
/// uses. Modules reporting an older version fail bring-up.
pub const MINIMUM_FIRMWARE_VERSION: &str = "0.6.6";

/// GPIO assignments for the module's SPI control lines.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SpiPins {
    pub chip_select: u8,
    pub interrupt: u8,
    /// Hardware reset line, if wired.
    pub reset: Option<u8>,
}

/// Immutable bring-up configuration, built once at startup and passed by
/// reference to the controller.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BringUpConfig {
    /// Name the module advertises once configured.
    pub device_name: &'static str,
    pub spi_pins: SpiPins,
    /// One-shot policy flag; never persisted.
    pub factory_reset_enabled: bool,
    /// Oldest acceptable module firmware, already validated by [`Self::new`].
    pub minimum_firmware_version: FirmwareVersion,
}

impl BringUpConfig {
    /// Build and validate a configuration.
    ///
    /// A `minimum_firmware_version` that does not parse as a dotted
    /// numeric version is a configuration error, caught here rather than
    /// in the middle of a bring-up attempt.
    pub fn new(
        device_name: &'static str,
        spi_pins: SpiPins,
        factory_reset_enabled: bool,
        minimum_firmware_version: &str,
    ) -> Result<Self, ConfigError> {
        let minimum_firmware_version = FirmwareVersion::parse(minimum_firmware_version)
            .ok_or(ConfigError::BadMinimumVersion)?;

        Ok(Self {
            device_name,
            spi_pins,
            factory_reset_enabled,
            minimum_firmware_version,
        })
    }

    /// Build the configuration from the constant table at the top of this
    /// module.
    pub fn from_constants() -> Result<Self, ConfigError> {
        Self::new(
            BLE_NAME,
            SpiPins {
                chip_select: BLUEFRUIT_SPI_CS,
                interrupt: BLUEFRUIT_SPI_IRQ,
                reset: BLUEFRUIT_SPI_RST,
            },
            FACTORYRESET_ENABLE,
            MINIMUM_FIRMWARE_VERSION,
        )
    }
}
