//! The bring-up state machine.
//!
//! Drives the radio link through link establishment, the optional
//! factory reset, the firmware-version gate and identity configuration,
//! and surfaces a single terminal [`LinkStatus`]. Runs once at startup,
//! blocking, before the sketch enters its main loop.

use crate::config::BringUpConfig;
use crate::error::BringUpError;
use crate::link::{RadioLink, VersionString};
use crate::version::FirmwareVersion;

/// Link state as seen by the controller. Produced fresh for each
/// bring-up attempt; only `Ready` and `Failed` are terminal.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LinkStatus {
    Disconnected,
    Connected,
    Ready,
    Failed(BringUpError),
}

impl LinkStatus {
    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready)
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Ready | Self::Failed(_))
    }
}

/// Runs the gating sequence against a [`RadioLink`].
///
/// The controller exclusively borrows the link for the duration of the
/// attempt and holds no other mutable state. It never retries: the first
/// failure is returned to the caller, which owns the retry policy.
pub struct BringUpController<'a, L: RadioLink> {
    config: &'a BringUpConfig,
    link: &'a mut L,
    status: LinkStatus,
}

impl<'a, L: RadioLink> BringUpController<'a, L> {
    pub fn new(config: &'a BringUpConfig, link: &'a mut L) -> Self {
        Self {
            config,
            link,
            status: LinkStatus::Disconnected,
        }
    }

    /// Run the sequence to its terminal state.
    pub fn run(mut self) -> LinkStatus {
        self.status = match self.sequence() {
            Ok(()) => LinkStatus::Ready,
            Err(e) => {
                warn!("bring-up failed: {}", e);
                LinkStatus::Failed(e)
            }
        };
        self.status
    }

    fn sequence(&mut self) -> Result<(), BringUpError> {
        let pins = &self.config.spi_pins;
        info!(
            "establishing SPI link (cs={} irq={})",
            pins.chip_select, pins.interrupt
        );
        self.link
            .establish()
            .map_err(BringUpError::LinkUnavailable)?;
        self.status = LinkStatus::Connected;

        if self.config.factory_reset_enabled {
            info!("factory reset requested, erasing module state");
            self.link.reset().map_err(BringUpError::ResetFailed)?;
            // The module reboots after a factory reset; bring the link
            // back up before trusting anything it reports.
            self.link
                .establish()
                .map_err(BringUpError::LinkLostAfterReset)?;
        }

        let reported = self
            .link
            .query_firmware_version()
            .map_err(BringUpError::VersionQueryFailed)?;
        self.check_version(&reported)?;

        self.link
            .set_device_name(self.config.device_name)
            .map_err(BringUpError::ConfigurationRejected)?;

        info!("bring-up complete, advertising as {}", self.config.device_name);
        Ok(())
    }

    /// Gate on the module's reported firmware version.
    ///
    /// Strict less-than: a module exactly at the minimum passes. A report
    /// that does not parse counts as below any requirement; the raw
    /// string is kept so the operator sees exactly what the module said.
    fn check_version(&self, reported: &VersionString) -> Result<(), BringUpError> {
        let required = self.config.minimum_firmware_version;
        match FirmwareVersion::parse(reported) {
            Some(v) if v >= required => {
                debug!("module firmware {} meets minimum {}", v, required);
                Ok(())
            }
            _ => Err(BringUpError::FirmwareTooOld {
                reported: reported.clone(),
                required,
            }),
        }
    }
}

/// Convenience wrapper: run one bring-up attempt against `link`.
pub fn bring_up(config: &BringUpConfig, link: &mut impl RadioLink) -> LinkStatus {
    BringUpController::new(config, link).run()
}
