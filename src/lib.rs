//! Bring-up and gating sequence for SPI-attached Bluefruit LE modules.
//!
//! A host MCU drives an external nRF51822-based BLE radio over hardware
//! SPI and advertises a HID keyboard under a fixed name. This crate owns
//! the startup contract between the two: establish the SPI link,
//! optionally force the module back to factory state, gate on a minimum
//! firmware version, then configure the advertised identity. The module's
//! SDEP/AT command channel itself sits behind the [`RadioLink`] trait and
//! is implemented elsewhere.
//!
//! The library is host-testable: it builds with `std` under `cargo test`
//! and `no_std` everywhere else.

#![cfg_attr(not(test), no_std)]

// This module must come first so its macros are visible to the rest.
mod fmt;

pub mod config;
pub mod controller;
pub mod error;
pub mod link;
pub mod version;

pub use config::{BringUpConfig, SpiPins};
pub use controller::{bring_up, BringUpController, LinkStatus};
pub use error::{BringUpError, ConfigError};
pub use link::{LinkError, RadioLink, VersionString};
pub use version::FirmwareVersion;
