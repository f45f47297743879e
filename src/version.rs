//! Dotted firmware-version parsing and ordering.
//!
//! Bluefruit modules report their firmware revision as a dotted decimal
//! string such as `"0.6.6"`. Comparison has to be numeric per component,
//! never lexicographic, so that `"0.10.0"` orders above `"0.6.6"`.

/// A parsed firmware version.
///
/// Ordering is derived from the field order: major, then minor, then
/// patch, each compared numerically.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FirmwareVersion {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl FirmwareVersion {
    /// Parse a dotted version string with one to three components,
    /// e.g. `"0.6.6"`, `"0.7"` or `"1"`.
    ///
    /// Missing components are treated as 0, so `"0.7"` parses the same
    /// as `"0.7.0"`. Returns `None` for empty input, non-numeric
    /// components, or more than three components.
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        if s.is_empty() {
            return None;
        }

        let mut parts = s.split('.');
        let major = parts.next()?.parse().ok()?;
        let minor = match parts.next() {
            Some(p) => p.parse().ok()?,
            None => 0,
        };
        let patch = match parts.next() {
            Some(p) => p.parse().ok()?,
            None => 0,
        };
        if parts.next().is_some() {
            return None;
        }

        Some(Self {
            major,
            minor,
            patch,
        })
    }
}

impl core::fmt::Display for FirmwareVersion {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}
