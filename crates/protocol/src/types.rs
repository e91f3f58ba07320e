use std::fmt;

use serde::{Deserialize, Serialize};

use crate::version::{MIN_SUPPORTED_VERSION, PROTOCOL_VERSION};

/// Wire value meaning "battery level unknown".
pub const UNAVAILABLE_SENTINEL: i64 = -1;

/// A charge percentage, always within `0..=100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Percent(u8);

impl Percent {
    pub const MAX: u8 = 100;

    pub fn new(value: u8) -> Option<Self> {
        (value <= Self::MAX).then_some(Self(value))
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<i64> for Percent {
    type Error = InvalidLevel;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        u8::try_from(value)
            .ok()
            .and_then(Percent::new)
            .ok_or(InvalidLevel(value))
    }
}

impl fmt::Display for Percent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

/// Result of a single battery query.
///
/// The wire contract encodes this as a signed integer with `-1` for the
/// unknown case. Inside Rust the two cases are kept apart so that a 0%
/// battery can never be confused with "no reading".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BatteryLevel {
    Known(Percent),
    #[default]
    Unavailable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("battery level {0} is outside the contract range [-1, 100]")]
pub struct InvalidLevel(pub i64);

impl BatteryLevel {
    /// Builds a level from a computed percentage. Anything outside `0..=100`
    /// is not a usable reading.
    pub fn from_percent(value: i64) -> Self {
        Percent::try_from(value)
            .map(BatteryLevel::Known)
            .unwrap_or(BatteryLevel::Unavailable)
    }

    /// Decodes a wire value, rejecting anything the contract does not allow.
    pub fn from_wire(value: i64) -> Result<Self, InvalidLevel> {
        if value == UNAVAILABLE_SENTINEL {
            return Ok(BatteryLevel::Unavailable);
        }
        Percent::try_from(value).map(BatteryLevel::Known)
    }

    pub fn to_wire(self) -> i64 {
        match self {
            BatteryLevel::Known(p) => i64::from(p.value()),
            BatteryLevel::Unavailable => UNAVAILABLE_SENTINEL,
        }
    }

    pub fn percent(self) -> Option<u8> {
        match self {
            BatteryLevel::Known(p) => Some(p.value()),
            BatteryLevel::Unavailable => None,
        }
    }

    pub fn is_known(self) -> bool {
        matches!(self, BatteryLevel::Known(_))
    }
}

impl fmt::Display for BatteryLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BatteryLevel::Known(p) => write!(f, "{}", p),
            BatteryLevel::Unavailable => write!(f, "unknown"),
        }
    }
}

/// Which reader strategy a host is serving queries from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HostKind {
    /// Direct capacity property with a raw level/scale fallback.
    Capacity,
    /// Fractional level read inside a monitoring window.
    Monitored,
}

impl HostKind {
    pub fn label(&self) -> &'static str {
        match self {
            HostKind::Capacity => "capacity",
            HostKind::Monitored => "monitored",
        }
    }
}

impl fmt::Display for HostKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostStatus {
    pub host: HostKind,
    pub version: String,
    pub protocol_version: u32,
    pub min_supported_version: u32,
}

impl HostStatus {
    pub fn new(host: HostKind, version: impl Into<String>) -> Self {
        Self {
            host,
            version: version.into(),
            protocol_version: PROTOCOL_VERSION,
            min_supported_version: MIN_SUPPORTED_VERSION,
        }
    }
}
