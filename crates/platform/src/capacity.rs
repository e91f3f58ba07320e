//! Host A: direct capacity property, with a raw level/scale fallback.

use color_eyre::eyre::Result;
use tracing::debug;
use voltlink_protocol::{BatteryLevel, HostKind};

use crate::reader::{BatteryReader, Diagnostic};

/// Raw battery status as broadcast by the power subsystem.
///
/// A missing value is reported as `-1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatteryStatus {
    pub level: i64,
    pub scale: i64,
}

/// OS touchpoints needed by [`CapacityReader`].
pub trait PowerService {
    /// Whether this OS exposes a direct capacity-percentage property.
    fn has_capacity_property(&self) -> bool;

    /// Read the capacity property. Only called when
    /// [`has_capacity_property`](Self::has_capacity_property) is true.
    fn capacity_property(&self) -> Result<i64>;

    /// Fetch the latest battery status broadcast, if the system has one.
    fn battery_status(&self) -> Result<Option<BatteryStatus>>;
}

/// Convert a raw `level`/`scale` pair to a percentage, truncating toward zero.
///
/// `scale <= 0`, a missing level, or a level above the scale give
/// [`BatteryLevel::Unavailable`].
pub fn level_from_ratio(level: i64, scale: i64) -> BatteryLevel {
    if scale <= 0 || level < 0 {
        return BatteryLevel::Unavailable;
    }
    let percent = i128::from(level) * 100 / i128::from(scale);
    i64::try_from(percent)
        .map(BatteryLevel::from_percent)
        .unwrap_or(BatteryLevel::Unavailable)
}

pub struct CapacityReader<S> {
    service: S,
}

impl<S: PowerService> CapacityReader<S> {
    pub fn new(service: S) -> Self {
        Self { service }
    }

    fn read_capacity_property(&self) -> BatteryLevel {
        match self.service.capacity_property() {
            Ok(value) => {
                let level = BatteryLevel::from_percent(value);
                if !level.is_known() {
                    debug!(value, "Capacity property outside 0..=100");
                }
                level
            }
            Err(e) => {
                debug!(error = %e, "Failed to read capacity property");
                BatteryLevel::Unavailable
            }
        }
    }

    fn read_status_broadcast(&self) -> BatteryLevel {
        match self.service.battery_status() {
            Ok(Some(status)) => {
                let level = level_from_ratio(status.level, status.scale);
                if !level.is_known() {
                    debug!(
                        level = status.level,
                        scale = status.scale,
                        "Unusable battery status"
                    );
                }
                level
            }
            Ok(None) => {
                debug!("No battery status broadcast available");
                BatteryLevel::Unavailable
            }
            Err(e) => {
                debug!(error = %e, "Failed to read battery status");
                BatteryLevel::Unavailable
            }
        }
    }
}

impl<S: PowerService> BatteryReader for CapacityReader<S> {
    fn kind(&self) -> HostKind {
        HostKind::Capacity
    }

    fn battery_level(&mut self) -> BatteryLevel {
        if self.service.has_capacity_property() {
            self.read_capacity_property()
        } else {
            self.read_status_broadcast()
        }
    }

    fn diagnostics(&mut self) -> Vec<Diagnostic> {
        let has_property = self.service.has_capacity_property();
        let mut out = vec![Diagnostic::new("capacity_property", has_property)];

        if has_property {
            let value = match self.service.capacity_property() {
                Ok(v) => v.to_string(),
                Err(e) => format!("error: {}", e),
            };
            out.push(Diagnostic::new("capacity", value));
        }

        match self.service.battery_status() {
            Ok(Some(status)) => {
                out.push(Diagnostic::new("status_level", status.level));
                out.push(Diagnostic::new("status_scale", status.scale));
            }
            Ok(None) => out.push(Diagnostic::new("status", "none")),
            Err(e) => out.push(Diagnostic::new("status", format!("error: {}", e))),
        }

        out.push(Diagnostic::new("battery_level", self.battery_level()));
        out
    }
}
