//! Host B: fractional level read inside a scoped monitoring window.

use std::ops::Deref;

use tracing::{debug, trace};
use voltlink_protocol::{BatteryLevel, HostKind};

use crate::reader::{BatteryReader, Diagnostic};

/// OS touchpoints needed by [`MonitoredReader`].
pub trait DeviceStatus {
    fn set_monitoring_enabled(&mut self, enabled: bool);

    fn is_monitoring_enabled(&self) -> bool;

    /// Normalized level in `0.0..=1.0`, or negative when unknown. Only
    /// meaningful while monitoring is enabled.
    fn battery_level(&self) -> f32;
}

/// Keeps battery monitoring enabled for its lifetime.
///
/// Monitoring is switched off when the guard drops, on every exit path.
pub struct MonitoringGuard<'a, D: DeviceStatus + ?Sized> {
    device: &'a mut D,
}

impl<'a, D: DeviceStatus + ?Sized> MonitoringGuard<'a, D> {
    pub fn enable(device: &'a mut D) -> Self {
        device.set_monitoring_enabled(true);
        trace!("Battery monitoring enabled");
        Self { device }
    }
}

impl<D: DeviceStatus + ?Sized> Deref for MonitoringGuard<'_, D> {
    type Target = D;

    fn deref(&self) -> &D {
        self.device
    }
}

impl<D: DeviceStatus + ?Sized> Drop for MonitoringGuard<'_, D> {
    fn drop(&mut self) {
        self.device.set_monitoring_enabled(false);
        trace!("Battery monitoring disabled");
    }
}

/// Convert a normalized fraction to a percentage, rounding to nearest.
pub fn level_from_fraction(fraction: f32) -> BatteryLevel {
    if fraction.is_nan() || !(0.0..=1.0).contains(&fraction) {
        return BatteryLevel::Unavailable;
    }
    let percent = (f64::from(fraction) * 100.0).round() as i64;
    BatteryLevel::from_percent(percent)
}

pub struct MonitoredReader<D> {
    device: D,
}

impl<D: DeviceStatus> MonitoredReader<D> {
    pub fn new(device: D) -> Self {
        Self { device }
    }

    pub fn device(&self) -> &D {
        &self.device
    }

    fn read_fraction(&mut self) -> f32 {
        let guard = MonitoringGuard::enable(&mut self.device);
        guard.battery_level()
    }
}

impl<D: DeviceStatus> BatteryReader for MonitoredReader<D> {
    fn kind(&self) -> HostKind {
        HostKind::Monitored
    }

    fn battery_level(&mut self) -> BatteryLevel {
        let fraction = self.read_fraction();
        let level = level_from_fraction(fraction);
        if !level.is_known() {
            debug!(fraction, "Device reported no usable battery level");
        }
        level
    }

    fn diagnostics(&mut self) -> Vec<Diagnostic> {
        let fraction = self.read_fraction();
        vec![
            Diagnostic::new("fraction", fraction),
            Diagnostic::new("monitoring_after_read", self.device.is_monitoring_enabled()),
            Diagnostic::new("battery_level", level_from_fraction(fraction)),
        ]
    }
}
