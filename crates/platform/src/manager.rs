//! Fractional-level touchpoint backed by `starship-battery`.
//!
//! Monitoring is an open [`Manager`] session: enabling creates the manager,
//! disabling drops it. Outside that window the level reads as `-1.0`.

use color_eyre::eyre::{eyre, Result};
use starship_battery::units::ratio::ratio;
use starship_battery::Manager;
use tracing::debug;

use crate::monitored::DeviceStatus;

const UNKNOWN_LEVEL: f32 = -1.0;

#[derive(Default)]
pub struct ManagerDeviceStatus {
    manager: Option<Manager>,
}

impl ManagerDeviceStatus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if a battery is available on this system.
    pub fn is_available() -> bool {
        Manager::new()
            .ok()
            .and_then(|m| m.batteries().ok())
            .and_then(|mut b| b.next())
            .and_then(|b| b.ok())
            .is_some()
    }

    fn read_state_of_charge(manager: &Manager) -> Result<f32> {
        let battery = manager
            .batteries()?
            .next()
            .ok_or_else(|| eyre!("No battery found"))??;
        Ok(battery.state_of_charge().get::<ratio>())
    }
}

impl DeviceStatus for ManagerDeviceStatus {
    fn set_monitoring_enabled(&mut self, enabled: bool) {
        if !enabled {
            self.manager = None;
            return;
        }
        if self.manager.is_some() {
            return;
        }
        match Manager::new() {
            Ok(manager) => self.manager = Some(manager),
            Err(e) => debug!(error = %e, "Failed to open battery manager"),
        }
    }

    fn is_monitoring_enabled(&self) -> bool {
        self.manager.is_some()
    }

    fn battery_level(&self) -> f32 {
        let Some(manager) = &self.manager else {
            return UNKNOWN_LEVEL;
        };
        match Self::read_state_of_charge(manager) {
            Ok(fraction) => fraction,
            Err(e) => {
                debug!(error = %e, "Failed to read state of charge");
                UNKNOWN_LEVEL
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_unknown_while_not_monitoring() {
        let status = ManagerDeviceStatus::new();
        assert!(!status.is_monitoring_enabled());
        assert_eq!(status.battery_level(), UNKNOWN_LEVEL);
    }

    #[test]
    fn test_disable_releases_manager() {
        let mut status = ManagerDeviceStatus::new();
        status.set_monitoring_enabled(true);
        status.set_monitoring_enabled(false);
        assert!(!status.is_monitoring_enabled());
        assert_eq!(status.battery_level(), UNKNOWN_LEVEL);
    }
}
