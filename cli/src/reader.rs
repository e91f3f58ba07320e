use color_eyre::eyre::Result;
use voltlink_platform::BatteryReader;
use voltlink_protocol::HostKind;

use crate::config::UserConfig;

pub type PlatformReader = Box<dyn BatteryReader>;

/// Build the reader selected by the config, falling back to the build target.
pub fn build_reader(config: &UserConfig) -> Result<PlatformReader> {
    let kind = config.reader.resolve();
    tracing::debug!(requested = ?config.reader, resolved = %kind, "Selecting battery reader");

    match kind {
        HostKind::Capacity => capacity_reader(config),
        HostKind::Monitored => monitored_reader(),
    }
}

#[cfg(feature = "sysfs")]
fn capacity_reader(config: &UserConfig) -> Result<PlatformReader> {
    use voltlink_platform::sysfs::SysfsPowerService;
    use voltlink_platform::CapacityReader;

    let service = SysfsPowerService::new(&config.power_supply_path);
    if !service.is_supported() {
        tracing::warn!(path = %config.power_supply_path.display(), "Power supply class not found");
    }
    Ok(Box::new(CapacityReader::new(service)))
}

#[cfg(not(feature = "sysfs"))]
fn capacity_reader(_config: &UserConfig) -> Result<PlatformReader> {
    Err(color_eyre::eyre::eyre!(
        "The capacity reader is not available in this build (enable the `sysfs` feature)"
    ))
}

#[cfg(feature = "manager")]
fn monitored_reader() -> Result<PlatformReader> {
    use voltlink_platform::manager::ManagerDeviceStatus;
    use voltlink_platform::MonitoredReader;

    if !ManagerDeviceStatus::is_available() {
        tracing::warn!("No battery reported by the system battery manager");
    }
    Ok(Box::new(MonitoredReader::new(ManagerDeviceStatus::new())))
}

#[cfg(not(feature = "manager"))]
fn monitored_reader() -> Result<PlatformReader> {
    Err(color_eyre::eyre::eyre!(
        "The monitored reader is not available in this build (enable the `manager` feature)"
    ))
}

#[cfg(all(test, feature = "sysfs"))]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;
    use crate::config::ReaderKind;

    #[test]
    fn test_capacity_reader_uses_configured_path() {
        let root = TempDir::new().unwrap();
        let battery = root.path().join("BAT0");
        fs::create_dir_all(&battery).unwrap();
        fs::write(battery.join("type"), "Battery\n").unwrap();
        fs::write(battery.join("capacity"), "61\n").unwrap();

        let config = UserConfig {
            reader: ReaderKind::Capacity,
            power_supply_path: root.path().to_path_buf(),
            ..Default::default()
        };
        let mut reader = build_reader(&config).unwrap();
        assert_eq!(reader.kind(), HostKind::Capacity);
        assert_eq!(reader.battery_level().to_wire(), 61);
    }
}
