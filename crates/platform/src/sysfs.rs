//! Capacity touchpoints over the Linux/Android power-supply class.
//!
//! `capacity` is the direct percentage property. When a driver does not
//! publish it, `charge_now`/`charge_full` (or `energy_now`/`energy_full`)
//! stand in for the raw level/scale status.

use std::fs;
use std::path::{Path, PathBuf};

use color_eyre::eyre::{eyre, Result, WrapErr};

use crate::capacity::{BatteryStatus, PowerService};

pub const POWER_SUPPLY_PATH: &str = "/sys/class/power_supply";

const STATUS_PAIRS: [(&str, &str); 2] = [
    ("charge_now", "charge_full"),
    ("energy_now", "energy_full"),
];

#[derive(Debug, Clone)]
pub struct SysfsPowerService {
    root: PathBuf,
}

impl Default for SysfsPowerService {
    fn default() -> Self {
        Self::new(POWER_SUPPLY_PATH)
    }
}

impl SysfsPowerService {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn is_supported(&self) -> bool {
        self.root.exists()
    }

    /// First supply whose `type` is `Battery`, in name order.
    pub fn battery_path(&self) -> Option<PathBuf> {
        let mut entries: Vec<PathBuf> = fs::read_dir(&self.root)
            .ok()?
            .flatten()
            .map(|entry| entry.path())
            .collect();
        entries.sort();

        entries.into_iter().find(|path| {
            fs::read_to_string(path.join("type"))
                .map(|t| t.trim() == "Battery")
                .unwrap_or(false)
        })
    }
}

impl PowerService for SysfsPowerService {
    fn has_capacity_property(&self) -> bool {
        self.battery_path()
            .map(|path| path.join("capacity").is_file())
            .unwrap_or(false)
    }

    fn capacity_property(&self) -> Result<i64> {
        let path = self
            .battery_path()
            .ok_or_else(|| eyre!("No battery found"))?;
        read_int(&path.join("capacity"))
    }

    fn battery_status(&self) -> Result<Option<BatteryStatus>> {
        let Some(path) = self.battery_path() else {
            return Ok(None);
        };

        let pairs: Vec<(PathBuf, PathBuf)> = STATUS_PAIRS
            .iter()
            .map(|(level, scale)| (path.join(level), path.join(scale)))
            .collect();

        // A complete pair wins; a half-present one still reports its missing side as -1.
        let chosen = pairs
            .iter()
            .find(|(level, scale)| level.is_file() && scale.is_file())
            .or_else(|| {
                pairs
                    .iter()
                    .find(|(level, scale)| level.is_file() || scale.is_file())
            });

        let Some((level_path, scale_path)) = chosen else {
            return Ok(None);
        };
        Ok(Some(BatteryStatus {
            level: read_optional_int(level_path)?,
            scale: read_optional_int(scale_path)?,
        }))
    }
}

fn read_int(path: &Path) -> Result<i64> {
    let content =
        fs::read_to_string(path).wrap_err_with(|| format!("Failed to read {}", path.display()))?;
    content
        .trim()
        .parse::<i64>()
        .wrap_err_with(|| format!("Invalid integer in {}", path.display()))
}

/// Missing attributes read as `-1`, the broadcast's "extra not present".
fn read_optional_int(path: &Path) -> Result<i64> {
    if path.is_file() {
        read_int(path)
    } else {
        Ok(-1)
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;
    use crate::{BatteryReader, CapacityReader};

    fn supply(root: &Path, name: &str, kind: &str, attrs: &[(&str, &str)]) {
        let dir = root.join(name);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("type"), format!("{}\n", kind)).unwrap();
        for (attr, value) in attrs {
            fs::write(dir.join(attr), format!("{}\n", value)).unwrap();
        }
    }

    fn read(root: &TempDir) -> i64 {
        CapacityReader::new(SysfsPowerService::new(root.path()))
            .battery_level()
            .to_wire()
    }

    #[test]
    fn test_capacity_property() {
        let root = TempDir::new().unwrap();
        supply(root.path(), "AC", "Mains", &[("online", "1")]);
        supply(
            root.path(),
            "BAT0",
            "Battery",
            &[("capacity", "73"), ("charge_now", "1"), ("charge_full", "2")],
        );
        assert_eq!(read(&root), 73);
    }

    #[test]
    fn test_charge_fallback() {
        let root = TempDir::new().unwrap();
        supply(
            root.path(),
            "BAT0",
            "Battery",
            &[("charge_now", "2500000"), ("charge_full", "5000000")],
        );
        assert_eq!(read(&root), 50);
    }

    #[test]
    fn test_energy_fallback() {
        let root = TempDir::new().unwrap();
        supply(
            root.path(),
            "battery",
            "Battery",
            &[("energy_now", "41000000"), ("energy_full", "50000000")],
        );
        assert_eq!(read(&root), 82);
    }

    #[test]
    fn test_zero_scale_is_unavailable() {
        let root = TempDir::new().unwrap();
        supply(
            root.path(),
            "BAT0",
            "Battery",
            &[("charge_now", "100"), ("charge_full", "0")],
        );
        assert_eq!(read(&root), -1);
    }

    #[test]
    fn test_missing_scale_is_unavailable() {
        let root = TempDir::new().unwrap();
        supply(root.path(), "BAT0", "Battery", &[("charge_now", "100")]);
        let service = SysfsPowerService::new(root.path());
        assert_eq!(
            service.battery_status().unwrap(),
            Some(BatteryStatus {
                level: 100,
                scale: -1
            })
        );
        assert_eq!(read(&root), -1);
    }

    #[test]
    fn test_incomplete_charge_pair_falls_through_to_energy() {
        let root = TempDir::new().unwrap();
        supply(
            root.path(),
            "BAT0",
            "Battery",
            &[
                ("charge_now", "100"),
                ("energy_now", "41000000"),
                ("energy_full", "50000000"),
            ],
        );
        let service = SysfsPowerService::new(root.path());
        assert_eq!(
            service.battery_status().unwrap(),
            Some(BatteryStatus {
                level: 41000000,
                scale: 50000000
            })
        );
        assert_eq!(read(&root), 82);
    }

    #[test]
    fn test_no_battery() {
        let root = TempDir::new().unwrap();
        supply(root.path(), "AC", "Mains", &[("online", "1")]);
        let service = SysfsPowerService::new(root.path());
        assert!(service.battery_path().is_none());
        assert_eq!(service.battery_status().unwrap(), None);
        assert_eq!(read(&root), -1);
    }

    #[test]
    fn test_missing_root() {
        let root = TempDir::new().unwrap();
        let service = SysfsPowerService::new(root.path().join("absent"));
        assert!(!service.is_supported());
        assert!(!service.has_capacity_property());
        assert_eq!(CapacityReader::new(service).battery_level().to_wire(), -1);
    }

    #[test]
    fn test_garbage_capacity_is_unavailable() {
        let root = TempDir::new().unwrap();
        supply(root.path(), "BAT0", "Battery", &[("capacity", "full")]);
        assert_eq!(read(&root), -1);
    }

    #[test]
    fn test_first_battery_in_name_order() {
        let root = TempDir::new().unwrap();
        supply(root.path(), "BAT1", "Battery", &[("capacity", "20")]);
        supply(root.path(), "BAT0", "Battery", &[("capacity", "90")]);
        assert_eq!(read(&root), 90);
    }
}
