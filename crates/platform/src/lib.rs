//! Battery level readers for voltlink.
//!
//! This crate provides the [`BatteryReader`] trait and two interchangeable
//! adapters. Each adapter is generic over the OS touchpoints it needs, so the
//! conversion logic can be exercised without a real battery.
//!
//! - [`CapacityReader`] asks a [`PowerService`] for a direct capacity
//!   percentage and falls back to the raw level/scale status.
//! - [`MonitoredReader`] reads a fractional level from a [`DeviceStatus`]
//!   inside a scoped monitoring window.
//!
//! # Features
//!
//! - `sysfs` - [`sysfs::SysfsPowerService`], the capacity touchpoints over
//!   `/sys/class/power_supply`
//! - `manager` - [`manager::ManagerDeviceStatus`], the fractional touchpoint
//!   over `starship-battery`
//!
//! # Example
//!
//! ```ignore
//! use voltlink_platform::{BatteryReader, CapacityReader};
//! use voltlink_platform::sysfs::SysfsPowerService;
//!
//! let mut reader = CapacityReader::new(SysfsPowerService::default());
//! println!("Charge: {}", reader.battery_level());
//! ```

mod capacity;
mod monitored;
mod reader;

pub use capacity::{level_from_ratio, BatteryStatus, CapacityReader, PowerService};
pub use monitored::{level_from_fraction, DeviceStatus, MonitoredReader, MonitoringGuard};
pub use reader::{BatteryReader, Diagnostic};
pub use voltlink_protocol::{BatteryLevel, HostKind};

#[cfg(feature = "sysfs")]
pub mod sysfs;

#[cfg(feature = "manager")]
pub mod manager;
