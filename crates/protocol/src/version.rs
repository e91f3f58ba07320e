//! Protocol versioning for the Battery API channel.
//!
//! # Version History
//!
//! | Version | Changes |
//! |---------|---------|
//! | 1 | `GetBatteryLevel` with integer result |
//! | 2 | Added `GetStatus`, channel-level `Error` replies |
//!
//! # Breaking Changes (require PROTOCOL_VERSION bump)
//!
//! - Changing the type or range of the battery level result
//! - Renaming request or response variants
//! - Removing enum variants
//!
//! # Non-Breaking Changes (safe without version bump)
//!
//! - Adding new request/response variants
//! - Adding new optional fields with `#[serde(default)]`
//!
//! # Support Policy
//!
//! Hosts and UIs stay compatible with the previous protocol version, so
//! `MIN_SUPPORTED_VERSION` trails `PROTOCOL_VERSION` by one.

/// Current protocol version. Bump when making breaking changes.
pub const PROTOCOL_VERSION: u32 = 2;

/// Minimum protocol version this build can communicate with.
pub const MIN_SUPPORTED_VERSION: u32 = 1;
