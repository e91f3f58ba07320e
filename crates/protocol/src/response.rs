use serde::{Deserialize, Serialize};

use crate::types::HostStatus;

/// Codes carried by [`HostResponse::Error`]. These describe failures of the
/// channel itself; an unknown battery level is never reported this way.
pub mod error_codes {
    pub const CHANNEL_NOT_FOUND: &str = "channel-not-found";
    pub const INVALID_REQUEST: &str = "invalid-request";
    pub const CHANNEL_MISMATCH: &str = "channel-mismatch";
    /// The host could not serialize its own reply.
    pub const ENCODE_FAILED: &str = "encode-failed";
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum HostResponse {
    /// Battery level on the wire: `0..=100`, or `-1` when unavailable.
    BatteryLevel(i64),
    Status(HostStatus),
    Error { code: String, message: String },
}

impl HostResponse {
    pub fn error(code: &str, message: impl Into<String>) -> Self {
        HostResponse::Error {
            code: code.to_string(),
            message: message.into(),
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn from_json(s: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(s)
    }
}
