use serde::{Deserialize, Serialize};

/// Prefix shared by every Battery API channel name.
pub const CHANNEL_PREFIX: &str = "voltlink.BatteryApi";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HostRequest {
    GetBatteryLevel,
    GetStatus,
}

impl HostRequest {
    pub const ALL: [HostRequest; 2] = [HostRequest::GetBatteryLevel, HostRequest::GetStatus];

    /// Method name as it appears in the channel name.
    pub fn method(&self) -> &'static str {
        match self {
            HostRequest::GetBatteryLevel => "getBatteryLevel",
            HostRequest::GetStatus => "getStatus",
        }
    }

    /// Fully qualified channel the request is routed on.
    pub fn channel(&self) -> String {
        format!("{}.{}", CHANNEL_PREFIX, self.method())
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn from_json(s: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_names() {
        assert_eq!(
            HostRequest::GetBatteryLevel.channel(),
            "voltlink.BatteryApi.getBatteryLevel"
        );
        assert_eq!(
            HostRequest::GetStatus.channel(),
            "voltlink.BatteryApi.getStatus"
        );
    }

    #[test]
    fn test_unknown_request_rejected() {
        assert!(HostRequest::from_json("\"GetChargingState\"").is_err());
        assert!(HostRequest::from_json("{}").is_err());
    }
}
