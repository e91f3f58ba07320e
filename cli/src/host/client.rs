use voltlink_protocol::{
    BatteryLevel, HostRequest, HostResponse, HostStatus, MIN_SUPPORTED_VERSION, PROTOCOL_VERSION,
};

use super::messenger::Messenger;

#[derive(Debug, Clone)]
pub struct VersionMismatchError {
    pub ui_protocol_version: u32,
    pub ui_min_supported: u32,
    pub host_protocol_version: u32,
    pub host_min_supported: u32,
    pub host_binary_version: String,
    pub kind: VersionMismatchKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionMismatchKind {
    UiTooOld,
    HostTooOld,
}

impl std::fmt::Display for VersionMismatchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            VersionMismatchKind::UiTooOld => write!(
                f,
                "Protocol version mismatch: UI uses protocol v{}, but host (v{}) requires v{}+",
                self.ui_protocol_version, self.host_binary_version, self.host_min_supported
            ),
            VersionMismatchKind::HostTooOld => write!(
                f,
                "Protocol version mismatch: host (v{}) uses protocol v{}, but this UI requires v{}+",
                self.host_binary_version, self.host_protocol_version, self.ui_min_supported
            ),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("Host is not running")]
    Disconnected,

    #[error("Protocol error: {0}")]
    Protocol(String),

    #[error("Host error [{code}]: {message}")]
    Host { code: String, message: String },

    #[error("{0}")]
    VersionMismatch(VersionMismatchError),
}

pub type Result<T> = std::result::Result<T, ClientError>;

/// Checks if the UI and host protocol versions are compatible.
pub fn check_version_compatibility(status: &HostStatus) -> Result<()> {
    let mismatch = |kind| {
        ClientError::VersionMismatch(VersionMismatchError {
            ui_protocol_version: PROTOCOL_VERSION,
            ui_min_supported: MIN_SUPPORTED_VERSION,
            host_protocol_version: status.protocol_version,
            host_min_supported: status.min_supported_version,
            host_binary_version: status.version.clone(),
            kind,
        })
    };

    // Can the host understand our requests?
    if PROTOCOL_VERSION < status.min_supported_version {
        return Err(mismatch(VersionMismatchKind::UiTooOld));
    }

    // Can we understand the host's replies?
    if status.protocol_version < MIN_SUPPORTED_VERSION {
        return Err(mismatch(VersionMismatchKind::HostTooOld));
    }

    Ok(())
}

/// UI-side Battery API.
#[derive(Clone)]
pub struct BatteryApiClient {
    messenger: Messenger,
}

impl BatteryApiClient {
    pub fn new(messenger: Messenger) -> Self {
        Self { messenger }
    }

    /// Builds a client after confirming the host speaks a compatible protocol.
    pub async fn connect_with_version_check(messenger: Messenger) -> Result<Self> {
        let client = Self::new(messenger);
        let status = client.get_status().await?;
        check_version_compatibility(&status)?;
        Ok(client)
    }

    async fn call(&self, request: HostRequest) -> Result<HostResponse> {
        let payload = request
            .to_json()
            .map_err(|e| ClientError::Protocol(e.to_string()))?;

        let reply = self.messenger.send(&request.channel(), payload).await?;
        tracing::trace!(method = request.method(), reply_len = reply.len(), "Got reply");

        match HostResponse::from_json(&reply) {
            Ok(HostResponse::Error { code, message }) => Err(ClientError::Host { code, message }),
            Ok(response) => Ok(response),
            Err(e) => Err(ClientError::Protocol(e.to_string())),
        }
    }

    pub async fn get_battery_level(&self) -> Result<BatteryLevel> {
        match self.call(HostRequest::GetBatteryLevel).await? {
            HostResponse::BatteryLevel(raw) => {
                BatteryLevel::from_wire(raw).map_err(|e| ClientError::Protocol(e.to_string()))
            }
            other => Err(ClientError::Protocol(format!(
                "Unexpected response: {:?}",
                other
            ))),
        }
    }

    pub async fn get_status(&self) -> Result<HostStatus> {
        match self.call(HostRequest::GetStatus).await? {
            HostResponse::Status(status) => Ok(status),
            other => Err(ClientError::Protocol(format!(
                "Unexpected response: {:?}",
                other
            ))),
        }
    }
}
