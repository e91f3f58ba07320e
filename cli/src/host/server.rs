use tokio::sync::mpsc;
use tracing::{debug, info, warn};
use voltlink_platform::BatteryReader;
use voltlink_protocol::{error_codes, BatteryLevel, HostRequest, HostResponse, HostStatus};

use super::messenger::HostMessage;

/// Host-side interface of the Battery API.
pub trait BatteryApi {
    fn get_battery_level(&mut self) -> BatteryLevel;

    fn get_status(&self) -> HostStatus;
}

/// Serves the Battery API from a platform reader.
pub struct ReaderHost<R> {
    reader: R,
}

impl<R: BatteryReader> ReaderHost<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BatteryReader> BatteryApi for ReaderHost<R> {
    fn get_battery_level(&mut self) -> BatteryLevel {
        let level = self.reader.battery_level();
        debug!(host = %self.reader.kind(), level = %level, "Read battery level");
        level
    }

    fn get_status(&self) -> HostStatus {
        HostStatus::new(self.reader.kind(), env!("CARGO_PKG_VERSION"))
    }
}

/// Route one encoded message to the handler registered for `channel`.
pub(crate) fn dispatch<A: BatteryApi + ?Sized>(
    api: &mut A,
    channel: &str,
    payload: &str,
) -> HostResponse {
    let Some(registered) = HostRequest::ALL.into_iter().find(|r| r.channel() == channel) else {
        return HostResponse::error(
            error_codes::CHANNEL_NOT_FOUND,
            format!("No handler registered on {}", channel),
        );
    };

    let request = match HostRequest::from_json(payload) {
        Ok(request) => request,
        Err(e) => {
            return HostResponse::error(error_codes::INVALID_REQUEST, e.to_string());
        }
    };

    if request != registered {
        return HostResponse::error(
            error_codes::CHANNEL_MISMATCH,
            format!("{} sent on {}", request.method(), channel),
        );
    }

    match request {
        HostRequest::GetBatteryLevel => {
            HostResponse::BatteryLevel(api.get_battery_level().to_wire())
        }
        HostRequest::GetStatus => HostResponse::Status(api.get_status()),
    }
}

fn encode(response: &HostResponse) -> String {
    match response.to_json() {
        Ok(json) => json,
        Err(e) => {
            warn!(error = %e, "Failed to encode response");
            encode_failure()
        }
    }
}

/// Fixed reply for a response that could not be serialized.
fn encode_failure() -> String {
    format!(
        r#"{{"Error":{{"code":"{}","message":"response encoding failed"}}}}"#,
        error_codes::ENCODE_FAILED
    )
}

pub(crate) async fn run_host<A: BatteryApi>(mut api: A, mut rx: mpsc::Receiver<HostMessage>) {
    info!(host = %api.get_status().host, "Battery host started");

    while let Some(message) = rx.recv().await {
        match message {
            HostMessage::Call {
                channel,
                payload,
                reply,
            } => {
                debug!(channel = %channel, "Handling message");
                let response = dispatch(&mut api, &channel, &payload);
                if let HostResponse::Error { code, message } = &response {
                    warn!(channel = %channel, code = %code, message = %message, "Rejected message");
                }
                if reply.send(encode(&response)).is_err() {
                    debug!(channel = %channel, "Caller went away before reply");
                }
            }
            HostMessage::Shutdown => {
                info!("Shutdown requested");
                break;
            }
        }
    }

    info!("Battery host stopped");
}
