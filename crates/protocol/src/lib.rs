mod request;
mod response;
mod types;
mod version;

pub use request::{HostRequest, CHANNEL_PREFIX};
pub use response::{error_codes, HostResponse};
pub use types::{
    BatteryLevel, HostKind, HostStatus, InvalidLevel, Percent, UNAVAILABLE_SENTINEL,
};
pub use version::{MIN_SUPPORTED_VERSION, PROTOCOL_VERSION};
