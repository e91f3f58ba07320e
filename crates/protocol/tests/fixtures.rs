//! Wire format fixtures. A change to any of these strings means UIs and hosts
//! built from different releases can no longer talk to each other.

use pretty_assertions::assert_eq;
use voltlink_protocol::*;

fn sample_status() -> HostStatus {
    HostStatus {
        host: HostKind::Capacity,
        version: "0.3.0".to_string(),
        protocol_version: 2,
        min_supported_version: 1,
    }
}

#[test]
fn request_fixtures() {
    assert_eq!(
        HostRequest::GetBatteryLevel.to_json().unwrap(),
        r#""GetBatteryLevel""#
    );
    assert_eq!(HostRequest::GetStatus.to_json().unwrap(), r#""GetStatus""#);
}

#[test]
fn battery_level_response_fixtures() {
    assert_eq!(
        HostResponse::BatteryLevel(73).to_json().unwrap(),
        r#"{"BatteryLevel":73}"#
    );
    assert_eq!(
        HostResponse::BatteryLevel(BatteryLevel::Unavailable.to_wire())
            .to_json()
            .unwrap(),
        r#"{"BatteryLevel":-1}"#
    );
}

#[test]
fn status_response_fixture() {
    let json = HostResponse::Status(sample_status()).to_json().unwrap();
    assert_eq!(
        json,
        r#"{"Status":{"host":"capacity","version":"0.3.0","protocol_version":2,"min_supported_version":1}}"#
    );
    assert_eq!(
        HostResponse::from_json(&json).unwrap(),
        HostResponse::Status(sample_status())
    );
}

#[test]
fn error_response_fixture() {
    let response = HostResponse::error(error_codes::CHANNEL_NOT_FOUND, "no handler");
    assert_eq!(
        response.to_json().unwrap(),
        r#"{"Error":{"code":"channel-not-found","message":"no handler"}}"#
    );
}

#[test]
fn level_response_decodes_into_battery_level() {
    let response = HostResponse::from_json(r#"{"BatteryLevel":42}"#).unwrap();
    let HostResponse::BatteryLevel(raw) = response else {
        panic!("expected BatteryLevel, got {:?}", response);
    };
    let level = BatteryLevel::from_wire(raw).unwrap();
    assert_eq!(level.percent(), Some(42));
}

#[test]
fn every_request_has_a_distinct_channel() {
    let channels: Vec<String> = HostRequest::ALL.iter().map(|r| r.channel()).collect();
    assert_eq!(channels.len(), 2);
    assert_ne!(channels[0], channels[1]);
    assert!(channels.iter().all(|c| c.starts_with(CHANNEL_PREFIX)));
}
