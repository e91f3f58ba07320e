use std::time::Duration;

use color_eyre::eyre::Result;
use serde_json::{json, Value};
use voltlink_protocol::{BatteryLevel, HostKind};

use crate::host::BatteryApiClient;

pub async fn run(
    client: BatteryApiClient,
    samples: u32,
    interval_ms: u64,
    compact: bool,
) -> Result<()> {
    let host = client.get_status().await?.host;
    let mut counter = 0u32;

    loop {
        let level = client.get_battery_level().await?;
        let doc = sample_doc(host, level, chrono::Utc::now());

        if compact {
            println!("{}", serde_json::to_string(&doc)?);
        } else {
            println!("{}", serde_json::to_string_pretty(&doc)?);
        }

        if sample_limit_reached(samples, &mut counter) {
            break;
        }

        tokio::time::sleep(Duration::from_millis(interval_ms)).await;
    }

    Ok(())
}

/// Count one emitted sample. `samples == 0` streams forever and never counts.
fn sample_limit_reached(samples: u32, counter: &mut u32) -> bool {
    if samples == 0 {
        return false;
    }
    *counter += 1;
    *counter >= samples
}

fn sample_doc(host: HostKind, level: BatteryLevel, at: chrono::DateTime<chrono::Utc>) -> Value {
    json!({
        "timestamp": at.to_rfc3339(),
        "host": host.label(),
        "battery_level": level.to_wire(),
        "known": level.is_known(),
    })
}
