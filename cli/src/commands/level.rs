use color_eyre::eyre::Result;
use serde_json::json;

use crate::host::BatteryApiClient;

pub async fn run(client: BatteryApiClient, as_json: bool) -> Result<()> {
    let level = client.get_battery_level().await?;

    if as_json {
        println!("{}", json!({ "battery_level": level.to_wire() }));
    } else {
        println!("{}", level);
    }

    Ok(())
}
