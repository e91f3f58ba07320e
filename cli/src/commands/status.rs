use color_eyre::eyre::Result;

use crate::host::BatteryApiClient;

pub async fn run(client: BatteryApiClient) -> Result<()> {
    let status = client.get_status().await?;

    println!("Host: {}", status.host);
    println!("Version: {}", status.version);
    println!(
        "Protocol: v{} (supports v{}+)",
        status.protocol_version, status.min_supported_version
    );

    Ok(())
}
