use color_eyre::eyre::Result;

use crate::config::{config_path, UserConfig};
use crate::logging::log_dir;
use crate::reader::build_reader;

pub fn run(config: &UserConfig) -> Result<()> {
    println!("voltlink debug information");
    println!("{}", "=".repeat(60));

    println!("\n--- Build ---");
    println!("Version: {}", env!("CARGO_PKG_VERSION"));
    println!("Target: {}", std::env::consts::OS);
    println!(
        "Protocol: v{} (supports v{}+)",
        voltlink_protocol::PROTOCOL_VERSION,
        voltlink_protocol::MIN_SUPPORTED_VERSION
    );

    println!("\n--- Reader ---");
    let mut reader = build_reader(config)?;
    println!("Requested: {:?}", config.reader);
    println!("Host: {}", reader.kind());
    for diagnostic in reader.diagnostics() {
        println!("{}: {}", diagnostic.name, diagnostic.value);
    }

    println!("\n--- Paths ---");
    println!("Config: {}", config_path().display());
    println!("Logs: {}", log_dir().display());

    println!("\n--- Current Config ---");
    println!("{}", toml::to_string_pretty(config)?);

    Ok(())
}
