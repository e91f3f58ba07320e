mod cli;
mod commands;
mod config;
mod host;
mod logging;
mod reader;

use std::future::Future;

use clap::Parser;
use color_eyre::eyre::{eyre, Result};
use tracing::debug;

use cli::{Cli, Commands};
use config::{LogLevel, UserConfig};
use host::{spawn_host, BatteryApiClient, ReaderHost};
use logging::LogMode;

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    let mut config = UserConfig::load();
    let log_level_override = cli.log_level.as_deref().map(LogLevel::from_str);

    if !config.merge_with_args(cli.reader.as_deref()) {
        return Err(eyre!(
            "Unknown reader {:?} (expected auto, capacity or monitored)",
            cli.reader.unwrap_or_default()
        ));
    }

    let _guard = logging::init(
        config.log_level,
        LogMode::from_config(config.log_to_file),
        log_level_override,
    );

    match cli.command.unwrap_or(Commands::Level { json: false }) {
        Commands::Level { json } => {
            with_host(&config, |client| commands::level::run(client, json))
        }
        Commands::Pipe {
            samples,
            interval,
            compact,
        } => {
            let interval = interval.unwrap_or(config.pipe_interval_ms);
            with_host(&config, |client| {
                commands::pipe::run(client, samples, interval, compact)
            })
        }
        Commands::Status => with_host(&config, commands::status::run),
        Commands::Debug => commands::debug::run(&config),
        Commands::Config { path, reset } => commands::config::run(path, reset),
    }
}

/// Start a battery host for this process and hand a connected client to `f`.
fn with_host<F, Fut>(config: &UserConfig, f: F) -> Result<()>
where
    F: FnOnce(BatteryApiClient) -> Fut,
    Fut: Future<Output = Result<()>>,
{
    let reader = reader::build_reader(config)?;

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    let local = tokio::task::LocalSet::new();

    local.block_on(&runtime, async move {
        let host = spawn_host(ReaderHost::new(reader));
        let result = match BatteryApiClient::connect_with_version_check(host.messenger()).await {
            Ok(client) => f(client).await,
            Err(e) => Err(e.into()),
        };
        debug!("Stopping battery host");
        host.shutdown().await;
        result
    })
}
