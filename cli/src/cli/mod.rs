use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Query the battery level once (default)
    #[command(alias = "get")]
    Level {
        /// Print `{"battery_level": N}` instead of a percentage
        #[arg(short, long)]
        json: bool,
    },

    /// Output battery levels as JSON (suitable for piping)
    #[command(alias = "raw")]
    Pipe {
        /// Number of samples to output (0 = infinite)
        #[arg(short, long, default_value_t = 0)]
        samples: u32,

        /// Interval between samples in milliseconds (defaults to config)
        #[arg(short, long)]
        interval: Option<u64>,

        /// Compact JSON output (one line per sample)
        #[arg(short, long)]
        compact: bool,
    },

    /// Show host kind and protocol versions
    Status,

    /// Print reader diagnostics and config
    Debug,

    /// Show or reset the config file
    Config {
        /// Print the config file path
        #[arg(long)]
        path: bool,

        /// Overwrite the config with defaults
        #[arg(long)]
        reset: bool,
    },
}

#[derive(Debug, Parser)]
#[command(name = "voltlink", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Battery reader (auto, capacity, monitored)
    #[arg(long, global = true)]
    pub reader: Option<String>,
}
