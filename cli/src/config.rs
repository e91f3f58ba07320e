use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use voltlink_protocol::HostKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Off,
    Error,
    #[default]
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "off" => LogLevel::Off,
            "error" => LogLevel::Error,
            "info" => LogLevel::Info,
            "debug" => LogLevel::Debug,
            "trace" => LogLevel::Trace,
            _ => LogLevel::Warn,
        }
    }

    pub fn as_tracing_level(&self) -> Option<tracing::Level> {
        match self {
            LogLevel::Off => None,
            LogLevel::Error => Some(tracing::Level::ERROR),
            LogLevel::Warn => Some(tracing::Level::WARN),
            LogLevel::Info => Some(tracing::Level::INFO),
            LogLevel::Debug => Some(tracing::Level::DEBUG),
            LogLevel::Trace => Some(tracing::Level::TRACE),
        }
    }
}

/// Which battery reader the host serves from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ReaderKind {
    /// Pick by build target.
    #[default]
    Auto,
    Capacity,
    Monitored,
}

impl ReaderKind {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "auto" => Some(ReaderKind::Auto),
            "capacity" => Some(ReaderKind::Capacity),
            "monitored" => Some(ReaderKind::Monitored),
            _ => None,
        }
    }

    pub fn resolve(self) -> HostKind {
        match self {
            ReaderKind::Capacity => HostKind::Capacity,
            ReaderKind::Monitored => HostKind::Monitored,
            ReaderKind::Auto => default_host_kind(),
        }
    }
}

#[cfg(any(target_os = "linux", target_os = "android"))]
fn default_host_kind() -> HostKind {
    HostKind::Capacity
}

#[cfg(not(any(target_os = "linux", target_os = "android")))]
fn default_host_kind() -> HostKind {
    HostKind::Monitored
}

fn default_power_supply_path() -> PathBuf {
    PathBuf::from("/sys/class/power_supply")
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserConfig {
    pub reader: ReaderKind,
    #[serde(default = "default_power_supply_path")]
    pub power_supply_path: PathBuf,
    pub log_level: LogLevel,
    pub log_to_file: bool,
    pub pipe_interval_ms: u64,
}

impl Default for UserConfig {
    fn default() -> Self {
        Self {
            reader: ReaderKind::Auto,
            power_supply_path: default_power_supply_path(),
            log_level: LogLevel::Warn,
            log_to_file: false,
            pipe_interval_ms: 1000,
        }
    }
}

pub fn config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("~/.config"))
        .join("voltlink")
}

pub fn runtime_dir() -> PathBuf {
    dirs::runtime_dir()
        .or_else(dirs::cache_dir)
        .unwrap_or_else(|| PathBuf::from("/tmp"))
        .join("voltlink")
}

pub fn config_path() -> PathBuf {
    config_dir().join("config.toml")
}

pub fn ensure_dirs() -> std::io::Result<()> {
    fs::create_dir_all(config_dir())
}

impl UserConfig {
    pub fn load() -> Self {
        Self::load_from(&config_path())
    }

    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        match fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).unwrap_or_default(),
            Err(_) => Self::default(),
        }
    }

    pub fn save(&self) -> std::io::Result<()> {
        ensure_dirs()?;
        self.save_to(&config_path())
    }

    pub fn save_to(&self, path: &Path) -> std::io::Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()))?;
        fs::write(path, content)
    }

    /// Apply command-line overrides. Returns false if `reader` is not a known kind.
    pub fn merge_with_args(&mut self, reader: Option<&str>) -> bool {
        match reader {
            Some(r) => match ReaderKind::from_str(r) {
                Some(kind) => {
                    self.reader = kind;
                    true
                }
                None => false,
            },
            None => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = TempDir::new().unwrap();
        let config = UserConfig::load_from(&dir.path().join("config.toml"));
        assert_eq!(config, UserConfig::default());
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "reader = \"monitored\"\nlog_level = \"debug\"\n").unwrap();

        let config = UserConfig::load_from(&path);
        assert_eq!(config.reader, ReaderKind::Monitored);
        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.pipe_interval_ms, 1000);
        assert_eq!(config.power_supply_path, default_power_supply_path());
    }

    #[test]
    fn test_unparsable_file_gives_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "reader = [not toml").unwrap();
        assert_eq!(UserConfig::load_from(&path), UserConfig::default());
    }

    #[test]
    fn test_save_then_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        let config = UserConfig {
            reader: ReaderKind::Capacity,
            power_supply_path: PathBuf::from("/tmp/supply"),
            log_level: LogLevel::Trace,
            log_to_file: true,
            pipe_interval_ms: 250,
        };
        config.save_to(&path).unwrap();
        assert_eq!(UserConfig::load_from(&path), config);
    }

    #[test]
    fn test_save_creates_missing_dirs() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("fresh").join("voltlink").join("config.toml");
        UserConfig::default().save_to(&path).unwrap();
        assert_eq!(UserConfig::load_from(&path), UserConfig::default());
    }

    #[test]
    fn test_save_reports_dir_failure() {
        let dir = TempDir::new().unwrap();
        let blocker = dir.path().join("voltlink");
        fs::write(&blocker, "not a directory").unwrap();
        let result = UserConfig::default().save_to(&blocker.join("config.toml"));
        assert!(result.is_err());
    }

    #[test]
    fn test_reader_override() {
        let mut config = UserConfig::default();
        assert!(config.merge_with_args(Some("Capacity")));
        assert_eq!(config.reader, ReaderKind::Capacity);
        assert!(!config.merge_with_args(Some("solar")));
        assert_eq!(config.reader, ReaderKind::Capacity);
        assert!(config.merge_with_args(None));
    }

    #[test]
    fn test_explicit_reader_resolves_directly() {
        assert_eq!(ReaderKind::Capacity.resolve(), HostKind::Capacity);
        assert_eq!(ReaderKind::Monitored.resolve(), HostKind::Monitored);
    }

    #[test]
    #[cfg(target_os = "linux")]
    fn test_auto_reader_uses_capacity_on_linux() {
        assert_eq!(ReaderKind::Auto.resolve(), HostKind::Capacity);
    }

    #[test]
    #[cfg(target_os = "macos")]
    fn test_auto_reader_uses_monitored_on_macos() {
        assert_eq!(ReaderKind::Auto.resolve(), HostKind::Monitored);
    }

    #[test]
    fn test_log_level_parsing() {
        assert_eq!(LogLevel::from_str("OFF"), LogLevel::Off);
        assert_eq!(LogLevel::from_str("trace"), LogLevel::Trace);
        assert_eq!(LogLevel::from_str("loud"), LogLevel::Warn);
        assert!(LogLevel::Off.as_tracing_level().is_none());
    }
}
