//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.booklog/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{Level, LevelFilter};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::StartTab;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct BooklogConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub start_tab: Option<StartTab>,
    pub average_precision: Option<usize>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
    pub file: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_AVERAGE_PRECISION: usize = 2;
pub const MAX_AVERAGE_PRECISION: usize = 6;
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Debug;
pub const DEFAULT_LOG_FILE: &str = "booklog.log";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    pub start_tab: StartTab,
    pub average_precision: usize,
    pub log_level: LevelFilter,
    pub log_file: PathBuf,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            start_tab: StartTab::default(),
            average_precision: DEFAULT_AVERAGE_PRECISION,
            log_level: DEFAULT_LOG_LEVEL,
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
        }
    }
}

/// Values given on the command line. `None` = flag not passed.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub start_tab: Option<StartTab>,
    pub average_precision: Option<usize>,
    pub log_level: Option<LevelFilter>,
    pub log_file: Option<PathBuf>,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Deferred log messages
// ============================================================================

/// Log messages produced while loading and resolving config.
///
/// Config is read before the logger exists (the log file and level come from
/// config), so messages are held here and emitted once it is installed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigNotes(Vec<(Level, String)>);

impl ConfigNotes {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&mut self, level: Level, message: String) {
        self.0.push((level, message));
    }

    pub fn iter(&self) -> impl Iterator<Item = &(Level, String)> {
        self.0.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Send every held message to the installed logger, in order.
    pub fn emit(&self) {
        for (level, message) in &self.0 {
            log::log!(*level, "{}", message);
        }
    }
}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.booklog/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".booklog").join("config.toml"))
}

/// Load config from `~/.booklog/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `BooklogConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config(notes: &mut ConfigNotes) -> Result<BooklogConfig, ConfigError> {
    let Some(path) = config_path() else {
        notes.push(
            Level::Warn,
            "Could not determine home directory, using default config".to_string(),
        );
        return Ok(BooklogConfig::default());
    };
    load_config_from(&path, notes)
}

/// Load config from an explicit path, generating the commented default if absent.
pub fn load_config_from(
    path: &Path,
    notes: &mut ConfigNotes,
) -> Result<BooklogConfig, ConfigError> {
    if !path.exists() {
        notes.push(
            Level::Info,
            format!("No config file found, generating default at {}", path.display()),
        );
        generate_default_config(path, notes);
        return Ok(BooklogConfig::default());
    }

    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: BooklogConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    notes.push(Level::Info, format!("Loaded config from {}", path.display()));
    notes.push(Level::Debug, format!("Config: {:?}", config));
    Ok(config)
}

const DEFAULT_CONFIG_CONTENT: &str = r#"# Book Log Configuration
# All settings are optional. Defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# start_tab = "home"                 # "home", "add", "history" or "genres"
# average_precision = 2              # Decimal places for the average page count (0-6)

# [logging]
# level = "debug"                    # "off", "error", "warn", "info", "debug", "trace"
# file = "booklog.log"               # Relative paths resolve against the working directory
"#;

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path, notes: &mut ConfigNotes) {
    if let Some(parent) = path.parent()
        && let Err(e) = fs::create_dir_all(parent)
    {
        notes.push(Level::Warn, format!("Failed to create config directory: {e}"));
        return;
    }
    if let Err(e) = fs::write(path, DEFAULT_CONFIG_CONTENT) {
        notes.push(Level::Warn, format!("Failed to write default config: {e}"));
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(
    config: &BooklogConfig,
    cli: &CliOverrides,
    notes: &mut ConfigNotes,
) -> ResolvedConfig {
    resolve_with_env(config, cli, |key| std::env::var(key).ok(), notes)
}

/// Same as [`resolve`], reading environment variables through `env`.
pub fn resolve_with_env(
    config: &BooklogConfig,
    cli: &CliOverrides,
    env: impl Fn(&str) -> Option<String>,
    notes: &mut ConfigNotes,
) -> ResolvedConfig {
    // Start tab: CLI → env → config → default
    let start_tab = cli
        .start_tab
        .or_else(|| parse_env(&env, notes, "BOOKLOG_START_TAB", |s| s.parse::<StartTab>().ok()))
        .or(config.general.start_tab)
        .unwrap_or_default();

    // Precision: CLI → env → config → default, clamped
    let average_precision = cli
        .average_precision
        .or_else(|| parse_env(&env, notes, "BOOKLOG_AVERAGE_PRECISION", |s| s.parse().ok()))
        .or(config.general.average_precision)
        .unwrap_or(DEFAULT_AVERAGE_PRECISION)
        .min(MAX_AVERAGE_PRECISION);

    // Log level: CLI → env → config → default
    let log_level = cli
        .log_level
        .or_else(|| parse_env(&env, notes, "BOOKLOG_LOG_LEVEL", |s| s.parse().ok()))
        .or_else(|| {
            let level = config.logging.level.as_deref()?;
            let parsed = level.parse::<LevelFilter>().ok();
            if parsed.is_none() {
                notes.push(
                    Level::Warn,
                    format!("Ignoring unknown log level in config: {level}"),
                );
            }
            parsed
        })
        .unwrap_or(DEFAULT_LOG_LEVEL);

    // Log file: CLI → env → config → default
    let log_file = cli
        .log_file
        .clone()
        .or_else(|| env("BOOKLOG_LOG_FILE").filter(|s| !s.is_empty()).map(PathBuf::from))
        .or_else(|| config.logging.file.as_ref().map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE));

    ResolvedConfig {
        start_tab,
        average_precision,
        log_level,
        log_file,
    }
}

/// Read and parse an env var, noting a warning (not failing) on garbage.
fn parse_env<T>(
    env: &impl Fn(&str) -> Option<String>,
    notes: &mut ConfigNotes,
    key: &str,
    parse: impl Fn(&str) -> Option<T>,
) -> Option<T> {
    let raw = env(key)?;
    let parsed = parse(raw.trim());
    if parsed.is_none() {
        notes.push(Level::Warn, format!("Ignoring unparsable {key}={raw:?}"));
    }
    parsed
}
