//! Game configuration loaded from TOML.

use crate::cli::Cli;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info, instrument};
use xo_core::{Cue, DEFAULT_TIME_LIMIT};

/// File read when no `--config` is given. Missing is fine.
pub const DEFAULT_CONFIG_PATH: &str = "xo_game.toml";

/// Which sound cues ring the terminal bell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct SoundConfig {
    /// Ring when a mark is placed.
    click: bool,

    /// Ring when the game ends.
    game_over: bool,
}

impl SoundConfig {
    /// Every cue off.
    pub fn muted() -> Self {
        Self {
            click: false,
            game_over: false,
        }
    }

    /// Whether `cue` should be played.
    pub fn enabled(&self, cue: Cue) -> bool {
        match cue {
            Cue::Click => self.click,
            Cue::GameOver => self.game_over,
        }
    }
}

impl Default for SoundConfig {
    fn default() -> Self {
        Self {
            click: true,
            game_over: true,
        }
    }
}

/// Settings for one run of the game.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Seconds on the clock at the start of each game.
    time_limit_secs: u32,

    /// Milliseconds between clock ticks.
    tick_millis: u64,

    /// Where tracing output goes while the terminal UI is up.
    log_file: PathBuf,

    /// Sound cue switches.
    sound: SoundConfig,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            time_limit_secs: DEFAULT_TIME_LIMIT,
            tick_millis: 1000,
            log_file: PathBuf::from("xo_game.log"),
            sound: SoundConfig::default(),
        }
    }
}

impl GameConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(time_limit = config.time_limit_secs, "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` if given, else the default file if present, else defaults.
    ///
    /// An explicitly named file must exist.
    #[instrument]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None if Path::new(DEFAULT_CONFIG_PATH).exists() => {
                Self::from_file(DEFAULT_CONFIG_PATH)
            }
            None => {
                debug!("No config file, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Applies command-line overrides on top of file values.
    #[instrument(skip(self, cli))]
    pub fn with_overrides(mut self, cli: &Cli) -> Self {
        if let Some(secs) = cli.time_limit {
            self.time_limit_secs = secs;
        }
        if let Some(path) = &cli.log_file {
            self.log_file = path.clone();
        }
        if cli.mute {
            self.sound = SoundConfig::muted();
        }
        self
    }

    /// Rejects settings the game cannot run with.
    #[instrument(skip(self))]
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.time_limit_secs == 0 {
            return Err(ConfigError::new(
                "time_limit_secs must be at least 1".to_string(),
            ));
        }
        if self.tick_millis == 0 {
            return Err(ConfigError::new(
                "tick_millis must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Interval between clock ticks.
    pub fn tick_period(&self) -> Duration {
        Duration::from_millis(self.tick_millis)
    }

    /// Renders the configuration as TOML.
    #[instrument(skip(self))]
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self)
            .map_err(|e| ConfigError::new(format!("Failed to render config: {}", e)))
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
