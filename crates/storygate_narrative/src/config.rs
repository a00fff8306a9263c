//! Configuration for story loading, pacing and display.
//!
//! The configuration system supports:
//! - Bundled defaults (include_str! from storygate.toml)
//! - User overrides (./storygate.toml or ~/.config/storygate/storygate.toml)
//! - Automatic merging with user values taking precedence

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use storygate_error::{ConfigError, StorygateError, StorygateResult};
use tracing::{debug, instrument};

/// Levels offered before the ending in the reference story.
pub const DEFAULT_MAX_LEVEL: usize = 6;

/// Pause between revealed clauses in the reference reader.
pub const DEFAULT_REVEAL_DELAY_MS: u64 = 180;

/// Where the story document lives and how deep it goes.
///
/// ```toml
/// [story]
/// path = "docs/FM_STORY.toml"
/// max_level = 6
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct StoryConfig {
    /// Path to the story document
    pub path: PathBuf,

    /// Last decision level; the session is terminal once past it
    #[serde(default = "default_max_level")]
    pub max_level: usize,
}

impl Default for StoryConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("docs/FM_STORY.toml"),
            max_level: DEFAULT_MAX_LEVEL,
        }
    }
}

/// Pacing of the clause-by-clause text reveal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct RevealConfig {
    /// Delay between chunks in milliseconds
    #[serde(default = "default_delay_ms")]
    pub delay_ms: u64,

    /// When false, text appears all at once
    #[serde(default = "default_true")]
    pub enabled: bool,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            delay_ms: DEFAULT_REVEAL_DELAY_MS,
            enabled: true,
        }
    }
}

impl RevealConfig {
    /// Delay between chunks, zero when pacing is disabled.
    pub fn delay(&self) -> Duration {
        if self.enabled {
            Duration::from_millis(self.delay_ms)
        } else {
            Duration::ZERO
        }
    }
}

/// Limits for the path overview.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct PathsConfig {
    /// Deepest path enumerated
    #[serde(default = "default_max_level")]
    pub max_depth: usize,

    /// Paths listed before the remainder is summarised
    #[serde(default = "default_display_limit")]
    pub display_limit: usize,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_LEVEL,
            display_limit: default_display_limit(),
        }
    }
}

/// Terminal reader settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct TuiConfig {
    /// Event poll timeout in milliseconds
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}

fn default_max_level() -> usize {
    DEFAULT_MAX_LEVEL
}

fn default_delay_ms() -> u64 {
    DEFAULT_REVEAL_DELAY_MS
}

fn default_true() -> bool {
    true
}

fn default_display_limit() -> usize {
    20
}

fn default_tick_rate_ms() -> u64 {
    50
}

/// Top-level Storygate configuration.
///
/// Loads from TOML files with a precedence system:
/// 1. Bundled defaults (include_str! from storygate.toml)
/// 2. User override (~/.config/storygate/storygate.toml, then ./storygate.toml)
///
/// # Example
///
/// ```no_run
/// use storygate_narrative::StorygateConfig;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let config = StorygateConfig::load()?;
/// println!("Story: {}", config.story.path.display());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, Default)]
pub struct StorygateConfig {
    /// Story document settings
    #[serde(default)]
    pub story: StoryConfig,

    /// Text reveal pacing
    #[serde(default)]
    pub reveal: RevealConfig,

    /// Path overview limits
    #[serde(default)]
    pub paths: PathsConfig,

    /// Terminal reader settings
    #[serde(default)]
    pub tui: TuiConfig,
}

impl StorygateConfig {
    /// Load configuration from a specific file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or fails validation.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> StorygateResult<Self> {
        debug!("Loading configuration from file");

        let config: Self = config::Config::builder()
            .add_source(config::File::from(path.as_ref()))
            .build()
            .map_err(|e| {
                StorygateError::from(ConfigError::new(format!(
                    "Failed to read configuration from {}: {}",
                    path.as_ref().display(),
                    e
                )))
            })?
            .try_deserialize()
            .map_err(|e| {
                StorygateError::from(ConfigError::new(format!(
                    "Failed to parse configuration: {}",
                    e
                )))
            })?;

        config.validate()?;
        Ok(config)
    }

    /// Load configuration with precedence: user override > bundled default.
    ///
    /// Configuration sources in order of precedence (later sources override earlier):
    /// 1. Bundled defaults (storygate.toml shipped with the library)
    /// 2. User config in home directory (~/.config/storygate/storygate.toml)
    /// 3. User config in current directory (./storygate.toml)
    ///
    /// User config files are optional and silently skipped if not found.
    #[instrument]
    pub fn load() -> StorygateResult<Self> {
        debug!("Loading configuration with precedence: current dir > home dir > bundled defaults");

        const DEFAULT_CONFIG: &str = include_str!("../../../storygate.toml");

        let mut builder = config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml));

        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config/storygate/storygate.toml");
            builder = builder.add_source(config::File::from(home_config).required(false));
        }

        builder = builder.add_source(config::File::with_name("storygate").required(false));

        let config: Self = builder
            .build()
            .map_err(|e| {
                StorygateError::from(ConfigError::new(format!(
                    "Failed to build configuration: {}",
                    e
                )))
            })?
            .try_deserialize()
            .map_err(|e| {
                StorygateError::from(ConfigError::new(format!(
                    "Failed to parse configuration: {}",
                    e
                )))
            })?;

        config.validate()?;
        Ok(config)
    }

    /// Replace the story document path.
    pub fn with_story_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.story.path = path.into();
        self
    }

    /// Reject values no session can work with.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if `max_level` or `max_depth` is zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.story.max_level == 0 {
            return Err(ConfigError::new("story.max_level must be at least 1"));
        }
        if self.paths.max_depth == 0 {
            return Err(ConfigError::new("paths.max_depth must be at least 1"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_reference_reader() {
        let config = StorygateConfig::default();
        assert_eq!(config.story.max_level, 6);
        assert_eq!(config.reveal.delay(), Duration::from_millis(180));
        assert_eq!(config.paths.display_limit, 20);
    }

    #[test]
    fn test_disabled_reveal_has_no_delay() {
        let reveal = RevealConfig {
            delay_ms: 500,
            enabled: false,
        };
        assert_eq!(reveal.delay(), Duration::ZERO);
    }

    #[test]
    fn test_zero_max_level_rejected() {
        let mut config = StorygateConfig::default();
        config.story.max_level = 0;
        assert!(config.validate().is_err());
    }
}
