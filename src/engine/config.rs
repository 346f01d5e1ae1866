// Configuration for the tandem animation and its two sources
// Every section falls back to the defaults below when omitted from the TOML file

use crate::engine::error::ConfigError;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Timing and layout of the side-by-side animation
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnimationConfig {
    /// Seconds of real time played at 1x before the speedup (default 2.0)
    pub normal_duration: f64,

    /// Multiplier applied once `normal_duration` has passed (default 10.0)
    pub speedup_factor: f64,

    /// Seconds to hold the finished frame before looping (default 2.0)
    pub pause_duration: f64,

    /// Maximum characters per rendered line (default 55)
    pub wrap_width: usize,

    /// Nominal spacing between ticks in milliseconds (default 33, ~30 fps)
    pub frame_interval_ms: u64,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            normal_duration: 2.0,
            speedup_factor: 10.0,
            pause_duration: 2.0,
            wrap_width: 55,
            frame_interval_ms: 33,
        }
    }
}

impl AnimationConfig {
    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(self.frame_interval_ms)
    }

    /// Text shown while the sped-up phase is active, e.g. `>>> 10x SPEED >>>`.
    pub fn badge_label(&self) -> String {
        let factor = if self.speedup_factor.fract() == 0.0 {
            format!("{:.0}", self.speedup_factor)
        } else {
            format!("{}", self.speedup_factor)
        };
        format!(">>> {}x SPEED >>>", factor)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.normal_duration.is_finite() || self.normal_duration < 0.0 {
            return Err(ConfigError::invalid(
                "normal_duration",
                "must be a non-negative number of seconds",
            ));
        }
        if !self.speedup_factor.is_finite() || self.speedup_factor <= 0.0 {
            return Err(ConfigError::invalid(
                "speedup_factor",
                "must be greater than zero",
            ));
        }
        if !self.pause_duration.is_finite() || self.pause_duration < 0.0 {
            return Err(ConfigError::invalid(
                "pause_duration",
                "must be a non-negative number of seconds",
            ));
        }
        if self.wrap_width == 0 {
            return Err(ConfigError::invalid("wrap_width", "must be at least 1"));
        }
        if self.frame_interval_ms == 0 {
            return Err(ConfigError::invalid(
                "frame_interval_ms",
                "must be at least 1",
            ));
        }
        Ok(())
    }
}

/// Where one pane's text and timing come from
///
/// `command` runs a generator and scrapes its output for the elapsed time.
/// `file` replays text captured earlier together with a declared `elapsed`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SourceConfig {
    pub title: Option<String>,
    pub command: Vec<String>,
    pub file: Option<PathBuf>,
    pub elapsed: Option<f64>,
    pub working_dir: Option<PathBuf>,
}

impl SourceConfig {
    pub fn title_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.title.as_deref().unwrap_or(fallback)
    }

    pub fn is_configured(&self) -> bool {
        !self.command.is_empty() || self.file.is_some()
    }
}

pub const DEFAULT_LEFT_TITLE: &str = "Infini-gram";
pub const DEFAULT_RIGHT_TITLE: &str = "NanoGPT";

/// Master configuration combining animation settings and both sources
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Characters each generator is asked for (default 1000)
    pub target_chars: usize,
    pub animation: AnimationConfig,
    pub left: SourceConfig,
    pub right: SourceConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            target_chars: 1000,
            animation: AnimationConfig::default(),
            left: SourceConfig::default(),
            right: SourceConfig::default(),
        }
    }
}

impl Config {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    pub fn left_title(&self) -> &str {
        self.left.title_or(DEFAULT_LEFT_TITLE)
    }

    pub fn right_title(&self) -> &str {
        self.right.title_or(DEFAULT_RIGHT_TITLE)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.animation.validate()?;
        if self.target_chars == 0 {
            return Err(ConfigError::invalid("target_chars", "must be at least 1"));
        }
        for (field, source) in [("left.elapsed", &self.left), ("right.elapsed", &self.right)] {
            if let Some(elapsed) = source.elapsed {
                if !elapsed.is_finite() || elapsed < 0.0 {
                    return Err(ConfigError::invalid(
                        field,
                        "must be a non-negative number of seconds",
                    ));
                }
            }
        }
        Ok(())
    }
}
