//! Effect configuration.
//!
//! [`SlideConfig`] holds the handful of settings the sliding popups effect
//! reads: default slide-in and slide-out times plus the host-wide animation
//! speed multiplier. It is stored as TOML:
//!
//! ```toml
//! slide-in-time = 150
//! slide-out-time = 250
//! animation-speed = 1.0
//! ```
//!
//! A time of `0` means "use the built-in default". Missing keys fall back to
//! their defaults as well, so an empty file is a valid configuration.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::error::{SlideError, SlideResult};
use crate::logging::targets;

/// Slide-in time used when the configuration leaves it at zero.
pub const DEFAULT_SLIDE_IN_TIME: Duration = Duration::from_millis(150);

/// Slide-out time used when the configuration leaves it at zero.
pub const DEFAULT_SLIDE_OUT_TIME: Duration = Duration::from_millis(250);

/// File name of the configuration inside the config directory.
pub const CONFIG_FILE_NAME: &str = "slidingpopups.toml";

/// Settings for the sliding popups effect.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct SlideConfig {
    /// Slide-in time in milliseconds, `0` for the default.
    pub slide_in_time: u64,
    /// Slide-out time in milliseconds, `0` for the default.
    pub slide_out_time: u64,
    /// Host-wide animation duration multiplier. `2.0` makes every animation
    /// take twice as long.
    pub animation_speed: f64,
}

impl Default for SlideConfig {
    fn default() -> Self {
        Self {
            slide_in_time: 0,
            slide_out_time: 0,
            animation_speed: 1.0,
        }
    }
}

impl SlideConfig {
    /// Parse a configuration from TOML text.
    pub fn from_toml_str(text: &str) -> SlideResult<Self> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to TOML text.
    pub fn to_toml_string(&self) -> SlideResult<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Load a configuration file.
    pub fn load(path: impl AsRef<Path>) -> SlideResult<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| SlideError::config_io(path, e))?;
        let config = Self::from_toml_str(&text)?;
        tracing::debug!(target: targets::CONFIG, path = %path.display(), ?config, "loaded configuration");
        Ok(config)
    }

    /// Load the configuration from [`default_path`](Self::default_path).
    ///
    /// A missing file yields the defaults; any other failure is returned.
    pub fn load_or_default() -> SlideResult<Self> {
        let path = Self::default_path()?;
        match Self::load(&path) {
            Ok(config) => Ok(config),
            Err(err) if err.is_not_found() => {
                tracing::debug!(target: targets::CONFIG, path = %path.display(), "no configuration file, using defaults");
                Ok(Self::default())
            }
            Err(err) => Err(err),
        }
    }

    /// Write the configuration to a file, creating parent directories.
    pub fn save(&self, path: impl AsRef<Path>) -> SlideResult<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| SlideError::config_io(parent, e))?;
        }
        let text = self.to_toml_string()?;
        fs::write(path, text).map_err(|e| SlideError::config_io(path, e))
    }

    /// Location of the per-user configuration file.
    pub fn default_path() -> SlideResult<PathBuf> {
        let dirs = ProjectDirs::from("com", "Horizon Analytic Studios", "horizon-slide")
            .ok_or(SlideError::NoConfigDir)?;
        Ok(dirs.config_dir().join(CONFIG_FILE_NAME))
    }

    /// Reject values that cannot produce a sensible animation.
    pub fn validate(&self) -> SlideResult<()> {
        if !self.animation_speed.is_finite() || self.animation_speed <= 0.0 {
            return Err(SlideError::InvalidConfig(format!(
                "animation-speed must be a positive number, got {}",
                self.animation_speed
            )));
        }
        Ok(())
    }

    /// Scale a base duration by the animation speed multiplier.
    pub fn animation_time(&self, base: Duration) -> Duration {
        if self.animation_speed.is_finite() && self.animation_speed > 0.0 {
            let nanos = (base.as_nanos() as f64 * self.animation_speed).round();
            Duration::from_nanos(nanos.min(u64::MAX as f64) as u64)
        } else {
            base
        }
    }

    /// Default duration of an appear animation.
    pub fn fade_in_duration(&self) -> Duration {
        let base = match self.slide_in_time {
            0 => DEFAULT_SLIDE_IN_TIME,
            ms => Duration::from_millis(ms),
        };
        self.animation_time(base)
    }

    /// Default duration of a disappear animation.
    pub fn fade_out_duration(&self) -> Duration {
        let base = match self.slide_out_time {
            0 => DEFAULT_SLIDE_OUT_TIME,
            ms => Duration::from_millis(ms),
        };
        self.animation_time(base)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SlideConfig::default();
        assert_eq!(config.fade_in_duration(), Duration::from_millis(150));
        assert_eq!(config.fade_out_duration(), Duration::from_millis(250));
    }

    #[test]
    fn test_empty_toml_is_default() {
        let config = SlideConfig::from_toml_str("").unwrap();
        assert_eq!(config, SlideConfig::default());
    }

    #[test]
    fn test_custom_times_and_speed() {
        let config = SlideConfig::from_toml_str(
            "slide-in-time = 100\nslide-out-time = 300\nanimation-speed = 2.0\n",
        )
        .unwrap();
        assert_eq!(config.fade_in_duration(), Duration::from_millis(200));
        assert_eq!(config.fade_out_duration(), Duration::from_millis(600));
    }

    #[test]
    fn test_zero_time_means_default() {
        let config = SlideConfig::from_toml_str("slide-in-time = 0\nanimation-speed = 0.5").unwrap();
        assert_eq!(config.fade_in_duration(), Duration::from_millis(75));
    }

    #[test]
    fn test_invalid_speed_rejected() {
        let err = SlideConfig::from_toml_str("animation-speed = 0.0").unwrap_err();
        assert!(matches!(err, SlideError::InvalidConfig(_)));
    }

    #[test]
    fn test_malformed_toml() {
        let err = SlideConfig::from_toml_str("slide-in-time = \"fast\"").unwrap_err();
        assert!(matches!(err, SlideError::ConfigParse(_)));
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join(CONFIG_FILE_NAME);

        let config = SlideConfig {
            slide_in_time: 120,
            slide_out_time: 180,
            animation_speed: 1.5,
        };
        config.save(&path).unwrap();

        let loaded = SlideConfig::load(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = SlideConfig::load(dir.path().join("missing.toml")).unwrap_err();
        assert!(err.is_not_found());
    }
}
