//! Application configuration
//!
//! Supports multiple profiles (debug, release) with different settings.

use std::path::{Path, PathBuf};

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use crate::geometry::Point;

/// Errors produced while loading or validating configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),

    #[error("invalid window size {width}x{height}: both dimensions must be positive")]
    InvalidWindowSize { width: f64, height: f64 },
}

/// Window configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    /// Logical width
    pub width: f64,
    /// Logical height
    pub height: f64,
    pub fullscreen: bool,
    pub resizable: bool,
    /// Whether the window has a title bar and borders
    pub decorated: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "pixelkit input viewer".to_string(),
            width: 800.0,
            height: 600.0,
            fullscreen: false,
            resizable: true,
            decorated: true,
        }
    }
}

/// Where relative mouse motion comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MotionSource {
    /// Differences between successive cursor positions
    #[default]
    Cursor,
    /// Raw device deltas (unaccelerated, keeps working when the cursor is grabbed)
    Device,
}

/// Input tracker configuration
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    pub motion: MotionSource,
    /// Starting value of the accumulated mouse position
    pub initial_mouse: Point,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// `tracing_subscriber::EnvFilter` directive, overridden by `RUST_LOG`
    pub filter: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
        }
    }
}

/// Application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// The active profile (debug, release, etc.)
    pub profile: String,
    #[serde(default)]
    pub window: WindowConfig,
    #[serde(default)]
    pub input: InputConfig,
    #[serde(default)]
    pub log: LogConfig,
}

impl AppConfig {
    /// Loads configuration based on the specified profile
    ///
    /// Sources, later ones overriding earlier ones:
    /// 1. `config/{profile}.toml`, searched next to the executable and then in
    ///    the current directory
    /// 2. Environment variables with prefix `APP_` (e.g. `APP_WINDOW__WIDTH=1920`)
    pub fn load(profile: &str) -> Result<Self, ConfigError> {
        Self::load_from_dir(Self::find_config_dir().as_deref(), profile)
    }

    /// Loads `{dir}/{profile}.toml` plus environment overrides
    ///
    /// A missing file is not an error; defaults fill every section.
    pub fn load_from_dir(dir: Option<&Path>, profile: &str) -> Result<Self, ConfigError> {
        let file = match dir {
            Some(dir) => File::from(dir.join(format!("{profile}.toml")).as_path()),
            None => File::with_name(&format!("config/{profile}")),
        };

        let config = Config::builder()
            .add_source(file.required(false))
            // Use __ as separator for nested fields (e.g., APP_WINDOW__WIDTH)
            .add_source(
                Environment::with_prefix("APP")
                    .separator("__")
                    .try_parsing(true),
            )
            .set_override("profile", profile)?
            .build()?;

        let loaded: Self = config.try_deserialize()?;
        loaded.validate()?;
        Ok(loaded)
    }

    /// Loads using the `APP_PROFILE` environment variable, defaulting to "debug"
    pub fn load_from_env() -> Result<Self, ConfigError> {
        let profile = std::env::var("APP_PROFILE").unwrap_or_else(|_| "debug".to_string());
        Self::load(&profile)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let WindowConfig { width, height, .. } = self.window;
        if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
            return Err(ConfigError::InvalidWindowSize { width, height });
        }
        Ok(())
    }

    /// Finds the config directory by searching in multiple locations
    fn find_config_dir() -> Option<PathBuf> {
        if let Ok(exe_path) = std::env::current_exe()
            && let Some(exe_dir) = exe_path.parent()
        {
            let config_dir = exe_dir.join("config");
            if config_dir.exists() {
                return Some(config_dir);
            }
        }

        let cwd_config = PathBuf::from("config");
        cwd_config.exists().then_some(cwd_config)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            profile: "debug".to_string(),
            window: WindowConfig::default(),
            input: InputConfig::default(),
            log: LogConfig::default(),
        }
    }
}
