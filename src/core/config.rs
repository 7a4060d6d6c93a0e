//! Configuration types.
//!
//! - `GameConfig`: how the state machine is set up (seed, event log)
//! - `DisplayConfig`: how a renderer should draw snapshots
//! - `AppConfig`: both, loadable from a TOML file
//!
//! Every field has a default, so an empty or partial file is valid:
//!
//! ```toml
//! [game]
//! seed = 42
//!
//! [display]
//! placeholder = "?"
//! color = false
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{Error, Result};

/// Longest placeholder (in characters) a card face may use.
pub const MAX_PLACEHOLDER_WIDTH: usize = 3;

/// State machine configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Fixed RNG seed. `None` picks one from the OS.
    pub seed: Option<u64>,

    /// Keep an in-memory log of applied events.
    pub record_history: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: None,
            record_history: true,
        }
    }
}

impl GameConfig {
    /// Set a fixed seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Turn the event log off.
    #[must_use]
    pub fn without_history(mut self) -> Self {
        self.record_history = false;
        self
    }
}

/// Renderer configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Text drawn in place of a hidden card.
    pub placeholder: String,

    /// Use terminal colors.
    pub color: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            placeholder: "?".to_string(),
            color: true,
        }
    }
}

/// Top-level application configuration, loadable from TOML.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub game: GameConfig,
    pub display: DisplayConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| Error::ConfigRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_toml(&content)
    }

    /// Load configuration from a TOML file, falling back to defaults if the
    /// file does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            log::warn!("config file '{}' not found, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Parse and validate configuration from a TOML string.
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: AppConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<()> {
        let width = self.display.placeholder.chars().count();
        if width == 0 {
            return Err(Error::ConfigValidation(
                "display.placeholder must not be empty".into(),
            ));
        }
        if width > MAX_PLACEHOLDER_WIDTH {
            return Err(Error::ConfigValidation(format!(
                "display.placeholder must be at most {MAX_PLACEHOLDER_WIDTH} characters"
            )));
        }
        Ok(())
    }
}
