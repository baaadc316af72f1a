use std::path::Path;

use crate::ai::Difficulty;
use crate::error::ConfigError;
use crate::game;

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub game: GameConfig,
    pub ui: UiConfig,
}

/// Board size and AI difficulty for a session.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub width: usize,
    pub height: usize,
    pub difficulty: Difficulty,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            width: 8,
            height: 8,
            difficulty: Difficulty::Normal,
        }
    }
}

/// Presentation pacing and audio. None of this reaches the engine; the UI
/// paces `computer_turn` and the flip highlight on its own clock.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Shortest delay before the AI's move becomes visible, in milliseconds.
    pub ai_delay_min_ms: u64,
    /// Longest delay before the AI's move becomes visible, in milliseconds.
    pub ai_delay_max_ms: u64,
    /// How long freshly flipped discs stay highlighted, in milliseconds.
    pub flip_highlight_ms: u64,
    /// Start with sound effects muted.
    pub muted: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            ai_delay_min_ms: 1200,
            ai_delay_max_ms: 1700,
            flip_highlight_ms: 500,
            muted: false,
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the
    /// file does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        game::validate_dimensions(self.game.width, self.game.height)?;
        if self.ui.ai_delay_min_ms > self.ui.ai_delay_max_ms {
            return Err(ConfigError::Validation(
                "ui.ai_delay_min_ms must be <= ui.ai_delay_max_ms".into(),
            ));
        }
        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
    }
}
