use std::path::PathBuf;

/// Errors that can occur when loading or validating configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("board dimensions must be even integers in [6, 16], got {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },

    #[error("config validation error: {0}")]
    Validation(String),
}

/// Errors reported when a placement request is rejected. The session state
/// is unchanged in every case.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("placing at ({row}, {col}) captures nothing")]
    IllegalMove { row: usize, col: usize },

    #[error("({row}, {col}) is outside the board")]
    OutOfBounds { row: usize, col: usize },

    #[error("it is not that player's turn")]
    NotYourTurn,

    #[error("the game is already over")]
    GameOver,
}
