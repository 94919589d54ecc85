//! Centralized error types for the game.
//!
//! The simulation itself is total and never fails; these errors come from the
//! platform edges (SDL2 initialization, asset loading, rendering) and from
//! command-line configuration.

use std::io;
use std::path::PathBuf;

/// Main error type for the game.
#[derive(thiserror::Error, Debug)]
pub enum GameError {
    #[error("Asset error: {0}")]
    Asset(#[from] AssetError),

    #[error("Texture error: {0}")]
    Texture(#[from] TextureError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("SDL error: {0}")]
    Sdl(String),
}

#[derive(thiserror::Error, Debug)]
pub enum AssetError {
    #[error("could not read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Errors related to texture and font operations.
#[derive(thiserror::Error, Debug)]
pub enum TextureError {
    #[error("Failed to load texture {asset}: {reason}")]
    LoadFailed { asset: String, reason: String },

    #[error("Invalid sprite sheet {asset}: {reason}")]
    InvalidSheet { asset: String, reason: String },

    #[error("Failed to load font: {0}")]
    FontFailed(String),

    #[error("Rendering failed: {0}")]
    RenderFailed(String),
}

/// Errors produced while parsing command-line options.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unknown argument: {0}")]
    UnknownArgument(String),

    #[error("missing value for {0}")]
    MissingValue(&'static str),

    #[error("invalid value for {flag}: {value}")]
    InvalidValue { flag: &'static str, value: String },

    #[error("invalid environment configuration: {0}")]
    Environment(String),
}

/// Result type for game operations.
pub type GameResult<T> = Result<T, GameError>;
