//! Error types for loading and replaying event scripts.

use crate::config::ConfigError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while preparing or running a replay.
#[derive(Error, Debug)]
pub enum ReplayError {
    /// I/O error while reading the script
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Script is not valid JSON or does not match the expected shape
    #[error("Invalid event script: {0}")]
    Parse(#[from] serde_json::Error),

    /// Image could not be opened to read its dimensions
    #[error("Failed to read image {path:?}: {source}")]
    Image {
        /// Path of the image that failed
        path: PathBuf,
        /// Underlying decoder error
        #[source]
        source: image::ImageError,
    },

    /// Configuration could not be loaded
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Replay frames could not be serialized for output
    #[error("Failed to write frames: {0}")]
    Output(#[source] serde_json::Error),
}
