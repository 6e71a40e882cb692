//! Quadtree error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors from misusing the tree structure.
#[derive(Debug, Error)]
pub enum QuadtreeError {
    #[error("Node at level {level} is already split")]
    AlreadySplit { level: u32 },

    #[error("Node at level {level} is at the maximum depth and cannot split")]
    MaxDepth { level: u32 },
}

/// Errors while loading or saving tree configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid quadtree config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Failed to serialize quadtree config: {0}")]
    Serialize(#[from] toml::ser::Error),
}
