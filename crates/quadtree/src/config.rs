//! Tree construction parameters.

use crate::ConfigError;
use geometry::NodeGeometry;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

/// Bounds and capacity policy of a root node.
///
/// Only `width` and `height` are required; everything else has a default.
/// Keys are snake_case, the camelCase spellings are accepted as aliases.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct QuadtreeProps {
    /// X offset of the root.
    #[serde(default)]
    pub x: f64,
    /// Y offset of the root.
    #[serde(default)]
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Objects a leaf holds before it splits.
    #[serde(default = "default_max_objects", alias = "maxObjects")]
    pub max_objects: u32,
    /// Deepest level a node may be created at.
    #[serde(default = "default_max_levels", alias = "maxLevels")]
    pub max_levels: u32,
}

fn default_max_objects() -> u32 {
    10
}
fn default_max_levels() -> u32 {
    4
}

impl QuadtreeProps {
    /// Props for a `width` x `height` root at the origin with default capacity.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            width,
            height,
            max_objects: default_max_objects(),
            max_levels: default_max_levels(),
        }
    }

    pub fn with_origin(mut self, x: f64, y: f64) -> Self {
        self.x = x;
        self.y = y;
        self
    }

    pub fn with_max_objects(mut self, max_objects: u32) -> Self {
        self.max_objects = max_objects;
        self
    }

    pub fn with_max_levels(mut self, max_levels: u32) -> Self {
        self.max_levels = max_levels;
        self
    }

    /// Root bounds.
    #[inline]
    pub fn bounds(&self) -> NodeGeometry {
        NodeGeometry::new(self.x, self.y, self.width, self.height)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(contents)?)
    }

    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Load props from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let props = Self::from_toml_str(&contents)?;
        info!(
            "Loaded quadtree props from {}: {}x{} at ({}, {})",
            path.display(),
            props.width,
            props.height,
            props.x,
            props.y
        );
        Ok(props)
    }
}

impl From<NodeGeometry> for QuadtreeProps {
    fn from(bounds: NodeGeometry) -> Self {
        Self::new(bounds.width, bounds.height).with_origin(bounds.x, bounds.y)
    }
}
