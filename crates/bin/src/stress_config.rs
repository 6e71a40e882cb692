//! Stress driver configuration.

use quadtree::QuadtreeProps;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

/// Root configuration structure.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StressConfig {
    #[serde(default = "default_tree")]
    pub tree: QuadtreeProps,
    #[serde(default)]
    pub workload: WorkloadConfig,
}

impl StressConfig {
    /// Load configuration from `path`, writing the defaults there if it is missing.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            info!("No {} found, creating default config", path.display());
            let default_config = Self::default();
            std::fs::write(path, toml::to_string_pretty(&default_config)?)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            return Ok(default_config);
        }

        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        toml::from_str(&contents).with_context(|| format!("Invalid config in {}", path.display()))
    }
}

impl Default for StressConfig {
    fn default() -> Self {
        Self {
            tree: default_tree(),
            workload: WorkloadConfig::default(),
        }
    }
}

fn default_tree() -> QuadtreeProps {
    QuadtreeProps::new(640.0, 480.0)
}

/// Shapes simulated per frame.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct WorkloadConfig {
    /// Number of moving shapes.
    #[serde(default = "default_shapes")]
    pub shapes: usize,
    /// Frames to simulate.
    #[serde(default = "default_frames")]
    pub frames: u32,
    /// Smallest shape extent.
    #[serde(default = "default_min_size")]
    pub min_size: f64,
    /// Largest shape extent.
    #[serde(default = "default_max_size")]
    pub max_size: f64,
    /// Maximum speed per axis, in units per frame.
    #[serde(default = "default_max_speed")]
    pub max_speed: f64,
    /// RNG seed (random if unset).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for WorkloadConfig {
    fn default() -> Self {
        Self {
            shapes: default_shapes(),
            frames: default_frames(),
            min_size: default_min_size(),
            max_size: default_max_size(),
            max_speed: default_max_speed(),
            seed: None,
        }
    }
}

fn default_shapes() -> usize {
    1000
}
fn default_frames() -> u32 {
    120
}
fn default_min_size() -> f64 {
    4.0
}
fn default_max_size() -> f64 {
    32.0
}
fn default_max_speed() -> f64 {
    2.0
}
