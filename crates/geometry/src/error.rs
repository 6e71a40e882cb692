//! Geometry error types.

use thiserror::Error;

/// Errors that can occur while resolving how a shape is classified.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("No classifier available for shape kind `{kind}`")]
    NoClassifier { kind: String },
}
