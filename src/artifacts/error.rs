use crate::core::schema::SchemaError;
use std::path::PathBuf;
use thiserror::Error;

/// Startup failure: the service cannot run without all three artifacts.
#[derive(Debug, Error)]
pub enum ArtifactError {
    #[error("artifact not found: {}", path.display())]
    Missing { path: PathBuf },

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to decode {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("invalid column schema: {0}")]
    InvalidSchema(#[from] SchemaError),

    #[error("invalid {kind} model: {reason}")]
    InvalidModel { kind: &'static str, reason: String },

    #[error("invalid {kind} scaler: {reason}")]
    InvalidScaler { kind: &'static str, reason: String },

    #[error("{artifact} was fitted on {expected} features but the column schema has {actual}")]
    ShapeMismatch {
        artifact: &'static str,
        expected: usize,
        actual: usize,
    },
}

impl ArtifactError {
    pub fn invalid_model(kind: &'static str, reason: impl Into<String>) -> Self {
        ArtifactError::InvalidModel {
            kind,
            reason: reason.into(),
        }
    }

    pub fn invalid_scaler(kind: &'static str, reason: impl Into<String>) -> Self {
        ArtifactError::InvalidScaler {
            kind,
            reason: reason.into(),
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, ArtifactError::Missing { .. })
    }
}
