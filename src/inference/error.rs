use strum_macros::Display;
use thiserror::Error;

/// Pipeline step that rejected a feature row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum Stage {
    Scaler,
    Classifier,
}

#[derive(Debug, Error, PartialEq)]
pub enum InferenceError {
    /// The row length disagrees with what the stage was fitted on. This is a
    /// versioning bug between training and serving artifacts.
    #[error("{stage} expects {expected} features, got {actual}")]
    ShapeMismatch {
        stage: Stage,
        expected: usize,
        actual: usize,
    },

    #[error("classifier produced a non-finite probability")]
    NonFiniteScore,
}
