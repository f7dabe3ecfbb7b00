use crate::core::features::{EncodedFeatureVector, ScaledFeatureVector};
use crate::inference::{InferenceError, Stage};

/// Per-column transform fitted at training time and replayed at serving time.
pub trait Scaler: Send + Sync {
    /// Number of columns the scaler was fitted on.
    fn n_features(&self) -> usize;

    /// Transforms a row already known to have `n_features()` values.
    fn transform_row(&self, row: &[f64]) -> Vec<f64>;

    fn transform(
        &self,
        encoded: &EncodedFeatureVector<'_>,
    ) -> Result<ScaledFeatureVector, InferenceError> {
        if encoded.len() != self.n_features() {
            return Err(InferenceError::ShapeMismatch {
                stage: Stage::Scaler,
                expected: self.n_features(),
                actual: encoded.len(),
            });
        }
        Ok(ScaledFeatureVector::new(self.transform_row(encoded.values())))
    }
}
