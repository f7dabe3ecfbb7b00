use crate::core::features::ScaledFeatureVector;
use crate::inference::{ChurnLabel, InferenceError, PredictionResult, Stage};

/// A fitted binary churn classifier.
pub trait Classifier: Send + Sync {
    /// Number of columns the model was fitted on.
    fn n_features(&self) -> usize;

    /// Labels in the model's internal order; indexes the output of
    /// [`get_votes_for_row`](Classifier::get_votes_for_row).
    fn classes(&self) -> [ChurnLabel; 2];

    /// Class probabilities for a row already known to have `n_features()`
    /// values, in [`classes`](Classifier::classes) order.
    fn get_votes_for_row(&self, row: &[f64]) -> [f64; 2];

    fn predict(&self, scaled: &ScaledFeatureVector) -> Result<PredictionResult, InferenceError> {
        if scaled.len() != self.n_features() {
            return Err(InferenceError::ShapeMismatch {
                stage: Stage::Classifier,
                expected: self.n_features(),
                actual: scaled.len(),
            });
        }

        let votes = self.get_votes_for_row(scaled.values());
        if votes.iter().any(|p| !p.is_finite()) {
            return Err(InferenceError::NonFiniteScore);
        }

        let classes = self.classes();
        // ties go to the first class, like an argmax
        let best = if votes[1] > votes[0] { 1 } else { 0 };

        let mut probabilities = [0.0; 2];
        for (label, p) in classes.iter().zip(votes) {
            probabilities[label.index()] = p;
        }
        Ok(PredictionResult::new(classes[best], probabilities))
    }
}

/// Validates an optional `classes` list from a model artifact.
pub(crate) fn parse_classes(classes: Option<&[u8]>) -> Result<[ChurnLabel; 2], String> {
    let Some(raw) = classes else {
        return Ok([ChurnLabel::NoChurn, ChurnLabel::Churn]);
    };
    let [a, b] = raw else {
        return Err(format!("expected 2 classes, got {}", raw.len()));
    };
    let first = ChurnLabel::try_from(*a)?;
    let second = ChurnLabel::try_from(*b)?;
    if first == second {
        return Err(format!("class {a} listed twice"));
    }
    Ok([first, second])
}
