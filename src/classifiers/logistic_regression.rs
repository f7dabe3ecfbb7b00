use crate::artifacts::ArtifactError;
use crate::classifiers::Classifier;
use crate::inference::ChurnLabel;

const KIND: &str = "logistic-regression";

/// Binary logistic regression: `p(classes[1]) = sigmoid(w·x + b)`.
#[derive(Debug, Clone, PartialEq)]
pub struct LogisticRegression {
    coefficients: Vec<f64>,
    intercept: f64,
    classes: [ChurnLabel; 2],
}

impl LogisticRegression {
    pub fn new(
        coefficients: Vec<f64>,
        intercept: f64,
        classes: [ChurnLabel; 2],
    ) -> Result<Self, ArtifactError> {
        if coefficients.is_empty() {
            return Err(ArtifactError::invalid_model(KIND, "no coefficients"));
        }
        if !intercept.is_finite() || coefficients.iter().any(|w| !w.is_finite()) {
            return Err(ArtifactError::invalid_model(KIND, "non-finite parameter"));
        }
        Ok(Self {
            coefficients,
            intercept,
            classes,
        })
    }

    pub fn decision_function(&self, row: &[f64]) -> f64 {
        self.coefficients
            .iter()
            .zip(row)
            .fold(self.intercept, |acc, (w, x)| acc + w * x)
    }
}

#[inline]
fn sigmoid(z: f64) -> f64 {
    if z >= 0.0 {
        1.0 / (1.0 + (-z).exp())
    } else {
        let e = z.exp();
        e / (1.0 + e)
    }
}

impl Classifier for LogisticRegression {
    fn n_features(&self) -> usize {
        self.coefficients.len()
    }

    fn classes(&self) -> [ChurnLabel; 2] {
        self.classes
    }

    fn get_votes_for_row(&self, row: &[f64]) -> [f64; 2] {
        let p = sigmoid(self.decision_function(row));
        [1.0 - p, p]
    }
}
