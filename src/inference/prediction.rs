use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Binary churn target. The integer value is the training label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum ChurnLabel {
    NoChurn,
    Churn,
}

impl ChurnLabel {
    /// Position of this label in a `[no-churn, churn]` pair.
    pub fn index(self) -> usize {
        u8::from(self) as usize
    }
}

impl From<ChurnLabel> for u8 {
    fn from(label: ChurnLabel) -> Self {
        match label {
            ChurnLabel::NoChurn => 0,
            ChurnLabel::Churn => 1,
        }
    }
}

impl TryFrom<u8> for ChurnLabel {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(ChurnLabel::NoChurn),
            1 => Ok(ChurnLabel::Churn),
            other => Err(format!("unknown class label {other}, expected 0 or 1")),
        }
    }
}

/// Outcome of one prediction: the label plus `[p(no-churn), p(churn)]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PredictionResult {
    label: ChurnLabel,
    probabilities: [f64; 2],
}

impl PredictionResult {
    pub fn new(label: ChurnLabel, probabilities: [f64; 2]) -> Self {
        Self {
            label,
            probabilities,
        }
    }

    pub fn label(&self) -> ChurnLabel {
        self.label
    }

    pub fn will_churn(&self) -> bool {
        self.label == ChurnLabel::Churn
    }

    pub fn probabilities(&self) -> [f64; 2] {
        self.probabilities
    }

    pub fn probability_of(&self, label: ChurnLabel) -> f64 {
        self.probabilities[label.index()]
    }

    /// Probability of the predicted label.
    pub fn confidence(&self) -> f64 {
        self.probability_of(self.label)
    }

    pub fn confidence_pct(&self) -> f64 {
        self.confidence() * 100.0
    }
}

impl Display for PredictionResult {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let verdict = if self.will_churn() {
            "WILL CHURN"
        } else {
            "WILL NOT CHURN"
        };
        write!(
            f,
            "Prediction: Customer {verdict} with a {:.2}% probability.",
            self.confidence_pct()
        )
    }
}
