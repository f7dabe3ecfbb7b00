use crate::artifacts::ArtifactError;
use crate::classifiers::Classifier;
use crate::inference::ChurnLabel;
use std::f64::consts::PI;

const KIND: &str = "gaussian-naive-bayes";

/// Gaussian naive Bayes with per-class feature means (`theta`) and variances.
///
/// Posterior: `log prior_c - ½ Σ_j [ln(2π var_cj) + (x_j - theta_cj)² / var_cj]`,
/// normalised with log-sum-exp.
#[derive(Debug, Clone, PartialEq)]
pub struct GaussianNaiveBayes {
    log_prior: [f64; 2],
    theta: [Vec<f64>; 2],
    var: [Vec<f64>; 2],
    classes: [ChurnLabel; 2],
}

impl GaussianNaiveBayes {
    pub fn new(
        class_prior: [f64; 2],
        theta: [Vec<f64>; 2],
        var: [Vec<f64>; 2],
        classes: [ChurnLabel; 2],
    ) -> Result<Self, ArtifactError> {
        let n = theta[0].len();
        if n == 0 {
            return Err(ArtifactError::invalid_model(KIND, "no features"));
        }
        if theta[1].len() != n || var[0].len() != n || var[1].len() != n {
            return Err(ArtifactError::invalid_model(
                KIND,
                "theta and var rows must have the same length",
            ));
        }
        if class_prior.iter().any(|p| !p.is_finite() || *p <= 0.0) {
            return Err(ArtifactError::invalid_model(KIND, "class priors must be positive"));
        }
        if var.iter().flatten().any(|v| !v.is_finite() || *v <= 0.0) {
            return Err(ArtifactError::invalid_model(KIND, "variances must be positive"));
        }
        if theta.iter().flatten().any(|t| !t.is_finite()) {
            return Err(ArtifactError::invalid_model(KIND, "non-finite mean"));
        }

        Ok(Self {
            log_prior: class_prior.map(f64::ln),
            theta,
            var,
            classes,
        })
    }

    fn joint_log_likelihood(&self, class: usize, row: &[f64]) -> f64 {
        let ll: f64 = row
            .iter()
            .zip(self.theta[class].iter().zip(self.var[class].iter()))
            .map(|(x, (t, v))| (2.0 * PI * v).ln() + (x - t).powi(2) / v)
            .sum();
        self.log_prior[class] - 0.5 * ll
    }
}

impl Classifier for GaussianNaiveBayes {
    fn n_features(&self) -> usize {
        self.theta[0].len()
    }

    fn classes(&self) -> [ChurnLabel; 2] {
        self.classes
    }

    fn get_votes_for_row(&self, row: &[f64]) -> [f64; 2] {
        let jll = [
            self.joint_log_likelihood(0, row),
            self.joint_log_likelihood(1, row),
        ];
        let max = jll[0].max(jll[1]);
        let log_norm = max + ((jll[0] - max).exp() + (jll[1] - max).exp()).ln();
        jll.map(|l| (l - log_norm).exp())
    }
}
