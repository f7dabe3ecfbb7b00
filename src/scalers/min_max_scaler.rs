use crate::artifacts::ArtifactError;
use crate::scalers::Scaler;

const KIND: &str = "min-max";

/// Min-max scaling stored in its fitted form: `x * scale + min`.
#[derive(Debug, Clone, PartialEq)]
pub struct MinMaxScaler {
    min: Vec<f64>,
    scale: Vec<f64>,
}

impl MinMaxScaler {
    pub fn new(min: Vec<f64>, scale: Vec<f64>) -> Result<Self, ArtifactError> {
        if min.is_empty() {
            return Err(ArtifactError::invalid_scaler(KIND, "no columns"));
        }
        if min.len() != scale.len() {
            return Err(ArtifactError::invalid_scaler(
                KIND,
                format!("{} offsets but {} scales", min.len(), scale.len()),
            ));
        }
        if min.iter().chain(scale.iter()).any(|x| !x.is_finite()) {
            return Err(ArtifactError::invalid_scaler(KIND, "non-finite parameter"));
        }
        Ok(Self { min, scale })
    }
}

impl Scaler for MinMaxScaler {
    fn n_features(&self) -> usize {
        self.min.len()
    }

    fn transform_row(&self, row: &[f64]) -> Vec<f64> {
        row.iter()
            .zip(self.min.iter().zip(self.scale.iter()))
            .map(|(x, (m, s))| x * s + m)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_training_range_to_unit_interval() {
        // fitted on tenure in [0, 72] and charges in [18, 120]
        let s = MinMaxScaler::new(vec![0.0, -18.0 / 102.0], vec![1.0 / 72.0, 1.0 / 102.0]).unwrap();
        let out = s.transform_row(&[36.0, 120.0]);
        assert!((out[0] - 0.5).abs() < 1e-12);
        assert!((out[1] - 1.0).abs() < 1e-12);
        assert_eq!(s.n_features(), 2);
    }

    #[test]
    fn rejects_mismatched_lengths() {
        assert!(MinMaxScaler::new(vec![0.0], vec![1.0, 1.0]).is_err());
    }
}
