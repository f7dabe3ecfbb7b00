use crate::artifacts::ArtifactError;
use crate::scalers::Scaler;

const KIND: &str = "standard";

/// Standardization: `(x - mean) / scale`.
///
/// A zero scale marks a constant training column; such columns are only
/// centred, never divided.
#[derive(Debug, Clone, PartialEq)]
pub struct StandardScaler {
    mean: Vec<f64>,
    scale: Vec<f64>,
}

impl StandardScaler {
    pub fn new(mean: Vec<f64>, scale: Vec<f64>) -> Result<Self, ArtifactError> {
        if mean.is_empty() {
            return Err(ArtifactError::invalid_scaler(KIND, "no columns"));
        }
        if mean.len() != scale.len() {
            return Err(ArtifactError::invalid_scaler(
                KIND,
                format!("{} means but {} scales", mean.len(), scale.len()),
            ));
        }
        if mean.iter().chain(scale.iter()).any(|x| !x.is_finite()) {
            return Err(ArtifactError::invalid_scaler(KIND, "non-finite parameter"));
        }
        let scale = scale
            .into_iter()
            .map(|s| if s == 0.0 { 1.0 } else { s })
            .collect();
        Ok(Self { mean, scale })
    }
}

impl Scaler for StandardScaler {
    fn n_features(&self) -> usize {
        self.mean.len()
    }

    fn transform_row(&self, row: &[f64]) -> Vec<f64> {
        row.iter()
            .zip(self.mean.iter().zip(self.scale.iter()))
            .map(|(x, (m, s))| (x - m) / s)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::schema::TrainingColumnSchema;
    use crate::encoding::align;
    use crate::inference::{InferenceError, Stage};

    fn schema(n: usize) -> TrainingColumnSchema {
        TrainingColumnSchema::new((0..n).map(|i| format!("c{i}")).collect()).unwrap()
    }

    #[test]
    fn standardizes_each_column() {
        let s = StandardScaler::new(vec![10.0, 0.0], vec![2.0, 0.5]).unwrap();
        let schema = schema(2);
        let (row, _) = align(vec![("c0", 14.0), ("c1", 1.0)], &schema);
        let scaled = s.transform(&row).unwrap();
        assert_eq!(scaled.values(), &[2.0, 2.0]);
    }

    #[test]
    fn zero_scale_only_centres() {
        let s = StandardScaler::new(vec![3.0], vec![0.0]).unwrap();
        assert_eq!(s.transform_row(&[5.0]), vec![2.0]);
    }

    #[test]
    fn shape_mismatch_is_reported() {
        let s = StandardScaler::new(vec![0.0; 3], vec![1.0; 3]).unwrap();
        let schema = schema(2);
        let (row, _) = align(Vec::<(&str, f64)>::new(), &schema);
        assert_eq!(
            s.transform(&row),
            Err(InferenceError::ShapeMismatch {
                stage: Stage::Scaler,
                expected: 3,
                actual: 2,
            })
        );
    }

    #[test]
    fn rejects_bad_parameters() {
        assert!(StandardScaler::new(vec![], vec![]).is_err());
        assert!(StandardScaler::new(vec![0.0, 1.0], vec![1.0]).is_err());
        assert!(StandardScaler::new(vec![f64::NAN], vec![1.0]).is_err());
    }
}
