use crate::artifacts::{ArtifactError, ArtifactPaths, ModelArtifacts, load_artifacts};
use crate::classifiers::Classifier;
use crate::core::customer::RawCustomerRecord;
use crate::core::schema::TrainingColumnSchema;
use crate::encoding::encode;
use crate::inference::{InferenceError, PredictionResult};
use crate::scalers::Scaler;
use tracing::debug;

/// Owns the read-only artifacts and runs encode → scale → classify.
///
/// Built once at startup and shared by reference; `predict` keeps no state
/// between calls, so one instance can serve any number of threads.
pub struct InferenceService {
    schema: TrainingColumnSchema,
    scaler: Box<dyn Scaler>,
    classifier: Box<dyn Classifier>,
}

impl InferenceService {
    pub fn new(artifacts: ModelArtifacts) -> Self {
        Self {
            schema: artifacts.schema,
            scaler: artifacts.scaler,
            classifier: artifacts.classifier,
        }
    }

    pub fn load(paths: &ArtifactPaths) -> Result<Self, ArtifactError> {
        load_artifacts(paths).map(Self::new)
    }

    pub fn schema(&self) -> &TrainingColumnSchema {
        &self.schema
    }

    pub fn predict(&self, record: &RawCustomerRecord) -> Result<PredictionResult, InferenceError> {
        let encoded = encode(record, &self.schema);
        let scaled = self.scaler.transform(&encoded)?;
        let result = self.classifier.predict(&scaled)?;
        debug!(
            label = ?result.label(),
            confidence = result.confidence(),
            "prediction"
        );
        Ok(result)
    }
}
