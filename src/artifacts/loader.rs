use crate::artifacts::ArtifactError;
use crate::artifacts::formats::{
    ModelArtifact, ModelKind, ScalerArtifact, ScalerKind, build_classifier, build_scaler,
};
use crate::classifiers::Classifier;
use crate::config::ArtifactConfig;
use crate::core::schema::TrainingColumnSchema;
use crate::scalers::Scaler;
use serde::de::DeserializeOwned;
use std::fs::File;
use std::io::{BufReader, ErrorKind};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub const DEFAULT_MODEL_FILE: &str = "model.json";
pub const DEFAULT_SCALER_FILE: &str = "scaler.json";
pub const DEFAULT_COLUMNS_FILE: &str = "columns.json";

/// Locations of the three artifacts written by the training pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactPaths {
    pub model: PathBuf,
    pub scaler: PathBuf,
    pub columns: PathBuf,
}

impl ArtifactPaths {
    /// Default file names inside `dir`.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            model: dir.join(DEFAULT_MODEL_FILE),
            scaler: dir.join(DEFAULT_SCALER_FILE),
            columns: dir.join(DEFAULT_COLUMNS_FILE),
        }
    }
}

impl From<&ArtifactConfig> for ArtifactPaths {
    fn from(config: &ArtifactConfig) -> Self {
        Self {
            model: config.dir.join(&config.model),
            scaler: config.dir.join(&config.scaler),
            columns: config.dir.join(&config.columns),
        }
    }
}

/// The decoded, mutually consistent artifact set.
pub struct ModelArtifacts {
    pub schema: TrainingColumnSchema,
    pub scaler: Box<dyn Scaler>,
    pub classifier: Box<dyn Classifier>,
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, ArtifactError> {
    let file = File::open(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => ArtifactError::Missing {
            path: path.to_path_buf(),
        },
        _ => ArtifactError::Io {
            path: path.to_path_buf(),
            source: e,
        },
    })?;
    serde_json::from_reader(BufReader::new(file)).map_err(|e| ArtifactError::Decode {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Loads the model, scaler and column list, in that order, and checks that
/// the scaler and model were fitted on as many columns as the schema has.
pub fn load_artifacts(paths: &ArtifactPaths) -> Result<ModelArtifacts, ArtifactError> {
    let model: ModelArtifact = read_json(&paths.model)?;
    let model_kind = ModelKind::from(&model);
    debug!(path = %paths.model.display(), kind = %model_kind, "decoded model");

    let scaler: ScalerArtifact = read_json(&paths.scaler)?;
    let scaler_kind = ScalerKind::from(&scaler);
    debug!(path = %paths.scaler.display(), kind = %scaler_kind, "decoded scaler");

    let columns: Vec<String> = read_json(&paths.columns)?;
    let schema = TrainingColumnSchema::new(columns)?;
    debug!(path = %paths.columns.display(), columns = schema.len(), "decoded column schema");

    let classifier = build_classifier(model)?;
    let scaler = build_scaler(scaler)?;

    if scaler.n_features() != schema.len() {
        return Err(ArtifactError::ShapeMismatch {
            artifact: "scaler",
            expected: scaler.n_features(),
            actual: schema.len(),
        });
    }
    if classifier.n_features() != schema.len() {
        return Err(ArtifactError::ShapeMismatch {
            artifact: "model",
            expected: classifier.n_features(),
            actual: schema.len(),
        });
    }

    info!(
        model = %model_kind,
        scaler = %scaler_kind,
        features = schema.len(),
        "model artifacts loaded"
    );

    Ok(ModelArtifacts {
        schema,
        scaler,
        classifier,
    })
}
