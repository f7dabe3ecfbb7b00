mod error;
mod formats;
mod loader;

pub use error::ArtifactError;
pub use formats::{
    GaussianNaiveBayesParams, LogisticRegressionParams, MinMaxScalerParams, ModelArtifact,
    ModelKind, ScalerArtifact, ScalerKind, StandardScalerParams, build_classifier, build_scaler,
};
pub use loader::{
    ArtifactPaths, DEFAULT_COLUMNS_FILE, DEFAULT_MODEL_FILE, DEFAULT_SCALER_FILE, ModelArtifacts,
    load_artifacts,
};
