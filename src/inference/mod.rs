mod error;
mod prediction;
mod service;

pub use error::{InferenceError, Stage};
pub use prediction::{ChurnLabel, PredictionResult};
pub use service::InferenceService;
