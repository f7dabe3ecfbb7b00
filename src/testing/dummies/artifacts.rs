use crate::artifacts::{
    ArtifactPaths, LogisticRegressionParams, ModelArtifact, ModelArtifacts, ScalerArtifact,
    StandardScalerParams, build_classifier, build_scaler,
};
use crate::core::schema::TrainingColumnSchema;
use crate::inference::InferenceService;
use std::io::Error;
use std::path::Path;

/// `(column, mean, scale, coefficient)` for a small churn model.
///
/// `TechSupport_No internet service` is left out on purpose so tests can
/// exercise the zero-fill path.
const COLUMNS: [(&str, f64, f64, f64); 24] = [
    ("SeniorCitizen", 0.16, 0.37, 0.1),
    ("tenure", 32.4, 24.6, -0.9),
    ("MonthlyCharges", 64.8, 30.1, 0.4),
    ("TotalCharges", 2283.3, 2266.8, -0.2),
    ("gender_Female", 0.5, 0.5, 0.0),
    ("gender_Male", 0.5, 0.5, 0.0),
    ("Partner_No", 0.5, 0.5, 0.02),
    ("Partner_Yes", 0.5, 0.5, -0.02),
    ("Dependents_No", 0.5, 0.5, 0.05),
    ("Dependents_Yes", 0.5, 0.5, -0.05),
    ("InternetService_DSL", 0.5, 0.5, -0.15),
    ("InternetService_Fiber optic", 0.5, 0.5, 0.35),
    ("InternetService_No", 0.5, 0.5, -0.2),
    ("TechSupport_No", 0.5, 0.5, 0.2),
    ("TechSupport_Yes", 0.5, 0.5, -0.2),
    ("Contract_Month-to-month", 0.5, 0.5, 0.45),
    ("Contract_One year", 0.5, 0.5, -0.1),
    ("Contract_Two year", 0.5, 0.5, -0.35),
    ("PaperlessBilling_No", 0.5, 0.5, -0.1),
    ("PaperlessBilling_Yes", 0.5, 0.5, 0.1),
    ("PaymentMethod_Bank transfer (automatic)", 0.5, 0.5, -0.05),
    ("PaymentMethod_Credit card (automatic)", 0.5, 0.5, -0.05),
    ("PaymentMethod_Electronic check", 0.5, 0.5, 0.2),
    ("PaymentMethod_Mailed check", 0.5, 0.5, -0.1),
];

const INTERCEPT: f64 = -1.0;

pub fn churn_columns() -> Vec<String> {
    COLUMNS.iter().map(|(c, ..)| c.to_string()).collect()
}

pub fn churn_schema() -> TrainingColumnSchema {
    TrainingColumnSchema::new(churn_columns()).expect("dummy columns are unique")
}

pub fn churn_scaler_artifact() -> ScalerArtifact {
    ScalerArtifact::Standard(StandardScalerParams {
        mean: COLUMNS.iter().map(|(_, m, ..)| *m).collect(),
        scale: COLUMNS.iter().map(|(_, _, s, _)| *s).collect(),
    })
}

pub fn churn_model_artifact() -> ModelArtifact {
    ModelArtifact::LogisticRegression(LogisticRegressionParams {
        coefficients: COLUMNS.iter().map(|(.., w)| *w).collect(),
        intercept: INTERCEPT,
        classes: Some(vec![0, 1]),
    })
}

pub fn dummy_artifacts() -> ModelArtifacts {
    ModelArtifacts {
        schema: churn_schema(),
        scaler: build_scaler(churn_scaler_artifact()).expect("dummy scaler is valid"),
        classifier: build_classifier(churn_model_artifact()).expect("dummy model is valid"),
    }
}

pub fn dummy_service() -> InferenceService {
    InferenceService::new(dummy_artifacts())
}

/// Writes the dummy artifacts as JSON files with default names into `dir`.
pub fn write_artifacts(dir: &Path) -> Result<ArtifactPaths, Error> {
    let paths = ArtifactPaths::in_dir(dir);
    std::fs::write(&paths.model, serde_json::to_vec_pretty(&churn_model_artifact())?)?;
    std::fs::write(&paths.scaler, serde_json::to_vec_pretty(&churn_scaler_artifact())?)?;
    std::fs::write(&paths.columns, serde_json::to_vec_pretty(&churn_columns())?)?;
    Ok(paths)
}
