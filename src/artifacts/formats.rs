use crate::artifacts::ArtifactError;
use crate::classifiers::{Classifier, GaussianNaiveBayes, LogisticRegression, parse_classes};
use crate::scalers::{MinMaxScaler, Scaler, StandardScaler};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumDiscriminants, IntoStaticStr};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StandardScalerParams {
    pub mean: Vec<f64>,
    pub scale: Vec<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MinMaxScalerParams {
    pub min: Vec<f64>,
    pub scale: Vec<f64>,
}

/// Contents of the scaler artifact.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, EnumDiscriminants)]
#[serde(tag = "type", content = "params", rename_all = "kebab-case")]
#[strum_discriminants(name(ScalerKind))]
#[strum_discriminants(derive(Display, IntoStaticStr))]
#[strum_discriminants(strum(serialize_all = "kebab-case"))]
pub enum ScalerArtifact {
    Standard(StandardScalerParams),
    MinMax(MinMaxScalerParams),
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LogisticRegressionParams {
    pub coefficients: Vec<f64>,
    pub intercept: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub classes: Option<Vec<u8>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GaussianNaiveBayesParams {
    pub class_prior: [f64; 2],
    pub theta: [Vec<f64>; 2],
    pub var: [Vec<f64>; 2],
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub classes: Option<Vec<u8>>,
}

/// Contents of the model artifact.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, EnumDiscriminants)]
#[serde(tag = "type", content = "params", rename_all = "kebab-case")]
#[strum_discriminants(name(ModelKind))]
#[strum_discriminants(derive(Display, IntoStaticStr))]
#[strum_discriminants(strum(serialize_all = "kebab-case"))]
pub enum ModelArtifact {
    LogisticRegression(LogisticRegressionParams),
    GaussianNaiveBayes(GaussianNaiveBayesParams),
}

impl TryFrom<StandardScalerParams> for StandardScaler {
    type Error = ArtifactError;

    fn try_from(p: StandardScalerParams) -> Result<Self, Self::Error> {
        StandardScaler::new(p.mean, p.scale)
    }
}

impl TryFrom<MinMaxScalerParams> for MinMaxScaler {
    type Error = ArtifactError;

    fn try_from(p: MinMaxScalerParams) -> Result<Self, Self::Error> {
        MinMaxScaler::new(p.min, p.scale)
    }
}

impl TryFrom<LogisticRegressionParams> for LogisticRegression {
    type Error = ArtifactError;

    fn try_from(p: LogisticRegressionParams) -> Result<Self, Self::Error> {
        let classes = parse_classes(p.classes.as_deref())
            .map_err(|reason| ArtifactError::invalid_model("logistic-regression", reason))?;
        LogisticRegression::new(p.coefficients, p.intercept, classes)
    }
}

impl TryFrom<GaussianNaiveBayesParams> for GaussianNaiveBayes {
    type Error = ArtifactError;

    fn try_from(p: GaussianNaiveBayesParams) -> Result<Self, Self::Error> {
        let classes = parse_classes(p.classes.as_deref())
            .map_err(|reason| ArtifactError::invalid_model("gaussian-naive-bayes", reason))?;
        GaussianNaiveBayes::new(p.class_prior, p.theta, p.var, classes)
    }
}

pub fn build_scaler(artifact: ScalerArtifact) -> Result<Box<dyn Scaler>, ArtifactError> {
    match artifact {
        ScalerArtifact::Standard(p) => Ok(Box::new(StandardScaler::try_from(p)?)),
        ScalerArtifact::MinMax(p) => Ok(Box::new(MinMaxScaler::try_from(p)?)),
    }
}

pub fn build_classifier(artifact: ModelArtifact) -> Result<Box<dyn Classifier>, ArtifactError> {
    match artifact {
        ModelArtifact::LogisticRegression(p) => Ok(Box::new(LogisticRegression::try_from(p)?)),
        ModelArtifact::GaussianNaiveBayes(p) => Ok(Box::new(GaussianNaiveBayes::try_from(p)?)),
    }
}
