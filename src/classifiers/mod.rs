mod classifier;
mod gaussian_naive_bayes;
mod logistic_regression;

pub use classifier::Classifier;
pub(crate) use classifier::parse_classes;
pub use gaussian_naive_bayes::GaussianNaiveBayes;
pub use logistic_regression::LogisticRegression;
