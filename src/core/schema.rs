use std::collections::HashMap;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SchemaError {
    #[error("column list is empty")]
    Empty,

    #[error("duplicate column '{0}'")]
    DuplicateColumn(String),
}

/// Name of the indicator column produced for `field == category`.
pub fn one_hot_column(field: &str, category: &str) -> String {
    format!("{field}_{category}")
}

/// Ordered feature columns fixed at training time.
///
/// Defines both the length and the order of every vector handed to the
/// scaler and the classifier. Immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct TrainingColumnSchema {
    columns: Vec<String>,
    index: HashMap<String, usize>,
}

impl TrainingColumnSchema {
    pub fn new(columns: Vec<String>) -> Result<Self, SchemaError> {
        if columns.is_empty() {
            return Err(SchemaError::Empty);
        }
        let mut index = HashMap::with_capacity(columns.len());
        for (i, name) in columns.iter().enumerate() {
            if index.insert(name.clone(), i).is_some() {
                return Err(SchemaError::DuplicateColumn(name.clone()));
            }
        }
        Ok(Self { columns, index })
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Whether any indicator column `{field}_*` exists for `field`.
    pub fn has_indicators_for(&self, field: &str) -> bool {
        let prefix = format!("{field}_");
        self.columns.iter().any(|c| c.starts_with(&prefix))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cols(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn preserves_order_and_indexes() {
        let s = TrainingColumnSchema::new(cols(&["tenure", "Contract_One year", "gender_Male"]))
            .unwrap();
        assert_eq!(s.len(), 3);
        assert_eq!(s.index_of("gender_Male"), Some(2));
        assert_eq!(s.index_of("Contract_Two year"), None);
        assert_eq!(s.columns()[1], "Contract_One year");
    }

    #[test]
    fn rejects_empty_and_duplicates() {
        assert_eq!(TrainingColumnSchema::new(vec![]), Err(SchemaError::Empty));
        assert_eq!(
            TrainingColumnSchema::new(cols(&["tenure", "tenure"])),
            Err(SchemaError::DuplicateColumn("tenure".into()))
        );
    }

    #[test]
    fn indicator_lookup_uses_field_prefix() {
        let s = TrainingColumnSchema::new(cols(&["tenure", "Partner_Yes"])).unwrap();
        assert!(s.has_indicators_for("Partner"));
        assert!(!s.has_indicators_for("Dependents"));
        assert!(!s.has_indicators_for("tenure"));
        assert_eq!(one_hot_column("Partner", "Yes"), "Partner_Yes");
    }
}
