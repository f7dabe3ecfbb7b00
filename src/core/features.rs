use crate::core::schema::TrainingColumnSchema;

/// A single row aligned to a [`TrainingColumnSchema`]: one value per schema
/// column, in schema order.
#[derive(Debug, Clone, PartialEq)]
pub struct EncodedFeatureVector<'s> {
    schema: &'s TrainingColumnSchema,
    values: Vec<f64>,
}

impl<'s> EncodedFeatureVector<'s> {
    /// Zero row for `schema`.
    pub(crate) fn zeros(schema: &'s TrainingColumnSchema) -> Self {
        Self {
            schema,
            values: vec![0.0; schema.len()],
        }
    }

    pub(crate) fn set(&mut self, index: usize, value: f64) {
        self.values[index] = value;
    }

    pub fn schema(&self) -> &'s TrainingColumnSchema {
        self.schema
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn get(&self, column: &str) -> Option<f64> {
        self.schema.index_of(column).map(|i| self.values[i])
    }

    /// `(column, value)` pairs in schema order.
    pub fn iter(&self) -> impl Iterator<Item = (&'s str, f64)> + '_ {
        self.schema
            .columns()
            .iter()
            .map(String::as_str)
            .zip(self.values.iter().copied())
    }
}

/// Output of a scaler: same length as the encoded row it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct ScaledFeatureVector {
    values: Vec<f64>,
}

impl ScaledFeatureVector {
    pub fn new(values: Vec<f64>) -> Self {
        Self { values }
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
