use crate::core::customer::RawCustomerRecord;
use crate::core::schema::one_hot_column;

/// Expands a record into named columns.
///
/// Numeric attributes keep their own name; every categorical attribute
/// becomes a single `{field}_{category}` column set to `1.0`. Indicator
/// columns for the categories the record does not hold are not produced.
pub fn one_hot(record: &RawCustomerRecord) -> Vec<(String, f64)> {
    let numeric = record.numeric_columns();
    let categorical = record.categorical_columns();

    let mut out = Vec::with_capacity(numeric.len() + categorical.len());
    out.extend(numeric.iter().map(|&(name, v)| (name.to_string(), v)));
    out.extend(
        categorical
            .iter()
            .map(|&(field, category)| (one_hot_column(field, category), 1.0)),
    );
    out
}
