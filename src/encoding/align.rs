use crate::core::features::EncodedFeatureVector;
use crate::core::schema::TrainingColumnSchema;

/// Reindexes named columns onto `schema`.
///
/// Schema columns that are not supplied stay at `0.0`, supplied columns the
/// schema does not know are dropped and returned, and the output follows the
/// schema order. Aligning an already aligned row is a no-op.
pub fn align<'s, I, S>(
    columns: I,
    schema: &'s TrainingColumnSchema,
) -> (EncodedFeatureVector<'s>, Vec<String>)
where
    I: IntoIterator<Item = (S, f64)>,
    S: AsRef<str>,
{
    let mut aligned = EncodedFeatureVector::zeros(schema);
    let mut dropped = Vec::new();

    for (name, value) in columns {
        let name = name.as_ref();
        match schema.index_of(name) {
            Some(i) => aligned.set(i, value),
            None => dropped.push(name.to_string()),
        }
    }

    (aligned, dropped)
}
