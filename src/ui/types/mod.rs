mod schema;

pub use schema::{FieldKind, FieldSpec, customer_field_specs, field_specs};
