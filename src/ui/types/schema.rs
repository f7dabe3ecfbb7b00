use anyhow::{Context, Result, anyhow, bail};
use schemars::{Schema, schema_for};
use serde_json::{Map, Value};

use crate::core::customer::RawCustomerRecord;

#[derive(Debug, Clone, PartialEq)]
pub enum FieldKind {
    Integer,
    Number,
    /// Closed set of values, in declaration order.
    Choice(Vec<Value>),
}

#[derive(Debug, Clone)]
pub struct FieldSpec {
    pub name: String,
    pub title: String,
    pub description: Option<String>,
    pub kind: FieldKind,
    pub default: Option<Value>,
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl FieldSpec {
    pub fn help(&self) -> &str {
        self.description.as_deref().unwrap_or("")
    }
}

/// Form fields for [`RawCustomerRecord`], defaults taken from its `Default`.
pub fn customer_field_specs() -> Result<Vec<FieldSpec>> {
    let schema = schema_for!(RawCustomerRecord);
    let defaults = serde_json::to_value(RawCustomerRecord::default())?;
    let mut specs = field_specs(&schema)?;
    for spec in &mut specs {
        if spec.default.is_none() {
            spec.default = defaults.get(&spec.name).cloned();
        }
    }
    Ok(specs)
}

/// Flattens the top-level properties of an object schema into field specs,
/// in property order.
pub fn field_specs(root: &Schema) -> Result<Vec<FieldSpec>> {
    let root_obj = root.as_object().context("root schema is not an object")?;
    let props = root_obj
        .get("properties")
        .and_then(|v| v.as_object())
        .context("root schema has no properties")?;

    let mut out = Vec::with_capacity(props.len());
    for (name, field_schema) in props {
        let prop = field_schema
            .as_object()
            .with_context(|| format!("field schema for '{name}' is not an object"))?;
        let target = resolve_field(root_obj, prop)
            .ok_or_else(|| anyhow!("failed to resolve field $ref for '{name}'"))?;

        let meta = |key: &str| {
            prop.get(key)
                .or_else(|| target.get(key))
                .and_then(|v| v.as_str())
                .map(str::to_string)
        };

        let Some(kind) = detect_field_kind(target) else {
            bail!("unsupported schema for field '{name}'");
        };

        let bound = |keys: [&str; 2]| {
            keys.iter()
                .find_map(|k| prop.get(*k).or_else(|| target.get(*k)))
                .and_then(|v| v.as_f64())
        };

        out.push(FieldSpec {
            name: name.clone(),
            title: meta("title").unwrap_or_else(|| name.clone()),
            description: meta("description"),
            default: prop.get("default").or_else(|| target.get("default")).cloned(),
            min: bound(["minimum", "exclusiveMinimum"]),
            max: bound(["maximum", "exclusiveMaximum"]),
            kind,
        });
    }
    Ok(out)
}

/// Follows a `$ref` (directly or through a single-entry `allOf`) to the
/// schema that carries the field's type. Returns `prop` itself otherwise.
fn resolve_field<'a>(
    root_obj: &'a Map<String, Value>,
    prop: &'a Map<String, Value>,
) -> Option<&'a Map<String, Value>> {
    if prop.contains_key("$ref") {
        return resolve_ref_obj(root_obj, prop);
    }
    if let Some(Value::Array(all_of)) = prop.get("allOf") {
        if let [Value::Object(inner)] = all_of.as_slice() {
            return resolve_ref_obj(root_obj, inner);
        }
    }
    Some(prop)
}

/// Resolve a local $ref like "#/$defs/Contract" against the root object.
fn resolve_ref_obj<'a>(
    root_obj: &'a Map<String, Value>,
    obj: &'a Map<String, Value>,
) -> Option<&'a Map<String, Value>> {
    match obj.get("$ref") {
        Some(Value::String(r)) => {
            let path = r.strip_prefix("#/")?;
            let mut cur: &Map<String, Value> = root_obj;
            for raw_seg in path.split('/') {
                // JSON Pointer unescape (~1 => /, ~0 => ~)
                let seg = raw_seg.replace("~1", "/").replace("~0", "~");
                cur = cur.get(&seg)?.as_object()?;
            }
            Some(cur)
        }
        _ => Some(obj),
    }
}

fn detect_field_kind(obj: &Map<String, Value>) -> Option<FieldKind> {
    if let Some(Value::Array(values)) = obj.get("enum") {
        return Some(FieldKind::Choice(values.clone()));
    }
    if let Some(Value::Array(alts)) = obj.get("oneOf") {
        let consts: Option<Vec<Value>> = alts
            .iter()
            .map(|alt| alt.as_object().and_then(|o| o.get("const")).cloned())
            .collect();
        return consts.map(FieldKind::Choice);
    }
    match obj.get("type") {
        Some(Value::String(s)) => primitive_kind(s),
        Some(Value::Array(arr)) => arr
            .iter()
            .filter_map(|v| v.as_str())
            .find_map(primitive_kind),
        _ => None,
    }
}

fn primitive_kind(ty: &str) -> Option<FieldKind> {
    match ty {
        "integer" => Some(FieldKind::Integer),
        "number" => Some(FieldKind::Number),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn spec<'a>(specs: &'a [FieldSpec], name: &str) -> &'a FieldSpec {
        specs.iter().find(|s| s.name == name).unwrap()
    }

    #[test]
    fn covers_every_record_field_in_form_order() {
        let specs = customer_field_specs().unwrap();
        let names: Vec<&str> = specs.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "tenure",
                "Contract",
                "PaperlessBilling",
                "PaymentMethod",
                "MonthlyCharges",
                "TotalCharges",
                "gender",
                "SeniorCitizen",
                "Partner",
                "Dependents",
                "InternetService",
                "TechSupport",
            ]
        );
    }

    #[test]
    fn numeric_bounds_and_titles_come_from_schema() {
        let specs = customer_field_specs().unwrap();

        let tenure = spec(&specs, "tenure");
        assert_eq!(tenure.kind, FieldKind::Integer);
        assert_eq!(tenure.title, "Tenure (months)");
        assert_eq!(tenure.min, Some(0.0));
        assert_eq!(tenure.max, Some(72.0));
        assert_eq!(tenure.default, Some(json!(12)));

        let monthly = spec(&specs, "MonthlyCharges");
        assert_eq!(monthly.kind, FieldKind::Number);
        assert_eq!(monthly.min, Some(18.0));
        assert_eq!(monthly.max, Some(120.0));

        let total = spec(&specs, "TotalCharges");
        assert_eq!(total.min, Some(18.0));
        assert_eq!(total.max, None);
    }

    #[test]
    fn enums_become_choices() {
        let specs = customer_field_specs().unwrap();

        let contract = spec(&specs, "Contract");
        assert_eq!(contract.title, "Contract");
        assert_eq!(
            contract.kind,
            FieldKind::Choice(vec![
                json!("Month-to-month"),
                json!("One year"),
                json!("Two year")
            ])
        );
        assert_eq!(contract.default, Some(json!("Month-to-month")));

        let senior = spec(&specs, "SeniorCitizen");
        assert_eq!(senior.kind, FieldKind::Choice(vec![json!(0), json!(1)]));
        assert_eq!(senior.default, Some(json!(0)));

        let partner = spec(&specs, "Partner");
        assert_eq!(partner.help(), "Whether the customer has a partner");
        assert_eq!(
            partner.kind,
            FieldKind::Choice(vec![json!("Yes"), json!("No")])
        );
    }

    #[test]
    fn resolves_refs_and_one_of_consts() {
        let schema: Schema = serde_json::from_value(json!({
            "type": "object",
            "properties": {
                "plan": { "allOf": [{ "$ref": "#/$defs/Plan" }], "title": "Plan" },
                "seats": { "type": ["integer", "null"], "minimum": 1 }
            },
            "$defs": {
                "Plan": { "oneOf": [{ "const": "basic" }, { "const": "pro" }] }
            }
        }))
        .unwrap();
        let specs = field_specs(&schema).unwrap();
        assert_eq!(specs[0].title, "Plan");
        assert_eq!(
            specs[0].kind,
            FieldKind::Choice(vec![json!("basic"), json!("pro")])
        );
        assert_eq!(specs[1].kind, FieldKind::Integer);
        assert_eq!(specs[1].min, Some(1.0));
        assert_eq!(specs[1].title, "seats");
    }

    #[test]
    fn unsupported_field_is_an_error() {
        let schema: Schema = serde_json::from_value(json!({
            "type": "object",
            "properties": { "note": { "type": "string" } }
        }))
        .unwrap();
        assert!(field_specs(&schema).is_err());
    }
}
