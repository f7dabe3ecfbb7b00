use anyhow::{Context, Result};
use serde_json::{Map, Value};

use crate::core::customer::RawCustomerRecord;
use crate::ui::cli::drivers::PromptDriver;
use crate::ui::types::{FieldKind, FieldSpec};

fn option_label(v: &Value) -> String {
    match v {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn ask_field<D: PromptDriver>(driver: &D, spec: &FieldSpec) -> Result<Value> {
    let init = spec.default.as_ref();
    let help = spec.help();

    Ok(match &spec.kind {
        FieldKind::Choice(options) => {
            let labels: Vec<String> = options.iter().map(option_label).collect();
            let default = init
                .and_then(|d| options.iter().position(|o| o == d))
                .unwrap_or(0);
            let idx = driver.ask_select(&spec.title, help, &labels, default)?;
            options
                .get(idx)
                .cloned()
                .with_context(|| format!("no option {idx} for {}", spec.title))?
        }
        FieldKind::Integer => {
            let def = init.and_then(|v| v.as_u64()).unwrap_or(0);
            Value::from(driver.ask_u64(
                &spec.title,
                help,
                def,
                spec.min.map(|x| x as u64),
                spec.max.map(|x| x as u64),
            )?)
        }
        FieldKind::Number => {
            let def = init.and_then(|v| v.as_f64()).unwrap_or(0.0);
            Value::from(driver.ask_f64(&spec.title, help, def, spec.min, spec.max)?)
        }
    })
}

/// Asks for every field in `specs` and assembles the customer record.
pub fn prompt_customer<D: PromptDriver>(
    driver: &D,
    specs: &[FieldSpec],
) -> Result<RawCustomerRecord> {
    let mut params = Map::new();
    for spec in specs {
        params.insert(spec.name.clone(), ask_field(driver, spec)?);
    }

    let record: RawCustomerRecord =
        serde_json::from_value(Value::Object(params)).context("form produced an invalid record")?;
    record.validate()?;
    Ok(record)
}
