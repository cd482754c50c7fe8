//! JSON <-> condition value conversion utilities

use std::collections::BTreeMap;

use serde_json::{Map, Value as Json};

use super::CliError;
use crate::{ResolvedChoice, Value};

/// Convert a condition result to JSON. Non-finite numbers become `null`.
pub fn value_to_json(v: Value) -> Json {
    match v {
        Value::Boolean(b) => Json::Bool(b),
        Value::Number(n) => serde_json::Number::from_f64(n)
            .map(Json::Number)
            .unwrap_or(Json::Null),
    }
}

/// Read a variable table.
///
/// Accepts `null`, an array (position is the index, `null` entries are
/// skipped) or an object keyed by index: `{"3": 90}`.
pub fn variables_from_json(v: &Json) -> Result<BTreeMap<usize, f64>, CliError> {
    let number = |index: usize, value: &Json| {
        value.as_f64().ok_or_else(|| {
            CliError::InvalidInput(format!("variable {} must be a number, got {}", index, value))
        })
    };

    let mut vars = BTreeMap::new();
    match v {
        Json::Null => {}
        Json::Array(items) => {
            for (index, item) in items.iter().enumerate() {
                if !item.is_null() {
                    vars.insert(index, number(index, item)?);
                }
            }
        }
        Json::Object(obj) => {
            for (key, item) in obj {
                let index = key.trim().parse::<usize>().map_err(|_| {
                    CliError::InvalidInput(format!("variable key '{}' is not an index", key))
                })?;
                vars.insert(index, number(index, item)?);
            }
        }
        other => {
            return Err(CliError::InvalidInput(format!(
                "variables must be an array or an object, got {}",
                other
            )));
        }
    }
    Ok(vars)
}

/// Read a list of choice labels.
pub fn choices_from_json(v: &Json) -> Result<Vec<String>, CliError> {
    let items = v
        .as_array()
        .ok_or_else(|| CliError::InvalidInput("choices must be an array of strings".into()))?;
    items
        .iter()
        .map(|item| {
            item.as_str().map(str::to_string).ok_or_else(|| {
                CliError::InvalidInput(format!("choice must be a string, got {}", item))
            })
        })
        .collect()
}

/// Serialise resolved choices as `[{"index", "text", "enabled"}, ...]`.
pub fn resolved_to_json(choices: &[ResolvedChoice]) -> Json {
    Json::Array(
        choices
            .iter()
            .map(|choice| {
                let mut obj = Map::new();
                obj.insert("index".into(), Json::from(choice.index));
                obj.insert("text".into(), Json::String(choice.text.clone()));
                obj.insert("enabled".into(), Json::Bool(choice.enabled));
                Json::Object(obj)
            })
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn array_variables_skip_nulls() {
        let vars = variables_from_json(&json!([null, 1, 2.5])).unwrap();
        assert_eq!(vars.get(&0), None);
        assert_eq!(vars.get(&1), Some(&1.0));
        assert_eq!(vars.get(&2), Some(&2.5));
    }

    #[test]
    fn object_variables_need_index_keys() {
        let vars = variables_from_json(&json!({"3": 90})).unwrap();
        assert_eq!(vars.get(&3), Some(&90.0));
        assert!(matches!(
            variables_from_json(&json!({"gold": 1})),
            Err(CliError::InvalidInput(_))
        ));
    }

    #[test]
    fn nan_serialises_as_null() {
        assert_eq!(value_to_json(Value::Number(f64::NAN)), Json::Null);
        assert_eq!(value_to_json(Value::Boolean(true)), Json::Bool(true));
    }
}
