//! Resolve a whole choice list from JSON input

use super::{CliError, choices_from_json, resolved_to_json, variables_from_json};
use crate::{Resolver, TagSet};

/// Options for the resolve command
#[derive(Debug, Clone, Default)]
pub struct ResolveOptions {
    /// JSON input string
    pub input: Option<String>,
    pub tags: TagSet,
}

/// Execute a resolve operation.
///
/// The input is either an array of labels or
/// `{"choices": [...], "variables": [...] | {"N": value}}`.
pub fn execute_resolve(options: &ResolveOptions) -> Result<serde_json::Value, CliError> {
    let json_str = options.input.as_ref().ok_or(CliError::NoInput)?;
    let json: serde_json::Value = serde_json::from_str(json_str)?;

    let (choices, vars) = match &json {
        serde_json::Value::Array(_) => (choices_from_json(&json)?, Default::default()),
        serde_json::Value::Object(obj) => {
            let choices = obj
                .get("choices")
                .ok_or_else(|| CliError::InvalidInput("missing \"choices\"".into()))?;
            let vars = match obj.get("variables") {
                Some(v) => variables_from_json(v)?,
                None => Default::default(),
            };
            (choices_from_json(choices)?, vars)
        }
        _ => {
            return Err(CliError::InvalidInput(
                "expected an array of choices or an object with \"choices\"".into(),
            ));
        }
    };

    let resolution = Resolver::new(options.tags.clone()).resolve_with_diagnostics(&choices, &vars);
    if !resolution.diagnostics.is_empty() {
        log::info!("{} condition(s) could not be evaluated", resolution.diagnostics.len());
    }
    Ok(resolved_to_json(&resolution.choices))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn resolves_object_input() {
        let options = ResolveOptions {
            input: Some(
                json!({
                    "choices": ["<dis>true</dis>A", "<hide>\\v[1] > 0</hide>B", "C"],
                    "variables": {"1": 5}
                })
                .to_string(),
            ),
            ..Default::default()
        };
        let out = execute_resolve(&options).unwrap();
        assert_eq!(
            out,
            json!([
                {"index": 0, "text": "A", "enabled": false},
                {"index": 2, "text": "C", "enabled": true}
            ])
        );
    }

    #[test]
    fn missing_input_is_reported() {
        let err = execute_resolve(&ResolveOptions::default()).unwrap_err();
        assert!(matches!(err, CliError::NoInput));
    }
}
