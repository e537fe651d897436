//! Normalizer — resolves a raw document body into a structured [`serde_json::Value`].
//!
//! Parsing is attempted in order: JSON → YAML. Already-decoded mappings pass
//! through untouched. JSON runs first on purpose: nearly every valid JSON
//! document is also acceptable YAML, and letting the looser parser win would
//! silently reinterpret strict JSON.

use serde_json::Value;

use crate::error::NormalizeError;

/// Input to [`normalize`]: either candidate text or an already-decoded value.
///
/// Upstream producers (HTTP responses, file reads) do not carry a reliable
/// content-type signal, so the caller states only whether it holds text or a
/// decoded value; `normalize` does the rest.
#[derive(Debug, Clone, PartialEq)]
pub enum Content {
    /// Raw text that may be JSON or YAML.
    Text(String),
    /// A value something upstream already decoded. Only mappings survive
    /// normalization; every other shape is rejected.
    Structured(Value),
}

impl From<&str> for Content {
    fn from(s: &str) -> Self {
        Content::Text(s.to_owned())
    }
}

impl From<String> for Content {
    fn from(s: String) -> Self {
        Content::Text(s)
    }
}

impl From<Value> for Content {
    fn from(v: Value) -> Self {
        Content::Structured(v)
    }
}

/// Normalize a document body into a structured value.
///
/// - Text is parsed as JSON first, then as YAML. If both fail, the error
///   carries both parser failures.
/// - A structured mapping is returned unchanged.
/// - Anything else (null, sequences, bare scalars) is rejected before any
///   parsing happens.
pub fn normalize(content: impl Into<Content>) -> Result<Value, NormalizeError> {
    match content.into() {
        Content::Structured(Value::Object(map)) => Ok(Value::Object(map)),
        Content::Structured(other) => Err(NormalizeError::InvalidInput {
            kind: value_kind(&other),
        }),
        Content::Text(text) => parse_with_fallback(&text),
    }
}

fn parse_with_fallback(text: &str) -> Result<Value, NormalizeError> {
    let json_err = match serde_json::from_str(text) {
        Ok(value) => return Ok(value),
        Err(err) => err,
    };

    tracing::debug!(error = %json_err, "JSON parse failed, falling back to YAML");

    serde_yaml::from_str(text).map_err(|yaml_err| NormalizeError::Unparsable {
        json: json_err,
        yaml: yaml_err,
    })
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn structured_mapping_passes_through_unchanged() {
        let obj = json!({"title": "spec", "version": 3});
        assert_eq!(normalize(obj.clone()).unwrap(), obj);
    }

    #[test]
    fn valid_json_text_parses() {
        let out = normalize(r#"{"a": 1, "b": [true, null]}"#).unwrap();
        assert_eq!(out, json!({"a": 1, "b": [true, null]}));
    }

    #[test]
    fn yaml_text_parses_when_json_fails() {
        let out = normalize("a: 1\nb: 2").unwrap();
        assert_eq!(out, json!({"a": 1, "b": 2}));
    }

    #[test]
    fn null_and_sequence_and_scalar_reject_with_kind() {
        for (input, kind) in [
            (json!(null), "null"),
            (json!([1, 2, 3]), "array"),
            (json!(42), "number"),
            (json!(true), "boolean"),
        ] {
            match normalize(input) {
                Err(NormalizeError::InvalidInput { kind: got }) => assert_eq!(got, kind),
                other => panic!("expected InvalidInput({kind}), got {other:?}"),
            }
        }
    }

    #[test]
    fn dual_failure_keeps_both_parser_errors() {
        let err = normalize("{unclosed: [").unwrap_err();
        match &err {
            NormalizeError::Unparsable { json, yaml } => {
                assert!(!json.to_string().is_empty());
                assert!(!yaml.to_string().is_empty());
            }
            other => panic!("expected Unparsable, got {other:?}"),
        }
        let msg = err.to_string();
        assert!(msg.contains("JSON parse error:"));
        assert!(msg.contains("YAML parse error:"));
    }
}
