//! Value serializer: structured values to JS literal text
//!
//! Literals are produced with `serde_json`, which is valid JS for every
//! supported value and takes care of escaping nested strings.

use crate::error::{K6GenError, Result};
use serde::Serialize;

/// Encode `value` as a literal.
///
/// `owner` and `key` only feed the error message, e.g. owner
/// `"constant"` / key `"a"`, or owner `"request test1"` / key `"headers"`.
pub fn to_literal<T: Serialize + ?Sized>(owner: &str, key: &str, value: &T) -> Result<String> {
    serde_json::to_string(value).map_err(|source| K6GenError::Serialization {
        owner: owner.to_string(),
        key: key.to_string(),
        source,
    })
}

/// Double-quoted, escaped string literal
pub fn string_literal(s: &str) -> String {
    // Serializing a str never fails
    serde_json::Value::String(s.to_string()).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{NamedValueMap, ScriptValue};

    #[test]
    fn test_scalars() {
        assert_eq!(to_literal("constant", "a", &ScriptValue::Integer(20)).unwrap(), "20");
        assert_eq!(to_literal("constant", "a", &ScriptValue::Bool(true)).unwrap(), "true");
        assert_eq!(to_literal("constant", "a", &ScriptValue::Null).unwrap(), "null");
        assert_eq!(
            to_literal("constant", "a", &ScriptValue::from("111")).unwrap(),
            "\"111\""
        );
    }

    #[test]
    fn test_nested_values_parse_back() {
        let mut map = NamedValueMap::new();
        map.insert("v1".to_string(), vec!["1", "2"].into());
        map.insert(
            "v2".to_string(),
            [("v2a", ScriptValue::from("a")), ("v2b", ScriptValue::from(13))]
                .into_iter()
                .collect(),
        );
        map.insert("v3".to_string(), ScriptValue::Float(0.25));
        map.insert("quote".to_string(), "say \"hi\"\n".into());

        for (key, value) in &map {
            let literal = to_literal("variable", key, value).unwrap();
            let parsed: serde_json::Value = serde_json::from_str(&literal).unwrap();
            let expected = serde_json::to_value(value).unwrap();
            assert_eq!(parsed, expected, "literal for {} did not parse back", key);
        }

        assert_eq!(
            to_literal("variable", "v2", &map["v2"]).unwrap(),
            r#"{"v2a":"a","v2b":13}"#
        );
    }

    #[test]
    fn test_unsupported_value_names_key() {
        let value = ScriptValue::Map(
            [("inner", ScriptValue::Float(f64::INFINITY))]
                .into_iter()
                .map(|(k, v)| (k.to_string(), v))
                .collect(),
        );

        let err = to_literal("constant", "broken", &value).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("constant"), "unexpected message: {message}");
        assert!(message.contains("broken"), "unexpected message: {message}");
        assert!(matches!(err, K6GenError::Serialization { .. }));
    }

    #[test]
    fn test_string_literal_escapes() {
        assert_eq!(string_literal("a\"b"), r#""a\"b""#);
        assert_eq!(string_literal("line\nbreak"), r#""line\nbreak""#);
    }
}
