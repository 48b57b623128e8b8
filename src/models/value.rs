use indexmap::IndexMap;
use serde::ser::Error as _;
use serde::{Deserialize, Serialize, Serializer};

/// Declaration table of a block: identifier -> literal value.
///
/// Insertion order is kept, so the rendered declarations follow the order
/// the caller (or the scenario file) listed them in.
pub type NamedValueMap = IndexMap<String, ScriptValue>;

/// A value that can be written into a script as a literal
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ScriptValue {
    Null,
    Bool(bool),
    Integer(i64),
    /// Whole numbers above `i64::MAX`
    UInteger(u64),
    Float(f64),
    String(String),
    List(Vec<ScriptValue>),
    Map(IndexMap<String, ScriptValue>),
}

impl Serialize for ScriptValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ScriptValue::Null => serializer.serialize_unit(),
            ScriptValue::Bool(b) => serializer.serialize_bool(*b),
            ScriptValue::Integer(i) => serializer.serialize_i64(*i),
            ScriptValue::UInteger(u) => serializer.serialize_u64(*u),
            ScriptValue::Float(f) if f.is_finite() => serializer.serialize_f64(*f),
            // NaN and infinities have no literal form
            ScriptValue::Float(f) => Err(S::Error::custom(format!(
                "unsupported value: non-finite number {}",
                f
            ))),
            ScriptValue::String(s) => serializer.serialize_str(s),
            ScriptValue::List(items) => items.serialize(serializer),
            ScriptValue::Map(map) => map.serialize(serializer),
        }
    }
}

impl From<&str> for ScriptValue {
    fn from(value: &str) -> Self {
        ScriptValue::String(value.to_string())
    }
}

impl From<String> for ScriptValue {
    fn from(value: String) -> Self {
        ScriptValue::String(value)
    }
}

impl From<bool> for ScriptValue {
    fn from(value: bool) -> Self {
        ScriptValue::Bool(value)
    }
}

impl From<i32> for ScriptValue {
    fn from(value: i32) -> Self {
        ScriptValue::Integer(value.into())
    }
}

impl From<i64> for ScriptValue {
    fn from(value: i64) -> Self {
        ScriptValue::Integer(value)
    }
}

impl From<u64> for ScriptValue {
    fn from(value: u64) -> Self {
        match i64::try_from(value) {
            Ok(i) => ScriptValue::Integer(i),
            Err(_) => ScriptValue::UInteger(value),
        }
    }
}

impl From<f64> for ScriptValue {
    fn from(value: f64) -> Self {
        ScriptValue::Float(value)
    }
}

impl<T: Into<ScriptValue>> From<Vec<T>> for ScriptValue {
    fn from(values: Vec<T>) -> Self {
        ScriptValue::List(values.into_iter().map(Into::into).collect())
    }
}

impl From<IndexMap<String, ScriptValue>> for ScriptValue {
    fn from(map: IndexMap<String, ScriptValue>) -> Self {
        ScriptValue::Map(map)
    }
}

impl<K: Into<String>, V: Into<ScriptValue>> FromIterator<(K, V)> for ScriptValue {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        ScriptValue::Map(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}
