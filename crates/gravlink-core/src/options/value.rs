//! Scalar option values and their permissive coercions.

use std::fmt;

/// A scalar option value: string, boolean, or number.
#[derive(Debug, Clone, PartialEq)]
pub enum OptionValue {
    Str(String),
    Bool(bool),
    Num(f64),
}

impl OptionValue {
    /// Scalar JSON values map directly; null, arrays and objects yield `None`.
    pub fn from_json(value: &serde_json::Value) -> Option<Self> {
        match value {
            serde_json::Value::String(s) => Some(OptionValue::Str(s.clone())),
            serde_json::Value::Bool(b) => Some(OptionValue::Bool(*b)),
            serde_json::Value::Number(n) => n.as_f64().map(OptionValue::Num),
            _ => None,
        }
    }

    /// Boolean form: booleans as-is, `"true"`/`"false"` strings. Anything else is `None`.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            OptionValue::Bool(b) => Some(*b),
            OptionValue::Str(s) => match s.trim() {
                "true" => Some(true),
                "false" => Some(false),
                _ => None,
            },
            OptionValue::Num(_) => None,
        }
    }

    /// Form used for query values: `false`, `0`, `NaN` and `""` render empty.
    pub fn to_query_value(&self) -> String {
        match self {
            OptionValue::Bool(false) => String::new(),
            OptionValue::Num(n) if *n == 0.0 || n.is_nan() => String::new(),
            other => other.to_string(),
        }
    }

    /// Positive integer form, for `size`.
    pub fn as_size(&self) -> Option<u32> {
        match self {
            OptionValue::Num(n) => {
                if n.fract() == 0.0 && *n >= 1.0 && *n <= u32::MAX as f64 {
                    Some(*n as u32)
                } else {
                    None
                }
            }
            OptionValue::Str(s) => s.trim().parse::<u32>().ok().filter(|n| *n > 0),
            OptionValue::Bool(_) => None,
        }
    }
}

impl fmt::Display for OptionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionValue::Str(s) => f.write_str(s),
            OptionValue::Bool(b) => write!(f, "{b}"),
            // f64 Display drops a zero fraction: 400.0 -> "400".
            OptionValue::Num(n) => write!(f, "{n}"),
        }
    }
}

impl From<&str> for OptionValue {
    fn from(s: &str) -> Self {
        OptionValue::Str(s.to_string())
    }
}

impl From<String> for OptionValue {
    fn from(s: String) -> Self {
        OptionValue::Str(s)
    }
}

impl From<bool> for OptionValue {
    fn from(b: bool) -> Self {
        OptionValue::Bool(b)
    }
}

impl From<u32> for OptionValue {
    fn from(n: u32) -> Self {
        OptionValue::Num(n as f64)
    }
}

impl From<i32> for OptionValue {
    fn from(n: i32) -> Self {
        OptionValue::Num(n as f64)
    }
}

impl From<i64> for OptionValue {
    fn from(n: i64) -> Self {
        OptionValue::Num(n as f64)
    }
}

impl From<f64> for OptionValue {
    fn from(n: f64) -> Self {
        OptionValue::Num(n)
    }
}
