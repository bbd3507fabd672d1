use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// `msg` reported by a looped task whose items all succeeded.
pub const ALL_ITEMS_COMPLETED: &str = "All items completed";

/// `msg` reported by a looped task where at least one item failed.
pub const ITEMS_FAILED: &str = "One or more items failed";

/// The `msg` field of a task result.
///
/// Tasks put anything in here: plain text, the batch summary phrases, an
/// empty list when there is nothing to say, or arbitrary structured data
/// from debug output.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    Text(String),
    /// An empty list (`[]`).
    EmptySequence,
    Other(Value),
}

impl Message {
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::String(text) => Self::Text(text),
            Value::Array(items) if items.is_empty() => Self::EmptySequence,
            other => Self::Other(other),
        }
    }

    /// Message text used when choosing display text; an empty list counts as
    /// empty. Structured values render as compact JSON.
    pub fn text(&self) -> String {
        match self {
            Self::Text(text) => text.clone(),
            Self::EmptySequence => String::new(),
            Self::Other(value) => value.to_string(),
        }
    }
}

impl<'de> Deserialize<'de> for Message {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Value::deserialize(deserializer).map(Self::from_value)
    }
}

/// Result payload of one task on one host.
///
/// Every recognized field is optional and decoded leniently: a field of an
/// unexpected type never fails the whole record. Unknown keys are ignored.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ResultRecord {
    #[serde(default, deserialize_with = "lenient_text")]
    pub stdout: Option<String>,

    #[serde(default, deserialize_with = "lenient_text")]
    pub stderr: Option<String>,

    #[serde(default, deserialize_with = "lenient_rc")]
    pub rc: Option<i64>,

    /// `null` is treated the same as a missing key.
    #[serde(default)]
    pub msg: Option<Message>,

    /// Present whenever the task declared a failure condition; `null` and
    /// other falsy values count as present-and-false.
    #[serde(default, deserialize_with = "lenient_flag")]
    pub failed: Option<bool>,
}

impl ResultRecord {
    /// Decodes a raw result payload. Returns `None` when the payload is not
    /// a JSON object.
    pub fn from_value(value: &Value) -> Option<Self> {
        if !value.is_object() {
            return None;
        }
        Self::deserialize(value).ok()
    }

    pub fn stdout(&self) -> &str {
        self.stdout.as_deref().unwrap_or_default()
    }

    pub fn stderr(&self) -> &str {
        self.stderr.as_deref().unwrap_or_default()
    }

    /// `msg` as report text; empty when absent.
    pub fn msg_text(&self) -> String {
        self.msg.as_ref().map(Message::text).unwrap_or_default()
    }
}

pub(crate) fn lenient_text<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<String>, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => None,
        Value::String(text) => Some(text),
        other => Some(other.to_string()),
    })
}

#[allow(clippy::cast_possible_truncation)] // integral floats only
fn lenient_rc<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<i64>, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.fract() == 0.0 && f.is_finite())
                .map(|f| f as i64)
        }),
        _ => None,
    })
}

fn lenient_flag<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<bool>, D::Error> {
    Value::deserialize(deserializer).map(|v| Some(is_truthy(&v)))
}

/// Truthiness of a JSON value: `false`, `null`, zero, and empty strings,
/// arrays, and objects are falsy; everything else is truthy.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}
