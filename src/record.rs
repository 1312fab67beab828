use serde::Serialize;
use serde_json::{Number, Value};
use std::fmt;

/// A scalar carried through from the raw event into an output column.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Number(Number),
    Flag(bool),
}

impl FieldValue {
    /// `null` is absent. Arrays and objects are kept as their JSON text.
    pub fn from_json(value: &Value) -> Option<Self> {
        match value {
            Value::Null => None,
            Value::Bool(b) => Some(FieldValue::Flag(*b)),
            Value::Number(n) => Some(FieldValue::Number(n.clone())),
            Value::String(s) => Some(FieldValue::Text(s.clone())),
            other => Some(FieldValue::Text(other.to_string())),
        }
    }

    #[cfg(test)]
    pub fn text(s: &str) -> Self {
        FieldValue::Text(s.to_string())
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Text(s) => f.write_str(s),
            FieldValue::Number(n) => write!(f, "{}", n),
            FieldValue::Flag(b) => write!(f, "{}", b),
        }
    }
}

#[cfg(test)]
impl From<i64> for FieldValue {
    fn from(n: i64) -> Self {
        FieldValue::Number(Number::from(n))
    }
}

/// One output row. Field order here is the column order of both outputs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CleanRecord {
    pub order_id: Option<FieldValue>,
    pub payment_id: Option<FieldValue>,
    pub amount_usd: f64,
    pub currency: String,
    pub status: String,
    pub timestamp: Option<FieldValue>,
    pub raw_event_type: Option<FieldValue>,
    pub source: Option<FieldValue>,
}

impl CleanRecord {
    pub const FIELDS: [&'static str; 8] = [
        "order_id",
        "payment_id",
        "amount_usd",
        "currency",
        "status",
        "timestamp",
        "raw_event_type",
        "source",
    ];
}
