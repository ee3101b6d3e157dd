//! Opaque parsed animation document.

use serde_json::Value;

/// JSON shape of a payload, for logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayloadKind {
    Null,
    Bool,
    Number,
    String,
    Array,
    Object,
}

impl PayloadKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            PayloadKind::Null => "null",
            PayloadKind::Bool => "bool",
            PayloadKind::Number => "number",
            PayloadKind::String => "string",
            PayloadKind::Array => "array",
            PayloadKind::Object => "object",
        }
    }
}

/// A parsed Lottie document. Interpreted only by the browser-side player.
#[derive(Debug, Clone, PartialEq)]
pub struct AssetPayload(Value);

impl AssetPayload {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    pub fn value(&self) -> &Value {
        &self.0
    }

    pub fn into_value(self) -> Value {
        self.0
    }

    pub fn kind(&self) -> PayloadKind {
        match &self.0 {
            Value::Null => PayloadKind::Null,
            Value::Bool(_) => PayloadKind::Bool,
            Value::Number(_) => PayloadKind::Number,
            Value::String(_) => PayloadKind::String,
            Value::Array(_) => PayloadKind::Array,
            Value::Object(_) => PayloadKind::Object,
        }
    }

    /// Serialize for embedding inside a `<script>` element.
    ///
    /// `<`, `>` and `&` are emitted as unicode escapes so that the payload
    /// can never close the surrounding tag. The result is still valid JSON
    /// and a valid JavaScript expression.
    pub fn to_script_json(&self) -> String {
        let json = self.0.to_string();
        let mut out = String::with_capacity(json.len());
        for c in json.chars() {
            match c {
                '<' => out.push_str("\\u003c"),
                '>' => out.push_str("\\u003e"),
                '&' => out.push_str("\\u0026"),
                '\u{2028}' => out.push_str("\\u2028"),
                '\u{2029}' => out.push_str("\\u2029"),
                c => out.push(c),
            }
        }
        out
    }
}

impl From<Value> for AssetPayload {
    fn from(value: Value) -> Self {
        Self(value)
    }
}
