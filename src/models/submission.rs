use std::fmt;

use serde_json::{Map, Value};
use tracing::warn;

/// Loosely-typed intake payload (order or contact form).
///
/// No schema is applied: any JSON object is accepted as-is and anything that
/// is not a JSON object decodes to an empty submission. Submissions are only
/// logged and then dropped.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Submission(Map<String, Value>);

impl Submission {
    /// Decode a raw request body. Decode failures are logged and swallowed so
    /// the intake endpoints keep acknowledging every request.
    pub fn from_body(kind: &str, body: &[u8]) -> Self {
        match serde_json::from_slice::<Map<String, Value>>(body) {
            Ok(fields) => Self(fields),
            Err(err) => {
                warn!(kind, error = %err, bytes = body.len(), "Ignoring undecodable submission body");
                Self::default()
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// String value of `key`, or `""` when missing or not a string.
    pub fn text(&self, key: &str) -> &str {
        self.0.get(key).and_then(Value::as_str).unwrap_or_default()
    }
}

impl fmt::Display for Submission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Map<String, Value> always serializes
        let rendered = serde_json::to_string(&self.0).map_err(|_| fmt::Error)?;
        f.write_str(&rendered)
    }
}
