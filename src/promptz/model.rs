use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

const ID_SUFFIX_LEN: usize = 8;

/// A saved prompt.
///
/// Serialized as `{"id", "text", "createdAt"}` with `createdAt` in
/// milliseconds since the Unix epoch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Prompt {
    pub id: String,
    pub text: String,
    pub created_at: i64,
}

impl Prompt {
    /// Builds a record stamped with a fresh id and the current time.
    /// `text` is expected to be sanitized already.
    pub fn new(text: String) -> Self {
        let created_at = Utc::now().timestamp_millis();
        Self {
            id: generate_id(created_at),
            text,
            created_at,
        }
    }

    /// Parses one persisted entry, returning `None` when it does not have a
    /// string `id`, a string `text` and a numeric `createdAt`.
    ///
    /// Unknown fields are ignored.
    pub fn from_value(value: &Value) -> Option<Self> {
        let id = value.get("id")?.as_str()?;
        let text = value.get("text")?.as_str()?;
        let created_at = match value.get("createdAt")? {
            Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64))?,
            _ => return None,
        };

        Some(Self {
            id: id.to_string(),
            text: text.to_string(),
            created_at,
        })
    }

    pub fn created_at_utc(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.created_at)
    }
}

/// `<millis>_<random suffix>`; the time component keeps ids roughly ordered,
/// the suffix separates prompts created within the same millisecond.
fn generate_id(millis: i64) -> String {
    let random = Uuid::new_v4().simple().to_string();
    format!("{}_{}", millis, &random[..ID_SUFFIX_LEN])
}
