use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Error body returned by the backend on non-2xx responses (`{"detail": ...}`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendErrorBody {
    pub detail: Value,
}

impl BackendErrorBody {
    pub fn from_value(body: &Value) -> Option<Self> {
        serde_json::from_value(body.clone()).ok()
    }

    /// Flattens `detail` into one line; validation errors arrive as an array of objects.
    pub fn summary(&self) -> String {
        match &self.detail {
            Value::String(message) => message.clone(),
            Value::Array(items) => items
                .iter()
                .map(|item| {
                    item.get("msg")
                        .and_then(Value::as_str)
                        .map(str::to_string)
                        .unwrap_or_else(|| item.to_string())
                })
                .collect::<Vec<_>>()
                .join("; "),
            other => other.to_string(),
        }
    }
}
