use serde::Deserialize;
use serde_json::Value;

/// Error payload from either the auth or the table endpoints.
///
/// The table API sends `{code, message}`; the auth API sends
/// `{code, msg}` or `{error, error_description}` with a numeric code.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ErrorBody {
    pub code: Option<Value>,
    #[serde(alias = "msg", alias = "error_description")]
    pub message: Option<String>,
    pub error: Option<String>,
}

impl ErrorBody {
    pub fn code(&self) -> Option<String> {
        match &self.code {
            Some(Value::String(code)) => Some(code.clone()),
            Some(Value::Number(code)) => Some(code.to_string()),
            _ => self.error.clone(),
        }
    }

    pub fn message(&self) -> Option<String> {
        self.message.clone().or_else(|| self.error.clone())
    }
}
