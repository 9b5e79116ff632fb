use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::analysis::fetcher::FetchError;
use crate::analysis::scoring::ResumeScore;
use crate::errors::AppError;

#[derive(Debug, Deserialize)]
pub struct AnalysisRequest {
    /// Kept untyped so that non-string values reach `url()` instead of
    /// failing body deserialization.
    #[serde(rename = "resumeUrl", default)]
    pub resume_url: Option<Value>,
}

impl AnalysisRequest {
    /// Empty-like values (missing, `null`, `false`, `0`, `""`, `[]`, `{}`)
    /// count as not provided. Any other non-string cannot be downloaded.
    pub fn url(&self) -> Result<&str, AppError> {
        let value = match &self.resume_url {
            None => return Err(AppError::MissingResumeUrl),
            Some(value) => value,
        };
        if is_empty_like(value) {
            return Err(AppError::MissingResumeUrl);
        }
        match value {
            Value::String(url) => Ok(url),
            other => Err(AppError::Fetch(FetchError::InvalidUrl(other.to_string()))),
        }
    }
}

fn is_empty_like(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(a) => a.is_empty(),
        Value::Object(o) => o.is_empty(),
    }
}

#[derive(Debug, Serialize)]
pub struct AnalysisResult {
    pub skills: String,
    pub score: ResumeScore,
}
