//! Wire types for the analysis API.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Count that may arrive as an integer, an integral float or a numeric string.
/// Anything else reads as absent.
fn lenient_count<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<u64>, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_u64().or_else(|| {
            n.as_f64()
                .filter(|f| f.fract() == 0.0 && *f >= 0.0)
                .map(|f| f as u64)
        }),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    })
}

/// Text field that tolerates non-string JSON: other values keep their JSON text.
fn lenient_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => None,
        Value::String(s) => Some(s),
        other => Some(other.to_string()),
    })
}

/// Body of `POST /api/analyze`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisRequest {
    pub text: String,
    pub model_name: String,
}

/// Body returned by `POST /api/analyze`, on success and on failure.
///
/// Every field is optional: failures usually only carry `success`, `error`
/// and/or `detail`, and the page falls back to placeholders for anything
/// missing. Counts and text fields decode leniently so an oddly typed
/// field never turns a readable reply into a decode failure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_text: Option<String>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient_count"
    )]
    pub word_count: Option<u64>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient_count"
    )]
    pub character_count: Option<u64>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient_text"
    )]
    pub model_used: Option<String>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient_text"
    )]
    pub summary: Option<String>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient_text"
    )]
    pub sentiment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub success: Option<bool>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient_text"
    )]
    pub error: Option<String>,
    /// String for most errors; a list of objects for request validation errors.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<Value>,
}

impl AnalysisResult {
    /// False only when the body explicitly says `"success": false`.
    pub fn is_success_flagged(&self) -> bool {
        self.success != Some(false)
    }

    /// User-facing failure message: `error`, then `detail`, then `None`.
    /// Empty strings are skipped.
    pub fn failure_message(&self) -> Option<String> {
        if let Some(error) = self.error.as_deref().filter(|e| !e.is_empty()) {
            return Some(error.to_string());
        }
        match &self.detail {
            Some(Value::String(s)) if !s.is_empty() => Some(s.clone()),
            Some(Value::Null) | Some(Value::String(_)) | None => None,
            Some(other) => Some(other.to_string()),
        }
    }
}

/// Body of `GET /api/models`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelListResponse {
    pub models: Vec<String>,
    #[serde(default)]
    pub default: Option<String>,
}

/// Body of `GET /health`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthReport {
    pub status: String,
    #[serde(default)]
    pub message: Option<String>,
}

impl HealthReport {
    pub fn is_healthy(&self) -> bool {
        self.status.eq_ignore_ascii_case("healthy")
    }
}

/// Analyze reply: HTTP status plus the body, parsed whatever the status.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalyzeReply {
    pub status: u16,
    pub body: AnalysisResult,
}

impl AnalyzeReply {
    pub fn is_status_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn result_accepts_backend_success_body() {
        let body = json!({
            "input_text": "hello there",
            "word_count": 2,
            "character_count": 11,
            "summary": "A greeting.",
            "sentiment": "positive",
            "model_used": "llama3.2",
            "success": true
        });
        let result: AnalysisResult = serde_json::from_value(body).unwrap();
        assert_eq!(result.word_count, Some(2));
        assert_eq!(result.model_used.as_deref(), Some("llama3.2"));
        assert!(result.is_success_flagged());
    }

    #[test]
    fn result_accepts_error_only_body() {
        let result: AnalysisResult =
            serde_json::from_value(json!({"success": false, "error": "bad"})).unwrap();
        assert!(!result.is_success_flagged());
        assert_eq!(result.failure_message().as_deref(), Some("bad"));
    }

    #[test]
    fn failure_message_prefers_error_then_detail() {
        let both: AnalysisResult =
            serde_json::from_value(json!({"error": "e", "detail": "d"})).unwrap();
        assert_eq!(both.failure_message().as_deref(), Some("e"));

        let detail_only: AnalysisResult =
            serde_json::from_value(json!({"error": "", "detail": "Internal server error"}))
                .unwrap();
        assert_eq!(
            detail_only.failure_message().as_deref(),
            Some("Internal server error")
        );

        assert_eq!(AnalysisResult::default().failure_message(), None);
    }

    #[test]
    fn failure_message_renders_structured_detail_as_json() {
        let result: AnalysisResult = serde_json::from_value(json!({
            "detail": [{"loc": ["body", "text"], "msg": "field required"}]
        }))
        .unwrap();
        let msg = result.failure_message().unwrap();
        assert!(msg.contains("field required"));
    }

    #[test]
    fn models_default_is_optional() {
        let resp: ModelListResponse = serde_json::from_value(json!({"models": ["a"]})).unwrap();
        assert_eq!(resp.default, None);
    }

    #[test]
    fn reply_status_range() {
        let reply = |status| AnalyzeReply {
            status,
            body: AnalysisResult::default(),
        };
        assert!(reply(200).is_status_success());
        assert!(reply(204).is_status_success());
        assert!(!reply(400).is_status_success());
        assert!(!reply(503).is_status_success());
    }

    #[test]
    fn counts_accept_floats_and_numeric_strings() {
        let result: AnalysisResult = serde_json::from_value(json!({
            "word_count": 5.0,
            "character_count": "20"
        }))
        .unwrap();
        assert_eq!(result.word_count, Some(5));
        assert_eq!(result.character_count, Some(20));

        let odd: AnalysisResult =
            serde_json::from_value(json!({"word_count": 2.5, "character_count": null})).unwrap();
        assert_eq!(odd.word_count, None);
        assert_eq!(odd.character_count, None);
    }

    #[test]
    fn non_string_error_is_kept_as_json_text() {
        let result: AnalysisResult = serde_json::from_value(json!({
            "success": false,
            "error": {"code": 42}
        }))
        .unwrap();
        assert_eq!(result.failure_message().as_deref(), Some(r#"{"code":42}"#));
    }
}
