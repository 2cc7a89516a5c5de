use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body of `POST /predict`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassificationRequest {
    pub text: String,
}

impl ClassificationRequest {
    /// Builds a request from raw user input.
    ///
    /// Returns `None` when the input is empty after trimming, so an empty
    /// request can never be constructed.
    pub fn from_input(raw: &str) -> Option<Self> {
        let text = raw.trim();
        if text.is_empty() {
            None
        } else {
            Some(Self { text: text.to_string() })
        }
    }
}

/// Label assigned by the service.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum Label {
    Ai,
    Human,
    /// Anything the service sends that is not exactly `"AI"` or `"HUMAN"`
    Other(String),
}

impl From<String> for Label {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "AI" => Label::Ai,
            "HUMAN" => Label::Human,
            _ => Label::Other(raw),
        }
    }
}

impl Label {
    /// The label exactly as it appeared on the wire
    pub fn as_str(&self) -> &str {
        match self {
            Label::Ai => "AI",
            Label::Human => "HUMAN",
            Label::Other(raw) => raw,
        }
    }

    pub fn is_ai(&self) -> bool {
        matches!(self, Label::Ai)
    }
}

/// Certainty bucket computed by the service.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum Confidence {
    VeryHigh,
    High,
    Medium,
    Low,
    Other(String),
}

impl From<String> for Confidence {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "very_high" => Confidence::VeryHigh,
            "high" => Confidence::High,
            "medium" => Confidence::Medium,
            "low" => Confidence::Low,
            _ => Confidence::Other(raw),
        }
    }
}

impl Confidence {
    pub fn as_str(&self) -> &str {
        match self {
            Confidence::VeryHigh => "very_high",
            Confidence::High => "high",
            Confidence::Medium => "medium",
            Confidence::Low => "low",
            Confidence::Other(raw) => raw,
        }
    }
}

/// Successful response of `POST /predict`.
///
/// `ai_probability + human_probability` is expected to be 1.0 but is not checked.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ClassificationResult {
    pub label: Label,
    pub ai_probability: f64,
    pub human_probability: f64,
    pub confidence: Confidence,
    /// Absolute difference between the two probabilities
    #[serde(default)]
    pub certainty: Option<f64>,
    #[serde(default)]
    pub text_length: Option<u64>,
    #[serde(default)]
    pub word_count: Option<u64>,
}

/// Response of `GET /health`. Only `model_loaded` drives behaviour.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HealthResponse {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub model_loaded: Value,
}

impl HealthResponse {
    pub fn model_loaded(&self) -> bool {
        is_truthy(&self.model_loaded)
    }
}

/// JSON truthiness: `false`, `null`, `0`, and `""` are falsy, everything else is truthy.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(false, |f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Readiness of the remote service as observed by the one-shot probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ServiceHealth {
    pub reachable: bool,
    pub model_loaded: bool,
}

impl ServiceHealth {
    pub fn unreachable() -> Self {
        Self::default()
    }
}
