use crate::service::{ClassificationResult, Confidence};

pub const AI_ICON: &str = "🤖";
pub const AI_CAPTION: &str = "AI-Generated";
pub const HUMAN_ICON: &str = "👤";
pub const HUMAN_CAPTION: &str = "Human-Written";

/// Colour used to highlight the confidence level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfidenceColor {
    Green,
    Yellow,
    Orange,
    Red,
    Neutral,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfidenceDisplay {
    pub text: String,
    pub color: ConfidenceColor,
}

/// Display strings for one classification result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedResult {
    pub icon: &'static str,
    pub caption: &'static str,
    /// Style class derived from the lower-cased label
    pub css_class: String,
    pub ai_percent: String,
    pub human_percent: String,
    pub confidence: ConfidenceDisplay,
    /// Word/character counts and certainty, when the service reports them
    pub details: Option<String>,
}

/// Formats a result for display. Pure: the same input always renders the same strings.
pub fn render_result(result: &ClassificationResult) -> RenderedResult {
    let (icon, caption) = if result.label.is_ai() {
        (AI_ICON, AI_CAPTION)
    } else {
        (HUMAN_ICON, HUMAN_CAPTION)
    };

    RenderedResult {
        icon,
        caption,
        css_class: result.label.as_str().to_lowercase(),
        ai_percent: format_percent(result.ai_probability),
        human_percent: format_percent(result.human_probability),
        confidence: confidence_display(&result.confidence),
        details: format_details(result),
    }
}

/// `0.8523` -> `"85.2%"`. Ties round away from zero (`0.1225` -> `"12.3%"`).
pub fn format_percent(probability: f64) -> String {
    let percent = probability * 100.0;
    format!("{:.1}%", (percent * 10.0).round() / 10.0)
}

pub fn confidence_display(confidence: &Confidence) -> ConfidenceDisplay {
    let (text, color) = match confidence {
        Confidence::VeryHigh => ("Very High".to_string(), ConfidenceColor::Green),
        Confidence::High => ("High".to_string(), ConfidenceColor::Yellow),
        Confidence::Medium => ("Medium".to_string(), ConfidenceColor::Orange),
        Confidence::Low => ("Low".to_string(), ConfidenceColor::Red),
        Confidence::Other(raw) => (raw.to_uppercase(), ConfidenceColor::Neutral),
    };
    ConfidenceDisplay { text, color }
}

fn format_details(result: &ClassificationResult) -> Option<String> {
    let mut parts = Vec::new();
    if let Some(words) = result.word_count {
        parts.push(format!("{} words", words));
    }
    if let Some(chars) = result.text_length {
        parts.push(format!("{} characters", chars));
    }
    if let Some(certainty) = result.certainty {
        parts.push(format!("certainty {}", format_percent(certainty)));
    }

    if parts.is_empty() {
        None
    } else {
        Some(parts.join(" · "))
    }
}
