mod controller;
mod keyboard;
mod render;
mod state;

pub use controller::{SessionController, View};
pub use keyboard::{Focus, Key, KeyOutcome, KeyStroke};
pub use render::{
    confidence_display, format_percent, render_result, ConfidenceColor, ConfidenceDisplay, RenderedResult,
    AI_CAPTION, AI_ICON, HUMAN_CAPTION, HUMAN_ICON,
};
pub use state::{AnalyzePhase, HealthIndicator, Panel, UiState};
