//! A client for a remote AI-generated text detection service.
//!
//! The crate probes the service once, submits text for classification and
//! turns the typed result into display strings. Display is abstracted behind
//! the [`View`] trait so the session state machine runs without any UI.
//!
//! # Basic Usage
//!
//! ```rust,no_run
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! use aidetect::{ClientConfig, HttpDetectorApi, HealthIndicator, SessionController, UiState, View};
//!
//! struct Stdout;
//!
//! impl View for Stdout {
//!     fn render(&mut self, state: &UiState) {
//!         println!("{:?}", state.panel());
//!     }
//!
//!     fn render_health(&mut self, indicator: HealthIndicator) {
//!         println!("{}", indicator.label());
//!     }
//! }
//!
//! let config = ClientConfig::builder()
//!     .with_base_url("http://localhost:8000")?
//!     .build()?;
//! let api = HttpDetectorApi::new(&config);
//! let mut session = SessionController::new(config, api, Stdout);
//!
//! session.probe_health().await;
//! session.analyze("hey whats up lol").await;
//! # Ok(())
//! # }
//! ```
//!
//! # Concurrency
//!
//! Everything runs on one thread. A second submission does not cancel the
//! first; the last outcome applied to the session wins.

pub mod config;
pub mod service;
pub mod session;

pub use config::{ClientConfig, ClientConfigBuilder, ConfigError, Endpoints, ExampleCatalog};
pub use service::{
    AnalyzeError, ClassificationRequest, ClassificationResult, Confidence, DetectorApi, HttpDetectorApi, Label,
    ServiceHealth,
};
pub use session::{
    render_result, AnalyzePhase, Focus, HealthIndicator, Key, KeyOutcome, KeyStroke, Panel, RenderedResult,
    SessionController, UiState, View,
};

pub fn init_logger() {
    env_logger::init();
}
