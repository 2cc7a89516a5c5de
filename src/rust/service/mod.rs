mod client;
mod error;
mod types;

pub use client::{DetectorApi, HttpDetectorApi};
pub use error::{AnalyzeError, ANALYSIS_FAILED_MESSAGE, EMPTY_INPUT_MESSAGE};
pub use types::{ClassificationRequest, ClassificationResult, Confidence, HealthResponse, Label, ServiceHealth};
