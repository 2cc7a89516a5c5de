use reqwest::StatusCode;

/// Message shown when the input is empty after trimming.
pub const EMPTY_INPUT_MESSAGE: &str = "Please enter some text to analyze.";

/// Message shown for every network-layer failure. The underlying detail is logged only.
pub const ANALYSIS_FAILED_MESSAGE: &str =
    "Analysis failed. Please check that the detection service is available.";

/// Represents the different ways an analyze request can fail.
#[derive(Debug, thiserror::Error)]
pub enum AnalyzeError {
    /// The input was empty once trimmed; never reaches the network layer
    #[error("Validation error: {0}")]
    Validation(String),
    /// The service could not be reached (DNS, connect, TLS, timeout)
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),
    /// The service answered with a non-2xx status
    #[error("Service returned {status}: {body}")]
    Service { status: StatusCode, body: String },
    /// The service answered 2xx but the body could not be decoded
    #[error("Malformed response: {0}")]
    Malformed(String),
}

impl AnalyzeError {
    /// Maps an error to the text the user gets to see.
    ///
    /// This is the only place user-facing failure text is produced, so raw
    /// status codes or transport detail can never leak into the display.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::Validation(_) => EMPTY_INPUT_MESSAGE,
            Self::Transport(_) | Self::Service { .. } | Self::Malformed(_) => ANALYSIS_FAILED_MESSAGE,
        }
    }

    /// Classifies a reqwest error, separating undecodable bodies from transport failures.
    pub(crate) fn from_reqwest(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::Malformed(err.to_string())
        } else {
            Self::Transport(err)
        }
    }
}
