use crate::service::{ClassificationResult, ServiceHealth};

/// Phase of the analyze flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnalyzePhase {
    #[default]
    Idle,
    Validating,
    Submitting,
    Succeeded,
    Failed,
}

/// Transient display state of one session. Nothing here outlives the process.
#[derive(Debug, Clone, PartialEq)]
pub struct UiState {
    pub input: String,
    pub loading: bool,
    pub trigger_enabled: bool,
    pub error: Option<String>,
    pub result: Option<ClassificationResult>,
    pub phase: AnalyzePhase,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            input: String::new(),
            loading: false,
            trigger_enabled: true,
            error: None,
            result: None,
            phase: AnalyzePhase::Idle,
        }
    }
}

/// The single panel visible for a given state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Panel<'a> {
    Empty,
    Loading,
    Error(&'a str),
    Result(&'a ClassificationResult),
}

impl UiState {
    /// Loading takes precedence, then error, then result.
    pub fn panel(&self) -> Panel<'_> {
        if self.loading {
            Panel::Loading
        } else if let Some(message) = &self.error {
            Panel::Error(message)
        } else if let Some(result) = &self.result {
            Panel::Result(result)
        } else {
            Panel::Empty
        }
    }

    pub(crate) fn enter_submitting(&mut self) {
        self.result = None;
        self.error = None;
        self.loading = true;
        self.trigger_enabled = false;
        self.phase = AnalyzePhase::Submitting;
    }

    pub(crate) fn succeed(&mut self, result: ClassificationResult) {
        self.error = None;
        self.result = Some(result);
        self.phase = AnalyzePhase::Succeeded;
    }

    pub(crate) fn fail(&mut self, message: impl Into<String>) {
        self.result = None;
        self.error = Some(message.into());
        self.phase = AnalyzePhase::Failed;
    }

    /// Runs on every exit of the analyze flow.
    pub(crate) fn finish_request(&mut self) {
        self.loading = false;
        self.trigger_enabled = true;
    }

    pub(crate) fn clear(&mut self) {
        self.input.clear();
        self.result = None;
        self.error = None;
        if !self.loading {
            self.phase = AnalyzePhase::Idle;
        }
    }
}

/// Status indicator derived from the health probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HealthIndicator {
    #[default]
    Checking,
    Online,
    /// Reachable but the model is not loaded
    Degraded,
    Offline,
}

impl From<ServiceHealth> for HealthIndicator {
    fn from(health: ServiceHealth) -> Self {
        match (health.reachable, health.model_loaded) {
            (true, true) => HealthIndicator::Online,
            (true, false) => HealthIndicator::Degraded,
            (false, _) => HealthIndicator::Offline,
        }
    }
}

impl HealthIndicator {
    pub fn label(&self) -> &'static str {
        match self {
            HealthIndicator::Checking => "Checking service...",
            HealthIndicator::Online => "Online - model ready",
            HealthIndicator::Degraded => "Online - model not loaded",
            HealthIndicator::Offline => "Offline",
        }
    }

    /// Style class for the indicator
    pub fn css_class(&self) -> &'static str {
        match self {
            HealthIndicator::Checking => "status-checking",
            HealthIndicator::Online => "status-online",
            HealthIndicator::Degraded => "status-degraded",
            HealthIndicator::Offline => "status-offline",
        }
    }
}
