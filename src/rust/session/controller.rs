use log::{debug, error, info};

use super::keyboard::{KeyOutcome, KeyStroke};
use super::state::{AnalyzePhase, HealthIndicator, UiState};
use crate::config::ClientConfig;
use crate::service::{AnalyzeError, ClassificationRequest, ClassificationResult, DetectorApi, ServiceHealth};

/// One-way display sink. The controller calls it after every state change.
pub trait View {
    fn render(&mut self, state: &UiState);

    fn render_health(&mut self, indicator: HealthIndicator);
}

/// Drives one client session: health probe, analyze flow and the input affordances.
///
/// All methods take `&mut self` and are meant to run on a single-threaded event
/// loop. Overlapping submissions can be expressed with [`begin_analyze`] and
/// [`finish_analyze`]; whichever outcome is applied last wins the display.
///
/// [`begin_analyze`]: SessionController::begin_analyze
/// [`finish_analyze`]: SessionController::finish_analyze
#[derive(Debug)]
pub struct SessionController<A, V> {
    config: ClientConfig,
    api: A,
    view: V,
    state: UiState,
    health: HealthIndicator,
}

impl<A: DetectorApi, V: View> SessionController<A, V> {
    pub fn new(config: ClientConfig, api: A, view: V) -> Self {
        Self {
            config,
            api,
            view,
            state: UiState::default(),
            health: HealthIndicator::Checking,
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn state(&self) -> &UiState {
        &self.state
    }

    pub fn health(&self) -> HealthIndicator {
        self.health
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    /// Probes the service once and updates the status indicator. No retry.
    pub async fn probe_health(&mut self) -> ServiceHealth {
        self.view.render_health(self.health);
        let health = self.api.health().await;
        self.health = HealthIndicator::from(health);
        info!("Service status: {}", self.health.label());
        self.view.render_health(self.health);
        health
    }

    /// Replaces the input text
    pub fn set_input(&mut self, text: impl Into<String>) {
        self.state.input = text.into();
        self.view.render(&self.state);
    }

    /// Runs the full analyze flow for `raw` and returns the phase it ended in.
    pub async fn analyze(&mut self, raw: &str) -> AnalyzePhase {
        let request = match self.begin_analyze(raw) {
            Some(request) => request,
            None => return self.state.phase,
        };
        let outcome = self.api.predict(&request).await;
        self.finish_analyze(outcome)
    }

    /// Entry point for the trigger control. Ignored while a request is in flight.
    pub async fn submit(&mut self) -> Option<AnalyzePhase> {
        if !self.state.trigger_enabled {
            debug!("Trigger is disabled, ignoring submit");
            return None;
        }
        let input = self.state.input.clone();
        Some(self.analyze(&input).await)
    }

    /// Validates the input and enters the submitting state.
    ///
    /// Returns the request to send, or `None` when validation failed. A failed
    /// validation leaves loading and the trigger as they were.
    pub fn begin_analyze(&mut self, raw: &str) -> Option<ClassificationRequest> {
        self.state.phase = AnalyzePhase::Validating;
        let request = match ClassificationRequest::from_input(raw) {
            Some(request) => request,
            None => {
                let err = AnalyzeError::Validation("input is empty".into());
                info!("{}", err);
                self.state.fail(err.user_message());
                self.view.render(&self.state);
                return None;
            }
        };

        self.state.enter_submitting();
        self.view.render(&self.state);
        Some(request)
    }

    /// Applies the outcome of a submitted request. Always clears loading and
    /// re-enables the trigger, whatever the outcome.
    pub fn finish_analyze(&mut self, outcome: Result<ClassificationResult, AnalyzeError>) -> AnalyzePhase {
        match outcome {
            Ok(result) => {
                info!(
                    "Classified as {} (ai: {:.4}, human: {:.4}, confidence: {})",
                    result.label.as_str(),
                    result.ai_probability,
                    result.human_probability,
                    result.confidence.as_str()
                );
                self.state.succeed(result);
            }
            Err(err) => {
                match &err {
                    AnalyzeError::Service { status, body } => {
                        error!("Analysis failed with status {}: {}", status, body)
                    }
                    other => error!("Analysis failed: {}", other),
                }
                self.state.fail(err.user_message());
            }
        }

        self.state.finish_request();
        self.view.render(&self.state);
        self.state.phase
    }

    /// Copies a catalog example into the input. Unknown ids are a no-op.
    pub fn load_example(&mut self, id: u32) -> bool {
        match self.config.examples().get(id) {
            Some(text) => {
                self.state.input = text.to_string();
                self.view.render(&self.state);
                true
            }
            None => {
                debug!("No example with id {}", id);
                false
            }
        }
    }

    /// Empties the input and hides result and error. Loading and trigger state are untouched.
    pub fn clear(&mut self) {
        self.state.clear();
        self.view.render(&self.state);
    }

    /// Handles a keystroke. The submit accelerator runs the analyze flow on the
    /// current input and is suppressed; every other stroke passes through.
    pub async fn handle_key(&mut self, stroke: KeyStroke) -> KeyOutcome {
        if !stroke.is_submit_accelerator() {
            return KeyOutcome::Passthrough;
        }
        let input = self.state.input.clone();
        self.analyze(&input).await;
        KeyOutcome::Suppressed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ExampleCatalog;
    use crate::service::{Confidence, Label, ANALYSIS_FAILED_MESSAGE, EMPTY_INPUT_MESSAGE};
    use crate::session::keyboard::{Focus, Key};
    use crate::session::state::Panel;
    use reqwest::StatusCode;
    use std::cell::RefCell;
    use std::collections::VecDeque;

    #[derive(Default)]
    struct FakeApi {
        health: ServiceHealth,
        requests: RefCell<Vec<ClassificationRequest>>,
        responses: RefCell<VecDeque<Result<ClassificationResult, AnalyzeError>>>,
    }

    impl FakeApi {
        fn respond(self, outcome: Result<ClassificationResult, AnalyzeError>) -> Self {
            self.responses.borrow_mut().push_back(outcome);
            self
        }
    }

    impl DetectorApi for FakeApi {
        async fn health(&self) -> ServiceHealth {
            self.health
        }

        async fn predict(&self, request: &ClassificationRequest) -> Result<ClassificationResult, AnalyzeError> {
            self.requests.borrow_mut().push(request.clone());
            self.responses
                .borrow_mut()
                .pop_front()
                .unwrap_or_else(|| Err(AnalyzeError::Malformed("no scripted response".into())))
        }
    }

    #[derive(Default)]
    struct RecordingView {
        states: Vec<UiState>,
        health: Vec<HealthIndicator>,
    }

    impl View for RecordingView {
        fn render(&mut self, state: &UiState) {
            self.states.push(state.clone());
        }

        fn render_health(&mut self, indicator: HealthIndicator) {
            self.health.push(indicator);
        }
    }

    fn config() -> ClientConfig {
        ClientConfig::builder()
            .with_base_url("http://127.0.0.1:9")
            .unwrap()
            .with_examples(ExampleCatalog::new().with_example(1, "  an example text  "))
            .build()
            .unwrap()
    }

    fn human_result() -> ClassificationResult {
        ClassificationResult {
            label: Label::Human,
            ai_probability: 0.12,
            human_probability: 0.88,
            confidence: Confidence::High,
            certainty: None,
            text_length: None,
            word_count: None,
        }
    }

    fn service_error() -> AnalyzeError {
        AnalyzeError::Service {
            status: StatusCode::SERVICE_UNAVAILABLE,
            body: "upstream down".into(),
        }
    }

    fn controller(api: FakeApi) -> SessionController<FakeApi, RecordingView> {
        SessionController::new(config(), api, RecordingView::default())
    }

    #[tokio::test]
    async fn test_empty_input_makes_no_request() {
        let mut session = controller(FakeApi::default());
        for raw in ["", "   ", "\n\t "] {
            let phase = session.analyze(raw).await;
            assert_eq!(phase, AnalyzePhase::Failed);
            assert_eq!(session.state().error.as_deref(), Some(EMPTY_INPUT_MESSAGE));
        }
        assert!(session.api().requests.borrow().is_empty());
        assert!(session.state().trigger_enabled);
        assert!(!session.state().loading);
    }

    #[tokio::test]
    async fn test_successful_analysis_sends_trimmed_text_once() {
        let mut session = controller(FakeApi::default().respond(Ok(human_result())));
        let phase = session.analyze("  hey whats up lol \n").await;

        assert_eq!(phase, AnalyzePhase::Succeeded);
        let requests = session.api().requests.borrow();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].text, "hey whats up lol");

        let state = session.state();
        assert_eq!(state.result.as_ref(), Some(&human_result()));
        assert!(state.error.is_none());
        assert!(!state.loading);
        assert!(state.trigger_enabled);
    }

    #[tokio::test]
    async fn test_submitting_state_is_rendered_before_outcome() {
        let mut session = controller(FakeApi::default().respond(Ok(human_result())));
        session.analyze("some text").await;

        let states = &session.view().states;
        let submitting = &states[states.len() - 2];
        assert!(submitting.loading);
        assert!(!submitting.trigger_enabled);
        assert!(submitting.result.is_none());
        assert!(submitting.error.is_none());
        assert_eq!(submitting.panel(), Panel::Loading);
    }

    #[tokio::test]
    async fn test_failures_restore_interactive_state() {
        let outcomes = vec![service_error(), AnalyzeError::Malformed("bad json".into())];
        for err in outcomes {
            let mut session = controller(FakeApi::default().respond(Err(err)));
            let phase = session.analyze("some text").await;

            assert_eq!(phase, AnalyzePhase::Failed);
            let state = session.state();
            assert!(!state.loading);
            assert!(state.trigger_enabled);
            assert_eq!(state.error.as_deref(), Some(ANALYSIS_FAILED_MESSAGE));
            assert!(!ANALYSIS_FAILED_MESSAGE.contains("503"));
        }
    }

    #[tokio::test]
    async fn test_new_request_clears_previous_result() {
        let mut session = controller(
            FakeApi::default()
                .respond(Ok(human_result()))
                .respond(Err(service_error())),
        );
        session.analyze("first").await;
        assert!(session.state().result.is_some());

        session.analyze("second").await;
        assert!(session.state().result.is_none());
        assert_eq!(session.state().error.as_deref(), Some(ANALYSIS_FAILED_MESSAGE));
    }

    #[tokio::test]
    async fn test_last_outcome_wins() {
        let mut session = controller(FakeApi::default());
        let first = session.begin_analyze("first").unwrap();
        let second = session.begin_analyze("second").unwrap();
        assert_eq!(first.text, "first");
        assert_eq!(second.text, "second");

        // Second resolves before first
        session.finish_analyze(Err(service_error()));
        session.finish_analyze(Ok(human_result()));

        assert_eq!(session.state().phase, AnalyzePhase::Succeeded);
        assert!(session.state().error.is_none());
        assert!(session.state().result.is_some());
    }

    #[tokio::test]
    async fn test_submit_ignored_while_disabled() {
        let mut session = controller(FakeApi::default().respond(Ok(human_result())));
        session.set_input("text");
        session.begin_analyze("in flight").unwrap();

        assert_eq!(session.submit().await, None);
        assert!(session.api().requests.borrow().is_empty());

        session.finish_analyze(Err(service_error()));
        assert_eq!(session.submit().await, Some(AnalyzePhase::Succeeded));
        assert_eq!(session.api().requests.borrow()[0].text, "text");
    }

    #[tokio::test]
    async fn test_keyboard_accelerator() {
        let mut session = controller(FakeApi::default().respond(Ok(human_result())));
        session.set_input("hey whats up lol");

        let plain = KeyStroke::new(Key::Enter, Focus::Input);
        assert_eq!(session.handle_key(plain).await, KeyOutcome::Passthrough);
        assert!(session.api().requests.borrow().is_empty());

        let accelerator = KeyStroke::new(Key::Enter, Focus::Input).with_ctrl();
        assert_eq!(session.handle_key(accelerator).await, KeyOutcome::Suppressed);
        assert_eq!(session.api().requests.borrow().len(), 1);
        assert_eq!(session.state().phase, AnalyzePhase::Succeeded);
        // The suppressed newline never reached the input
        assert_eq!(session.state().input, "hey whats up lol");
    }

    #[tokio::test]
    async fn test_load_example_and_clear() {
        let mut session = controller(FakeApi::default().respond(Ok(human_result())));
        assert!(session.load_example(1));
        assert_eq!(session.state().input, "  an example text  ");
        assert!(session.api().requests.borrow().is_empty());
        assert_eq!(session.state().phase, AnalyzePhase::Idle);

        assert!(!session.load_example(42));
        assert_eq!(session.state().input, "  an example text  ");

        session.submit().await;
        assert!(session.state().result.is_some());

        session.clear();
        let state = session.state();
        assert!(state.input.is_empty());
        assert!(state.result.is_none());
        assert!(state.error.is_none());
        assert!(state.trigger_enabled);
    }

    #[tokio::test]
    async fn test_clear_keeps_loading_state() {
        let mut session = controller(FakeApi::default());
        session.begin_analyze("in flight").unwrap();
        session.clear();
        assert!(session.state().loading);
        assert!(!session.state().trigger_enabled);
        assert_eq!(session.state().phase, AnalyzePhase::Submitting);

        session.finish_analyze(Err(service_error()));
        session.clear();
        assert_eq!(session.state().phase, AnalyzePhase::Idle);
    }

    #[tokio::test]
    async fn test_probe_health_degraded() {
        let api = FakeApi {
            health: ServiceHealth { reachable: true, model_loaded: false },
            ..Default::default()
        };
        let mut session = controller(api);
        assert_eq!(session.health(), HealthIndicator::Checking);

        session.probe_health().await;
        assert_eq!(session.health(), HealthIndicator::Degraded);
        assert_eq!(
            session.view().health,
            vec![HealthIndicator::Checking, HealthIndicator::Degraded]
        );
    }

    #[test]
    fn test_offline_health_does_not_block_analysis() {
        let mut session = controller(FakeApi::default().respond(Ok(human_result())));
        tokio_test::block_on(async {
            session.probe_health().await;
            assert_eq!(session.health(), HealthIndicator::Offline);

            assert_eq!(session.analyze("still works").await, AnalyzePhase::Succeeded);
            assert_eq!(session.health(), HealthIndicator::Offline);
        });
    }
}
