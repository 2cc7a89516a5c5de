use aidetect::{ClientConfig, HealthIndicator, HttpDetectorApi, SessionController, UiState, View};
use env_logger::{Builder, Env};

// Initialize test logger
pub fn init() {
    let _ = Builder::from_env(Env::default().default_filter_or("warn"))
        .is_test(true)
        .try_init();
}

#[derive(Default)]
pub struct RecordingView {
    pub states: Vec<UiState>,
    pub health: Vec<HealthIndicator>,
}

impl View for RecordingView {
    fn render(&mut self, state: &UiState) {
        self.states.push(state.clone());
    }

    fn render_health(&mut self, indicator: HealthIndicator) {
        self.health.push(indicator);
    }
}

pub fn session_for(base_url: &str) -> SessionController<HttpDetectorApi, RecordingView> {
    let config = ClientConfig::builder()
        .with_base_url(base_url)
        .expect("valid base url")
        .build()
        .expect("valid config");
    let api = HttpDetectorApi::new(&config);
    SessionController::new(config, api, RecordingView::default())
}
