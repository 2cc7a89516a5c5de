use log::{debug, info, warn};
use reqwest::Client;

use super::error::AnalyzeError;
use super::types::{ClassificationRequest, ClassificationResult, HealthResponse, ServiceHealth};
use crate::config::ClientConfig;

/// The two calls the session controller makes against the detection service.
///
/// Implementations run on a single-threaded event loop, so the futures are not
/// required to be `Send`.
#[allow(async_fn_in_trait)]
pub trait DetectorApi {
    /// One-shot readiness probe. Never fails: an unreachable service is reported
    /// as `ServiceHealth::unreachable()`.
    async fn health(&self) -> ServiceHealth;

    /// Submits text for classification.
    async fn predict(&self, request: &ClassificationRequest) -> Result<ClassificationResult, AnalyzeError>;
}

/// `DetectorApi` backed by HTTP calls to the configured service.
#[derive(Debug, Clone)]
pub struct HttpDetectorApi {
    client: Client,
    health_url: String,
    predict_url: String,
}

impl HttpDetectorApi {
    pub fn new(config: &ClientConfig) -> Self {
        Self::with_client(Client::new(), config)
    }

    /// Uses a caller-provided reqwest client (proxies, TLS roots, timeouts)
    pub fn with_client(client: Client, config: &ClientConfig) -> Self {
        Self {
            client,
            health_url: config.health_url(),
            predict_url: config.predict_url(),
        }
    }
}

impl DetectorApi for HttpDetectorApi {
    async fn health(&self) -> ServiceHealth {
        debug!("Probing service health at {}", self.health_url);
        let response = match self.client.get(&self.health_url).send().await {
            Ok(response) => response,
            Err(e) => {
                warn!("Health check failed: {}", e);
                return ServiceHealth::unreachable();
            }
        };

        let status = response.status();
        if !status.is_success() {
            warn!("Health check returned status {}", status);
            return ServiceHealth::unreachable();
        }

        match response.json::<HealthResponse>().await {
            Ok(body) => {
                let model_loaded = body.model_loaded();
                info!(
                    "Service reachable (status: {}, model loaded: {})",
                    body.status.as_deref().unwrap_or("unknown"),
                    model_loaded
                );
                ServiceHealth { reachable: true, model_loaded }
            }
            Err(e) => {
                warn!("Health check returned an unreadable body: {}", e);
                ServiceHealth::unreachable()
            }
        }
    }

    async fn predict(&self, request: &ClassificationRequest) -> Result<ClassificationResult, AnalyzeError> {
        debug!("Submitting {} characters to {}", request.text.len(), self.predict_url);
        let response = self
            .client
            .post(&self.predict_url)
            .json(request)
            .send()
            .await
            .map_err(AnalyzeError::from_reqwest)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AnalyzeError::Service { status, body });
        }

        response
            .json::<ClassificationResult>()
            .await
            .map_err(AnalyzeError::from_reqwest)
    }
}
