use std::collections::BTreeMap;

use reqwest::Url;

/// Base URL used when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },
    #[error("Invalid endpoint path '{0}': must start with '/'")]
    InvalidEndpoint(String),
}

/// Paths of the two endpoints the client consumes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    pub health: String,
    pub predict: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            health: "/health".to_string(),
            predict: "/predict".to_string(),
        }
    }
}

/// Fixed catalog of canned example texts keyed by id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExampleCatalog {
    entries: BTreeMap<u32, String>,
}

impl ExampleCatalog {
    pub fn new() -> Self {
        Self { entries: BTreeMap::new() }
    }

    pub fn with_example(mut self, id: u32, text: impl Into<String>) -> Self {
        self.entries.insert(id, text.into());
        self
    }

    /// Looks up an example. Unknown ids yield `None`.
    pub fn get(&self, id: u32) -> Option<&str> {
        self.entries.get(&id).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (u32, &str)> {
        self.entries.iter().map(|(id, text)| (*id, text.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for ExampleCatalog {
    fn default() -> Self {
        Self::new()
            .with_example(
                1,
                "Artificial intelligence has fundamentally transformed numerous industries by \
                 enabling unprecedented levels of automation and efficiency. Furthermore, it is \
                 important to note that these advancements present both significant opportunities \
                 and notable challenges that organizations must carefully consider.",
            )
            .with_example(2, "hey whats up lol, just got back from the store and they were out of milk again smh")
            .with_example(
                3,
                "In conclusion, leveraging cutting-edge technologies can help businesses optimize \
                 their workflows, enhance productivity, and drive sustainable growth in an \
                 increasingly competitive landscape.",
            )
            .with_example(
                4,
                "ok so my cat knocked my coffee off the desk AGAIN this morning. third time this \
                 week. I'm starting to think she does it on purpose",
            )
    }
}

/// Immutable client configuration, constructed once and handed to the controller.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    base_url: String,
    endpoints: Endpoints,
    examples: ExampleCatalog,
}

impl ClientConfig {
    /// Creates a new ClientConfigBuilder for fluent construction
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::new()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    pub fn examples(&self) -> &ExampleCatalog {
        &self.examples
    }

    pub fn health_url(&self) -> String {
        self.join(&self.endpoints.health)
    }

    pub fn predict_url(&self) -> String {
        self.join(&self.endpoints.predict)
    }

    fn join(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }
}

/// A builder for constructing a ClientConfig with a fluent interface.
#[derive(Debug, Default)]
pub struct ClientConfigBuilder {
    base_url: Option<String>,
    endpoints: Endpoints,
    examples: Option<ExampleCatalog>,
}

impl ClientConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the service base URL. Only `http` and `https` URLs are accepted.
    ///
    /// # Example
    /// ```
    /// use aidetect::ClientConfig;
    ///
    /// let config = ClientConfig::builder()
    ///     .with_base_url("https://detector.example.com")?
    ///     .build()?;
    /// assert_eq!(config.predict_url(), "https://detector.example.com/predict");
    /// # Ok::<(), aidetect::ConfigError>(())
    /// ```
    pub fn with_base_url(mut self, url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        Self::validate_base_url(&url)?;
        self.base_url = Some(url);
        Ok(self)
    }

    /// Overrides the endpoint paths
    pub fn with_endpoints(mut self, endpoints: Endpoints) -> Result<Self, ConfigError> {
        for path in [&endpoints.health, &endpoints.predict] {
            if !path.starts_with('/') {
                return Err(ConfigError::InvalidEndpoint(path.clone()));
            }
        }
        self.endpoints = endpoints;
        Ok(self)
    }

    /// Replaces the built-in example catalog
    pub fn with_examples(mut self, examples: ExampleCatalog) -> Self {
        self.examples = Some(examples);
        self
    }

    pub fn build(self) -> Result<ClientConfig, ConfigError> {
        let base_url = self.base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        log::debug!("Using detection service at {}", base_url);

        Ok(ClientConfig {
            base_url,
            endpoints: self.endpoints,
            examples: self.examples.unwrap_or_default(),
        })
    }

    fn validate_base_url(url: &str) -> Result<(), ConfigError> {
        let parsed = Url::parse(url).map_err(|e| ConfigError::InvalidBaseUrl {
            url: url.to_string(),
            reason: e.to_string(),
        })?;
        match parsed.scheme() {
            "http" | "https" => Ok(()),
            other => Err(ConfigError::InvalidBaseUrl {
                url: url.to_string(),
                reason: format!("unsupported scheme '{}'", other),
            }),
        }
    }
}
