use crate::analyzer::retry::RetryPolicy;
use crate::analyzer::transport::DEFAULT_ENDPOINT;
use std::time::Duration;

pub const DEFAULT_MODEL: &str = "mixtral-8x7b-32768";
pub const DEFAULT_TEMPERATURE: f32 = 0.7;
pub const DEFAULT_MAX_TOKENS: u32 = 1024;

#[derive(Debug, Clone, PartialEq)]
pub struct AnalyzerConfig {
    pub endpoint: String,
    pub model_name: String,
    pub temperature: f32,
    pub max_tokens: u32,
    pub retry: RetryPolicy,
    /// Deadline for the whole send-and-retry stage. `None` waits forever.
    pub timeout: Option<Duration>,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            model_name: DEFAULT_MODEL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            max_tokens: DEFAULT_MAX_TOKENS,
            retry: RetryPolicy::default(),
            timeout: None,
        }
    }
}

impl AnalyzerConfig {
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn with_model(mut self, model_name: impl Into<String>) -> Self {
        self.model_name = model_name.into();
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn describe(&self) -> String {
        format!(
            "Model: {}, Endpoint: {}, Max attempts: {}, Timeout: {}",
            self.model_name,
            self.endpoint,
            self.retry.max_attempts,
            self.timeout
                .map(|t| format!("{}s", t.as_secs()))
                .unwrap_or_else(|| "none".to_string())
        )
    }
}
