use crate::analyzer::config::AnalyzerConfig;
use crate::analyzer::parser::ResponseParser;
use crate::analyzer::prompts::PromptTemplate;
use crate::analyzer::transport::{HttpTransport, Transport};
use crate::error::{AnalysisError, ErrorKind};
use crate::models::{AnalysisRequest, AnalysisResult, ChatRequest, ContentType, RawResponse};
use std::sync::Arc;
use tokio::time::{sleep, timeout};
use tracing::{debug, info, warn};

/// Runs the build → send → parse pipeline for one piece of content.
#[derive(Clone)]
pub struct ContentAnalyzer {
    config: AnalyzerConfig,
    transport: Arc<dyn Transport>,
}

impl ContentAnalyzer {
    pub fn new(config: AnalyzerConfig) -> Self {
        let transport = HttpTransport::new(&config.endpoint);
        Self::with_transport(config, Arc::new(transport))
    }

    pub fn with_transport(config: AnalyzerConfig, transport: Arc<dyn Transport>) -> Self {
        Self { config, transport }
    }

    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    pub async fn analyze_content(
        &self,
        api_key: &str,
        content: &str,
        content_type: ContentType,
    ) -> Result<AnalysisResult, AnalysisError> {
        let request = AnalysisRequest::new(content_type, content, api_key);
        self.analyze(&request).await.map_err(AnalysisError::from)
    }

    pub async fn analyze(&self, request: &AnalysisRequest) -> Result<AnalysisResult, ErrorKind> {
        request.validate()?;

        let chat_request =
            PromptTemplate::build_chat_request(request.content_type, &request.content, &self.config);

        let response = match self.config.timeout {
            Some(deadline) => timeout(deadline, self.send_with_retry(&request.api_key, &chat_request))
                .await
                .map_err(|_| ErrorKind::Timeout {
                    timeout_ms: deadline.as_millis() as u64,
                })??,
            None => self.send_with_retry(&request.api_key, &chat_request).await?,
        };

        let result = ResponseParser::parse(&response.body, request.content_type, &request.content)?;

        debug!(analysis = %result.analysis, "model analysis");
        info!(
            content_type = %request.content_type,
            risk_level = result.risk_level.as_str(),
            recommendations = result.recommendations.len(),
            "analysis complete"
        );

        Ok(result)
    }

    async fn send_with_retry(
        &self,
        api_key: &str,
        request: &ChatRequest,
    ) -> Result<RawResponse, ErrorKind> {
        let policy = &self.config.retry;
        let max_attempts = policy.max_attempts.max(1);
        let mut attempt = 0;

        while attempt < max_attempts {
            attempt += 1;

            let response = self.transport.send(api_key, request).await?;
            if response.is_success() {
                return Ok(response);
            }

            if !policy.is_retryable(response.status) {
                return Err(ErrorKind::Transport {
                    status: Some(response.status),
                    message: ResponseParser::error_message(response.status, &response.body),
                });
            }

            if policy.has_attempts_left(attempt) {
                let delay = policy.delay(attempt);
                warn!(
                    status = response.status,
                    attempt,
                    max_attempts,
                    delay_ms = delay.as_millis() as u64,
                    "transient failure, retrying"
                );
                sleep(delay).await;
            }
        }

        Err(ErrorKind::RetryExhausted { attempts: attempt })
    }
}

impl Default for ContentAnalyzer {
    fn default() -> Self {
        Self::new(AnalyzerConfig::default())
    }
}

/// Analyzes `content` against the default Groq endpoint.
pub async fn analyze_content(
    api_key: &str,
    content: &str,
    content_type: ContentType,
) -> Result<AnalysisResult, AnalysisError> {
    ContentAnalyzer::default()
        .analyze_content(api_key, content, content_type)
        .await
}
