use crate::analyzer::config::AnalyzerConfig;
use crate::models::{ChatMessage, ChatRequest, ContentType};

pub const SYSTEM_PROMPT: &str = "You are a cybersecurity expert specializing in analyzing images and emails for security risks. Provide clear, non-technical explanations and practical recommendations.";

pub struct PromptTemplate;

impl PromptTemplate {
    pub fn build_user_prompt(content_type: ContentType, content: &str) -> String {
        match content_type {
            ContentType::Image => format!(
                "Analyze this image content for security implications: {}",
                content
            ),
            ContentType::Email => format!(
                "Analyze this email for potential security risks, phishing attempts, or spam: {}",
                content
            ),
        }
    }

    pub fn build_chat_request(
        content_type: ContentType,
        content: &str,
        config: &AnalyzerConfig,
    ) -> ChatRequest {
        ChatRequest {
            messages: vec![
                ChatMessage::system(SYSTEM_PROMPT),
                ChatMessage::user(Self::build_user_prompt(content_type, content)),
            ],
            model: config.model_name.clone(),
            temperature: config.temperature,
            max_tokens: config.max_tokens,
        }
    }
}
