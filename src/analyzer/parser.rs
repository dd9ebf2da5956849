use serde::Deserialize;
use crate::error::ErrorKind;
use crate::models::{AnalysisResult, ContentType, RiskLevel};

#[derive(Debug, Deserialize)]
struct ChatCompletion {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: Option<ChoiceMessage>,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: ApiErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ApiErrorDetail {
    message: String,
}

pub struct ResponseParser;

impl ResponseParser {
    /// Pulls `choices[0].message.content` out of a successful response body.
    pub fn extract_content(body: &str) -> Result<String, ErrorKind> {
        let completion: ChatCompletion = serde_json::from_str(body).map_err(|e| {
            if e.is_data() {
                ErrorKind::MalformedResponse(format!("unexpected response shape: {}", e))
            } else {
                ErrorKind::MalformedResponse(format!("body is not valid JSON: {}", e))
            }
        })?;

        completion
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message)
            .and_then(|message| message.content)
            .filter(|content| !content.is_empty())
            .ok_or_else(|| {
                ErrorKind::MalformedResponse("missing choices[0].message.content".to_string())
            })
    }

    /// `"high risk"` wins over `"medium risk"`; anything else is low.
    ///
    /// Plain substring matching, so "this is not high risk" is still high.
    pub fn determine_risk_level(analysis: &str) -> RiskLevel {
        let lower = analysis.to_lowercase();

        if lower.contains("high risk") {
            RiskLevel::High
        } else if lower.contains("medium risk") {
            RiskLevel::Medium
        } else {
            RiskLevel::Low
        }
    }

    pub fn extract_recommendations(analysis: &str) -> Vec<String> {
        analysis
            .lines()
            .map(str::trim)
            .filter(|line| line.starts_with('-') || line.starts_with('•'))
            .map(|line| {
                line.strip_prefix('-')
                    .or_else(|| line.strip_prefix('•'))
                    .unwrap_or(line)
                    .trim()
                    .to_string()
            })
            .collect()
    }

    /// Message for a non-success status: the server's `error.message` when
    /// the body carries one, a generic status line otherwise.
    pub fn error_message(status: u16, body: &str) -> String {
        serde_json::from_str::<ApiErrorBody>(body)
            .ok()
            .map(|parsed| parsed.error.message)
            .filter(|message| !message.trim().is_empty())
            .unwrap_or_else(|| format!("API request failed with status {}", status))
    }

    pub fn parse(
        body: &str,
        content_type: ContentType,
        content: &str,
    ) -> Result<AnalysisResult, ErrorKind> {
        let analysis = Self::extract_content(body)?;
        let risk_level = Self::determine_risk_level(&analysis);
        let recommendations = Self::extract_recommendations(&analysis);

        Ok(AnalysisResult::new(content_type, content.to_string(), analysis)
            .with_risk_level(risk_level)
            .with_recommendations(recommendations))
    }
}
