use serde::{Deserialize, Serialize};
use crate::error::ErrorKind;

pub const NO_RECOMMENDATIONS: &str = "No specific recommendations provided";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    Image,
    Email,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisRequest {
    pub content_type: ContentType,
    pub content: String,
    pub api_key: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    #[serde(rename = "type")]
    pub content_type: ContentType,
    pub content: String,
    pub analysis: String,
    pub risk_level: RiskLevel,
    pub recommendations: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl ContentType {
    pub fn from_str(s: &str) -> Result<Self, ErrorKind> {
        match s.trim().to_lowercase().as_str() {
            "image" => Ok(ContentType::Image),
            "email" => Ok(ContentType::Email),
            other => Err(ErrorKind::InvalidInput(format!(
                "Unsupported content type '{}'. Use 'image' or 'email'",
                other
            ))),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::Image => "image",
            ContentType::Email => "email",
        }
    }
}

impl std::fmt::Display for ContentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl AnalysisRequest {
    pub fn new(
        content_type: ContentType,
        content: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Self {
        Self {
            content_type,
            content: content.into(),
            api_key: api_key.into(),
        }
    }

    /// Rejects a missing key or missing content before anything is sent.
    pub fn validate(&self) -> Result<(), ErrorKind> {
        if self.api_key.is_empty() {
            return Err(ErrorKind::missing_api_key());
        }
        if self.content.is_empty() {
            return Err(ErrorKind::missing_content());
        }
        Ok(())
    }
}

impl AnalysisResult {
    pub fn new(content_type: ContentType, content: String, analysis: String) -> Self {
        Self {
            content_type,
            content,
            analysis,
            risk_level: RiskLevel::Low,
            recommendations: vec![NO_RECOMMENDATIONS.to_string()],
        }
    }

    pub fn with_risk_level(mut self, risk_level: RiskLevel) -> Self {
        self.risk_level = risk_level;
        self
    }

    /// An empty list keeps the placeholder entry.
    pub fn with_recommendations(mut self, recommendations: Vec<String>) -> Self {
        if !recommendations.is_empty() {
            self.recommendations = recommendations;
        }
        self
    }

    pub fn has_specific_recommendations(&self) -> bool {
        !(self.recommendations.len() == 1 && self.recommendations[0] == NO_RECOMMENDATIONS)
    }
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "LOW",
            RiskLevel::Medium => "MEDIUM",
            RiskLevel::High => "HIGH",
        }
    }

    pub fn as_emoji(&self) -> &'static str {
        match self {
            RiskLevel::Low => "✅",
            RiskLevel::Medium => "🔶",
            RiskLevel::High => "🚨",
        }
    }
}
