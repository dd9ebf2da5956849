pub mod analysis;
pub mod chat;

pub use analysis::{AnalysisRequest, AnalysisResult, ContentType, RiskLevel, NO_RECOMMENDATIONS};
pub use chat::{ChatMessage, ChatRequest, RawResponse};
