pub mod analyzer;
pub mod cli;
pub mod error;
pub mod models;

pub use error::{AnalysisError, CliError, ErrorKind};

// Re-export commonly used types
pub use models::{AnalysisRequest, AnalysisResult, ContentType, RiskLevel};

pub use analyzer::{analyze_content, AnalyzerConfig, ContentAnalyzer, RetryPolicy, Transport};
