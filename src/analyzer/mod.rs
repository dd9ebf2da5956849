// Analyzer module - prompt building, transport, retry and response parsing

pub mod config;
pub mod orchestrator;
pub mod parser;
pub mod prompts;
pub mod retry;
pub mod transport;

pub use config::AnalyzerConfig;
pub use orchestrator::{analyze_content, ContentAnalyzer};
pub use parser::ResponseParser;
pub use prompts::PromptTemplate;
pub use retry::{Backoff, RetryPolicy};
pub use transport::{HttpTransport, Transport};
