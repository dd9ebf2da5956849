use thiserror::Error;

/// What went wrong during a single analysis.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    #[error("{0}")]
    InvalidInput(String),

    #[error("{message}")]
    Transport { status: Option<u16>, message: String },

    #[error("Max retries reached after {attempts} attempts")]
    RetryExhausted { attempts: u32 },

    #[error("Invalid response format from API: {0}")]
    MalformedResponse(String),

    #[error("Analysis timed out after {timeout_ms} ms")]
    Timeout { timeout_ms: u64 },
}

impl ErrorKind {
    pub fn missing_api_key() -> Self {
        ErrorKind::InvalidInput("API key is required".to_string())
    }

    pub fn missing_content() -> Self {
        ErrorKind::InvalidInput("Content is required for analysis".to_string())
    }

    /// HTTP status carried by a transport failure, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            ErrorKind::Transport { status, .. } => *status,
            _ => None,
        }
    }
}

/// The single failure surfaced by `analyze_content`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Failed to analyze content: {kind}")]
pub struct AnalysisError {
    #[from]
    kind: ErrorKind,
}

impl AnalysisError {
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }
}

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Invalid command line arguments: {0}")]
    InvalidArguments(String),

    /// `--help` or `--version` output, not a failure.
    #[error("{0}")]
    Informational(clap::Error),

    #[error("No input provided - empty content")]
    NoInput,

    #[error(transparent)]
    Analysis(#[from] AnalysisError),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}
