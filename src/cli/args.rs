use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;
use crate::analyzer::config::{AnalyzerConfig, DEFAULT_MODEL};
use crate::analyzer::retry::{RetryPolicy, DEFAULT_MAX_ATTEMPTS};
use crate::analyzer::transport::DEFAULT_ENDPOINT;
use crate::error::CliError;
use crate::models::ContentType;

#[derive(Parser, Debug)]
#[command(name = "riskscan")]
#[command(about = "Security risk analysis of image descriptions and emails using an LLM")]
#[command(long_about = None)]
#[command(version)]
pub struct Cli {
    /// Kind of content being analyzed (image, email)
    #[arg(short = 'T', long = "type", value_parser = parse_content_type)]
    pub content_type: ContentType,

    /// Read content from this file instead of stdin
    #[arg(short = 'f', long, conflicts_with = "text")]
    pub file: Option<PathBuf>,

    /// Pass content directly on the command line
    #[arg(long)]
    pub text: Option<String>,

    /// API key for the chat-completion service
    #[arg(long, env = "GROQ_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Chat-completion endpoint URL
    #[arg(long, env = "RISKSCAN_ENDPOINT", default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,

    /// LLM model to use for analysis
    #[arg(short = 'm', long, default_value = DEFAULT_MODEL)]
    pub model: String,

    /// Overall deadline for the analysis in seconds (1-300)
    #[arg(short = 't', long, value_parser = validate_timeout)]
    pub timeout: Option<u64>,

    /// Maximum attempts when the service is unavailable (1-10)
    #[arg(long, default_value_t = DEFAULT_MAX_ATTEMPTS, value_parser = clap::value_parser!(u32).range(1..=10))]
    pub max_attempts: u32,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,

    /// Enable verbose output to stderr
    #[arg(short = 'v', long)]
    pub verbose: bool,

    /// Enable debug output including the raw model reply
    #[arg(short = 'd', long)]
    pub debug: bool,
}

impl Cli {
    pub fn parse_args() -> Result<Self, CliError> {
        Self::parse_args_from(std::env::args_os())
    }

    /// Help and version requests come back as `CliError::Informational`
    /// so the caller can print them and exit cleanly.
    pub fn parse_args_from<I, T>(args: I) -> Result<Self, CliError>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::try_parse_from(args).map_err(|e| match e.kind() {
            clap::error::ErrorKind::DisplayHelp | clap::error::ErrorKind::DisplayVersion => {
                CliError::Informational(e)
            }
            _ => CliError::InvalidArguments(e.to_string()),
        })
    }

    pub fn api_key(&self) -> Result<&str, CliError> {
        self.api_key
            .as_deref()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| {
                CliError::ConfigError(
                    "API key not found. Pass --api-key or set GROQ_API_KEY".to_string(),
                )
            })
    }

    pub fn analyzer_config(&self) -> AnalyzerConfig {
        let config = AnalyzerConfig::default()
            .with_endpoint(self.endpoint.clone())
            .with_model(self.model.clone())
            .with_retry(RetryPolicy::default().with_max_attempts(self.max_attempts));

        match self.timeout {
            Some(seconds) => config.with_timeout(Duration::from_secs(seconds)),
            None => config,
        }
    }

    pub fn is_verbose(&self) -> bool {
        self.verbose || self.debug
    }

    pub fn is_debug(&self) -> bool {
        self.debug
    }

    pub fn should_use_color(&self) -> bool {
        std::env::var("NO_COLOR").is_err()
    }
}

fn parse_content_type(s: &str) -> Result<ContentType, String> {
    ContentType::from_str(s).map_err(|e| e.to_string())
}

fn validate_timeout(s: &str) -> Result<u64, String> {
    let timeout: u64 = s.parse()
        .map_err(|_| "Timeout must be a number")?;

    if (1..=300).contains(&timeout) {
        Ok(timeout)
    } else {
        Err("Timeout must be between 1 and 300 seconds".to_string())
    }
}
