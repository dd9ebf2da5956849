pub mod args;
pub mod reporter;

pub use args::Cli;
pub use reporter::ReportFormatter;

use tokio::io::AsyncReadExt;
use tracing::{debug, info};
use crate::analyzer::ContentAnalyzer;
use crate::error::CliError;
use crate::models::RiskLevel;

pub struct CliHandler {
    cli: Cli,
}

impl CliHandler {
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    pub async fn run(&self) -> Result<i32, CliError> {
        // Step 1: Resolve the key before touching the content source
        let api_key = self.cli.api_key()?;

        // Step 2: Read content
        let content = self.read_content().await?;
        if content.trim().is_empty() {
            return Err(CliError::NoInput);
        }
        debug!(bytes = content.len(), content_type = %self.cli.content_type, "read content");

        // Step 3: Analyze
        let config = self.cli.analyzer_config();
        info!("{}", config.describe());
        let analyzer = ContentAnalyzer::new(config);
        let result = analyzer
            .analyze_content(api_key, &content, self.cli.content_type)
            .await?;

        // Step 4: Report
        let formatter = ReportFormatter::new(&self.cli);
        if self.cli.json {
            println!("{}", formatter.format_json(&result)?);
        } else {
            println!("{}", formatter.format_analysis_report(&result));
        }

        if result.risk_level == RiskLevel::High {
            return Ok(3);
        }

        Ok(0)
    }

    async fn read_content(&self) -> Result<String, CliError> {
        if let Some(ref text) = self.cli.text {
            return Ok(text.clone());
        }

        if let Some(ref path) = self.cli.file {
            return Ok(tokio::fs::read_to_string(path).await?);
        }

        let mut buffer = String::new();
        tokio::io::stdin().read_to_string(&mut buffer).await?;
        Ok(buffer)
    }
}
