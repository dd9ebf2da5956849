use crate::cli::args::Cli;
use crate::error::CliError;
use crate::models::{AnalysisResult, RiskLevel, NO_RECOMMENDATIONS};

pub struct ReportFormatter {
    use_colors: bool,
    verbose: bool,
}

impl ReportFormatter {
    pub fn new(cli: &Cli) -> Self {
        Self {
            use_colors: cli.should_use_color(),
            verbose: cli.is_verbose(),
        }
    }

    pub fn plain() -> Self {
        Self {
            use_colors: false,
            verbose: false,
        }
    }

    pub fn format_json(&self, result: &AnalysisResult) -> Result<String, CliError> {
        Ok(serde_json::to_string_pretty(result)?)
    }

    pub fn format_analysis_report(&self, result: &AnalysisResult) -> String {
        let mut output = String::new();

        output.push_str(&self.format_header(result));
        output.push('\n');

        output.push_str(&self.format_risk_level(&result.risk_level));
        output.push_str("\n\n");

        let recommendations = if result.has_specific_recommendations() {
            result
                .recommendations
                .iter()
                .map(|r| format!("  • {}", r))
                .collect::<Vec<_>>()
                .join("\n")
        } else {
            format!("  {}", NO_RECOMMENDATIONS)
        };
        output.push_str(&self.format_section("RECOMMENDATIONS", &recommendations));

        if self.verbose {
            output.push_str("\n\n");
            output.push_str(&self.format_section("FULL ANALYSIS", result.analysis.trim()));
        }

        output
    }

    fn format_header(&self, result: &AnalysisResult) -> String {
        let title = format!("RISKSCAN {} SECURITY ANALYSIS", result.content_type.as_str().to_uppercase());
        let rule = "═".repeat(title.chars().count() + 4);
        format!("{}\n  {}\n{}", rule, title, rule)
    }

    pub fn format_risk_level(&self, risk_level: &RiskLevel) -> String {
        let label = format!("{} RISK LEVEL: {}", risk_level.as_emoji(), risk_level.as_str());

        if !self.use_colors {
            return label;
        }

        let color = match risk_level {
            RiskLevel::Low => "\x1b[32m",
            RiskLevel::Medium => "\x1b[33m",
            RiskLevel::High => "\x1b[1;31m",
        };
        format!("{}{}\x1b[0m", color, label)
    }

    fn format_section(&self, title: &str, body: &str) -> String {
        format!("{}\n{}\n{}", title, "─".repeat(title.chars().count()), body)
    }

    pub fn format_error(&self, error: &CliError) -> String {
        format!("❌ ANALYSIS ERROR\n{}", error)
    }
}
