pub mod cli;

use crate::domain::ports::ConfigProvider;
use crate::utils::validation::{self, Validate};
use clap::Parser;

/// Fixed analysis endpoint the form posts to; overridable for testing.
pub const DEFAULT_WEBHOOK_URL: &str = "https://primary.app.n8n.cloud/webhook/analyze-resume";

#[derive(Debug, Clone, Parser)]
#[command(name = "resume-match")]
#[command(about = "Match a resume against a job description via a remote analysis webhook")]
pub struct CliConfig {
    /// Resume file to analyze (.pdf or .docx, at most 2 MB)
    #[arg(long)]
    pub resume: String,

    /// Job description to match the resume against
    #[arg(long)]
    pub job_description: String,

    #[arg(long, default_value = DEFAULT_WEBHOOK_URL)]
    pub webhook_url: String,

    #[arg(long, default_value = "./output")]
    pub output_path: String,

    /// Save the analysis result as a plain-text report
    #[arg(long)]
    pub save: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn webhook_url(&self) -> &str {
        &self.webhook_url
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> crate::utils::error::Result<()> {
        validation::validate_url("webhook_url", &self.webhook_url)?;
        validation::validate_path("resume", &self.resume)?;
        validation::validate_path("output_path", &self.output_path)?;
        validation::validate_non_empty_string("job_description", &self.job_description)?;
        Ok(())
    }
}
