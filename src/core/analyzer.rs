use crate::domain::model::{AnalysisResult, DEFAULT_FEEDBACK, DEFAULT_MATCH_SCORE};
use crate::domain::ports::Analyzer;
use crate::utils::error::{MatchError, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;

/// Accepted field names per logical response field, in lookup order. The
/// service has answered in both camelCase and snake_case; neither convention
/// is treated as canonical.
const MATCH_SCORE_ALIASES: &[&str] = &["matchScore", "match_score"];
const MISSING_SKILLS_ALIASES: &[&str] = &["missingSkills", "missing_skills"];
const FEEDBACK_ALIASES: &[&str] = &["feedback", "analysis"];

pub struct WebhookAnalyzer {
    client: Client,
    endpoint: String,
}

impl WebhookAnalyzer {
    pub fn new(endpoint: String) -> Self {
        Self {
            client: Client::new(),
            endpoint,
        }
    }
}

#[async_trait]
impl Analyzer for WebhookAnalyzer {
    /// Single attempt, no retry, no timeout. Any transport error or non-2xx
    /// status is terminal for this submission.
    async fn analyze(
        &self,
        resume_base64: &str,
        job_description: &str,
    ) -> Result<AnalysisResult> {
        let payload = serde_json::json!({
            "resume": resume_base64,
            "jobDescription": job_description,
        });

        tracing::debug!("Posting analysis request to: {}", self.endpoint);
        let response = self
            .client
            .post(&self.endpoint)
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("Analysis response status: {}", status);
        if !status.is_success() {
            return Err(MatchError::AnalysisRejected {
                status: status.as_u16(),
            });
        }

        let body: Value = response.json().await?;
        Ok(normalize_response(&body))
    }
}

fn first_present<'a>(body: &'a Value, aliases: &[&str]) -> Option<&'a Value> {
    aliases.iter().find_map(|key| body.get(*key))
}

/// Maps a raw webhook response onto the normalized result, walking each
/// field's alias list and falling back to the documented defaults.
pub fn normalize_response(body: &Value) -> AnalysisResult {
    let match_score = first_present(body, MATCH_SCORE_ALIASES)
        .map(|v| match v {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        })
        .unwrap_or_else(|| DEFAULT_MATCH_SCORE.to_string());

    let missing_skills = first_present(body, MISSING_SKILLS_ALIASES)
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default();

    let feedback = first_present(body, FEEDBACK_ALIASES)
        .and_then(Value::as_str)
        .unwrap_or(DEFAULT_FEEDBACK)
        .to_string();

    AnalysisResult {
        match_score,
        missing_skills,
        feedback,
    }
}
