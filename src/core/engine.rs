use crate::core::encoder;
use crate::core::session::FormSession;
use crate::domain::model::{AnalysisResult, SelectedFile};
use crate::domain::ports::{Analyzer, Storage};
use crate::utils::error::Result;
use crate::utils::render;

pub const REPORT_FILE: &str = "resume_match_report.txt";

/// Drives one submission through the fixed pipeline: validated file out of
/// the session, encode, webhook call, result back into the session. Encoding
/// always completes before the request is issued; there is no parallelism
/// and no cancellation.
pub struct SubmissionEngine<S: Storage, A: Analyzer> {
    storage: S,
    analyzer: A,
}

impl<S: Storage, A: Analyzer> SubmissionEngine<S, A> {
    pub fn new(storage: S, analyzer: A) -> Self {
        Self { storage, analyzer }
    }

    /// Runs one submission attempt. Returns `true` when the session reached
    /// the result view. A call while a prior attempt is in flight, or with
    /// invalid input, changes nothing beyond the session's error overlay and
    /// issues no network traffic.
    pub async fn submit(&self, session: &mut FormSession) -> bool {
        let Some(file) = session.begin_submission() else {
            return false;
        };

        tracing::info!("Analyzing resume: {} ({} bytes)", file.name(), file.size());
        let job_description = session.job_description().trim().to_string();
        let outcome = self.run_attempt(&file, &job_description).await;
        let succeeded = outcome.is_ok();
        session.complete_submission(outcome);
        succeeded
    }

    async fn run_attempt(
        &self,
        file: &SelectedFile,
        job_description: &str,
    ) -> Result<AnalysisResult> {
        tracing::debug!("Encoding resume file...");
        let resume_base64 = encoder::encode(&self.storage, file).await?;

        tracing::debug!("Sending analysis request...");
        self.analyzer.analyze(&resume_base64, job_description).await
    }

    /// The "save results" action: writes a plain-text report of the result
    /// to storage and returns the file name.
    pub async fn save_report(&self, result: &AnalysisResult) -> Result<String> {
        let report = render::report(result);
        self.storage.write_file(REPORT_FILE, report.as_bytes()).await?;
        Ok(REPORT_FILE.to_string())
    }
}
