use crate::core::validator;
use crate::domain::model::{AnalysisResult, FileCandidate, SelectedFile};
use crate::utils::error::{MatchError, Result};

/// Observable state of the form, derived from the session fields. The error
/// message is an overlay, not a state of its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormState {
    Idle,
    FileSelected,
    Submitting,
    Result,
}

/// The single screen's state: file, job description, latest result and the
/// one active error message. All transitions go through the methods below so
/// they can be unit-tested without any rendering environment.
#[derive(Debug, Default)]
pub struct FormSession {
    file: Option<SelectedFile>,
    job_description: String,
    result: Option<AnalysisResult>,
    error: Option<String>,
    submitting: bool,
}

impl FormSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> FormState {
        if self.submitting {
            FormState::Submitting
        } else if self.result.is_some() {
            FormState::Result
        } else if self.file.is_some() {
            FormState::FileSelected
        } else {
            FormState::Idle
        }
    }

    pub fn file(&self) -> Option<&SelectedFile> {
        self.file.as_ref()
    }

    pub fn job_description(&self) -> &str {
        &self.job_description
    }

    pub fn result(&self) -> Option<&AnalysisResult> {
        self.result.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Runs the picked file through validation. An accepted file replaces any
    /// previous selection; a rejected one leaves the selection untouched and
    /// sets the error overlay. Ignored while a submission is in flight.
    pub fn select_file(&mut self, candidate: FileCandidate) -> bool {
        if self.submitting {
            return false;
        }
        self.error = None;
        match validator::validate(candidate) {
            Ok(file) => {
                tracing::debug!("Selected file: {} ({} bytes)", file.name(), file.size());
                self.file = Some(file);
                true
            }
            Err(e) => {
                tracing::debug!("File rejected: {}", e);
                self.error = Some(e.user_friendly_message());
                false
            }
        }
    }

    pub fn set_job_description(&mut self, text: impl Into<String>) {
        if self.submitting {
            return;
        }
        self.job_description = text.into();
    }

    /// Guarded submit transition. Returns the file to encode when the
    /// submission may proceed. While a prior submission is in flight this is
    /// a no-op that leaves every field untouched; with a missing file or
    /// blank job description it sets the error overlay and stays put.
    pub fn begin_submission(&mut self) -> Option<SelectedFile> {
        if self.submitting {
            return None;
        }
        self.error = None;
        let Some(file) = self.file.clone() else {
            self.error = Some(MatchError::MissingFile.user_friendly_message());
            return None;
        };
        if self.job_description.trim().is_empty() {
            self.error = Some(MatchError::BlankJobDescription.user_friendly_message());
            return None;
        }
        self.submitting = true;
        Some(file)
    }

    /// Lands the in-flight submission: success moves to the result view,
    /// failure returns to the populated form with the error overlay set.
    pub fn complete_submission(&mut self, outcome: Result<AnalysisResult>) {
        self.submitting = false;
        match outcome {
            Ok(result) => {
                self.result = Some(result);
                self.error = None;
            }
            Err(e) => {
                self.error = Some(e.user_friendly_message());
            }
        }
    }

    /// Full wipe back to the initial state.
    pub fn reset(&mut self) {
        *self = FormSession::default();
    }
}
