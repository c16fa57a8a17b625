use thiserror::Error;

#[derive(Error, Debug)]
pub enum MatchError {
    #[error("unsupported file type: {media_type}")]
    UnsupportedFileType { media_type: String },

    #[error("file too large: {size} bytes (limit {limit})")]
    FileTooLarge { size: u64, limit: u64 },

    #[error("no resume file selected")]
    MissingFile,

    #[error("job description is blank")]
    BlankJobDescription,

    #[error("Analysis request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("Analysis service returned HTTP {status}")]
    AnalysisRejected { status: u16 },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, MatchError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Bad input caught before any network traffic.
    Validation,
    /// File read, transport or remote-status failure during a submission.
    Submission,
    /// Startup configuration problem.
    Config,
}

impl MatchError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            MatchError::UnsupportedFileType { .. }
            | MatchError::FileTooLarge { .. }
            | MatchError::MissingFile
            | MatchError::BlankJobDescription => ErrorCategory::Validation,
            MatchError::ApiError(_)
            | MatchError::AnalysisRejected { .. }
            | MatchError::IoError(_)
            | MatchError::SerializationError(_) => ErrorCategory::Submission,
            MatchError::InvalidConfigValueError { .. } => ErrorCategory::Config,
        }
    }

    /// Message shown inline on the form, matching what the original screen
    /// displayed for each failure.
    pub fn user_friendly_message(&self) -> String {
        match self {
            MatchError::UnsupportedFileType { .. } => {
                "Unsupported file type. Please upload a PDF or DOCX file.".to_string()
            }
            MatchError::FileTooLarge { .. } => {
                "File too large. The maximum size is 2 MB.".to_string()
            }
            MatchError::MissingFile => "Please select a resume file.".to_string(),
            MatchError::BlankJobDescription => "Please paste a job description.".to_string(),
            MatchError::ApiError(_)
            | MatchError::AnalysisRejected { .. }
            | MatchError::IoError(_)
            | MatchError::SerializationError(_) => {
                "Failed to analyze resume. Please try again.".to_string()
            }
            other => other.to_string(),
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self.category() {
            ErrorCategory::Validation => 2,
            ErrorCategory::Submission => 1,
            ErrorCategory::Config => 3,
        }
    }
}
