use serde::{Deserialize, Serialize};

/// Largest resume file the form accepts: 2 MiB, checked at selection time.
pub const MAX_FILE_SIZE: u64 = 2 * 1024 * 1024;

pub const DEFAULT_MATCH_SCORE: &str = "0%";
pub const DEFAULT_FEEDBACK: &str = "Analysis completed.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MediaType {
    Pdf,
    Docx,
}

impl MediaType {
    pub fn from_mime(mime: &str) -> Option<Self> {
        match mime {
            "application/pdf" => Some(MediaType::Pdf),
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document" => {
                Some(MediaType::Docx)
            }
            _ => None,
        }
    }

    /// Extension-based guess used by the picker, mirroring the `.pdf`/`.docx`
    /// filter on the original file input.
    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension.to_ascii_lowercase().as_str() {
            "pdf" => Some(MediaType::Pdf),
            "docx" => Some(MediaType::Docx),
            _ => None,
        }
    }

    pub fn as_mime(self) -> &'static str {
        match self {
            MediaType::Pdf => "application/pdf",
            MediaType::Docx => {
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
            }
        }
    }
}

/// A file as handed over by the picker: declared media type only, contents
/// never inspected.
#[derive(Debug, Clone)]
pub struct FileCandidate {
    pub name: String,
    pub media_type: String,
    pub size: u64,
    pub path: String,
}

/// A candidate that passed validation. Constructed only by the validator, so
/// a stored file always has an allowed media type and size within the cap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    name: String,
    media_type: MediaType,
    size: u64,
    path: String,
}

impl SelectedFile {
    pub(crate) fn new(name: String, media_type: MediaType, size: u64, path: String) -> Self {
        Self {
            name,
            media_type,
            size,
            path,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn media_type(&self) -> MediaType {
        self.media_type
    }

    pub fn size(&self) -> u64 {
        self.size
    }

    pub fn path(&self) -> &str {
        &self.path
    }
}

/// Normalized webhook response. Present on the session if and only if the
/// last submission succeeded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub match_score: String,
    pub missing_skills: Vec<String>,
    pub feedback: String,
}

impl Default for AnalysisResult {
    fn default() -> Self {
        Self {
            match_score: DEFAULT_MATCH_SCORE.to_string(),
            missing_skills: Vec::new(),
            feedback: DEFAULT_FEEDBACK.to_string(),
        }
    }
}
