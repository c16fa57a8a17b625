use crate::domain::model::{FileCandidate, MediaType, SelectedFile, MAX_FILE_SIZE};
use crate::utils::error::{MatchError, Result};

/// Checks a picked file against the allow-list and size cap. The declared
/// media type is trusted as-is; file contents are never sniffed.
pub fn validate(candidate: FileCandidate) -> Result<SelectedFile> {
    let media_type = MediaType::from_mime(&candidate.media_type).ok_or_else(|| {
        MatchError::UnsupportedFileType {
            media_type: candidate.media_type.clone(),
        }
    })?;

    if candidate.size > MAX_FILE_SIZE {
        return Err(MatchError::FileTooLarge {
            size: candidate.size,
            limit: MAX_FILE_SIZE,
        });
    }

    Ok(SelectedFile::new(
        candidate.name,
        media_type,
        candidate.size,
        candidate.path,
    ))
}
