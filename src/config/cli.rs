use crate::domain::model::{FileCandidate, MediaType};
use crate::domain::ports::Storage;
use crate::utils::error::Result;
use std::fs;
use std::path::Path;

/// Builds a file candidate from a path, the CLI stand-in for the browser
/// file picker. The media type is declared from the extension alone, the
/// same trust the original placed in the browser-reported MIME type.
pub fn pick_file(path: &str) -> Result<FileCandidate> {
    let metadata = fs::metadata(path)?;
    let file_path = Path::new(path);

    let name = file_path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or(path)
        .to_string();

    let media_type = file_path
        .extension()
        .and_then(|ext| ext.to_str())
        .and_then(MediaType::from_extension)
        .map(|m| m.as_mime().to_string())
        .unwrap_or_else(|| "application/octet-stream".to_string());

    Ok(FileCandidate {
        name,
        media_type,
        size: metadata.len(),
        path: path.to_string(),
    })
}

/// Local-disk storage: resume files are read from wherever the picker found
/// them; reports land under the configured output directory.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    output_path: String,
}

impl LocalStorage {
    pub fn new(output_path: String) -> Self {
        Self { output_path }
    }
}

impl Storage for LocalStorage {
    async fn read_file(&self, path: &str) -> Result<Vec<u8>> {
        let data = fs::read(path)?;
        Ok(data)
    }

    async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
        let full_path = Path::new(&self.output_path).join(path);

        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(full_path, data)?;
        Ok(())
    }
}
