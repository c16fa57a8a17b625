use crate::domain::model::SelectedFile;
use crate::domain::ports::Storage;
use crate::utils::error::Result;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;

/// Reads the selected file's bytes and returns them as standard base64,
/// suitable for embedding in the webhook's JSON body. Read failures
/// propagate to the caller and surface as a submission error.
pub async fn encode<S: Storage>(storage: &S, file: &SelectedFile) -> Result<String> {
    let bytes = storage.read_file(file.path()).await?;
    let encoded = STANDARD.encode(&bytes);
    Ok(strip_data_url_prefix(&encoded).to_string())
}

/// Reduces a `data:<mime>;base64,` URI to its bare payload. Text that is
/// already plain base64 passes through unchanged.
pub fn strip_data_url_prefix(encoded: &str) -> &str {
    if !encoded.starts_with("data:") {
        return encoded;
    }
    match encoded.split_once("base64,") {
        Some((_, payload)) => payload,
        None => encoded,
    }
}
