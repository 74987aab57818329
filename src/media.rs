//! Media Ingest
//!
//! Turns uploaded files into inline `MediaFile` records.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use wasm_bindgen_futures::JsFuture;

use crate::models::MediaFile;
use crate::storage::js_message;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MediaError {
    #[error("failed to read file: {0}")]
    Read(String),
}

impl MediaFile {
    /// Encode raw bytes as a base64 `data:` URI
    pub fn from_bytes(id: impl Into<String>, name: impl Into<String>, mime: &str, bytes: &[u8]) -> Self {
        let mime = if mime.trim().is_empty() {
            "application/octet-stream"
        } else {
            mime.trim()
        };
        Self {
            id: id.into(),
            name: name.into(),
            data_url: format!("data:{};base64,{}", mime, STANDARD.encode(bytes)),
            mime: mime.to_string(),
        }
    }

    pub fn is_image(&self) -> bool {
        self.mime.starts_with("image/")
    }
}

/// Read a browser file to completion and encode it
pub async fn read_file(id: String, file: &web_sys::File) -> Result<MediaFile, MediaError> {
    let buffer = JsFuture::from(file.array_buffer())
        .await
        .map_err(|e| MediaError::Read(js_message(e)))?;
    let bytes = js_sys::Uint8Array::new(&buffer).to_vec();
    log::debug!("read {} ({} bytes)", file.name(), bytes.len());
    Ok(MediaFile::from_bytes(id, file.name(), &file.type_(), &bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_bytes_builds_data_url() {
        let file = MediaFile::from_bytes("media-1", "dot.png", "image/png", b"hello");
        assert_eq!(file.data_url, "data:image/png;base64,aGVsbG8=");
        assert_eq!(file.mime, "image/png");
        assert_eq!(file.name, "dot.png");
        assert!(file.is_image());
    }

    #[test]
    fn test_from_bytes_unknown_mime() {
        let file = MediaFile::from_bytes("media-2", "blob", "", &[]);
        assert_eq!(file.data_url, "data:application/octet-stream;base64,");
        assert!(!file.is_image());
    }
}
