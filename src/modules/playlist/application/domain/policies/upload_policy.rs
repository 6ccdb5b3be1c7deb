use crate::playlist::application::domain::entities::ImageUpload;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum UploadPolicyError {
    #[error("File too large (max {max_bytes} bytes, got {actual_bytes} bytes)")]
    FileTooLarge { max_bytes: u64, actual_bytes: u64 },

    #[error("Invalid mime type: {0}")]
    InvalidMimeType(String),

    #[error("Invalid file name")]
    InvalidFileName,
}

#[derive(Debug, Clone)]
pub struct UploadPolicy {
    pub max_file_size_bytes: u64,
    pub max_file_name_len: usize,
    pub allowed_mime_types: &'static [&'static str],
}

impl UploadPolicy {
    pub const DEFAULT_ALLOWED_MIME_TYPES: &'static [&'static str] =
        &["image/jpeg", "image/png", "image/webp", "image/gif"];

    pub fn validate(&self, upload: &ImageUpload) -> Result<(), UploadPolicyError> {
        if upload.size() > self.max_file_size_bytes {
            return Err(UploadPolicyError::FileTooLarge {
                max_bytes: self.max_file_size_bytes,
                actual_bytes: upload.size(),
            });
        }

        let mime = upload
            .content_type
            .as_deref()
            .map(|m| m.trim().to_ascii_lowercase())
            .unwrap_or_default();
        if !self.allowed_mime_types.contains(&mime.as_str()) {
            return Err(UploadPolicyError::InvalidMimeType(mime));
        }

        if let Some(name) = upload.file_name.as_deref() {
            if name.len() > self.max_file_name_len {
                return Err(UploadPolicyError::InvalidFileName);
            }
        }

        Ok(())
    }
}

impl Default for UploadPolicy {
    fn default() -> Self {
        Self {
            max_file_size_bytes: 5 * 1024 * 1024, // 5MB
            max_file_name_len: 255,
            allowed_mime_types: Self::DEFAULT_ALLOWED_MIME_TYPES,
        }
    }
}
