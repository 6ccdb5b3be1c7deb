use actix_files::Files;
use async_trait::async_trait;
use chrono::Utc;
use rand::{distributions::Alphanumeric, Rng};
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use crate::playlist::application::{
    domain::entities::ImageUpload,
    ports::outgoing::{ImageStorage, ImageStorageError},
};

const UPLOADS_DIR: &str = "uploads";
const SUFFIX_LEN: usize = 10;

/// Writes playlist covers under `<public_dir>/uploads`, served as `/uploads/<file>`.
#[derive(Debug, Clone)]
pub struct LocalImageStorage {
    public_dir: PathBuf,
}

impl LocalImageStorage {
    pub fn new(public_dir: impl Into<PathBuf>) -> Self {
        Self {
            public_dir: public_dir.into(),
        }
    }

    pub fn upload_dir(&self) -> PathBuf {
        self.public_dir.join(UPLOADS_DIR)
    }

    /// Serves stored covers at the paths `store` hands out.
    pub fn public_files(&self) -> Files {
        Files::new(&format!("/{}", UPLOADS_DIR), self.upload_dir())
    }

    /// `<millis>-<10 lowercase alphanumerics><ext>`
    fn generate_file_name(extension: &str) -> String {
        let suffix: String = rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(SUFFIX_LEN)
            .map(|b| char::from(b).to_ascii_lowercase())
            .collect();

        format!("{}-{}{}", Utc::now().timestamp_millis(), suffix, extension)
    }

    /// Map a public path back to a file inside the upload dir.
    fn resolve(&self, public_path: &str) -> Result<PathBuf, ImageStorageError> {
        let invalid = || ImageStorageError::InvalidPath(public_path.to_string());

        let file_name = public_path
            .strip_prefix(&format!("/{}/", UPLOADS_DIR))
            .ok_or_else(invalid)?;

        // Must be a bare file name; no traversal.
        if file_name.is_empty() || Path::new(file_name).file_name() != Some(OsStr::new(file_name)) {
            return Err(invalid());
        }

        Ok(self.upload_dir().join(file_name))
    }
}

#[async_trait]
impl ImageStorage for LocalImageStorage {
    async fn store(&self, upload: &ImageUpload) -> Result<String, ImageStorageError> {
        let dir = self.upload_dir();
        tokio::fs::create_dir_all(&dir)
            .await
            .map_err(|e| ImageStorageError::Io(e.to_string()))?;

        let file_name = Self::generate_file_name(&upload.extension());
        tokio::fs::write(dir.join(&file_name), &upload.bytes)
            .await
            .map_err(|e| ImageStorageError::Io(e.to_string()))?;

        tracing::info!(file_name = %file_name, bytes = upload.size(), "Stored playlist image");
        Ok(format!("/{}/{}", UPLOADS_DIR, file_name))
    }

    async fn remove(&self, public_path: &str) -> Result<(), ImageStorageError> {
        let path = self.resolve(public_path)?;

        match tokio::fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(ImageStorageError::Io(e.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use tempfile::TempDir;

    fn upload(name: Option<&str>) -> ImageUpload {
        ImageUpload {
            file_name: name.map(str::to_string),
            content_type: Some("image/jpeg".into()),
            bytes: b"not really a jpeg".to_vec(),
        }
    }

    fn is_generated_name(file_name: &str, ext: &str) -> bool {
        let Some(stem) = file_name.strip_suffix(ext) else {
            return false;
        };
        let Some((millis, suffix)) = stem.split_once('-') else {
            return false;
        };
        millis.parse::<i64>().is_ok()
            && suffix.len() == SUFFIX_LEN
            && suffix
                .chars()
                .all(|c| c.is_ascii_digit() || c.is_ascii_lowercase())
    }

    #[tokio::test]
    async fn store_writes_file_under_uploads() {
        let dir = TempDir::new().unwrap();
        let storage = LocalImageStorage::new(dir.path());

        let public_path = storage.store(&upload(Some("cover.jpg"))).await.unwrap();

        let file_name = public_path.strip_prefix("/uploads/").unwrap();
        assert!(is_generated_name(file_name, ".jpg"), "{}", file_name);
        let written = std::fs::read(dir.path().join("uploads").join(file_name)).unwrap();
        assert_eq!(written, b"not really a jpeg");
    }

    #[actix_web::test]
    async fn stored_cover_is_served_at_its_public_path() {
        // Arrange
        let dir = TempDir::new().unwrap();
        let storage = LocalImageStorage::new(dir.path());
        let public_path = storage.store(&upload(Some("cover.jpg"))).await.unwrap();
        let app =
            test::init_service(App::new().service(storage.public_files())).await;

        // Act
        let req = test::TestRequest::get().uri(&public_path).to_request();
        let resp = test::call_service(&app, req).await;

        // Assert
        assert_eq!(resp.status(), StatusCode::OK);
        let body = test::read_body(resp).await;
        assert_eq!(&body[..], b"not really a jpeg");
    }

    #[tokio::test]
    async fn store_defaults_extension_to_png() {
        let dir = TempDir::new().unwrap();
        let storage = LocalImageStorage::new(dir.path());

        let public_path = storage.store(&upload(None)).await.unwrap();

        assert!(public_path.ends_with(".png"));
    }

    #[tokio::test]
    async fn remove_deletes_stored_file_and_ignores_missing() {
        let dir = TempDir::new().unwrap();
        let storage = LocalImageStorage::new(dir.path());
        let public_path = storage.store(&upload(Some("a.gif"))).await.unwrap();

        storage.remove(&public_path).await.unwrap();
        storage.remove(&public_path).await.unwrap();

        let file_name = public_path.strip_prefix("/uploads/").unwrap();
        assert!(!dir.path().join("uploads").join(file_name).exists());
    }

    #[tokio::test]
    async fn remove_rejects_paths_outside_uploads() {
        let dir = TempDir::new().unwrap();
        let storage = LocalImageStorage::new(dir.path());

        for path in ["/etc/passwd", "/uploads/../secret", "/uploads/", "uploads/a.png"] {
            assert!(
                matches!(storage.remove(path).await, Err(ImageStorageError::InvalidPath(_))),
                "{}",
                path
            );
        }
    }
}
