use std::path::PathBuf;

use sha2::{Digest, Sha256};
use tracing::info;

use crate::domain::{
    common::entities::app_errors::CoreError,
    upload::{entities::StagedImage, ports::UploadStore, value_objects::UploadImageInput},
};

/// Stages uploads in a local scratch directory keyed by file name.
///
/// Two uploads with the same name overwrite each other and nothing is ever
/// removed.
#[derive(Debug, Clone)]
pub struct LocalUploadStore {
    upload_dir: PathBuf,
}

impl LocalUploadStore {
    pub fn new(upload_dir: PathBuf) -> Self {
        Self { upload_dir }
    }
}

impl UploadStore for LocalUploadStore {
    async fn stage(&self, input: UploadImageInput) -> Result<StagedImage, CoreError> {
        let (file_name, media_type) = input.validate()?;

        tokio::fs::create_dir_all(&self.upload_dir)
            .await
            .map_err(|e| {
                tracing::error!(
                    "Failed to create upload directory {}: {}",
                    self.upload_dir.display(),
                    e
                );
                CoreError::ImageWrite(e.to_string())
            })?;

        let path = self.upload_dir.join(&file_name);
        tokio::fs::write(&path, &input.data).await.map_err(|e| {
            tracing::error!("Failed to write upload {}: {}", path.display(), e);
            CoreError::ImageWrite(e.to_string())
        })?;

        let checksum = hex::encode(Sha256::digest(&input.data));
        info!(
            "Staged upload {} ({} bytes) at {}",
            file_name,
            input.data.len(),
            path.display()
        );

        Ok(StagedImage::new(
            file_name,
            path,
            media_type.to_string(),
            input.data.len() as u64,
            checksum,
        ))
    }

    async fn read(&self, path: PathBuf) -> Result<Vec<u8>, CoreError> {
        tokio::fs::read(&path).await.map_err(|e| {
            tracing::error!("Error reading image file {}: {}", path.display(), e);
            CoreError::ImageRead(format!("{}: {}", path.display(), e))
        })
    }
}

#[cfg(test)]
mod tests {
    use bytes::Bytes;

    use super::*;

    #[tokio::test]
    async fn test_stage_writes_sanitized_file_and_reads_back() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalUploadStore::new(dir.path().join("uploads"));

        let staged = store
            .stage(UploadImageInput {
                file_name: "../sneaky/fridge.JPG".to_string(),
                data: Bytes::from_static(b"jpeg-bytes"),
            })
            .await
            .unwrap();

        assert_eq!(staged.file_name, "fridge.JPG");
        assert_eq!(staged.path, dir.path().join("uploads").join("fridge.JPG"));
        assert_eq!(staged.media_type, "image/jpeg");
        assert_eq!(staged.size_bytes, 10);
        assert_eq!(
            staged.checksum_sha256,
            hex::encode(Sha256::digest(b"jpeg-bytes"))
        );

        let data = store.read(staged.path).await.unwrap();
        assert_eq!(data, b"jpeg-bytes");
    }

    #[tokio::test]
    async fn test_same_name_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalUploadStore::new(dir.path().to_path_buf());

        for data in [&b"first"[..], &b"second"[..]] {
            store
                .stage(UploadImageInput {
                    file_name: "fridge.png".to_string(),
                    data: Bytes::copy_from_slice(data),
                })
                .await
                .unwrap();
        }

        let data = store.read(dir.path().join("fridge.png")).await.unwrap();
        assert_eq!(data, b"second");
    }

    #[tokio::test]
    async fn test_rejected_upload_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalUploadStore::new(dir.path().join("uploads"));

        let result = store
            .stage(UploadImageInput {
                file_name: "notes.txt".to_string(),
                data: Bytes::from_static(b"hello"),
            })
            .await;

        assert_eq!(
            result,
            Err(CoreError::UnsupportedMediaType("txt".to_string()))
        );
        assert!(!dir.path().join("uploads").exists());
    }

    #[tokio::test]
    async fn test_read_missing_file_is_image_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalUploadStore::new(dir.path().to_path_buf());

        let result = store.read(dir.path().join("gone.png")).await;

        assert!(matches!(result, Err(CoreError::ImageRead(_))));
    }
}
