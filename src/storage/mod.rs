use actix_multipart::{Field, Multipart, MultipartError};
use futures_util::TryStreamExt;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tokio::io::AsyncWriteExt;
use uuid::Uuid;

/// Image extensions accepted for upload.
pub const ALLOWED_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "webp", "svg"];

/// 5 MiB per file.
pub const MAX_UPLOAD_BYTES: usize = 5 * 1024 * 1024;

/// Entities that own an upload directory.
pub const UPLOAD_ENTITIES: &[&str] = &["services", "portfolios", "berita", "users"];

#[derive(Debug, Error)]
pub enum UploadError {
    #[error("no file field in the upload")]
    MissingFile,
    #[error("unknown upload target: {0}")]
    UnknownEntity(String),
    #[error("unsupported file type: {0}")]
    UnsupportedType(String),
    #[error("file exceeds the {MAX_UPLOAD_BYTES} byte limit")]
    TooLarge,
    #[error("multipart error: {0}")]
    Multipart(#[from] MultipartError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Where uploaded files land on disk. Served back under `/storage`.
#[derive(Clone)]
pub struct StorageConfig {
    pub root: PathBuf,
}

impl StorageConfig {
    pub fn from_env() -> Self {
        let root = std::env::var("UPLOAD_DIR").unwrap_or_else(|_| "./storage".to_string());
        Self { root: root.into() }
    }
}

fn extension_of(filename: &str) -> Option<String> {
    Path::new(filename)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
}

/// Stream the first file field of a multipart upload to disk and return the
/// relative path to store in an entity column, e.g.
/// `services/3f2a….webp`.
pub async fn save_image(
    config: &StorageConfig,
    entity: &str,
    mut payload: Multipart,
) -> Result<String, UploadError> {
    if !UPLOAD_ENTITIES.contains(&entity) {
        return Err(UploadError::UnknownEntity(entity.to_string()));
    }

    while let Some(field) = payload.try_next().await? {
        if field.content_disposition().and_then(|cd| cd.get_filename()).is_none() {
            continue;
        }
        return write_field(config, entity, field).await;
    }

    Err(UploadError::MissingFile)
}

async fn write_field(
    config: &StorageConfig,
    entity: &str,
    mut field: Field,
) -> Result<String, UploadError> {
    let filename = field
        .content_disposition()
        .and_then(|cd| cd.get_filename())
        .map(str::to_string)
        .ok_or(UploadError::MissingFile)?;

    let ext = extension_of(&filename)
        .filter(|e| ALLOWED_EXTENSIONS.contains(&e.as_str()))
        .ok_or_else(|| UploadError::UnsupportedType(filename.clone()))?;

    let relative = format!("{entity}/{}.{ext}", Uuid::new_v4());
    let target = config.root.join(&relative);
    if let Some(parent) = target.parent() {
        tokio::fs::create_dir_all(parent).await?;
    }

    let mut file = tokio::fs::File::create(&target).await?;
    let mut written = 0usize;

    while let Some(chunk) = field.try_next().await? {
        written += chunk.len();
        if written > MAX_UPLOAD_BYTES {
            drop(file);
            let _ = tokio::fs::remove_file(&target).await;
            return Err(UploadError::TooLarge);
        }
        file.write_all(&chunk).await?;
    }
    file.flush().await?;

    Ok(relative)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_is_lowercased() {
        assert_eq!(extension_of("Foto.JPG").as_deref(), Some("jpg"));
        assert_eq!(extension_of("logo.webp").as_deref(), Some("webp"));
        assert_eq!(extension_of("no-extension"), None);
    }

    #[test]
    fn entity_whitelist() {
        assert!(UPLOAD_ENTITIES.contains(&"services"));
        assert!(!UPLOAD_ENTITIES.contains(&"pesanan"));
    }
}
