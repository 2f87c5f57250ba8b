//! Image asset loading.
//!
//! `AppState` holds an `Arc<dyn AssetStore>`. A missing asset is `Ok(None)`;
//! renderers turn it into an inline notice instead of failing the page.

use std::io::ErrorKind;
use std::path::PathBuf;

use async_trait::async_trait;
use bytes::Bytes;
use tracing::warn;

use crate::errors::AppError;

#[async_trait]
pub trait AssetStore: Send + Sync {
    async fn load(&self, name: &str) -> Result<Option<Bytes>, AppError>;

    async fn exists(&self, name: &str) -> bool {
        matches!(self.load(name).await, Ok(Some(_)))
    }
}

/// Serves files from a single flat directory.
pub struct FsAssetStore {
    root: PathBuf,
}

impl FsAssetStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Only bare file names resolve; anything that could leave `root` does not.
    fn resolve(&self, name: &str) -> Option<PathBuf> {
        let plain = !name.is_empty()
            && !name.contains(['/', '\\'])
            && name != "."
            && !name.contains("..");
        plain.then(|| self.root.join(name))
    }
}

#[async_trait]
impl AssetStore for FsAssetStore {
    async fn load(&self, name: &str) -> Result<Option<Bytes>, AppError> {
        let Some(path) = self.resolve(name) else {
            warn!(asset = name, "Rejected asset name");
            return Ok(None);
        };
        match tokio::fs::read(&path).await {
            Ok(data) => Ok(Some(Bytes::from(data))),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                warn!(path = %path.display(), "Asset not found");
                Ok(None)
            }
            Err(e) => Err(AppError::Internal(anyhow::Error::new(e).context(format!(
                "reading asset {}",
                path.display()
            )))),
        }
    }

    async fn exists(&self, name: &str) -> bool {
        match self.resolve(name) {
            Some(path) => tokio::fs::try_exists(&path).await.unwrap_or(false),
            None => false,
        }
    }
}

/// Guesses a content type from the file extension.
pub fn content_type_for(name: &str) -> String {
    mime_guess::from_path(name)
        .first_or_octet_stream()
        .to_string()
}
