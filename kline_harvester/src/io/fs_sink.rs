//! Filesystem-backed content store.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use snafu::ResultExt;

use crate::io::sink::{KlineSink, StoreError, WriteSnafu};

/// Stores each object as a file under a root directory, with the storage
/// key as the relative path.
///
/// Writes go to a temporary sibling first and are renamed into place, so a
/// crash mid-write never leaves a truncated object under a live key and a
/// repeat write atomically replaces the previous object.
pub struct FsSink {
    root: PathBuf,
}

impl FsSink {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn tmp_path(path: &Path) -> PathBuf {
        let mut name = path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        path.with_file_name(name)
    }
}

#[async_trait]
impl KlineSink for FsSink {
    async fn write(&self, key: &str, bytes: &[u8]) -> Result<(), StoreError> {
        let path = self.root.join(key);
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .context(WriteSnafu { key })?;
        }

        let tmp = Self::tmp_path(&path);
        tokio::fs::write(&tmp, bytes)
            .await
            .context(WriteSnafu { key })?;
        tokio::fs::rename(&tmp, &path)
            .await
            .context(WriteSnafu { key })?;
        Ok(())
    }
}
