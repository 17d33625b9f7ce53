use crate::core::Storage;
use crate::utils::error::{EtlError, Result};
use std::path::{Path, PathBuf};

/// Filesystem storage rooted at a base directory. Absolute paths ignore the
/// base. The output's parent directory must already exist.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: PathBuf,
}

impl LocalStorage {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    fn resolve(&self, path: &str) -> PathBuf {
        self.base_path.join(path)
    }
}

impl Default for LocalStorage {
    fn default() -> Self {
        Self::new(".")
    }
}

impl Storage for LocalStorage {
    async fn read_file(&self, path: &str) -> Result<Vec<u8>> {
        let full_path = self.resolve(path);
        tokio::fs::read(&full_path)
            .await
            .map_err(|e| EtlError::InputReadError {
                path: display(&full_path),
                source: e,
            })
    }

    async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
        let full_path = self.resolve(path);
        tokio::fs::write(&full_path, data)
            .await
            .map_err(|e| EtlError::OutputWriteError {
                path: display(&full_path),
                source: e,
            })
    }
}

fn display(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}
