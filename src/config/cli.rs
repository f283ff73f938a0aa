use crate::core::Storage;
use crate::utils::error::{EtlError, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

/// Filesystem storage. Relative paths resolve against `base_path`.
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

    /// Storage rooted at the process working directory.
    pub fn current_dir() -> Self {
        Self::new(".")
    }

    fn resolve(&self, path: &str) -> PathBuf {
        self.base_path.join(path)
    }
}

impl Storage for LocalStorage {
    async fn read_file(&self, path: &str) -> Result<Vec<u8>> {
        let full_path = self.resolve(path);

        match fs::read(&full_path) {
            Ok(data) => Ok(data),
            Err(e) if e.kind() == ErrorKind::NotFound => Err(EtlError::SourceNotFound {
                path: full_path.display().to_string(),
            }),
            Err(e) => Err(EtlError::IoError(e)),
        }
    }

    async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
        let full_path = self.resolve(path);
        let sink_error = |e: std::io::Error| EtlError::SinkWriteError {
            path: full_path.display().to_string(),
            message: e.to_string(),
        };

        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).map_err(sink_error)?;
        }

        fs::write(&full_path, data).map_err(sink_error)?;
        Ok(())
    }
}
