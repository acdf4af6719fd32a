//! File system access for project documents

use std::path::Path;

#[cfg(test)]
use mockall::automock;
use tracing::debug;

use crate::project::error::StoreError;

/// Reads and writes whole project files
#[cfg_attr(test, automock)]
pub trait ProjectStore {
    fn read_to_string(&self, path: &Path) -> Result<String, StoreError>;

    /// Overwrite `path` with `contents`
    fn write(&self, path: &Path, contents: &str) -> Result<(), StoreError>;

    fn create_dir_all(&self, path: &Path) -> Result<(), StoreError>;
}

/// `ProjectStore` backed by `std::fs`
#[derive(Debug, Clone, Copy, Default)]
pub struct FsStore;

fn io_error(path: &Path) -> impl FnOnce(std::io::Error) -> StoreError + '_ {
    move |source| StoreError::Io {
        path: path.to_path_buf(),
        source,
    }
}

impl ProjectStore for FsStore {
    fn read_to_string(&self, path: &Path) -> Result<String, StoreError> {
        debug!("Reading {}", path.display());
        std::fs::read_to_string(path).map_err(io_error(path))
    }

    fn write(&self, path: &Path, contents: &str) -> Result<(), StoreError> {
        debug!("Writing {} bytes to {}", contents.len(), path.display());
        std::fs::write(path, contents).map_err(io_error(path))
    }

    fn create_dir_all(&self, path: &Path) -> Result<(), StoreError> {
        std::fs::create_dir_all(path).map_err(io_error(path))
    }
}
