//! JSON file backend.

use std::{
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use super::backend::PlanBackend;
use crate::error::{GardenError, Result};

/// Stores the payload in a single file.
///
/// Writes go to a sibling `.tmp` file which is then renamed over the target,
/// so readers see either the old payload or the new one.
#[derive(Debug, Clone)]
pub struct FileBackend {
    path: PathBuf,
}

impl FileBackend {
    /// Creates a backend for `path`, creating parent directories as needed.
    ///
    /// # Errors
    ///
    /// Returns `GardenError::FileSystem` if the parent directory cannot be
    /// created.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| GardenError::file_system(parent, e))?;
        }
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.file_name().unwrap_or_default().to_os_string();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl PlanBackend for FileBackend {
    fn read_all(&self) -> Result<Option<Vec<u8>>> {
        match fs::read(&self.path) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(GardenError::file_system(&self.path, e)),
        }
    }

    fn write_all(&self, bytes: &[u8]) -> Result<()> {
        let temp = self.temp_path();
        fs::write(&temp, bytes).map_err(|e| GardenError::file_system(&temp, e))?;
        fs::rename(&temp, &self.path).map_err(|e| GardenError::file_system(&self.path, e))
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
