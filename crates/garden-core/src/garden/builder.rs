//! Builder for creating and configuring Garden instances.

use std::{
    fmt,
    path::{Path, PathBuf},
    str::FromStr,
};

use log::info;

use super::Garden;
use crate::{
    error::{GardenError, Result},
    store::{FileBackend, MemoryBackend, PlanBackend, PlanStore, SqliteBackend},
};

/// Where plans are persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BackendKind {
    /// SQLite database, one key/value row holding the payload
    #[default]
    Sqlite,
    /// Plain JSON file
    Json,
    /// Nothing persisted beyond the process
    Memory,
}

impl BackendKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            BackendKind::Sqlite => "sqlite",
            BackendKind::Json => "json",
            BackendKind::Memory => "memory",
        }
    }

    fn default_file_name(&self) -> &'static str {
        match self {
            BackendKind::Json => "plans.json",
            BackendKind::Sqlite | BackendKind::Memory => "garden.db",
        }
    }
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BackendKind {
    type Err = GardenError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "sqlite" => Ok(BackendKind::Sqlite),
            "json" => Ok(BackendKind::Json),
            "memory" => Ok(BackendKind::Memory),
            _ => Err(GardenError::invalid_input("backend")
                .with_reason(format!("unknown backend '{s}', expected sqlite, json or memory"))),
        }
    }
}

/// Builder for creating and configuring Garden instances.
#[derive(Debug, Clone, Default)]
pub struct GardenBuilder {
    backend: BackendKind,
    data_path: Option<PathBuf>,
}

impl GardenBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn backend(mut self, backend: BackendKind) -> Self {
        self.backend = backend;
        self
    }

    /// Sets a custom data file path.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/garden/garden.db` (or `plans.json` for the JSON
    /// backend). Ignored by the memory backend.
    pub fn with_data_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.data_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Builds the configured garden and loads its plans.
    ///
    /// # Errors
    ///
    /// Returns `GardenError::XdgDirectory` if no default path can be placed,
    /// `GardenError::FileSystem` if the data directory cannot be created,
    /// `GardenError::Database` if the SQLite database cannot be opened.
    pub fn build(self) -> Result<Garden> {
        let backend: Box<dyn PlanBackend> = match self.backend {
            BackendKind::Memory => Box::new(MemoryBackend::new()),
            kind => {
                let path = match self.data_path {
                    Some(path) => path,
                    None => Self::default_data_path(kind)?,
                };
                info!("Opening {kind} garden at {}", path.display());
                match kind {
                    BackendKind::Json => Box::new(FileBackend::new(&path)?),
                    _ => Box::new(SqliteBackend::open(&path)?),
                }
            }
        };

        Ok(Garden::new(PlanStore::open(backend)))
    }

    /// Returns the default data path following XDG Base Directory
    /// specification.
    fn default_data_path(kind: BackendKind) -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("garden")
            .place_data_file(kind.default_file_name())
            .map_err(|e| GardenError::XdgDirectory(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_backend_kind_parsing() {
        assert_eq!("sqlite".parse::<BackendKind>().unwrap(), BackendKind::Sqlite);
        assert_eq!("JSON".parse::<BackendKind>().unwrap(), BackendKind::Json);
        assert!("redis".parse::<BackendKind>().is_err());
        assert_eq!(BackendKind::default(), BackendKind::Sqlite);
    }

    #[test]
    fn test_builds_file_backends_at_given_path() {
        let dir = TempDir::new().unwrap();

        let json = dir.path().join("nested").join("plans.json");
        let garden = GardenBuilder::new()
            .backend(BackendKind::Json)
            .with_data_path(Some(&json))
            .build()
            .unwrap();
        assert_eq!(garden.location(), json.display().to_string());

        let db = dir.path().join("garden.db");
        let garden = GardenBuilder::new()
            .with_data_path(Some(&db))
            .build()
            .unwrap();
        assert_eq!(garden.location(), db.display().to_string());
        assert!(db.exists());
    }
}
