#![allow(dead_code)]

use std::path::{Path, PathBuf};

use garden_core::{BackendKind, DateKey, Garden, GardenBuilder, PlantSeed};
use tempfile::TempDir;

/// Helper function to create a temporary directory and data file path
pub fn create_test_environment(file_name: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temporary directory");
    let path = temp_dir.path().join(file_name);
    (temp_dir, path)
}

/// Opens a garden of the given kind at `path`
pub fn open_garden(kind: BackendKind, path: &Path) -> Garden {
    GardenBuilder::new()
        .backend(kind)
        .with_data_path(Some(path))
        .build()
        .expect("Failed to create garden")
}

pub fn date(s: &str) -> DateKey {
    s.parse().expect("valid date key")
}

pub fn seed(day: &str, title: &str) -> PlantSeed {
    PlantSeed {
        date: date(day),
        title: title.to_string(),
        description: None,
    }
}
