use std::path::{Path, PathBuf};

use safety_game::{CatalogError, DataLoader, ScenarioCatalog};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid scenario catalog: {0}")]
    Catalog(#[from] CatalogError),
}

/// Reads a scenario catalog from a JSON file on disk.
#[derive(Debug, Clone)]
pub struct FileLoader {
    path: PathBuf,
}

impl FileLoader {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl DataLoader for FileLoader {
    type Error = LoadError;

    fn load_catalog(&self) -> Result<ScenarioCatalog, Self::Error> {
        let json = std::fs::read_to_string(&self.path).map_err(|source| LoadError::Io {
            path: self.path.clone(),
            source,
        })?;
        Ok(ScenarioCatalog::from_json(&json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_file(label: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "safety-loader-{label}-{}.json",
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .unwrap_or_default()
                .as_nanos()
        ));
        std::fs::write(&path, contents).expect("write temp catalog");
        path
    }

    #[test]
    fn loads_catalog_from_disk() {
        let builtin = ScenarioCatalog::builtin().unwrap();
        let path = temp_file("ok", &serde_json::to_string(builtin).unwrap());
        let loaded = FileLoader::new(&path).load_catalog().unwrap();
        assert_eq!(&loaded, builtin);
    }

    #[test]
    fn missing_file_reports_path() {
        let err = FileLoader::new("/nonexistent/safety.json")
            .load_catalog()
            .unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
        assert!(err.to_string().contains("/nonexistent/safety.json"));
    }

    #[test]
    fn invalid_catalog_is_wrapped() {
        let path = temp_file("bad", r#"{"flood":[],"fire":[]}"#);
        let err = FileLoader::new(&path).load_catalog().unwrap_err();
        assert!(matches!(err, LoadError::Catalog(CatalogError::EmptyTrack(_))));
    }
}
