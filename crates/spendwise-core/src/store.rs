//! Classifier artifact persistence
//!
//! The classifier itself never touches the filesystem. An [`ArtifactStore`]
//! loads and saves the fitted artifact as an opaque blob; the engine decides
//! what to do when loading fails.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::{debug, info};

use crate::classifier::{ClassifierArtifact, ARTIFACT_FORMAT_VERSION};
use crate::error::{Error, Result};

/// Storage backend for the classifier artifact
pub trait ArtifactStore: Send + Sync {
    /// Short name for logs and status output
    fn name(&self) -> &str;

    /// Where the artifact lives, for display
    fn location(&self) -> String;

    /// Load the stored artifact
    ///
    /// `Ok(None)` when nothing has been saved yet. An artifact written by an
    /// incompatible format returns `Error::IncompatibleArtifact`.
    fn load(&self) -> Result<Option<ClassifierArtifact>>;

    /// Persist an artifact, replacing any previous one
    fn save(&self, artifact: &ClassifierArtifact) -> Result<()>;
}

/// JSON file on the local filesystem
#[derive(Debug, Clone)]
pub struct LocalArtifactStore {
    path: PathBuf,
}

impl LocalArtifactStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn parent_dir(&self) -> PathBuf {
        match self.path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir.to_path_buf(),
            _ => PathBuf::from("."),
        }
    }
}

impl ArtifactStore for LocalArtifactStore {
    fn name(&self) -> &str {
        "local"
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }

    fn load(&self) -> Result<Option<ClassifierArtifact>> {
        if !self.path.exists() {
            debug!("No artifact at {}", self.path.display());
            return Ok(None);
        }

        let content = fs::read_to_string(&self.path).map_err(|e| {
            Error::Store(format!(
                "Failed to read artifact {}: {}",
                self.path.display(),
                e
            ))
        })?;

        // Check the format tag before the full parse so an older layout is
        // reported as incompatible rather than as a JSON error.
        let raw: serde_json::Value = serde_json::from_str(&content)?;
        match raw.get("format_version").and_then(|v| v.as_u64()) {
            Some(v) if v == u64::from(ARTIFACT_FORMAT_VERSION) => {}
            Some(v) => {
                return Err(Error::IncompatibleArtifact(format!(
                    "{} has format version {}",
                    self.path.display(),
                    v
                )))
            }
            None => {
                return Err(Error::IncompatibleArtifact(format!(
                    "{} has no format version",
                    self.path.display()
                )))
            }
        }

        let artifact: ClassifierArtifact = serde_json::from_value(raw)?;
        artifact.validate()?;

        info!(
            "Loaded artifact from {} ({} rows, trained {})",
            self.path.display(),
            artifact.documents,
            artifact.trained_at.format("%Y-%m-%d %H:%M:%S")
        );
        Ok(Some(artifact))
    }

    fn save(&self, artifact: &ClassifierArtifact) -> Result<()> {
        let dir = self.parent_dir();
        if !dir.exists() {
            fs::create_dir_all(&dir).map_err(|e| {
                Error::Store(format!(
                    "Failed to create model directory {}: {}",
                    dir.display(),
                    e
                ))
            })?;
            info!("Created model directory: {}", dir.display());
        }

        // Write next to the target, then rename over it
        let mut tmp = NamedTempFile::new_in(&dir)?;
        serde_json::to_writer(&mut tmp, artifact)?;
        tmp.flush()?;
        tmp.persist(&self.path).map_err(|e| {
            Error::Store(format!(
                "Failed to replace artifact {}: {}",
                self.path.display(),
                e.error
            ))
        })?;

        info!("Saved artifact to {}", self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Expense, TrainingCorpus};

    fn artifact() -> ClassifierArtifact {
        let corpus = TrainingCorpus::new(vec![
            Expense::new("metro card", Category::Travel),
            Expense::new("biryani", Category::Food),
        ])
        .unwrap();
        ClassifierArtifact::train(&corpus).unwrap()
    }

    #[test]
    fn test_missing_file_loads_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalArtifactStore::new(dir.path().join("model.json"));
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalArtifactStore::new(dir.path().join("nested").join("model.json"));

        let saved = artifact();
        store.save(&saved).unwrap();
        assert!(store.path().exists());

        let loaded = store.load().unwrap().unwrap();
        assert_eq!(loaded.fingerprint, saved.fingerprint);
        assert_eq!(loaded.predict("metro").unwrap(), Category::Travel);
    }

    #[test]
    fn test_save_replaces_previous() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalArtifactStore::new(dir.path().join("model.json"));

        let mut first = artifact();
        first.version = 1;
        store.save(&first).unwrap();
        let mut second = artifact();
        second.version = 2;
        store.save(&second).unwrap();

        assert_eq!(store.load().unwrap().unwrap().version, 2);
        let leftovers = fs::read_dir(dir.path()).unwrap().count();
        assert_eq!(leftovers, 1);
    }

    #[test]
    fn test_other_format_version_is_incompatible() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalArtifactStore::new(dir.path().join("model.json"));

        let mut value = serde_json::to_value(artifact()).unwrap();
        value["format_version"] = serde_json::json!(ARTIFACT_FORMAT_VERSION + 1);
        fs::write(store.path(), value.to_string()).unwrap();

        assert!(matches!(store.load(), Err(Error::IncompatibleArtifact(_))));
    }

    #[test]
    fn test_foreign_blob_is_incompatible() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalArtifactStore::new(dir.path().join("model.json"));
        fs::write(store.path(), r#"{"pipeline": "pickle"}"#).unwrap();

        assert!(matches!(store.load(), Err(Error::IncompatibleArtifact(_))));
    }

    #[test]
    fn test_corrupt_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalArtifactStore::new(dir.path().join("model.json"));
        fs::write(store.path(), "not json").unwrap();

        assert!(store.load().is_err());
    }
}
