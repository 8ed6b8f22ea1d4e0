use std::path::{Path, PathBuf};
#[cfg(unix)]
use std::{io::Write, os::unix::fs::OpenOptionsExt};

use super::{Storage, StorageError, StorageKey};

/// One `<key>.json` file per key inside a data directory.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    root: PathBuf,
}

impl JsonFileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn path_for(&self, key: StorageKey) -> PathBuf {
        self.root.join(format!("{}.json", key.as_str()))
    }
}

/// Write `content` next to `path`, then rename over it, so a crash mid-write
/// never leaves a truncated document behind.
fn secure_write(path: &Path, content: &str) -> Result<(), StorageError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let tmp = path.with_extension("json.tmp");

    #[cfg(unix)]
    {
        std::fs::OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .mode(0o600)
            .open(&tmp)?
            .write_all(content.as_bytes())?;
    }

    #[cfg(not(unix))]
    {
        std::fs::write(&tmp, content)?;
    }

    std::fs::rename(&tmp, path)?;
    Ok(())
}

impl Storage for JsonFileStore {
    fn load_raw(&self, key: StorageKey) -> Result<Option<String>, StorageError> {
        let path = self.path_for(key);
        if !path.exists() {
            return Ok(None);
        }
        let raw = std::fs::read_to_string(&path)?;
        if raw.trim().is_empty() {
            return Ok(None);
        }
        Ok(Some(raw))
    }

    fn save_raw(&self, key: StorageKey, json: &str) -> Result<(), StorageError> {
        let path = self.path_for(key);
        secure_write(&path, json)?;
        tracing::trace!(path = %path.display(), bytes = json.len(), "saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_loads_as_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path());
        assert!(store.load_raw(StorageKey::Projects).unwrap().is_none());
    }

    #[test]
    fn saved_value_is_read_back() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("nested"));
        store.save_raw(StorageKey::Entries, "[]").unwrap();
        assert_eq!(
            store.load_raw(StorageKey::Entries).unwrap().as_deref(),
            Some("[]")
        );
        assert!(store.path_for(StorageKey::Entries).ends_with("timeTracker_entries.json"));
    }

    #[test]
    fn overwrite_leaves_no_temp_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path());
        store.save_raw(StorageKey::Timer, "{\"a\":1}").unwrap();
        store.save_raw(StorageKey::Timer, "{\"a\":2}").unwrap();
        let names: Vec<_> = std::fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().into_string().unwrap())
            .collect();
        assert_eq!(names, vec!["timeTracker_timer.json".to_string()]);
    }

    #[cfg(unix)]
    #[test]
    fn files_are_private_to_owner() {
        use std::os::unix::fs::PermissionsExt;
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path());
        store.save_raw(StorageKey::Projects, "[]").unwrap();
        let mode = std::fs::metadata(store.path_for(StorageKey::Projects))
            .unwrap()
            .permissions()
            .mode();
        assert_eq!(mode & 0o777, 0o600);
    }
}
