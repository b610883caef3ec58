use crate::core::codec::{format_record, parse_line};
use crate::core::{Record, RecordStore, Schema};
use crate::utils::error::Result;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

/// One record per line in a plain text file.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
    schema: Schema,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>, schema: Schema) -> Self {
        Self {
            path: path.into(),
            schema,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn ensure_parent(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        Ok(())
    }
}

impl RecordStore for FileStore {
    fn init(&self) -> Result<()> {
        self.ensure_parent()?;
        fs::write(&self.path, "")?;
        tracing::debug!("Initialized store at {}", self.path.display());
        Ok(())
    }

    fn load(&self) -> Result<Vec<Record>> {
        if !self.path.exists() {
            tracing::debug!("Store {} does not exist yet", self.path.display());
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&self.path)?;
        let mut records = Vec::new();
        for (index, line) in content.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            let record = parse_line(line).inspect_err(|e| {
                tracing::error!("{}:{}: {}", self.path.display(), index + 1, e);
            })?;
            records.push(record);
        }

        tracing::debug!("Loaded {} records from {}", records.len(), self.path.display());
        Ok(records)
    }

    fn append(&self, record: &Record) -> Result<()> {
        self.ensure_parent()?;

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{}", format_record(&self.schema, record))?;

        tracing::debug!("Appended record to {}", self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::codec::parse_items;
    use crate::utils::error::RecordError;
    use tempfile::TempDir;

    fn store_in(dir: &TempDir) -> FileStore {
        FileStore::new(dir.path().join("data").join("store.txt"), Schema::default())
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        assert!(store.load().unwrap().is_empty());
        assert!(!store.path().exists());
    }

    #[test]
    fn test_append_creates_directory_and_preserves_order() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        let schema = Schema::default();

        let first = parse_items(&schema, &["name=a", "hex=1"]).unwrap();
        let second = parse_items(&schema, &["name=b"]).unwrap();
        store.append(&first).unwrap();
        store.append(&second).unwrap();

        let content = fs::read_to_string(store.path()).unwrap();
        assert_eq!(content, "name=a|hex=1\nname=b|hex=\n");
        assert_eq!(store.load().unwrap(), vec![first, second]);
    }

    #[test]
    fn test_init_truncates() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        let record = parse_items(&Schema::default(), &["name=a"]).unwrap();
        store.append(&record).unwrap();

        store.init().unwrap();

        assert!(store.path().exists());
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn test_load_skips_blank_lines() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        store.init().unwrap();
        fs::write(store.path(), "name=a|hex=1\n\n   \nname=b|hex=2\n").unwrap();

        assert_eq!(store.load().unwrap().len(), 2);
    }

    #[test]
    fn test_load_rejects_malformed_line() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        store.init().unwrap();
        fs::write(store.path(), "name=a|hex=1\nnot a record\n").unwrap();

        let err = store.load().unwrap_err();
        assert!(matches!(err, RecordError::MalformedLine { .. }));
    }

    #[test]
    fn test_store_path_without_parent_directory() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::new(dir.path().join("flat.txt"), Schema::default());
        store.init().unwrap();
        assert!(store.path().exists());
    }
}
