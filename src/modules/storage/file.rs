use std::fs::{self, File};
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use super::{KeyValueStorage, StorageError};

/// Storage backed by one JSON file per key inside a data directory
#[derive(Debug, Clone)]
pub struct FileStorage {
    data_dir: PathBuf,
}

impl FileStorage {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Resolve the file path for a key, rejecting anything that could escape the data directory
    fn path_for(&self, key: &str) -> Result<PathBuf, StorageError> {
        let is_plain = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !is_plain {
            return Err(StorageError::InvalidKey(key.to_string()));
        }
        Ok(self.data_dir.join(format!("{}.json", key)))
    }
}

impl KeyValueStorage for FileStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.path_for(key)?;

        let mut file = match File::open(&path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(StorageError::Read {
                    key: key.to_string(),
                    source: e,
                })
            }
        };

        let mut contents = String::new();
        file.read_to_string(&mut contents)
            .map_err(|e| StorageError::Read {
                key: key.to_string(),
                source: e,
            })?;

        Ok(Some(contents))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let path = self.path_for(key)?;
        let write_error = |e: io::Error| StorageError::Write {
            key: key.to_string(),
            source: e,
        };

        // Create the data directory on first write
        fs::create_dir_all(&self.data_dir).map_err(write_error)?;

        File::create(&path)
            .and_then(|mut file| file.write_all(value.as_bytes()))
            .map_err(write_error)
    }
}
