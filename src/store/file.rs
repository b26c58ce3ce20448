use std::io::ErrorKind;
use std::path::PathBuf;

use serde::{Serialize, de::DeserializeOwned};

use crate::store::{Error, RecordStore, decode_record, encode_record, validate_key};

/// A directory-backed record store with one JSON file per key.
///
/// The record for key `k` lives at `<dir>/k.json`. Every `get` and `set`
/// touches the filesystem directly; nothing is cached and nothing is locked.
///
/// Keys are restricted to `[A-Za-z0-9._-]` (no leading dot, at most 255
/// bytes) so a key can never name a file outside the store directory.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Opens the store rooted at `dir`, creating the directory (and any
    /// missing parents) if it does not exist.
    ///
    /// Fails with [`Error::Init`] when the path exists and is not a
    /// directory, or cannot be created.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, Error> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir)
            .map_err(|err| Error::Init(format!("{}: {err}", dir.display())))?;
        Ok(Self { dir })
    }

    fn record_path(&self, key: &str) -> Result<PathBuf, Error> {
        validate_key(key)?;
        Ok(self.dir.join(format!("{key}.json")))
    }
}

impl RecordStore for FileStore {
    async fn get<T>(&self, key: &str) -> Result<Option<T>, Error>
    where
        T: Send + Sync + DeserializeOwned,
    {
        let path = self.record_path(key)?;
        match tokio::fs::read(&path).await {
            Ok(bytes) => Ok(Some(decode_record(&bytes)?)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(Error::Backend(err.to_string())),
        }
    }

    async fn set<T>(&self, key: &str, record: &T) -> Result<(), Error>
    where
        T: Send + Sync + Serialize,
    {
        let path = self.record_path(key)?;
        let bytes = encode_record(record)?;
        tokio::fs::write(&path, bytes)
            .await
            .map_err(|err| Error::Backend(err.to_string()))
    }
}
