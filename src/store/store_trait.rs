use serde::{Serialize, de::DeserializeOwned};

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("store init failed: {0}")]
    Init(String),

    #[error("invalid store key: {0:?}")]
    InvalidKey(String),

    #[error("Encoding failed with: {0}")]
    Encode(String),

    #[error("Decoding failed with: {0}")]
    Decode(String),

    #[error("{0}")]
    Backend(String),
}

pub(crate) fn encode_record<T: Serialize>(record: &T) -> Result<Vec<u8>, Error> {
    serde_json::to_vec(record).map_err(|e| Error::Encode(e.to_string()))
}

pub(crate) fn decode_record<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, Error> {
    serde_json::from_slice(bytes).map_err(|e| Error::Decode(e.to_string()))
}

/// Shared key contract for every store implementation.
///
/// Keys are restricted to `[A-Za-z0-9._-]`, non-empty, at most 255 bytes,
/// with no leading dot, so a key can never name a file outside a file-backed
/// store's directory. The same rule applies to non-file stores to keep
/// behavior uniform across backends.
pub(crate) fn validate_key(key: &str) -> Result<(), Error> {
    let valid = !key.is_empty()
        && key.len() <= 255
        && !key.starts_with('.')
        && key
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || matches!(b, b'.' | b'_' | b'-'));
    if valid {
        Ok(())
    } else {
        Err(Error::InvalidKey(key.to_string()))
    }
}

/// A durable mapping from string keys to typed records.
///
/// One store instance owns one namespace. The user and session stores behind
/// [`AuthGate`](crate::AuthGate) are two separate instances and never share
/// keys.
pub trait RecordStore: Clone + Send + Sync + 'static {
    /// Gets the record stored at `key`.
    ///
    /// `Ok(None)` means no record has ever been written under `key`. A record
    /// that exists but cannot be decoded is an [`Error::Decode`], never
    /// `None`.
    fn get<T>(&self, key: &str) -> impl Future<Output = Result<Option<T>, Error>> + Send
    where
        T: Send + Sync + DeserializeOwned;

    /// Sets `key` to `record`, fully replacing any previous record.
    ///
    /// There is no partial write at this granularity; a concurrent `set` on
    /// the same key races and the later write wins.
    fn set<T>(&self, key: &str, record: &T) -> impl Future<Output = Result<(), Error>> + Send
    where
        T: Send + Sync + Serialize;
}
