use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;
use serde::{Serialize, de::DeserializeOwned};

use crate::store::{Error, RecordStore, decode_record, encode_record, validate_key};

/// An in-memory record store.
///
/// Records go through the same JSON encode/decode path as
/// [`FileStore`](super::FileStore), so tests against it exercise the
/// serialization contract without touching the filesystem.
///
/// ### Note
///
/// Nothing is persisted. Do not use this in a production environment.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    data: Arc<RwLock<HashMap<String, Vec<u8>>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RecordStore for MemoryStore {
    async fn get<T>(&self, key: &str) -> Result<Option<T>, Error>
    where
        T: Send + Sync + DeserializeOwned,
    {
        validate_key(key)?;
        let data = self.data.read();
        match data.get(key) {
            Some(bytes) => Ok(Some(decode_record(bytes)?)),
            None => Ok(None),
        }
    }

    async fn set<T>(&self, key: &str, record: &T) -> Result<(), Error>
    where
        T: Send + Sync + Serialize,
    {
        validate_key(key)?;
        let bytes = encode_record(record)?;
        self.data.write().insert(key.to_string(), bytes);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
    struct TestUser {
        id: i32,
        name: String,
    }

    #[tokio::test]
    async fn test_basic_operations() {
        let store = MemoryStore::new();
        let user = TestUser {
            id: 1,
            name: "Test User".to_string(),
        };

        let absent: Option<TestUser> = store.get("user").await.unwrap();
        assert!(absent.is_none());

        store.set("user", &user).await.unwrap();
        let retrieved: Option<TestUser> = store.get("user").await.unwrap();
        assert_eq!(retrieved.unwrap(), user);

        let updated_user = TestUser {
            id: 1,
            name: "Updated User".to_string(),
        };
        store.set("user", &updated_user).await.unwrap();
        let retrieved: Option<TestUser> = store.get("user").await.unwrap();
        assert_eq!(retrieved.unwrap(), updated_user);
    }
}
