use async_trait::async_trait;
use gw2_traits::Storage;
use std::error::Error;
use std::sync::RwLock;

/// In-memory storage backend.
///
/// The default choice for short-lived clients and tests; cached responses
/// live only as long as the process.
pub struct MemoryStorage {
    data: RwLock<std::collections::HashMap<String, Vec<u8>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self {
            data: RwLock::new(std::collections::HashMap::new()),
        }
    }
}

impl Default for MemoryStorage {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Storage for MemoryStorage {
    fn name(&self) -> &str {
        "memory"
    }

    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, Box<dyn Error + Send + Sync>> {
        let data = self.data.read().unwrap();
        Ok(data.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &[u8]) -> Result<(), Box<dyn Error + Send + Sync>> {
        let mut data = self.data.write().unwrap();
        data.insert(key.to_string(), value.to_vec());
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<bool, Box<dyn Error + Send + Sync>> {
        let mut data = self.data.write().unwrap();
        Ok(data.remove(key).is_some())
    }

    async fn exists(&self, key: &str) -> Result<bool, Box<dyn Error + Send + Sync>> {
        let data = self.data.read().unwrap();
        Ok(data.contains_key(key))
    }

    async fn health_check(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn set_then_get_round_trips() {
        let storage = MemoryStorage::new();
        storage.set("apiKey", b"token-123").await.unwrap();

        assert_eq!(storage.get("apiKey").await.unwrap(), Some(b"token-123".to_vec()));
        assert!(storage.exists("apiKey").await.unwrap());
        assert_eq!(storage.get("missing").await.unwrap(), None);
    }

    #[tokio::test]
    async fn set_overwrites_existing_value() {
        let storage = MemoryStorage::new();
        storage.set("k", b"old").await.unwrap();
        storage.set("k", b"new").await.unwrap();

        assert_eq!(storage.get("k").await.unwrap(), Some(b"new".to_vec()));
    }

    #[tokio::test]
    async fn delete_removes_entry() {
        let storage = MemoryStorage::new();
        storage.set("k", b"v").await.unwrap();

        assert!(storage.delete("k").await.unwrap());
        assert!(!storage.delete("k").await.unwrap());
        assert_eq!(storage.get("k").await.unwrap(), None);
    }
}
