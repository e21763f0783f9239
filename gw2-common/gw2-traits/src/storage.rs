use async_trait::async_trait;
use std::error::Error;

/// Key-value backend used by the API client for cached responses and the
/// stored API key.
///
/// Entries have no TTL and are never evicted by the client; a cached
/// response stays valid until it is overwritten by a newer body under the
/// same key. Implementations must tolerate concurrent reads, and concurrent
/// writes to the same key are last-write-wins.
#[async_trait]
pub trait Storage: Send + Sync {
    fn name(&self) -> &str;

    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, Box<dyn Error + Send + Sync>>;
    async fn set(&self, key: &str, value: &[u8]) -> Result<(), Box<dyn Error + Send + Sync>>;
    async fn delete(&self, key: &str) -> Result<bool, Box<dyn Error + Send + Sync>>;
    async fn exists(&self, key: &str) -> Result<bool, Box<dyn Error + Send + Sync>>;

    async fn health_check(&self) -> bool;
}
