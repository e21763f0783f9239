pub mod error;
pub mod memory;
pub mod sqlite;

pub use error::StorageError;
pub use memory::MemoryStorage;
pub use sqlite::SqliteStorage;
