//! # gw2-core
//!
//! Client-side request/cache layer for the Guild Wars 2 HTTP API.
//!
//! The engine translates high-level resource lookups into a minimal set of
//! HTTP GETs: responses are cached in a pluggable [`gw2_traits::Storage`]
//! backend under a deterministic key, single-or-many id arguments map onto
//! the API's `/{id}` and `?ids=` addressing convention, and shallow
//! reference lists (bare ids or partially-populated objects) can be
//! resolved into full objects through chunked parallel lookups.
//!
//! ## Example
//!
//! ```no_run
//! use gw2_core::{Gw2Client, IdSelector};
//! use gw2_storage::MemoryStorage;
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), gw2_core::ApiError> {
//! let client = Gw2Client::new(Arc::new(MemoryStorage::new()))?;
//!
//! // One request: /items?ids=15,411
//! let items = client.get_items(IdSelector::many([411, 15])).await?;
//! println!("{items}");
//! # Ok(())
//! # }
//! ```

pub mod cache;
pub mod client;
pub mod config;
pub mod error;
pub mod resolver;
pub mod selector;
pub mod transport;

pub use cache::cache_key;
pub use client::{EmblemLayer, ExchangeDirection, Gw2Client, TransactionKind};
pub use config::ClientConfig;
pub use error::ApiError;
pub use resolver::{resolve_deeper, DEFAULT_BATCH_SIZE};
pub use selector::{IdSelector, ResourceId};
pub use transport::{HttpResponse, HttpTransport, ReqwestTransport};
