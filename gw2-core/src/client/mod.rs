//! Client facade: configuration plus the request executor and
//! one-or-many addressing that every endpoint method funnels through.

mod account;
mod achievements;
mod commerce;
mod items;
mod mechanics;
mod world;

pub use commerce::{ExchangeDirection, TransactionKind};
pub use world::EmblemLayer;

use serde_json::Value;
use std::collections::BTreeMap;
use std::future::Future;
use std::sync::Arc;
use tracing::{debug, warn};

use gw2_traits::Storage;

use crate::cache::cache_key;
use crate::config::ClientConfig;
use crate::error::{storage_err, ApiError};
use crate::resolver::{resolve_deeper, DEFAULT_BATCH_SIZE};
use crate::selector::{IdSelector, ResourceId};
use crate::transport::{HttpTransport, ReqwestTransport};

/// Storage key reserved for the API key.
const API_KEY_STORAGE_KEY: &str = "apiKey";

/// Statuses accepted as success; 206 is how the API answers partial `ids`
/// matches.
const ACCEPTED_STATUSES: [u16; 2] = [200, 206];

/// Guild Wars 2 API client.
///
/// Holds its own [`ClientConfig`], a [`Storage`] backend for the response
/// cache and the API key, and an [`HttpTransport`]. Cheap to clone; clones
/// share the storage and transport.
#[derive(Clone)]
pub struct Gw2Client {
    config: ClientConfig,
    storage: Arc<dyn Storage>,
    transport: Arc<dyn HttpTransport>,
}

impl Gw2Client {
    /// Creates a client with default configuration and a reqwest-backed
    /// transport.
    pub fn new(storage: Arc<dyn Storage>) -> Result<Self, ApiError> {
        Ok(Self::with_transport(storage, Arc::new(ReqwestTransport::new()?)))
    }

    /// Creates a client over an explicit transport.
    pub fn with_transport(storage: Arc<dyn Storage>, transport: Arc<dyn HttpTransport>) -> Self {
        Self {
            config: ClientConfig::default(),
            storage,
            transport,
        }
    }

    /// Replaces the whole configuration.
    pub fn with_config(mut self, config: ClientConfig) -> Self {
        self.config = config;
        self.config.base_url = self.config.base_url.trim_end_matches('/').to_string();
        self
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn storage(&self) -> &Arc<dyn Storage> {
        &self.storage
    }

    /// Sets the ISO language code sent to endpoints with localized text.
    pub fn set_lang(&mut self, lang: &str) -> &mut Self {
        self.config.lang = lang.to_string();
        self
    }

    pub fn lang(&self) -> &str {
        &self.config.lang
    }

    /// Turns caching on or off. This drives both the read side and the
    /// write side; use [`Gw2Client::set_store_in_cache`] afterwards to
    /// split them.
    pub fn set_cache(&mut self, enabled: bool) -> &mut Self {
        self.config.cache_enabled = enabled;
        self.config.store_writes_enabled = enabled;
        self
    }

    pub fn cache_enabled(&self) -> bool {
        self.config.cache_enabled
    }

    /// Controls only whether successful responses are written to storage.
    /// With caching reads off this keeps the cache warm without serving
    /// from it.
    pub fn set_store_in_cache(&mut self, enabled: bool) -> &mut Self {
        self.config.store_writes_enabled = enabled;
        self
    }

    /// Chooses between `Authorization: Bearer` and the `access_token`
    /// query parameter for authenticated calls.
    pub fn set_use_auth_header(&mut self, use_header: bool) -> &mut Self {
        self.config.use_auth_header = use_header;
        self
    }

    pub fn use_auth_header(&self) -> bool {
        self.config.use_auth_header
    }

    /// Persists the API key in storage under the reserved key. The key is
    /// read back lazily on every authenticated call, never held in memory.
    pub async fn set_api_key(&self, key: &str) -> Result<(), ApiError> {
        self.storage
            .set(API_KEY_STORAGE_KEY, key.as_bytes())
            .await
            .map_err(storage_err)
    }

    pub async fn get_api_key(&self) -> Result<String, ApiError> {
        let raw = self
            .storage
            .get(API_KEY_STORAGE_KEY)
            .await
            .map_err(storage_err)?
            .ok_or(ApiError::MissingApiKey)?;
        String::from_utf8(raw)
            .map_err(|_| ApiError::Storage("stored API key is not valid UTF-8".to_string()))
    }

    /// Executes one API request: cache probe, auth injection, a single
    /// GET, status/JSON validation, then an optional cache write.
    ///
    /// The cache key is derived before the access token is injected, so
    /// credential material never fragments the cache and header-auth and
    /// param-auth calls share entries.
    pub async fn call_api(
        &self,
        endpoint: &str,
        params: &BTreeMap<String, String>,
        requires_auth: bool,
    ) -> Result<Value, ApiError> {
        let key = cache_key(endpoint, params);

        if self.config.cache_enabled {
            if let Some(raw) = self.storage.get(&key).await.map_err(storage_err)? {
                debug!(endpoint, "cache hit");
                return Ok(serde_json::from_slice(&raw)?);
            }
        }

        let mut query: Vec<(String, String)> = params
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();

        let mut bearer = None;
        if requires_auth {
            let token = self.get_api_key().await?;
            if self.config.use_auth_header {
                bearer = Some(token);
            } else {
                query.push(("access_token".to_string(), token));
            }
        }

        let url = format!("{}{}", self.config.base_url, endpoint);
        debug!(endpoint, "dispatching GET");

        let response = self.transport.get(&url, &query, bearer.as_deref()).await?;

        if !ACCEPTED_STATUSES.contains(&response.status) {
            warn!(endpoint, status = response.status, "request failed");
            return Err(ApiError::Status(response.status));
        }

        let value: Value = serde_json::from_slice(&response.body)?;

        if self.config.store_writes_enabled {
            self.storage
                .set(&key, &response.body)
                .await
                .map_err(storage_err)?;
        }

        Ok(value)
    }

    /// Addresses one resource, many, or the full enumeration on a single
    /// endpoint.
    ///
    /// `Many` ids are sorted ascending before joining, so permuted id
    /// lists derive the same cache key and share one cached response.
    pub async fn one_or_many(
        &self,
        endpoint: &str,
        selector: IdSelector,
        requires_auth: bool,
        extra_params: Option<BTreeMap<String, String>>,
    ) -> Result<Value, ApiError> {
        let mut params = extra_params.unwrap_or_default();

        let endpoint = match selector {
            IdSelector::All => endpoint.to_string(),
            IdSelector::One(id) => format!("{endpoint}/{id}"),
            IdSelector::Many(mut ids) => {
                ids.sort();
                let joined = ids
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(",");
                params.insert("ids".to_string(), joined);
                endpoint.to_string()
            }
        };

        self.call_api(&endpoint, &params, requires_auth).await
    }

    /// Pipes an array response through the deep info resolver.
    async fn translate<F, Fut>(&self, value: Value, lookup: F) -> Result<Value, ApiError>
    where
        F: Fn(Vec<ResourceId>) -> Fut,
        Fut: Future<Output = Result<Value, ApiError>>,
    {
        let items = match value {
            Value::Array(items) => items,
            _ => {
                return Err(ApiError::Usage(
                    "auto-translate expects a JSON array response".to_string(),
                ))
            }
        };

        let resolved = resolve_deeper(lookup, items, DEFAULT_BATCH_SIZE).await?;
        Ok(Value::Array(resolved))
    }

    pub(crate) fn lang_params(&self) -> BTreeMap<String, String> {
        let mut params = BTreeMap::new();
        params.insert("lang".to_string(), self.config.lang.clone());
        params
    }
}
