/// Configuration owned by a [`crate::Gw2Client`] instance.
///
/// Every client carries its own value; there is no shared or static state,
/// so clients with different cache or auth settings coexist safely.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Versioned API root, without a trailing slash.
    pub base_url: String,
    /// ISO language code sent to endpoints with localized text.
    pub lang: String,
    /// Serve responses from storage when a cached body exists.
    pub cache_enabled: bool,
    /// Write successful response bodies into storage. Independent from
    /// `cache_enabled`: a result can be stored without being served from
    /// cache.
    pub store_writes_enabled: bool,
    /// Present the API key as an `Authorization: Bearer` header instead of
    /// an `access_token` query parameter. Browsers typically need the
    /// query-parameter form because the API does not answer OPTIONS.
    pub use_auth_header: bool,
}

pub const DEFAULT_BASE_URL: &str = "https://api.guildwars2.com/v2";

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            lang: "en".to_string(),
            cache_enabled: true,
            store_writes_enabled: true,
            use_auth_header: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_remote_api_conventions() {
        let config = ClientConfig::default();

        assert_eq!(config.base_url, "https://api.guildwars2.com/v2");
        assert_eq!(config.lang, "en");
        assert!(config.cache_enabled);
        assert!(config.store_writes_enabled);
        assert!(!config.use_auth_header);
    }
}
