//! World, pvp/wvw, guild, and miscellaneous endpoints.

use serde_json::Value;
use std::collections::BTreeMap;

use crate::error::ApiError;
use crate::selector::IdSelector;

use super::Gw2Client;

/// Which emblem asset layer to fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmblemLayer {
    Foregrounds,
    Backgrounds,
}

impl EmblemLayer {
    fn as_str(self) -> &'static str {
        match self {
            EmblemLayer::Foregrounds => "foregrounds",
            EmblemLayer::Backgrounds => "backgrounds",
        }
    }
}

impl Gw2Client {
    /// Gets world bosses.
    pub async fn get_worldbosses(&self, selector: IdSelector) -> Result<Value, ApiError> {
        self.one_or_many("/worldbosses", selector, false, None).await
    }

    /// Gets the continent list.
    pub async fn get_continents(&self) -> Result<Value, ApiError> {
        self.call_api("/continents", &BTreeMap::new(), false).await
    }

    /// Gets the current game build id.
    pub async fn get_build_id(&self) -> Result<Value, ApiError> {
        self.call_api("/build", &BTreeMap::new(), false).await
    }

    /// Gets commonly requested asset files; ids are strings.
    pub async fn get_files(&self, selector: IdSelector) -> Result<Value, ApiError> {
        self.one_or_many("/files", selector, false, None).await
    }

    /// Quaggans!
    pub async fn get_quaggans(&self, selector: IdSelector) -> Result<Value, ApiError> {
        self.one_or_many("/quaggans", selector, false, None).await
    }

    /// Gets the assets needed to render guild emblems.
    pub async fn get_emblems(
        &self,
        layer: EmblemLayer,
        selector: IdSelector,
    ) -> Result<Value, ApiError> {
        let endpoint = format!("/emblem/{}", layer.as_str());
        self.one_or_many(&endpoint, selector, true, None).await
    }

    /// Gets guild permission descriptions; ids are strings.
    pub async fn get_guild_permissions(&self, selector: IdSelector) -> Result<Value, ApiError> {
        self.one_or_many("/guild/permissions", selector, true, None)
            .await
    }

    /// Gets guild upgrade descriptions.
    pub async fn get_guild_upgrades(&self, selector: IdSelector) -> Result<Value, ApiError> {
        self.one_or_many("/guild/upgrades", selector, true, None)
            .await
    }

    /// Gets overall account pvp statistics.
    pub async fn get_pvp_stats(&self) -> Result<Value, ApiError> {
        self.call_api("/pvp/stats", &BTreeMap::new(), true).await
    }

    /// Gets pvp game details; game ids are uuids.
    pub async fn get_pvp_games(&self, selector: IdSelector) -> Result<Value, ApiError> {
        self.one_or_many("/pvp/games", selector, true, None).await
    }

    /// Gets wvw matches involving `world_id`.
    pub async fn get_wvw_matches(
        &self,
        world_id: i64,
        selector: IdSelector,
    ) -> Result<Value, ApiError> {
        let mut params = BTreeMap::new();
        params.insert("world".to_string(), world_id.to_string());
        self.one_or_many("/wvw/matches", selector, false, Some(params))
            .await
    }

    /// Gets wvw objectives; ids are strings like `"968-98"`.
    pub async fn get_wvw_objectives(&self, selector: IdSelector) -> Result<Value, ApiError> {
        self.one_or_many("/wvw/objectives", selector, true, None)
            .await
    }
}
