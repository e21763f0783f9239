//! Achievement endpoints. These carry localized text, so the configured
//! language participates in the request (and therefore in the cache key).

use futures::future::try_join_all;
use serde_json::{Map, Value};

use crate::error::ApiError;
use crate::resolver::{resolve_deeper, DEFAULT_BATCH_SIZE};
use crate::selector::IdSelector;

use super::Gw2Client;

impl Gw2Client {
    /// Gets achievements; [`IdSelector::All`] enumerates every id.
    pub async fn get_achievements(&self, selector: IdSelector) -> Result<Value, ApiError> {
        self.one_or_many("/achievements", selector, false, Some(self.lang_params()))
            .await
    }

    /// Gets achievement groups ("Heart of Thorns" etc.); ids are guids.
    pub async fn get_achievement_groups(&self, selector: IdSelector) -> Result<Value, ApiError> {
        self.one_or_many("/achievements/groups", selector, false, None)
            .await
    }

    /// Gets achievement categories ("Slayer" etc.).
    pub async fn get_achievement_categories(
        &self,
        selector: IdSelector,
    ) -> Result<Value, ApiError> {
        self.one_or_many("/achievements/categories", selector, false, None)
            .await
    }

    /// Gets today's daily achievements, keyed by game mode (pve, pvp, wvw,
    /// special). With `auto_translate`, each mode's shallow entries are
    /// resolved against `/achievements` and the keyed shape is preserved.
    pub async fn get_daily_achievements(&self, auto_translate: bool) -> Result<Value, ApiError> {
        let daily = self
            .call_api("/achievements/daily", &self.lang_params(), false)
            .await?;

        if !auto_translate {
            return Ok(daily);
        }

        let categories = match daily {
            Value::Object(map) => map,
            _ => {
                return Err(ApiError::Usage(
                    "daily achievements response is not a JSON object".to_string(),
                ))
            }
        };

        let resolutions = categories.into_iter().map(|(mode, entries)| async move {
            let entries = match entries {
                Value::Array(entries) => entries,
                other => return Ok((mode, other)),
            };
            let resolved = resolve_deeper(
                |ids| self.get_achievements(IdSelector::Many(ids)),
                entries,
                DEFAULT_BATCH_SIZE,
            )
            .await?;
            Ok::<_, ApiError>((mode, Value::Array(resolved)))
        });

        let resolved: Map<String, Value> = try_join_all(resolutions).await?.into_iter().collect();

        Ok(Value::Object(resolved))
    }
}
