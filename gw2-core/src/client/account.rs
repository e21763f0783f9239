//! Account-bound endpoints. Everything here requires an API key.

use serde_json::Value;
use std::collections::BTreeMap;

use crate::error::ApiError;
use crate::selector::IdSelector;

use super::Gw2Client;

impl Gw2Client {
    /// Gets account information.
    pub async fn get_account(&self) -> Result<Value, ApiError> {
        self.call_api("/account", &BTreeMap::new(), true).await
    }

    /// Gets info about the stored token: its name and granted permissions.
    pub async fn get_token_info(&self) -> Result<Value, ApiError> {
        self.call_api("/tokeninfo", &BTreeMap::new(), true).await
    }

    /// Lists the account's characters, or one character's details when a
    /// name is given.
    pub async fn get_characters(&self, character_name: Option<&str>) -> Result<Value, ApiError> {
        let endpoint = match character_name {
            Some(name) => format!("/characters/{name}"),
            None => "/characters".to_string(),
        };
        self.call_api(&endpoint, &BTreeMap::new(), true).await
    }

    /// Gets the account wallet. With `translate_currencies`, each entry is
    /// extended with the full currency record from `/currencies`.
    pub async fn get_wallet(&self, translate_currencies: bool) -> Result<Value, ApiError> {
        let wallet = self.call_api("/account/wallet", &BTreeMap::new(), true).await?;

        if !translate_currencies {
            return Ok(wallet);
        }

        self.translate(wallet, |ids| self.get_currencies(IdSelector::Many(ids)))
            .await
    }

    /// Gets account achievement progress; with `auto_translate` each entry
    /// is joined with its `/achievements` record.
    pub async fn get_account_achievements(&self, auto_translate: bool) -> Result<Value, ApiError> {
        let progress = self
            .call_api("/account/achievements", &BTreeMap::new(), true)
            .await?;

        if !auto_translate {
            return Ok(progress);
        }

        self.translate(progress, |ids| self.get_achievements(IdSelector::Many(ids)))
            .await
    }

    /// Gets the account bank. Empty slots come back as nulls and stay in
    /// place through translation.
    pub async fn get_account_bank(&self, auto_translate: bool) -> Result<Value, ApiError> {
        let bank = self.call_api("/account/bank", &BTreeMap::new(), true).await?;

        if !auto_translate {
            return Ok(bank);
        }

        self.translate(bank, |ids| self.get_items(IdSelector::Many(ids)))
            .await
    }

    /// Gets the account's unlocked dyes.
    pub async fn get_account_dyes(&self, auto_translate: bool) -> Result<Value, ApiError> {
        let dyes = self.call_api("/account/dyes", &BTreeMap::new(), true).await?;

        if !auto_translate {
            return Ok(dyes);
        }

        self.translate(dyes, |ids| self.get_colors(IdSelector::Many(ids)))
            .await
    }

    /// Gets the account's material storage.
    pub async fn get_account_materials(&self, auto_translate: bool) -> Result<Value, ApiError> {
        let materials = self
            .call_api("/account/materials", &BTreeMap::new(), true)
            .await?;

        if !auto_translate {
            return Ok(materials);
        }

        self.translate(materials, |ids| self.get_items(IdSelector::Many(ids)))
            .await
    }

    /// Gets the account's mastery progress.
    pub async fn get_account_masteries(&self, auto_translate: bool) -> Result<Value, ApiError> {
        let masteries = self
            .call_api("/account/masteries", &BTreeMap::new(), true)
            .await?;

        if !auto_translate {
            return Ok(masteries);
        }

        self.translate(masteries, |ids| self.get_masteries(IdSelector::Many(ids)))
            .await
    }

    /// Gets the account's unlocked finishers.
    pub async fn get_account_finishers(&self, auto_translate: bool) -> Result<Value, ApiError> {
        let finishers = self
            .call_api("/account/finishers", &BTreeMap::new(), true)
            .await?;

        if !auto_translate {
            return Ok(finishers);
        }

        self.translate(finishers, |ids| self.get_finishers(IdSelector::Many(ids)))
            .await
    }

    /// Gets the account's unlocked minis.
    pub async fn get_account_minis(&self, auto_translate: bool) -> Result<Value, ApiError> {
        let minis = self.call_api("/account/minis", &BTreeMap::new(), true).await?;

        if !auto_translate {
            return Ok(minis);
        }

        self.translate(minis, |ids| self.get_minis(IdSelector::Many(ids)))
            .await
    }

    /// Gets the account's unlocked skins.
    pub async fn get_account_skins(&self, auto_translate: bool) -> Result<Value, ApiError> {
        let skins = self.call_api("/account/skins", &BTreeMap::new(), true).await?;

        if !auto_translate {
            return Ok(skins);
        }

        self.translate(skins, |ids| self.get_skins(IdSelector::Many(ids)))
            .await
    }

    /// Gets the world bosses the account has defeated this reset period.
    pub async fn get_account_worldbosses(&self, auto_translate: bool) -> Result<Value, ApiError> {
        let bosses = self
            .call_api("/account/worldbosses", &BTreeMap::new(), true)
            .await?;

        if !auto_translate {
            return Ok(bosses);
        }

        self.translate(bosses, |ids| self.get_worldbosses(IdSelector::Many(ids)))
            .await
    }
}
