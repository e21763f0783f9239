//! Item-family endpoints: items, skins, dyes, materials, minis, recipes,
//! currencies, finishers. None of these require auth.

use serde_json::Value;
use std::collections::BTreeMap;

use crate::error::ApiError;
use crate::selector::IdSelector;

use super::Gw2Client;

impl Gw2Client {
    /// Gets items; [`IdSelector::All`] enumerates every item id.
    pub async fn get_items(&self, selector: IdSelector) -> Result<Value, ApiError> {
        self.one_or_many("/items", selector, false, None).await
    }

    /// Gets item skins.
    pub async fn get_skins(&self, selector: IdSelector) -> Result<Value, ApiError> {
        self.one_or_many("/skins", selector, false, None).await
    }

    /// Gets dye colors.
    pub async fn get_colors(&self, selector: IdSelector) -> Result<Value, ApiError> {
        self.one_or_many("/colors", selector, false, None).await
    }

    /// Gets crafting materials.
    pub async fn get_materials(&self, selector: IdSelector) -> Result<Value, ApiError> {
        self.one_or_many("/materials", selector, false, None).await
    }

    /// Gets minis.
    pub async fn get_minis(&self, selector: IdSelector) -> Result<Value, ApiError> {
        self.one_or_many("/minis", selector, false, None).await
    }

    /// Gets recipes.
    pub async fn get_recipes(&self, selector: IdSelector) -> Result<Value, ApiError> {
        self.one_or_many("/recipes", selector, false, None).await
    }

    /// Gets wallet currencies.
    pub async fn get_currencies(&self, selector: IdSelector) -> Result<Value, ApiError> {
        self.one_or_many("/currencies", selector, false, None).await
    }

    /// Gets finishers.
    pub async fn get_finishers(&self, selector: IdSelector) -> Result<Value, ApiError> {
        self.one_or_many("/finishers", selector, false, None).await
    }

    /// Searches recipes by ingredient or by product. The two selectors are
    /// mutually exclusive; supplying both is a usage error raised before
    /// any network call.
    pub async fn search_recipes(
        &self,
        input_item: Option<i64>,
        output_item: Option<i64>,
    ) -> Result<Value, ApiError> {
        if input_item.is_some() && output_item.is_some() {
            return Err(ApiError::Usage(
                "input_item and output_item are mutually exclusive options".to_string(),
            ));
        }

        let mut params = BTreeMap::new();
        if let Some(input) = input_item {
            params.insert("input".to_string(), input.to_string());
        }
        if let Some(output) = output_item {
            params.insert("output".to_string(), output.to_string());
        }

        self.call_api("/recipes/search", &params, false).await
    }
}
