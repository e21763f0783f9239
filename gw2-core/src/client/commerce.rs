//! Trading post endpoints.

use serde_json::Value;
use std::collections::BTreeMap;

use crate::error::ApiError;
use crate::selector::IdSelector;

use super::Gw2Client;

/// Which side of a trading post transaction to list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionKind {
    Buys,
    Sells,
}

impl TransactionKind {
    fn as_str(self) -> &'static str {
        match self {
            TransactionKind::Buys => "buys",
            TransactionKind::Sells => "sells",
        }
    }
}

/// Direction of a gem exchange quote.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExchangeDirection {
    /// Gold cost to buy gems.
    Gems,
    /// Gem price for coins.
    Coins,
}

impl ExchangeDirection {
    fn as_str(self) -> &'static str {
        match self {
            ExchangeDirection::Gems => "gems",
            ExchangeDirection::Coins => "coins",
        }
    }
}

impl Gw2Client {
    /// Lists the account's trading post transactions: in-flight ones when
    /// `current` is true, the fulfilled history otherwise.
    pub async fn get_commerce_transactions(
        &self,
        current: bool,
        kind: TransactionKind,
    ) -> Result<Value, ApiError> {
        let window = if current { "current" } else { "history" };
        let endpoint = format!("/commerce/transactions/{}/{}", window, kind.as_str());
        self.call_api(&endpoint, &BTreeMap::new(), true).await
    }

    /// Gets buy/sell listings per item.
    pub async fn get_commerce_listings(&self, selector: IdSelector) -> Result<Value, ApiError> {
        self.one_or_many("/commerce/listings", selector, false, None)
            .await
    }

    /// Quotes the gem exchange. `quantity` is the amount of coins or gems
    /// to convert and must be large enough to buy at least one unit of the
    /// other currency.
    pub async fn get_commerce_exchange(
        &self,
        direction: ExchangeDirection,
        quantity: i64,
    ) -> Result<Value, ApiError> {
        let endpoint = format!("/commerce/exchange/{}", direction.as_str());
        let mut params = BTreeMap::new();
        params.insert("quantity".to_string(), quantity.to_string());
        self.call_api(&endpoint, &params, false).await
    }
}
