use crate::domain::market_data::Price;
use derive_more::{Deref, Display, From, Into};
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, EnumIter, EnumString};

/// Value Object - trade identifier the order resource is addressed by.
#[derive(Debug, Clone, PartialEq, Eq, Hash, From, Into, Deref, Display, Serialize, Deserialize)]
#[display(fmt = "TradeId({})", _0)]
pub struct TradeId(String);

impl TradeId {
    pub fn value(&self) -> &str {
        &self.0
    }
}

impl From<&str> for TradeId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Value Object - position direction.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, EnumIter, EnumString, AsRefStr, Serialize, Deserialize,
)]
pub enum Side {
    #[strum(serialize = "LONG", serialize = "BUY")]
    #[serde(rename = "BUY")]
    Long,
    #[strum(serialize = "SHORT", serialize = "SELL")]
    #[serde(rename = "SELL")]
    Short,
}

/// Value Object - entry order flavor, as the order service carries it.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, EnumIter, EnumString, AsRefStr, Serialize, Deserialize,
)]
pub enum EntryKind {
    #[strum(serialize = "UNDEFINED")]
    #[serde(rename = "UNDEFINED")]
    Undefined,
    #[strum(serialize = "LIMIT")]
    #[serde(rename = "LIMIT")]
    Limit,
    #[strum(serialize = "MARKET")]
    #[serde(rename = "MARKET")]
    Market,
}

/// Read model of the order's current state, owned by the external trade
/// layer and replaced wholesale on its cadence. The engine never mutates it;
/// changes are requested through the sync gateway only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderContext {
    pub side: Side,
    pub entry_kind: EntryKind,
    pub triggered: bool,
    pub entry_price: Price,
    pub stop_loss_premium: Price,
    pub take_profit_premium: Price,
    pub stop_loss_points: f64,
    pub take_profit_points: f64,
}

impl OrderContext {
    /// A context with no order placed yet.
    pub fn undefined(side: Side) -> Self {
        Self {
            side,
            entry_kind: EntryKind::Undefined,
            triggered: false,
            entry_price: Price::from(0.0),
            stop_loss_premium: Price::from(0.0),
            take_profit_premium: Price::from(0.0),
            stop_loss_points: 0.0,
            take_profit_points: 0.0,
        }
    }

    pub fn is_live(&self) -> bool {
        self.triggered && matches!(self.entry_kind, EntryKind::Limit | EntryKind::Market)
    }
}
