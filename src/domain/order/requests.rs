use crate::domain::order::context::{EntryKind, OrderContext};
use serde::Serialize;

/// Body of the PUT issued after a marker drag commit. Starts from the
/// context's current values; the commit overwrites the dragged field and
/// the recomputed point distances.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceUpdateRequest {
    pub entry_price: f64,
    pub stop_loss_premium: f64,
    pub take_profit_premium: f64,
    pub stop_loss_points: f64,
    pub take_profit_points: f64,
}

impl PriceUpdateRequest {
    pub fn from_context(ctx: &OrderContext) -> Self {
        Self {
            entry_price: ctx.entry_price.value(),
            stop_loss_premium: ctx.stop_loss_premium.value(),
            take_profit_premium: ctx.take_profit_premium.value(),
            stop_loss_points: ctx.stop_loss_points,
            take_profit_points: ctx.take_profit_points,
        }
    }
}

/// Market placement carries point distances instead of absolute premiums.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketOrderRequest {
    pub entry_type: EntryKind,
    pub stop_loss_points: f64,
    pub take_profit_points: f64,
    pub qty: u32,
}

/// Limit placement bundles all three marker prices plus the recomputed
/// point distances.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LimitOrderRequest {
    pub entry_type: EntryKind,
    pub entry_price: f64,
    pub stop_loss_premium: f64,
    pub take_profit_premium: f64,
    pub stop_loss_points: f64,
    pub take_profit_points: f64,
    pub qty: u32,
}

/// Union of the outbound bodies accepted by the order resource.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum OrderRequest {
    PriceUpdate(PriceUpdateRequest),
    PlaceMarket(MarketOrderRequest),
    PlaceLimit(LimitOrderRequest),
}
