use crate::domain::chart::markers::{MarkerKind, MarkerSet};
use crate::domain::errors::{AppError, SyncResult};
use crate::domain::logging::LogComponent;
use crate::domain::market_data::Price;
use crate::domain::order::{
    EntryKind, LimitOrderRequest, MarketOrderRequest, OrderContext, OrderRequest, OrderTransport,
    PriceUpdateRequest, Side, TradeId, UserNotifier,
};
use crate::{log_debug, log_error, log_warn};
use std::collections::HashMap;
use strum::IntoEnumIterator;

/// Session-level order ticket: quantity, flavor and the default protective
/// distances used for market placement.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderTicket {
    pub qty: u32,
    pub entry_kind: EntryKind,
    pub stop_loss_points: f64,
    pub take_profit_points: f64,
}

impl Default for OrderTicket {
    fn default() -> Self {
        Self { qty: 1, entry_kind: EntryKind::Market, stop_loss_points: 5.0, take_profit_points: 5.0 }
    }
}

/// Result of one flushed commit.
#[derive(Debug)]
pub struct CommitOutcome {
    pub kind: MarkerKind,
    pub result: SyncResult<()>,
}

#[derive(Debug, Clone, Copy)]
struct PendingCommit {
    price: Price,
    deadline_ms: u64,
}

/// Translates committed marker prices and explicit order actions into
/// validated requests against the trade's order resource.
///
/// Drag commits pass through a per-kind debounce slot: queueing a newer
/// price for the same kind overwrites the slot and restarts its deadline,
/// so a burst of commits produces at most one request carrying the last
/// price. Validation runs when the slot becomes due, against the context
/// current at that moment, and fails closed.
pub struct OrderSyncGateway {
    trade_id: TradeId,
    debounce_ms: u64,
    pending: HashMap<MarkerKind, PendingCommit>,
    transport: Box<dyn OrderTransport>,
    notifier: Box<dyn UserNotifier>,
}

impl OrderSyncGateway {
    pub fn new(
        trade_id: TradeId,
        debounce_ms: u64,
        transport: Box<dyn OrderTransport>,
        notifier: Box<dyn UserNotifier>,
    ) -> Self {
        Self { trade_id, debounce_ms, pending: HashMap::new(), transport, notifier }
    }

    pub fn trade_id(&self) -> &TradeId {
        &self.trade_id
    }

    /// Address a different trade. Pending commits for the old one are
    /// dropped, never replayed against the new resource.
    pub fn retarget(&mut self, trade_id: TradeId) {
        self.cancel_all();
        self.trade_id = trade_id;
    }

    /// Queue a drag commit. Returns false when the price is not a finite
    /// number (scale not initialized yet), in which case nothing is queued.
    pub fn queue_commit(&mut self, kind: MarkerKind, price: Price, now_ms: u64) -> bool {
        if !price.is_finite() {
            log_warn!(
                LogComponent::Application("OrderSync"),
                "dropping {} commit with non-finite price",
                kind.as_ref()
            );
            return false;
        }

        self.pending
            .insert(kind, PendingCommit { price, deadline_ms: now_ms + self.debounce_ms });
        true
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Flush every due debounce slot. At most one request per kind leaves
    /// per cycle.
    pub fn poll(&mut self, now_ms: u64, ctx: &OrderContext) -> Vec<CommitOutcome> {
        let mut outcomes = Vec::new();

        for kind in MarkerKind::iter() {
            let due = matches!(self.pending.get(&kind), Some(slot) if slot.deadline_ms <= now_ms);
            if !due {
                continue;
            }
            if let Some(slot) = self.pending.remove(&kind) {
                let result = self.send_commit(kind, slot.price, ctx);
                outcomes.push(CommitOutcome { kind, result });
            }
        }

        outcomes
    }

    /// Drop all pending slots without sending. Called on detach and
    /// instrument switch.
    pub fn cancel_all(&mut self) {
        if !self.pending.is_empty() {
            log_debug!(
                LogComponent::Application("OrderSync"),
                "cancelling {} pending commit(s)",
                self.pending.len()
            );
        }
        self.pending.clear();
    }

    fn send_commit(&mut self, kind: MarkerKind, price: Price, ctx: &OrderContext) -> SyncResult<()> {
        let request = match build_price_update(ctx, kind, price) {
            Ok(request) => request,
            Err(err) => {
                if let AppError::Validation(reason) = &err {
                    self.notifier.error(reason);
                }
                log_warn!(
                    LogComponent::Application("OrderSync"),
                    "{} commit rejected: {}",
                    kind.as_ref(),
                    err
                );
                return Err(err);
            }
        };

        match self.transport.send(&self.trade_id, &OrderRequest::PriceUpdate(request)) {
            Ok(()) => {
                self.notifier.success(&format!("{} price updated", kind.label()));
                Ok(())
            }
            Err(err) => {
                // No retry and no revert; the next context refresh reconciles
                // the marker with the server.
                self.notifier.error("Error updating price");
                log_error!(
                    LogComponent::Application("OrderSync"),
                    "{} update failed: {}",
                    kind.as_ref(),
                    err
                );
                Err(err)
            }
        }
    }

    /// Explicit "place order" action. Bundles the ticket with the current
    /// marker prices and sends immediately, bypassing the debounce.
    pub fn place_order(
        &mut self,
        ctx: &OrderContext,
        ticket: &OrderTicket,
        markers: &MarkerSet,
    ) -> SyncResult<()> {
        if ticket.qty == 0 {
            self.notifier.warning("Qty is required");
            return Err(AppError::Validation("qty is required".to_string()));
        }

        let request = match ticket.entry_kind {
            EntryKind::Market => OrderRequest::PlaceMarket(MarketOrderRequest {
                entry_type: EntryKind::Market,
                stop_loss_points: ticket.stop_loss_points,
                take_profit_points: ticket.take_profit_points,
                qty: ticket.qty,
            }),
            EntryKind::Limit => OrderRequest::PlaceLimit(self.build_limit_order(ctx, ticket, markers)?),
            EntryKind::Undefined => {
                return Err(AppError::Input("order ticket has no entry kind".to_string()))
            }
        };

        match self.transport.send(&self.trade_id, &request) {
            Ok(()) => {
                self.notifier.success("Order placed successfully");
                Ok(())
            }
            Err(err) => {
                self.notifier.error("Error placing order");
                log_error!(LogComponent::Application("OrderSync"), "place order failed: {}", err);
                Err(err)
            }
        }
    }

    fn build_limit_order(
        &self,
        ctx: &OrderContext,
        ticket: &OrderTicket,
        markers: &MarkerSet,
    ) -> SyncResult<LimitOrderRequest> {
        let (Some(limit), Some(sl), Some(tp)) = (
            markers.get(MarkerKind::Limit),
            markers.get(MarkerKind::StopLoss),
            markers.get(MarkerKind::TakeProfit),
        ) else {
            log_debug!(
                LogComponent::Application("OrderSync"),
                "limit placement skipped, marker prices incomplete"
            );
            return Err(AppError::Input("limit order needs all three marker prices".to_string()));
        };

        let (sl_points, tp_points) = match ctx.side {
            Side::Long => {
                if tp <= limit {
                    return Err(self
                        .warn_validation("take profit cannot be less than the limit price"));
                }
                if sl >= limit {
                    return Err(self
                        .warn_validation("stop loss cannot be greater than the limit price"));
                }
                (limit.value() - sl.value(), tp.value() - limit.value())
            }
            Side::Short => {
                if tp >= limit {
                    return Err(self
                        .warn_validation("take profit cannot be greater than the limit price"));
                }
                if sl <= limit {
                    return Err(self
                        .warn_validation("stop loss cannot be less than the limit price"));
                }
                (sl.value() - limit.value(), limit.value() - tp.value())
            }
        };

        Ok(LimitOrderRequest {
            entry_type: EntryKind::Limit,
            entry_price: limit.round2(),
            stop_loss_premium: sl.round2(),
            take_profit_premium: tp.round2(),
            stop_loss_points: round2(sl_points),
            take_profit_points: round2(tp_points),
            qty: ticket.qty,
        })
    }

    fn warn_validation(&self, message: &str) -> AppError {
        self.notifier.warning(message);
        AppError::Validation(message.to_string())
    }
}

/// Build the outbound body for one marker commit, side-dependent.
///
/// Stop-loss and take-profit commits must stay on the protective side of
/// the entry price for the order's direction; a violation fails closed.
/// A limit commit is never rejected, it re-anchors both point distances to
/// the new entry instead.
pub fn build_price_update(
    ctx: &OrderContext,
    kind: MarkerKind,
    price: Price,
) -> SyncResult<PriceUpdateRequest> {
    let mut data = PriceUpdateRequest::from_context(ctx);
    let rounded = price.round2();
    let entry = ctx.entry_price.value();

    match kind {
        MarkerKind::Limit => {
            match ctx.side {
                Side::Short => {
                    data.stop_loss_points = round2(ctx.stop_loss_premium.value() - rounded);
                    data.take_profit_points = round2(rounded - ctx.take_profit_premium.value());
                }
                Side::Long => {
                    data.stop_loss_points = round2(rounded - ctx.stop_loss_premium.value());
                    data.take_profit_points = round2(ctx.take_profit_premium.value() - rounded);
                }
            }
            data.entry_price = rounded;
        }
        MarkerKind::StopLoss => {
            match ctx.side {
                Side::Long => {
                    if price.value() >= entry {
                        return Err(AppError::Validation(
                            "SL price should be less than the limit price".to_string(),
                        ));
                    }
                    data.stop_loss_points = round2(entry - rounded);
                }
                Side::Short => {
                    if price.value() <= entry {
                        return Err(AppError::Validation(
                            "SL price should be greater than the limit price".to_string(),
                        ));
                    }
                    data.stop_loss_points = round2(rounded - entry);
                }
            }
            data.stop_loss_premium = rounded;
        }
        MarkerKind::TakeProfit => {
            match ctx.side {
                Side::Long => {
                    if price.value() <= entry {
                        return Err(AppError::Validation(
                            "TP price should be greater than the limit price".to_string(),
                        ));
                    }
                    data.take_profit_points = round2(rounded - entry);
                }
                Side::Short => {
                    if price.value() >= entry {
                        return Err(AppError::Validation(
                            "TP price should be less than the limit price".to_string(),
                        ));
                    }
                    data.take_profit_points = round2(entry - rounded);
                }
            }
            data.take_profit_premium = rounded;
        }
    }

    Ok(data)
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
