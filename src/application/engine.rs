use crate::application::order_sync::{OrderSyncGateway, OrderTicket};
use crate::config::EngineConfig;
use crate::domain::chart::{ChartMode, Cursor, DragController, DragState, MarkerSet, PriceScale};
use crate::domain::errors::{AppError, SyncResult};
use crate::domain::events::{EventDispatcher, FeedEvent, InMemoryEventDispatcher, OrderSyncEvent};
use crate::domain::logging::LogComponent;
use crate::domain::market_data::{Bar, BarSeries, Price, TickAggregator};
use crate::domain::order::{EntryKind, OrderContext, OrderTransport, TradeId, UserNotifier};
use crate::log_info;

/// The interactive price-chart order engine for one trade.
///
/// Everything runs on the host's cooperative event loop: ticks, pointer
/// events and scale changes arrive as discrete calls, and the debounce is
/// driven by `poll(now_ms)` from the same loop. Marker state always reflects
/// the most recent local drag synchronously; the backend catches up when the
/// external trade layer pushes a fresh `OrderContext` through
/// `refresh_context`.
pub struct ChartOrderEngine {
    config: EngineConfig,
    mode: ChartMode,
    series: BarSeries,
    aggregator: TickAggregator,
    markers: MarkerSet,
    drag: DragController,
    gateway: OrderSyncGateway,
    ctx: OrderContext,
    ticket: OrderTicket,
    dispatcher: InMemoryEventDispatcher,
    attached: bool,
}

impl ChartOrderEngine {
    pub fn new(
        config: EngineConfig,
        trade_id: TradeId,
        ctx: OrderContext,
        transport: Box<dyn OrderTransport>,
        notifier: Box<dyn UserNotifier>,
    ) -> Self {
        let gateway = OrderSyncGateway::new(trade_id, config.debounce_ms, transport, notifier);
        let mut engine = Self {
            mode: ChartMode::Candlestick,
            series: BarSeries::new(config.max_bars),
            aggregator: TickAggregator::new(config.utc_offset_minutes),
            markers: MarkerSet::new(),
            drag: DragController::new(config.hit_threshold_px),
            gateway,
            ctx,
            ticket: OrderTicket::default(),
            dispatcher: InMemoryEventDispatcher::new(),
            attached: true,
            config,
        };
        engine.rebuild_markers();
        engine
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn context(&self) -> &OrderContext {
        &self.ctx
    }

    pub fn series(&self) -> &BarSeries {
        &self.series
    }

    pub fn live_bar(&self) -> Option<&Bar> {
        self.aggregator.live()
    }

    pub fn markers(&self) -> &MarkerSet {
        &self.markers
    }

    pub fn drag_state(&self) -> DragState {
        self.drag.state()
    }

    pub fn ticket(&self) -> &OrderTicket {
        &self.ticket
    }

    pub fn chart_mode(&self) -> ChartMode {
        self.mode
    }

    pub fn set_chart_mode(&mut self, mode: ChartMode) {
        self.mode = mode;
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// Subscribe handlers before wiring the feed; the dispatcher is the
    /// renderer's view into the engine.
    pub fn events_mut(&mut self) -> &mut InMemoryEventDispatcher {
        &mut self.dispatcher
    }

    /// Replace the historical series with a fresh snapshot and rebuild the
    /// markers, whose fallback price is the snapshot's latest close.
    pub fn set_snapshot(&mut self, bars: Vec<Bar>) {
        self.series.set_snapshot(bars);
        self.dispatcher
            .publish_feed_event(FeedEvent::SnapshotReplaced { bar_count: self.series.count() });
        self.rebuild_markers();
    }

    /// Fold one feed tick into the live bar. Ignored while detached.
    pub fn on_tick(&mut self, price: Price, at_ms: u64) -> Option<Bar> {
        if !self.attached {
            return None;
        }
        let bar = *self.aggregator.apply(price, at_ms);
        self.dispatcher.publish_feed_event(FeedEvent::LiveBarUpdated { bar });
        Some(bar)
    }

    /// Adopt a refreshed order context from the trade layer. Any active drag
    /// session is discarded and the markers are rebuilt in full.
    pub fn refresh_context(&mut self, ctx: OrderContext) {
        self.drag.cancel();
        self.ctx = ctx;
        self.rebuild_markers();
    }

    /// Point the engine at another trade/instrument. Drops the drag session,
    /// the pending commits, the live bar and the stale history; the caller
    /// follows up with a snapshot fetch.
    pub fn switch_instrument(&mut self, trade_id: TradeId, ctx: OrderContext) {
        log_info!(
            LogComponent::Application("Engine"),
            "switching to trade {}",
            trade_id.value()
        );
        self.drag.cancel();
        self.gateway.cancel_all();
        self.gateway.retarget(trade_id);
        self.aggregator.reset();
        self.series.clear();
        self.ctx = ctx;
        self.rebuild_markers();
    }

    /// Change the session's pending order flavor. Markers are rebuilt since
    /// a market ticket with no order suppresses them entirely.
    pub fn set_pending_order_kind(&mut self, entry_kind: EntryKind) {
        self.ticket.entry_kind = entry_kind;
        self.rebuild_markers();
    }

    pub fn set_ticket(&mut self, ticket: OrderTicket) {
        self.ticket = ticket;
        self.rebuild_markers();
    }

    /// Pointer movement over the chart. The scale is the widget's current
    /// one, queried fresh for this event.
    pub fn on_pointer_move(&mut self, y: f64, scale: &dyn PriceScale) -> Cursor {
        let cursor = self.drag.on_pointer_move(&mut self.markers, scale, y);
        self.dispatcher.publish_feed_event(FeedEvent::CursorChanged { cursor });
        cursor
    }

    /// Pointer press; may open a drag session subject to order-state rules.
    pub fn on_pointer_down(&mut self) -> Cursor {
        let cursor = self.drag.on_pointer_down(&self.ctx);
        self.dispatcher.publish_feed_event(FeedEvent::CursorChanged { cursor });
        cursor
    }

    /// Pointer release; a finished drag queues a debounced commit.
    pub fn on_pointer_up(&mut self, now_ms: u64) -> Cursor {
        if let Some((kind, price)) = self.drag.on_pointer_up(&self.markers) {
            if self.gateway.queue_commit(kind, price, now_ms) {
                self.dispatcher.publish_order_sync_event(OrderSyncEvent::CommitQueued {
                    kind,
                    price: price.value(),
                });
            }
        }
        self.dispatcher.publish_feed_event(FeedEvent::CursorChanged { cursor: Cursor::Default });
        Cursor::Default
    }

    /// Drive the debounce timers. Returns how many requests went out.
    pub fn poll(&mut self, now_ms: u64) -> usize {
        let outcomes = self.gateway.poll(now_ms, &self.ctx);
        let mut sent = 0;

        for outcome in outcomes {
            match outcome.result {
                Ok(()) => {
                    sent += 1;
                    self.dispatcher.publish_order_sync_event(OrderSyncEvent::RequestSent {
                        kind: Some(outcome.kind),
                    });
                }
                Err(AppError::Validation(reason)) => {
                    self.dispatcher.publish_order_sync_event(OrderSyncEvent::CommitRejected {
                        kind: outcome.kind,
                        reason,
                    });
                }
                Err(err) => {
                    self.dispatcher.publish_order_sync_event(OrderSyncEvent::RequestFailed {
                        reason: err.to_string(),
                    });
                }
            }
        }

        sent
    }

    /// Explicit order placement from the session ticket and current markers.
    pub fn place_order(&mut self) -> SyncResult<()> {
        let result = self.gateway.place_order(&self.ctx, &self.ticket, &self.markers);
        match &result {
            Ok(()) => self
                .dispatcher
                .publish_order_sync_event(OrderSyncEvent::RequestSent { kind: None }),
            Err(AppError::Validation(reason)) | Err(AppError::Input(reason)) => {
                log_info!(LogComponent::Application("Engine"), "order not placed: {}", reason);
            }
            Err(err) => self
                .dispatcher
                .publish_order_sync_event(OrderSyncEvent::RequestFailed { reason: err.to_string() }),
        }
        result
    }

    /// Re-attach a previously detached engine to the feed.
    pub fn attach(&mut self) {
        self.attached = true;
    }

    /// Detach from the feed: pending debounce slots are cancelled and the
    /// live bar is dropped so nothing mutates a disposed marker set.
    pub fn detach(&mut self) {
        self.attached = false;
        self.drag.cancel();
        self.gateway.cancel_all();
        self.aggregator.reset();
    }

    fn rebuild_markers(&mut self) {
        self.markers.rebuild(&self.ctx, self.ticket.entry_kind, self.series.latest_close());
        self.dispatcher
            .publish_feed_event(FeedEvent::MarkersRebuilt { marker_count: self.markers.count() });
    }
}
