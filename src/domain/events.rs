use crate::domain::chart::markers::MarkerKind;
use crate::domain::chart::value_objects::Cursor;
use crate::domain::market_data::Bar;
use std::fmt::Debug;

/// Base trait for all domain events
pub trait DomainEvent: Debug + Clone {
    fn event_type(&self) -> &'static str;
}

/// Events emitted on the feed path, consumed by the view renderer.
#[derive(Debug, Clone)]
pub enum FeedEvent {
    /// The live bar changed; an incremental single-point update, not a redraw.
    LiveBarUpdated { bar: Bar },
    /// The historical store was replaced wholesale by a snapshot.
    SnapshotReplaced { bar_count: usize },
    /// All markers were rebuilt from a fresh order context.
    MarkersRebuilt { marker_count: usize },
    /// Pointer feedback for the renderer's cursor.
    CursorChanged { cursor: Cursor },
}

impl DomainEvent for FeedEvent {
    fn event_type(&self) -> &'static str {
        match self {
            FeedEvent::LiveBarUpdated { .. } => "LiveBarUpdated",
            FeedEvent::SnapshotReplaced { .. } => "SnapshotReplaced",
            FeedEvent::MarkersRebuilt { .. } => "MarkersRebuilt",
            FeedEvent::CursorChanged { .. } => "CursorChanged",
        }
    }
}

/// Events emitted on the order sync path.
#[derive(Debug, Clone)]
pub enum OrderSyncEvent {
    /// A drag commit entered the debounce window.
    CommitQueued { kind: MarkerKind, price: f64 },
    /// One outbound request left for the order service.
    RequestSent { kind: Option<MarkerKind> },
    /// Validation failed closed; nothing was sent.
    CommitRejected { kind: MarkerKind, reason: String },
    /// The transport reported a failure; local state is untouched.
    RequestFailed { reason: String },
}

impl DomainEvent for OrderSyncEvent {
    fn event_type(&self) -> &'static str {
        match self {
            OrderSyncEvent::CommitQueued { .. } => "CommitQueued",
            OrderSyncEvent::RequestSent { .. } => "RequestSent",
            OrderSyncEvent::CommitRejected { .. } => "CommitRejected",
            OrderSyncEvent::RequestFailed { .. } => "RequestFailed",
        }
    }
}

/// Event dispatcher for publishing events
pub trait EventDispatcher {
    fn publish_feed_event(&self, event: FeedEvent);
    fn publish_order_sync_event(&self, event: OrderSyncEvent);
}

/// Simple in-memory event dispatcher
#[derive(Default)]
pub struct InMemoryEventDispatcher {
    feed_handlers: Vec<Box<dyn Fn(&FeedEvent)>>,
    order_sync_handlers: Vec<Box<dyn Fn(&OrderSyncEvent)>>,
}

impl InMemoryEventDispatcher {
    pub fn new() -> Self {
        Self { feed_handlers: Vec::new(), order_sync_handlers: Vec::new() }
    }

    pub fn subscribe_to_feed_events<F>(&mut self, handler: F)
    where
        F: Fn(&FeedEvent) + 'static,
    {
        self.feed_handlers.push(Box::new(handler));
    }

    pub fn subscribe_to_order_sync_events<F>(&mut self, handler: F)
    where
        F: Fn(&OrderSyncEvent) + 'static,
    {
        self.order_sync_handlers.push(Box::new(handler));
    }
}

impl EventDispatcher for InMemoryEventDispatcher {
    fn publish_feed_event(&self, event: FeedEvent) {
        for handler in &self.feed_handlers {
            handler(&event);
        }
    }

    fn publish_order_sync_event(&self, event: OrderSyncEvent) {
        for handler in &self.order_sync_handlers {
            handler(&event);
        }
    }
}
