use crate::domain::chart::markers::{MarkerKind, MarkerSet};
use crate::domain::chart::value_objects::{Cursor, PriceScale};
use crate::domain::market_data::Price;
use crate::domain::order::context::{EntryKind, OrderContext};
use strum::IntoEnumIterator;

/// Drag gesture state. Exactly one marker can be hovered or dragged at a
/// time; the ephemeral drag session is this variant's payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragState {
    Idle,
    Hovering(MarkerKind),
    Dragging(MarkerKind),
}

/// Whether the order's current state allows dragging this marker.
///
/// Before an order exists, and while a limit order is still pending,
/// everything moves. Once the entry has triggered the limit line is fixed
/// and only the protective lines may be repositioned. A pending market
/// ticket has no lines to edit.
pub fn can_drag(ctx: &OrderContext, kind: MarkerKind) -> bool {
    match (ctx.entry_kind, ctx.triggered) {
        (EntryKind::Undefined, _) => true,
        (EntryKind::Limit, false) => true,
        (EntryKind::Limit, true) | (EntryKind::Market, true) => {
            matches!(kind, MarkerKind::StopLoss | MarkerKind::TakeProfit)
        }
        (EntryKind::Market, false) => false,
    }
}

/// State machine turning raw pointer events into marker repositioning.
#[derive(Debug, Clone)]
pub struct DragController {
    state: DragState,
    hit_threshold_px: f64,
}

impl DragController {
    pub fn new(hit_threshold_px: f64) -> Self {
        Self { state: DragState::Idle, hit_threshold_px }
    }

    pub fn state(&self) -> DragState {
        self.state
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging(_))
    }

    /// Marker under the pointer: nearest within the hit threshold, ties
    /// resolved by the fixed kind order (limit, sl, tp).
    pub fn hover_target(
        &self,
        markers: &MarkerSet,
        scale: &dyn PriceScale,
        y: f64,
    ) -> Option<MarkerKind> {
        let mut nearest = None;
        let mut min_distance = f64::INFINITY;

        for kind in MarkerKind::iter() {
            let Some(price) = markers.get(kind) else { continue };
            let Some(coord) = scale.price_to_y(price) else { continue };
            let distance = (y - coord).abs();
            if distance < self.hit_threshold_px && distance < min_distance {
                nearest = Some(kind);
                min_distance = distance;
            }
        }

        nearest
    }

    /// Pointer movement. While dragging this repositions the active marker
    /// through the live scale; otherwise it re-evaluates the hover target.
    pub fn on_pointer_move(
        &mut self,
        markers: &mut MarkerSet,
        scale: &dyn PriceScale,
        y: f64,
    ) -> Cursor {
        if let DragState::Dragging(kind) = self.state {
            if let Some(price) = scale.y_to_price(y) {
                markers.set(kind, price);
            }
            return Cursor::Grabbing;
        }

        match self.hover_target(markers, scale, y) {
            Some(kind) => {
                self.state = DragState::Hovering(kind);
                Cursor::Grab
            }
            None => {
                self.state = DragState::Idle;
                Cursor::Default
            }
        }
    }

    /// Pointer press. Starts a drag session when the permission matrix
    /// allows it; a denied press keeps the state at Hovering and only
    /// signals through the cursor.
    pub fn on_pointer_down(&mut self, ctx: &OrderContext) -> Cursor {
        match self.state {
            DragState::Hovering(kind) => {
                if can_drag(ctx, kind) {
                    self.state = DragState::Dragging(kind);
                    Cursor::Grabbing
                } else {
                    Cursor::NotAllowed
                }
            }
            DragState::Dragging(_) => Cursor::Grabbing,
            DragState::Idle => Cursor::Default,
        }
    }

    /// Pointer release. Ends the drag session and hands the marker's final
    /// price off for commit when it is a finite number.
    pub fn on_pointer_up(&mut self, markers: &MarkerSet) -> Option<(MarkerKind, Price)> {
        let commit = match self.state {
            DragState::Dragging(kind) => {
                markers.get(kind).filter(Price::is_finite).map(|price| (kind, price))
            }
            _ => None,
        };
        self.state = DragState::Idle;
        commit
    }

    /// Discard any active session without a commit. Used when the order
    /// context or instrument changes mid-drag.
    pub fn cancel(&mut self) {
        self.state = DragState::Idle;
    }
}
