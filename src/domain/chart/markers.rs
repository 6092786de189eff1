use crate::domain::logging::LogComponent;
use crate::domain::market_data::Price;
use crate::domain::order::context::{EntryKind, OrderContext};
use crate::log_warn;
use strum::{AsRefStr, EnumIter, IntoEnumIterator};

/// The three draggable on-chart price lines. Declaration order doubles as
/// the hover tie-break priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, AsRefStr)]
pub enum MarkerKind {
    #[strum(serialize = "limit")]
    Limit,
    #[strum(serialize = "sl")]
    StopLoss,
    #[strum(serialize = "tp")]
    TakeProfit,
}

impl MarkerKind {
    /// Axis-label prefix shown next to the price.
    pub fn label(&self) -> &'static str {
        match self {
            MarkerKind::Limit => "LIMIT",
            MarkerKind::StopLoss => "SL",
            MarkerKind::TakeProfit => "TP",
        }
    }

    fn index(&self) -> usize {
        match self {
            MarkerKind::Limit => 0,
            MarkerKind::StopLoss => 1,
            MarkerKind::TakeProfit => 2,
        }
    }
}

/// Domain entity - one positioned price marker.
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub kind: MarkerKind,
    pub price: Price,
    pub label: String,
}

impl Marker {
    pub fn new(kind: MarkerKind, price: Price) -> Self {
        Self { kind, price, label: format_label(kind, price) }
    }
}

fn format_label(kind: MarkerKind, price: Price) -> String {
    format!("{} ({:.2})", kind.label(), price.value())
}

/// Domain entity - the marker set owned exclusively by the engine.
///
/// Rebuilt in full whenever the order context changes; never diffed.
#[derive(Debug, Clone, Default)]
pub struct MarkerSet {
    markers: [Option<Marker>; 3],
}

impl MarkerSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reconstruct every marker from a fresh order context.
    ///
    /// Each kind takes the context price when it is non-zero and falls back
    /// to the latest close otherwise. With no order yet and a market ticket
    /// pending no limit is needed, so nothing is drawn at all. A resolved
    /// price that is not a finite number is skipped with a warning.
    pub fn rebuild(
        &mut self,
        ctx: &OrderContext,
        pending_kind: EntryKind,
        last_close: Option<Price>,
    ) {
        self.markers = Default::default();

        if ctx.entry_kind == EntryKind::Undefined && pending_kind == EntryKind::Market {
            return;
        }

        let fallback = last_close.unwrap_or(Price::from(0.0));
        for kind in MarkerKind::iter() {
            let source = match kind {
                MarkerKind::Limit => ctx.entry_price,
                MarkerKind::StopLoss => ctx.stop_loss_premium,
                MarkerKind::TakeProfit => ctx.take_profit_premium,
            };
            let price = if source.value() != 0.0 { source } else { fallback };

            if !price.is_finite() {
                log_warn!(
                    LogComponent::Domain("MarkerSet"),
                    "invalid price for {}: {}",
                    kind.as_ref(),
                    price.value()
                );
                continue;
            }

            self.markers[kind.index()] = Some(Marker::new(kind, price));
        }
    }

    pub fn get(&self, kind: MarkerKind) -> Option<Price> {
        self.markers[kind.index()].as_ref().map(|marker| marker.price)
    }

    pub fn marker(&self, kind: MarkerKind) -> Option<&Marker> {
        self.markers[kind.index()].as_ref()
    }

    /// Reposition a marker and refresh its label. Only the drag controller
    /// calls this while a drag is active.
    pub fn set(&mut self, kind: MarkerKind, price: Price) {
        self.markers[kind.index()] = Some(Marker::new(kind, price));
    }

    pub fn remove(&mut self, kind: MarkerKind) {
        self.markers[kind.index()] = None;
    }

    pub fn clear(&mut self) {
        self.markers = Default::default();
    }

    pub fn iter(&self) -> impl Iterator<Item = &Marker> {
        self.markers.iter().flatten()
    }

    pub fn count(&self) -> usize {
        self.markers.iter().flatten().count()
    }

    pub fn is_empty(&self) -> bool {
        self.count() == 0
    }
}
