use crate::domain::market_data::Price;
use derive_more::Display;
use strum::{AsRefStr, EnumIter, EnumString};

/// Value Object - how the series is drawn. A render hint only; both modes
/// are fed from the same bar data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter, EnumString, AsRefStr)]
pub enum ChartMode {
    #[display(fmt = "Candlestick")]
    #[strum(serialize = "candlestick")]
    Candlestick,
    #[display(fmt = "Line")]
    #[strum(serialize = "line")]
    Line,
}

/// Value Object - cursor feedback surfaced to the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, AsRefStr)]
pub enum Cursor {
    #[display(fmt = "default")]
    #[strum(serialize = "default")]
    Default,
    #[display(fmt = "grab")]
    #[strum(serialize = "grab")]
    Grab,
    #[display(fmt = "grabbing")]
    #[strum(serialize = "grabbing")]
    Grabbing,
    #[display(fmt = "not-allowed")]
    #[strum(serialize = "not-allowed")]
    NotAllowed,
}

/// The chart widget's live vertical price scale.
///
/// Zoom and pan can change the scale between any two pointer events, so the
/// mapping is consulted fresh on every call and never cached across frames.
/// A degenerate scale (no layout yet, zero range) answers `None`.
pub trait PriceScale {
    fn price_to_y(&self, price: Price) -> Option<f64>;
    fn y_to_price(&self, y: f64) -> Option<Price>;
}

/// Standard linear scale implementation.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearScale {
    pub min_price: f64,
    pub max_price: f64,
    pub height: u32,
}

impl Default for LinearScale {
    fn default() -> Self {
        Self { min_price: 0.0, max_price: 100.0, height: 600 }
    }
}

impl LinearScale {
    pub fn new(min_price: f64, max_price: f64, height: u32) -> Self {
        Self { min_price, max_price, height }
    }

    pub fn price_range(&self) -> f64 {
        self.max_price - self.min_price
    }

    /// Scale prices vertically around a normalized center (0 = top).
    pub fn zoom_price(&mut self, factor: f64, center_y: f64) {
        let current_range = self.price_range();
        let new_range = current_range / factor;
        let center_price = self.max_price - current_range * center_y;

        self.min_price = center_price - new_range / 2.0;
        self.max_price = center_price + new_range / 2.0;
    }

    /// Shift the visible price window by a fraction of its range.
    pub fn pan(&mut self, delta_y: f64) {
        let price_delta = self.price_range() * delta_y;
        self.min_price += price_delta;
        self.max_price += price_delta;
    }

    /// Fit the window around a price envelope with 5% padding on each side.
    pub fn fit(&mut self, low: Price, high: Price) {
        let padding = (high.value() - low.value()) * 0.05;
        self.min_price = low.value() - padding;
        self.max_price = high.value() + padding;
    }
}

impl PriceScale for LinearScale {
    fn price_to_y(&self, price: Price) -> Option<f64> {
        if self.height == 0 || self.price_range() <= 0.0 || !price.is_finite() {
            return None;
        }
        let normalized = (price.value() - self.min_price) / self.price_range();
        Some(f64::from(self.height) * (1.0 - normalized)) // Invert Y
    }

    fn y_to_price(&self, y: f64) -> Option<Price> {
        if self.height == 0 || self.price_range() <= 0.0 || !y.is_finite() {
            return None;
        }
        let normalized = 1.0 - y / f64::from(self.height); // invert Y
        Some(Price::from(self.min_price + self.price_range() * normalized))
    }
}
