pub use super::value_objects::{Price, Symbol, Timestamp};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Value Object - OHLC aggregate for one minute bucket
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ohlc {
    pub open: Price,
    pub high: Price,
    pub low: Price,
    pub close: Price,
}

impl Ohlc {
    pub fn new(open: Price, high: Price, low: Price, close: Price) -> Self {
        Self { open, high, low, close }
    }

    /// Single-point aggregate, the shape of a freshly opened live bar.
    pub fn flat(price: Price) -> Self {
        Self { open: price, high: price, low: price, close: price }
    }

    pub fn is_valid(&self) -> bool {
        self.high >= self.open
            && self.high >= self.close
            && self.high >= self.low
            && self.low <= self.open
            && self.low <= self.close
    }
}

/// Domain entity - Bar
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    pub time: Timestamp,
    pub ohlc: Ohlc,
}

impl Bar {
    pub fn new(time: Timestamp, ohlc: Ohlc) -> Self {
        Self { time, ohlc }
    }

    pub fn is_bullish(&self) -> bool {
        self.ohlc.close > self.ohlc.open
    }

    pub fn is_bearish(&self) -> bool {
        self.ohlc.close < self.ohlc.open
    }

    /// Fold one more price print into this bar. Open never moves.
    pub fn fold(&mut self, price: Price) {
        if price > self.ohlc.high {
            self.ohlc.high = price;
        }
        if price < self.ohlc.low {
            self.ohlc.low = price;
        }
        self.ohlc.close = price;
    }
}

/// Domain entity - the historical bar sequence (Candle Store).
///
/// The store is only ever replaced wholesale by a snapshot fetch; live ticks
/// never promote into it.
#[derive(Debug, Clone)]
pub struct BarSeries {
    bars: VecDeque<Bar>,
    max_size: usize,
}

impl BarSeries {
    pub fn new(max_size: usize) -> Self {
        Self { bars: VecDeque::new(), max_size }
    }

    /// Replace the whole series with a fresh snapshot.
    ///
    /// Bars are sorted by time and duplicates collapse last-wins, so the
    /// stored sequence is strictly increasing. The oldest bars are dropped
    /// when the snapshot exceeds the series cap.
    pub fn set_snapshot(&mut self, mut bars: Vec<Bar>) {
        bars.sort_by(|a, b| a.time.cmp(&b.time));

        self.bars.clear();
        for bar in bars {
            match self.bars.back_mut() {
                Some(last) if last.time == bar.time => *last = bar,
                _ => self.bars.push_back(bar),
            }
        }

        while self.bars.len() > self.max_size {
            self.bars.pop_front();
        }
    }

    pub fn clear(&mut self) {
        self.bars.clear();
    }

    pub fn bars(&self) -> &VecDeque<Bar> {
        &self.bars
    }

    pub fn latest(&self) -> Option<&Bar> {
        self.bars.back()
    }

    /// Last closing price, the fallback when the order context carries no
    /// usable price for a marker.
    pub fn latest_close(&self) -> Option<Price> {
        self.bars.back().map(|bar| bar.ohlc.close)
    }

    pub fn count(&self) -> usize {
        self.bars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.max_size
    }

    /// Low/high envelope over the whole series.
    pub fn price_range(&self) -> Option<(Price, Price)> {
        let first = self.bars.front()?;
        let mut min_price = first.ohlc.low;
        let mut max_price = first.ohlc.high;

        for bar in &self.bars {
            if bar.ohlc.low < min_price {
                min_price = bar.ohlc.low;
            }
            if bar.ohlc.high > max_price {
                max_price = bar.ohlc.high;
            }
        }

        Some((min_price, max_price))
    }
}
