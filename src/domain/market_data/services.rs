use crate::domain::logging::LogComponent;
use crate::domain::market_data::{Bar, Ohlc, Price, Timestamp};
use crate::log_debug;

/// Domain service - folds scalar price ticks into the in-progress live bar.
///
/// The feed value is a synthetic combined-premium figure, not a literal trade
/// print, so there is no sequence guard: out-of-order and duplicate ticks for
/// the same bucket fold last-close-wins, and a tick for a different bucket
/// replaces the live bar outright. Completed bars are never promoted into the
/// historical series; that is refreshed only by snapshot fetches.
#[derive(Debug, Clone)]
pub struct TickAggregator {
    utc_offset_minutes: i32,
    live: Option<Bar>,
}

impl TickAggregator {
    pub fn new(utc_offset_minutes: i32) -> Self {
        Self { utc_offset_minutes, live: None }
    }

    /// Apply one tick and return the updated live bar.
    ///
    /// `at_ms` is the feed-assigned arrival time in epoch milliseconds; the
    /// configured regional offset is applied before minute bucketing so the
    /// bar grid lines up with the exchange's local clock.
    pub fn apply(&mut self, price: Price, at_ms: u64) -> &Bar {
        let bucket = self.bucket_for(at_ms);

        match &mut self.live {
            Some(bar) if bar.time == bucket => {
                bar.fold(price);
            }
            _ => {
                log_debug!(
                    LogComponent::Domain("TickAggregator"),
                    "opening live bar at {} ({})",
                    bucket.value(),
                    price.value()
                );
                self.live = Some(Bar::new(bucket, Ohlc::flat(price)));
            }
        }

        self.live.as_ref().expect("live bar was just written")
    }

    /// Minute bucket for a feed timestamp, in offset-shifted unix seconds.
    pub fn bucket_for(&self, at_ms: u64) -> Timestamp {
        let offset_ms = i64::from(self.utc_offset_minutes) * 60_000;
        let local_ms = (at_ms as i64 + offset_ms).max(0) as u64;
        Timestamp::from_millis(local_ms).minute_bucket()
    }

    pub fn live(&self) -> Option<&Bar> {
        self.live.as_ref()
    }

    /// Discard the live bar. Called on feed detach and instrument switch.
    pub fn reset(&mut self) {
        self.live = None;
    }
}
