use crate::domain::errors::AppError;
use crate::domain::market_data::{Bar, Symbol};

/// Port for the historical bar snapshot supplied by the data layer.
///
/// Each fetch fully replaces the Candle Store; there is no incremental merge.
pub trait BarSnapshotSource {
    fn fetch_snapshot(&self, symbol: &Symbol) -> Result<Vec<Bar>, AppError>;
}
