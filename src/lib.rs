//! Interactive price-chart order engine.
//!
//! The engine renders nothing itself: an external chart widget supplies
//! pointer events and the live price scale, a push feed supplies ticks, and
//! the trade layer supplies the order context. In return the engine keeps
//! the live bar and the three draggable price markers (limit, stop-loss,
//! take-profit) consistent, and turns finished drags into validated,
//! debounced requests against the order service.

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use application::{ChartOrderEngine, OrderTicket};
pub use config::EngineConfig;
pub use domain::chart::{ChartMode, Cursor, DragState, LinearScale, MarkerKind, PriceScale};
pub use domain::market_data::{Bar, BarSeries, Ohlc, Price, Symbol, Timestamp};
pub use domain::order::{EntryKind, OrderContext, Side, TradeId};

use domain::logging::LogComponent;

/// Install the native logger and time provider. Idempotent; call once at
/// host startup before constructing engines.
pub fn initialize() {
    domain::logging::init_logger(Box::new(infrastructure::ConsoleLogger::new_development()));
    domain::logging::init_time_provider(Box::new(infrastructure::SystemTimeProvider::new()));

    log_info!(LogComponent::Application("Initialize"), "chart order engine ready");
}
