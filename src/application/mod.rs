//! Application layer: the engine facade and the order sync gateway.

pub mod engine;
pub mod order_sync;

pub use engine::ChartOrderEngine;
pub use order_sync::{build_price_update, CommitOutcome, OrderSyncGateway, OrderTicket};
