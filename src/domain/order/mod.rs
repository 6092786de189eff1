//! Order aggregate: the externally owned context, the outbound request
//! model and the collaborator ports.

pub mod context;
pub mod repositories;
pub mod requests;

pub use context::{EntryKind, OrderContext, Side, TradeId};
pub use repositories::{NullNotifier, OrderTransport, UserNotifier};
pub use requests::{LimitOrderRequest, MarketOrderRequest, OrderRequest, PriceUpdateRequest};
