//! Market data aggregate: the historical bar store and live tick folding.

pub mod entities;
pub mod repositories;
pub mod services;
pub mod value_objects;

pub use entities::*;
pub use services::TickAggregator;
pub use value_objects::*;
