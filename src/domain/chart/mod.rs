//! Chart aggregate: coordinate mapping, price markers and drag gestures.

pub mod drag;
pub mod markers;
pub mod value_objects;

pub use drag::{can_drag, DragController, DragState};
pub use markers::{Marker, MarkerKind, MarkerSet};
pub use value_objects::{ChartMode, Cursor, LinearScale, PriceScale};
