use crate::domain::errors::AppError;
use crate::domain::order::context::TradeId;
use crate::domain::order::requests::OrderRequest;

/// Port to the remote order service.
///
/// One validated request per call, fire-and-forget from the chart's
/// perspective: the engine does not block further drags on completion and
/// never retries a failed send.
pub trait OrderTransport {
    fn send(&mut self, trade_id: &TradeId, request: &OrderRequest) -> Result<(), AppError>;
}

/// Port for user-facing, non-blocking notifications (toasts in the host UI).
pub trait UserNotifier {
    fn success(&self, message: &str);
    fn warning(&self, message: &str);
    fn error(&self, message: &str);
}

/// Notifier that swallows everything. Hosts without a toast surface use it.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullNotifier;

impl UserNotifier for NullNotifier {
    fn success(&self, _message: &str) {}
    fn warning(&self, _message: &str) {}
    fn error(&self, _message: &str) {}
}
