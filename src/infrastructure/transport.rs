use crate::domain::errors::AppError;
use crate::domain::order::{OrderRequest, OrderTransport, TradeId, UserNotifier};
use std::cell::RefCell;
use std::rc::Rc;

/// Adapter turning a closure into an [`OrderTransport`]. Hosts hand the
/// engine whatever HTTP/IPC call they own.
pub struct FnTransport<F>
where
    F: FnMut(&TradeId, &OrderRequest) -> Result<(), AppError>,
{
    send: F,
}

impl<F> FnTransport<F>
where
    F: FnMut(&TradeId, &OrderRequest) -> Result<(), AppError>,
{
    pub fn new(send: F) -> Self {
        Self { send }
    }
}

impl<F> OrderTransport for FnTransport<F>
where
    F: FnMut(&TradeId, &OrderRequest) -> Result<(), AppError>,
{
    fn send(&mut self, trade_id: &TradeId, request: &OrderRequest) -> Result<(), AppError> {
        (self.send)(trade_id, request)
    }
}

/// Transport that records every request it is given. The shared log lets a
/// test keep a handle after the engine takes ownership of the transport.
#[derive(Default)]
pub struct RecordingTransport {
    log: Rc<RefCell<Vec<(TradeId, OrderRequest)>>>,
    fail_with: Option<String>,
}

impl RecordingTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// A transport that rejects every send with the given reason.
    pub fn failing(reason: &str) -> Self {
        Self { log: Rc::default(), fail_with: Some(reason.to_string()) }
    }

    pub fn log(&self) -> Rc<RefCell<Vec<(TradeId, OrderRequest)>>> {
        Rc::clone(&self.log)
    }
}

impl OrderTransport for RecordingTransport {
    fn send(&mut self, trade_id: &TradeId, request: &OrderRequest) -> Result<(), AppError> {
        if let Some(reason) = &self.fail_with {
            return Err(AppError::Transport(reason.clone()));
        }
        self.log.borrow_mut().push((trade_id.clone(), request.clone()));
        Ok(())
    }
}

/// Notifier that records the toast stream.
#[derive(Default)]
pub struct RecordingNotifier {
    messages: Rc<RefCell<Vec<(String, String)>>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> Rc<RefCell<Vec<(String, String)>>> {
        Rc::clone(&self.messages)
    }
}

impl UserNotifier for RecordingNotifier {
    fn success(&self, message: &str) {
        self.messages.borrow_mut().push(("success".to_string(), message.to_string()));
    }

    fn warning(&self, message: &str) {
        self.messages.borrow_mut().push(("warning".to_string(), message.to_string()));
    }

    fn error(&self, message: &str) {
        self.messages.borrow_mut().push(("error".to_string(), message.to_string()));
    }
}
