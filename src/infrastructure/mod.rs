pub mod services;
pub mod transport;

pub use services::{ConsoleLogger, SystemTimeProvider};
pub use transport::{FnTransport, RecordingNotifier, RecordingTransport};
