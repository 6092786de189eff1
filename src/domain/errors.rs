/// Engine error taxonomy.
///
/// `Validation` is a user-facing rejection that never reaches the order
/// service; `Transport` wraps a failed outbound request; `Input` marks
/// malformed local state such as an incomplete marker set.
#[derive(Debug, Clone, PartialEq)]
pub enum AppError {
    Validation(String),
    Transport(String),
    Input(String),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Validation(msg) => write!(f, "Validation Error: {}", msg),
            AppError::Transport(msg) => write!(f, "Transport Error: {}", msg),
            AppError::Input(msg) => write!(f, "Input Error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

pub type SyncResult<T> = Result<T, AppError>;
