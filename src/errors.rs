use thiserror::Error;

/// Error type that captures common catalog and selection failures.
#[derive(Debug, Error)]
pub enum MenuError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("invalid price `{text}`: {reason}")]
    InvalidPrice { text: String, reason: String },
    #[error("selection index {index} is out of range (len {len})")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("no menu item named `{0}`")]
    UnknownItem(String),
    #[error("cannot place an order with an empty selection")]
    EmptySelection,
}
