use crate::model::{BookId, BookStatus};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LibrisError {
    #[error("Book with ID {0} not found")]
    BookNotFound(BookId),

    #[error("Invalid status '{0}'. Valid statuses: {valid}", valid = BookStatus::labels())]
    InvalidStatus(String),

    #[error("{0}")]
    Input(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),
}

pub type Result<T> = std::result::Result<T, LibrisError>;
