use crate::model::NoteId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum NotezError {
    #[error("Note not found: {0}")]
    NoteNotFound(NoteId),

    #[error("Clipboard unavailable: {0}")]
    ClipboardUnavailable(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Api Error: {0}")]
    Api(String),
}

impl NotezError {
    /// True for the "referenced note is not in the collection" outcome.
    pub fn is_not_found(&self) -> bool {
        matches!(self, NotezError::NoteNotFound(_))
    }
}

pub type Result<T> = std::result::Result<T, NotezError>;
