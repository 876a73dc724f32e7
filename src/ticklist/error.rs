use crate::model::{ItemId, ListKind};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TicklistError {
    #[error("Malformed filter for {list} items: {source}")]
    MalformedFilter {
        list: ListKind,
        #[source]
        source: regex::Error,
    },

    #[error("Row {index} is out of range for {list} items (len {len})")]
    OutOfRange {
        list: ListKind,
        index: usize,
        len: usize,
    },

    #[error("Item not found: {0}")]
    ItemNotFound(ItemId),

    #[error("Invalid item: {0}")]
    InvalidItem(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),
}

pub type Result<T> = std::result::Result<T, TicklistError>;
