//! # Click Resolution
//!
//! A UI reports clicks as `(list, column, visible row)`. Resolution looks the
//! row up in the last rendered [`View`] and answers with the prompt the UI has
//! to show, if any. Nothing is mutated here: the change happens only when the
//! UI hands back an affirmative [`PromptResponse`] (see `api.rs`).
//!
//! | list | column | row         | request                |
//! |------|--------|-------------|------------------------|
//! | todo | label  | item        | [`PromptRequest::Edit`]     |
//! | todo | label  | add row     | [`PromptRequest::Create`]   |
//! | todo | action | item        | [`PromptRequest::Complete`] |
//! | todo | action | add row     | none                   |
//! | pass | action | item        | [`PromptRequest::Reopen`]   |
//! | pass | label  | item        | none                   |
//! | any  | index  | any         | none                   |
//!
//! Requests carry the item's [`ItemId`], so a response still reaches the right
//! item even if the list was re-sorted while the prompt was open.

use crate::model::{ItemId, ListKind};
use crate::view::{RowKind, View};
use tracing::debug;

pub const CREATE_DEFAULT: &str = "a: ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    Index,
    Label,
    Action,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Click {
    pub list: ListKind,
    pub column: Column,
    pub row: usize,
}

impl Click {
    pub fn new(list: ListKind, column: Column, row: usize) -> Self {
        Self { list, column, row }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptRequest {
    Create { default: String },
    Edit { id: ItemId, current: String },
    Complete { id: ItemId, text: String },
    Reopen { id: ItemId, text: String },
    Filter { list: ListKind, current: String },
}

impl PromptRequest {
    pub fn title(&self) -> String {
        match self {
            PromptRequest::Create { .. } => "create".to_string(),
            PromptRequest::Edit { .. } => "modify".to_string(),
            PromptRequest::Complete { .. } | PromptRequest::Reopen { .. } => {
                "confirm".to_string()
            }
            PromptRequest::Filter { list, .. } => format!("set filter for {} items", list),
        }
    }

    pub fn message(&self) -> String {
        match self {
            PromptRequest::Create { .. } => "Create a new todo item:".to_string(),
            PromptRequest::Edit { .. } => "Modify the existing todo item:".to_string(),
            PromptRequest::Complete { text, .. } => format!("send it to pass?\n{}", text),
            PromptRequest::Reopen { text, .. } => format!("send it to todo?\n{}", text),
            PromptRequest::Filter { list, .. } => {
                format!("Input the filter regex for {} items:", list)
            }
        }
    }

    /// Pre-filled value for text prompts, `None` for confirmations.
    pub fn default_value(&self) -> Option<&str> {
        match self {
            PromptRequest::Create { default } => Some(default.as_str()),
            PromptRequest::Edit { current, .. } | PromptRequest::Filter { current, .. } => {
                Some(current.as_str())
            }
            PromptRequest::Complete { .. } | PromptRequest::Reopen { .. } => None,
        }
    }

    pub fn is_confirmation(&self) -> bool {
        self.default_value().is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptResponse {
    /// Text entered in a text prompt
    Text(String),
    /// OK pressed; for a text prompt this keeps the default value
    Accept,
    Cancel,
}

impl PromptResponse {
    /// The text this response stands for, given the prompt's default.
    pub fn text_or<'a>(&'a self, default: Option<&'a str>) -> Option<&'a str> {
        match self {
            PromptResponse::Text(text) => Some(text.as_str()),
            PromptResponse::Accept => default,
            PromptResponse::Cancel => None,
        }
    }
}

/// Resolves a click against `view`. `None` means the click does nothing.
pub fn resolve(view: &View, click: Click) -> Option<PromptRequest> {
    let list_view = view.list(click.list);
    let Some(row) = list_view.rows.get(click.row) else {
        debug!(list = %click.list, row = click.row, "click outside rendered rows");
        return None;
    };

    match (click.list, click.column, row.kind) {
        (_, Column::Index, _) => None,
        (ListKind::Todo, Column::Label, RowKind::AddNew) => Some(PromptRequest::Create {
            default: CREATE_DEFAULT.to_string(),
        }),
        (ListKind::Todo, Column::Label, RowKind::Item(id)) => Some(PromptRequest::Edit {
            id,
            current: row.text.clone(),
        }),
        (ListKind::Todo, Column::Action, RowKind::AddNew) => None,
        (ListKind::Todo, Column::Action, RowKind::Item(id)) => Some(PromptRequest::Complete {
            id,
            text: row.text.clone(),
        }),
        (ListKind::Pass, Column::Action, RowKind::Item(id)) => Some(PromptRequest::Reopen {
            id,
            text: row.text.clone(),
        }),
        (ListKind::Pass, _, _) => None,
    }
}
