use crate::lists::ListStore;
use crate::model::Item;
use crate::store::DataStore;
use crate::view::View;
use tracing::warn;

pub mod add;
pub mod edit;
pub mod filter;
pub mod helpers;
pub mod refresh;
pub mod transfer;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_items: Vec<Item>,
    pub view: Option<View>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_items(mut self, items: Vec<Item>) -> Self {
        self.affected_items = items;
        self
    }

    pub fn with_view(mut self, view: View) -> Self {
        self.view = Some(view);
        self
    }

    pub fn has_errors(&self) -> bool {
        self.messages
            .iter()
            .any(|m| m.level == MessageLevel::Error)
    }

    /// Appends another result's messages and affected items, keeping the newest view.
    pub fn merge(mut self, other: CmdResult) -> Self {
        self.affected_items.extend(other.affected_items);
        self.messages.extend(other.messages);
        if other.view.is_some() {
            self.view = other.view;
        }
        self
    }
}

/// Saves the lists. A failed write leaves memory authoritative and is reported
/// as an error message instead of failing the command.
pub(crate) fn flush_into<S: DataStore>(lists: &mut ListStore<S>, result: &mut CmdResult) {
    if let Err(e) = lists.flush() {
        warn!(error = %e, "failed to save item lists");
        result.add_message(CmdMessage::error(format!("Could not save items: {}", e)));
    }
}
