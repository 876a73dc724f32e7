//! Per-session UI state: the two filter patterns and the last rendered view.
//!
//! Nothing here is persisted. A [`Session`] is owned by whoever drives the UI
//! and handed to the API for every refresh and click.

use crate::model::ListKind;
use crate::view::View;

/// Raw filter patterns, one per list. Empty shows everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filters {
    todo: String,
    pass: String,
}

impl Filters {
    pub fn new(todo: impl Into<String>, pass: impl Into<String>) -> Self {
        Self {
            todo: todo.into(),
            pass: pass.into(),
        }
    }

    pub fn get(&self, list: ListKind) -> &str {
        match list {
            ListKind::Todo => &self.todo,
            ListKind::Pass => &self.pass,
        }
    }

    /// Stores `pattern` without validating it. Returns the previous pattern.
    pub fn set(&mut self, list: ListKind, pattern: impl Into<String>) -> String {
        let slot = match list {
            ListKind::Todo => &mut self.todo,
            ListKind::Pass => &mut self.pass,
        };
        std::mem::replace(slot, pattern.into())
    }
}

#[derive(Debug, Clone, Default)]
pub struct Session {
    filters: Filters,
    last_view: Option<View>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn filters(&self) -> &Filters {
        &self.filters
    }

    pub fn filter(&self, list: ListKind) -> &str {
        self.filters.get(list)
    }

    pub fn set_filter(&mut self, list: ListKind, pattern: impl Into<String>) -> String {
        self.filters.set(list, pattern)
    }

    /// The view clicks are resolved against.
    pub fn last_view(&self) -> Option<&View> {
        self.last_view.as_ref()
    }

    pub(crate) fn record_view(&mut self, view: View) {
        self.last_view = Some(view);
    }
}
