//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It is the single
//! entry point for a UI, whatever that UI looks like.
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Dispatches** to the appropriate command function
//! - **Keeps the session current**: every call that changes the lists is
//!   followed by a refresh, so the [`Session`] always holds the view that the
//!   next click will be resolved against
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! ## The Prompt Round Trip
//!
//! A click never mutates directly:
//!
//! ```text
//! UI click ──► api.click() ──► Option<PromptRequest> ──► UI shows prompt
//!                                                            │
//! CmdResult ◄── api.respond(request, PromptResponse) ◄───────┘
//! ```
//!
//! Only an affirmative response performs the change. A response that targets
//! an item which has since disappeared is a no-op with a warning message.
//!
//! ## Generic Over DataStore
//!
//! `TicklistApi<S: DataStore>` is generic over the storage backend:
//! - Production: `TicklistApi<FileStore>`
//! - Testing: `TicklistApi<InMemoryStore>`

use crate::commands;
use crate::error::{Result, TicklistError};
use crate::lists::ListStore;
use crate::model::ListKind;
use crate::session::Session;
use crate::store::DataStore;
use crate::view::View;
use tracing::debug;

/// The main API facade for ticklist operations.
pub struct TicklistApi<S: DataStore> {
    lists: ListStore<S>,
    session: Session,
}

impl<S: DataStore> TicklistApi<S> {
    pub fn new(lists: ListStore<S>, session: Session) -> Self {
        Self { lists, session }
    }

    /// Loads the lists from `store` (seed data if there is none or it is not
    /// valid JSON) with a fresh session.
    pub fn open(store: S) -> Result<Self> {
        Ok(Self::new(ListStore::open(store)?, Session::new()))
    }

    pub fn lists(&self) -> &ListStore<S> {
        &self.lists
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn store(&self) -> &S {
        self.lists.store()
    }

    pub fn store_mut(&mut self) -> &mut S {
        self.lists.store_mut()
    }

    /// Sorts, filters and re-renders both lists.
    pub fn refresh(&mut self) -> Result<CmdResult> {
        let result = commands::refresh::run(&mut self.lists, self.session.filters())?;
        self.record(&result);
        Ok(result)
    }

    /// The last rendered view, rendering one first if needed.
    pub fn view(&mut self) -> Result<&View> {
        if self.session.last_view().is_none() {
            self.refresh()?;
        }
        self.session
            .last_view()
            .ok_or_else(|| TicklistError::Store("No view rendered".to_string()))
    }

    pub fn add_todo(&mut self, text: &str) -> Result<CmdResult> {
        let result = commands::add::run(&mut self.lists, text)?;
        self.finish(result)
    }

    pub fn edit_todo(&mut self, index: usize, text: &str) -> Result<CmdResult> {
        let result = commands::edit::run(&mut self.lists, index, text)?;
        self.finish(result)
    }

    pub fn complete(&mut self, index: usize) -> Result<CmdResult> {
        let result = commands::transfer::complete(&mut self.lists, index)?;
        self.finish(result)
    }

    pub fn reopen(&mut self, index: usize) -> Result<CmdResult> {
        let result = commands::transfer::reopen(&mut self.lists, index)?;
        self.finish(result)
    }

    /// Sets a filter. A malformed pattern is rejected and the previous
    /// pattern and view stay in place.
    pub fn set_filter(&mut self, list: ListKind, pattern: &str) -> Result<CmdResult> {
        let result = commands::filter::run(&mut self.lists, &mut self.session, list, pattern)?;
        self.record(&result);
        Ok(result)
    }

    /// Resolves a click against the last rendered view.
    pub fn click(&mut self, at: Click) -> Result<Option<PromptRequest>> {
        let view = self.view()?;
        Ok(crate::click::resolve(view, at))
    }

    /// The prompt a "filter" button opens, pre-filled with the current pattern.
    pub fn filter_prompt(&self, list: ListKind) -> PromptRequest {
        PromptRequest::Filter {
            list,
            current: self.session.filter(list).to_string(),
        }
    }

    /// Applies the user's answer to `request`.
    pub fn respond(
        &mut self,
        request: &PromptRequest,
        response: &PromptResponse,
    ) -> Result<CmdResult> {
        if *response == PromptResponse::Cancel {
            debug!(title = %request.title(), "prompt cancelled");
            return Ok(CmdResult::default());
        }

        let text = response.text_or(request.default_value());
        let outcome = match (request, text) {
            (PromptRequest::Create { .. }, Some(text)) => {
                commands::add::run(&mut self.lists, text)
            }
            (PromptRequest::Edit { id, .. }, Some(text)) => {
                commands::edit::by_id(&mut self.lists, *id, text)
            }
            (PromptRequest::Complete { id, .. }, _) => {
                commands::transfer::complete_by_id(&mut self.lists, *id)
            }
            (PromptRequest::Reopen { id, .. }, _) => {
                commands::transfer::reopen_by_id(&mut self.lists, *id)
            }
            (PromptRequest::Filter { list, .. }, Some(text)) => {
                return self.set_filter(*list, text);
            }
            (_, None) => return Ok(CmdResult::default()),
        };

        match outcome {
            Ok(result) => self.finish(result),
            Err(TicklistError::ItemNotFound(id)) => {
                debug!(%id, "prompt answered for an item that is gone");
                let mut result = CmdResult::default();
                result.add_message(CmdMessage::warning("That item no longer exists."));
                self.finish(result)
            }
            Err(e) => Err(e),
        }
    }

    fn finish(&mut self, result: CmdResult) -> Result<CmdResult> {
        let refreshed = self.refresh()?;
        Ok(result.merge(refreshed))
    }

    fn record(&mut self, result: &CmdResult) {
        if let Some(view) = &result.view {
            self.session.record_view(view.clone());
        }
    }
}

pub use crate::click::{Click, Column, PromptRequest, PromptResponse};
pub use crate::commands::{CmdMessage, CmdResult, MessageLevel};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ItemLists;
    use crate::store::memory::InMemoryStore;

    fn api(todo: &[&str], pass: &[&str]) -> TicklistApi<InMemoryStore> {
        let data = ItemLists::new(
            todo.iter().map(|s| s.to_string()).collect(),
            pass.iter().map(|s| s.to_string()).collect(),
        );
        TicklistApi::open(InMemoryStore::with_items(data)).unwrap()
    }

    #[test]
    fn open_with_empty_store_seeds() {
        let mut api = TicklistApi::open(InMemoryStore::new()).unwrap();
        let view = api.view().unwrap();
        assert_eq!(view.todo.texts(), vec!["add a todo item"]);
        assert_eq!(view.pass.texts(), vec!["launch this simple todo list"]);
    }

    #[test]
    fn open_propagates_read_errors() {
        let mut store = InMemoryStore::with_items(ItemLists::new(vec!["a".into()], vec![]));
        store.set_simulate_read_error(true);

        assert!(matches!(
            TicklistApi::open(store),
            Err(TicklistError::Io(_))
        ));
    }

    #[test]
    fn mutations_refresh_the_session_view() {
        let mut api = api(&["b"], &[]);
        api.refresh().unwrap();
        let result = api.add_todo("1st").unwrap();

        // sorted: '1' before letters
        assert_eq!(result.view.unwrap().todo.texts(), vec!["1st", "b"]);
        assert_eq!(
            api.session().last_view().unwrap().todo.texts(),
            vec!["1st", "b"]
        );
    }

    #[test]
    fn complete_via_click_and_confirm() {
        let mut api = api(&["a", "b"], &["c"]);
        let request = api
            .click(Click::new(ListKind::Todo, Column::Action, 0))
            .unwrap()
            .unwrap();

        api.respond(&request, &PromptResponse::Accept).unwrap();

        assert_eq!(api.lists().lists().texts(ListKind::Todo), vec!["b"]);
        assert_eq!(api.lists().lists().texts(ListKind::Pass), vec!["c", "a"]);
    }

    #[test]
    fn cancel_has_no_side_effects() {
        let mut api = api(&["a"], &[]);
        let request = api
            .click(Click::new(ListKind::Todo, Column::Action, 0))
            .unwrap()
            .unwrap();

        let result = api.respond(&request, &PromptResponse::Cancel).unwrap();

        assert!(result.messages.is_empty());
        assert_eq!(api.lists().lists().texts(ListKind::Todo), vec!["a"]);
        assert_eq!(api.store().save_count(), 0);
    }

    #[test]
    fn add_row_creates_with_entered_text() {
        let mut api = api(&["a"], &[]);
        let request = api
            .click(Click::new(ListKind::Todo, Column::Label, 1))
            .unwrap()
            .unwrap();
        assert_eq!(request.default_value(), Some("a: "));

        api.respond(&request, &PromptResponse::Text("a: new".into()))
            .unwrap();
        assert_eq!(
            api.lists().lists().texts(ListKind::Todo),
            vec!["a", "a: new"]
        );
    }

    #[test]
    fn edit_prompt_follows_item_after_resort() {
        let mut api = api(&["b"], &[]);
        let request = api
            .click(Click::new(ListKind::Todo, Column::Label, 0))
            .unwrap()
            .unwrap();

        // another change re-sorts storage while the prompt is open
        api.add_todo("0 first").unwrap();
        api.respond(&request, &PromptResponse::Text("b edited".into()))
            .unwrap();

        assert_eq!(
            api.lists().lists().texts(ListKind::Todo),
            vec!["0 first", "b edited"]
        );
    }

    #[test]
    fn answering_for_a_moved_item_is_a_noop() {
        let mut api = api(&["a"], &[]);
        let request = api
            .click(Click::new(ListKind::Todo, Column::Action, 0))
            .unwrap()
            .unwrap();
        api.respond(&request, &PromptResponse::Accept).unwrap();

        let result = api.respond(&request, &PromptResponse::Accept).unwrap();
        assert_eq!(result.messages[0].level, MessageLevel::Warning);
        assert_eq!(api.lists().lists().texts(ListKind::Pass), vec!["a"]);
    }

    #[test]
    fn reopen_from_pass_view() {
        let mut api = api(&[], &["x", "y", "z"]);
        let request = api
            .click(Click::new(ListKind::Pass, Column::Action, 0))
            .unwrap()
            .unwrap();
        api.respond(&request, &PromptResponse::Accept).unwrap();

        assert_eq!(api.lists().lists().texts(ListKind::Todo), vec!["z"]);
        assert_eq!(api.lists().lists().texts(ListKind::Pass), vec!["x", "y"]);
    }

    #[test]
    fn malformed_filter_keeps_previous_rows() {
        let mut api = api(&["ab", "cd"], &[]);
        api.set_filter(ListKind::Todo, "a").unwrap();
        let before = api.session().last_view().cloned().unwrap();

        let err = api.set_filter(ListKind::Todo, "a(").unwrap_err();
        assert!(matches!(err, TicklistError::MalformedFilter { .. }));
        assert_eq!(api.session().last_view().unwrap(), &before);
        assert_eq!(api.session().filter(ListKind::Todo), "a");
    }

    #[test]
    fn filter_prompt_round_trip() {
        let mut api = api(&["ab", "cd"], &[]);
        let request = api.filter_prompt(ListKind::Todo);
        assert_eq!(request.default_value(), Some(""));

        let result = api
            .respond(&request, &PromptResponse::Text("c d".into()))
            .unwrap();
        assert_eq!(result.view.unwrap().todo.texts(), vec!["cd"]);
    }

    #[test]
    fn write_failure_is_visible_but_not_fatal() {
        let mut api = api(&["a"], &[]);
        api.store_mut().set_simulate_write_error(true);

        let result = api.complete(0).unwrap();
        assert!(result.has_errors());
        assert_eq!(api.lists().lists().texts(ListKind::Pass), vec!["a"]);
    }

    #[test]
    fn positional_errors_surface() {
        let mut api = api(&["a"], &[]);
        assert!(matches!(
            api.reopen(0).unwrap_err(),
            TicklistError::OutOfRange { .. }
        ));
        assert!(matches!(
            api.edit_todo(0, "").unwrap_err(),
            TicklistError::InvalidItem(_)
        ));
    }
}
