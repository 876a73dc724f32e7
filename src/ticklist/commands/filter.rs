use crate::commands::{refresh, CmdMessage, CmdResult};
use crate::error::Result;
use crate::lists::ListStore;
use crate::model::ListKind;
use crate::session::Session;
use crate::store::DataStore;
use tracing::warn;

/// Sets the filter for `list` and re-projects.
///
/// A pattern that does not compile is rolled back: the session keeps its
/// previous pattern and its last view, and the error is returned.
pub fn run<S: DataStore>(
    lists: &mut ListStore<S>,
    session: &mut Session,
    list: ListKind,
    pattern: &str,
) -> Result<CmdResult> {
    let previous = session.set_filter(list, pattern);

    match refresh::run(lists, session.filters()) {
        Ok(mut result) => {
            if previous != pattern {
                result.add_message(CmdMessage::info(format!(
                    "Filter for {} items: {:?}",
                    list, pattern
                )));
            }
            Ok(result)
        }
        Err(e) => {
            warn!(%list, pattern, error = %e, "rejected filter");
            session.set_filter(list, previous);
            Err(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TicklistError;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn applies_valid_filter() {
        let mut lists = StoreFixture::new().with_todo(&["ab", "cd"]).build();
        let mut session = Session::new();

        let result = run(&mut lists, &mut session, ListKind::Todo, "c").unwrap();
        assert_eq!(session.filter(ListKind::Todo), "c");
        assert_eq!(result.view.unwrap().todo.texts(), vec!["cd"]);
    }

    #[test]
    fn malformed_filter_keeps_previous_pattern() {
        let mut lists = StoreFixture::new().with_todo(&["ab"]).build();
        let mut session = Session::new();
        run(&mut lists, &mut session, ListKind::Pass, "x").unwrap();

        let err = run(&mut lists, &mut session, ListKind::Pass, "(x").unwrap_err();
        assert!(matches!(
            err,
            TicklistError::MalformedFilter {
                list: ListKind::Pass,
                ..
            }
        ));
        assert_eq!(session.filter(ListKind::Pass), "x");
    }

    #[test]
    fn same_filter_twice_is_idempotent() {
        let mut lists = StoreFixture::new()
            .with_todo(&["ab", "cd", "ae"])
            .build();
        let mut session = Session::new();

        let first = run(&mut lists, &mut session, ListKind::Todo, "a").unwrap();
        let second = run(&mut lists, &mut session, ListKind::Todo, "a").unwrap();
        assert_eq!(
            first.view.unwrap().todo.texts(),
            second.view.unwrap().todo.texts()
        );
        assert!(second.messages.is_empty());
    }
}
