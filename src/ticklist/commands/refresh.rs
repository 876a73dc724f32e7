use crate::commands::{flush_into, CmdResult};
use crate::error::Result;
use crate::lists::ListStore;
use crate::session::Filters;
use crate::store::DataStore;
use crate::view::{project, sort_lists};
use tracing::debug;

/// Sorts both lists in place and projects them through `filters`.
///
/// Sorting reorders storage, so a sort that moved anything is saved right
/// away to keep the data file in step with memory.
pub fn run<S: DataStore>(lists: &mut ListStore<S>, filters: &Filters) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    if sort_lists(lists.lists_mut()) {
        debug!("sort reordered items, saving");
        flush_into(lists, &mut result);
    }

    let view = project(lists.lists(), filters)?;
    Ok(result.with_view(view))
}
