use crate::commands::{flush_into, CmdMessage, CmdResult};
use crate::error::Result;
use crate::lists::ListStore;
use crate::model::{ItemId, ListKind};
use crate::store::DataStore;

/// Moves the todo item at `index` to the end of the pass list.
pub fn complete<S: DataStore>(lists: &mut ListStore<S>, index: usize) -> Result<CmdResult> {
    transfer(lists, ListKind::Todo, index)
}

/// Moves the pass item at `index` to the end of the todo list.
pub fn reopen<S: DataStore>(lists: &mut ListStore<S>, index: usize) -> Result<CmdResult> {
    transfer(lists, ListKind::Pass, index)
}

pub fn complete_by_id<S: DataStore>(lists: &mut ListStore<S>, id: ItemId) -> Result<CmdResult> {
    let index = lists.position_of(ListKind::Todo, id)?;
    complete(lists, index)
}

pub fn reopen_by_id<S: DataStore>(lists: &mut ListStore<S>, id: ItemId) -> Result<CmdResult> {
    let index = lists.position_of(ListKind::Pass, id)?;
    reopen(lists, index)
}

fn transfer<S: DataStore>(lists: &mut ListStore<S>, from: ListKind, index: usize) -> Result<CmdResult> {
    let item = lists.transfer(from, index)?;

    let verb = match from {
        ListKind::Todo => "completed",
        ListKind::Pass => "reopened",
    };
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("Item {}: {}", verb, item.text)));
    flush_into(lists, &mut result);
    Ok(result.with_affected_items(vec![item]))
}
