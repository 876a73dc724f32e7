use crate::commands::{flush_into, CmdMessage, CmdResult};
use crate::error::Result;
use crate::lists::ListStore;
use crate::model::{ItemId, ListKind};
use crate::store::DataStore;

use super::helpers::validate_text;

/// Overwrites the todo item at `index`, keeping its position and id.
pub fn run<S: DataStore>(lists: &mut ListStore<S>, index: usize, text: &str) -> Result<CmdResult> {
    validate_text(text)?;
    let item = lists.replace_text(index, text.to_string())?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Item updated ({}): {}",
        index, item.text
    )));
    flush_into(lists, &mut result);
    Ok(result.with_affected_items(vec![item]))
}

pub fn by_id<S: DataStore>(lists: &mut ListStore<S>, id: ItemId, text: &str) -> Result<CmdResult> {
    let index = lists.position_of(ListKind::Todo, id)?;
    run(lists, index, text)
}
