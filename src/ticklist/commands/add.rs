use crate::commands::{flush_into, CmdMessage, CmdResult};
use crate::error::Result;
use crate::lists::ListStore;
use crate::model::{Item, ListKind};
use crate::store::DataStore;

use super::helpers::validate_text;

pub fn run<S: DataStore>(lists: &mut ListStore<S>, text: &str) -> Result<CmdResult> {
    validate_text(text)?;

    let item = Item::new(text);
    lists.append(ListKind::Todo, item.clone());

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("Item added: {}", item.text)));
    flush_into(lists, &mut result);
    Ok(result.with_affected_items(vec![item]))
}
