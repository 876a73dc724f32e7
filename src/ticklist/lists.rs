//! # List Store
//!
//! [`ListStore`] owns the in-memory todo and pass lists and the [`DataStore`]
//! they are flushed to. There is exactly one in-memory copy; there is no
//! dirty flag. The operations in `commands/` flush after every change.
//!
//! Positions are storage indexes into the lists *as they are now*. Since a
//! refresh sorts in place, callers holding a position from an older view
//! should go through [`ListStore::position_of`] with the item's id instead.

use crate::error::{Result, TicklistError};
use crate::model::{Item, ItemId, ItemLists, ListKind, Lists};
use crate::store::DataStore;
use tracing::{debug, warn};

pub struct ListStore<S: DataStore> {
    store: S,
    lists: Lists,
}

impl<S: DataStore> ListStore<S> {
    pub fn new(store: S, lists: Lists) -> Self {
        Self { store, lists }
    }

    /// Loads the lists from `store`, falling back to seed data when there is
    /// nothing to load or the stored data cannot be parsed.
    ///
    /// Any other load failure is returned: the store may still hold the
    /// user's items, and the next flush would overwrite them.
    pub fn open(store: S) -> Result<Self> {
        let data = match store.load_items() {
            Ok(Some(data)) => data,
            Ok(None) => {
                debug!("no stored items, using seed data");
                ItemLists::seed()
            }
            Err(TicklistError::Serialization(e)) => {
                warn!(error = %e, "stored items are not valid JSON, using seed data");
                ItemLists::seed()
            }
            Err(e) => return Err(e),
        };
        Ok(Self::new(store, data.into()))
    }

    pub fn lists(&self) -> &Lists {
        &self.lists
    }

    pub fn items(&self, list: ListKind) -> &[Item] {
        self.lists.get(list)
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    pub(crate) fn lists_mut(&mut self) -> &mut Lists {
        &mut self.lists
    }

    /// Writes both lists to the backing store.
    pub fn flush(&mut self) -> Result<()> {
        self.store.save_items(&self.lists.to_item_lists())
    }

    pub fn item_at(&self, list: ListKind, index: usize) -> Result<&Item> {
        let items = self.lists.get(list);
        items.get(index).ok_or(TicklistError::OutOfRange {
            list,
            index,
            len: items.len(),
        })
    }

    /// Current storage index of the item with `id`.
    pub fn position_of(&self, list: ListKind, id: ItemId) -> Result<usize> {
        self.lists
            .position(list, id)
            .ok_or(TicklistError::ItemNotFound(id))
    }

    pub(crate) fn append(&mut self, list: ListKind, item: Item) {
        self.lists.get_mut(list).push(item);
    }

    pub(crate) fn replace_text(&mut self, index: usize, text: String) -> Result<Item> {
        self.item_at(ListKind::Todo, index)?;
        let item = &mut self.lists.todo[index];
        item.text = text;
        Ok(item.clone())
    }

    /// Removes the item at `index` from `from` and appends it to the other list.
    pub(crate) fn transfer(&mut self, from: ListKind, index: usize) -> Result<Item> {
        self.item_at(from, index)?;
        let item = self.lists.get_mut(from).remove(index);
        let to = match from {
            ListKind::Todo => ListKind::Pass,
            ListKind::Pass => ListKind::Todo,
        };
        self.lists.get_mut(to).push(item.clone());
        Ok(item)
    }
}
