//! # View Projection
//!
//! Turns the two lists plus their filter patterns into the rows a UI shows.
//!
//! ## Sorting
//!
//! Before anything is shown both lists are sorted **in place**, which
//! permanently reorders storage. The key is the first character of the item,
//! except that every ASCII letter maps to `'z'`:
//!
//! ```text
//! ["banana", "1kiwi", "Apple"]  keys ['z', '1', 'z']  ->  ["1kiwi", "banana", "Apple"]
//! ```
//!
//! All letter-leading items therefore share one bucket and keep their relative
//! order (the sort is stable).
//!
//! ## Filtering
//!
//! Spaces are stripped from the pattern, then each item must match the
//! pattern starting at its first character. The match does not have to cover
//! the whole item, and an empty pattern shows everything.
//!
//! ## Rows and Mappings
//!
//! The todo list renders top to bottom and always ends with a synthetic
//! "add" row. The pass list renders newest first with no extra row. Display
//! indexes count visible rows only, starting at 0.
//!
//! Every [`ListView`] carries an [`IndexMapping`] from visible row back to
//! storage. For the pass list the mapping stores the offset from the end, so
//! the storage index is `len - offset - 1`.

use crate::error::{Result, TicklistError};
use crate::model::{Item, ItemId, ListKind, Lists};
use crate::session::Filters;
use regex::Regex;

pub const TODO_MARKER: &str = " = ";
pub const PASS_MARKER: &str = " - ";
pub const ADD_ROW_LABEL: &str = "[click me to add a new todo item]";

/// Key used by the in-place sort.
pub fn sort_key(text: &str) -> char {
    match text.chars().next() {
        Some(c) if c.is_ascii_alphabetic() => 'z',
        Some(c) => c,
        None => '\0',
    }
}

/// Stable in-place sort by [`sort_key`]. Returns true if the order changed.
pub fn sort_items(items: &mut [Item]) -> bool {
    let before: Vec<ItemId> = items.iter().map(|item| item.id).collect();
    items.sort_by_key(|item| sort_key(&item.text));
    items
        .iter()
        .zip(before.iter())
        .any(|(item, id)| item.id != *id)
}

/// Sorts both lists. Returns true if either one was reordered.
pub fn sort_lists(lists: &mut Lists) -> bool {
    let todo_changed = sort_items(&mut lists.todo);
    let pass_changed = sort_items(&mut lists.pass);
    todo_changed || pass_changed
}

/// A compiled filter pattern.
#[derive(Debug, Clone)]
pub struct ItemFilter {
    regex: Regex,
}

impl ItemFilter {
    pub fn compile(list: ListKind, pattern: &str) -> Result<Self> {
        let stripped: String = pattern.chars().filter(|c| *c != ' ').collect();
        let regex = Regex::new(&stripped)
            .map_err(|source| TicklistError::MalformedFilter { list, source })?;
        Ok(Self { regex })
    }

    /// True when the pattern matches at the very start of `text`.
    ///
    /// Leftmost search returns the earliest starting match, so a match at
    /// offset 0 exists iff the first match found starts there.
    pub fn matches(&self, text: &str) -> bool {
        self.regex.find(text).is_some_and(|m| m.start() == 0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowKind {
    Item(ItemId),
    /// The trailing todo row that creates a new item.
    AddNew,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub kind: RowKind,
    /// Display index, `None` for the synthetic add row
    pub index: Option<usize>,
    pub text: String,
    pub marker: Option<&'static str>,
}

impl Row {
    pub fn is_add_row(&self) -> bool {
        matches!(self.kind, RowKind::AddNew)
    }
}

/// Visible row -> storage position for one list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexMapping {
    list: ListKind,
    entries: Vec<usize>,
    ids: Vec<ItemId>,
}

impl IndexMapping {
    fn new(list: ListKind) -> Self {
        Self {
            list,
            entries: Vec::new(),
            ids: Vec::new(),
        }
    }

    fn push(&mut self, entry: usize, id: ItemId) {
        self.entries.push(entry);
        self.ids.push(id);
    }

    pub fn list(&self) -> ListKind {
        self.list
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The raw mapped value: storage index for todo, offset from the end for pass.
    pub fn entry(&self, row: usize) -> Option<usize> {
        self.entries.get(row).copied()
    }

    pub fn id(&self, row: usize) -> Option<ItemId> {
        self.ids.get(row).copied()
    }

    /// Storage index for `row` given the current length of the list.
    pub fn storage_index(&self, row: usize, list_len: usize) -> Option<usize> {
        let entry = self.entry(row)?;
        let index = match self.list {
            ListKind::Todo => entry,
            ListKind::Pass => list_len.checked_sub(entry + 1)?,
        };
        (index < list_len).then_some(index)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListView {
    pub list: ListKind,
    pub rows: Vec<Row>,
    pub mapping: IndexMapping,
}

impl ListView {
    /// Rows backed by real items, in display order.
    pub fn item_rows(&self) -> impl Iterator<Item = &Row> {
        self.rows.iter().filter(|row| !row.is_add_row())
    }

    pub fn texts(&self) -> Vec<&str> {
        self.item_rows().map(|row| row.text.as_str()).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct View {
    pub todo: ListView,
    pub pass: ListView,
}

impl View {
    pub fn list(&self, kind: ListKind) -> &ListView {
        match kind {
            ListKind::Todo => &self.todo,
            ListKind::Pass => &self.pass,
        }
    }
}

/// Projects one list in its current storage order. Does not sort.
pub fn project_list(list: ListKind, items: &[Item], pattern: &str) -> Result<ListView> {
    let filter = ItemFilter::compile(list, pattern)?;
    let mut rows = Vec::new();
    let mut mapping = IndexMapping::new(list);

    let (ordered, marker): (Vec<&Item>, _) = match list {
        ListKind::Todo => (items.iter().collect(), TODO_MARKER),
        ListKind::Pass => (items.iter().rev().collect(), PASS_MARKER),
    };

    for (k, item) in ordered.into_iter().enumerate() {
        if !filter.matches(&item.text) {
            continue;
        }
        rows.push(Row {
            kind: RowKind::Item(item.id),
            index: Some(mapping.len()),
            text: item.text.clone(),
            marker: Some(marker),
        });
        mapping.push(k, item.id);
    }

    if list == ListKind::Todo {
        rows.push(Row {
            kind: RowKind::AddNew,
            index: None,
            text: ADD_ROW_LABEL.to_string(),
            marker: None,
        });
    }

    Ok(ListView {
        list,
        rows,
        mapping,
    })
}

/// Projects both lists. A malformed filter on either list fails the whole call.
pub fn project(lists: &Lists, filters: &Filters) -> Result<View> {
    Ok(View {
        todo: project_list(ListKind::Todo, &lists.todo, filters.get(ListKind::Todo))?,
        pass: project_list(ListKind::Pass, &lists.pass, filters.get(ListKind::Pass))?,
    })
}
