use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque identity of an item for the lifetime of a session.
///
/// Ids are handed out when an item enters memory and are not written to disk;
/// the data file keeps plain strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(Uuid);

impl ItemId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ItemId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ListKind {
    Todo,
    Pass,
}

impl std::fmt::Display for ListKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ListKind::Todo => write!(f, "todo"),
            ListKind::Pass => write!(f, "pass"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub id: ItemId,
    pub text: String,
}

impl Item {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            id: ItemId::new(),
            text: text.into(),
        }
    }
}

/// The on-disk shape of the data file: `{"todo": [...], "pass": [...]}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemLists {
    #[serde(default)]
    pub todo: Vec<String>,
    #[serde(default)]
    pub pass: Vec<String>,
}

impl ItemLists {
    pub fn new(todo: Vec<String>, pass: Vec<String>) -> Self {
        Self { todo, pass }
    }

    /// Data used when no readable data file exists yet.
    pub fn seed() -> Self {
        Self {
            todo: vec!["add a todo item".to_string()],
            pass: vec!["launch this simple todo list".to_string()],
        }
    }
}

/// Both lists as held in memory, each item tagged with its session id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Lists {
    pub todo: Vec<Item>,
    pub pass: Vec<Item>,
}

impl Lists {
    pub fn get(&self, kind: ListKind) -> &[Item] {
        match kind {
            ListKind::Todo => &self.todo,
            ListKind::Pass => &self.pass,
        }
    }

    pub fn get_mut(&mut self, kind: ListKind) -> &mut Vec<Item> {
        match kind {
            ListKind::Todo => &mut self.todo,
            ListKind::Pass => &mut self.pass,
        }
    }

    pub fn position(&self, kind: ListKind, id: ItemId) -> Option<usize> {
        self.get(kind).iter().position(|item| item.id == id)
    }

    pub fn texts(&self, kind: ListKind) -> Vec<String> {
        self.get(kind).iter().map(|item| item.text.clone()).collect()
    }

    pub fn to_item_lists(&self) -> ItemLists {
        ItemLists {
            todo: self.texts(ListKind::Todo),
            pass: self.texts(ListKind::Pass),
        }
    }
}

impl From<ItemLists> for Lists {
    fn from(data: ItemLists) -> Self {
        Self {
            todo: data.todo.into_iter().map(Item::new).collect(),
            pass: data.pass.into_iter().map(Item::new).collect(),
        }
    }
}
