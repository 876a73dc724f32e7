use super::DataStore;
use crate::error::{Result, TicklistError};
use crate::model::ItemLists;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    lists: Option<ItemLists>,
    saves: usize,
    simulate_read_error: bool,
    simulate_write_error: bool,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_items(lists: ItemLists) -> Self {
        Self {
            lists: Some(lists),
            ..Self::default()
        }
    }

    /// Make loads fail with an IO error, as an unreadable data file would.
    pub fn set_simulate_read_error(&mut self, simulate: bool) {
        self.simulate_read_error = simulate;
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&mut self, simulate: bool) {
        self.simulate_write_error = simulate;
    }

    /// What the last successful save wrote, if anything.
    pub fn saved(&self) -> Option<&ItemLists> {
        self.lists.as_ref()
    }

    /// Number of successful saves so far.
    pub fn save_count(&self) -> usize {
        self.saves
    }
}

impl DataStore for InMemoryStore {
    fn load_items(&self) -> Result<Option<ItemLists>> {
        if self.simulate_read_error {
            return Err(TicklistError::Io(std::io::Error::new(
                std::io::ErrorKind::PermissionDenied,
                "Simulated read error",
            )));
        }
        Ok(self.lists.clone())
    }

    fn save_items(&mut self, lists: &ItemLists) -> Result<()> {
        if self.simulate_write_error {
            return Err(TicklistError::Store("Simulated write error".to_string()));
        }
        self.lists = Some(lists.clone());
        self.saves += 1;
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::lists::ListStore;

    /// Builds a [`ListStore`] over an [`InMemoryStore`] with preset contents.
    #[derive(Default)]
    pub struct StoreFixture {
        todo: Vec<String>,
        pass: Vec<String>,
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_todo(mut self, items: &[&str]) -> Self {
            self.todo.extend(items.iter().map(|s| s.to_string()));
            self
        }

        pub fn with_pass(mut self, items: &[&str]) -> Self {
            self.pass.extend(items.iter().map(|s| s.to_string()));
            self
        }

        pub fn build(self) -> ListStore<InMemoryStore> {
            let lists = ItemLists::new(self.todo, self.pass);
            ListStore::new(InMemoryStore::with_items(lists.clone()), lists.into())
        }
    }
}
