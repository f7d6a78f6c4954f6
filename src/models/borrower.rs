//! Borrower model

use indexmap::IndexSet;
use serde::Serialize;

/// A library user who can hold items. User ids are assigned
/// sequentially starting at 1; borrowers persist for the session.
#[derive(Debug, Clone, Serialize)]
pub struct Borrower {
    pub user_id: u32,
    held: IndexSet<u32>,
}

impl Borrower {
    pub fn new(user_id: u32) -> Self {
        Self {
            user_id,
            held: IndexSet::new(),
        }
    }

    /// Whether this borrower currently holds the given item
    pub fn holds(&self, item_id: u32) -> bool {
        self.held.contains(&item_id)
    }

    /// Item ids currently held, in borrow order
    pub fn held_items(&self) -> impl Iterator<Item = u32> + '_ {
        self.held.iter().copied()
    }

    pub(crate) fn add_held(&mut self, item_id: u32) -> bool {
        self.held.insert(item_id)
    }

    pub(crate) fn remove_held(&mut self, item_id: u32) -> bool {
        self.held.shift_remove(&item_id)
    }
}
