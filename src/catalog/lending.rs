//! Lending relation between items and borrowers.
//!
//! The relation is kept in two views that must stay consistent: an
//! ordered item-to-user map, and each borrower's held-item set. All
//! mutation goes through this module so both views move together.

use indexmap::IndexMap;

use crate::models::Borrower;

/// Tracks registered borrowers and which borrower holds which item.
/// At most one borrower per item.
#[derive(Debug)]
pub struct Lending {
    borrowers: Vec<Borrower>,
    // item id -> user id
    loans: IndexMap<u32, u32>,
    next_user_id: u32,
}

impl Lending {
    pub fn new() -> Self {
        Self {
            borrowers: Vec::new(),
            loans: IndexMap::new(),
            next_user_id: 1,
        }
    }

    /// Register a new borrower with the next sequential user id
    pub fn register_borrower(&mut self) -> u32 {
        let user_id = self.next_user_id;
        self.next_user_id += 1;
        self.borrowers.push(Borrower::new(user_id));
        user_id
    }

    pub fn borrower(&self, user_id: u32) -> Option<&Borrower> {
        self.borrowers.iter().find(|b| b.user_id == user_id)
    }

    fn borrower_mut(&mut self, user_id: u32) -> Option<&mut Borrower> {
        self.borrowers.iter_mut().find(|b| b.user_id == user_id)
    }

    /// All known borrowers, in registration order
    pub fn borrowers(&self) -> &[Borrower] {
        &self.borrowers
    }

    /// The user currently holding the item, if any
    pub fn holder_of(&self, item_id: u32) -> Option<u32> {
        self.loans.get(&item_id).copied()
    }

    /// Record a loan in both views. The caller must have verified that
    /// the item is unborrowed and the user is registered.
    pub fn record_loan(&mut self, user_id: u32, item_id: u32) {
        self.loans.insert(item_id, user_id);
        if let Some(borrower) = self.borrower_mut(user_id) {
            borrower.add_held(item_id);
        }
    }

    /// Drop any loan referencing the item, clearing both views.
    /// Returns the user id that held it, if it was on loan.
    pub fn release_item(&mut self, item_id: u32) -> Option<u32> {
        let user_id = self.loans.shift_remove(&item_id)?;
        if let Some(borrower) = self.borrower_mut(user_id) {
            borrower.remove_held(item_id);
        }
        Some(user_id)
    }

    pub fn active_loans(&self) -> usize {
        self.loans.len()
    }
}

impl Default for Lending {
    fn default() -> Self {
        Self::new()
    }
}
