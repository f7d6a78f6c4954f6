//! In-memory catalog store.
//!
//! Owns all items, borrowers and the lending relation, and enforces
//! the catalog invariants. Operations return structured results; the
//! interaction layer alone decides how to render them.

pub mod lending;

use crate::error::{AppError, AppResult};
use crate::models::{Item, ItemKind};
use crate::records::ItemRecord;
use lending::Lending;

/// Outcome of a successful borrow
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BorrowReceipt {
    pub user_id: u32,
    pub item_id: u32,
    /// Whether the borrower was registered by this borrow
    pub new_borrower: bool,
}

/// One borrower's current holdings, for display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BorrowerHoldings {
    pub user_id: u32,
    pub titles: Vec<String>,
}

/// The catalog store. Single-writer, synchronous by design.
#[derive(Debug)]
pub struct Catalog {
    items: Vec<Item>,
    lending: Lending,
    next_item_id: u32,
}

impl Catalog {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            lending: Lending::new(),
            next_item_id: 1,
        }
    }

    fn assign_item_id(&mut self) -> u32 {
        let id = self.next_item_id;
        self.next_item_id += 1;
        id
    }

    /// Add an item to the catalog, assigning the next id
    pub fn add_item(&mut self, title: String, kind: ItemKind) -> &Item {
        let id = self.assign_item_id();
        let pos = self.items.len();
        self.items.push(Item::new(id, title, kind));
        &self.items[pos]
    }

    /// Append pre-parsed load-file records, assigning ids in record order
    pub fn load_records(&mut self, records: Vec<ItemRecord>) {
        for record in records {
            self.add_item(record.title, record.kind);
        }
    }

    /// Replace the title of the matching item
    pub fn edit_item(&mut self, id: u32, new_title: String) -> AppResult<()> {
        let item = self
            .items
            .iter_mut()
            .find(|i| i.id == id)
            .ok_or(AppError::ItemNotFound(id))?;
        item.title = new_title;
        Ok(())
    }

    /// Remove an item, clearing any lending relation referencing it
    pub fn delete_item(&mut self, id: u32) -> AppResult<Item> {
        let pos = self
            .items
            .iter()
            .position(|i| i.id == id)
            .ok_or(AppError::ItemNotFound(id))?;
        if let Some(holder) = self.lending.release_item(id) {
            tracing::debug!("Deleted item {} was on loan to user {}", id, holder);
        }
        Ok(self.items.remove(pos))
    }

    /// Single-item lookup
    pub fn item(&self, id: u32) -> AppResult<&Item> {
        self.items
            .iter()
            .find(|i| i.id == id)
            .ok_or(AppError::ItemNotFound(id))
    }

    /// All items, in catalog insertion order
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Items sorted by popularity descending. The sort is stable:
    /// ties keep their relative insertion order.
    pub fn hot_picks(&self) -> Vec<&Item> {
        let mut picks: Vec<&Item> = self.items.iter().collect();
        picks.sort_by_key(|i| std::cmp::Reverse(i.popularity));
        picks
    }

    /// Borrow an item. With `user` set, the existing borrower is
    /// reused; without it, a new borrower is registered. A failed
    /// borrow changes no state.
    pub fn borrow_item(&mut self, user: Option<u32>, item_id: u32) -> AppResult<BorrowReceipt> {
        // Run every check before mutating anything.
        let pos = self
            .items
            .iter()
            .position(|i| i.id == item_id)
            .ok_or(AppError::ItemNotFound(item_id))?;
        if let Some(user_id) = user {
            if self.lending.borrower(user_id).is_none() {
                return Err(AppError::UserNotFound(user_id));
            }
        }
        if let Some(holder) = self.lending.holder_of(item_id) {
            return match user {
                Some(user_id) if user_id == holder => {
                    Err(AppError::DuplicateBorrow { user_id, item_id })
                }
                _ => Err(AppError::AlreadyBorrowed { item_id, holder }),
            };
        }

        let (user_id, new_borrower) = match user {
            Some(user_id) => (user_id, false),
            None => (self.lending.register_borrower(), true),
        };
        self.lending.record_loan(user_id, item_id);
        self.items[pos].popularity += 1;

        Ok(BorrowReceipt {
            user_id,
            item_id,
            new_borrower,
        })
    }

    /// Return a borrowed item, releasing its loan from both views.
    /// Reports the user id that held it. Popularity is unchanged.
    pub fn return_item(&mut self, item_id: u32) -> AppResult<u32> {
        if !self.items.iter().any(|i| i.id == item_id) {
            return Err(AppError::ItemNotFound(item_id));
        }
        self.lending
            .release_item(item_id)
            .ok_or(AppError::NotBorrowed(item_id))
    }

    /// Per known borrower, the titles currently held, in registration order
    pub fn borrower_holdings(&self) -> Vec<BorrowerHoldings> {
        self.lending
            .borrowers()
            .iter()
            .map(|borrower| BorrowerHoldings {
                user_id: borrower.user_id,
                titles: borrower
                    .held_items()
                    .filter_map(|item_id| self.item(item_id).ok())
                    .map(|item| item.title.clone())
                    .collect(),
            })
            .collect()
    }

    /// Number of loans currently outstanding
    pub fn active_loans(&self) -> usize {
        self.lending.active_loans()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}
