//! Actions driving the item list and its effects.

use crate::backend::Record;
use crate::mvi::Action;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemsAction {
    /// Request the whole collection.
    LoadItems,
    /// Full collection arrived; replaces the list.
    ItemsLoaded(Vec<Record>),
    /// Request a single record by id.
    LoadItem { id: usize },
    /// Single record arrived; patches the list at its id.
    ItemLoaded(Record),
    /// Submit an edit of the record at `id`.
    UpdateItem { id: usize },
}

impl Action for ItemsAction {}
