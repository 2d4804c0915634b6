use serde::Serialize;

use crate::backend::Record;
use crate::mvi::State;

/// Application state: the records visible to views.
///
/// `items` is `None` until the first full load arrives.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ItemsState {
    pub items: Option<Vec<Record>>,
}

impl ItemsState {
    pub fn loaded(items: Vec<Record>) -> Self {
        Self { items: Some(items) }
    }

    pub fn is_loaded(&self) -> bool {
        self.items.is_some()
    }

    /// Record at `id`, if loaded and in range.
    pub fn item(&self, id: usize) -> Option<&Record> {
        self.items.as_ref().and_then(|items| items.get(id))
    }
}

impl State for ItemsState {}
