//! Effects for the item list: simulated loads and updates against the
//! in-memory backend.

use std::time::Duration;

use crate::backend::DataStore;
use crate::config::Config;
use crate::items::ItemsAction;
use crate::mvi::{Dispatcher, Effects};

use super::latest::LatestTask;
use super::queue::SerialQueue;

/// Handlers for `LoadItems`, `LoadItem` and `UpdateItem`.
///
/// Full loads are latest-wins: a repeated request abandons the earlier one.
/// Single loads never suspend, so every request is answered.
/// Updates are queued and each one completes, in arrival order.
pub struct ItemEffects {
    store: DataStore,
    load_delay: Duration,
    update_delay: Duration,
    updated_value: String,
    load_all: LatestTask,
    updates: SerialQueue,
}

impl ItemEffects {
    /// Must be called from within a Tokio runtime.
    pub fn new(store: DataStore, config: &Config) -> Self {
        Self {
            store,
            load_delay: config.timing.load_delay(),
            update_delay: config.timing.update_delay(),
            updated_value: config.backend.updated_value.clone(),
            load_all: LatestTask::new("load_items"),
            updates: SerialQueue::new("update_item"),
        }
    }

    /// Updates queued or in flight.
    pub fn pending_updates(&self) -> usize {
        self.updates.pending()
    }

    fn load_items(&mut self, dispatcher: Dispatcher<ItemsAction>) {
        // Copy now, answer later: the response reflects the backend at request time.
        let copy = self.store.snapshot();
        let delay = self.load_delay;
        tracing::debug!(records = copy.len(), ?delay, "Loading all items");

        self.load_all.spawn(async move {
            tokio::time::sleep(delay).await;
            dispatcher.dispatch(ItemsAction::ItemsLoaded(copy));
        });
    }

    fn load_item(&self, id: usize, dispatcher: &Dispatcher<ItemsAction>) {
        match self.store.get(id) {
            Ok(record) => dispatcher.dispatch(ItemsAction::ItemLoaded(record)),
            Err(err) => tracing::warn!(id, error = %err, "Cannot load item"),
        }
    }

    fn update_item(&mut self, id: usize, dispatcher: Dispatcher<ItemsAction>) {
        let store = self.store.clone();
        let delay = self.update_delay;
        let value = self.updated_value.clone();

        self.updates.push(async move {
            tokio::time::sleep(delay).await;
            match store.set_value(id, &value) {
                Ok(()) => {
                    tracing::info!(id, "Item updated");
                    dispatcher.dispatch(ItemsAction::LoadItem { id });
                }
                Err(err) => tracing::warn!(id, error = %err, "Cannot update item"),
            }
        });
    }
}

impl Effects for ItemEffects {
    type Action = ItemsAction;

    fn handle(&mut self, action: &ItemsAction, dispatcher: &Dispatcher<ItemsAction>) {
        match action {
            ItemsAction::LoadItems => self.load_items(dispatcher.clone()),
            ItemsAction::LoadItem { id } => self.load_item(*id, dispatcher),
            ItemsAction::UpdateItem { id } => self.update_item(*id, dispatcher.clone()),
            ItemsAction::ItemsLoaded(_) | ItemsAction::ItemLoaded(_) => {}
        }
    }
}
