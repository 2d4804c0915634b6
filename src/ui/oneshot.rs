//! Non-interactive flows: drive the store to a result, then render once.

use thiserror::Error;
use tokio::sync::broadcast::error::RecvError;

use crate::items::{ItemsAction, ItemsReducer, ItemsState};
use crate::runtime::Store;
use crate::ui::{detail, list};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OneShotError {
    #[error("Item {id} not found")]
    NotFound { id: usize },

    #[error("Store stopped before the request completed")]
    StoreStopped,
}

/// Load the list and render it.
pub async fn show_list(store: &Store<ItemsReducer>) -> Result<String, OneShotError> {
    let state = load_all(store).await?;
    Ok(list::render(&state))
}

/// Load the list and render the detail page for `id`.
pub async fn show_item(store: &Store<ItemsReducer>, id: usize) -> Result<String, OneShotError> {
    let state = load_all(store).await?;
    if state.item(id).is_none() {
        return Err(OneShotError::NotFound { id });
    }
    Ok(detail::render(&state, id))
}

/// Update `id`, wait for the refreshed record, and render its detail page.
pub async fn update_item(store: &Store<ItemsReducer>, id: usize) -> Result<String, OneShotError> {
    let state = load_all(store).await?;
    if state.item(id).is_none() {
        return Err(OneShotError::NotFound { id });
    }

    let mut actions = store.actions();
    detail::update(&store.dispatcher(), id);

    loop {
        match actions.recv().await {
            Ok(ItemsAction::ItemLoaded(record)) if record.id == id => break,
            Ok(_) => {}
            Err(RecvError::Lagged(skipped)) => {
                tracing::debug!(skipped, "Action tap lagged");
            }
            Err(RecvError::Closed) => return Err(OneShotError::StoreStopped),
        }
    }

    Ok(detail::render(&store.state(), id))
}

async fn load_all(store: &Store<ItemsReducer>) -> Result<ItemsState, OneShotError> {
    let mut actions = store.actions();
    list::mount(&store.dispatcher());

    loop {
        match actions.recv().await {
            Ok(ItemsAction::ItemsLoaded(_)) => break,
            Ok(_) => {}
            Err(RecvError::Lagged(skipped)) => {
                tracing::debug!(skipped, "Action tap lagged");
            }
            Err(RecvError::Closed) => return Err(OneShotError::StoreStopped),
        }
    }

    Ok(store.state())
}
