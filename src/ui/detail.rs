//! Detail view for a single record.

use crate::items::{ItemsAction, ItemsState};
use crate::mvi::Dispatcher;
use crate::router::Route;

pub fn update(dispatcher: &Dispatcher<ItemsAction>, id: usize) {
    dispatcher.dispatch(ItemsAction::UpdateItem { id });
}

pub fn render(state: &ItemsState, id: usize) -> String {
    if !state.is_loaded() {
        return format!("Loading item {id}...\n[back: {}]\n", Route::List);
    }
    match state.item(id) {
        Some(item) => format!(
            "id {}: {}\n[update] [back: {}]\n",
            item.id,
            item.value,
            Route::List
        ),
        None => format!("Item {id} not found\n[back: {}]\n", Route::List),
    }
}
