//! List view: every record with a link to its detail page.

use crate::items::{ItemsAction, ItemsState};
use crate::mvi::Dispatcher;
use crate::router::Route;

/// Mounting the list requests a fresh load.
pub fn mount(dispatcher: &Dispatcher<ItemsAction>) {
    dispatcher.dispatch(ItemsAction::LoadItems);
}

pub fn reload(dispatcher: &Dispatcher<ItemsAction>) {
    dispatcher.dispatch(ItemsAction::LoadItems);
}

pub fn render(state: &ItemsState) -> String {
    let mut out = String::new();
    match &state.items {
        None => out.push_str("Loading items...\n"),
        Some(items) if items.is_empty() => out.push_str("No items\n"),
        Some(items) => {
            for item in items {
                let link = Route::Item { id: item.id };
                out.push_str(&format!("{}: {} [open: {}]\n", item.id, item.value, link));
            }
        }
    }
    out.push_str("[reload]\n");
    out
}
