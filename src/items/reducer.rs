//! Reducer for the item list.

use crate::mvi::Reducer;

use super::action::ItemsAction;
use super::state::ItemsState;

/// Pure function; requests are handled by effects, only results land here.
pub struct ItemsReducer;

impl Reducer for ItemsReducer {
    type State = ItemsState;
    type Action = ItemsAction;

    fn reduce(state: Self::State, action: Self::Action) -> Self::State {
        match action {
            ItemsAction::ItemsLoaded(items) => ItemsState::loaded(items),

            ItemsAction::ItemLoaded(record) => match state.items {
                Some(mut items) if record.id < items.len() => {
                    let index = record.id;
                    items[index] = record;
                    ItemsState::loaded(items)
                }
                // Out of range or not loaded yet: nothing to patch
                items => ItemsState { items },
            },

            ItemsAction::LoadItems
            | ItemsAction::LoadItem { .. }
            | ItemsAction::UpdateItem { .. } => state,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::Record;

    fn two_items() -> ItemsState {
        ItemsState::loaded(vec![Record::new(0, "a"), Record::new(1, "b")])
    }

    #[test]
    fn items_loaded_replaces_everything() {
        let payload = vec![Record::new(0, "one"), Record::new(1, "two")];
        let state = ItemsReducer::reduce(two_items(), ItemsAction::ItemsLoaded(payload.clone()));
        assert_eq!(state.items, Some(payload));
    }

    #[test]
    fn items_loaded_from_initial_state() {
        let state = ItemsReducer::reduce(
            ItemsState::default(),
            ItemsAction::ItemsLoaded(vec![Record::new(0, "one")]),
        );
        assert_eq!(state, ItemsState::loaded(vec![Record::new(0, "one")]));
    }

    #[test]
    fn items_loaded_with_empty_payload() {
        let state = ItemsReducer::reduce(two_items(), ItemsAction::ItemsLoaded(Vec::new()));
        assert_eq!(state.items, Some(Vec::new()));
        assert!(state.is_loaded());
    }

    #[test]
    fn item_loaded_patches_single_element() {
        let state = ItemsReducer::reduce(
            two_items(),
            ItemsAction::ItemLoaded(Record::new(1, "X")),
        );
        assert_eq!(
            state.items,
            Some(vec![Record::new(0, "a"), Record::new(1, "X")])
        );
    }

    #[test]
    fn item_loaded_out_of_range_is_noop() {
        let state = ItemsReducer::reduce(
            two_items(),
            ItemsAction::ItemLoaded(Record::new(7, "X")),
        );
        assert_eq!(state, two_items());
    }

    #[test]
    fn item_loaded_before_load_is_noop() {
        let state = ItemsReducer::reduce(
            ItemsState::default(),
            ItemsAction::ItemLoaded(Record::new(0, "X")),
        );
        assert!(!state.is_loaded());
    }

    #[test]
    fn requests_pass_state_through() {
        for action in [
            ItemsAction::LoadItems,
            ItemsAction::LoadItem { id: 0 },
            ItemsAction::UpdateItem { id: 1 },
        ] {
            assert_eq!(ItemsReducer::reduce(two_items(), action), two_items());
        }
    }
}
