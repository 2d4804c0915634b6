mod action;
mod reducer;
mod state;

pub use action::ItemsAction;
pub use reducer::ItemsReducer;
pub use state::ItemsState;
