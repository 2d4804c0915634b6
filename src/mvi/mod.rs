//! Unidirectional data flow primitives.
//!
//! # Architecture
//!
//! ```text
//! Action ──→ Reducer ──→ State ──→ View
//!    │  ↑                           │
//!    │  └──────────── dispatch ─────┘
//!    ↓  │
//!  Effects (async, emit follow-up actions)
//! ```
//!
//! - **State**: Immutable representation of application state
//! - **Action**: View intents, effect results
//! - **Reducer**: Pure function that transforms state based on actions
//! - **Effects**: Asynchronous handlers that react to actions

mod action;
mod effects;
mod reducer;
mod state;

pub use action::Action;
pub use effects::{Dispatcher, Effects};
pub use reducer::Reducer;
pub use state::State;
