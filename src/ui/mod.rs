//! Text views over the item store and the shell that drives them.

pub mod app;
pub mod detail;
pub mod input;
pub mod list;
pub mod oneshot;
pub mod runtime;
