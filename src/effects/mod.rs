//! Effect scheduling primitives and the item effects built on them.
//!
//! Two distinct policies:
//! - [`LatestTask`]: single slot, a new request aborts the one in flight.
//! - [`SerialQueue`]: FIFO, one job in flight, nothing is dropped.

mod items;
mod latest;
mod queue;

pub use items::ItemEffects;
pub use latest::LatestTask;
pub use queue::SerialQueue;
