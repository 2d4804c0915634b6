//! Simulated backend.
//!
//! Provides the shared record store that effects read from and write to.
//! Stands in for a remote service; all state is transient and in-process.

mod store;

pub use store::{DataStore, Record, StoreError};
