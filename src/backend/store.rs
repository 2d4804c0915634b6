//! In-memory record store standing in for a remote service.

use std::sync::Arc;

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::BackendConfig;

/// A single record. The id is its position in the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub id: usize,
    pub value: String,
}

impl Record {
    pub fn new(id: usize, value: impl Into<String>) -> Self {
        Self {
            id,
            value: value.into(),
        }
    }
}

/// Errors that can occur during store operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The requested id is not a valid index into the store.
    #[error("Record {id} out of range (store holds {len} records)")]
    OutOfRange { id: usize, len: usize },
}

/// Shared handle to the record store.
///
/// The records live behind a single `Arc<Vec<_>>` that is swapped as a
/// whole on `replace`; readers never observe a partially written sequence.
#[derive(Clone)]
pub struct DataStore {
    inner: Arc<RwLock<Arc<Vec<Record>>>>,
}

impl DataStore {
    /// Create a store from an explicit list of records.
    pub fn new(records: Vec<Record>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(Arc::new(records))),
        }
    }

    /// Create a store from configured seed values, assigning ids by position.
    pub fn from_config(config: &BackendConfig) -> Self {
        Self::from_values(config.seed.iter().cloned())
    }

    pub fn from_values<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let records = values
            .into_iter()
            .enumerate()
            .map(|(id, value)| Record::new(id, value))
            .collect();
        Self::new(records)
    }

    /// Element-wise copy of the current contents.
    pub fn snapshot(&self) -> Vec<Record> {
        self.inner.read().to_vec()
    }

    /// Copy of a single record.
    pub fn get(&self, id: usize) -> Result<Record, StoreError> {
        let records = self.inner.read();
        records.get(id).cloned().ok_or(StoreError::OutOfRange {
            id,
            len: records.len(),
        })
    }

    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    /// Replace the whole sequence in one swap.
    pub fn replace(&self, records: Vec<Record>) {
        *self.inner.write() = Arc::new(records);
    }

    /// Copy the store, set the value of one record, and swap the copy in.
    ///
    /// The store is unchanged on error.
    pub fn set_value(&self, id: usize, value: &str) -> Result<(), StoreError> {
        let mut next = self.snapshot();
        let len = next.len();
        let record = next
            .get_mut(id)
            .ok_or(StoreError::OutOfRange { id, len })?;
        record.value = value.to_string();
        self.replace(next);

        tracing::debug!(id, value, "Record updated");
        Ok(())
    }
}
