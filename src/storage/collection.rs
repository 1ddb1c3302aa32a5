//! Record collection backed by a JSON file
//!
//! Each collection is one JSON array on disk and an id-ordered index in
//! memory. Every mutation is written through to disk before it returns; if
//! the write fails the in-memory index is put back the way it was, so the
//! collection never reports data that is not on disk.

use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use serde::{de::DeserializeOwned, Serialize};

use crate::error::BudgetError;
use crate::models::{ItemId, LedgerItem, Transaction, TransactionId};

use super::file_io::{read_json, write_json_atomic};

/// A record that can be stored in a [`Collection`]
pub trait Record: Clone + Serialize + DeserializeOwned {
    type Id: Copy + Ord + fmt::Display;

    fn id(&self) -> Self::Id;

    /// The id as a plain integer, for seeding the id sequence
    fn raw_id(&self) -> i64;
}

impl Record for LedgerItem {
    type Id = ItemId;

    fn id(&self) -> ItemId {
        self.id
    }

    fn raw_id(&self) -> i64 {
        self.id.raw()
    }
}

impl Record for Transaction {
    type Id = TransactionId;

    fn id(&self) -> TransactionId {
        self.id
    }

    fn raw_id(&self) -> i64 {
        self.id.raw()
    }
}

/// A named collection of records keyed by id
pub struct Collection<T: Record> {
    name: &'static str,
    path: PathBuf,
    data: RwLock<BTreeMap<T::Id, T>>,
}

impl<T: Record> Collection<T> {
    pub fn new(name: &'static str, path: PathBuf) -> Self {
        Self {
            name,
            path,
            data: RwLock::new(BTreeMap::new()),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load records from disk, replacing whatever is in memory
    pub fn load(&self) -> Result<(), BudgetError> {
        let records: Vec<T> = read_json(self.name, &self.path)?;

        let mut data = self.write()?;
        data.clear();
        for record in records {
            data.insert(record.id(), record);
        }

        tracing::debug!(collection = self.name, count = data.len(), "loaded collection");
        Ok(())
    }

    /// All records in id order
    pub fn get_all(&self) -> Result<Vec<T>, BudgetError> {
        Ok(self.read()?.values().cloned().collect())
    }

    pub fn get(&self, id: T::Id) -> Result<Option<T>, BudgetError> {
        Ok(self.read()?.get(&id).cloned())
    }

    /// Insert a new record; fails if the id is already taken
    pub fn add(&self, record: T) -> Result<T::Id, BudgetError> {
        let id = record.id();
        let mut data = self.write()?;

        if data.contains_key(&id) {
            return Err(BudgetError::Duplicate {
                entity_type: "Record",
                identifier: format!("{} in {}", id, self.name),
            });
        }

        data.insert(id, record);
        if let Err(e) = self.persist(&data) {
            data.remove(&id);
            return Err(e);
        }

        tracing::debug!(collection = self.name, %id, "added record");
        Ok(id)
    }

    /// Insert or replace a record
    pub fn put(&self, record: T) -> Result<(), BudgetError> {
        let id = record.id();
        let mut data = self.write()?;

        let previous = data.insert(id, record);
        if let Err(e) = self.persist(&data) {
            match previous {
                Some(old) => data.insert(id, old),
                None => data.remove(&id),
            };
            return Err(e);
        }

        tracing::debug!(collection = self.name, %id, "stored record");
        Ok(())
    }

    /// Delete a record; deleting a missing id is not an error
    pub fn remove(&self, id: T::Id) -> Result<(), BudgetError> {
        let mut data = self.write()?;

        let Some(previous) = data.remove(&id) else {
            return Ok(());
        };
        if let Err(e) = self.persist(&data) {
            data.insert(id, previous);
            return Err(e);
        }

        tracing::debug!(collection = self.name, %id, "removed record");
        Ok(())
    }

    pub fn count(&self) -> Result<usize, BudgetError> {
        Ok(self.read()?.len())
    }

    /// Largest raw id in the collection
    pub fn max_raw_id(&self) -> Result<Option<i64>, BudgetError> {
        Ok(self.read()?.values().map(Record::raw_id).max())
    }

    fn persist(&self, data: &BTreeMap<T::Id, T>) -> Result<(), BudgetError> {
        let records: Vec<&T> = data.values().collect();
        write_json_atomic(self.name, &self.path, &records)
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, BTreeMap<T::Id, T>>, BudgetError> {
        self.data
            .read()
            .map_err(|e| BudgetError::Storage(format!("Failed to acquire read lock: {}", e)))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, BTreeMap<T::Id, T>>, BudgetError> {
        self.data
            .write()
            .map_err(|e| BudgetError::Storage(format!("Failed to acquire write lock: {}", e)))
    }
}
