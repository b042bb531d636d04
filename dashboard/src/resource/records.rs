//! Locally mirrored record lists

use std::collections::HashSet;

use dashboard_api::{ProjectRecord, RecordId, RepositoryRecord};

/// A record with an externally assigned identifier
pub trait Identified {
    fn id(&self) -> &RecordId;
    fn name(&self) -> &str;
}

impl Identified for RepositoryRecord {
    fn id(&self) -> &RecordId {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl Identified for ProjectRecord {
    fn id(&self) -> &RecordId {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Ordered list, most recent first, unique by identifier
#[derive(Debug, Clone, PartialEq)]
pub struct RecordList<T> {
    items: Vec<T>,
}

impl<T> Default for RecordList<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T: Identified + Clone> RecordList<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole list with a fresh fetch, dropping repeated ids
    pub fn replace_all(&mut self, records: Vec<T>) {
        let mut seen = HashSet::new();
        self.items = records
            .into_iter()
            .filter(|r| seen.insert(r.id().clone()))
            .collect();
    }

    /// Put a record at the front; an older copy with the same id is removed
    pub fn prepend(&mut self, record: T) {
        self.items.retain(|r| r.id() != record.id());
        self.items.insert(0, record);
    }

    pub fn get(&self, id: &RecordId) -> Option<&T> {
        self.items.iter().find(|r| r.id() == id)
    }

    pub fn first(&self) -> Option<&T> {
        self.items.first()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn to_vec(&self) -> Vec<T> {
        self.items.clone()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
