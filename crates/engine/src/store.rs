//! The ledger store: the ordered list of entries.
//!
//! Entries are kept newest first. Every effective mutation re-sorts the whole
//! list and hands the full slice to subscribers; an out-of-range index is a
//! silent no-op and notifies nobody.
use core::fmt;

use tracing::{debug, info};

use crate::{Entry, EntryId};

type Subscriber = Box<dyn FnMut(&[Entry])>;

#[derive(Default)]
pub struct LedgerStore {
    entries: Vec<Entry>,
    revision: u64,
    subscribers: Vec<Subscriber>,
}

impl fmt::Debug for LedgerStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LedgerStore")
            .field("entries", &self.entries)
            .field("revision", &self.revision)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

impl LedgerStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn get(&self, index: usize) -> Option<&Entry> {
        self.entries.get(index)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Bumped on every effective mutation.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Current position of the entry with `id`.
    pub fn position_of(&self, id: EntryId) -> Option<usize> {
        self.entries.iter().position(|entry| entry.id == id)
    }

    /// Registers a callback that receives the full ordered list after each
    /// mutation.
    pub fn subscribe(&mut self, subscriber: impl FnMut(&[Entry]) + 'static) {
        self.subscribers.push(Box::new(subscriber));
    }

    pub fn add(&mut self, entry: Entry) {
        info!(id = %entry.id, account = %entry.account, "entry added");
        self.entries.push(entry);
        self.sort();
        self.publish();
    }

    /// Replaces the entry at `index` and returns the old one, or `None` when
    /// `index` is out of bounds.
    pub fn replace_at(&mut self, index: usize, entry: Entry) -> Option<Entry> {
        let Some(slot) = self.entries.get_mut(index) else {
            debug!(index, len = self.entries.len(), "replace ignored: index out of bounds");
            return None;
        };
        let previous = std::mem::replace(slot, entry);
        info!(index, id = %previous.id, "entry replaced");
        self.sort();
        self.publish();
        Some(previous)
    }

    /// Removes the entry at `index`, shifting later entries down by one.
    pub fn remove_at(&mut self, index: usize) -> Option<Entry> {
        if index >= self.entries.len() {
            debug!(index, len = self.entries.len(), "remove ignored: index out of bounds");
            return None;
        }
        let removed = self.entries.remove(index);
        info!(index, id = %removed.id, "entry removed");
        self.publish();
        Some(removed)
    }

    /// Date descending. The sort is stable, so entries sharing a date keep
    /// their relative order.
    fn sort(&mut self) {
        self.entries.sort_by(|a, b| b.date.cmp(&a.date));
    }

    fn publish(&mut self) {
        self.revision += 1;
        for subscriber in &mut self.subscribers {
            subscriber(&self.entries);
        }
    }
}
