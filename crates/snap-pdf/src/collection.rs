//! Ordered image collection
//!
//! The collection is the single source of page order. Positions are the
//! only identity an entry has; every mutation bumps a revision counter so
//! observers (an in-flight drag, a cached estimate) can tell the order
//! changed underneath them.

use crate::types::ImageItem;

#[derive(Debug, Clone, PartialEq)]
pub struct Collection<T = ImageItem> {
    items: Vec<T>,
    revision: u64,
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            revision: 0,
        }
    }
}

impl<T> Collection<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append items to the end, keeping their relative order.
    pub fn add(&mut self, items: impl IntoIterator<Item = T>) {
        let before = self.items.len();
        self.items.extend(items);
        if self.items.len() != before {
            self.revision += 1;
        }
    }

    /// Remove the item at `index`. Out-of-range indices are ignored.
    pub fn remove_at(&mut self, index: usize) -> Option<T> {
        if index >= self.items.len() {
            return None;
        }
        self.revision += 1;
        Some(self.items.remove(index))
    }

    /// Take the item at `from` out and reinsert it at `to`, where `to` is a
    /// position in the sequence after removal. Returns whether the order
    /// changed.
    ///
    /// Moving 0 to 2 in `[A, B, C, D]` yields `[B, C, A, D]`.
    pub fn move_to(&mut self, from: usize, to: usize) -> bool {
        let len = self.items.len();
        if from >= len || to >= len || from == to {
            return false;
        }
        let item = self.items.remove(from);
        self.items.insert(to, item);
        self.revision += 1;
        true
    }

    pub fn clear(&mut self) {
        if !self.items.is_empty() {
            self.items.clear();
            self.revision += 1;
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Counter bumped by every mutation that changed the sequence
    pub fn revision(&self) -> u64 {
        self.revision
    }
}

impl<T: Clone> Collection<T> {
    /// Owned copy of the current order, used as a frozen view by readers
    /// that outlive the current event (generation).
    pub fn snapshot(&self) -> Vec<T> {
        self.items.clone()
    }
}

impl<T> FromIterator<T> for Collection<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut collection = Self::new();
        collection.add(iter);
        collection
    }
}

impl<'a, T> IntoIterator for &'a Collection<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
