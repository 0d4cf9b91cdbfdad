// scmi_responder/src/platform/table.rs
//! Resource tables.

use std::ops::Range;

/// Dense, zero-based table of one resource class.
///
/// Identifiers are positions: there are no gaps and no removal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceTable<T> {
    entries: Vec<T>,
}

impl<T> ResourceTable<T> {
    /// Table whose identifiers are the positions in `entries`.
    pub fn new(entries: Vec<T>) -> Self {
        Self { entries }
    }

    /// Number of resources.
    pub fn count(&self) -> usize {
        self.entries.len()
    }

    /// Resource `id`.
    pub fn descriptor(&self, id: usize) -> Option<&T> {
        self.entries.get(id)
    }

    /// Mutable resource `id`.
    pub fn descriptor_mut(&mut self, id: usize) -> Option<&mut T> {
        self.entries.get_mut(id)
    }

    /// Entries with identifiers in `ids`, clipped to the table.
    pub fn slice(&self, ids: Range<usize>) -> &[T] {
        let end = ids.end.min(self.entries.len());
        let start = ids.start.min(end);
        &self.entries[start..end]
    }
}

impl<T> FromIterator<T> for ResourceTable<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
