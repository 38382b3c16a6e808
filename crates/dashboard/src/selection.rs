use std::sync::Mutex;

/// Session-lived selection of record ids for bulk actions.
///
/// An explicit object the presentation layer receives, not a hidden global.
/// Insertion order is preserved so "the first selected record" is meaningful
/// (the edit form targets it). Never persisted across sessions.
pub struct SelectionSet {
    ids: Mutex<Vec<String>>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self {
            ids: Mutex::new(Vec::new()),
        }
    }

    fn with_ids<T>(&self, f: impl FnOnce(&mut Vec<String>) -> T) -> T {
        let mut guard = self.ids.lock().unwrap_or_else(|e| e.into_inner());
        f(&mut guard)
    }

    /// Flip membership of `id`. Toggling twice restores the original state.
    pub fn toggle(&self, id: &str) {
        self.with_ids(|ids| match ids.iter().position(|sid| sid == id) {
            Some(pos) => {
                ids.remove(pos);
            }
            None => ids.push(id.to_string()),
        });
    }

    /// Replace the selection wholesale.
    pub fn select_all(&self, ids: Vec<String>) {
        self.with_ids(|current| *current = ids);
    }

    pub fn clear(&self) {
        self.with_ids(|ids| ids.clear());
    }

    /// Snapshot of the selected ids in insertion order.
    pub fn ids(&self) -> Vec<String> {
        self.with_ids(|ids| ids.clone())
    }

    pub fn contains(&self, id: &str) -> bool {
        self.with_ids(|ids| ids.iter().any(|sid| sid == id))
    }

    pub fn len(&self) -> usize {
        self.with_ids(|ids| ids.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for SelectionSet {
    fn default() -> Self {
        Self::new()
    }
}
