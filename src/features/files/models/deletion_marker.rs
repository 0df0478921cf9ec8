use std::sync::{Arc, Mutex, MutexGuard};

/// Id of the file whose delete request is currently in flight.
///
/// A single slot, not a set: starting a second delete overwrites the first id,
/// and whichever request settles first clears the slot. Only the most recently
/// started deletion is ever shown as busy.
#[derive(Debug, Default)]
pub struct DeletionMarker {
    current: Mutex<Option<String>>,
}

impl DeletionMarker {
    pub fn new() -> Self {
        Self::default()
    }

    fn slot(&self) -> MutexGuard<'_, Option<String>> {
        self.current.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn current(&self) -> Option<String> {
        self.slot().clone()
    }

    /// Set the marker to `file_id`; it is cleared when the returned guard drops.
    pub fn mark(self: &Arc<Self>, file_id: &str) -> DeletionGuard {
        *self.slot() = Some(file_id.to_string());
        DeletionGuard {
            marker: Arc::clone(self),
        }
    }

    fn clear(&self) {
        *self.slot() = None;
    }
}

/// Clears the marker on drop, so a dropped request future never leaves it stale
#[must_use = "dropping the guard clears the deletion marker immediately"]
pub struct DeletionGuard {
    marker: Arc<DeletionMarker>,
}

impl Drop for DeletionGuard {
    fn drop(&mut self) {
        self.marker.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mark_and_clear() {
        let marker = Arc::new(DeletionMarker::new());
        assert_eq!(marker.current(), None);

        let guard = marker.mark("b");
        assert_eq!(marker.current().as_deref(), Some("b"));

        drop(guard);
        assert_eq!(marker.current(), None);
    }

    #[test]
    fn test_second_mark_overwrites_and_first_settlement_clears() {
        let marker = Arc::new(DeletionMarker::new());

        let first = marker.mark("a");
        let second = marker.mark("b");
        assert_eq!(marker.current().as_deref(), Some("b"));

        drop(first);
        assert_eq!(marker.current(), None);

        drop(second);
        assert_eq!(marker.current(), None);
    }
}
