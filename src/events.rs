//! State-change notifications.
//!
//! Every successful append emits `LeafAdded` followed by `RootUpdated` to each
//! registered observer. Observers see events only after the new root has been
//! computed, and a panicking observer rolls the append back.

use serde::{Deserialize, Serialize};

use crate::types::Node;

/// Notification emitted by [`MerkleTree::add_leaf`](crate::service::MerkleTree::add_leaf).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TreeEvent {
    /// A leaf was appended at `index`.
    LeafAdded { value: Node, index: u64 },
    /// The root was recomputed after an append.
    RootUpdated { root: Node },
}

/// Receiver of [`TreeEvent`]s.
pub trait TreeObserver: Send + Sync {
    fn on_event(&mut self, event: &TreeEvent);
}

impl<F> TreeObserver for F
where
    F: FnMut(&TreeEvent) + Send + Sync,
{
    fn on_event(&mut self, event: &TreeEvent) {
        self(event)
    }
}

#[cfg(feature = "std")]
pub use recorder::EventRecorder;

#[cfg(feature = "std")]
mod recorder {
    use std::sync::{Arc, Mutex, MutexGuard};

    use super::{TreeEvent, TreeObserver};

    /// Observer that keeps every event in memory.
    ///
    /// Clones share the same log, so one clone can be registered with a tree
    /// while another is kept to inspect what was emitted.
    #[derive(Clone, Debug, Default)]
    pub struct EventRecorder {
        events: Arc<Mutex<Vec<TreeEvent>>>,
    }

    impl EventRecorder {
        pub fn new() -> Self {
            Self::default()
        }

        fn lock(&self) -> MutexGuard<'_, Vec<TreeEvent>> {
            // A poisoned log is still a valid log.
            self.events.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
        }

        /// Snapshot of all recorded events, oldest first.
        pub fn events(&self) -> Vec<TreeEvent> {
            self.lock().clone()
        }

        pub fn len(&self) -> usize {
            self.lock().len()
        }

        pub fn is_empty(&self) -> bool {
            self.lock().is_empty()
        }

        /// Remove and return all recorded events.
        pub fn drain(&self) -> Vec<TreeEvent> {
            core::mem::take(&mut *self.lock())
        }
    }

    impl TreeObserver for EventRecorder {
        fn on_event(&mut self, event: &TreeEvent) {
            self.lock().push(event.clone());
        }
    }
}
