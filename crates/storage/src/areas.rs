use std::sync::Arc;

use crate::memory::MemoryStore;
use crate::traits::KeyValueStore;

/// The two storage areas a page can reach.
///
/// `tab` lives only as long as the current tab (process); `persistent`
/// survives restarts.
#[derive(Clone)]
pub struct StorageAreas {
    pub tab: Arc<dyn KeyValueStore>,
    pub persistent: Arc<dyn KeyValueStore>,
}

impl StorageAreas {
    pub fn new(tab: Arc<dyn KeyValueStore>, persistent: Arc<dyn KeyValueStore>) -> Self {
        Self { tab, persistent }
    }

    /// Fresh tab area over an existing persistent area.
    pub fn with_persistent(persistent: Arc<dyn KeyValueStore>) -> Self {
        Self::new(Arc::new(MemoryStore::new()), persistent)
    }

    /// Both areas in memory.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStore::new()), Arc::new(MemoryStore::new()))
    }
}

impl std::fmt::Debug for StorageAreas {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StorageAreas").finish_non_exhaustive()
    }
}
