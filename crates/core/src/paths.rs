//! Filesystem locations for the persistent storage area.

use std::path::PathBuf;

use crate::constants::{APP_DIR_NAME, LOCAL_STORAGE_FILE};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataPaths {
    root: PathBuf,
}

impl DataPaths {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// `<platform data dir>/cafe-admin`, or `./cafe-admin` when the platform
    /// reports no data directory.
    #[must_use]
    pub fn platform_default() -> Self {
        let base = dirs::data_local_dir().unwrap_or_else(|| {
            tracing::warn!("no platform data directory, using current directory");
            PathBuf::from(".")
        });
        Self::new(base.join(APP_DIR_NAME))
    }

    /// JSON file backing the persistent storage area.
    #[must_use]
    pub fn local_storage_file(&self) -> PathBuf {
        self.root.join(LOCAL_STORAGE_FILE)
    }
}
