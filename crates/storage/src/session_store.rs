use cafe_admin_core::Session;
use cafe_admin_core::constants::SESSION_KEY;

use crate::areas::StorageAreas;
use crate::error::StorageError;
use crate::traits::KeyValueStore;

/// Reads and writes the single session record across both storage areas.
#[derive(Debug, Clone)]
pub struct SessionStore {
    areas: StorageAreas,
}

impl SessionStore {
    #[must_use]
    pub const fn new(areas: StorageAreas) -> Self {
        Self { areas }
    }

    /// Current session, tab area first, then persistent.
    ///
    /// Any failure (unreadable store, malformed record) reads as "no session".
    /// A malformed tab record does not fall through to the persistent area.
    pub fn read(&self) -> Option<Session> {
        match read_record(self.areas.tab.as_ref(), "tab") {
            Lookup::Found(session) => Some(session),
            Lookup::Failed => None,
            Lookup::Missing => match read_record(self.areas.persistent.as_ref(), "persistent") {
                Lookup::Found(session) => Some(session),
                Lookup::Failed | Lookup::Missing => None,
            },
        }
    }

    /// Whether a valid session exists.
    pub fn is_logged_in(&self) -> bool {
        self.read().is_some()
    }

    /// Store `session` in exactly one area: persistent when `remember`, tab otherwise.
    ///
    /// # Errors
    /// Returns error if either area fails to write.
    pub fn write(&self, session: &Session, remember: bool) -> Result<(), StorageError> {
        let payload = serde_json::to_string(session)?;
        let (target, other) = if remember {
            (&self.areas.persistent, &self.areas.tab)
        } else {
            (&self.areas.tab, &self.areas.persistent)
        };
        target.set(SESSION_KEY, &payload)?;
        other.remove(SESSION_KEY)?;
        tracing::debug!(user = %session.user, remember, "session written");
        Ok(())
    }

    /// Remove the session from both areas.
    ///
    /// # Errors
    /// Returns error if either area fails to remove the key.
    pub fn clear(&self) -> Result<(), StorageError> {
        self.areas.persistent.remove(SESSION_KEY)?;
        self.areas.tab.remove(SESSION_KEY)?;
        Ok(())
    }
}

enum Lookup {
    Found(Session),
    Missing,
    Failed,
}

fn read_record(area: &dyn KeyValueStore, label: &'static str) -> Lookup {
    let raw = match area.get(SESSION_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => return Lookup::Missing,
        Err(e) => {
            tracing::warn!(area = label, error = %e, "session area unreadable");
            return Lookup::Failed;
        },
    };
    match serde_json::from_str::<Option<Session>>(&raw) {
        Ok(Some(session)) => Lookup::Found(session),
        // a stored `null` counts as absent
        Ok(None) => Lookup::Missing,
        Err(e) => {
            tracing::warn!(area = label, error = %e, "malformed session record");
            Lookup::Failed
        },
    }
}
