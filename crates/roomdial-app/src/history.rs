//! Recent-connections store.
//!
//! Keeps one entry per (url, token) pair so a prior room can be
//! redialed with a couple of keystrokes. Recency is tracked with a
//! logical counter rather than wall-clock time, keeping ordering
//! deterministic under simulation. Entries live only for the process
//! lifetime; persistence is out of scope.

use crate::state::SessionInfo;

/// A prior successful connection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionHistoryEntry {
    /// Server URL.
    pub url: String,
    /// Participant token.
    pub token: String,
    /// Name of the room that was joined.
    pub room_name: String,
    /// Identity the local participant had.
    pub participant_identity: String,
    /// Whether the connection used end-to-end encryption.
    pub e2ee: bool,
    /// Key used for end-to-end encryption, empty if none.
    pub e2ee_key: String,
    /// Logical recency stamp, larger is more recent.
    updated_at: u64,
}

impl ConnectionHistoryEntry {
    /// Logical recency stamp, larger is more recent.
    pub fn updated_at(&self) -> u64 {
        self.updated_at
    }
}

/// Store of prior successful connections.
#[derive(Debug, Clone, Default)]
pub struct ConnectionHistory {
    entries: Vec<ConnectionHistoryEntry>,
    clock: u64,
}

impl ConnectionHistory {
    /// Create an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a successful connection.
    ///
    /// An existing entry with the same url and token is refreshed in
    /// place (recency bumped, E2EE fields updated); otherwise a new
    /// entry is added.
    pub fn update(&mut self, session: &SessionInfo, e2ee: bool, e2ee_key: &str) {
        self.clock = self.clock.saturating_add(1);
        let stamp = self.clock;

        if let Some(entry) = self
            .entries
            .iter_mut()
            .find(|e| e.url == session.url && e.token == session.token)
        {
            entry.room_name = session.room_name.clone();
            entry.participant_identity = session.participant_identity.clone();
            entry.e2ee = e2ee;
            entry.e2ee_key = e2ee_key.to_owned();
            entry.updated_at = stamp;
            return;
        }

        self.entries.push(ConnectionHistoryEntry {
            url: session.url.clone(),
            token: session.token.clone(),
            room_name: session.room_name.clone(),
            participant_identity: session.participant_identity.clone(),
            e2ee,
            e2ee_key: e2ee_key.to_owned(),
            updated_at: stamp,
        });
    }

    /// Remove all entries.
    pub fn remove_all(&mut self) {
        self.entries.clear();
    }

    /// Entries ordered most-recently-updated first.
    pub fn sorted_by_updated(&self) -> Vec<&ConnectionHistoryEntry> {
        let mut entries: Vec<_> = self.entries.iter().collect();
        entries.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        entries
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// `true` if there are no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
