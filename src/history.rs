// History store collaborator - append-only log of finished runs

use crate::models::Mode;
use crate::report::SessionResult;

/// Append-only run history. The engine never depends on durability; hosts
/// back this with local storage, a file, or nothing at all.
pub trait HistoryStore {
    fn append(&mut self, result: SessionResult);
    fn entries(&self) -> &[SessionResult];
}

/// The default, purely in-memory history.
#[derive(Debug, Clone, Default)]
pub struct MemoryHistory {
    entries: Vec<SessionResult>,
}

impl MemoryHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Entries for one mode, newest last (the detailed-history view splits
    /// study and exam runs).
    pub fn by_mode(&self, mode: Mode) -> Vec<&SessionResult> {
        self.entries.iter().filter(|r| r.mode == mode).collect()
    }
}

impl HistoryStore for MemoryHistory {
    fn append(&mut self, result: SessionResult) {
        tracing::info!(
            "history entry appended: {} {}/{} for program {}",
            result.mode,
            result.score,
            result.total,
            result.program
        );
        self.entries.push(result);
    }

    fn entries(&self) -> &[SessionResult] {
        &self.entries
    }
}
