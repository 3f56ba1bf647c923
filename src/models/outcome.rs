use serde::Serialize;

/// Result of a single write against the ledger.
///
/// A write that matched no parent row is `NotFound`, never a silent success.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum WriteOutcome {
    /// A new row was inserted.
    Created,
    /// The natural key already existed; nothing was changed.
    AlreadyExists,
    /// The named parent (project, or project/block pair) does not exist.
    NotFound,
}

impl WriteOutcome {
    /// True only when a row was actually inserted.
    pub fn is_written(&self) -> bool {
        matches!(self, WriteOutcome::Created)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            WriteOutcome::Created => "created",
            WriteOutcome::AlreadyExists => "already_exists",
            WriteOutcome::NotFound => "not_found",
        }
    }
}
