use std::path::{Path, PathBuf};
use std::time::SystemTime;

use crate::entry::{EntryKind, Stat};
use crate::error::LookupError;

/// What a lookup found at a path.
#[derive(Debug, Clone)]
pub enum State {
    /// The path exists.
    Present(Stat),

    /// The path does not exist. Not an error.
    Absent,

    /// The query failed for some other reason. Treated as non-existent for
    /// every accessor, but the error is kept for diagnostics.
    Failed(LookupError),
}

/// One path's metadata, as observed at lookup time.
///
/// Records are immutable. To see a path's current state, ask the
/// [`Lookup`](crate::Lookup) that made it to [`refresh`](crate::Lookup::refresh)
/// it, which returns a new record and leaves this one as the "then" snapshot.
///
/// Every accessor is total: records that aren't [`Present`](State::Present)
/// report size `0`, mode `0`, not-a-directory and a modification time of
/// [`SystemTime::UNIX_EPOCH`].
#[derive(Debug, Clone)]
pub struct FileMeta {
    path:         PathBuf,
    state:        State,
    follow_links: bool,
}

impl FileMeta {
    /// Assemble a record from a path and an already-known state.
    ///
    /// No I/O. Records built this way refresh with a following lookup.
    pub fn new(path: impl Into<PathBuf>, state: State) -> Self {
        Self {
            path: path.into(),
            state,
            follow_links: true,
        }
    }

    pub(crate) fn with_follow(path: PathBuf, state: State, follow_links: bool) -> Self {
        Self { path, state, follow_links }
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    /// The path this record was looked up by.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The lookup outcome.
    pub fn state(&self) -> &State {
        &self.state
    }

    /// The filesystem's answer, if the path exists.
    pub fn stat(&self) -> Option<&Stat> {
        match &self.state {
            State::Present(stat) => Some(stat),
            _ => None,
        }
    }

    /// Whether the path exists. `false` for both absent and failed records.
    pub fn exists(&self) -> bool {
        matches!(self.state, State::Present(_))
    }

    /// Whether the path was confirmed not to exist.
    pub fn is_absent(&self) -> bool {
        matches!(self.state, State::Absent)
    }

    /// Whether the lookup itself failed.
    pub fn is_failed(&self) -> bool {
        matches!(self.state, State::Failed(_))
    }

    /// The lookup error, for failed records only.
    pub fn error(&self) -> Option<&LookupError> {
        match &self.state {
            State::Failed(err) => Some(err),
            _ => None,
        }
    }

    /// The entry's name as reported by the filesystem; empty unless present.
    pub fn name(&self) -> &str {
        self.stat().map(|s| s.name.as_str()).unwrap_or("")
    }

    /// Size in bytes; `0` unless present.
    pub fn size(&self) -> u64 {
        self.stat().map(|s| s.size).unwrap_or(0)
    }

    /// Permission bits; `0` unless present.
    pub fn mode(&self) -> u32 {
        self.stat().map(|s| s.mode).unwrap_or(0)
    }

    /// The entry kind, if present.
    pub fn kind(&self) -> Option<EntryKind> {
        self.stat().map(|s| s.kind)
    }

    /// Whether the path is an existing directory.
    pub fn is_dir(&self) -> bool {
        self.stat().map(Stat::is_dir).unwrap_or(false)
    }

    /// Last modification time; the epoch unless present.
    pub fn mod_time(&self) -> SystemTime {
        self.stat().map(|s| s.modified).unwrap_or(SystemTime::UNIX_EPOCH)
    }

    pub(crate) fn follows_links(&self) -> bool {
        self.follow_links
    }

    // ── Pairwise comparison ───────────────────────────────────────────────

    /// Whichever of `self` and `other` was modified more recently.
    ///
    /// On equal timestamps `other` is returned, so folding left to right
    /// over a collection picks the last of the newest.
    pub fn newer<'a>(&'a self, other: &'a FileMeta) -> &'a FileMeta {
        if self.is_newer_than(other) { self } else { other }
    }

    /// Whichever of `self` and `other` was modified less recently.
    ///
    /// On equal timestamps `other` is returned.
    pub fn older<'a>(&'a self, other: &'a FileMeta) -> &'a FileMeta {
        if self.is_older_than(other) { self } else { other }
    }

    /// Strictly newer: `self` was modified after `other`.
    pub fn is_newer_than(&self, other: &FileMeta) -> bool {
        self.mod_time() > other.mod_time()
    }

    /// Strictly older: `self` was modified before `other`.
    pub fn is_older_than(&self, other: &FileMeta) -> bool {
        self.mod_time() < other.mod_time()
    }
}
