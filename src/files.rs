use std::ops::Deref;
use std::path::Path;

use crate::compare::{Comparison, Span};
use crate::error::Errors;
use crate::meta::FileMeta;
use crate::traits::Matcher;

// ---------------------------------------------------------------------------
// Files
// ---------------------------------------------------------------------------

/// An ordered group of [`FileMeta`] records.
///
/// Order starts as the order paths (or records) were supplied in, and
/// duplicates are kept. Sorting reorders the collection in place and hands
/// back the same collection for chaining. Filtering and partitioning never
/// touch `self`; they return new, independently owned collections.
///
/// `Files` derefs to `[FileMeta]`, so `len()`, `iter()` and indexing work as
/// on a slice.
#[derive(Debug, Clone, Default)]
pub struct Files {
    items: Vec<FileMeta>,
}

impl Files {
    /// Wrap already-resolved records. No I/O.
    pub fn of(records: impl IntoIterator<Item = FileMeta>) -> Self {
        Self {
            items: records.into_iter().collect(),
        }
    }

    /// Unwrap into the underlying records.
    pub fn into_vec(self) -> Vec<FileMeta> {
        self.items
    }

    /// The paths of every record, in collection order.
    pub fn paths(&self) -> impl Iterator<Item = &Path> + '_ {
        self.items.iter().map(FileMeta::path)
    }

    // ── Ordering ──────────────────────────────────────────────────────────
    //
    // All sorts are stable: records with equal keys keep their relative
    // order.

    /// Oldest first. Records that aren't present carry the epoch and so sort
    /// before everything else.
    pub fn sort_by_mod_time(&mut self) -> &mut Self {
        self.items.sort_by_key(FileMeta::mod_time);
        self
    }

    /// Lexical path order, comparing the raw path strings rather than
    /// components, so `/a.b` sorts before `/a/b` and `b` before `b/`.
    pub fn sort_by_path(&mut self) -> &mut Self {
        self.items.sort_by(|a, b| a.path().as_os_str().cmp(b.path().as_os_str()));
        self
    }

    /// Smallest first. Records that aren't present have size `0`.
    pub fn sort_by_size(&mut self) -> &mut Self {
        self.items.sort_by_key(FileMeta::size);
        self
    }

    // ── Partition & filter ────────────────────────────────────────────────

    /// Split into `(files, directories, absent)` in one pass.
    ///
    /// Failed records go with the absent ones. Each output keeps the
    /// relative order of the input.
    pub fn partition(&self) -> (Files, Files, Files) {
        let mut files  = Vec::new();
        let mut dirs   = Vec::new();
        let mut absent = Vec::new();

        for meta in &self.items {
            if !meta.exists() {
                absent.push(meta.clone());
            } else if meta.is_dir() {
                dirs.push(meta.clone());
            } else {
                files.push(meta.clone());
            }
        }

        (Files::of(files), Files::of(dirs), Files::of(absent))
    }

    /// The records `matcher` accepts, in order.
    pub fn filter(&self, matcher: impl Matcher) -> Files {
        self.items
            .iter()
            .filter(|meta| matcher.is_match(meta))
            .cloned()
            .collect()
    }

    /// Existing entries that are not directories.
    pub fn files_only(&self) -> Files {
        self.filter(|m: &FileMeta| m.exists() && !m.is_dir())
    }

    /// Existing directories.
    pub fn dirs_only(&self) -> Files {
        self.filter(|m: &FileMeta| m.exists() && m.is_dir())
    }

    /// Everything that exists.
    pub fn present_only(&self) -> Files {
        self.filter(|m: &FileMeta| m.exists())
    }

    /// Everything that doesn't exist, including failed lookups.
    pub fn absent_only(&self) -> Files {
        self.filter(|m: &FileMeta| !m.exists())
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    /// The first record, or `None` if empty.
    pub fn first(&self) -> Option<&FileMeta> {
        self.items.first()
    }

    /// The last record, or `None` if empty.
    pub fn last(&self) -> Option<&FileMeta> {
        self.items.last()
    }

    /// The most recently modified record; the later one wins a tie.
    pub fn newest(&self) -> Option<&FileMeta> {
        self.items.iter().reduce(|acc, next| acc.newer(next))
    }

    /// The least recently modified record; the later one wins a tie.
    pub fn oldest(&self) -> Option<&FileMeta> {
        self.items.iter().reduce(|acc, next| acc.older(next))
    }

    /// Earliest and latest modification times, or `None` if empty.
    pub fn span(&self) -> Option<Span> {
        let mut times = self.items.iter().map(FileMeta::mod_time);
        let first = times.next()?;
        let start = Span { earliest: first, latest: first };
        Some(times.fold(start, Span::include))
    }

    // ── Group comparison ──────────────────────────────────────────────────

    /// How the modification times of `self` relate to those of `other`.
    ///
    /// Only the two spans matter, so neither collection is reordered.
    pub fn compare(&self, other: &Files) -> Comparison {
        match (self.span(), other.span()) {
            (Some(a), Some(b)) => a.compare(&b),
            _                  => Comparison::Undefined,
        }
    }

    /// Every record here is strictly older than every record in `other`.
    ///
    /// This is the build check "inputs are all older than outputs". `false`
    /// if either side is empty.
    pub fn all_older_than(&self, other: &Files) -> bool {
        self.compare(other) == Comparison::AllOlder
    }

    /// Every record here is strictly newer than every record in `other`.
    /// `false` if either side is empty.
    pub fn all_newer_than(&self, other: &Files) -> bool {
        self.compare(other) == Comparison::AllNewer
    }

    /// The two modification-time spans intersect or touch.
    /// `false` if either side is empty.
    pub fn overlaps_with(&self, other: &Files) -> bool {
        self.compare(other) == Comparison::Overlapping
    }

    // ── Errors ────────────────────────────────────────────────────────────

    /// Lookup failures, in collection order. Absent records contribute
    /// nothing.
    pub fn errors(&self) -> Errors {
        self.items
            .iter()
            .filter_map(FileMeta::error)
            .cloned()
            .collect()
    }
}

// ---------------------------------------------------------------------------
// Conversions
// ---------------------------------------------------------------------------

impl Deref for Files {
    type Target = [FileMeta];

    fn deref(&self) -> &[FileMeta] {
        &self.items
    }
}

impl From<Vec<FileMeta>> for Files {
    fn from(items: Vec<FileMeta>) -> Self {
        Self { items }
    }
}

impl FromIterator<FileMeta> for Files {
    fn from_iter<I: IntoIterator<Item = FileMeta>>(iter: I) -> Self {
        Self::of(iter)
    }
}

impl IntoIterator for Files {
    type Item     = FileMeta;
    type IntoIter = std::vec::IntoIter<FileMeta>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a> IntoIterator for &'a Files {
    type Item     = &'a FileMeta;
    type IntoIter = std::slice::Iter<'a, FileMeta>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
