use std::io;
use std::path::Path;

use crate::entry::Stat;
use crate::meta::FileMeta;

/// The filesystem query capability every lookup goes through.
///
/// Implement this to point filemod at something other than the real disk:
/// an in-memory fake for tests, a remote mirror, a snapshot. The crate ships
/// [`OsFileSystem`](crate::OsFileSystem) and [`MemoryFs`](crate::MemoryFs).
///
/// # Error Handling
///
/// Return an `io::Error` of kind [`io::ErrorKind::NotFound`] when the path
/// doesn't exist. The lookup layer turns that into an absent record with no
/// error attached. Any other error is kept verbatim on a failed record.
///
/// # Thread Safety
///
/// `Send + Sync` are required so a [`Lookup`](crate::Lookup) can be cloned
/// and shared. Lookups themselves are sequential.
///
/// # Example
///
/// ```rust
/// use std::io;
/// use std::path::Path;
/// use std::time::SystemTime;
/// use filemod::{FileSystem, Stat};
///
/// /// Pretends every path is an empty file written at the epoch.
/// struct Everything;
///
/// impl FileSystem for Everything {
///     fn metadata(&self, path: &Path) -> io::Result<Stat> {
///         let name = path.file_name().unwrap_or_default().to_string_lossy();
///         Ok(Stat::file(name, 0, SystemTime::UNIX_EPOCH))
///     }
///
///     fn symlink_metadata(&self, path: &Path) -> io::Result<Stat> {
///         self.metadata(path)
///     }
/// }
///
/// let meta = filemod::lookup().fs(Everything).stat("/any/thing");
/// assert!(meta.exists());
/// assert_eq!(meta.name(), "thing");
/// ```
pub trait FileSystem: Send + Sync {
    /// Query `path`, following a final symbolic link.
    fn metadata(&self, path: &Path) -> io::Result<Stat>;

    /// Query `path` without traversing a final symbolic link, so the link
    /// itself is described rather than its target.
    fn symlink_metadata(&self, path: &Path) -> io::Result<Stat>;
}

/// Decides whether a record belongs in a filtered collection.
///
/// Any `Fn(&FileMeta) -> bool` closure is a `Matcher`, so
/// [`Files::filter`](crate::Files::filter) reads naturally with a closure.
/// Implement it on a named type when the predicate carries state.
///
/// # Example
///
/// ```rust
/// use filemod::{FileMeta, Matcher};
///
/// struct Extension(&'static str);
///
/// impl Matcher for Extension {
///     fn is_match(&self, meta: &FileMeta) -> bool {
///         meta.path()
///             .extension()
///             .map(|e| e.eq_ignore_ascii_case(self.0))
///             .unwrap_or(false)
///     }
/// }
/// ```
pub trait Matcher {
    /// Returns `true` if this record should be kept.
    fn is_match(&self, meta: &FileMeta) -> bool;
}

impl<F> Matcher for F
where
    F: Fn(&FileMeta) -> bool,
{
    fn is_match(&self, meta: &FileMeta) -> bool {
        self(meta)
    }
}
