use std::fmt;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::error::LookupError;
use crate::files::Files;
use crate::meta::{FileMeta, State};
use crate::os::OsFileSystem;
use crate::traits::FileSystem;

// ---------------------------------------------------------------------------
// Lookup
// ---------------------------------------------------------------------------

/// Turns paths into [`FileMeta`] records.
///
/// Created via [`filemod::lookup()`](crate::lookup). Configure with chained
/// builder methods, then call [`stat`](Lookup::stat) for one path or
/// [`build`](Lookup::build) for many.
///
/// Every record costs exactly one query against the configured
/// [`FileSystem`]. Nothing is cached between calls.
///
/// # Example
///
/// ```rust,ignore
/// let outputs = filemod::lookup()
///     .fs(my_fs)
///     .follow_links(false)
///     .build(["target/app", "target/app.map"]);
/// ```
#[derive(Clone)]
pub struct Lookup {
    fs:           Arc<dyn FileSystem>,
    follow_links: bool,
}

impl Default for Lookup {
    fn default() -> Self {
        Self {
            fs:           Arc::new(OsFileSystem),
            follow_links: true,
        }
    }
}

impl fmt::Debug for Lookup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Lookup")
            .field("follow_links", &self.follow_links)
            .finish_non_exhaustive()
    }
}

impl Lookup {
    // ── Options ───────────────────────────────────────────────────────────

    /// Set the filesystem to query.
    ///
    /// Any type implementing [`FileSystem`] is accepted. Defaults to
    /// [`OsFileSystem`].
    pub fn fs(mut self, fs: impl FileSystem + 'static) -> Self {
        self.fs = Arc::new(fs);
        self
    }

    /// Whether [`stat`](Lookup::stat) and [`build`](Lookup::build) follow a
    /// final symbolic link. Enabled by default.
    pub fn follow_links(mut self, yes: bool) -> Self {
        self.follow_links = yes;
        self
    }

    // ── Single records ────────────────────────────────────────────────────

    /// Look up one path.
    ///
    /// Never fails: a missing path gives an absent record, and any other
    /// query error is kept on a failed record. The empty path is absent
    /// without asking the filesystem.
    pub fn stat(&self, path: impl AsRef<Path>) -> FileMeta {
        self.query(path.as_ref(), self.follow_links)
    }

    /// Look up one path without traversing a final symbolic link, whatever
    /// [`follow_links`](Lookup::follow_links) says.
    pub fn stat_no_follow(&self, path: impl AsRef<Path>) -> FileMeta {
        self.query(path.as_ref(), false)
    }

    /// Look up `meta`'s path again, the same way it was first looked up.
    ///
    /// Returns a new record; `meta` stays as it was.
    pub fn refresh(&self, meta: &FileMeta) -> FileMeta {
        self.query(meta.path(), meta.follows_links())
    }

    // ── Collections ───────────────────────────────────────────────────────

    /// Look up every path, in order, one record per path.
    ///
    /// Duplicates are looked up twice. Failures don't stop the build; read
    /// them afterwards with [`Files::errors`].
    pub fn build<I, P>(&self, paths: I) -> Files
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        paths.into_iter().map(|p| self.stat(p)).collect()
    }

    /// Refresh every record in `files`, in order.
    pub fn refresh_all(&self, files: &Files) -> Files {
        files.iter().map(|meta| self.refresh(meta)).collect()
    }

    // ── Query ─────────────────────────────────────────────────────────────

    fn query(&self, path: &Path, follow_links: bool) -> FileMeta {
        let owned = PathBuf::from(path);

        tracing::debug!(path = %path.display(), follow_links, "stat");
        if path.as_os_str().is_empty() {
            return FileMeta::with_follow(owned, State::Absent, follow_links);
        }

        let result = if follow_links {
            self.fs.metadata(path)
        } else {
            self.fs.symlink_metadata(path)
        };

        let state = match result {
            Ok(stat) => State::Present(stat),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "does not exist");
                State::Absent
            }
            Err(e) => {
                tracing::debug!(path = %path.display(), error = %e, "stat failed");
                State::Failed(LookupError::new(path, e))
            }
        };

        FileMeta::with_follow(owned, state, follow_links)
    }
}
