use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use crate::entry::{base_name, Stat};
use crate::traits::FileSystem;

/// Hop limit when resolving symlink chains, matching Linux's `MAXSYMLINKS`.
const MAX_LINK_HOPS: usize = 40;

// ---------------------------------------------------------------------------
// MemoryFs
// ---------------------------------------------------------------------------

/// A deterministic, in-memory [`FileSystem`].
///
/// Paths are matched exactly, with no normalisation and no implied parent
/// directories. Anything not registered reports `NotFound`.
///
/// # Example
///
/// ```rust
/// use std::io::ErrorKind;
/// use std::time::{Duration, SystemTime};
/// use filemod::MemoryFs;
///
/// let t = SystemTime::UNIX_EPOCH + Duration::from_secs(1_000);
/// let fs = MemoryFs::new()
///     .with_file("/src/main.c", 120, t)
///     .with_dir("/out", t)
///     .with_error("/secret", ErrorKind::PermissionDenied, "permission denied");
///
/// let files = filemod::lookup().fs(fs).build(["/src/main.c", "/out", "/secret", "/nope"]);
/// let (regular, dirs, absent) = files.partition();
/// assert_eq!((regular.len(), dirs.len(), absent.len()), (1, 1, 2));
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryFs {
    nodes: HashMap<PathBuf, Node>,
}

#[derive(Debug, Clone)]
enum Node {
    Entry(Stat),
    Link { link: Stat, target: PathBuf },
    Error { kind: io::ErrorKind, message: String },
}

impl MemoryFs {
    /// An empty filesystem.
    pub fn new() -> Self {
        Self::default()
    }

    // ── Registration ──────────────────────────────────────────────────────

    /// Register `stat` at `path`, replacing whatever was there.
    pub fn insert(&mut self, path: impl Into<PathBuf>, stat: Stat) {
        self.nodes.insert(path.into(), Node::Entry(stat));
    }

    /// Register `stat` at `path`. Chained form of [`insert`](Self::insert).
    pub fn with(mut self, path: impl Into<PathBuf>, stat: Stat) -> Self {
        self.insert(path, stat);
        self
    }

    /// Register a regular file.
    pub fn with_file(self, path: impl Into<PathBuf>, size: u64, modified: SystemTime) -> Self {
        let path = path.into();
        let stat = Stat::file(base_name(&path), size, modified);
        self.with(path, stat)
    }

    /// Register a directory.
    pub fn with_dir(self, path: impl Into<PathBuf>, modified: SystemTime) -> Self {
        let path = path.into();
        let stat = Stat::dir(base_name(&path), modified);
        self.with(path, stat)
    }

    /// Register a symbolic link at `path` pointing at `target`.
    ///
    /// Following lookups resolve through it; a dangling target reads as
    /// not found, as on a real filesystem.
    pub fn with_symlink(
        mut self,
        path: impl Into<PathBuf>,
        target: impl Into<PathBuf>,
        modified: SystemTime,
    ) -> Self {
        let path = path.into();
        let link = Stat::symlink(base_name(&path), modified);
        self.nodes.insert(path, Node::Link { link, target: target.into() });
        self
    }

    /// Make every query of `path` fail with an error of `kind` and `message`.
    pub fn with_error(
        mut self,
        path: impl Into<PathBuf>,
        kind: io::ErrorKind,
        message: impl Into<String>,
    ) -> Self {
        self.nodes.insert(path.into(), Node::Error { kind, message: message.into() });
        self
    }

    // ── Helpers ───────────────────────────────────────────────────────────

    fn node(&self, path: &Path) -> io::Result<&Node> {
        self.nodes
            .get(path)
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no such file or directory"))
    }
}

impl FileSystem for MemoryFs {
    fn metadata(&self, path: &Path) -> io::Result<Stat> {
        let mut current = path;
        for hop in 0..MAX_LINK_HOPS {
            match self.node(current)? {
                Node::Entry(stat) => {
                    let mut stat = stat.clone();
                    // A followed link is still named after the path asked for.
                    if hop > 0 {
                        stat.name = base_name(path);
                    }
                    return Ok(stat);
                }
                Node::Link { target, .. }     => current = target.as_path(),
                Node::Error { kind, message } => return Err(io::Error::new(*kind, message.clone())),
            }
        }
        Err(io::Error::new(
            io::ErrorKind::Other,
            "too many levels of symbolic links",
        ))
    }

    fn symlink_metadata(&self, path: &Path) -> io::Result<Stat> {
        match self.node(path)? {
            Node::Entry(stat)             => Ok(stat.clone()),
            Node::Link { link, .. }       => Ok(link.clone()),
            Node::Error { kind, message } => Err(io::Error::new(*kind, message.clone())),
        }
    }
}
