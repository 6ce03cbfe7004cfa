use std::path::Path;
use std::time::SystemTime;

/// The raw answer a [`FileSystem`](crate::traits::FileSystem) gives for a path
/// that exists.
///
/// Every field is public so fakes can build one with a struct literal.
/// [`FileMeta`](crate::FileMeta) wraps it and supplies the zero-valued
/// defaults for paths that don't exist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stat {
    /// The final path component, e.g. `"hosts"` for `/etc/hosts`.
    pub name: String,

    /// What kind of entry the query saw.
    pub kind: EntryKind,

    /// Length in bytes, as reported by the filesystem.
    pub size: u64,

    /// Permission bits. `0` where the platform has no notion of them.
    pub mode: u32,

    /// Last modification time.
    pub modified: SystemTime,
}

impl Stat {
    /// A regular file of `size` bytes last modified at `modified`.
    pub fn file(name: impl Into<String>, size: u64, modified: SystemTime) -> Self {
        Self {
            name: name.into(),
            kind: EntryKind::File,
            size,
            mode: 0o644,
            modified,
        }
    }

    /// A directory last modified at `modified`.
    pub fn dir(name: impl Into<String>, modified: SystemTime) -> Self {
        Self {
            name: name.into(),
            kind: EntryKind::Dir,
            size: 4096,
            mode: 0o755,
            modified,
        }
    }

    /// A symbolic link, as seen without following it.
    pub fn symlink(name: impl Into<String>, modified: SystemTime) -> Self {
        Self {
            name: name.into(),
            kind: EntryKind::Symlink,
            size: 0,
            mode: 0o777,
            modified,
        }
    }

    /// Build a `Stat` from `std::fs` metadata for `path`.
    ///
    /// Where the platform cannot report a modification time the entry still
    /// exists, with `modified` set to the epoch.
    pub fn from_std(path: &Path, md: &std::fs::Metadata) -> Self {
        let ft = md.file_type();
        let kind = if ft.is_dir() {
            EntryKind::Dir
        } else if ft.is_file() {
            EntryKind::File
        } else if ft.is_symlink() {
            EntryKind::Symlink
        } else {
            EntryKind::Other
        };

        Self {
            name:     base_name(path),
            kind,
            size:     md.len(),
            mode:     mode_bits(md),
            modified: modified_or_epoch(md.modified()),
        }
    }

    /// Whether the entry is a directory.
    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Dir
    }
}

/// The kind of an existing entry.
///
/// Symlinks only show up here for no-follow lookups; a following lookup
/// reports whatever the link points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryKind {
    /// A regular file.
    File,

    /// A directory.
    Dir,

    /// A symbolic link.
    Symlink,

    /// Anything else (device files, pipes, sockets, etc.).
    Other,
}

/// Last path component, falling back to the whole path for roots like `/`.
pub(crate) fn base_name(path: &Path) -> String {
    match path.file_name() {
        Some(name) => name.to_string_lossy().into_owned(),
        None       => path.to_string_lossy().into_owned(),
    }
}

#[cfg(unix)]
fn mode_bits(md: &std::fs::Metadata) -> u32 {
    use std::os::unix::fs::PermissionsExt;
    md.permissions().mode()
}

#[cfg(not(unix))]
fn mode_bits(md: &std::fs::Metadata) -> u32 {
    if md.permissions().readonly() { 0o444 } else { 0o666 }
}

fn modified_or_epoch(modified: std::io::Result<SystemTime>) -> SystemTime {
    modified.unwrap_or(SystemTime::UNIX_EPOCH)
}
