use std::io;
use std::path::Path;

use crate::entry::Stat;
use crate::traits::FileSystem;

/// The real filesystem, via `std::fs::metadata` and
/// `std::fs::symlink_metadata`.
///
/// This is the default capability of [`lookup()`](crate::lookup).
#[derive(Debug, Clone, Copy, Default)]
pub struct OsFileSystem;

impl FileSystem for OsFileSystem {
    fn metadata(&self, path: &Path) -> io::Result<Stat> {
        let md = std::fs::metadata(path)?;
        Ok(Stat::from_std(path, &md))
    }

    fn symlink_metadata(&self, path: &Path) -> io::Result<Stat> {
        let md = std::fs::symlink_metadata(path)?;
        Ok(Stat::from_std(path, &md))
    }
}
