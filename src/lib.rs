//! # filemod
//!
//! File modification metadata for build tools. Look up a group of paths
//! once, then sort, partition, filter and compare the results.
//!
//! filemod answers questions like "is the output newer than all of its
//! inputs?" without hand-rolling min/max over `std::fs::metadata` calls. It
//! owns the metadata record ([`FileMeta`]), the collection engine
//! ([`Files`]), and the query contract ([`FileSystem`]). It does **not**
//! walk directories, watch for changes, hash contents or cache anything;
//! every record is a single point-in-time snapshot.
//!
//! # Quick Start
//!
//! ```rust
//! use std::time::{Duration, SystemTime};
//! use filemod::MemoryFs;
//!
//! let t = |secs| SystemTime::UNIX_EPOCH + Duration::from_secs(secs);
//! let fs = MemoryFs::new()
//!     .with_file("src/a.c", 100, t(10))
//!     .with_file("src/b.c", 200, t(20))
//!     .with_file("out/app", 900, t(30));
//!
//! let lookup = filemod::lookup().fs(fs);
//! let inputs  = lookup.build(["src/a.c", "src/b.c"]);
//! let outputs = lookup.build(["out/app"]);
//!
//! inputs.errors().into_result().expect("inputs readable");
//! assert!(outputs.all_newer_than(&inputs), "up to date");
//! ```
//!
//! # Three states
//!
//! A lookup never fails. Each record is present, absent, or failed:
//!
//! ```rust
//! use std::io::ErrorKind;
//! use std::time::SystemTime;
//! use filemod::{MemoryFs, State};
//!
//! let fs = MemoryFs::new()
//!     .with_dir("/etc", SystemTime::now())
//!     .with_error("/root", ErrorKind::PermissionDenied, "permission denied");
//!
//! let files = filemod::lookup().fs(fs).build(["/etc", "/missing", "/root"]);
//!
//! assert!(matches!(files[0].state(), State::Present(_)));
//! assert!(files[1].is_absent() && files[1].error().is_none());
//! assert!(files[2].is_failed() && !files[2].exists());
//! assert_eq!(files.errors().to_string(), "permission denied");
//! ```
//!
//! # Custom filesystems and filters
//!
//! Implement [`FileSystem`] to query something other than the local disk,
//! and [`Matcher`] (or pass a closure) to filter collections:
//!
//! ```rust
//! use filemod::FileMeta;
//!
//! let files = filemod::new(["Cargo.toml", "src", "no-such-file"]);
//! let manifests = files.filter(|m: &FileMeta| m.name().ends_with(".toml"));
//! assert!(manifests.len() <= 1);
//! ```

#![forbid(unsafe_code)]

mod builder;
mod compare;
mod entry;
mod error;
mod files;
mod memory;
mod meta;
mod os;
mod traits;

// ── Public re-exports ─────────────────────────────────────────────────────────

pub use builder::Lookup;
pub use compare::{Comparison, Span};
pub use entry::{EntryKind, Stat};
pub use error::{Errors, LookupError};
pub use files::Files;
pub use memory::MemoryFs;
pub use meta::{FileMeta, State};
pub use os::OsFileSystem;
pub use traits::{FileSystem, Matcher};

use std::path::Path;

// ── Entry points ──────────────────────────────────────────────────────────────

/// Create a [`Lookup`] over the real filesystem, following symlinks.
///
/// # Example
///
/// ```rust
/// let meta = filemod::lookup().follow_links(false).stat("Cargo.toml");
/// assert!(meta.exists());
/// assert!(!meta.is_dir());
/// ```
pub fn lookup() -> Lookup {
    Lookup::default()
}

/// Look up one path on the real filesystem.
pub fn stat(path: impl AsRef<Path>) -> FileMeta {
    lookup().stat(path)
}

/// Look up one path on the real filesystem without following a final
/// symbolic link.
pub fn stat_no_follow(path: impl AsRef<Path>) -> FileMeta {
    lookup().stat_no_follow(path)
}

/// Look up every path on the real filesystem, in order.
pub fn new<I, P>(paths: I) -> Files
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    lookup().build(paths)
}
