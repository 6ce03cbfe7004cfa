use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};

use filemod::{EntryKind, FileMeta};
use filetime::FileTime;

// ---------------------------------------------------------------------------
// Test helpers
// ---------------------------------------------------------------------------

/// Create a temporary build tree with pinned modification times.
///
/// Structure:
/// ```text
/// tmp/
///   src/
///     main.c      (t-300s, 12 bytes)
///     util.c      (t-200s, 6 bytes)
///   out/
///     app         (t-10s, 3 bytes)
/// ```
fn setup_build_dir() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();

    fs::create_dir(root.join("src")).unwrap();
    fs::create_dir(root.join("out")).unwrap();
    fs::write(root.join("src/main.c"), "int main(){}").unwrap();
    fs::write(root.join("src/util.c"), "void u").unwrap();
    fs::write(root.join("out/app"), "elf").unwrap();

    set_age(&root.join("src/main.c"), 300);
    set_age(&root.join("src/util.c"), 200);
    set_age(&root.join("out/app"), 10);

    dir
}

fn set_age(path: &Path, secs_ago: u64) {
    let t = SystemTime::now() - Duration::from_secs(secs_ago);
    filetime::set_file_mtime(path, FileTime::from_system_time(t)).unwrap();
}

/// Every regular file under `dir`, in a deterministic order.
fn sources_under(dir: &Path) -> Vec<PathBuf> {
    walkdir::WalkDir::new(dir)
        .sort_by_file_name()
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
        .map(|e| e.into_path())
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[test]
fn missing_path_is_absent_without_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("this-does-not-exist");

    let m = filemod::stat(&path);

    assert_eq!(m.path(), path.as_path());
    assert_eq!(m.name(), "");
    assert!(!m.exists());
    assert!(m.is_absent());
    assert!(!m.is_dir());
    assert_eq!(m.mode(), 0);
    assert_eq!(m.size(), 0);
    assert_eq!(m.mod_time(), SystemTime::UNIX_EPOCH);
    assert!(m.kind().is_none());
    assert!(m.error().is_none(), "not found is not an error");
}

#[test]
fn empty_path_is_absent() {
    let m = filemod::stat("");
    assert!(!m.exists());
    assert!(m.error().is_none());
}

#[test]
fn existing_file_is_present() {
    let dir = setup_build_dir();
    let m = filemod::stat(dir.path().join("src/main.c"));

    assert!(m.exists());
    assert!(m.error().is_none());
    assert_eq!(m.name(), "main.c");
    assert_eq!(m.size(), 12);
    assert_eq!(m.kind(), Some(EntryKind::File));
    assert!(!m.is_dir());
    assert_ne!(m.mod_time(), SystemTime::UNIX_EPOCH);
}

#[test]
fn existing_dir_is_present() {
    let dir = setup_build_dir();
    let m = filemod::stat(dir.path().join("src"));

    assert!(m.exists());
    assert!(m.is_dir());
    assert_eq!(m.name(), "src");
    assert_eq!(m.kind(), Some(EntryKind::Dir));
}

#[cfg(unix)]
#[test]
fn file_mode_is_reported() {
    let dir = setup_build_dir();
    let m = filemod::stat(dir.path().join("out/app"));
    assert_ne!(m.mode(), 0);
}

#[cfg(unix)]
#[test]
fn no_follow_describes_the_link_itself() {
    let dir = setup_build_dir();
    let link = dir.path().join("latest");
    std::os::unix::fs::symlink(dir.path().join("out/app"), &link).unwrap();

    let followed = filemod::stat(&link);
    let unfollowed = filemod::stat_no_follow(&link);

    assert_eq!(followed.kind(), Some(EntryKind::File));
    assert_eq!(followed.size(), 3);
    assert_eq!(unfollowed.kind(), Some(EntryKind::Symlink));
    assert!(unfollowed.exists());
    assert!(!unfollowed.is_dir());
}

#[cfg(unix)]
#[test]
fn dangling_link_is_absent_when_followed() {
    let dir = tempfile::tempdir().unwrap();
    let link = dir.path().join("dangling");
    std::os::unix::fs::symlink(dir.path().join("gone"), &link).unwrap();

    assert!(filemod::stat(&link).is_absent());
    assert!(filemod::stat_no_follow(&link).exists());
}

#[test]
fn outputs_newer_than_walked_sources() {
    let dir = setup_build_dir();
    let sources = filemod::new(sources_under(&dir.path().join("src")));
    let outputs = filemod::new([dir.path().join("out/app")]);

    assert_eq!(sources.len(), 2);
    assert!(sources.errors().is_empty());
    assert!(outputs.all_newer_than(&sources));
    assert!(sources.all_older_than(&outputs));
    assert!(!outputs.overlaps_with(&sources));
}

#[test]
fn touching_a_source_makes_the_output_stale() {
    let dir = setup_build_dir();
    let main_c = dir.path().join("src/main.c");
    let app = dir.path().join("out/app");

    let lookup = filemod::lookup();
    let before = lookup.build([&main_c]);
    let outputs = lookup.build([&app]);
    assert!(outputs.all_newer_than(&before));

    set_age(&main_c, 0);
    let after = lookup.refresh_all(&before);

    assert!(!outputs.all_newer_than(&after), "output is now stale");
    assert!(after[0].is_newer_than(&before[0]));
    assert_eq!(after[0].path(), before[0].path());
}

#[test]
fn refresh_sees_new_files_and_leaves_old_record_alone() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("late.txt");

    let lookup = filemod::lookup();
    let then = lookup.stat(&path);
    fs::write(&path, "hello").unwrap();
    let now = lookup.refresh(&then);

    assert!(!then.exists());
    assert!(now.exists());
    assert_eq!(now.size(), 5);
}

#[test]
fn build_partitions_a_real_tree() {
    let dir = setup_build_dir();
    let root = dir.path();
    let files = filemod::new([
        root.join("src/main.c"),
        root.join("src"),
        root.join("nope"),
        root.join("out"),
        root.join("out/app"),
    ]);

    let (regular, dirs, absent) = files.partition();

    assert_eq!(regular.len(), 2);
    assert_eq!(dirs.len(), 2);
    assert_eq!(absent.len(), 1);
    assert_eq!(regular[0].name(), "main.c");
    assert_eq!(regular[1].name(), "app");
    assert_eq!(dirs[0].name(), "src");
    assert_eq!(dirs[1].name(), "out");
}

#[test]
fn newest_and_oldest_of_real_files() {
    let dir = setup_build_dir();
    let mut files = filemod::new(sources_under(dir.path()));
    assert_eq!(files.len(), 3);

    assert_eq!(files.newest().map(FileMeta::name), Some("app"));
    assert_eq!(files.oldest().map(FileMeta::name), Some("main.c"));

    files.sort_by_mod_time();
    let names: Vec<_> = files.iter().map(FileMeta::name).collect();
    assert_eq!(names, ["main.c", "util.c", "app"]);
}

#[cfg(unix)]
#[test]
fn not_a_directory_is_a_failure_not_absence() {
    let dir = setup_build_dir();
    let bogus = dir.path().join("out/app/child");

    let files = filemod::new([bogus.clone()]);

    assert!(files[0].is_failed());
    assert!(!files[0].exists());
    let errors = files.errors();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors.iter().next().unwrap().path(), bogus.as_path());
}
