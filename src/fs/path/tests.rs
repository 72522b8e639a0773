#![cfg(test)]

use std::env;
use std::ffi::OsStr;
use std::os::unix::ffi::OsStrExt;

use super::*;

fn text(path: &Path) -> &str {
    path.as_os_str().to_str().expect("test paths are valid UTF-8")
}

#[test]
fn test_construction() {
    assert_eq!(text(&Path::new("a/b")), "a/b");
    assert_eq!(text(&Path::empty()), "");
    assert_eq!(Path::default(), Path::empty());
    assert_eq!(Path::from("x"), Path::new(OsStr::new("x")));

    let original = Path::new("a/b");
    let clone = original.clone();
    assert_eq!(original, clone, "A cloned path should compare equal to the original.");
}

#[test]
fn test_append_inserts_separator_only_when_needed() {
    let mut path = Path::new("a");
    path.append("b");
    assert_eq!(text(&path), "a/b", "A separator should be inserted between components.");

    let mut path = Path::new("a/");
    path.append("b");
    assert_eq!(text(&path), "a/b", "No second separator should be added after a trailing one.");

    let mut path = Path::empty();
    path.append("b");
    assert_eq!(text(&path), "b", "Appending to an empty path should not add a separator.");
}

#[test]
fn test_append_empty_is_a_true_noop() {
    let mut path = Path::new("a");
    path.append("");
    assert_eq!(text(&path), "a", "Appending nothing should not even add a separator.");
}

#[test]
fn test_append_absolute_replaces() {
    let mut path = Path::new("a/b");
    path.append("/etc");
    assert_eq!(text(&path), "/etc", "An absolute suffix should replace the whole path.");
}

#[test]
fn test_join_algebra() {
    let base = Path::new("a");
    assert_eq!(text(&base.join("b")), "a/b");
    assert_eq!(text(&base.join("/b")), "/b");
    assert_eq!(text(&base.join("")), "a");
    assert_eq!(text(&base), "a", "join should leave the original untouched.");

    // Unnormalized by design: whatever the components hold is preserved verbatim.
    assert_eq!(text(&Path::new("a//b").join("../c")), "a//b/../c");

    let more = Path::new("c/d");
    assert_eq!(text(&base.join(&more)), "a/c/d", "Joining another Path should work as-is.");
}

#[test]
fn test_basename() {
    assert_eq!(text(&Path::new("a/b/c").basename()), "c");
    assert_eq!(
        text(&Path::new("nofile").basename()),
        "nofile",
        "basename without a separator should be a no-op."
    );
    assert_eq!(
        text(&Path::new("a/b/").basename()),
        "",
        "basename of a path with a trailing separator is empty."
    );
    assert_eq!(text(&Path::new("/c").basename()), "c");
}

#[test]
fn test_dirname() {
    assert_eq!(text(&Path::new("a/b/c").dirname()), "a/b");
    assert_eq!(
        text(&Path::new("nofile").dirname()),
        "",
        "dirname without a separator should be the empty path."
    );
    assert_eq!(text(&Path::new("/c").dirname()), "");
    assert_eq!(text(&Path::new("a/b/").dirname()), "a/b");

    // Explicitly not a round trip with basename.
    let path = Path::new("a/b/c");
    assert_eq!(text(&path.basename().dirname()), "");
}

#[test]
fn test_set_absolute_prefixes_the_cwd() {
    let cwd = env::current_dir().expect("test process should have a working directory");
    let cwd = cwd.as_os_str().as_bytes();

    let mut path = Path::new("foo");
    path.set_absolute().expect("cwd should be readable");

    let mut expected = cwd.to_vec();
    expected.extend_from_slice(b"/foo");
    assert_eq!(path.as_bytes(), &expected[..], "set_absolute should produce cwd + '/' + path.");

    // The result still is not normalized.
    let mut path = Path::new("../foo");
    path.set_absolute().expect("cwd should be readable");
    let mut expected = cwd.to_vec();
    expected.extend_from_slice(b"/../foo");
    assert_eq!(path.as_bytes(), &expected[..]);
}

#[test]
fn test_set_absolute_trailing_separator_sentinel() {
    // Any trailing separator means "already absolute", even on relative text. Historical
    // behavior, preserved.
    let mut path = Path::new("foo/");
    path.set_absolute().expect("no syscall should even happen");
    assert_eq!(text(&path), "foo/", "A trailing separator should suppress absolutization.");

    let mut path = Path::new("/etc/");
    path.set_absolute().expect("no syscall should even happen");
    assert_eq!(text(&path), "/etc/");
}

#[test]
fn test_absolute_leaves_the_original() {
    let original = Path::new("foo");
    let derived = original.absolute().expect("cwd should be readable");
    assert_eq!(text(&original), "foo", "absolute() should operate on a clone.");
    assert_ne!(original, derived);
}

#[test]
fn test_truncate_and_clear() {
    let mut path = Path::new("a/b/c");
    let parent_len = Path::new("a/b").len();
    path.truncate(parent_len);
    assert_eq!(text(&path), "a/b");

    path.truncate(100);
    assert_eq!(text(&path), "a/b", "Truncating beyond the length should be a no-op.");

    path.clear();
    assert!(path.is_empty());
}

#[test]
fn test_interior_nul_is_rejected_for_syscalls() {
    let path = Path::new(OsStr::from_bytes(b"a\0b"));
    let error = path.to_c_string().expect_err("an interior NUL cannot reach the OS");
    assert_eq!(error.code(), libc::EINVAL);
}
