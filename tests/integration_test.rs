//! Integration tests for nametag
//!
//! These tests run the core against real files in temporary directories and
//! verify the complete rename workflows.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use nametag::batch;
use nametag::change::{Outcome, change_tags, file_satisfies_filter, plan};
use nametag::codec;
use nametag::discovery::{FileDiscovery, WalkDiscovery};
use nametag::filter::{SearchMode, TagFilter};
use nametag::fs::{FileKind, FileSystem, StdFileSystem};
use nametag::junk::JunkFilter;
use nametag::tags::{TagMutation, add_tags, remove_tags};
use tempfile::TempDir;

/// Real stat, refused rename
struct ReadOnlyFs;

impl FileSystem for ReadOnlyFs {
    fn stat(&self, path: &Path) -> io::Result<FileKind> {
        StdFileSystem.stat(path)
    }

    fn rename(&self, _from: &Path, _to: &Path) -> io::Result<()> {
        Err(io::Error::new(io::ErrorKind::PermissionDenied, "read-only filesystem"))
    }
}

/// Helper function to create a test file
fn create_test_file(dir: &Path, name: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, b"test content").unwrap();
    path
}

fn tags(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| (*s).to_string()).collect()
}

fn file_names(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

#[test]
fn test_add_tag_renames_file() {
    let dir = TempDir::new().unwrap();
    let path = create_test_file(dir.path(), "photo.[a b].jpg");

    let extra = tags(&["c"]);
    let outcome = change_tags(
        &StdFileSystem,
        |r| {
            let merged = add_tags(&r.tags, &extra);
            r.with_tags(merged)
        },
        &path,
    );

    match outcome {
        Outcome::Renamed {
            new_base_name,
            new_path,
            ..
        } => {
            assert_eq!(new_base_name, "photo.[a b c]");
            assert_eq!(new_path, dir.path().join("photo.[a b c].jpg"));
        }
        other => panic!("unexpected outcome: {other:?}"),
    }
    assert_eq!(file_names(dir.path()), vec!["photo.[a b c].jpg"]);
}

#[test]
fn test_remove_tag_renames_file() {
    let dir = TempDir::new().unwrap();
    let path = create_test_file(dir.path(), "photo.[a b].jpg");

    let gone = tags(&["a"]);
    let outcome = change_tags(
        &StdFileSystem,
        |r| {
            let left = remove_tags(&r.tags, &gone);
            r.with_tags(left)
        },
        &path,
    );

    assert!(matches!(outcome, Outcome::Renamed { .. }));
    assert_eq!(file_names(dir.path()), vec!["photo.[b].jpg"]);
}

#[test]
fn test_remove_last_tag_drops_suffix() {
    let dir = TempDir::new().unwrap();
    let path = create_test_file(dir.path(), "report.[draft].pdf");

    let outcome = change_tags(
        &StdFileSystem,
        |r| TagMutation::Remove(tags(&["draft"])).apply(r),
        &path,
    );

    assert!(matches!(outcome, Outcome::Renamed { ref new_base_name, .. } if new_base_name == "report"));
    assert_eq!(file_names(dir.path()), vec!["report.pdf"]);
}

#[test]
fn test_nonexistent_path_is_skipped() {
    let dir = TempDir::new().unwrap();
    create_test_file(dir.path(), "keep.txt");
    let missing = dir.path().join("missing.txt");

    let outcome = change_tags(
        &StdFileSystem,
        |r| TagMutation::Add(tags(&["x"])).apply(r),
        &missing,
    );

    assert_eq!(outcome, Outcome::Skipped { path: missing });
    assert_eq!(file_names(dir.path()), vec!["keep.txt"]);
}

#[test]
fn test_directory_is_skipped() {
    let dir = TempDir::new().unwrap();
    let sub = dir.path().join("album");
    fs::create_dir(&sub).unwrap();

    let outcome = change_tags(
        &StdFileSystem,
        |r| TagMutation::Add(tags(&["x"])).apply(r),
        &sub,
    );

    assert!(matches!(outcome, Outcome::Skipped { .. }));
    assert!(sub.is_dir());
}

#[test]
fn test_failed_rename_keeps_original_name() {
    let dir = TempDir::new().unwrap();
    let path = create_test_file(dir.path(), "notes.txt");

    let outcome = change_tags(
        &ReadOnlyFs,
        |r| TagMutation::Add(tags(&["x"])).apply(r),
        &path,
    );

    match outcome {
        Outcome::Failed { path: failed, reason } => {
            assert_eq!(failed, path);
            assert!(reason.contains("read-only filesystem"));
        }
        other => panic!("unexpected outcome: {other:?}"),
    }
    assert!(path.exists());
    assert_eq!(file_names(dir.path()), vec!["notes.txt"]);
}

#[test]
fn test_tagging_file_without_extension() {
    let dir = TempDir::new().unwrap();
    let path = create_test_file(dir.path(), "README");

    change_tags(&StdFileSystem, |r| TagMutation::Add(tags(&["a"])).apply(r), &path);
    let tagged = dir.path().join("README.[a]");
    assert!(tagged.exists());

    change_tags(&StdFileSystem, |r| TagMutation::Add(tags(&["b"])).apply(r), &tagged);
    assert_eq!(file_names(dir.path()), vec!["README.[a b]"]);
}

#[test]
fn test_plan_does_not_touch_disk() {
    let dir = TempDir::new().unwrap();
    let path = create_test_file(dir.path(), "song.mp3");

    let change = plan(&StdFileSystem, |r| TagMutation::Add(tags(&["live"])).apply(r), &path).unwrap();
    assert_eq!(change.new_path(), dir.path().join("song.[live].mp3"));
    assert_eq!(file_names(dir.path()), vec!["song.mp3"]);
}

#[test]
fn test_file_satisfies_filter() {
    let dir = TempDir::new().unwrap();
    let tagged = create_test_file(dir.path(), "a.[work urgent].txt");
    let plain = create_test_file(dir.path(), "b.txt");

    assert!(file_satisfies_filter(&StdFileSystem, &tags(&["urgent", "work"]), &tagged));
    assert!(!file_satisfies_filter(&StdFileSystem, &tags(&["home"]), &tagged));
    assert!(file_satisfies_filter(&StdFileSystem, &[], &plain));
    assert!(!file_satisfies_filter(&StdFileSystem, &[], &dir.path().join("gone.txt")));
}

#[test]
fn test_batch_over_discovered_directory() {
    let dir = TempDir::new().unwrap();
    create_test_file(dir.path(), "a.txt");
    create_test_file(dir.path(), "b.[x].txt");
    create_test_file(dir.path(), ".DS_Store");

    let discovery = WalkDiscovery::new(JunkFilter::default(), false);
    let files = discovery.discover(&[dir.path().to_path_buf()]);
    assert_eq!(files.len(), 2);

    let report = batch::run_change(&StdFileSystem, &TagMutation::Add(tags(&["x"])), &files, true);
    assert_eq!(report.summary.renamed, 1);
    assert_eq!(report.summary.unchanged, 1);
    assert_eq!(report.summary.failed, 0);
    assert_eq!(file_names(dir.path()), vec![".DS_Store", "a.[x].txt", "b.[x].txt"]);
}

#[test]
fn test_batch_continues_past_missing_files() {
    let dir = TempDir::new().unwrap();
    let a = create_test_file(dir.path(), "a.txt");
    let missing = dir.path().join("missing.txt");
    let b = create_test_file(dir.path(), "b.txt");

    let report = batch::run_change(
        &StdFileSystem,
        &TagMutation::Add(tags(&["y"])),
        &[a, missing, b],
        false,
    );
    assert_eq!(report.summary.renamed, 2);
    assert_eq!(report.summary.skipped, 1);
    assert_eq!(file_names(dir.path()), vec!["a.[y].txt", "b.[y].txt"]);
}

#[test]
fn test_find_by_filter_across_directory() {
    let dir = TempDir::new().unwrap();
    create_test_file(dir.path(), "one.[rust cli].md");
    create_test_file(dir.path(), "two.[rust].md");
    create_test_file(dir.path(), "three.[python old].md");

    let files = WalkDiscovery::new(JunkFilter::default(), false).discover(&[dir.path().to_path_buf()]);

    let rust = batch::filter_paths(&StdFileSystem, &TagFilter::all(tags(&["rust"])), &files);
    assert_eq!(rust.len(), 2);

    let any = TagFilter::all(tags(&["cli", "python"]))
        .with_mode(SearchMode::Any)
        .with_excludes(tags(&["old"]));
    let found = batch::filter_paths(&StdFileSystem, &any, &files);
    assert_eq!(found, vec![dir.path().join("one.[rust cli].md")]);
}

#[test]
fn test_records_decode_real_names() {
    let dir = TempDir::new().unwrap();
    let path = create_test_file(dir.path(), "report.[draft urgent].pdf");

    let records = batch::collect_records(&StdFileSystem, &[path]);
    assert_eq!(records.len(), 1);
    let record = &records[0];
    assert_eq!(record.file.extension, ".pdf");
    assert_eq!(record.file.base_name, "report.[draft urgent]");
    assert_eq!(record.normalized_base_name, "report");
    assert_eq!(record.tags, tags(&["draft", "urgent"]));
    assert_eq!(record.file.base_name, codec::compose("report", &record.tags));
}
