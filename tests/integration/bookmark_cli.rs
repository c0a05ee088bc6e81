//! End-to-end tests for the `jump` binary: create, to, list, remove, help, exit codes.

use std::fs;

use crate::integration::Sandbox;

#[test]
fn test_full_bookmark_lifecycle() {
    let sb = Sandbox::new();
    let dir = sb.mkdir("dir");
    let dir_str = dir.display().to_string();

    let created = sb.run(&["create", &dir_str, "WORK"]);
    assert!(created.success(), "create failed: {}", created.stderr);
    assert!(created.stdout.contains("WORK"));
    assert!(created.stdout.contains("created"));

    let listed = sb.run(&["list"]);
    assert!(listed.success());
    let row = listed
        .stdout
        .lines()
        .find(|l| l.trim_start().starts_with("WORK"))
        .expect("WORK row in listing");
    assert!(row.contains(&format!("| {}", dir_str)), "row was: {}", row);

    let to = sb.run(&["to", "WORK"]);
    assert!(to.success());
    assert_eq!(to.stdout, dir_str);

    let removed = sb.run(&["remove", "WORK"]);
    assert!(removed.success());
    assert!(removed.stdout.contains("removed"));

    let gone = sb.run(&["to", "WORK"]);
    assert_eq!(gone.code, Some(1));
    assert!(gone.stderr.contains("not found"));
    assert!(gone.stdout.is_empty());

    let empty = sb.run(&["list"]);
    assert!(empty.success());
    assert_eq!(empty.stdout, "No bookmarks found.");
}

#[test]
fn test_create_resolves_relative_paths_against_cwd() {
    let sb = Sandbox::new();
    fs::create_dir_all(sb.work_dir().join("sub")).unwrap();

    assert!(sb.run(&["create", "./sub/", "SUB"]).success());
    let to = sb.run(&["to", "SUB"]);
    assert_eq!(to.stdout, sb.work_dir().join("sub").display().to_string());
}

#[test]
fn test_create_expands_home() {
    let sb = Sandbox::new();
    fs::create_dir_all(sb.home().join("projects")).unwrap();

    let created = sb.run(&["create", "~/projects", "PROJ"]);
    assert!(created.success(), "create failed: {}", created.stderr);
    let to = sb.run(&["to", "PROJ"]);
    assert_eq!(to.stdout, sb.home().join("projects").display().to_string());
}

#[test]
fn test_create_rejects_bad_input() {
    let sb = Sandbox::new();
    let dir = sb.mkdir("dir");
    let dir_str = dir.display().to_string();

    let bad_alias = sb.run(&["create", &dir_str, "my alias"]);
    assert_eq!(bad_alias.code, Some(1));
    assert!(bad_alias.stderr.contains("Invalid alias format"));

    let missing = sb.run(&["create", "/definitely/not/here", "X"]);
    assert_eq!(missing.code, Some(1));
    assert!(missing.stderr.contains("Path does not exist"));

    assert!(!sb.bookmarks_path().exists(), "failed creates must not write");
}

#[test]
fn test_duplicate_alias_keeps_first_mapping() {
    let sb = Sandbox::new();
    let a = sb.mkdir("a").display().to_string();
    let b = sb.mkdir("b").display().to_string();

    assert!(sb.run(&["create", &a, "X"]).success());
    let dup = sb.run(&["create", &b, "X"]);
    assert_eq!(dup.code, Some(1));
    assert!(dup.stderr.contains("already exists"));
    assert_eq!(sb.run(&["to", "X"]).stdout, a);
}

#[test]
fn test_file_bookmark_without_editor_prints_path() {
    let sb = Sandbox::new();
    let file = sb.touch("jump-test-file.txt");
    let file_str = file.display().to_string();

    assert!(sb.run(&["create", &file_str, "FILE"]).success());
    let to = sb.run(&["to", "FILE"]);
    assert!(to.success());
    assert_eq!(to.stdout, file_str);
}

#[test]
fn test_file_bookmark_with_missing_editor_falls_back() {
    let sb = Sandbox::new();
    let file = sb.touch("notes.txt");
    let file_str = file.display().to_string();
    assert!(sb.run(&["create", &file_str, "NOTES"]).success());

    let out = sb
        .command()
        .args(["to", "NOTES"])
        .env("EDITOR", "jump-test-no-such-editor-binary")
        .output()
        .unwrap();
    assert!(out.status.success());
    assert_eq!(String::from_utf8_lossy(&out.stdout).trim(), file_str);
    assert!(String::from_utf8_lossy(&out.stderr).contains("Failed to open file"));
}

#[test]
fn test_stale_bookmark_is_reported_not_removed() {
    let sb = Sandbox::new();
    let dir = sb.mkdir("soon-gone");
    assert!(sb
        .run(&["create", &dir.display().to_string(), "STALE"])
        .success());
    fs::remove_dir(&dir).unwrap();

    let to = sb.run(&["to", "STALE"]);
    assert_eq!(to.code, Some(1));
    assert!(to.stderr.contains("no longer exists"));
    assert!(sb.run(&["list"]).stdout.contains("STALE"));
}

#[test]
fn test_rm_alias_and_missing_remove() {
    let sb = Sandbox::new();
    let dir = sb.mkdir("dir").display().to_string();
    assert!(sb.run(&["create", &dir, "ONE"]).success());
    assert!(sb.run(&["create", &dir, "TWO"]).success());

    let missing = sb.run(&["rm", "THREE"]);
    assert_eq!(missing.code, Some(1));
    assert!(missing.stderr.contains("not found"));

    assert!(sb.run(&["rm", "ONE"]).success());
    let listing = sb.run(&["list", "--format", "json"]).stdout;
    let value: serde_json::Value = serde_json::from_str(&listing).unwrap();
    let object = value.as_object().unwrap();
    assert_eq!(object.len(), 1);
    assert!(object.contains_key("TWO"));
}

#[test]
fn test_help_and_no_command() {
    let sb = Sandbox::new();
    let help = sb.run(&["help"]);
    assert!(help.success());
    assert!(help.stdout.contains("jump create <path> <alias>"));

    let bare = sb.run(&[]);
    assert!(bare.success());
    assert_eq!(bare.stdout, help.stdout);
}

#[test]
fn test_usage_errors_exit_one() {
    let sb = Sandbox::new();
    assert_eq!(sb.run(&["create", "/tmp"]).code, Some(1));
    assert_eq!(sb.run(&["to"]).code, Some(1));
    assert_eq!(sb.run(&["teleport"]).code, Some(1));
}

#[test]
fn test_malformed_store_lists_empty_with_warning() {
    let sb = Sandbox::new();
    fs::write(sb.bookmarks_path(), "{ this is not json").unwrap();

    let listed = sb.run(&["list"]);
    assert!(listed.success());
    assert_eq!(listed.stdout, "No bookmarks found.");
    assert!(listed.stderr.contains("Error reading bookmarks file"));
}

#[test]
fn test_save_failure_is_reported() {
    let sb = Sandbox::new();
    let dir = sb.mkdir("dir").display().to_string();
    let blocker = sb.touch("blocker");

    let out = sb
        .command()
        .args(["create", &dir, "WORK"])
        .env("JUMP_BOOKMARKS_PATH", blocker.join("bookmarks.json"))
        .output()
        .unwrap();
    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stderr).contains("Failed to save bookmarks"));
}

#[test]
fn test_config_file_sets_bookmarks_path() {
    let sb = Sandbox::new();
    let dir = sb.mkdir("dir").display().to_string();
    let configured = sb.root().join("configured.json");
    let config_file = sb.root().join("jump.toml");
    fs::write(
        &config_file,
        format!(
            "[storage]\nbookmarks_path = {:?}\n",
            configured.display().to_string()
        ),
    )
    .unwrap();

    let out = sb
        .command()
        .args(["--config", &config_file.display().to_string(), "create", &dir, "CFG"])
        .env_remove("JUMP_BOOKMARKS_PATH")
        .output()
        .unwrap();
    assert!(
        out.status.success(),
        "stderr={}",
        String::from_utf8_lossy(&out.stderr)
    );
    let stored = fs::read_to_string(&configured).unwrap();
    assert!(stored.contains("\"CFG\""));
}
