//! Integration tests for vtag
//!
//! These tests build real picture folders in temporary directories and run
//! complete workflows, both through the library (plan + execute) and through
//! the `vtag` binary.

use std::fs;
use std::path::{Path, PathBuf};

use predicates::prelude::*;
use tempfile::TempDir;
use vtag::config::VtagConfig;
use vtag::naming::{Priority, TagToken};
use vtag::plan::{self, FsFacts, Operation, Outcome, SkipReason};

/// Helper function to create a folder holding `files`
fn setup_folder(files: &[&str]) -> TempDir {
    let dir = TempDir::new().unwrap();
    for name in files {
        fs::write(dir.path().join(name), name.as_bytes()).unwrap();
    }
    dir
}

fn names(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| (*s).to_string()).collect()
}

/// Sorted file names currently in `dir`
fn folder_contents(dir: &Path) -> Vec<String> {
    let mut found: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().into_string().unwrap())
        .collect();
    found.sort();
    found
}

/// Get a command instance for the vtag binary, isolated from the user's config
fn vtag_cmd(config: &Path) -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("vtag"));
    cmd.env("NO_COLOR", "1").env_remove("VTAG_LOG").arg("--config").arg(config);
    cmd
}

/// Write `config` into `dir` and return the file path
fn write_config(dir: &Path, config: &VtagConfig) -> PathBuf {
    let path = dir.join("config.toml");
    config.save_to(&path).unwrap();
    path
}

// =============================================================================
// Library workflows
// =============================================================================

#[test]
fn test_rewrite_folder_end_to_end() {
    let dir = setup_folder(&["shoot #2 #5 #landscape.jpg", "b #b #a #b.png", "clean #a.jpg"]);
    let selection = names(&["shoot #2 #5 #landscape.jpg", "b #b #a #b.png", "clean #a.jpg"]);

    let facts = FsFacts::new(dir.path());
    let mut items = plan::plan(&selection, &Operation::Rewrite, &VtagConfig::default().routing(), &facts);
    let summary = plan::execute(&mut items, dir.path());

    assert_eq!(summary.success, 2);
    assert_eq!(summary.skipped, 1);
    assert_eq!(items[2].outcome, Outcome::Skipped(SkipReason::Unchanged));
    assert_eq!(folder_contents(dir.path()), vec!["b #a#b.png", "clean #a.jpg", "shoot #5#landscape.jpg"]);
}

#[test]
fn test_batch_collision_keeps_both_files() {
    let dir = setup_folder(&["shot #x #x.jpg", "shot #X.jpg"]);
    let selection = names(&["shot #x #x.jpg", "shot #X.jpg"]);

    let facts = FsFacts::new(dir.path());
    let mut items = plan::plan(&selection, &Operation::Rewrite, &VtagConfig::default().routing(), &facts);
    let summary = plan::execute(&mut items, dir.path());

    assert_eq!(summary.success, 1);
    assert!(matches!(items[1].outcome, Outcome::Skipped(SkipReason::DestinationCollision { .. })));
    assert_eq!(fs::read(dir.path().join("shot #x.jpg")).unwrap(), b"shot #x #x.jpg");
    assert!(dir.path().join("shot #X.jpg").exists());
}

#[test]
fn test_tag_priority_and_untag_workflow() {
    let dir = setup_folder(&["alice-beach.jpg"]);
    let routing = VtagConfig::default().routing();
    let facts = FsFacts::new(dir.path());

    let mut current = "alice-beach.jpg".to_string();
    let operations = [
        Operation::AddTag(TagToken::normalize("Sunset").unwrap()),
        Operation::Priority(Priority::new(3).unwrap()),
        Operation::Priority(Priority::new(1).unwrap()),
        Operation::RemoveTag(TagToken::normalize("sunset").unwrap()),
    ];
    let expected = ["alice-beach #sunset.jpg", "alice-beach #3#sunset.jpg", "alice-beach #1#sunset.jpg", "alice-beach #1.jpg"];

    for (op, want) in operations.iter().zip(expected) {
        let mut items = plan::plan(&[current.clone()], op, &routing, &facts);
        plan::execute(&mut items, dir.path());
        assert_eq!(items[0].outcome, Outcome::Success, "{op:?}");
        current = want.to_string();
        assert!(dir.path().join(&current).exists(), "expected {current}");
    }
    assert_eq!(folder_contents(dir.path()), vec!["alice-beach #1.jpg"]);
}

#[test]
fn test_index_copy_preserves_original() {
    let dir = setup_folder(&["alice-beach #2 #sea.jpg", "plain #sea.jpg"]);
    let selection = names(&["alice-beach #2 #sea.jpg", "plain #sea.jpg"]);

    let facts = FsFacts::new(dir.path());
    let mut items = plan::plan(&selection, &Operation::MakeIndex, &VtagConfig::default().routing(), &facts);
    plan::execute(&mut items, dir.path());

    assert_eq!(items[0].outcome, Outcome::Success);
    assert_eq!(items[1].outcome, Outcome::Skipped(SkipReason::NotApplicable));
    assert_eq!(
        fs::read(dir.path().join("alice-index #2 #sea.jpg")).unwrap(),
        b"alice-beach #2 #sea.jpg"
    );
    assert!(dir.path().join("alice-beach #2 #sea.jpg").exists());
}

#[test]
fn test_toss_routes_images_and_videos() {
    let pictures = setup_folder(&["alice-beach #1.jpg", "alice-clip.mp4", "carol-clip.mp4", "bob-x.jpg", "alice-doc.txt"]);
    let library = TempDir::new().unwrap();
    let models = library.path().join("models");
    let videos = library.path().join("videos");
    let all_videos = library.path().join("all");
    fs::create_dir_all(models.join("alice")).unwrap();
    fs::create_dir_all(&videos).unwrap();
    fs::create_dir_all(&all_videos).unwrap();

    let config = VtagConfig {
        model_base_dir: Some(models.clone()),
        video_base_dir: Some(videos.clone()),
        video_all_dir: Some(all_videos.clone()),
        ..VtagConfig::default()
    };
    let selection = names(&["alice-beach #1.jpg", "alice-clip.mp4", "carol-clip.mp4", "bob-x.jpg", "alice-doc.txt"]);
    let facts = FsFacts::new(pictures.path());
    let mut items = plan::plan(&selection, &Operation::TossToModel, &config.routing(), &facts);
    let summary = plan::execute(&mut items, pictures.path());

    assert_eq!(summary.success, 3);
    assert!(models.join("alice").join("alice-beach #1.jpg").exists());
    assert!(videos.join("alice-clip.mp4").exists());
    assert!(all_videos.join("carol-clip.mp4").exists());
    assert_eq!(items[3].outcome, Outcome::Skipped(SkipReason::NoDestination));
    assert_eq!(items[4].outcome, Outcome::Skipped(SkipReason::UnsupportedExtension));
    assert_eq!(folder_contents(pictures.path()), vec!["alice-doc.txt", "bob-x.jpg"]);
}

#[test]
fn test_file_removed_between_plan_and_execute_fails_alone() {
    let dir = setup_folder(&["a.jpg", "b.jpg"]);
    let selection = names(&["a.jpg", "b.jpg"]);
    let op = Operation::AddTag(TagToken::normalize("x").unwrap());

    let facts = FsFacts::new(dir.path());
    let mut items = plan::plan(&selection, &op, &VtagConfig::default().routing(), &facts);
    fs::remove_file(dir.path().join("a.jpg")).unwrap();
    let summary = plan::execute(&mut items, dir.path());

    assert_eq!(summary.failed, 1);
    assert_eq!(summary.success, 1);
    assert!(dir.path().join("b #x.jpg").exists());
}

// =============================================================================
// CLI workflows
// =============================================================================

#[test]
fn test_cli_list_and_search() {
    let pictures = setup_folder(&["alice-a #1.jpg", "bob-b #2.png", "notes.txt"]);
    let cfg_dir = TempDir::new().unwrap();
    let config = write_config(cfg_dir.path(), &VtagConfig::default());

    vtag_cmd(&config)
        .args(["-q", "list", "-C"])
        .arg(pictures.path())
        .assert()
        .success()
        .stdout("alice-a #1.jpg\nbob-b #2.png\n");

    vtag_cmd(&config)
        .arg("-C")
        .arg(pictures.path())
        .args(["-q", "ls", "#2"])
        .assert()
        .success()
        .stdout("bob-b #2.png\n");
}

#[test]
fn test_cli_tag_all_with_match() {
    let pictures = setup_folder(&["alice-a.jpg", "alice-b #x.jpg", "bob-c.jpg"]);
    let cfg_dir = TempDir::new().unwrap();
    let config = write_config(cfg_dir.path(), &VtagConfig::default());

    vtag_cmd(&config)
        .arg("-C")
        .arg(pictures.path())
        .args(["tag", "#X", "--all", "--match", "alice"])
        .assert()
        .success()
        .stdout(predicate::str::contains("=== Add Tag #x Summary ==="));

    assert_eq!(
        folder_contents(pictures.path()),
        vec!["alice-a #x.jpg", "alice-b #x.jpg", "bob-c.jpg"]
    );
}

#[test]
fn test_cli_dry_run_json_changes_nothing() {
    let pictures = setup_folder(&["b #y #x.jpg"]);
    let cfg_dir = TempDir::new().unwrap();
    let config = write_config(cfg_dir.path(), &VtagConfig::default());

    let output = vtag_cmd(&config)
        .arg("-C")
        .arg(pictures.path())
        .args(["--dry-run", "--json", "rewrite", "b #y #x.jpg"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let items: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(items[0]["source"], "b #y #x.jpg");
    assert_eq!(items[0]["destination"], "b #x#y.jpg");
    assert_eq!(items[0]["action"], "rename");
    assert_eq!(items[0]["outcome"]["status"], "pending");
    assert_eq!(folder_contents(pictures.path()), vec!["b #y #x.jpg"]);
}

#[test]
fn test_cli_invalid_tag_is_error() {
    let pictures = setup_folder(&["a.jpg"]);
    let cfg_dir = TempDir::new().unwrap();
    let config = write_config(cfg_dir.path(), &VtagConfig::default());

    vtag_cmd(&config)
        .arg("-C")
        .arg(pictures.path())
        .args(["tag", "two words", "a.jpg"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"));
    assert_eq!(folder_contents(pictures.path()), vec!["a.jpg"]);
}

#[test]
fn test_cli_toss_uses_configured_dirs() {
    let pictures = setup_folder(&["alice-beach.jpg"]);
    let library = TempDir::new().unwrap();
    fs::create_dir_all(library.path().join("alice")).unwrap();
    let cfg_dir = TempDir::new().unwrap();
    let config = write_config(
        cfg_dir.path(),
        &VtagConfig { model_base_dir: Some(library.path().to_path_buf()), ..VtagConfig::default() },
    );

    vtag_cmd(&config)
        .arg("-C")
        .arg(pictures.path())
        .args(["-q", "toss", "alice-beach.jpg"])
        .assert()
        .success();
    assert!(library.path().join("alice").join("alice-beach.jpg").exists());
}

#[test]
fn test_cli_delete_with_yes() {
    let pictures = setup_folder(&["a.jpg", "b.jpg"]);
    let cfg_dir = TempDir::new().unwrap();
    let config = write_config(cfg_dir.path(), &VtagConfig::default());

    vtag_cmd(&config)
        .arg("-C")
        .arg(pictures.path())
        .args(["delete", "-y", "a.jpg"])
        .assert()
        .success();
    assert_eq!(folder_contents(pictures.path()), vec!["b.jpg"]);
}

#[test]
fn test_cli_rename_refuses_to_overwrite() {
    let pictures = setup_folder(&["a.jpg", "b.jpg"]);
    let cfg_dir = TempDir::new().unwrap();
    let config = write_config(cfg_dir.path(), &VtagConfig::default());

    vtag_cmd(&config)
        .arg("-C")
        .arg(pictures.path())
        .args(["rename", "a.jpg", "b.jpg"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
    assert_eq!(fs::read(pictures.path().join("b.jpg")).unwrap(), b"b.jpg");

    vtag_cmd(&config)
        .arg("-C")
        .arg(pictures.path())
        .args(["rename", "a.jpg", "c #new.jpg"])
        .assert()
        .success();
    assert_eq!(folder_contents(pictures.path()), vec!["b.jpg", "c #new.jpg"]);
}

#[test]
fn test_cli_tags_counts_files() {
    let pictures = setup_folder(&["a #x #x.jpg", "b #X#1.jpg", "c.jpg"]);
    let cfg_dir = TempDir::new().unwrap();
    let config = write_config(
        cfg_dir.path(),
        &VtagConfig { favorite_tags: vec!["portrait".into()], ..VtagConfig::default() },
    );

    let output = vtag_cmd(&config)
        .arg("-C")
        .arg(pictures.path())
        .args(["--json", "tags"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["favorites"][0], "#portrait");
    assert_eq!(report["tags"][0]["tag"], "#1");
    assert_eq!(report["tags"][1]["tag"], "#x");
    assert_eq!(report["tags"][1]["count"], 2);
}

#[test]
fn test_cli_config_path_and_missing_folder() {
    let cfg_dir = TempDir::new().unwrap();
    let config = cfg_dir.path().join("missing.toml");

    vtag_cmd(&config)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("missing.toml"));

    vtag_cmd(&config)
        .args(["-C", "/definitely/not/here", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("is not a directory"));
}
