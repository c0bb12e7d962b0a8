//! CLI integration tests for Ballast.
//!
//! These tests scaffold a small project in a temp directory and drive the
//! full build/tidy workflow through the binary.

use std::fs;
use std::path::Path;
use std::process::Command;

use assert_cmd::prelude::*;
use predicates::prelude::*;
use tempfile::TempDir;

/// Get the ballast binary command.
fn ballast() -> Command {
    Command::cargo_bin("ballast").unwrap()
}

/// Create a project with one collection, two assets, and a public root.
fn scaffold(root: &Path) {
    let assets = root.join("assets");
    fs::create_dir_all(&assets).unwrap();
    fs::write(assets.join("app.css"), "/* header */\nbody { color: red; }\n").unwrap();
    fs::write(assets.join("app.js"), "var app = 1;\n\n").unwrap();

    fs::create_dir_all(root.join("public")).unwrap();

    fs::write(
        root.join("ballast.toml"),
        r#"
paths = ["assets"]

[collections]
app = ["app.css", "app.js"]
"#,
    )
    .unwrap();
}

fn dir_names(dir: &Path) -> Vec<String> {
    if !dir.exists() {
        return Vec::new();
    }
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

// ============================================================================
// ballast build (development)
// ============================================================================

#[test]
fn test_development_build_publishes_individual_files() {
    let tmp = TempDir::new().unwrap();
    scaffold(tmp.path());

    ballast()
        .args(["build"])
        .current_dir(tmp.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("Starting development build..."))
        .stderr(predicate::str::contains("[app] Stylesheets successfully built."))
        .stderr(predicate::str::contains("[app] Scripts successfully built."));

    let styles = dir_names(&tmp.path().join("public/assets/stylesheets"));
    assert_eq!(styles.len(), 1);
    assert!(styles[0].starts_with("app-"));
    assert!(styles[0].ends_with(".css"));

    let scripts = dir_names(&tmp.path().join("public/assets/javascripts"));
    assert_eq!(scripts.len(), 1);
    assert!(scripts[0].ends_with(".js"));
}

#[test]
fn test_build_unknown_collection_reports_not_found() {
    let tmp = TempDir::new().unwrap();
    scaffold(tmp.path());

    ballast()
        .args(["build", "nope"])
        .current_dir(tmp.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("[nope] Collection not found."));
}

// ============================================================================
// ballast build --production
// ============================================================================

#[test]
fn test_production_build_writes_fingerprinted_bundle_and_manifest() {
    let tmp = TempDir::new().unwrap();
    scaffold(tmp.path());

    ballast()
        .args(["build", "--production"])
        .current_dir(tmp.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("Starting production build..."))
        .stderr(predicate::str::contains("[app] Stylesheets successfully built."));

    let styles = dir_names(&tmp.path().join("public/assets/stylesheets"));
    assert_eq!(styles.len(), 1);
    // identifier + 64 hex chars + extension
    assert!(styles[0].starts_with("app-"));
    assert_eq!(styles[0].len(), "app-".len() + 64 + ".css".len());

    assert!(tmp.path().join(".ballast/collections.json").exists());
}

#[test]
fn test_production_build_is_idempotent_on_filenames() {
    let tmp = TempDir::new().unwrap();
    scaffold(tmp.path());

    ballast()
        .args(["build", "--production"])
        .current_dir(tmp.path())
        .assert()
        .success();
    let first = dir_names(&tmp.path().join("public/assets/stylesheets"));

    ballast()
        .args(["build", "--production"])
        .current_dir(tmp.path())
        .assert()
        .success();
    let second = dir_names(&tmp.path().join("public/assets/stylesheets"));

    assert_eq!(first, second);
}

#[test]
fn test_production_env_skips_current_artifacts() {
    let tmp = TempDir::new().unwrap();
    scaffold(tmp.path());

    // First build in a production-designated environment writes the bundle.
    ballast()
        .args(["--env", "production", "build"])
        .current_dir(tmp.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("[app] Stylesheets successfully built."));

    // Unchanged sources: the second build detects the existing artifact.
    ballast()
        .args(["--env", "production", "build"])
        .current_dir(tmp.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("[app] Stylesheets already up to date."));
}

#[test]
fn test_production_env_requires_public_dir() {
    let tmp = TempDir::new().unwrap();
    scaffold(tmp.path());
    fs::remove_dir(tmp.path().join("public")).unwrap();

    ballast()
        .args(["--env", "production", "build"])
        .current_dir(tmp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("public directory not found"));
}

// ============================================================================
// ballast tidy
// ============================================================================

#[test]
fn test_tidy_removes_artifacts_and_manifest() {
    let tmp = TempDir::new().unwrap();
    scaffold(tmp.path());

    ballast()
        .args(["build", "--production"])
        .current_dir(tmp.path())
        .assert()
        .success();
    assert!(tmp.path().join(".ballast/collections.json").exists());

    ballast()
        .args(["tidy"])
        .current_dir(tmp.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("Removed 1 stylesheets and 1 scripts."))
        .stderr(predicate::str::contains("The filesystem has been tidied up."));

    assert!(dir_names(&tmp.path().join("public/assets/stylesheets")).is_empty());
    assert!(dir_names(&tmp.path().join("public/assets/javascripts")).is_empty());
    assert!(!tmp.path().join(".ballast/collections.json").exists());
}

// ============================================================================
// ballast list
// ============================================================================

#[test]
fn test_list_shows_collections() {
    let tmp = TempDir::new().unwrap();
    scaffold(tmp.path());

    ballast()
        .args(["list"])
        .current_dir(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("app (2 assets)"))
        .stdout(predicate::str::contains("app.css"));
}

#[test]
fn test_list_without_config() {
    let tmp = TempDir::new().unwrap();

    ballast()
        .args(["list"])
        .current_dir(tmp.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("No collections configured."));
}

// ============================================================================
// ballast completions
// ============================================================================

#[test]
fn test_completions_generate() {
    ballast()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ballast"));
}
