//! Integration tests for the retheme CLI
//!
//! Every test runs the binary inside a fresh temporary directory holding an
//! `app/` tree, since the root directory is fixed relative to the working
//! directory.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::{tempdir, TempDir};

/// Test helper to get the CLI binary
fn retheme_cmd(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("retheme").unwrap();
    cmd.current_dir(dir);
    cmd
}

const SCREEN: &str = r#"import { View, StyleSheet } from "react-native";
import { Colors } from "@/constants/Colors";

export default function SettingsScreen() {
  return <View style={styles.root} />;
}

const styles = StyleSheet.create({
  root: { backgroundColor: Colors.background },
});
"#;

/// Creates a project directory with one eligible and one ineligible source
fn create_project() -> TempDir {
    let dir = tempdir().unwrap();
    let app = dir.path().join("app/(tabs)");
    fs::create_dir_all(&app).unwrap();
    fs::write(app.join("settings.tsx"), SCREEN).unwrap();
    fs::write(app.join("spacing.ts"), "export const gap = 8;\n").unwrap();
    dir
}

fn read_screen(dir: &TempDir) -> String {
    fs::read_to_string(dir.path().join("app/(tabs)/settings.tsx")).unwrap()
}

#[test]
fn cli_help_command() {
    let dir = tempdir().unwrap();
    retheme_cmd(dir.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("apply"))
        .stdout(predicate::str::contains("draft"))
        .stdout(predicate::str::contains("Commands:"));
}

#[test]
fn cli_version_command() {
    let dir = tempdir().unwrap();
    retheme_cmd(dir.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn no_arguments_rewrites_in_place() {
    let dir = create_project();

    retheme_cmd(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Rewrite complete"));

    let screen = read_screen(&dir);
    assert!(screen.contains("import { View, StyleSheet , useColorScheme } from \"react-native\";"));
    assert!(screen.contains("const createStyles = (theme: any) => StyleSheet.create({"));
    assert!(screen.contains("  const theme = Colors[colorScheme];"));
    assert!(screen.contains("backgroundColor: theme.background"));
    assert_eq!(
        fs::read_to_string(dir.path().join("app/(tabs)/spacing.ts")).unwrap(),
        "export const gap = 8;\n"
    );
}

#[test]
fn draft_writes_nothing() {
    let dir = create_project();

    retheme_cmd(dir.path())
        .args(["draft", "--details"])
        .assert()
        .success()
        .stdout(predicate::str::contains("no files written"))
        .stdout(predicate::str::contains("settings.tsx"));

    assert_eq!(read_screen(&dir), SCREEN);
}

#[test]
fn missing_root_is_not_an_error() {
    let dir = tempdir().unwrap();
    retheme_cmd(dir.path())
        .arg("apply")
        .assert()
        .success()
        .stdout(predicate::str::contains("files 0"));
}

#[test]
fn unreadable_source_fails_the_run() {
    let dir = create_project();
    fs::write(dir.path().join("app/broken.tsx"), [0xff, 0xfe]).unwrap();

    retheme_cmd(dir.path())
        .arg("apply")
        .assert()
        .failure()
        .stderr(predicate::str::contains("broken.tsx"));
}

#[test]
fn implicit_config_file_is_picked_up() {
    let dir = create_project();
    fs::rename(dir.path().join("app"), dir.path().join("src")).unwrap();
    fs::write(dir.path().join(".retheme.yml"), "discovery:\n  root: src\n").unwrap();

    retheme_cmd(dir.path()).arg("apply").assert().success();

    let screen = fs::read_to_string(dir.path().join("src/(tabs)/settings.tsx")).unwrap();
    assert!(screen.contains("theme.background"));
}

#[test]
fn print_default_config_is_yaml() {
    let dir = tempdir().unwrap();
    retheme_cmd(dir.path())
        .arg("print-default-config")
        .assert()
        .success()
        .stdout(predicate::str::contains("registry_token: Colors"))
        .stdout(predicate::str::contains("global_block_marker: STATUS_CONFIG"));
}

#[test]
fn init_then_validate_config() {
    let dir = tempdir().unwrap();

    retheme_cmd(dir.path())
        .arg("init-config")
        .assert()
        .success();
    assert!(dir.path().join(".retheme.yml").exists());

    retheme_cmd(dir.path())
        .arg("init-config")
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    retheme_cmd(dir.path())
        .args(["validate-config", "--config", ".retheme.yml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration file is valid"));
}

#[test]
fn validate_config_rejects_empty_tokens() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("bad.yml"),
        "substitution:\n  registry_token: \"\"\n",
    )
    .unwrap();

    retheme_cmd(dir.path())
        .args(["validate-config", "--config", "bad.yml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("registry_token"));
}
