//! End-to-end CLI tests against the compiled binary.

use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;

const FIXTURE: &str = r#"[
    {"id": 1, "name": "Tech"},
    {"id": 2, "name": "Art"},
    {"id": 10, "name": "Software", "parent": 1},
    {"id": 11, "name": "Hardware", "parent": 1}
]"#;

fn write_fixture(dir: &tempfile::TempDir, contents: &str) -> PathBuf {
    let path = dir.path().join("cats.json");
    std::fs::write(&path, contents).expect("fixture write");
    path
}

fn taxonav() -> Command {
    let mut cmd = Command::cargo_bin("taxonav").expect("binary builds");
    // Hermetic: no user config dir, no TAXONAV_* leakage from the host.
    cmd.env_clear();
    cmd
}

#[test]
fn render_subcategory_selects_parent_and_lists_siblings() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = write_fixture(&dir, FIXTURE);

    taxonav()
        .args(["render", "--taxonomy"])
        .arg(&path)
        .args(["--active", "10"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "<option value=\"1\" selected>Tech</option>",
        ))
        .stdout(predicate::str::contains("Select Subcategory in Tech"))
        .stdout(predicate::str::contains("taxonav-subcat-select"));
}

#[test]
fn render_without_active_suppresses_the_sub_box() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = write_fixture(&dir, FIXTURE);

    taxonav()
        .args(["render", "--taxonomy"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "<option value=\"0\" selected>Select Category</option>",
        ))
        .stdout(predicate::str::contains("taxonav-subcat-select").not());
}

#[test]
fn render_childless_category_shows_the_notice() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = write_fixture(&dir, FIXTURE);

    taxonav()
        .args(["render", "--taxonomy"])
        .arg(&path)
        .args(["--active", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No subcategories in Art"))
        .stdout(predicate::str::contains("taxonav-subcat-select").not());
}

#[test]
fn render_unknown_active_degrades_to_no_selection() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = write_fixture(&dir, FIXTURE);

    taxonav()
        .args(["render", "--taxonomy"])
        .arg(&path)
        .args(["--active", "99"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "<option value=\"0\" selected>Select Category</option>",
        ))
        .stdout(predicate::str::contains("taxonav-subcat-select").not());
}

#[test]
fn render_json_emits_the_specs() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = write_fixture(&dir, FIXTURE);

    taxonav()
        .args(["render", "--taxonomy"])
        .arg(&path)
        .args(["--active", "1", "-o", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"element_id\": \"taxonav-cats-dropdown-1\""))
        .stdout(predicate::str::contains("\"empty_message\"").not());
}

#[test]
fn categories_lists_every_node() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = write_fixture(&dir, FIXTURE);

    taxonav()
        .args(["categories", "--taxonomy"])
        .arg(&path)
        .args(["--color", "never"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Tech"))
        .stdout(predicate::str::contains("Software"))
        .stdout(predicate::str::contains("Hardware"));
}

#[test]
fn duplicate_ids_fail_loudly() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = write_fixture(
        &dir,
        r#"[{"id": 1, "name": "Tech"}, {"id": 1, "name": "Art"}]"#,
    );

    taxonav()
        .args(["categories", "--taxonomy"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("duplicate category id 1"));
}
