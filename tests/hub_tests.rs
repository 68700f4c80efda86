use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use tempfile::TempDir;

fn basket_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("basket"));
    cmd.env("NO_COLOR", "1");
    cmd
}

fn setup_test_project() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    basket_cmd()
        .arg("init")
        .current_dir(temp_dir.path())
        .assert()
        .success();
    temp_dir
}

fn run(temp_dir: &TempDir, args: &[&str]) {
    basket_cmd()
        .args(args)
        .current_dir(temp_dir.path())
        .assert()
        .success();
}

fn json_output(temp_dir: &TempDir, args: &[&str]) -> Value {
    let output = basket_cmd()
        .args(args)
        .current_dir(temp_dir.path())
        .output()
        .unwrap();
    assert!(output.status.success(), "{:?} failed", args);
    serde_json::from_slice(&output.stdout).unwrap()
}

fn listed_ids(temp_dir: &TempDir) -> Vec<String> {
    json_output(temp_dir, &["hub", "list", "--json"])
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["id"].as_str().unwrap().to_string())
        .collect()
}

#[test]
fn test_list_hides_invisible_projects() {
    let temp_dir = setup_test_project();

    basket_cmd()
        .args(["hub", "list"])
        .current_dir(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("CSV Dashboard Widget"))
        .stdout(predicate::str::contains("[Pinned]"))
        .stdout(predicate::str::contains("Minecraft").not());
}

#[test]
fn test_default_order_is_pinned_then_recent() {
    let temp_dir = setup_test_project();
    assert_eq!(listed_ids(&temp_dir), vec!["p5", "p1", "p3", "p2"]);
}

#[test]
fn test_pin_moves_project_up() {
    let temp_dir = setup_test_project();
    run(&temp_dir, &["hub", "set", "p2", "--pin"]);
    assert_eq!(listed_ids(&temp_dir), vec!["p5", "p1", "p2", "p3"]);
}

#[test]
fn test_show_hidden_project() {
    let temp_dir = setup_test_project();
    run(&temp_dir, &["hub", "set", "p4", "--show"]);

    basket_cmd()
        .args(["hub", "list", "minecraft"])
        .current_dir(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Minecraft Build Viewer"));
}

#[test]
fn test_set_requires_a_change() {
    let temp_dir = setup_test_project();

    basket_cmd()
        .args(["hub", "set", "p1"])
        .current_dir(temp_dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Nothing to change"));
}

#[test]
fn test_set_rejects_unknown_persona() {
    let temp_dir = setup_test_project();

    basket_cmd()
        .args(["hub", "set", "p1", "--persona", "share"])
        .current_dir(temp_dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("no persona 'share'"));
}

#[test]
fn test_set_persona_changes_view() {
    let temp_dir = setup_test_project();
    run(&temp_dir, &["hub", "set", "p1", "--persona", "dev"]);

    let shown = json_output(&temp_dir, &["hub", "show", "p1", "--json"]);
    assert_eq!(shown["persona_view"]["title"], "Dev");
    assert_eq!(shown["badges"][0], "Pinned");
}

#[test]
fn test_configure_sort_and_accent() {
    let temp_dir = setup_test_project();
    run(&temp_dir, &["hub", "configure", "--sort", "name", "--accent", "50"]);

    assert_eq!(listed_ids(&temp_dir), vec!["p1", "p2", "p3", "p5"]);

    let dashboard = json_output(&temp_dir, &["hub", "dashboard", "--json"]);
    assert_eq!(dashboard["accent"], 50);
    let alpha = dashboard["accent_alpha"].as_f64().unwrap();
    assert!((alpha - 0.24).abs() < 1e-9);
}

#[test]
fn test_configure_rejects_out_of_range_accent() {
    let temp_dir = setup_test_project();

    basket_cmd()
        .args(["hub", "configure", "--accent", "150"])
        .current_dir(temp_dir.path())
        .assert()
        .failure();
}

#[test]
fn test_dashboard_includes_hidden_projects() {
    let temp_dir = setup_test_project();

    let dashboard = json_output(&temp_dir, &["hub", "dashboard", "--json"]);
    let projects = dashboard["projects"].as_array().unwrap();
    assert_eq!(projects.len(), 5);
    assert!(projects.iter().any(|p| p["id"] == "p4"));
    assert_eq!(dashboard["layout"], "grid");
    assert_eq!(dashboard["sort"], "pinned");
}

#[test]
fn test_layout_compact() {
    let temp_dir = setup_test_project();
    run(&temp_dir, &["hub", "layout", "compact"]);

    basket_cmd()
        .args(["hub", "list"])
        .current_dir(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("p1 CSV Dashboard Widget"))
        .stdout(predicate::str::contains("Widget view").not());
}

#[test]
fn test_open_print_resolves_relative_link() {
    let temp_dir = setup_test_project();

    basket_cmd()
        .args(["hub", "open", "p1", "--print"])
        .current_dir(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("projects/csv-widget/index.html"));
}

#[test]
fn test_open_placeholder_link_is_coming_soon() {
    let temp_dir = setup_test_project();

    basket_cmd()
        .args(["hub", "open", "p4"])
        .current_dir(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("coming soon"));
}

#[test]
fn test_unknown_project() {
    let temp_dir = setup_test_project();

    basket_cmd()
        .args(["hub", "show", "p9"])
        .current_dir(temp_dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Not found"));
}

#[test]
fn test_theme_toggle_is_independent_of_basket() {
    let temp_dir = setup_test_project();
    run(&temp_dir, &["hub", "theme"]);

    let dashboard = json_output(&temp_dir, &["hub", "dashboard", "--json"]);
    assert_eq!(dashboard["theme"], "light");

    let prefs = json_output(&temp_dir, &["prefs", "--json"]);
    assert_eq!(prefs["theme"], "dark");
}

#[test]
fn test_reset_restores_defaults() {
    let temp_dir = setup_test_project();
    run(&temp_dir, &["hub", "set", "p1", "--hide", "--unpin"]);
    run(&temp_dir, &["hub", "configure", "--layout", "list"]);
    assert!(!listed_ids(&temp_dir).contains(&"p1".to_string()));

    run(&temp_dir, &["hub", "reset"]);
    assert_eq!(listed_ids(&temp_dir), vec!["p5", "p1", "p3", "p2"]);

    let dashboard = json_output(&temp_dir, &["hub", "dashboard", "--json"]);
    assert_eq!(dashboard["layout"], "grid");
    assert_eq!(dashboard["accent"], 25);
}

#[test]
fn test_corrupt_hub_snapshot_keeps_valid_fields() {
    let temp_dir = setup_test_project();
    std::fs::write(
        temp_dir.path().join(".basket").join("projects_hub_v1.json"),
        r#"{"layout": "list", "accent": "loud", "projects": 7}"#,
    )
    .unwrap();

    let dashboard = json_output(&temp_dir, &["hub", "dashboard", "--json"]);
    assert_eq!(dashboard["layout"], "list");
    assert_eq!(dashboard["accent"], 25);
    assert_eq!(dashboard["projects"].as_array().unwrap().len(), 5);
}
