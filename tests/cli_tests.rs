use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use tempfile::TempDir;

fn basket_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("basket"));
    cmd.env("NO_COLOR", "1").env_remove("BASKET_MONTH");
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

fn json_output(temp_dir: &TempDir, args: &[&str]) -> Value {
    let output = basket_cmd()
        .args(args)
        .current_dir(temp_dir.path())
        .output()
        .unwrap();
    assert!(output.status.success(), "{:?} failed", args);
    serde_json::from_slice(&output.stdout).unwrap()
}

fn ids(value: &Value) -> Vec<String> {
    value
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v["id"].as_str().unwrap().to_string())
        .collect()
}

// =============================================================================
// Basic CLI
// =============================================================================

#[test]
fn test_help() {
    basket_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Seasonal produce"));
}

#[test]
fn test_version() {
    basket_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("basket"));
}

#[test]
fn test_not_initialized_error() {
    let temp_dir = TempDir::new().unwrap();

    basket_cmd()
        .arg("produce")
        .current_dir(temp_dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Project not initialized. Run 'basket init' first.",
        ));
}

#[test]
fn test_invalid_month_rejected() {
    let temp_dir = setup_test_project();

    basket_cmd()
        .args(["produce", "--month", "13"])
        .current_dir(temp_dir.path())
        .assert()
        .failure();
}

#[test]
fn test_month_words_must_be_real_month_names() {
    let temp_dir = setup_test_project();

    for word in ["junk", "maybe", "decimal"] {
        basket_cmd()
            .args(["produce", "--month", word])
            .current_dir(temp_dir.path())
            .assert()
            .failure()
            .stderr(predicate::str::contains("Invalid month"));
    }

    basket_cmd()
        .args(["produce", "--json"])
        .env("BASKET_MONTH", "marmalade")
        .current_dir(temp_dir.path())
        .assert()
        .failure();

    basket_cmd()
        .args(["produce", "--month", "november", "--json"])
        .current_dir(temp_dir.path())
        .assert()
        .success();
}

// =============================================================================
// Initialization
// =============================================================================

#[test]
fn test_init_creates_config() {
    let temp_dir = TempDir::new().unwrap();

    basket_cmd()
        .arg("init")
        .current_dir(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized"));

    assert!(temp_dir.path().join(".basket.toml").exists());
    assert!(temp_dir.path().join(".basket").exists());
}

#[test]
fn test_init_twice_fails() {
    let temp_dir = setup_test_project();

    basket_cmd()
        .arg("init")
        .current_dir(temp_dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("already initialized"));
}

#[test]
fn test_init_with_default_market() {
    let temp_dir = TempDir::new().unwrap();

    basket_cmd()
        .args(["init", "--default-market", "miami"])
        .current_dir(temp_dir.path())
        .assert()
        .success();

    let config = std::fs::read_to_string(temp_dir.path().join(".basket.toml")).unwrap();
    assert!(config.contains("miami"));

    let prefs = json_output(&temp_dir, &["prefs", "--json"]);
    assert_eq!(prefs["marketId"], "miami");
}

#[test]
fn test_init_rejects_unknown_market() {
    let temp_dir = TempDir::new().unwrap();

    basket_cmd()
        .args(["init", "--default-market", "atlantis"])
        .current_dir(temp_dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown market"));
}

// =============================================================================
// Produce listing
// =============================================================================

#[test]
fn test_produce_shows_wrapping_window_in_season() {
    let temp_dir = setup_test_project();

    // Austin is in texas (+1): oranges shift from Nov–Mar to Dec–Apr
    basket_cmd()
        .args(["produce", "--month", "jan"])
        .current_dir(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Austin Farmers Market"))
        .stdout(predicate::str::contains("Oranges"))
        .stdout(predicate::str::contains("In Season Now!"))
        .stdout(predicate::str::contains("Dec – Apr"));
}

#[test]
fn test_produce_fresh_first_order() {
    let temp_dir = setup_test_project();

    let cards = json_output(&temp_dir, &["produce", "--month", "7", "--json"]);
    assert_eq!(
        ids(&cards),
        vec![
            "blueberries",
            "cucumber",
            "peaches",
            "strawberries",
            "tomatoes",
            "watermelon",
            "apples",
            "oranges"
        ]
    );
    assert_eq!(cards[0]["score"], 100);
    assert_eq!(cards[0]["in_season"], true);
    assert_eq!(cards[4]["score"], 54);
    assert_eq!(cards[7]["score"], 30);
}

#[test]
fn test_produce_json_includes_band() {
    let temp_dir = setup_test_project();

    let cards = json_output(&temp_dir, &["produce", "oranges", "--month", "jan", "--json"]);
    let card = &cards[0];
    assert_eq!(card["label"], "Dec – Apr");
    assert_eq!(card["peak"]["start"], 10);
    assert_eq!(card["shifted_peak"]["start"], 11);

    let segments = card["band"]["segments"].as_array().unwrap();
    assert_eq!(segments.len(), 2);
    let total: f64 = segments
        .iter()
        .map(|s| s["right"].as_f64().unwrap() - s["left"].as_f64().unwrap())
        .sum();
    assert!((total - 5.0 / 12.0 * 100.0).abs() < 1e-9);
    assert_eq!(card["band"]["today"], 0.0);
}

#[test]
fn test_focus_persona_filters_out_of_season() {
    let temp_dir = setup_test_project();

    let cards = json_output(
        &temp_dir,
        &["produce", "--persona", "focus", "--month", "jan", "--json"],
    );
    assert_eq!(ids(&cards), vec!["oranges"]);
}

#[test]
fn test_demo_persona_expands_top_item() {
    let temp_dir = setup_test_project();

    basket_cmd()
        .args(["produce", "--persona", "demo", "--month", "jan"])
        .current_dir(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Selection & Storage Tips").count(1));
}

#[test]
fn test_produce_search() {
    let temp_dir = setup_test_project();

    let cards = json_output(&temp_dir, &["produce", "tag:berry", "--month", "jan", "--json"]);
    let mut found = ids(&cards);
    found.sort();
    assert_eq!(found, vec!["blueberries", "strawberries"]);

    basket_cmd()
        .args(["produce", "regex:[bad"])
        .current_dir(temp_dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid regex"));
}

#[test]
fn test_sort_preference_persists() {
    let temp_dir = setup_test_project();

    basket_cmd()
        .args(["sort", "az"])
        .current_dir(temp_dir.path())
        .assert()
        .success();

    let cards = json_output(&temp_dir, &["produce", "--month", "7", "--json"]);
    assert_eq!(ids(&cards)[0], "apples");
    assert_eq!(ids(&cards)[7], "watermelon");
}

#[test]
fn test_show_expands_item() {
    let temp_dir = setup_test_project();

    basket_cmd()
        .args(["show", "oranges", "--month", "nov"])
        .current_dir(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Selection & Storage Tips"))
        .stdout(predicate::str::contains("Nutrition Highlights"))
        .stdout(predicate::str::contains("Save for later"));
}

#[test]
fn test_show_unknown_item() {
    let temp_dir = setup_test_project();

    basket_cmd()
        .args(["show", "kiwi"])
        .current_dir(temp_dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Not found"));
}

// =============================================================================
// Markets and preferences
// =============================================================================

#[test]
fn test_markets_search() {
    let temp_dir = setup_test_project();

    basket_cmd()
        .args(["markets", "tx"])
        .current_dir(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Austin Farmers Market"))
        .stdout(predicate::str::contains("Arlington Farmers Market"))
        .stdout(predicate::str::contains("Pike Place").not());
}

#[test]
fn test_select_market_changes_region() {
    let temp_dir = setup_test_project();

    basket_cmd()
        .args(["market", "miami"])
        .current_dir(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Selected"));

    let prefs = json_output(&temp_dir, &["prefs", "--json"]);
    assert_eq!(prefs["marketId"], "miami");

    // florida shifts by -2: oranges become Sep–Jan
    let cards = json_output(&temp_dir, &["show", "oranges", "--json", "--month", "jan"]);
    assert_eq!(cards["label"], "Sep – Jan");
}

#[test]
fn test_select_unknown_market() {
    let temp_dir = setup_test_project();

    basket_cmd()
        .args(["market", "atlantis"])
        .current_dir(temp_dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Not found"));
}

#[test]
fn test_persona_cycles_and_theme_toggles() {
    let temp_dir = setup_test_project();

    basket_cmd()
        .arg("persona")
        .current_dir(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Focus"));

    basket_cmd()
        .arg("theme")
        .current_dir(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("light"));

    let prefs = json_output(&temp_dir, &["prefs", "--json"]);
    assert_eq!(prefs["persona"], "focus");
    assert_eq!(prefs["theme"], "light");
}

#[test]
fn test_malformed_state_falls_back_to_defaults() {
    let temp_dir = setup_test_project();
    std::fs::write(
        temp_dir.path().join(".basket").join("market_basket_v1.json"),
        "not json at all",
    )
    .unwrap();

    let prefs = json_output(&temp_dir, &["prefs", "--json"]);
    assert_eq!(prefs["marketId"], "austin");
    assert_eq!(prefs["sort"], "fresh");
}

#[test]
fn test_unusable_state_falls_back_to_configured_market() {
    let temp_dir = TempDir::new().unwrap();
    basket_cmd()
        .args(["init", "--default-market", "pike"])
        .current_dir(temp_dir.path())
        .assert()
        .success();
    let state_file = temp_dir.path().join(".basket").join("market_basket_v1.json");

    std::fs::write(&state_file, "not json at all").unwrap();
    let prefs = json_output(&temp_dir, &["prefs", "--json"]);
    assert_eq!(prefs["marketId"], "pike");

    std::fs::write(&state_file, r#"{"sort":"az"}"#).unwrap();
    let prefs = json_output(&temp_dir, &["prefs", "--json"]);
    assert_eq!(prefs["marketId"], "pike");
    assert_eq!(prefs["sort"], "az");
}

#[test]
fn test_inverted_freshness_weights_rejected() {
    let temp_dir = setup_test_project();
    let config_path = temp_dir.path().join(".basket.toml");
    let config = std::fs::read_to_string(&config_path)
        .unwrap()
        .replace("in_season = 100", "in_season = 50");
    std::fs::write(&config_path, config).unwrap();

    basket_cmd()
        .args(["produce", "--month", "7"])
        .current_dir(temp_dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("in_season"));
}

#[test]
fn test_region_override_from_config() {
    let temp_dir = setup_test_project();
    let config_path = temp_dir.path().join(".basket.toml");
    let mut config = std::fs::read_to_string(&config_path).unwrap();
    config.push_str("\n[regions]\ntexas = 0\n");
    std::fs::write(&config_path, config).unwrap();

    let card = json_output(&temp_dir, &["show", "oranges", "--json", "--month", "jan"]);
    assert_eq!(card["label"], "Nov – Mar");
}
