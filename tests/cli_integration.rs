use assert_cmd::Command;
use predicates::prelude::*;

fn patternbook(home: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("patternbook").unwrap();
    cmd.env("PATTERNBOOK_HOME", home)
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "1");
    cmd
}

#[test]
fn naked_run_executes_every_demonstration() {
    let home = tempfile::tempdir().unwrap();
    patternbook(home.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("constructor"))
        .stdout(predicate::str::contains("memento"))
        .stdout(predicate::str::contains(
            "An aftersale has been applied for a shoe from nike",
        ));
}

#[test]
fn list_shows_every_pattern_id() {
    let home = tempfile::tempdir().unwrap();
    let mut assert = patternbook(home.path()).arg("list").assert().success();
    for id in [
        "constructor",
        "singleton",
        "factory",
        "abstract-factory",
        "module",
        "mixin",
        "facade",
        "flyweight",
        "decorator",
        "mvc",
        "mvp",
        "observer",
        "state",
        "iterator",
        "strategy",
        "memento",
    ] {
        assert = assert.stdout(predicate::str::contains(id));
    }
}

#[test]
fn list_filters_by_family() {
    let home = tempfile::tempdir().unwrap();
    patternbook(home.path())
        .args(["ls", "--family", "behavioral"])
        .assert()
        .success()
        .stdout(predicate::str::contains("observer"))
        .stdout(predicate::str::contains("singleton").not());
}

#[test]
fn singleton_json_shows_one_house() {
    let home = tempfile::tempdir().unwrap();
    let output = patternbook(home.path())
        .args(["run", "singleton", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let results: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let exhibits = results[0]["exhibits"].as_array().unwrap();
    let studio = &exhibits[0]["value"];
    let mansion = &exhibits[1]["value"];
    assert_eq!(studio["id"], mansion["id"]);
    assert_eq!(mansion["rooms"], 1);
}

#[test]
fn abstract_factory_reports_bill_and_david() {
    let home = tempfile::tempdir().unwrap();
    patternbook(home.path())
        .args(["run", "abstract-factory"])
        .assert()
        .success()
        .stdout(predicate::str::contains("sales => Bill (junior sales)"))
        .stdout(predicate::str::contains("dev => David (JS developer)"));
}

#[test]
fn unknown_pattern_fails() {
    let home = tempfile::tempdir().unwrap();
    patternbook(home.path())
        .args(["run", "mixin", "visitor"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown pattern: visitor"))
        .stdout(predicate::str::is_empty());
}

#[test]
fn config_switches_sales_dispatch() {
    let home = tempfile::tempdir().unwrap();

    patternbook(home.path())
        .args(["config", "sales-dispatch", "comparison"])
        .assert()
        .success()
        .stdout(predicate::str::contains("sales-dispatch set to comparison"));

    patternbook(home.path())
        .args(["config", "sales-dispatch"])
        .assert()
        .success()
        .stdout(predicate::str::contains("comparison"));

    patternbook(home.path())
        .args(["run", "abstract-factory"])
        .assert()
        .success()
        .stdout(predicate::str::contains("sales => Bill (senior sales)"));
}

#[test]
fn show_prints_commentary() {
    let home = tempfile::tempdir().unwrap();
    patternbook(home.path())
        .args(["show", "flyweight"])
        .assert()
        .success()
        .stdout(predicate::str::contains("saves memory"));
}

#[test]
fn verbose_logs_discarded_singleton_input() {
    let home = tempfile::tempdir().unwrap();
    patternbook(home.path())
        .args(["run", "singleton", "-v"])
        .assert()
        .success()
        .stderr(predicate::str::contains("input discarded"));
}
