use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};

const HEADER: &str = "圣遗物类型条件\t等级条件\t星级条件\t主词条条件\t副词条条件\t期望结果";

const ITEMS: &str = r#"[
    {"name": "角斗士的留恋", "category": "flower", "tier": 5, "level": 20,
     "primary": {"kind": "hp", "value": "4780"},
     "secondary": [{"kind": "crit_rate", "value": "3.9%"}, {"kind": "atk", "value": "19"}, {"kind": "def", "value": "23"}]},
    {"name": "流放者之冠", "category": "circlet", "tier": 4, "level": 0,
     "primary": {"kind": "crit_rate", "value": "3.1%"}},
    {"name": "魔女的破灭之时", "category": "sands", "tier": 5, "level": 0,
     "primary": {"kind": "elemental_mastery", "value": "28"}}
]"#;

/// A command isolated from the user's config and terminal colors.
fn artisort(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("artisort").unwrap();
    cmd.current_dir(dir)
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .arg("--config")
        .arg(dir.join("config.json"));
    cmd
}

fn write_rules(dir: &Path, body: &str) -> PathBuf {
    let path = dir.join("rules.tsv");
    fs::write(&path, format!("{}\n{}", HEADER, body)).unwrap();
    path
}

fn write_items(dir: &Path) -> PathBuf {
    let path = dir.join("items.json");
    fs::write(&path, ITEMS).unwrap();
    path
}

#[test]
fn check_lists_rules() {
    let temp_dir = tempfile::tempdir().unwrap();
    let rules = write_rules(
        temp_dir.path(),
        "时之沙，空之杯\t\t>4\t是元素精通\t\t锁\n\t\t\t\t\t不锁\n",
    );

    artisort(temp_dir.path())
        .arg("check")
        .arg(&rules)
        .assert()
        .success()
        .stdout(predicate::str::contains("row   2"))
        .stdout(predicate::str::contains("主词条是元素精通"))
        .stdout(predicate::str::contains("2 rules loaded"));
}

#[test]
fn check_reports_bad_category_with_location() {
    let temp_dir = tempfile::tempdir().unwrap();
    let rules = write_rules(temp_dir.path(), "\t\t\t\t\t锁\n花\t\t\t\t有攻击力，有防御力\t不锁\n");

    artisort(temp_dir.path())
        .arg("check")
        .arg(&rules)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Row 3"))
        .stderr(predicate::str::contains("圣遗物类型条件"))
        .stderr(predicate::str::contains("[花] is not a valid artifact category"))
        .stderr(predicate::str::contains("生之花"));
}

#[test]
fn check_rejects_modified_header() {
    let temp_dir = tempfile::tempdir().unwrap();
    let path = temp_dir.path().join("rules.tsv");
    fs::write(
        &path,
        "圣遗物类型\t等级条件\t星级条件\t主词条条件\t副词条条件\t期望结果\n花\t\t\t\t\t锁\n",
    )
    .unwrap();

    artisort(temp_dir.path())
        .arg("check")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("header row"))
        .stderr(predicate::str::contains("not a valid artifact category").not());
}

#[test]
fn classify_without_rules_uses_heuristic() {
    let temp_dir = tempfile::tempdir().unwrap();
    let items = write_items(temp_dir.path());

    artisort(temp_dir.path())
        .arg("classify")
        .arg(&items)
        .assert()
        .success()
        .stdout(predicate::str::contains("heuristic step 1"))
        .stdout(predicate::str::contains("heuristic step 2"))
        .stdout(predicate::str::contains("heuristic step 3"))
        .stdout(predicate::str::contains("3 items: 2 keep, 1 discard, 0 undetermined"));
}

#[test]
fn classify_with_rules_leaves_unmatched_undetermined() {
    let temp_dir = tempfile::tempdir().unwrap();
    let items = write_items(temp_dir.path());
    let rules = write_rules(temp_dir.path(), "\t\t\t\t有攻击力，有防御力\t不锁\n\t\t<5\t\t\t不锁\n");

    artisort(temp_dir.path())
        .arg("classify")
        .arg(&items)
        .arg("--rules")
        .arg(&rules)
        .assert()
        .success()
        .stdout(predicate::str::contains("rule on row 2"))
        .stdout(predicate::str::contains("rule on row 3"))
        .stdout(predicate::str::contains("no rule matched"))
        .stdout(predicate::str::contains("0 keep, 2 discard, 1 undetermined"));
}

#[test]
fn classify_with_broken_rules_does_not_fall_back() {
    let temp_dir = tempfile::tempdir().unwrap();
    let items = write_items(temp_dir.path());
    let rules = write_rules(temp_dir.path(), "\t>abc\t\t\t\t锁\n");

    artisort(temp_dir.path())
        .arg("classify")
        .arg(&items)
        .arg("--rules")
        .arg(&rules)
        .assert()
        .failure()
        .stdout(predicate::str::contains("heuristic").not())
        .stderr(predicate::str::contains("[>abc] is not a number"));
}

#[test]
fn classify_reads_rules_file_from_config() {
    let temp_dir = tempfile::tempdir().unwrap();
    let items = write_items(temp_dir.path());
    let rules = write_rules(temp_dir.path(), "\t\t\t\t\t锁\n");
    let config = serde_json::json!({ "rules_file": rules });
    fs::write(temp_dir.path().join("config.json"), config.to_string()).unwrap();

    artisort(temp_dir.path())
        .arg("classify")
        .arg(&items)
        .assert()
        .success()
        .stdout(predicate::str::contains("3 items: 3 keep"));

    artisort(temp_dir.path())
        .arg("classify")
        .arg(&items)
        .arg("--heuristic")
        .assert()
        .success()
        .stdout(predicate::str::contains("1 discard"));
}

#[test]
fn template_then_check() {
    let temp_dir = tempfile::tempdir().unwrap();
    let path = temp_dir.path().join("rules.json");

    artisort(temp_dir.path())
        .arg("template")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote rule template"));

    artisort(temp_dir.path())
        .arg("check")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("no rules"));

    artisort(temp_dir.path())
        .arg("template")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn labels_lists_vocabulary() {
    let temp_dir = tempfile::tempdir().unwrap();

    artisort(temp_dir.path())
        .arg("labels")
        .assert()
        .success()
        .stdout(predicate::str::contains("元素充能效率"))
        .stdout(predicate::str::contains("理之冠"))
        .stdout(predicate::str::contains("没有"));
}

#[test]
fn full_width_digits_in_tier_column() {
    let temp_dir = tempfile::tempdir().unwrap();
    let items = write_items(temp_dir.path());
    let rules = write_rules(temp_dir.path(), "\t\t<５\t\t\t不锁\n");

    artisort(temp_dir.path())
        .arg("classify")
        .arg(&items)
        .arg("--rules")
        .arg(&rules)
        .assert()
        .success()
        .stdout(predicate::str::contains("0 keep, 1 discard, 2 undetermined"));
}

#[test]
fn missing_rules_file_is_named() {
    let temp_dir = tempfile::tempdir().unwrap();
    let items = write_items(temp_dir.path());

    artisort(temp_dir.path())
        .arg("classify")
        .arg(&items)
        .arg("--rules")
        .arg("rulez.tsv")
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot read rulez.tsv"));
}

#[test]
fn config_set_then_classify() {
    let temp_dir = tempfile::tempdir().unwrap();
    let items = write_items(temp_dir.path());
    let rules = write_rules(temp_dir.path(), "\t\t\t\t\t锁\n");

    artisort(temp_dir.path())
        .arg("config")
        .arg("rules_file")
        .arg(&rules)
        .assert()
        .success()
        .stdout(predicate::str::contains("rules_file set to"));
    assert!(temp_dir.path().join("config.json").exists());

    artisort(temp_dir.path())
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("rules_file = "))
        .stdout(predicate::str::contains("active_sheet = Active"));

    artisort(temp_dir.path())
        .arg("classify")
        .arg(&items)
        .assert()
        .success()
        .stdout(predicate::str::contains("3 items: 3 keep"));
}

#[test]
fn config_rejects_unknown_key() {
    let temp_dir = tempfile::tempdir().unwrap();

    artisort(temp_dir.path())
        .arg("config")
        .arg("theme")
        .arg("dark")
        .assert()
        .success()
        .stdout(predicate::str::contains("Unknown config key: theme"));
    assert!(!temp_dir.path().join("config.json").exists());
}
