use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn wedplan(data_dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("wedplan").unwrap();
    cmd.env("WEDPLAN_DATA_DIR", data_dir)
        .env_remove("PINTEREST_ACCESS_TOKEN")
        .env_remove("WEDPLAN_PORT")
        .env_remove("RUST_LOG");
    cmd
}

fn init(data_dir: &Path) {
    wedplan(data_dir)
        .args([
            "init",
            "--partner1",
            "Ava",
            "--partner2",
            "Ben",
            "--date",
            "2030-06-14",
            "--location",
            "Napa, CA",
            "--guests",
            "medium",
            "--style",
            "rustic",
            "--budget",
            "50k",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created wedding plan for Ava & Ben"));
}

fn add_guest(data_dir: &Path, first: &str, last: &str, extra: &[&str]) -> String {
    let output = wedplan(data_dir)
        .args(["guest", "add", first, last])
        .args(extra)
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    stdout
        .lines()
        .find_map(|l| l.trim().strip_prefix("RSVP code:"))
        .map(|c| c.trim().to_string())
        .expect("rsvp code in output")
}

#[test]
fn init_then_status() {
    let tmp = TempDir::new().unwrap();
    init(tmp.path());

    wedplan(tmp.path())
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("Ava & Ben"))
        .stdout(predicate::str::contains("days"))
        .stdout(predicate::str::contains("Budget"));

    wedplan(tmp.path())
        .args(["budget", "summary"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Venue"))
        .stdout(predicate::str::contains("$50,000"));

    wedplan(tmp.path())
        .args(["timeline", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Set your budget"));
}

#[test]
fn init_with_missing_flag_fails_its_step() {
    let tmp = TempDir::new().unwrap();

    wedplan(tmp.path())
        .args([
            "init",
            "--partner1",
            "Ava",
            "--partner2",
            "Ben",
            "--date",
            "2030-06-14",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Step 3"));

    wedplan(tmp.path())
        .arg("status")
        .assert()
        .failure()
        .stderr(predicate::str::contains("wedplan init"));
}

#[test]
fn guest_add_and_list() {
    let tmp = TempDir::new().unwrap();
    init(tmp.path());

    add_guest(tmp.path(), "Liam", "Chen", &[]);
    add_guest(tmp.path(), "Emma", "Johnson", &["--relation", "family"]);

    let output = wedplan(tmp.path()).args(["guest", "list"]).output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let chen = stdout.find("Liam Chen").unwrap();
    let johnson = stdout.find("Emma Johnson").unwrap();
    assert!(chen < johnson);
    assert!(stdout.contains("2 guest(s)"));

    wedplan(tmp.path())
        .args(["guest", "list", "--search", "zzz"])
        .assert()
        .success()
        .stdout("No guests found.\n");
}

#[test]
fn rsvp_accept_updates_stats() {
    let tmp = TempDir::new().unwrap();
    init(tmp.path());
    let code = add_guest(tmp.path(), "Emma", "Johnson", &["--plus-one"]);
    add_guest(tmp.path(), "Liam", "Chen", &[]);

    wedplan(tmp.path())
        .args(["rsvp", &code.to_lowercase()])
        .assert()
        .success()
        .stdout(predicate::str::contains("wedding of Ava & Ben"))
        .stdout(predicate::str::contains("welcome to bring a guest"));

    wedplan(tmp.path())
        .args([
            "rsvp",
            &code,
            "--accept",
            "--meal",
            "chicken",
            "--plus-one",
            "Noah Smith",
            "--song",
            "Dancing Queen",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Thank you, Emma!"))
        .stdout(predicate::str::contains("Meal: Chicken"));

    wedplan(tmp.path())
        .args(["guest", "stats"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Confirmed:    1"))
        .stdout(predicate::str::contains("Pending:      1"))
        .stdout(predicate::str::contains("Attending:      2"));

    wedplan(tmp.path())
        .args(["guest", "show", "Emma Johnson"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Song request: Dancing Queen"));
}

#[test]
fn rsvp_unknown_code_fails() {
    let tmp = TempDir::new().unwrap();
    init(tmp.path());

    wedplan(tmp.path())
        .args(["rsvp", "NOPE42", "--decline"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No invitation found for code 'NOPE42'"));
}

#[test]
fn inspiration_search_without_token_shows_sample_pins() {
    let tmp = TempDir::new().unwrap();

    wedplan(tmp.path())
        .args(["inspiration", "search", "rustic barn"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Showing sample pins"))
        .stdout(predicate::str::contains("rustic barn - Bridal bouquet"));

    let output = wedplan(tmp.path())
        .args(["inspiration", "search", "boho", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let page: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(page["isMock"], true);
    assert_eq!(page["pins"].as_array().unwrap().len(), 12);
    assert!(page["nextPage"].is_null());
}

#[test]
fn inspiration_search_saves_to_moodboard() {
    let tmp = TempDir::new().unwrap();

    wedplan(tmp.path())
        .args(["moodboard", "create", "Barn"])
        .assert()
        .success();

    wedplan(tmp.path())
        .args(["inspiration", "search", "barn", "--save-to", "Barn"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved 12 pins to Barn"));

    wedplan(tmp.path())
        .args(["moodboard", "show", "Barn"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Items (12):"));
}

#[test]
fn export_and_verify() {
    let tmp = TempDir::new().unwrap();
    init(tmp.path());
    add_guest(tmp.path(), "Emma", "Johnson", &["--email", "emma@example.com"]);

    let backup = tmp.path().join("backup.json");
    wedplan(tmp.path())
        .args(["export", "all"])
        .arg(&backup)
        .arg("--pretty")
        .assert()
        .success();

    let raw = std::fs::read(&backup).unwrap();
    let parsed: serde_json::Value = serde_json::from_slice(&raw).unwrap();
    assert_eq!(parsed["schema_version"], "1.0.0");
    assert_eq!(parsed["metadata"]["guest_count"], 1);
    assert_eq!(parsed["wedding"]["partner1_name"], "Ava");

    wedplan(tmp.path())
        .args(["export", "verify"])
        .arg(&backup)
        .assert()
        .success()
        .stdout(predicate::str::contains("is a valid export"));

    let guests = tmp.path().join("guests.csv");
    wedplan(tmp.path())
        .args(["export", "guests"])
        .arg(&guests)
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 1 guests"));
    let csv = std::fs::read_to_string(&guests).unwrap();
    assert!(csv.starts_with("first_name,last_name,email"));
    assert!(csv.contains("Emma,Johnson,emma@example.com"));
}

#[test]
fn guest_import_skips_duplicates() {
    let tmp = TempDir::new().unwrap();
    init(tmp.path());
    add_guest(tmp.path(), "Emma", "Johnson", &[]);

    let file = tmp.path().join("guests.csv");
    std::fs::write(
        &file,
        "first_name,last_name,email,relation,side,plus_one\n\
         Emma,Johnson,,family,partner1,no\n\
         Liam,Chen,liam@example.com,friend,partner2,yes\n\
         Mia,Lopez,,coworker,both,no\n",
    )
    .unwrap();

    wedplan(tmp.path())
        .args(["guest", "import"])
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("Imported:            2"))
        .stdout(predicate::str::contains("Duplicates (skip):   1"));
}

#[test]
fn audit_lists_changes() {
    let tmp = TempDir::new().unwrap();
    init(tmp.path());
    add_guest(tmp.path(), "Emma", "Johnson", &[]);

    wedplan(tmp.path())
        .args(["audit", "--limit", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("CREATE"))
        .stdout(predicate::str::contains("Emma Johnson"));
}
