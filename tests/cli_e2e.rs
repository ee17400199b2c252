#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;

fn adboard(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("adboard").unwrap();
    cmd.env("ADBOARD_DATA_DIR", dir)
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .current_dir(dir);
    cmd
}

fn publish(dir: &Path, title: &str, description: &str, phone: &str) {
    adboard(dir)
        .args(["add", "--title", title, "--description", description])
        .args(["--phone", phone, "--price", "1500", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("Ad published: {}", title)));
}

#[test]
fn empty_board_invites_first_ad() {
    let temp = tempfile::tempdir().unwrap();
    adboard(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("My Board"))
        .stdout(predicate::str::contains("No ads yet. Add yours for 20 ₴."));
}

#[test]
fn published_ad_is_listed() {
    let temp = tempfile::tempdir().unwrap();
    publish(temp.path(), "Bike", "Red bike, great shape", "+380671234567");

    adboard(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("1. Bike"))
        .stdout(predicate::str::contains("1500 ₴"))
        .stdout(predicate::str::contains("Red bike, great shape"))
        .stdout(predicate::str::contains("Phone: +380671234567"));

    assert!(temp.path().join("classified_ads_v1.json").exists());
}

#[test]
fn search_filters_by_phone_and_text() {
    let temp = tempfile::tempdir().unwrap();
    publish(temp.path(), "Bike", "Red", "+380671234567");
    publish(temp.path(), "Sofa", "Blue velvet", "+380501112233");

    adboard(temp.path())
        .args(["search", "velvet"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Sofa"))
        .stdout(predicate::str::contains("Bike").not());

    adboard(temp.path())
        .args(["ls", "-s", "067"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2. Bike"))
        .stdout(predicate::str::contains("Sofa").not());

    adboard(temp.path())
        .args(["search", "piano"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No ads match \"piano\"."));
}

#[test]
fn scripted_add_with_bad_phone_fails() {
    let temp = tempfile::tempdir().unwrap();
    adboard(temp.path())
        .args(["add", "--title", "Bike", "--description", "Red"])
        .args(["--phone", "12", "--yes"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Phone number looks invalid"));

    assert!(!temp.path().join("classified_ads_v1.json").exists());
}

#[test]
fn interactive_add_walks_the_form() {
    let temp = tempfile::tempdir().unwrap();
    adboard(temp.path())
        .arg("add")
        .write_stdin("Bike\nRed bike\n\n+380671234567\np\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Payment: 20 ₴"))
        .stdout(predicate::str::contains("Done! Ad published: Bike"));

    adboard(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("1. Bike"));
}

#[test]
fn interactive_add_reprompts_after_validation_error() {
    let temp = tempfile::tempdir().unwrap();
    adboard(temp.path())
        .arg("add")
        // price "abc" fails, then every field is asked again with its value
        .write_stdin("Bike\nRed\nabc\n+380671234567\n\n\n1200\n\np\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Price must be a number"))
        .stdout(predicate::str::contains("Title [Bike]"))
        .stdout(predicate::str::contains("Ad published: Bike"));

    adboard(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("1200 ₴"));
}

#[test]
fn cancelled_payment_publishes_nothing() {
    let temp = tempfile::tempdir().unwrap();
    adboard(temp.path())
        .args(["add", "--title", "Bike", "--description", "Red"])
        .args(["--phone", "+380671234567"])
        .write_stdin("c\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Cancelled. Nothing was published."));

    adboard(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("No ads yet"));
}

#[test]
fn end_of_input_cancels_the_form() {
    let temp = tempfile::tempdir().unwrap();
    adboard(temp.path())
        .arg("add")
        .write_stdin("Bike\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Nothing was published."));

    assert!(!temp.path().join("classified_ads_v1.json").exists());
}

#[test]
fn declined_delete_keeps_ad() {
    let temp = tempfile::tempdir().unwrap();
    publish(temp.path(), "Bike", "Red", "+380671234567");

    adboard(temp.path())
        .args(["delete", "1"])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Delete ad? [y/N]"))
        .stdout(predicate::str::contains("Kept: Bike"));

    adboard(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("1. Bike"));
}

#[test]
fn confirmed_delete_removes_ad() {
    let temp = tempfile::tempdir().unwrap();
    publish(temp.path(), "Bike", "Red", "+380671234567");
    publish(temp.path(), "Sofa", "Blue", "+380501112233");

    adboard(temp.path())
        .args(["rm", "2"])
        .write_stdin("y\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Ad deleted: Bike"));

    adboard(temp.path())
        .args(["delete", "1", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Ad deleted: Sofa"));

    let raw = fs::read_to_string(temp.path().join("classified_ads_v1.json")).unwrap();
    assert_eq!(raw.trim(), "[]");
}

#[test]
fn unknown_selector_is_an_error() {
    let temp = tempfile::tempdir().unwrap();
    adboard(temp.path())
        .args(["delete", "7", "--yes"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Ad not found: 7"));
}

#[test]
fn corrupt_slot_shows_empty_board() {
    let temp = tempfile::tempdir().unwrap();
    fs::write(temp.path().join("classified_ads_v1.json"), "garbage").unwrap();

    adboard(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("No ads yet"));
}

#[test]
fn config_changes_fee() {
    let temp = tempfile::tempdir().unwrap();
    adboard(temp.path())
        .args(["config", "fee", "35"])
        .assert()
        .success()
        .stdout(predicate::str::contains("fee set to 35"));

    adboard(temp.path())
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("fee = 35"))
        .stdout(predicate::str::contains("storage_key = classified_ads_v1"));

    adboard(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Add yours for 35 ₴."));
}

#[test]
fn data_dir_flag_overrides_env() {
    let temp = tempfile::tempdir().unwrap();
    let other = temp.path().join("other");
    adboard(temp.path())
        .arg("--data-dir")
        .arg(&other)
        .args(["add", "--title", "Bike", "--description", "Red"])
        .args(["--phone", "+380671234567", "--yes"])
        .assert()
        .success();

    assert!(other.join("classified_ads_v1.json").exists());
    assert!(!temp.path().join("classified_ads_v1.json").exists());
}
