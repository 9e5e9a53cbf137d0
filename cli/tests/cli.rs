use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;
use std::io::Write;

fn cmd() -> Command {
    let mut cmd = Command::cargo_bin("quotebook").unwrap();
    cmd.args(["--no-config", "--no-color"]);
    cmd
}

#[test]
fn add_then_list() {
    cmd()
        .args([r#"quote "hello""#, "quote list"])
        .assert()
        .success()
        .stdout(contains("Added normal quote: hello"))
        .stdout(contains("- hello"));
}

#[test]
fn uwu_is_stored_transformed() {
    cmd()
        .args([r#"quote uwu "hello""#, "quote list"])
        .assert()
        .success()
        .stdout(contains("- hewwo"));
}

#[test]
fn pig_latin_sentence() {
    cmd()
        .args(["-q", r#"quote piglatin "the quick brown fox""#, "quote list"])
        .assert()
        .success()
        .stdout(predicate::eq("- Ethay uickqay ownbray oxfay\n"));
}

#[test]
fn pig_latin_vowel_word() {
    cmd()
        .args(["-q", r#"quote piglatin "apple""#, "quote list"])
        .assert()
        .success()
        .stdout(predicate::eq("- Appleway\n"));
}

#[test]
fn list_preserves_insertion_order() {
    cmd()
        .args(["-q", r#"quote "b""#, r#"quote “a”"#, "quote list"])
        .assert()
        .success()
        .stdout(predicate::eq("- b\n- a\n"));
}

#[test]
fn duplicate_is_reported_not_fatal() {
    cmd()
        .args([r#"quote "hello""#, r#"quote "hello""#, "quote list"])
        .assert()
        .success()
        .stdout(contains("Quote has already been added previously"))
        .stdout(contains("- hello").count(1));
}

#[test]
fn invalid_command_fails() {
    cmd()
        .args(["quote owo \"hello\""])
        .assert()
        .failure()
        .stderr(contains("Invalid command"));
}

#[test]
fn unchanged_variant_fails() {
    cmd()
        .args([r#"quote uwu "same""#])
        .assert()
        .failure()
        .stderr(contains("Quote was not modified"));
}

#[test]
fn too_long_quote_fails() {
    cmd()
        .args([r#"quote "ridiculously long quote that is specifically crafted to exceed the max quote length""#])
        .assert()
        .failure()
        .stderr(contains("Quote is too long"));
}

#[test]
fn partial_transformation_warns() {
    let quote = format!(r#"quote uwu "rule{}""#, " us".repeat(15));
    cmd()
        .arg(quote)
        .assert()
        .success()
        .stderr(contains("Quote too long, only partially transformed"));
}

#[test]
fn quiet_hides_warnings() {
    let quote = format!(r#"quote uwu "rule{}""#, " us".repeat(15));
    cmd()
        .args(["-q", &quote])
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(contains("partially transformed").not());
}

#[test]
fn json_list_output() {
    cmd()
        .args(["-q", "-o", "json", r#"quote "hello""#, "quote list"])
        .assert()
        .success()
        .stdout(contains("\"hello\""));
}

#[test]
fn config_file_sets_list_format() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[output]\nformat = \"json\"").unwrap();

    Command::cargo_bin("quotebook")
        .unwrap()
        .arg("--config")
        .arg(file.path())
        .args(["--no-color", "-q", r#"quote "hello""#, "quote list"])
        .assert()
        .success()
        .stdout(contains("[").and(contains("\"hello\"")));
}

#[test]
fn show_config_lists_sources() {
    cmd()
        .arg("--show-config")
        .assert()
        .success()
        .stdout(contains("Configuration sources"));
}
