//! Integration tests for the hashquine CLI.
//!
//! File fixtures are built around the classic FastColl pair at block 0,
//! the only place a genuine MD5 collision can sit in a synthetic file.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

const WANG_B_HEX: &str = concat!(
    "d131dd02c5e6eec4693d9a0698aff95c2fcab58712467eab4004583eb8fb7f89",
    "55ad340609f4b30283e488832571415a085125e8f7cdc99fd91dbdf280373c5b",
    "d8823e3156348f5bae6dacd436c919c6dd53e2b487da03fd02396306d248cda0",
    "e99f33420f577ee8ce54b67080a80d1ec69821bcb6a8839396f9652b6ff72a70",
);
const WANG_A_HEX: &str = concat!(
    "d131dd02c5e6eec4693d9a0698aff95c2fcab50712467eab4004583eb8fb7f89",
    "55ad340609f4b30283e4888325f1415a085125e8f7cdc99fd91dbd7280373c5b",
    "d8823e3156348f5bae6dacd436c919c6dd53e23487da03fd02396306d248cda0",
    "e99f33420f577ee8ce54b67080280d1ec69821bcb6a8839396f965ab6ff72a70",
);

const TAIL: &[u8] = b"The quick brown fox jumps over the lazy dog! 0123456789.";

/// A single-instance greedy profile over the FastColl pair plus TAIL.
const WANG_PROFILE_JSON: &str = r#"{
  "name": "wang-greedy",
  "summary": "single FastColl instance, greedy cycle",
  "family": "fast",
  "header_len": 128,
  "header_md5": "79054025255fb1a26e4bc422aef54eb4",
  "full_md5": "47ce65c1eceff57f1122e5953ef01f6d",
  "positions": { "table": [0] },
  "strategy": "greedy",
  "value_len": 1
}"#;

fn wang_file(hex: &str) -> Vec<u8> {
    let mut data = hex::decode(hex).unwrap();
    data.extend_from_slice(TAIL);
    data
}

#[test]
fn test_cli_version() {
    let mut cmd = Command::cargo_bin("hashquine").unwrap();
    cmd.arg("--version");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("hashquine"));
}

#[test]
fn test_cli_help() {
    let mut cmd = Command::cargo_bin("hashquine").unwrap();
    cmd.arg("--help");
    cmd.assert().success().stdout(predicate::str::contains(
        "Inspect and re-encode hashquine files",
    ));
}

#[test]
fn test_profiles_lists_builtins() {
    let mut cmd = Command::cargo_bin("hashquine").unwrap();
    cmd.arg("profiles");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("gz"))
        .stdout(predicate::str::contains("gif-avp"))
        .stdout(predicate::str::contains("tar-zst"));
}

#[test]
fn test_profiles_dumps_json() {
    let mut cmd = Command::cargo_bin("hashquine").unwrap();
    cmd.arg("profiles").arg("gz");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("header_md5"))
        .stdout(predicate::str::contains("de4a4312a137a2b95c3dfaa3dceb6520"));
}

#[test]
fn test_profiles_unknown_name_fails() {
    let mut cmd = Command::cargo_bin("hashquine").unwrap();
    cmd.arg("profiles").arg("no-such-format");
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Error"));
}

#[test]
fn test_scan_reports_instance() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("collide.bin");
    fs::write(&path, wang_file(WANG_B_HEX)).unwrap();

    let mut cmd = Command::cargo_bin("hashquine").unwrap();
    cmd.arg("scan").arg(&path);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("fastcoll side B"))
        .stdout(predicate::str::contains("1 instances: 1 fastcoll, 0 unicoll"))
        .stdout(predicate::str::contains(
            "suggested header md5: 79054025255fb1a26e4bc422aef54eb4",
        ))
        .stdout(predicate::str::contains(
            "47ce65c1eceff57f1122e5953ef01f6d",
        ));
}

#[test]
fn test_scan_plain_file_finds_nothing() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("plain.bin");
    fs::write(&path, vec![0u8; 512]).unwrap();

    let mut cmd = Command::cargo_bin("hashquine").unwrap();
    cmd.arg("scan").arg(&path);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("No collision instances found"));
}

#[test]
fn test_scan_flip_swaps_sides() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("collide.bin");
    let out = dir.path().join("flipped.bin");
    fs::write(&path, wang_file(WANG_B_HEX)).unwrap();

    let mut cmd = Command::cargo_bin("hashquine").unwrap();
    cmd.arg("scan").arg(&path).arg("--flip").arg("-o").arg(&out);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Flipped 1 instances"));

    assert_eq!(fs::read(&out).unwrap(), wang_file(WANG_A_HEX));
    // The input is untouched when -o is given.
    assert_eq!(fs::read(&path).unwrap(), wang_file(WANG_B_HEX));

    let mut cmd = Command::cargo_bin("hashquine").unwrap();
    cmd.arg("scan").arg(&out);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("fastcoll side A"));
}

#[test]
fn test_scan_set_counts_actual_changes() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("collide.bin");
    fs::write(&path, wang_file(WANG_B_HEX)).unwrap();

    let mut cmd = Command::cargo_bin("hashquine").unwrap();
    cmd.arg("scan").arg(&path).arg("--set").arg("b");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Set 0 of 1 instances to side B"));
}

#[test]
fn test_encode_and_read_round_trip() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("art.bin");
    let profile = dir.path().join("wang.json");
    fs::write(&path, wang_file(WANG_A_HEX)).unwrap();
    fs::write(&profile, WANG_PROFILE_JSON).unwrap();

    let mut cmd = Command::cargo_bin("hashquine").unwrap();
    cmd.arg("encode")
        .arg(&path)
        .arg("--profile-file")
        .arg(&profile)
        .arg("--value")
        .arg("0");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Encoding requested value: '0' (len:1)"))
        .stdout(predicate::str::contains("Output value: '0' (length:1)"));

    // "0" matches cycle symbol '0', so the instance landed on side B.
    assert_eq!(fs::read(&path).unwrap(), wang_file(WANG_B_HEX));

    let mut cmd = Command::cargo_bin("hashquine").unwrap();
    cmd.arg("read").arg(&path).arg("--profile-file").arg(&profile);
    cmd.assert().success().stdout(predicate::str::contains("0"));
}

#[test]
fn test_encode_reports_truncation() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("art.bin");
    let profile = dir.path().join("wang.json");
    fs::write(&path, wang_file(WANG_B_HEX)).unwrap();
    fs::write(&profile, WANG_PROFILE_JSON).unwrap();

    let mut cmd = Command::cargo_bin("hashquine").unwrap();
    cmd.arg("encode")
        .arg(&path)
        .arg("--profile-file")
        .arg(&profile)
        .arg("--value")
        .arg("5");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Output value: '' (length:0)"))
        .stdout(predicate::str::contains("truncated"));
}

#[test]
fn test_encode_accepts_no_reset() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("art.bin");
    let profile = dir.path().join("wang.json");
    fs::write(&path, wang_file(WANG_A_HEX)).unwrap();
    fs::write(&profile, WANG_PROFILE_JSON).unwrap();

    // Greedy profiles ignore the override; the flag still parses.
    let mut cmd = Command::cargo_bin("hashquine").unwrap();
    cmd.arg("encode")
        .arg(&path)
        .arg("--profile-file")
        .arg(&profile)
        .arg("--no-reset")
        .arg("--value")
        .arg("0");
    cmd.assert().success();
    assert_eq!(fs::read(&path).unwrap(), wang_file(WANG_B_HEX));
}

#[test]
fn test_encode_rejects_tampered_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("art.bin");
    let profile = dir.path().join("wang.json");
    let mut data = wang_file(WANG_B_HEX);
    data[20] ^= 0xff;
    fs::write(&path, data).unwrap();
    fs::write(&profile, WANG_PROFILE_JSON).unwrap();

    let mut cmd = Command::cargo_bin("hashquine").unwrap();
    cmd.arg("encode")
        .arg(&path)
        .arg("--profile-file")
        .arg(&profile)
        .arg("--value")
        .arg("0");
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("header digest mismatch"));
}

#[test]
fn test_encode_requires_a_profile() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("art.bin");
    fs::write(&path, wang_file(WANG_B_HEX)).unwrap();

    let mut cmd = Command::cargo_bin("hashquine").unwrap();
    cmd.arg("encode").arg(&path).arg("--value").arg("0");
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("exactly one of"));
}

#[test]
fn test_shatter_rejects_plain_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("not-a-pdf.bin");
    fs::write(&path, vec![0u8; 512]).unwrap();

    let mut cmd = Command::cargo_bin("hashquine").unwrap();
    cmd.arg("shatter").arg(&path);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("header SHA-1 mismatch"));
}
