use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const HUNTER2_HASH: &str = "f52fbd32b2b3b86ff88ef6c490628285f482af15ddcb29541f94bcf526a3f6c7";

fn homesense(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("homesense").unwrap();
    cmd.env_remove("DATABASE_URL")
        .env_remove("HOMESENSE_TIMEZONE")
        .env_remove("HOMESENSE_MISSING_DEVICES")
        .env("HOMESENSE_PASSWORD_HASH", HUNTER2_HASH)
        .env("HOMESENSE_DB_PATH", dir.path().join("cli.db"));
    cmd
}

#[test]
fn test_cli_help() {
    let mut cmd = Command::cargo_bin("homesense").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Latest temperature and humidity readings"));
}

#[test]
fn test_cli_serve_help() {
    let mut cmd = Command::cargo_bin("homesense").unwrap();
    cmd.arg("serve").arg("--help").assert().success().stdout(predicate::str::contains("port"));
}

#[test]
fn test_hash_password() {
    let mut cmd = Command::cargo_bin("homesense").unwrap();
    cmd.args(["hash-password", "hunter2"])
        .assert()
        .success()
        .stdout(predicate::str::diff(format!("{HUNTER2_HASH}\n")));
}

#[test]
fn test_missing_password_hash_fails() {
    let dir = TempDir::new().unwrap();
    let mut cmd = homesense(&dir);
    cmd.env_remove("HOMESENSE_PASSWORD_HASH")
        .arg("locations")
        .assert()
        .failure()
        .stderr(predicate::str::contains("HOMESENSE_PASSWORD_HASH"));
}

#[test]
fn test_ingest_then_latest() {
    let dir = TempDir::new().unwrap();

    homesense(&dir)
        .args(["set-location", "dev-1", "Kitchen"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Kitchen"));

    homesense(&dir)
        .args(["ingest", "dev-1", "21.3", "55.2", "--time", "1700000000000"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"inserted\":true"));

    homesense(&dir)
        .args(["latest", "--password", "hunter2", "--devices", "dev-1"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("\"location\": \"Kitchen\"")
                .and(predicate::str::contains("\"absoluteHumidity\": \"10.3\""))
                .and(predicate::str::contains("14/11/2023, 22:13:20")),
        );
}

#[test]
fn test_latest_wrong_password() {
    let dir = TempDir::new().unwrap();
    homesense(&dir)
        .args(["latest", "--password", "nope", "--devices", "dev-1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Incorrect password"));
}

#[test]
fn test_device_for_location() {
    let dir = TempDir::new().unwrap();
    homesense(&dir).args(["set-location", "z-2", "Kitchen"]).assert().success();
    homesense(&dir).args(["set-location", "k-1", "Kitchen"]).assert().success();

    homesense(&dir)
        .args(["device-for", "Kitchen"])
        .assert()
        .success()
        .stdout(predicate::str::diff("k-1\n"));

    homesense(&dir)
        .args(["device-for", "Garage"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Garage"));
}

#[test]
fn test_locations_lists_entries() {
    let dir = TempDir::new().unwrap();
    homesense(&dir).args(["set-location", "b", "Bedroom"]).assert().success();
    homesense(&dir).args(["set-location", "a", "Attic"]).assert().success();

    homesense(&dir)
        .arg("locations")
        .assert()
        .success()
        .stdout(predicate::str::contains("Attic").and(predicate::str::contains("Bedroom")));
}
