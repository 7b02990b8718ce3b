use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;

mod common;
use common::{init_dir, setup_test_dir, shifts_path, sr};

#[test]
fn test_shift_set_and_list() {
    let dir = setup_test_dir("shift_set");

    init_dir(&dir);

    sr().args(["--dir", &dir, "shift", "set", "mon", "morning", "8-14"])
        .assert()
        .success()
        .stdout(contains("Set the Mon Morning window to 8-14."));

    sr().args(["--dir", &dir, "shift", "list"])
        .assert()
        .success()
        .stdout(contains("Mon"))
        .stdout(contains("Morning"))
        .stdout(contains("8-14"));

    let table = fs::read_to_string(shifts_path(&dir)).expect("shift table");
    assert!(table.contains("Mon,Morning,8,14"));
}

#[test]
fn test_shift_table_is_sparse() {
    let dir = setup_test_dir("shift_sparse");

    init_dir(&dir);

    sr().args(["--dir", &dir, "shift", "set", "fri", "evening", "18-23"])
        .assert()
        .success();

    // Exactly one data row: pairs that were never set are not written
    let table = fs::read_to_string(shifts_path(&dir)).expect("shift table");
    assert_eq!(table.lines().count(), 2);
}

#[test]
fn test_shift_set_off_removes_the_pair() {
    let dir = setup_test_dir("shift_set_off");

    init_dir(&dir);

    sr().args(["--dir", &dir, "shift", "set", "mon", "morning", "8-14"])
        .assert()
        .success();

    sr().args(["--dir", &dir, "shift", "set", "mon", "morning", "off"])
        .assert()
        .success()
        .stdout(contains("Cleared the Mon Morning window."));

    let table = fs::read_to_string(shifts_path(&dir)).expect("shift table");
    assert_eq!(table.lines().count(), 1);

    sr().args(["--dir", &dir, "shift", "list"])
        .assert()
        .success()
        .stdout(contains("No shift windows configured."));
}

#[test]
fn test_shift_clear() {
    let dir = setup_test_dir("shift_clear");

    init_dir(&dir);

    sr().args(["--dir", &dir, "shift", "set", "wed", "afternoon", "12-18"])
        .assert()
        .success();

    sr().args(["--dir", &dir, "shift", "clear", "wed", "afternoon"])
        .assert()
        .success()
        .stdout(contains("Cleared the Wed Afternoon window."));

    // Clearing an unset pair is a no-op, not an error
    sr().args(["--dir", &dir, "shift", "clear", "wed", "afternoon"])
        .assert()
        .success()
        .stdout(contains("No window set for Wed Afternoon."));
}

#[test]
fn test_shift_windows_survive_reload() {
    let dir = setup_test_dir("shift_reload");

    init_dir(&dir);

    sr().args(["--dir", &dir, "shift", "set", "mon", "morning", "8-14"])
        .assert()
        .success();

    sr().args(["--dir", &dir, "shift", "set", "mon", "evening", "18-23"])
        .assert()
        .success();

    // Both windows are still there in a fresh invocation
    sr().args(["--dir", &dir, "shift", "list"])
        .assert()
        .success()
        .stdout(contains("8-14"))
        .stdout(contains("18-23"));
}

#[test]
fn test_shift_rejects_bad_input() {
    let dir = setup_test_dir("shift_bad_input");

    init_dir(&dir);

    sr().args(["--dir", &dir, "shift", "set", "mon", "morning", "9-26"])
        .assert()
        .failure()
        .stderr(contains("Invalid hour range '9-26'"));

    sr().args(["--dir", &dir, "shift", "set", "funday", "morning", "8-14"])
        .assert()
        .failure()
        .stderr(contains("Invalid day label: funday"));

    sr().args(["--dir", &dir, "shift", "set", "mon", "brunch", "8-14"])
        .assert()
        .failure()
        .stderr(contains("Invalid shift type: brunch"));

    // Nothing was written by the rejected commands
    let table = fs::read_to_string(shifts_path(&dir)).expect("shift table");
    assert_eq!(table.lines().count(), 1);

    sr().args(["--dir", &dir, "shift", "list"])
        .assert()
        .success()
        .stdout(contains("No shift windows configured.").and(contains("8-14").not()));
}
