use predicates::str::contains;
use std::fs;

mod common;
use common::{add_manager, init_dir, setup_test_dir, sr, temp_out};

#[test]
fn test_export_roster_csv() {
    let dir = setup_test_dir("export_csv");
    let out = temp_out("export_csv", "csv");

    init_dir(&dir);
    add_manager(&dir, "Anna Rossi", &["--role", "shift", "--mon", "9-17"]);

    sr().args(["--dir", &dir, "export", "--format", "csv", "--file", &out])
        .assert()
        .success()
        .stdout(contains("CSV export completed"));

    let content = fs::read_to_string(&out).expect("export file");
    assert!(content.starts_with("ID,Name,Role,Gender,Mon_start,Mon_end"));
    assert!(content.contains("1,Anna Rossi,shift,M,9,17"));
}

#[test]
fn test_export_roster_json() {
    let dir = setup_test_dir("export_json");
    let out = temp_out("export_json", "json");

    init_dir(&dir);
    add_manager(&dir, "Anna Rossi", &["--gender", "F"]);

    sr().args(["--dir", &dir, "export", "--format", "json", "--file", &out])
        .assert()
        .success()
        .stdout(contains("JSON export completed"));

    let content = fs::read_to_string(&out).expect("export file");
    assert!(content.contains("\"name\": \"Anna Rossi\""));
    assert!(content.contains("\"gender\": \"F\""));
}

#[test]
fn test_export_roster_xlsx() {
    let dir = setup_test_dir("export_xlsx");
    let out = temp_out("export_xlsx", "xlsx");

    init_dir(&dir);
    add_manager(&dir, "Anna Rossi", &[]);

    sr().args(["--dir", &dir, "export", "--format", "xlsx", "--file", &out])
        .assert()
        .success()
        .stdout(contains("XLSX export completed"));

    let meta = fs::metadata(&out).expect("export file");
    assert!(meta.len() > 0);
}

#[test]
fn test_export_shift_table() {
    let dir = setup_test_dir("export_shifts");
    let out = temp_out("export_shifts", "csv");

    init_dir(&dir);

    sr().args(["--dir", &dir, "shift", "set", "mon", "morning", "8-14"])
        .assert()
        .success();

    sr().args([
        "--dir", &dir, "export", "--format", "csv", "--file", &out, "--shifts",
    ])
    .assert()
    .success();

    let content = fs::read_to_string(&out).expect("export file");
    assert!(content.starts_with("Day,ShiftType,StartHour,EndHour"));
    assert!(content.contains("Mon,Morning,8,14"));
}

#[test]
fn test_export_force_overwrites_existing_file() {
    let dir = setup_test_dir("export_force");
    let out = temp_out("export_force", "csv");

    init_dir(&dir);
    add_manager(&dir, "Anna Rossi", &[]);

    fs::write(&out, "old contents").expect("seed file");

    sr().args([
        "--dir", &dir, "export", "--format", "csv", "--file", &out, "--force",
    ])
    .assert()
    .success();

    let content = fs::read_to_string(&out).expect("export file");
    assert!(content.contains("Anna Rossi"));
}
