//! Direct library-level tests for the table store and the roster session.

use shiftroster::core::session::RosterSession;
use shiftroster::core::validate::{DayField, ManagerDraft, validate};
use shiftroster::errors::ValidationError;
use shiftroster::models::availability::Availability;
use shiftroster::models::day::Day;
use shiftroster::models::gender::Gender;
use shiftroster::models::hours::HourRange;
use shiftroster::models::manager::{Manager, ManagerId};
use shiftroster::models::role::Role;
use shiftroster::models::shift::{ShiftPlan, ShiftType};
use shiftroster::store::RowIndex;
use shiftroster::store::roster::{RosterStore, next_id};
use shiftroster::store::shifts::ShiftStore;

use std::env;
use std::fs;
use std::path::PathBuf;

fn table_file(name: &str) -> PathBuf {
    let mut path = env::temp_dir();
    path.push(format!("{}_shiftroster_store", name));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("create test dir");
    path.join("table.csv")
}

fn sample(id: u32, name: &str) -> Manager {
    Manager {
        id: ManagerId::from_number(id),
        name: name.to_string(),
        role: Role::Shift,
        gender: Gender::Female,
        availability: Availability::default(),
    }
}

fn draft(name: &str) -> ManagerDraft {
    ManagerDraft {
        name: name.to_string(),
        role: "shift".to_string(),
        gender: "F".to_string(),
        ..Default::default()
    }
}

#[test]
fn test_ensure_initialized_is_idempotent() {
    let store = RosterStore::new(table_file("ensure_init"));

    store.ensure_initialized().expect("first init");
    store.upsert(None, &sample(1, "Anna Rossi")).expect("append");

    store.ensure_initialized().expect("second init");
    let managers = store.load_all().expect("load");
    assert_eq!(managers.len(), 1);
    assert_eq!(managers[0].name, "Anna Rossi");
}

#[test]
fn test_load_all_on_empty_table() {
    let store = RosterStore::new(table_file("load_empty"));
    store.ensure_initialized().expect("init");

    let managers = store.load_all().expect("load");
    assert!(managers.is_empty());
}

#[test]
fn test_upsert_appends_and_overwrites() {
    let store = RosterStore::new(table_file("upsert"));
    store.ensure_initialized().expect("init");

    store.upsert(None, &sample(1, "Anna Rossi")).expect("append");
    store.upsert(None, &sample(2, "Marco Bianchi")).expect("append");

    let mut replacement = sample(1, "Anna Verdi");
    replacement
        .availability
        .set(Day::Mon, HourRange::new(Some(9), Some(17)));
    store
        .upsert(Some(RowIndex(1)), &replacement)
        .expect("overwrite");

    let managers = store.load_all().expect("load");
    assert_eq!(managers.len(), 2);
    assert_eq!(managers[0].name, "Anna Verdi");
    assert_eq!(
        managers[0].availability.get(Day::Mon),
        HourRange::new(Some(9), Some(17))
    );
    assert_eq!(managers[1].name, "Marco Bianchi");
}

#[test]
fn test_upsert_out_of_range_row_fails() {
    let store = RosterStore::new(table_file("upsert_oob"));
    store.ensure_initialized().expect("init");

    assert!(store.upsert(Some(RowIndex(1)), &sample(1, "Anna")).is_err());
    assert!(store.load_all().expect("load").is_empty());
}

#[test]
fn test_delete_shifts_later_rows_up() {
    let store = RosterStore::new(table_file("delete_shift"));
    store.ensure_initialized().expect("init");

    store.upsert(None, &sample(1, "Anna Rossi")).expect("append");
    store.upsert(None, &sample(2, "Marco Bianchi")).expect("append");
    store.upsert(None, &sample(3, "Carla Verdi")).expect("append");

    store.delete(RowIndex(2)).expect("delete");

    let managers = store.load_all().expect("load");
    assert_eq!(managers.len(), 2);
    assert_eq!(managers[0].name, "Anna Rossi");
    assert_eq!(managers[1].name, "Carla Verdi");
    assert!(managers.iter().all(|m| m.id.as_str() != "2"));
}

#[test]
fn test_next_id_starts_at_one() {
    assert_eq!(next_id(&[]), 1);
}

#[test]
fn test_next_id_ignores_non_numeric_ids() {
    let mut junk = sample(0, "Luca Neri");
    junk.id = ManagerId::from_cell("x");

    let mut three = sample(0, "Carla Verdi");
    three.id = ManagerId::from_cell("3");

    let managers = vec![three, junk, sample(7, "Paolo Gallo")];
    assert_eq!(next_id(&managers), 8);
}

#[test]
fn test_validate_off_day_and_bounds() {
    let mut d = draft("Anna Rossi");
    d.days[Day::Tue.index()] = DayField {
        start: "13".to_string(),
        end: "23".to_string(),
    };

    let profile = validate(&d).expect("valid draft");
    assert_eq!(
        profile.availability.get(Day::Tue),
        HourRange::new(Some(13), Some(23))
    );
    assert!(profile.availability.get(Day::Mon).is_off());
}

#[test]
fn test_validate_rejections() {
    assert!(matches!(
        validate(&draft("   ")),
        Err(ValidationError::EmptyName)
    ));

    let mut bad_hour = draft("Anna");
    bad_hour.days[0].start = "x".to_string();
    assert!(matches!(
        validate(&bad_hour),
        Err(ValidationError::InvalidHour { day: Day::Mon, .. })
    ));

    let mut out_of_range = draft("Anna");
    out_of_range.days[6].end = "24".to_string();
    assert!(matches!(
        validate(&out_of_range),
        Err(ValidationError::HourOutOfRange {
            day: Day::Sun,
            hour: 24
        })
    ));

    let mut inverted = draft("Anna");
    inverted.days[0].start = "17".to_string();
    inverted.days[0].end = "9".to_string();
    assert!(matches!(
        validate(&inverted),
        Err(ValidationError::StartAfterEnd {
            day: Day::Mon,
            start: 17,
            end: 9
        })
    ));
}

#[test]
fn test_session_add_grows_cache_by_one() {
    let store = RosterStore::new(table_file("session_add"));
    let mut session = RosterSession::open(store).expect("open");

    assert_eq!(session.managers().len(), 0);

    let added = session.add(&draft("Anna Rossi")).expect("add");
    assert_eq!(added.id.as_str(), "1");
    assert_eq!(session.managers().len(), 1);

    let added = session.add(&draft("Marco Bianchi")).expect("add");
    assert_eq!(added.id.as_str(), "2");
    assert_eq!(session.managers().len(), 2);
}

#[test]
fn test_session_update_never_changes_id() {
    let store = RosterStore::new(table_file("session_update"));
    let mut session = RosterSession::open(store).expect("open");

    session.add(&draft("Anna Rossi")).expect("add");
    session.add(&draft("Marco Bianchi")).expect("add");

    let index = session.select_by_id("2").expect("select");
    let updated = session.update(index, &draft("Marco Verdi")).expect("update");

    assert_eq!(updated.id.as_str(), "2");
    assert_eq!(session.managers()[1].name, "Marco Verdi");
}

#[test]
fn test_session_delete_drops_selection_and_record() {
    let store = RosterStore::new(table_file("session_delete"));
    let mut session = RosterSession::open(store).expect("open");

    session.add(&draft("Anna Rossi")).expect("add");
    session.add(&draft("Marco Bianchi")).expect("add");

    let index = session.select_by_id("1").expect("select");
    let removed = session.delete(index).expect("delete");

    assert_eq!(removed.name, "Anna Rossi");
    assert_eq!(session.managers().len(), 1);
    assert_eq!(session.selected(), None);
    assert!(session.managers().iter().all(|m| m.id.as_str() != "1"));
}

#[test]
fn test_session_validation_failure_writes_nothing() {
    let path = table_file("session_invalid");
    let store = RosterStore::new(&path);
    let mut session = RosterSession::open(store).expect("open");

    session.add(&draft("Anna Rossi")).expect("add");
    let before = fs::read_to_string(&path).expect("read table");

    assert!(session.add(&draft("")).is_err());

    let mut inverted = draft("Marco");
    inverted.days[0].start = "17".to_string();
    inverted.days[0].end = "9".to_string();
    assert!(session.update(0, &inverted).is_err());

    let after = fs::read_to_string(&path).expect("read table");
    assert_eq!(before, after);
}

#[test]
fn test_shift_store_replace_all_round_trip() {
    let store = ShiftStore::new(table_file("shift_roundtrip"));
    store.ensure_initialized().expect("init");

    let mut plan = ShiftPlan::default();
    plan.set(
        Day::Mon,
        ShiftType::Morning,
        HourRange::new(Some(8), Some(14)),
    );
    plan.set(
        Day::Fri,
        ShiftType::Evening,
        HourRange::new(Some(18), None),
    );
    store.save_all(&plan).expect("save");

    let loaded = store.load_all().expect("load");
    assert_eq!(loaded, plan);

    // Replace-all: saving a smaller plan leaves no stale rows behind
    plan.clear(Day::Mon, ShiftType::Morning);
    store.save_all(&plan).expect("save");

    let loaded = store.load_all().expect("load");
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded.get(Day::Mon, ShiftType::Morning), None);
}

#[test]
fn test_shift_pair_with_both_bounds_blank_is_absent() {
    let mut plan = ShiftPlan::default();
    plan.set(
        Day::Mon,
        ShiftType::Morning,
        HourRange::new(Some(8), Some(14)),
    );

    // Setting an all-blank window removes the pair instead of keeping nulls
    plan.set(Day::Mon, ShiftType::Morning, HourRange::OFF);
    assert!(plan.is_empty());
}
