use crate::SessionFile;

use doorman_core::UserRecord;

use chrono::Utc;
use googletest::prelude::*;
use tempfile::TempDir;

fn sample_record() -> UserRecord {
    UserRecord {
        id: 1,
        username: "alice".to_string(),
        email: "alice@example.com".to_string(),
        password: "secret".to_string(),
        full_name: "Alice Adams".to_string(),
        phone: "Not provided".to_string(),
        created_at: Utc::now(),
    }
}

#[test]
fn given_written_session_when_read_then_record_round_trips() {
    let temp = TempDir::new().unwrap();
    let file = SessionFile::new(temp.path());
    let record = sample_record();

    file.write(&record).unwrap();
    let loaded = file.read().unwrap();

    assert_that!(loaded, some(eq(&record)));
    assert!(file.flag_path().exists());
}

#[test]
fn given_no_session_when_read_then_returns_none() {
    let temp = TempDir::new().unwrap();
    let file = SessionFile::new(temp.path());

    let loaded = file.read().unwrap();

    assert_that!(loaded, none());
}

#[test]
fn given_corrupt_session_when_read_then_logged_out_and_keys_erased() {
    let temp = TempDir::new().unwrap();
    let file = SessionFile::new(temp.path());
    std::fs::write(file.record_path(), "{ not json").unwrap();
    std::fs::write(file.flag_path(), "true").unwrap();

    let loaded = file.read().unwrap();

    assert_that!(loaded, none());
    assert!(!file.record_path().exists());
    assert!(!file.flag_path().exists());
}

#[test]
fn given_flag_not_true_when_read_then_returns_none() {
    let temp = TempDir::new().unwrap();
    let file = SessionFile::new(temp.path());
    let record = sample_record();
    file.write(&record).unwrap();
    std::fs::write(file.flag_path(), "false").unwrap();

    let loaded = file.read().unwrap();

    assert_that!(loaded, none());
}

#[test]
fn given_written_session_when_removed_then_both_keys_gone() {
    let temp = TempDir::new().unwrap();
    let file = SessionFile::new(temp.path());
    file.write(&sample_record()).unwrap();

    file.remove().unwrap();

    assert!(!file.record_path().exists());
    assert!(!file.flag_path().exists());
    assert_that!(file.read().unwrap(), none());
}

#[test]
fn given_empty_dir_when_removing_then_succeeds_silently() {
    let temp = TempDir::new().unwrap();
    let file = SessionFile::new(temp.path());

    file.remove().unwrap();
}

#[test]
fn given_missing_directory_when_writing_then_directory_created() {
    let temp = TempDir::new().unwrap();
    let file = SessionFile::new(temp.path().join("nested").join("dir"));

    file.write(&sample_record()).unwrap();

    assert_that!(file.read().unwrap(), some(anything()));
}
