//! File-backed behaviour: inventory snapshots and the grading input.

use chrono::{Duration, TimeZone, Utc};
use recordbook::{
    read_students, InventoryItem, InventoryLogger, LoadOutcome, MalformedReason, RecordError,
};
use std::collections::HashMap;
use tempfile::tempdir;

#[test]
fn snapshot_round_trip_reproduces_every_field() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("inventory.json");
    let base = Utc.with_ymd_and_hms(2025, 6, 1, 8, 15, 30).unwrap();

    let originals = vec![
        InventoryItem::new(1, "Laptop", 5, base),
        InventoryItem::new(2, "Rice Bag", 30, base - Duration::days(2)),
        InventoryItem::new(3, "Desk Chair", 0, Utc::now()),
    ];

    let mut logger = InventoryLogger::new(&path);
    for item in &originals {
        logger.add(item.clone()).unwrap();
    }
    logger.save_to_file().unwrap();

    let mut reloaded = InventoryLogger::<InventoryItem>::new(&path);
    assert_eq!(reloaded.load_from_file().unwrap(), LoadOutcome::Loaded(3));

    let by_id: HashMap<u32, InventoryItem> =
        reloaded.get_all().into_iter().map(|i| (i.id, i)).collect();
    assert_eq!(by_id.len(), originals.len());
    for original in &originals {
        assert_eq!(by_id.get(&original.id), Some(original));
    }
}

#[test]
fn snapshot_of_empty_logger_loads_empty() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("inventory.json");

    InventoryLogger::<InventoryItem>::new(&path).save_to_file().unwrap();

    let mut reloaded = InventoryLogger::<InventoryItem>::new(&path);
    assert_eq!(reloaded.load_from_file().unwrap(), LoadOutcome::Loaded(0));
    assert!(reloaded.get_all().is_empty());
}

#[test]
fn save_into_missing_directory_is_io_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("no-such-dir").join("inventory.json");

    let err = InventoryLogger::<InventoryItem>::new(&path)
        .save_to_file()
        .unwrap_err();
    assert!(matches!(err, RecordError::Io { .. }));
}

#[test]
fn short_line_aborts_read_with_line_number() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("students.txt");
    std::fs::write(
        &path,
        "1,Ama Mensah,85\n2,Kwame Boateng,72\n3,Akua Asante,64\n4,Yaw Owusu\n5,Esi Badu,91\n",
    )
    .unwrap();

    let err = read_students(&path).unwrap_err();
    match err {
        RecordError::MalformedRecord { line, reason } => {
            assert_eq!(line, 4);
            assert_eq!(reason, MalformedReason::MissingFields { found: 2 });
        }
        other => panic!("expected MalformedRecord, got {other:?}"),
    }
}

#[test]
fn windows_line_endings_and_blank_lines_keep_physical_numbering() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("students.txt");

    std::fs::write(&path, "1,Ama Mensah,85\r\n2,Kwame Boateng,72\r\n3,Akua Asante\r\n").unwrap();
    assert!(matches!(
        read_students(&path),
        Err(RecordError::MalformedRecord { line: 3, .. })
    ));

    std::fs::write(&path, "1,Ama Mensah,85\n2,Kwame Boateng,72\n\n4,Yaw Owusu\n").unwrap();
    match read_students(&path).unwrap_err() {
        RecordError::MalformedRecord { line, reason } => {
            assert_eq!(line, 3);
            assert_eq!(reason, MalformedReason::MissingFields { found: 1 });
        }
        other => panic!("expected MalformedRecord, got {other:?}"),
    }

    std::fs::write(&path, "1,Ama Mensah,85\r\n2,Kwame Boateng,72\r\n").unwrap();
    assert_eq!(read_students(&path).unwrap().len(), 2);
}

#[test]
fn missing_students_file_is_io_not_found() {
    let dir = tempdir().unwrap();
    let err = read_students(&dir.path().join("students.txt")).unwrap_err();
    assert!(err.is_missing_file());
}
