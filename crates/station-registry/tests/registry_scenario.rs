//! End-to-end scenario: a station publishes itself and a reader finds it.

use station_registry::{enumerate_run_directory, StationRecord};
use tempfile::TempDir;

#[test]
fn test_publish_then_discover() {
    let run_dir = TempDir::new().unwrap();

    let record = StationRecord::new(
        "station-A",
        "script1.py",
        "localhost",
        8080,
        std::process::id(),
    );
    let path = record.save_to_file(run_dir.path()).unwrap();
    assert_eq!(path, run_dir.path().join("station-A"));

    let stations = enumerate_run_directory(run_dir.path()).unwrap();
    assert_eq!(stations.len(), 1);
    assert_eq!(stations[0], record);
    assert!(stations[0].is_alive());
}

#[test]
fn test_refresh_replaces_previous_record() {
    let run_dir = TempDir::new().unwrap();

    let first = StationRecord::new("station-A", "script1.py", "localhost", 8080, 100);
    let refreshed = StationRecord::new("station-A", "script2.py", "localhost", 9090, 200);
    first.save_to_file(run_dir.path()).unwrap();
    refreshed.save_to_file(run_dir.path()).unwrap();

    let stations = enumerate_run_directory(run_dir.path()).unwrap();
    assert_eq!(stations.len(), 1);
    assert_eq!(stations[0], refreshed);
}

#[test]
fn test_reader_sees_dead_station_record_but_not_alive() {
    let run_dir = TempDir::new().unwrap();

    // A record whose process is long gone stays on disk; only the liveness
    // probe tells the reader not to use it.
    let stale = StationRecord::new("station-B", "script1.py", "localhost", 8081, 4_000_000_000);
    stale.save_to_file(run_dir.path()).unwrap();

    let stations = enumerate_run_directory(run_dir.path()).unwrap();
    assert_eq!(stations.len(), 1);
    assert!(!stations[0].is_alive());
}
