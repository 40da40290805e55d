//! Tests for the snapshot store
//!
//! These tests verify:
//! - Save/load round trip and the on-disk line format
//! - Missing and empty files load as empty mappings
//! - Atomic replacement (no temp file left behind, old state preserved)
//! - Tolerance for trailing garbage

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;
use walkv::snapshot::SnapshotStore;

// =============================================================================
// Helper Functions
// =============================================================================

fn setup_temp_snapshot() -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let snapshot_path = temp_dir.path().join("snapshot.db");
    (temp_dir, snapshot_path)
}

fn mapping(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

// =============================================================================
// Load Tests
// =============================================================================

#[test]
fn test_load_missing_file_yields_empty_mapping() {
    let (_temp, snapshot_path) = setup_temp_snapshot();

    let store = SnapshotStore::new(&snapshot_path);
    let map = store.load().unwrap();
    assert!(map.is_empty());
}

#[test]
fn test_load_empty_file_yields_empty_mapping() {
    let (_temp, snapshot_path) = setup_temp_snapshot();
    fs::write(&snapshot_path, "").unwrap();

    let store = SnapshotStore::new(&snapshot_path);
    assert!(store.load().unwrap().is_empty());
}

#[test]
fn test_load_parses_one_entry_per_line() {
    let (_temp, snapshot_path) = setup_temp_snapshot();
    fs::write(&snapshot_path, "name Alice\nage 30\n").unwrap();

    let store = SnapshotStore::new(&snapshot_path);
    let map = store.load().unwrap();
    assert_eq!(map, mapping(&[("name", "Alice"), ("age", "30")]));
}

#[test]
fn test_load_stops_at_malformed_line() {
    let (_temp, snapshot_path) = setup_temp_snapshot();
    fs::write(&snapshot_path, "a 1\nonly-one-token\nb 2\n").unwrap();

    let store = SnapshotStore::new(&snapshot_path);
    let map = store.load().unwrap();
    assert_eq!(map, mapping(&[("a", "1")]));
}

// =============================================================================
// Save Tests
// =============================================================================

#[test]
fn test_save_load_round_trip() {
    let (_temp, snapshot_path) = setup_temp_snapshot();

    let store = SnapshotStore::new(&snapshot_path);
    let map = mapping(&[("name", "Alice"), ("age", "30"), ("city", "Oslo")]);
    store.save(&map).unwrap();

    assert_eq!(store.load().unwrap(), map);
}

#[test]
fn test_save_replaces_previous_snapshot() {
    let (_temp, snapshot_path) = setup_temp_snapshot();

    let store = SnapshotStore::new(&snapshot_path);
    store.save(&mapping(&[("old", "state"), ("to-be", "dropped")])).unwrap();
    store.save(&mapping(&[("new", "state")])).unwrap();

    // Full rewrite: nothing from the previous snapshot survives.
    assert_eq!(store.load().unwrap(), mapping(&[("new", "state")]));
}

#[test]
fn test_save_leaves_no_temp_file_behind() {
    let (temp, snapshot_path) = setup_temp_snapshot();

    let store = SnapshotStore::new(&snapshot_path);
    store.save(&mapping(&[("k", "v")])).unwrap();

    let names: Vec<String> = fs::read_dir(temp.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, vec!["snapshot.db".to_string()]);
}

#[test]
fn test_save_empty_mapping_writes_empty_file() {
    let (_temp, snapshot_path) = setup_temp_snapshot();

    let store = SnapshotStore::new(&snapshot_path);
    store.save(&HashMap::new()).unwrap();

    assert_eq!(fs::read_to_string(&snapshot_path).unwrap(), "");
    assert!(store.load().unwrap().is_empty());
}
