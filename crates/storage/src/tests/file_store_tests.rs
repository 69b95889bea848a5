use tempfile::TempDir;

use crate::{FileStore, KeyValueStore};

#[expect(clippy::unwrap_used, reason = "test code")]
fn create_test_file_store() -> (FileStore, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let store = FileStore::open(temp_dir.path().join("nested").join("local-storage.json")).unwrap();
    (store, temp_dir)
}

#[test]
fn test_open_does_not_create_file() {
    let (store, _temp_dir) = create_test_file_store();
    assert!(!store.path().exists());
    assert_eq!(store.get("anything").unwrap(), None);
}

#[test]
fn test_values_survive_reopen() {
    let (store, _temp_dir) = create_test_file_store();
    store.set("coffeeAdminTheme", "light").unwrap();

    let reopened = FileStore::open(store.path()).unwrap();

    assert_eq!(reopened.get("coffeeAdminTheme").unwrap().as_deref(), Some("light"));
}

#[test]
fn test_two_handles_see_each_others_writes() {
    let (first, _temp_dir) = create_test_file_store();
    let second = FileStore::open(first.path()).unwrap();

    first.set("a", "1").unwrap();
    second.set("b", "2").unwrap();

    assert_eq!(first.get("b").unwrap().as_deref(), Some("2"));
    assert_eq!(second.get("a").unwrap().as_deref(), Some("1"));
}

#[test]
fn test_remove_missing_key_is_ok() {
    let (store, _temp_dir) = create_test_file_store();
    store.remove("missing").unwrap();
    store.set("k", "v").unwrap();
    store.remove("k").unwrap();
    assert!(!store.contains("k").unwrap());
}

#[test]
fn test_corrupt_file_rejected_on_open() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("local-storage.json");
    std::fs::write(&path, "[1, 2, 3]").unwrap();

    let err = FileStore::open(&path).unwrap_err();

    assert!(err.is_corruption());
}

#[test]
fn test_empty_file_is_empty_area() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("local-storage.json");
    std::fs::write(&path, "").unwrap();

    let store = FileStore::open(&path).unwrap();

    assert_eq!(store.get("k").unwrap(), None);
}
