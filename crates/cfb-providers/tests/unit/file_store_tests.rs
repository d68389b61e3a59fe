//! Tests for the backup file stores

use cfb_providers::{BackupFileStore, InMemoryBackupFileStore, LocalBackupFileStore};
use tempfile::TempDir;

#[tokio::test]
async fn test_local_store_creates_directory_lazily() {
    let temp = TempDir::new().expect("temp dir");
    let dir = temp.path().join("nested").join("backups");
    let store = LocalBackupFileStore::new(&dir);

    assert!(store.list().await.expect("list").is_empty());
    assert!(!dir.exists());

    store
        .write_atomic("config_a.backup.json", b"{}")
        .await
        .expect("write");
    assert!(dir.exists());
    assert_eq!(store.read("config_a.backup.json").await.expect("read"), b"{}");
}

#[tokio::test]
async fn test_local_store_lists_sorted_and_hides_temp_files() {
    let temp = TempDir::new().expect("temp dir");
    let store = LocalBackupFileStore::new(temp.path());

    store.write_atomic("b.json", b"2").await.expect("write");
    store.write_atomic("a.json", b"1").await.expect("write");
    std::fs::write(temp.path().join(".c.json.tmp"), b"partial").expect("write temp");
    std::fs::create_dir(temp.path().join("subdir")).expect("mkdir");

    let names = store.list().await.expect("list");
    assert_eq!(names, vec!["a.json".to_string(), "b.json".to_string()]);
}

#[tokio::test]
async fn test_local_store_never_replaces_and_deletes() {
    let temp = TempDir::new().expect("temp dir");
    let store = LocalBackupFileStore::new(temp.path());

    store.write_atomic("x.json", b"old").await.expect("write");
    match store.write_atomic("x.json", b"new").await {
        Err(e) => assert!(e.is_storage_error()),
        Ok(()) => panic!("Expected Io error for an existing backup"),
    }
    assert_eq!(store.read("x.json").await.expect("read"), b"old");
    assert_eq!(store.list().await.expect("list"), vec!["x.json".to_string()]);

    store.delete("x.json").await.expect("delete");
    assert!(store.delete("x.json").await.is_err());
    assert!(store.read("x.json").await.is_err());
}

#[tokio::test]
async fn test_local_store_rejects_paths() {
    let temp = TempDir::new().expect("temp dir");
    let store = LocalBackupFileStore::new(temp.path());

    assert!(store.write_atomic("../escape.json", b"{}").await.is_err());
    assert!(store.write_atomic("dir/file.json", b"{}").await.is_err());
    assert!(store.write_atomic("", b"{}").await.is_err());
    assert!(store.read(".hidden.tmp").await.is_err());
}

#[tokio::test]
async fn test_memory_store_failure_injection() {
    let store = InMemoryBackupFileStore::new();
    store.write_atomic("a", b"1").await.expect("write");
    store.write_atomic("b", b"2").await.expect("write");

    store.fail_delete_of("a");
    assert!(store.delete("a").await.is_err());
    assert!(store.delete("b").await.is_ok());
    assert!(store.contains("a"));

    store.set_fail_list(true);
    assert!(store.list().await.is_err());
    store.set_fail_list(false);
    assert_eq!(store.list().await.expect("list"), vec!["a".to_string()]);

    store.set_fail_writes(true);
    assert!(store.write_atomic("c", b"3").await.is_err());
    assert_eq!(store.len(), 1);
}

#[tokio::test]
async fn test_memory_store_never_replaces_existing_file() {
    let store = InMemoryBackupFileStore::new();
    store.write_atomic("a", b"first").await.expect("write");

    match store.write_atomic("a", b"second").await {
        Err(e) => assert!(e.is_storage_error()),
        Ok(()) => panic!("Expected Io error for an existing backup"),
    }
    assert_eq!(store.get("a").expect("stored"), b"first");
    assert_eq!(store.len(), 1);
}
