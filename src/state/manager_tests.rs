//! Tests for the state manager

use super::StateManager;
use tempfile::tempdir;

#[tokio::test]
async fn test_in_memory_bookmark_lifecycle() {
    let manager = StateManager::in_memory();
    assert!(manager.get_bookmark("sales").await.is_none());

    assert!(manager.advance_bookmark("sales", "2024-05-01").await);
    assert_eq!(
        manager.get_bookmark("sales").await.as_deref(),
        Some("2024-05-01")
    );

    assert!(!manager.advance_bookmark("sales", "2024-04-01").await);
    assert_eq!(
        manager.get_bookmark("sales").await.as_deref(),
        Some("2024-05-01")
    );

    // Checkpoint with no path is a no-op
    manager.checkpoint().await.unwrap();
}

#[tokio::test]
async fn test_missing_state_file_starts_empty() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("state.json");

    let manager = StateManager::from_file(&path).unwrap();
    assert!(manager.get_bookmark("shops").await.is_none());
    assert!(!path.exists());
}

#[tokio::test]
async fn test_checkpoint_and_reload() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("state.json");

    let manager = StateManager::from_file(&path).unwrap();
    manager
        .advance_bookmark("sales", "2024-05-01T10:00:00Z")
        .await;
    manager.advance_bookmark("purchase_orders", "2024-03-10").await;
    manager.checkpoint().await.unwrap();
    assert!(path.exists());

    let reloaded = StateManager::from_file(&path).unwrap();
    assert_eq!(
        reloaded.get_bookmark("sales").await.as_deref(),
        Some("2024-05-01T10:00:00Z")
    );
    assert_eq!(
        reloaded.get_bookmark("purchase_orders").await.as_deref(),
        Some("2024-03-10")
    );
}

#[tokio::test]
async fn test_invalid_state_file_errors() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("state.json");
    std::fs::write(&path, "not json at all").unwrap();

    let err = StateManager::from_file(&path).unwrap_err();
    assert!(err.to_string().contains("invalid state file"));
}
