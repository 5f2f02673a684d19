use hobbyclass_portal::storage::{
    FileSessionStorage, MockSessionStorage, NullSessionStorage, SessionStorage,
};

#[cfg(test)]
mod file_tests {
    use super::*;

    #[tokio::test]
    async fn test_file_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileSessionStorage::new(dir.path().join("currentUser.json"));

        assert!(storage.load().await.is_none());
        storage.save(r#"{"id":1}"#).await.unwrap();
        assert_eq!(storage.load().await.as_deref(), Some(r#"{"id":1}"#));

        storage.clear().await.unwrap();
        assert!(storage.load().await.is_none());
    }

    #[tokio::test]
    async fn test_file_save_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("state/session/currentUser.json");
        let storage = FileSessionStorage::new(nested.clone());

        storage.save("payload").await.unwrap();
        assert!(nested.exists());
    }

    #[tokio::test]
    async fn test_file_save_replaces_previous_record() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileSessionStorage::new(dir.path().join("currentUser.json"));

        storage.save("first").await.unwrap();
        storage.save("second").await.unwrap();
        assert_eq!(storage.load().await.as_deref(), Some("second"));
    }

    #[tokio::test]
    async fn test_file_clear_on_empty_slot_is_ok() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileSessionStorage::new(dir.path().join("missing.json"));
        assert!(storage.clear().await.is_ok());
    }
}

#[cfg(test)]
mod null_tests {
    use super::*;

    #[tokio::test]
    async fn test_null_storage_discards_everything() {
        let storage = NullSessionStorage;
        assert!(storage.save("anything").await.is_ok());
        assert!(storage.load().await.is_none());
        assert!(storage.clear().await.is_ok());
    }
}

#[cfg(test)]
mod mock_tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_roundtrip() {
        let storage = MockSessionStorage::new();
        storage.save("record").await.unwrap();
        assert_eq!(storage.load().await.as_deref(), Some("record"));
        assert_eq!(storage.contents().as_deref(), Some("record"));

        storage.clear().await.unwrap();
        assert!(storage.load().await.is_none());
    }

    #[tokio::test]
    async fn test_mock_failure_mode() {
        let storage = MockSessionStorage::new_failing();
        assert!(storage.save("record").await.is_err());
        assert!(storage.clear().await.is_err());
        assert!(storage.load().await.is_none());
    }

    #[tokio::test]
    async fn test_mock_preloaded_slot() {
        let storage = MockSessionStorage::preloaded("persisted");
        assert_eq!(storage.load().await.as_deref(), Some("persisted"));
    }
}
