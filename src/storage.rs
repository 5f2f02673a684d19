use async_trait::async_trait;
use std::path::PathBuf;
use std::sync::Arc;
use std::sync::Mutex;

// 1. SessionStorage Contract
/// SessionStorage
///
/// Defines the abstract contract for the session persistence layer: a single
/// slot holding one serialized user record between runs. This trait allows us
/// to swap the concrete implementation — the real file-backed store
/// (FileSessionStorage), the disabled no-op store (NullSessionStorage) for
/// environments without a writable location, or the in-memory Mock
/// (MockSessionStorage) during testing — without affecting the session
/// service.
///
/// All operations are best-effort from the caller's perspective: the session
/// service logs failures and carries on, it never surfaces them to the user.
#[async_trait]
pub trait SessionStorage: Send + Sync {
    /// Reads the persisted record, if any. Absence and read failure are the
    /// same outcome for the caller.
    async fn load(&self) -> Option<String>;

    /// Writes the record, replacing any previous one.
    async fn save(&self, payload: &str) -> Result<(), String>;

    /// Deletes the record. Clearing an empty slot is not an error.
    async fn clear(&self) -> Result<(), String>;
}

/// StorageState
///
/// The concrete type used to share storage access across the application state.
pub type StorageState = Arc<dyn SessionStorage>;

// 2. The Real Implementation (single file on disk)
/// FileSessionStorage
///
/// Persists the session record to one well-known file, the server-side
/// analog of a browser's single localStorage key. Parent directories are
/// created on first save.
#[derive(Clone)]
pub struct FileSessionStorage {
    path: PathBuf,
}

impl FileSessionStorage {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

#[async_trait]
impl SessionStorage for FileSessionStorage {
    async fn load(&self) -> Option<String> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(payload) => Some(payload),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => None,
            Err(e) => {
                tracing::warn!("session file read failed: {e}");
                None
            }
        }
    }

    async fn save(&self, payload: &str) -> Result<(), String> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| e.to_string())?;
        }
        tokio::fs::write(&self.path, payload)
            .await
            .map_err(|e| e.to_string())
    }

    async fn clear(&self) -> Result<(), String> {
        match tokio::fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.to_string()),
        }
    }
}

// 3. The Disabled Implementation
/// NullSessionStorage
///
/// The storage used when no persistence location is configured. Loads
/// nothing, accepts every write by discarding it. This is the "environment
/// without storage" mode: sessions simply do not survive a restart.
#[derive(Clone)]
pub struct NullSessionStorage;

#[async_trait]
impl SessionStorage for NullSessionStorage {
    async fn load(&self) -> Option<String> {
        None
    }

    async fn save(&self, _payload: &str) -> Result<(), String> {
        Ok(())
    }

    async fn clear(&self) -> Result<(), String> {
        Ok(())
    }
}

// 4. The Mock Implementation (For Unit Tests)
/// MockSessionStorage
///
/// An in-memory slot used in tests, with a switch to simulate a broken
/// backend so the best-effort degradation paths can be exercised.
pub struct MockSessionStorage {
    slot: Mutex<Option<String>>,
    /// When true, save/clear return a simulated failure.
    pub should_fail: bool,
}

impl MockSessionStorage {
    pub fn new() -> Self {
        Self {
            slot: Mutex::new(None),
            should_fail: false,
        }
    }

    pub fn new_failing() -> Self {
        Self {
            slot: Mutex::new(None),
            should_fail: true,
        }
    }

    /// Pre-loads the slot, simulating a record persisted by a previous run.
    pub fn preloaded(payload: &str) -> Self {
        Self {
            slot: Mutex::new(Some(payload.to_string())),
            should_fail: false,
        }
    }

    /// Direct peek for assertions.
    pub fn contents(&self) -> Option<String> {
        self.slot.lock().unwrap().clone()
    }
}

impl Default for MockSessionStorage {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SessionStorage for MockSessionStorage {
    async fn load(&self) -> Option<String> {
        if self.should_fail {
            return None;
        }
        self.slot.lock().unwrap().clone()
    }

    async fn save(&self, payload: &str) -> Result<(), String> {
        if self.should_fail {
            return Err("Mock Storage Error: Simulation requested".to_string());
        }
        *self.slot.lock().unwrap() = Some(payload.to_string());
        Ok(())
    }

    async fn clear(&self) -> Result<(), String> {
        if self.should_fail {
            return Err("Mock Storage Error: Simulation requested".to_string());
        }
        *self.slot.lock().unwrap() = None;
        Ok(())
    }
}
