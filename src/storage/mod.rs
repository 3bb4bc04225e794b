// ============================================================================
// STORAGE MODULE - Key-value persistence substrate
// ============================================================================

pub mod memory;
pub mod web;

pub use memory::MemoryStorage;
pub use web::LocalStorage;

/// Common trait over the browser's key-value storage.
///
/// Stores and the session gate only ever talk to this trait, so the whole
/// core runs against [`MemoryStorage`] in native tests and against
/// [`LocalStorage`] in the browser.
pub trait StorageBackend {
    /// Read the value under `key`. Missing keys and read failures both
    /// come back as `None`.
    fn get_item(&self, key: &str) -> Option<String>;

    /// Write `value` under `key`, replacing any previous value.
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove `key`. Removing an absent key is not an error.
    fn remove_item(&self, key: &str) -> Result<(), StorageError>;
}

/// Storage failure.
#[derive(Debug, Clone, PartialEq)]
pub enum StorageError {
    /// No window object or localStorage blocked by the browser.
    Unavailable,
    /// The backing store rejected a write (quota, privacy mode).
    WriteFailed(String),
}

impl std::fmt::Display for StorageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageError::Unavailable => write!(f, "localStorage is not available"),
            StorageError::WriteFailed(key) => write!(f, "could not write key '{}'", key),
        }
    }
}

impl std::error::Error for StorageError {}
