//! Key/value storage trait definition.
//!
//! The `KeyValueStore` trait defines the interface every local storage
//! backend implements. Stores above this layer only ever read and write
//! JSON strings under well-known keys, so backends stay interchangeable
//! (SQLite file, in-memory map).

use crate::error::Result;

/// A single write in an atomic batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageOp {
    /// Insert or overwrite `key` with `value`.
    Set { key: String, value: String },
    /// Remove `key` if present.
    Remove { key: String },
}

impl StorageOp {
    pub fn set(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self::Set {
            key: key.into(),
            value: value.into(),
        }
    }

    pub fn remove(key: impl Into<String>) -> Self {
        Self::Remove { key: key.into() }
    }
}

/// Local storage interface.
///
/// All implementations must ensure:
/// - Reads after a successful write observe that write
/// - `apply` is all-or-nothing: either every op lands or none does
/// - Keys are compared byte-for-byte (no normalization)
pub trait KeyValueStore: Send + Sync {
    /// Get the raw value stored under `key`.
    ///
    /// Returns `Ok(None)` if the key has never been written or was removed.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Insert or overwrite a value.
    ///
    /// # Errors
    ///
    /// Returns `RibbonError::Storage` if the backend rejects the write
    /// (unavailable file, quota, poisoned lock).
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Remove a key. Removing a missing key is not an error.
    fn remove(&self, key: &str) -> Result<()>;

    /// List every key starting with `prefix`, in ascending order.
    fn keys_with_prefix(&self, prefix: &str) -> Result<Vec<String>>;

    /// Apply a batch of writes atomically.
    fn apply(&self, ops: &[StorageOp]) -> Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trait_is_object_safe() {
        fn _accepts_dyn(_store: &dyn KeyValueStore) {}
    }

    #[test]
    fn test_op_constructors() {
        assert_eq!(
            StorageOp::set("setup", "{}"),
            StorageOp::Set {
                key: "setup".to_string(),
                value: "{}".to_string()
            }
        );
        assert_eq!(
            StorageOp::remove("setup"),
            StorageOp::Remove {
                key: "setup".to_string()
            }
        );
    }
}
