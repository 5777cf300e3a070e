// Trait definitions for dependency injection
//
// These are INFRASTRUCTURE traits only - no business logic. The message
// replicator decides what to mirror and where; implementations only move
// JSON values at hierarchical paths.
//
// Naming convention: Base* for trait names (e.g., BaseMirrorStore)

use anyhow::Result;
use async_trait::async_trait;

// =============================================================================
// Mirror Store Trait (Infrastructure - path-addressable real-time store)
// =============================================================================

/// A path-addressable real-time store (Firebase RTDB shaped).
///
/// Paths are `/`-separated hierarchical keys. The store has no transactions;
/// callers must treat every operation as independently best-effort.
#[async_trait]
pub trait BaseMirrorStore: Send + Sync {
    /// Set the value at `path`, replacing whatever is there.
    ///
    /// Idempotent by construction: writing the same path twice leaves one
    /// logical entry.
    async fn set(&self, path: &str, value: serde_json::Value) -> Result<()>;

    /// Merge `value` into the object at `path` (shallow update).
    async fn update(&self, path: &str, value: serde_json::Value) -> Result<()>;

    /// Remove the value at `path`. Removing a missing path is not an error.
    async fn delete(&self, path: &str) -> Result<()>;
}
