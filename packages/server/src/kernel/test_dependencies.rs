// TestDependencies - in-memory fakes for testing
//
// Provides a mirror store that records writes in a flat path map and can be
// switched into a failing mode to exercise the best-effort contract.

use anyhow::Result;
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use super::BaseMirrorStore;

/// In-memory BaseMirrorStore for tests.
///
/// Entries live in a flat `path -> value` map, matching the idempotent
/// set-by-path semantics of the real store. `fail_next`/`fail_all` force
/// errors so tests can assert that primary writes survive mirror outages.
#[derive(Clone, Default)]
pub struct InMemoryMirrorStore {
    entries: Arc<Mutex<BTreeMap<String, serde_json::Value>>>,
    failing: Arc<AtomicBool>,
}

impl InMemoryMirrorStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent operation fail until `heal` is called.
    pub fn fail_all(&self) {
        self.failing.store(true, Ordering::SeqCst);
    }

    pub fn heal(&self) {
        self.failing.store(false, Ordering::SeqCst);
    }

    pub fn get(&self, path: &str) -> Option<serde_json::Value> {
        self.entries.lock().unwrap().get(path).cloned()
    }

    /// Number of entries under a path prefix.
    pub fn count_under(&self, prefix: &str) -> usize {
        self.entries
            .lock()
            .unwrap()
            .keys()
            .filter(|k| k.starts_with(prefix))
            .count()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn check_available(&self) -> Result<()> {
        if self.failing.load(Ordering::SeqCst) {
            anyhow::bail!("mirror store unavailable (test)");
        }
        Ok(())
    }
}

#[async_trait]
impl BaseMirrorStore for InMemoryMirrorStore {
    async fn set(&self, path: &str, value: serde_json::Value) -> Result<()> {
        self.check_available()?;
        self.entries
            .lock()
            .unwrap()
            .insert(path.to_string(), value);
        Ok(())
    }

    async fn update(&self, path: &str, value: serde_json::Value) -> Result<()> {
        self.check_available()?;
        let mut entries = self.entries.lock().unwrap();
        let entry = entries
            .entry(path.to_string())
            .or_insert_with(|| serde_json::json!({}));
        if let (Some(target), Some(patch)) = (entry.as_object_mut(), value.as_object()) {
            for (k, v) in patch {
                target.insert(k.clone(), v.clone());
            }
        } else {
            *entry = value;
        }
        Ok(())
    }

    async fn delete(&self, path: &str) -> Result<()> {
        self.check_available()?;
        self.entries.lock().unwrap().remove(path);
        Ok(())
    }
}
