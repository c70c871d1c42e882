//! Opaque key-value booking state.
//!
//! The booking flow spans several otherwise-independent pages; the
//! selected offering and passenger/seat choices travel between them
//! through this store. Values are opaque JSON blobs to everything except
//! the pages that write and read them; the search pipeline never looks
//! inside.

use std::collections::HashMap;

use tokio::sync::RwLock;

/// In-memory key-value store for booking state.
///
/// One instance lives in the application state; entries persist for the
/// lifetime of the process only, matching the session-scoped storage of
/// the original pages.
#[derive(Default)]
pub struct BookingStore {
    inner: RwLock<HashMap<String, serde_json::Value>>,
}

impl BookingStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a value by key.
    pub async fn get(&self, key: &str) -> Option<serde_json::Value> {
        self.inner.read().await.get(key).cloned()
    }

    /// Store a value, replacing any previous value for the key.
    pub async fn set(&self, key: impl Into<String>, value: serde_json::Value) {
        self.inner.write().await.insert(key.into(), value);
    }

    /// Remove a value, returning it if present.
    pub async fn remove(&self, key: &str) -> Option<serde_json::Value> {
        self.inner.write().await.remove(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn set_then_get() {
        let store = BookingStore::new();

        store
            .set("selected-offering", json!({"id": "F100", "seat": "12A"}))
            .await;

        let value = store.get("selected-offering").await.unwrap();
        assert_eq!(value["id"], "F100");
        assert_eq!(value["seat"], "12A");
    }

    #[tokio::test]
    async fn absent_key_is_none() {
        let store = BookingStore::new();
        assert!(store.get("nothing-here").await.is_none());
    }

    #[tokio::test]
    async fn set_replaces_previous_value() {
        let store = BookingStore::new();

        store.set("k", json!(1)).await;
        store.set("k", json!(2)).await;

        assert_eq!(store.get("k").await.unwrap(), json!(2));
    }

    #[tokio::test]
    async fn remove_returns_the_value() {
        let store = BookingStore::new();

        store.set("k", json!("v")).await;
        assert_eq!(store.remove("k").await, Some(json!("v")));
        assert!(store.get("k").await.is_none());
    }
}
