use std::collections::{HashMap, HashSet};
use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use eyre::{eyre, Result};

/// Set-backed approval memo. Both operations are idempotent; the store is
/// append-only from this component's perspective.
#[async_trait]
pub trait ApprovalStore: Send + Sync {
    async fn is_member(&self, set_key: &str, element: &str) -> Result<bool>;
    async fn add(&self, set_key: &str, element: &str) -> Result<()>;
}

/// Process-wide in-memory store. Clones share the underlying sets.
#[derive(Clone, Default)]
pub struct InMemoryApprovalStore {
    sets: Arc<RwLock<HashMap<String, HashSet<String>>>>,
}

impl InMemoryApprovalStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ApprovalStore for InMemoryApprovalStore {
    async fn is_member(&self, set_key: &str, element: &str) -> Result<bool> {
        let sets = self.sets.read().map_err(|_| eyre!("STORE_LOCK_POISONED"))?;
        Ok(sets.get(set_key).is_some_and(|s| s.contains(element)))
    }

    async fn add(&self, set_key: &str, element: &str) -> Result<()> {
        let mut sets = self.sets.write().map_err(|_| eyre!("STORE_LOCK_POISONED"))?;
        sets.entry(set_key.to_string()).or_default().insert(element.to_string());
        Ok(())
    }
}
