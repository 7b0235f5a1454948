//! Profile store interface and the in-memory backend.
//!
//! The store is the injected registry behind the agent's client-profile
//! mapping. Backends must be shareable across handles; a database-backed
//! implementation can be swapped in without touching agent logic.

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, RwLock};

use anyhow::anyhow;

use crate::profile::PerspectiveProfile;

/// Abstract registry of client profiles.
pub trait ProfileStore: Send + Sync + fmt::Debug {
    /// Insert or replace the profile stored under its client id.
    fn put(&self, profile: PerspectiveProfile) -> Result<(), anyhow::Error>;

    /// Fetch a copy of the profile stored for `client_id`, if any.
    fn get(&self, client_id: &str) -> Result<Option<PerspectiveProfile>, anyhow::Error>;

    /// Check whether a profile is stored for `client_id`.
    fn contains(&self, client_id: &str) -> Result<bool, anyhow::Error> {
        Ok(self.get(client_id)?.is_some())
    }
}

/// Process-local profile store backed by a shared hash map.
///
/// Clones share the same underlying map.
#[derive(Debug, Clone, Default)]
pub struct InMemoryProfileStore {
    profiles: Arc<RwLock<HashMap<String, PerspectiveProfile>>>,
}

impl InMemoryProfileStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored profiles.
    pub fn len(&self) -> usize {
        self.profiles.read().map(|map| map.len()).unwrap_or(0)
    }

    /// Check whether the store is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ProfileStore for InMemoryProfileStore {
    fn put(&self, profile: PerspectiveProfile) -> Result<(), anyhow::Error> {
        let mut profiles = self
            .profiles
            .write()
            .map_err(|_| anyhow!("Profile store lock poisoned"))?;
        profiles.insert(profile.client_id.clone(), profile);
        Ok(())
    }

    fn get(&self, client_id: &str) -> Result<Option<PerspectiveProfile>, anyhow::Error> {
        let profiles = self
            .profiles
            .read()
            .map_err(|_| anyhow!("Profile store lock poisoned"))?;
        Ok(profiles.get(client_id).cloned())
    }
}
