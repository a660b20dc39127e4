pub mod organizations;
pub mod prompts;
pub mod users;

use std::io;
use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;
use tokio::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::models::{Organization, Prompt, User};
use crate::storage::Storage;

pub const USERS_KEY: &str = "users";
pub const ORGANIZATIONS_KEY: &str = "organizations";
pub const PROMPTS_KEY: &str = "prompts";

/// The three entity collections, guarded as a unit. Query helpers live in
/// the per-entity modules; the auth and prompt services are the only
/// writers.
#[derive(Default)]
pub struct Collections {
    pub users: Vec<User>,
    pub organizations: Vec<Organization>,
    pub prompts: Vec<Prompt>,
}

/// Owns all entity state. Collections are loaded once at startup; every
/// mutation persists the touched collection through the storage adapter
/// while still holding the write guard (write-through, no batching), so
/// read-modify-write sequences cannot interleave.
pub struct EntityStore {
    storage: Arc<dyn Storage>,
    inner: RwLock<Collections>,
}

impl EntityStore {
    pub async fn open(storage: Arc<dyn Storage>) -> io::Result<Self> {
        let users = load_collection(&*storage, USERS_KEY).await?;
        let organizations = load_collection(&*storage, ORGANIZATIONS_KEY).await?;
        let prompts = load_collection(&*storage, PROMPTS_KEY).await?;

        Ok(Self {
            storage,
            inner: RwLock::new(Collections {
                users,
                organizations,
                prompts,
            }),
        })
    }

    pub async fn read(&self) -> RwLockReadGuard<'_, Collections> {
        self.inner.read().await
    }

    pub async fn write(&self) -> RwLockWriteGuard<'_, Collections> {
        self.inner.write().await
    }

    pub async fn persist_users(&self, cols: &Collections) -> io::Result<()> {
        self.persist(USERS_KEY, &cols.users).await
    }

    pub async fn persist_organizations(&self, cols: &Collections) -> io::Result<()> {
        self.persist(ORGANIZATIONS_KEY, &cols.organizations).await
    }

    pub async fn persist_prompts(&self, cols: &Collections) -> io::Result<()> {
        self.persist(PROMPTS_KEY, &cols.prompts).await
    }

    async fn persist<T: Serialize>(&self, key: &str, items: &[T]) -> io::Result<()> {
        let raw = serde_json::to_string_pretty(items)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        self.storage.save(key, &raw).await
    }
}

/// A missing or corrupt collection loads as empty; corruption is logged
/// rather than silently swallowed.
async fn load_collection<T: DeserializeOwned>(
    storage: &dyn Storage,
    key: &str,
) -> io::Result<Vec<T>> {
    let Some(raw) = storage.load(key).await? else {
        return Ok(Vec::new());
    };

    match serde_json::from_str(&raw) {
        Ok(items) => Ok(items),
        Err(e) => {
            tracing::warn!("Discarding corrupt '{key}' collection: {e}");
            Ok(Vec::new())
        }
    }
}
