use std::io;
use std::path::PathBuf;

use async_trait::async_trait;
use dashmap::DashMap;

/// Key-value persistence behind the entity store. Values are JSON
/// documents, one collection per key.
#[async_trait]
pub trait Storage: Send + Sync {
    async fn load(&self, key: &str) -> io::Result<Option<String>>;
    async fn save(&self, key: &str, value: &str) -> io::Result<()>;
}

/// One JSON file per key under a data directory.
pub struct FileStorage {
    root: PathBuf,
}

impl FileStorage {
    pub async fn open(root: impl Into<PathBuf>) -> io::Result<Self> {
        let root = root.into();
        tokio::fs::create_dir_all(&root).await?;
        Ok(Self { root })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }
}

#[async_trait]
impl Storage for FileStorage {
    async fn load(&self, key: &str) -> io::Result<Option<String>> {
        match tokio::fs::read_to_string(self.path_for(key)).await {
            Ok(data) => Ok(Some(data)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }

    async fn save(&self, key: &str, value: &str) -> io::Result<()> {
        // Write-then-rename so a crash mid-write cannot truncate a collection.
        let tmp = self.root.join(format!("{key}.json.tmp"));
        tokio::fs::write(&tmp, value).await?;
        tokio::fs::rename(&tmp, self.path_for(key)).await
    }
}

/// In-memory storage used by tests.
#[derive(Default)]
pub struct MemoryStorage {
    entries: DashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Storage for MemoryStorage {
    async fn load(&self, key: &str) -> io::Result<Option<String>> {
        Ok(self.entries.get(key).map(|v| v.clone()))
    }

    async fn save(&self, key: &str, value: &str) -> io::Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
