use std::collections::HashMap;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use sha2::{Digest, Sha256};
use tokio::fs;
use tokio::sync::Mutex;
use tracing::{debug, error, warn};

use crate::error::StoreError;
use crate::state::CatalogEntry;

pub const FAVORITES_KEY: &str = "@favorites";

/// Byte store addressed by string keys.
#[async_trait]
pub trait KvStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError>;
    async fn set(&self, key: &str, value: &[u8]) -> Result<(), StoreError>;
}

/// One file per key under `root`, named by the SHA-256 of the key.
#[derive(Clone, Debug)]
pub struct FileKvStore {
    root: PathBuf,
}

impl FileKvStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn path_for(&self, key: &str) -> PathBuf {
        let mut hasher = Sha256::new();
        hasher.update(key.as_bytes());
        self.root.join(hex::encode(hasher.finalize()))
    }
}

#[async_trait]
impl KvStore for FileKvStore {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        match fs::read(self.path_for(key)).await {
            Ok(bytes) => Ok(Some(bytes)),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    async fn set(&self, key: &str, value: &[u8]) -> Result<(), StoreError> {
        let path = self.path_for(key);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await?;
        }
        let tmp = temp_path(&path);
        fs::write(&tmp, value).await?;
        fs::rename(&tmp, &path).await?;
        Ok(())
    }
}

fn temp_path(path: &Path) -> PathBuf {
    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");
    PathBuf::from(tmp)
}

#[derive(Debug, Default)]
pub struct MemoryKvStore {
    values: Mutex<HashMap<String, Vec<u8>>>,
}

impl MemoryKvStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn raw(&self, key: &str) -> Option<Vec<u8>> {
        self.values.lock().await.get(key).cloned()
    }
}

#[async_trait]
impl KvStore for MemoryKvStore {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        Ok(self.values.lock().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &[u8]) -> Result<(), StoreError> {
        self.values
            .lock()
            .await
            .insert(key.to_string(), value.to_vec());
        Ok(())
    }
}

/// Favorited entries in insertion order, unique by id.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FavoriteSet {
    entries: Vec<CatalogEntry>,
}

impl FavoriteSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, entry: &CatalogEntry) -> bool {
        self.entries.iter().any(|fav| fav.id == entry.id)
    }

    pub fn toggled(&self, entry: &CatalogEntry) -> Self {
        if self.contains(entry) {
            self.without(entry)
        } else {
            let mut entries = self.entries.clone();
            entries.push(entry.clone());
            Self { entries }
        }
    }

    pub fn without(&self, entry: &CatalogEntry) -> Self {
        Self {
            entries: self
                .entries
                .iter()
                .filter(|fav| fav.id != entry.id)
                .cloned()
                .collect(),
        }
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, StoreError> {
        Ok(serde_json::to_vec(&self.entries)?)
    }

    /// Decodes a stored blob, dropping repeated ids.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, StoreError> {
        let decoded: Vec<CatalogEntry> = serde_json::from_slice(bytes)?;
        let mut set = Self::new();
        for entry in decoded {
            if !set.contains(&entry) {
                set.entries.push(entry);
            }
        }
        Ok(set)
    }
}

/// Status line shown after a favorites mutation settles.
pub fn change_notice(entry: &CatalogEntry, set: &FavoriteSet) -> String {
    if set.contains(entry) {
        format!("{} added to favorites", entry.name)
    } else {
        format!("{} removed from favorites", entry.name)
    }
}

/// Persisted favorites plus the in-memory mirror for the session.
///
/// Mutations hold the mirror lock across the write, so they apply one at a
/// time and the mirror only changes after the blob is on disk. A mutation
/// that arrives before `load` reads the blob first.
pub struct FavoritesStore<S> {
    store: S,
    mirror: Mutex<Mirror>,
}

#[derive(Default)]
struct Mirror {
    set: FavoriteSet,
    loaded: bool,
}

impl<S: KvStore> FavoritesStore<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            mirror: Mutex::new(Mirror::default()),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Reads the persisted set; anything unreadable counts as empty.
    pub async fn load(&self) -> FavoriteSet {
        let mut mirror = self.mirror.lock().await;
        mirror.set = self.read_persisted().await;
        mirror.loaded = true;
        mirror.set.clone()
    }

    pub async fn entries(&self) -> FavoriteSet {
        self.mirror.lock().await.set.clone()
    }

    pub async fn contains(&self, entry: &CatalogEntry) -> bool {
        self.mirror.lock().await.set.contains(entry)
    }

    /// Adds or removes `entry`, returning the new set once it is persisted.
    pub async fn toggle(&self, entry: &CatalogEntry) -> Result<FavoriteSet, StoreError> {
        let mut mirror = self.mirror.lock().await;
        self.ensure_loaded(&mut mirror).await;
        let next = mirror.set.toggled(entry);
        self.write(&next).await?;
        mirror.set = next.clone();
        Ok(next)
    }

    /// Removes `entry` by id; absent entries leave the store untouched.
    pub async fn remove(&self, entry: &CatalogEntry) -> Result<FavoriteSet, StoreError> {
        let mut mirror = self.mirror.lock().await;
        self.ensure_loaded(&mut mirror).await;
        if !mirror.set.contains(entry) {
            return Ok(mirror.set.clone());
        }
        let next = mirror.set.without(entry);
        self.write(&next).await?;
        mirror.set = next.clone();
        Ok(next)
    }

    async fn ensure_loaded(&self, mirror: &mut Mirror) {
        if !mirror.loaded {
            mirror.set = self.read_persisted().await;
            mirror.loaded = true;
        }
    }

    async fn read_persisted(&self) -> FavoriteSet {
        let set = match self.store.get(FAVORITES_KEY).await {
            Ok(Some(bytes)) => FavoriteSet::from_bytes(&bytes).unwrap_or_else(|err| {
                warn!(error = %err, "favorites blob is corrupt, starting empty");
                FavoriteSet::new()
            }),
            Ok(None) => FavoriteSet::new(),
            Err(err) => {
                warn!(error = %err, "could not read favorites, starting empty");
                FavoriteSet::new()
            }
        };
        debug!(count = set.len(), "loaded favorites");
        set
    }

    async fn write(&self, set: &FavoriteSet) -> Result<(), StoreError> {
        let bytes = set.to_bytes()?;
        self.store.set(FAVORITES_KEY, &bytes).await.map_err(|err| {
            error!(error = %err, "failed to persist favorites");
            err
        })?;
        debug!(count = set.len(), "persisted favorites");
        Ok(())
    }
}
