use std::{
    collections::HashMap,
    hash::Hash,
    path::{Path, PathBuf},
    sync::Arc,
};
use tokio::{fs, sync::RwLock};
use tracing::debug;

use crate::errors::ServiceError;

/// Generic JSON file-backed key-value map store.
///
/// Keeps a `HashMap<K, V>` in memory and rewrites the whole file after every
/// mutation. Writes happen while the write lock is held, so the file always
/// reflects the latest committed map.
pub struct JsonMapStore<K, V> {
    inner: RwLock<HashMap<K, V>>,
    file_path: PathBuf,
}

fn storage_err(e: impl std::fmt::Display) -> ServiceError {
    ServiceError::Storage(e.to_string())
}

impl<K, V> JsonMapStore<K, V>
where
    K: Eq + Hash + serde::Serialize + serde::de::DeserializeOwned + Clone,
    V: serde::Serialize + serde::de::DeserializeOwned + Clone,
{
    /// Open the store at `path`. A missing file is created with an empty map;
    /// a file that is not a JSON map is an error.
    pub async fn new<P: Into<PathBuf>>(path: P) -> Result<Arc<Self>, ServiceError> {
        let file_path = path.into();
        common::env::ensure_parent_dir(&file_path).await.map_err(storage_err)?;

        let map: HashMap<K, V> = match fs::read(&file_path).await {
            Ok(bytes) if bytes.iter().all(u8::is_ascii_whitespace) => HashMap::new(),
            Ok(bytes) => serde_json::from_slice(&bytes).map_err(|e| {
                ServiceError::Storage(format!("corrupt data file {}: {e}", file_path.display()))
            })?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                let empty: HashMap<K, V> = HashMap::new();
                Self::persist(&file_path, &empty).await?;
                empty
            }
            Err(e) => return Err(storage_err(e)),
        };
        debug!(path = %file_path.display(), entries = map.len(), "json map store opened");

        Ok(Arc::new(Self { inner: RwLock::new(map), file_path }))
    }

    /// Write to a sibling temp file then rename over the target.
    async fn persist(path: &Path, map: &HashMap<K, V>) -> Result<(), ServiceError> {
        let data = serde_json::to_vec_pretty(map).map_err(storage_err)?;
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, data).await.map_err(storage_err)?;
        fs::rename(&tmp, path).await.map_err(storage_err)?;
        Ok(())
    }

    /// All values, in no particular order.
    pub async fn values(&self) -> Vec<V> {
        let map = self.inner.read().await;
        map.values().cloned().collect()
    }

    pub async fn get(&self, key: &K) -> Option<V> {
        let map = self.inner.read().await;
        map.get(key).cloned()
    }

    /// Remove a key; returns whether it existed. Only persists when something changed.
    pub async fn remove(&self, key: &K) -> Result<bool, ServiceError> {
        let mut map = self.inner.write().await;
        let Some(old) = map.remove(key) else {
            return Ok(false);
        };
        if let Err(e) = Self::persist(&self.file_path, &map).await {
            map.insert(key.clone(), old);
            return Err(e);
        }
        Ok(true)
    }

    /// Apply a mutation under the write lock and persist it.
    ///
    /// If `f` fails or persisting fails, the in-memory map is rolled back and
    /// the error returned.
    pub async fn update_map<F, R>(&self, f: F) -> Result<R, ServiceError>
    where
        F: FnOnce(&mut HashMap<K, V>) -> Result<R, ServiceError>,
    {
        let mut map = self.inner.write().await;
        let snapshot = map.clone();
        let out = match f(&mut map) {
            Ok(out) => out,
            Err(e) => {
                *map = snapshot;
                return Err(e);
            }
        };
        if let Err(e) = Self::persist(&self.file_path, &map).await {
            *map = snapshot;
            return Err(e);
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path() -> PathBuf {
        std::env::temp_dir().join(format!("json_map_store_{}.json", uuid::Uuid::new_v4()))
    }

    #[tokio::test]
    async fn json_map_store_crud_persists() -> Result<(), anyhow::Error> {
        let tmp = temp_path();
        let store = JsonMapStore::<String, String>::new(&tmp).await?;

        assert_eq!(store.values().await.len(), 0);

        store
            .update_map(|m| {
                m.insert("a".into(), "1".into());
                m.insert("b".into(), "2".into());
                Ok(())
            })
            .await?;
        assert_eq!(store.get(&"a".into()).await.as_deref(), Some("1"));

        let existed = store.remove(&"b".into()).await?;
        assert!(existed);
        assert!(!store.remove(&"b".into()).await?);

        let reloaded = JsonMapStore::<String, String>::new(&tmp).await?;
        assert_eq!(reloaded.values().await, vec!["1".to_string()]);

        let _ = tokio::fs::remove_file(&tmp).await;
        Ok(())
    }

    #[tokio::test]
    async fn failed_mutation_is_not_applied() -> Result<(), anyhow::Error> {
        let tmp = temp_path();
        let store = JsonMapStore::<String, String>::new(&tmp).await?;
        let res: Result<(), _> = store
            .update_map(|m| {
                m.insert("x".into(), "1".into());
                Err(ServiceError::Conflict("nope".into()))
            })
            .await;
        assert!(matches!(res, Err(ServiceError::Conflict(_))));

        assert_eq!(store.get(&"x".into()).await, None);
        let reloaded = JsonMapStore::<String, String>::new(&tmp).await?;
        assert!(reloaded.values().await.is_empty());

        let _ = tokio::fs::remove_file(&tmp).await;
        Ok(())
    }

    #[tokio::test]
    async fn corrupt_file_is_rejected() -> Result<(), anyhow::Error> {
        let tmp = temp_path();
        tokio::fs::write(&tmp, b"[not a map").await?;
        let res = JsonMapStore::<String, String>::new(&tmp).await;
        assert!(matches!(res, Err(ServiceError::Storage(_))));
        let _ = tokio::fs::remove_file(&tmp).await;
        Ok(())
    }
}
