use crate::errors::StoreError;
use crate::models::StoreData;
use std::{collections::BTreeMap, env, path::Path, path::PathBuf};
use tokio::fs;
use tracing::error;

pub const BEST_SCORE_KEY: &str = "memory_game_best_score";

/// String key-value persistence, shaped like browser local storage.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: String) -> Result<(), StoreError>;
}

pub trait BestScoreRepository {
    fn load_best_score(&self) -> Result<Option<u32>, StoreError>;
    fn save_best_score(&mut self, score: u32) -> Result<(), StoreError>;
}

pub fn resolve_data_path() -> Result<PathBuf, std::io::Error> {
    if let Ok(path) = env::var("APP_DATA_PATH") {
        return Ok(PathBuf::from(path));
    }

    Ok(PathBuf::from("data/state.json"))
}

/// JSON document on disk. `set` only updates memory; the changed document
/// is handed out by [`JsonFileStore::take_unsaved`] and written with
/// [`persist_data`].
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
    data: StoreData,
    dirty: bool,
}

impl JsonFileStore {
    pub fn new(path: PathBuf, data: StoreData) -> Self {
        Self {
            path,
            data,
            dirty: false,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn take_unsaved(&mut self) -> Option<StoreData> {
        if !self.dirty {
            return None;
        }
        self.dirty = false;
        Some(self.data.clone())
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.data.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) -> Result<(), StoreError> {
        self.data.entries.insert(key.to_string(), value);
        self.dirty = true;
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), value);
        Ok(())
    }
}

/// Best score kept as decimal text under [`BEST_SCORE_KEY`].
#[derive(Debug, Clone, Default)]
pub struct BestScores<S> {
    store: S,
}

impl<S: KeyValueStore> BestScores<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }
}

impl<S: KeyValueStore> BestScoreRepository for BestScores<S> {
    fn load_best_score(&self) -> Result<Option<u32>, StoreError> {
        let Some(raw) = self.store.get(BEST_SCORE_KEY) else {
            return Ok(None);
        };
        raw.trim()
            .parse::<u32>()
            .map(Some)
            .map_err(|_| StoreError::Corrupt {
                key: BEST_SCORE_KEY.to_string(),
                value: raw,
            })
    }

    fn save_best_score(&mut self, score: u32) -> Result<(), StoreError> {
        self.store.set(BEST_SCORE_KEY, score.to_string())
    }
}

pub async fn load_data(path: &Path) -> StoreData {
    match fs::read(path).await {
        Ok(bytes) => match serde_json::from_slice(&bytes) {
            Ok(data) => data,
            Err(err) => {
                error!("failed to parse data file: {err}");
                StoreData::default()
            }
        },
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => StoreData::default(),
        Err(err) => {
            error!("failed to read data file: {err}");
            StoreData::default()
        }
    }
}

pub async fn persist_data(path: &Path, data: &StoreData) -> Result<(), StoreError> {
    let payload = serde_json::to_vec_pretty(data)?;
    fs::write(path, payload).await?;
    Ok(())
}

pub async fn open_store(path: PathBuf) -> Result<JsonFileStore, std::io::Error> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).await?;
        }
    }

    let data = load_data(&path).await;
    Ok(JsonFileStore::new(path, data))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        let mut path = std::env::temp_dir();
        path.push(format!("memory_match_{name}_{}_{nanos}", std::process::id()));
        path.push("state.json");
        path
    }

    #[test]
    fn best_score_round_trips_through_store() {
        let mut scores = BestScores::new(MemoryStore::default());
        assert_eq!(scores.load_best_score().unwrap(), None);

        scores.save_best_score(840).unwrap();
        assert_eq!(scores.load_best_score().unwrap(), Some(840));
        assert_eq!(scores.store().get(BEST_SCORE_KEY).as_deref(), Some("840"));
    }

    #[test]
    fn garbage_best_score_is_corrupt() {
        let mut store = MemoryStore::default();
        store.set(BEST_SCORE_KEY, "lots".to_string()).unwrap();
        let scores = BestScores::new(store);
        assert!(matches!(scores.load_best_score(), Err(StoreError::Corrupt { .. })));
    }

    #[tokio::test]
    async fn file_store_persists_across_reopen() {
        let path = temp_path("reopen");
        let mut store = open_store(path.clone()).await.unwrap();
        assert_eq!(store.get(BEST_SCORE_KEY), None);
        assert!(store.take_unsaved().is_none());

        store.set(BEST_SCORE_KEY, "500".to_string()).unwrap();
        let unsaved = store.take_unsaved().expect("set marks the store dirty");
        assert!(store.take_unsaved().is_none());
        persist_data(store.path(), &unsaved).await.unwrap();

        let reopened = BestScores::new(open_store(path.clone()).await.unwrap());
        assert_eq!(reopened.load_best_score().unwrap(), Some(500));

        let _ = std::fs::remove_dir_all(path.parent().unwrap());
    }

    #[tokio::test]
    async fn corrupt_file_loads_empty() {
        let path = temp_path("corrupt");
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, b"{not json").unwrap();

        let store = open_store(path.clone()).await.unwrap();
        assert_eq!(store.get(BEST_SCORE_KEY), None);

        let _ = std::fs::remove_dir_all(path.parent().unwrap());
    }

    #[tokio::test]
    async fn persist_into_missing_directory_fails() {
        let mut dir = std::env::temp_dir();
        dir.push(format!("memory_match_missing_{}", std::process::id()));
        dir.push("nested");
        let mut store = JsonFileStore::new(dir.join("state.json"), StoreData::default());
        store.set(BEST_SCORE_KEY, "1".to_string()).unwrap();

        let unsaved = store.take_unsaved().unwrap();
        let result = persist_data(store.path(), &unsaved).await;
        assert!(matches!(result, Err(StoreError::Io(_))));
        assert_eq!(store.get(BEST_SCORE_KEY).as_deref(), Some("1"));
    }
}
