use crate::game::GameEngine;
use crate::storage::{BestScores, JsonFileStore, persist_data};
use std::{path::PathBuf, sync::Arc, time::Duration};
use tokio::{sync::Mutex, task::JoinHandle, time::Instant};
use tracing::warn;

pub type Engine = GameEngine<BestScores<JsonFileStore>>;

const CLOCK_INTERVAL: Duration = Duration::from_millis(100);

#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<Mutex<Engine>>,
    writer: Arc<Mutex<()>>,
    started: Instant,
}

impl AppState {
    pub fn new(engine: Engine) -> Self {
        Self {
            engine: Arc::new(Mutex::new(engine)),
            writer: Arc::new(Mutex::new(())),
            started: Instant::now(),
        }
    }

    /// Runs `f` on the engine with its clock caught up to real time, then
    /// writes any store changes once the engine lock is released.
    pub async fn with_engine<T>(&self, f: impl FnOnce(&mut Engine) -> T) -> T {
        let mut engine = self.engine.lock().await;
        engine.advance_to(self.started.elapsed());
        let result = f(&mut *engine);

        let store = engine.repository_mut().store_mut();
        let Some(unsaved) = store.take_unsaved() else {
            return result;
        };
        let path: PathBuf = store.path().to_path_buf();
        // Taken before the engine unlocks so writes land in snapshot order.
        let _writer = self.writer.lock().await;
        drop(engine);

        if let Err(err) = persist_data(&path, &unsaved).await {
            warn!("failed to save {}: {err}", path.display());
        }
        result
    }
}

/// Keeps scheduled resolutions and timer ticks firing between requests.
pub fn spawn_clock(state: AppState) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(CLOCK_INTERVAL);
        loop {
            interval.tick().await;
            state.with_engine(|_| ()).await;
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::NoopAnalytics;
    use crate::game::{CardId, Difficulty, Theme};
    use crate::models::GameStatus;
    use crate::storage::{BEST_SCORE_KEY, open_store};

    fn temp_path() -> PathBuf {
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        let mut path = std::env::temp_dir();
        path.push(format!("memory_match_state_{}_{nanos}", std::process::id()));
        path.push("state.json");
        path
    }

    fn pairs(engine: &Engine) -> Vec<[CardId; 2]> {
        let session = engine.session().unwrap();
        session.theme.symbols()[..session.total_pairs()]
            .iter()
            .map(|face| {
                let ids: Vec<_> = session
                    .cards
                    .iter()
                    .filter(|card| card.face == *face)
                    .map(|card| card.id)
                    .collect();
                [ids[0], ids[1]]
            })
            .collect()
    }

    #[tokio::test]
    async fn clock_task_completes_game_and_saves_best_score() {
        let path = temp_path();
        let store = open_store(path.clone()).await.unwrap();
        let engine = GameEngine::new(BestScores::new(store), Arc::new(NoopAnalytics));
        let state = AppState::new(engine);
        let clock = spawn_clock(state.clone());

        let pairs = state
            .with_engine(|engine| {
                engine.start_game(Difficulty::Easy, Theme::Nature);
                pairs(engine)
            })
            .await;
        for [a, b] in pairs {
            state
                .with_engine(|engine| {
                    assert!(engine.handle_card_click(a));
                    assert!(engine.handle_card_click(b));
                })
                .await;
            tokio::time::sleep(Duration::from_millis(700)).await;
        }

        let saved = std::fs::read_to_string(&path).expect("best score written");
        let data: crate::models::StoreData = serde_json::from_str(&saved).unwrap();
        let best: u32 = data.entries[BEST_SCORE_KEY].parse().unwrap();

        let engine = state.engine.lock().await;
        assert_eq!(engine.view().status, GameStatus::Completed);
        assert_eq!(engine.best_score(), Some(best));
        assert_eq!(engine.view().score, Some(best));
        drop(engine);

        clock.abort();
        let _ = std::fs::remove_dir_all(path.parent().unwrap());
    }
}
