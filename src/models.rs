use crate::game::{CardId, Difficulty, Theme};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct StoreData {
    pub entries: BTreeMap<String, String>,
}

#[derive(Debug, Deserialize)]
pub struct StartRequest {
    #[serde(default)]
    pub difficulty: Difficulty,
    #[serde(default)]
    pub theme: Theme,
}

#[derive(Debug, Deserialize)]
pub struct ClickRequest {
    pub card_id: CardId,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameStatus {
    Idle,
    InProgress,
    Completed,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardView {
    pub id: CardId,
    /// Only present while the card is face up or matched.
    pub face: Option<String>,
    pub flipped: bool,
    pub matched: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameView {
    pub status: GameStatus,
    pub difficulty: Difficulty,
    pub theme: Theme,
    pub cards: Vec<CardView>,
    pub moves: u32,
    pub matched_pairs: usize,
    pub total_pairs: usize,
    pub elapsed_secs: u32,
    pub elapsed: String,
    pub score: Option<u32>,
    pub best_score: Option<u32>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct BestScoreResponse {
    pub best_score: Option<u32>,
}
