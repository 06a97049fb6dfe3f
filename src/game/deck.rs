use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

pub type CardId = usize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn num_pairs(self) -> usize {
        match self {
            Difficulty::Easy => 6,
            Difficulty::Medium => 8,
            Difficulty::Hard => 12,
        }
    }

    pub fn multiplier(self) -> f64 {
        match self {
            Difficulty::Easy => 1.0,
            Difficulty::Medium => 1.5,
            Difficulty::Hard => 2.0,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Nature,
    Food,
    Travel,
}

const NATURE: [&str; 12] = [
    "🌲", "🌻", "🌵", "🌊", "🍄", "🦋", "🐢", "🦊", "🦁", "🐘", "🦒", "🐬",
];
const FOOD: [&str; 12] = [
    "🍕", "🍔", "🍦", "🍎", "🍓", "🥑", "🍇", "🍰", "🍩", "🍗", "🌮", "🥐",
];
const TRAVEL: [&str; 12] = [
    "🚗", "✈️", "🚢", "🚂", "🏝️", "🏰", "🗽", "🎡", "🏔️", "🌋", "🌉", "🏙️",
];

impl Theme {
    pub fn symbols(self) -> &'static [&'static str] {
        match self {
            Theme::Nature => &NATURE,
            Theme::Food => &FOOD,
            Theme::Travel => &TRAVEL,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Nature => "nature",
            Theme::Food => "food",
            Theme::Travel => "travel",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub id: CardId,
    pub face: &'static str,
    pub flipped: bool,
    pub matched: bool,
}

impl Card {
    pub const fn new(id: CardId, face: &'static str) -> Self {
        Self {
            id,
            face,
            flipped: false,
            matched: false,
        }
    }
}

/// Builds the face-down board for one game: two cards per symbol, shuffled.
pub fn build_deck<R: Rng + ?Sized>(difficulty: Difficulty, theme: Theme, rng: &mut R) -> Vec<Card> {
    let mut cards: Vec<Card> = theme
        .symbols()
        .iter()
        .take(difficulty.num_pairs())
        .enumerate()
        .flat_map(|(index, face)| [Card::new(index * 2, *face), Card::new(index * 2 + 1, *face)])
        .collect();

    shuffle(&mut cards, rng);
    cards
}

/// Fisher-Yates, walking down from the last index.
pub fn shuffle<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.random_range(0..=i);
        items.swap(i, j);
    }
}
