//! Memory match: deck building, per-session transitions, scoring and the
//! clock-driven engine that ties them together.

pub mod clock;
pub mod deck;
pub mod engine;
pub mod score;
pub mod session;

pub use deck::{Card, CardId, Difficulty, Theme};
pub use engine::GameEngine;
pub use session::{Session, SessionStatus};
