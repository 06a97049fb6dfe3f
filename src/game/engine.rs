use super::clock::VirtualClock;
use super::deck::{CardId, Difficulty, Theme};
use super::score::format_clock;
use super::session::{Flip, Resolution, ResolutionKind, Session};
use crate::analytics::AnalyticsSink;
use crate::models::{CardView, GameStatus, GameView};
use crate::storage::BestScoreRepository;
use rand::{SeedableRng, rngs::StdRng};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

pub const MATCH_DELAY: Duration = Duration::from_millis(500);
pub const MISMATCH_DELAY: Duration = Duration::from_millis(1000);
pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

#[derive(Debug, Clone)]
enum Phase {
    Idle,
    Playing(Session),
}

#[derive(Debug, Clone, Copy)]
struct Scheduled {
    due: Duration,
    resolution: Resolution,
}

enum Due {
    Resolution,
    Tick(Duration),
}

/// Drives one memory match session on a virtual clock.
///
/// Pair resolutions are scheduled events rather than real timers; they fire
/// from [`GameEngine::advance_to`] in time order, interleaved with the
/// one-second timer ticks.
pub struct GameEngine<R> {
    repository: R,
    analytics: Arc<dyn AnalyticsSink>,
    rng: StdRng,
    clock: VirtualClock,
    phase: Phase,
    pending: Option<Scheduled>,
    next_tick: Option<Duration>,
    difficulty: Difficulty,
    theme: Theme,
    best_score: Option<u32>,
}

impl<R: BestScoreRepository> GameEngine<R> {
    pub fn new(repository: R, analytics: Arc<dyn AnalyticsSink>) -> Self {
        Self::with_rng(repository, analytics, StdRng::from_os_rng())
    }

    pub fn with_rng(repository: R, analytics: Arc<dyn AnalyticsSink>, rng: StdRng) -> Self {
        let best_score = match repository.load_best_score() {
            Ok(score) => score,
            Err(err) => {
                warn!("ignoring stored best score: {err}");
                None
            }
        };

        Self {
            repository,
            analytics,
            rng,
            clock: VirtualClock::default(),
            phase: Phase::Idle,
            pending: None,
            next_tick: None,
            difficulty: Difficulty::default(),
            theme: Theme::default(),
            best_score,
        }
    }

    pub fn start_game(&mut self, difficulty: Difficulty, theme: Theme) {
        self.difficulty = difficulty;
        self.theme = theme;
        self.analytics
            .track("memory_game_start", "engagement", &format!("{difficulty}_{theme}"));
        self.setup();
    }

    /// Deals a fresh board with the current settings. Does nothing from the menu.
    pub fn reset_board(&mut self) {
        if matches!(self.phase, Phase::Playing(_)) {
            self.setup();
        }
    }

    pub fn exit_to_menu(&mut self) {
        self.phase = Phase::Idle;
        self.pending = None;
        self.next_tick = None;
    }

    /// Returns whether the click changed the board.
    pub fn handle_card_click(&mut self, card_id: CardId) -> bool {
        let Phase::Playing(session) = &self.phase else {
            return false;
        };

        match session.flip(card_id) {
            Flip::Ignored => {
                debug!(card_id, "click ignored");
                false
            }
            Flip::Revealed(next) => {
                self.phase = Phase::Playing(next);
                true
            }
            Flip::PairAttempted { session, resolution } => {
                let delay = match resolution.kind {
                    ResolutionKind::Match => MATCH_DELAY,
                    ResolutionKind::Mismatch => MISMATCH_DELAY,
                };
                self.pending = Some(Scheduled {
                    due: self.clock.now() + delay,
                    resolution,
                });
                self.phase = Phase::Playing(session);
                true
            }
        }
    }

    pub fn advance(&mut self, delta: Duration) {
        self.advance_to(self.clock.now() + delta);
    }

    /// Fires every event due at or before `target`. A resolution and a tick
    /// due at the same instant fire resolution first.
    pub fn advance_to(&mut self, target: Duration) {
        while let Some(due) = self.next_due(target) {
            match due {
                Due::Resolution => self.fire_resolution(),
                Due::Tick(at) => self.fire_tick(at),
            }
        }
        self.clock.advance_to(target);
    }

    pub fn repository_mut(&mut self) -> &mut R {
        &mut self.repository
    }

    pub fn best_score(&self) -> Option<u32> {
        self.best_score
    }

    pub fn session(&self) -> Option<&Session> {
        match &self.phase {
            Phase::Playing(session) => Some(session),
            Phase::Idle => None,
        }
    }

    pub fn is_resolving(&self) -> bool {
        self.pending.is_some()
    }

    pub fn view(&self) -> GameView {
        let Some(session) = self.session() else {
            return GameView {
                status: GameStatus::Idle,
                difficulty: self.difficulty,
                theme: self.theme,
                cards: Vec::new(),
                moves: 0,
                matched_pairs: 0,
                total_pairs: self.difficulty.num_pairs(),
                elapsed_secs: 0,
                elapsed: format_clock(0),
                score: None,
                best_score: self.best_score,
            };
        };

        let cards = session
            .cards
            .iter()
            .map(|card| CardView {
                id: card.id,
                face: (card.flipped || card.matched).then(|| card.face.to_string()),
                flipped: card.flipped,
                matched: card.matched,
            })
            .collect();

        GameView {
            status: if session.is_completed() {
                GameStatus::Completed
            } else {
                GameStatus::InProgress
            },
            difficulty: session.difficulty,
            theme: session.theme,
            cards,
            moves: session.moves,
            matched_pairs: session.matched_pairs,
            total_pairs: session.total_pairs(),
            elapsed_secs: session.elapsed_secs,
            elapsed: format_clock(session.elapsed_secs),
            score: session.score(),
            best_score: self.best_score,
        }
    }

    fn setup(&mut self) {
        let session = Session::start(self.difficulty, self.theme, &mut self.rng);
        debug!(
            difficulty = %self.difficulty,
            theme = %self.theme,
            cards = session.cards.len(),
            "dealt new board"
        );
        self.phase = Phase::Playing(session);
        self.pending = None;
        self.next_tick = Some(self.clock.now() + TICK_INTERVAL);
    }

    fn next_due(&self, target: Duration) -> Option<Due> {
        let resolution = self.pending.map(|scheduled| scheduled.due).filter(|due| *due <= target);
        let tick = self.next_tick.filter(|due| *due <= target);

        match (resolution, tick) {
            (Some(resolution), Some(tick)) if tick < resolution => Some(Due::Tick(tick)),
            (Some(_), _) => Some(Due::Resolution),
            (None, Some(tick)) => Some(Due::Tick(tick)),
            (None, None) => None,
        }
    }

    fn fire_resolution(&mut self) {
        let Some(scheduled) = self.pending.take() else {
            return;
        };
        self.clock.advance_to(scheduled.due);

        let Phase::Playing(session) = &self.phase else {
            return;
        };
        let Some(next) = session.resolve(scheduled.resolution) else {
            debug!(pair = ?scheduled.resolution.pair, "stale resolution dropped");
            return;
        };
        let completed_now = !session.is_completed() && next.is_completed();
        self.phase = Phase::Playing(next);

        if completed_now {
            self.next_tick = None;
            self.on_completed();
        }
    }

    fn fire_tick(&mut self, at: Duration) {
        self.clock.advance_to(at);
        match &self.phase {
            Phase::Playing(session) if !session.is_completed() => {
                self.phase = Phase::Playing(session.tick());
                self.next_tick = Some(at + TICK_INTERVAL);
            }
            _ => self.next_tick = None,
        }
    }

    fn on_completed(&mut self) {
        let Phase::Playing(session) = &self.phase else {
            return;
        };
        let Some(score) = session.score() else {
            return;
        };
        let (moves, elapsed) = (session.moves, session.elapsed_secs);

        self.analytics.track(
            "memory_game_complete",
            "engagement",
            &format!("{}_{}_{moves}_{elapsed}", self.difficulty, self.theme),
        );
        info!(score, moves, elapsed, "memory game completed");

        if self.best_score.is_some_and(|best| score <= best) {
            return;
        }
        self.best_score = Some(score);
        if let Err(err) = self.repository.save_best_score(score) {
            warn!("best score not saved: {err}");
        }
    }
}
