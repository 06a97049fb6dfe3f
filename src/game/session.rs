use super::deck::{Card, CardId, Difficulty, Theme, build_deck};
use super::score::calculate_score;
use rand::Rng;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    InProgress,
    Completed { score: u32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolutionKind {
    Match,
    Mismatch,
}

/// Outcome of a pair-attempt, applied once its display delay has passed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    pub kind: ResolutionKind,
    pub pair: [CardId; 2],
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Flip {
    Ignored,
    Revealed(Session),
    PairAttempted { session: Session, resolution: Resolution },
}

/// One memory match session. Transitions never mutate in place; each returns
/// the next record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub difficulty: Difficulty,
    pub theme: Theme,
    pub cards: Vec<Card>,
    pub flipped: Vec<CardId>,
    pub moves: u32,
    pub matched_pairs: usize,
    pub elapsed_secs: u32,
    pub status: SessionStatus,
}

impl Session {
    pub fn start<R: Rng + ?Sized>(difficulty: Difficulty, theme: Theme, rng: &mut R) -> Self {
        Self::with_cards(difficulty, theme, build_deck(difficulty, theme, rng))
    }

    pub(crate) fn with_cards(difficulty: Difficulty, theme: Theme, cards: Vec<Card>) -> Self {
        Self {
            difficulty,
            theme,
            cards,
            flipped: Vec::with_capacity(2),
            moves: 0,
            matched_pairs: 0,
            elapsed_secs: 0,
            status: SessionStatus::InProgress,
        }
    }

    pub fn total_pairs(&self) -> usize {
        self.cards.len() / 2
    }

    pub fn is_completed(&self) -> bool {
        matches!(self.status, SessionStatus::Completed { .. })
    }

    pub fn score(&self) -> Option<u32> {
        match self.status {
            SessionStatus::Completed { score } => Some(score),
            SessionStatus::InProgress => None,
        }
    }

    pub fn card(&self, id: CardId) -> Option<&Card> {
        self.cards.iter().find(|card| card.id == id)
    }

    pub fn flip(&self, id: CardId) -> Flip {
        if self.is_completed() || self.flipped.len() >= 2 {
            return Flip::Ignored;
        }
        let Some(target) = self.card(id) else {
            return Flip::Ignored;
        };
        if target.matched || target.flipped || self.flipped.contains(&id) {
            return Flip::Ignored;
        }

        let mut next = self.clone();
        set_flipped(&mut next.cards, id, true);
        next.flipped.push(id);

        if next.flipped.len() < 2 {
            return Flip::Revealed(next);
        }
        let (first, second) = (next.flipped[0], next.flipped[1]);

        next.moves = next.moves.saturating_add(1);
        let same_face = match (next.card(first), next.card(second)) {
            (Some(a), Some(b)) => a.face == b.face,
            _ => false,
        };
        let kind = if same_face {
            ResolutionKind::Match
        } else {
            ResolutionKind::Mismatch
        };

        Flip::PairAttempted {
            session: next,
            resolution: Resolution {
                kind,
                pair: [first, second],
            },
        }
    }

    /// Applies a pending resolution. Returns `None` when it no longer
    /// describes the cards currently waiting in the flipped buffer.
    pub fn resolve(&self, resolution: Resolution) -> Option<Session> {
        if self.flipped.as_slice() != resolution.pair.as_slice() {
            return None;
        }

        let mut next = self.clone();
        next.flipped.clear();
        match resolution.kind {
            ResolutionKind::Match => {
                for card in next.cards.iter_mut().filter(|card| resolution.pair.contains(&card.id)) {
                    card.matched = true;
                }
                next.matched_pairs += 1;
                if next.matched_pairs == next.total_pairs() && !next.is_completed() {
                    next.status = SessionStatus::Completed {
                        score: calculate_score(next.difficulty, next.moves, next.elapsed_secs),
                    };
                }
            }
            ResolutionKind::Mismatch => {
                for id in resolution.pair {
                    set_flipped(&mut next.cards, id, false);
                }
            }
        }
        Some(next)
    }

    pub fn tick(&self) -> Session {
        let mut next = self.clone();
        if !next.is_completed() {
            next.elapsed_secs = next.elapsed_secs.saturating_add(1);
        }
        next
    }

    pub fn face_up_unmatched(&self) -> usize {
        self.cards.iter().filter(|card| card.flipped && !card.matched).count()
    }
}

fn set_flipped(cards: &mut [Card], id: CardId, flipped: bool) {
    if let Some(card) = cards.iter_mut().find(|card| card.id == id) {
        card.flipped = flipped;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Unshuffled easy/nature board: ids 0,1 are 🌲, ids 2,3 are 🌻, ids 4,5 are 🌵.
    fn ordered_session(difficulty: Difficulty) -> Session {
        let cards = Theme::Nature
            .symbols()
            .iter()
            .take(difficulty.num_pairs())
            .enumerate()
            .flat_map(|(index, face)| [Card::new(index * 2, *face), Card::new(index * 2 + 1, *face)])
            .collect();
        Session::with_cards(difficulty, Theme::Nature, cards)
    }

    fn revealed(flip: Flip) -> Session {
        match flip {
            Flip::Revealed(session) => session,
            other => panic!("expected a single reveal, got {other:?}"),
        }
    }

    fn attempted(flip: Flip) -> (Session, Resolution) {
        match flip {
            Flip::PairAttempted { session, resolution } => (session, resolution),
            other => panic!("expected a pair attempt, got {other:?}"),
        }
    }

    #[test]
    fn first_flip_reveals_without_counting_a_move() {
        let session = ordered_session(Difficulty::Easy);
        let next = revealed(session.flip(0));
        assert!(next.card(0).unwrap().flipped);
        assert_eq!(next.moves, 0);
        assert_eq!(next.flipped, vec![0]);
        assert!(!session.card(0).unwrap().flipped);
    }

    #[test]
    fn matching_pair_resolves_to_matched() {
        let session = revealed(ordered_session(Difficulty::Easy).flip(0));
        let (session, resolution) = attempted(session.flip(1));
        assert_eq!(session.moves, 1);
        assert_eq!(resolution.kind, ResolutionKind::Match);
        assert_eq!(resolution.pair, [0, 1]);

        let resolved = session.resolve(resolution).unwrap();
        assert!(resolved.card(0).unwrap().matched);
        assert!(resolved.card(1).unwrap().matched);
        assert_eq!(resolved.matched_pairs, 1);
        assert!(resolved.flipped.is_empty());
    }

    #[test]
    fn mismatch_flips_both_back() {
        let session = revealed(ordered_session(Difficulty::Easy).flip(0));
        let (session, resolution) = attempted(session.flip(4));
        assert_eq!(resolution.kind, ResolutionKind::Mismatch);
        assert_eq!(session.moves, 1);

        let resolved = session.resolve(resolution).unwrap();
        assert!(!resolved.card(0).unwrap().flipped);
        assert!(!resolved.card(4).unwrap().flipped);
        assert_eq!(resolved.matched_pairs, 0);
        assert_eq!(resolved.moves, 1);
    }

    #[test]
    fn guarded_clicks_are_ignored() {
        let session = ordered_session(Difficulty::Easy);
        assert_eq!(session.flip(99), Flip::Ignored);

        let one = revealed(session.flip(2));
        assert_eq!(one.flip(2), Flip::Ignored);

        let (two, _) = attempted(one.flip(5));
        assert_eq!(two.flip(7), Flip::Ignored);
        assert_eq!(two.face_up_unmatched(), 2);
    }

    #[test]
    fn matched_cards_cannot_be_flipped_again() {
        let session = revealed(ordered_session(Difficulty::Easy).flip(0));
        let (session, resolution) = attempted(session.flip(1));
        let session = session.resolve(resolution).unwrap();
        assert_eq!(session.flip(0), Flip::Ignored);
        assert_eq!(session.flip(1), Flip::Ignored);
    }

    #[test]
    fn stale_resolution_is_ignored() {
        let session = ordered_session(Difficulty::Easy);
        let stale = Resolution {
            kind: ResolutionKind::Match,
            pair: [0, 1],
        };
        assert_eq!(session.resolve(stale), None);
    }

    #[test]
    fn completing_every_pair_scores_once() {
        let mut session = ordered_session(Difficulty::Easy);
        for _ in 0..30 {
            session = session.tick();
        }
        // four wasted attempts, then the six matches
        for _ in 0..4 {
            let first = revealed(session.flip(0));
            let (next, resolution) = attempted(first.flip(2));
            session = next.resolve(resolution).unwrap();
        }
        for pair in 0..6 {
            let first = revealed(session.flip(pair * 2));
            let (next, resolution) = attempted(first.flip(pair * 2 + 1));
            session = next.resolve(resolution).unwrap();
        }

        assert_eq!(session.moves, 10);
        assert_eq!(session.status, SessionStatus::Completed { score: 840 });
        assert_eq!(session.tick().elapsed_secs, 30);
        assert_eq!(session.flip(0), Flip::Ignored);
    }
}
