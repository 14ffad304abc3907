//! Generator module - fairness-constrained 3-piece trays
//!
//! Two policies shape every tray:
//!
//! - **Large-piece streak**: once two large pieces (5+ cells) have been issued
//!   back to back, the next draw comes from small pieces only. The streak
//!   carries across trays, so no three consecutive pieces are ever all large.
//! - **Early-game placeability**: for the first 10 moves a candidate tray is
//!   accepted only if at least one of its pieces fits on the current board.
//!   Candidates are rejection-sampled up to 24 times; after that one piece is
//!   forced from the currently placeable subset. When nothing in the catalog
//!   fits at all, an ordinary draw is returned. The guarantee is best-effort.
//!
//! Streak and id counters live on the generator, which is owned by a single
//! session.

use std::fmt;

use arrayvec::ArrayVec;
use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::pieces::{catalog, PieceDef, CATALOG_SIZE};
use crate::rng::{SeededRng, SequenceSource};
use crate::types::{EARLY_GAME_MOVES, LARGE_STREAK_LIMIT, MAX_SET_ATTEMPTS, TRAY_SIZE};

/// Per-session piece instance identifier
///
/// Distinguishes identical shapes sitting in different tray slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InstanceId(pub u32);

impl fmt::Display for InstanceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "p_{}", self.0)
    }
}

/// A catalog piece offered in the tray
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActivePiece {
    pub instance_id: InstanceId,
    pub def: &'static PieceDef,
}

/// One generated tray
pub type PieceSet = [ActivePiece; TRAY_SIZE];

type Pool = ArrayVec<&'static PieceDef, CATALOG_SIZE>;

/// Tray generator
#[derive(Debug, Clone)]
pub struct PieceGenerator<R = SeededRng> {
    rng: R,
    /// Consecutive large pieces issued so far
    large_streak: u8,
    /// Next instance id to hand out
    next_id: u32,
}

impl<R: SequenceSource> PieceGenerator<R> {
    pub fn new(rng: R) -> Self {
        Self {
            rng,
            large_streak: 0,
            next_id: 0,
        }
    }

    pub fn large_streak(&self) -> u8 {
        self.large_streak
    }

    /// Produce the next tray for `board`, where `move_index` is the number of
    /// moves made so far in the run
    pub fn next_set(&mut self, board: &Board, move_index: u32) -> PieceSet {
        let early = move_index < EARLY_GAME_MOVES;

        let mut attempt = 0;
        while attempt < MAX_SET_ATTEMPTS {
            attempt += 1;
            let (candidate, streak) = self.generate_set(self.large_streak);
            if early && !board.can_any_piece_fit(candidate.iter().copied()) {
                continue;
            }
            self.large_streak = streak;
            return self.issue(candidate);
        }

        let placeable = board.placeable_pieces(catalog());
        if early && !placeable.is_empty() {
            tracing::debug!(
                move_index,
                placeable = placeable.len(),
                "rejection sampling exhausted, forcing a placeable piece"
            );
            let (forced, streak) = self.generate_forced_set(&placeable, self.large_streak);
            self.large_streak = streak;
            return self.issue(forced);
        }

        tracing::debug!(move_index, "no catalog piece fits, using an unconstrained tray");
        let (fallback, streak) = self.generate_set(self.large_streak);
        self.large_streak = streak;
        self.issue(fallback)
    }

    /// Issue an instance id for a piece chosen outside the normal draw
    pub fn wrap(&mut self, def: &'static PieceDef) -> ActivePiece {
        let instance_id = InstanceId(self.next_id);
        self.next_id += 1;
        ActivePiece { instance_id, def }
    }

    /// Three fairness-filtered draws from the full catalog
    fn generate_set(&mut self, streak: u8) -> ([&'static PieceDef; TRAY_SIZE], u8) {
        let mut streak = streak;
        let first = self.draw_fair(catalog().iter().collect(), &mut streak);
        let second = self.draw_fair(catalog().iter().collect(), &mut streak);
        let third = self.draw_fair(catalog().iter().collect(), &mut streak);
        ([first, second, third], streak)
    }

    /// One piece forced from `placeable`, then two normal draws
    fn generate_forced_set(
        &mut self,
        placeable: &[&'static PieceDef],
        streak: u8,
    ) -> ([&'static PieceDef; TRAY_SIZE], u8) {
        let mut streak = streak;
        let forced = self.draw_fair(placeable.iter().copied().collect(), &mut streak);
        let second = self.draw_fair(catalog().iter().collect(), &mut streak);
        let third = self.draw_fair(catalog().iter().collect(), &mut streak);
        ([forced, second, third], streak)
    }

    /// Draw from `pool`, dropping large pieces while the streak is at the limit
    ///
    /// If the filter would leave nothing, the unfiltered pool is used.
    fn draw_fair(&mut self, pool: Pool, streak: &mut u8) -> &'static PieceDef {
        let filtered: Pool = if *streak >= LARGE_STREAK_LIMIT {
            pool.iter().copied().filter(|p| !p.is_large()).collect()
        } else {
            pool.clone()
        };
        let source = if filtered.is_empty() { &pool } else { &filtered };

        let piece = source[self.rng.pick_index(source.len())];
        *streak = if piece.is_large() { *streak + 1 } else { 0 };
        piece
    }

    fn issue(&mut self, defs: [&'static PieceDef; TRAY_SIZE]) -> PieceSet {
        defs.map(|def| self.wrap(def))
    }
}
