use cozy_chess::{BitBoard, Board, Color};
use std::cell::OnceCell;

use crate::board_metrics::BoardMetrics;
use crate::zobrist;

pub struct Position<'a> {
    pub board: &'a Board,
    metrics: OnceCell<BoardMetrics>,
    pawn_key: OnceCell<u64>,
}

impl<'a> Position<'a> {
    #[inline(always)]
    pub fn new(board: &'a Board) -> Self {
        Self {
            board,
            metrics: OnceCell::new(),
            pawn_key: OnceCell::new(),
        }
    }

    // Get or compute the board metrics (computed once, cached for reuse)
    #[inline(always)]
    fn metrics(&self) -> &BoardMetrics {
        self.metrics.get_or_init(|| BoardMetrics::new(self.board))
    }

    #[inline(always)]
    pub fn attacks_for(&self, color: Color) -> BitBoard {
        self.metrics().attacks[color as usize]
    }

    /// Structural hash of the pawn placement, see [`zobrist::pawn_key`].
    #[inline(always)]
    pub fn pawn_key(&self) -> u64 {
        *self.pawn_key.get_or_init(|| zobrist::pawn_key(self.board))
    }
}
