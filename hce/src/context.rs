use cozy_chess::{BitBoard, Board, Color, Piece, Square};
use utils::Position;

// Per-evaluation view of the position shared by every term
pub struct EvalContext<'a> {
    pub position: &'a Position<'a>,

    // Diagnostics: bypass the pawn cache and report every term
    pub trace: bool,
}

impl<'a> EvalContext<'a> {
    #[inline(always)]
    pub fn new(position: &'a Position<'a>, trace: bool) -> Self {
        Self { position, trace }
    }

    #[inline(always)]
    pub fn board(&self) -> &'a Board {
        self.position.board
    }

    #[inline(always)]
    pub fn pawns_for(&self, color: Color) -> BitBoard {
        self.position.board.colored_pieces(color, Piece::Pawn)
    }

    #[inline(always)]
    pub fn king_sq_for(&self, color: Color) -> Square {
        self.position.board.king(color)
    }

    #[inline(always)]
    pub fn attacks_for(&self, color: Color) -> BitBoard {
        self.position.attacks_for(color)
    }
}
