use cozy_chess::{
    get_bishop_moves, get_king_moves, get_knight_moves, get_pawn_attacks, get_rook_moves,
    BitBoard, Board, Color, Piece,
};

#[derive(Clone, Copy, Debug)]
pub struct BoardMetrics {
    // Every square attacked by each color, king included
    pub attacks: [BitBoard; Color::NUM],
}

impl BoardMetrics {
    pub fn new(board: &Board) -> Self {
        let all_pieces = board.occupied();

        Self {
            attacks: [
                compute(board, Color::White, all_pieces),
                compute(board, Color::Black, all_pieces),
            ],
        }
    }
}

/// Union of all attacks of one color, sliders stopped by `all_pieces`.
fn compute(board: &Board, color: Color, all_pieces: BitBoard) -> BitBoard {
    let mut attacks = get_king_moves(board.king(color));

    for sq in board.colored_pieces(color, Piece::Pawn) {
        attacks |= get_pawn_attacks(sq, color);
    }

    for sq in board.colored_pieces(color, Piece::Knight) {
        attacks |= get_knight_moves(sq);
    }

    let queens = board.colored_pieces(color, Piece::Queen);
    for sq in board.colored_pieces(color, Piece::Bishop) | queens {
        attacks |= get_bishop_moves(sq, all_pieces);
    }
    for sq in board.colored_pieces(color, Piece::Rook) | queens {
        attacks |= get_rook_moves(sq, all_pieces);
    }

    attacks
}
