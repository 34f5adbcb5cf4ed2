use cozy_chess::{BitBoard, Board, Color, Piece};

/// Get minor pieces (knights and bishops) for a color.
pub fn minors(board: &Board, color: Color) -> BitBoard {
    board.colored_pieces(color, Piece::Knight) | board.colored_pieces(color, Piece::Bishop)
}

/// Get major pieces (rooks and queens) for a color.
pub fn majors(board: &Board, color: Color) -> BitBoard {
    board.colored_pieces(color, Piece::Rook) | board.colored_pieces(color, Piece::Queen)
}

/// True if `color` has anything besides its king and pawns.
pub fn has_non_pawn_material(board: &Board, color: Color) -> bool {
    !(minors(board, color) | majors(board, color)).is_empty()
}

/// Compute game phase from piece counts.
///
/// Returns a value from 0.0 (endgame) to 1.0 (opening/middlegame).
/// Uses piece weights: N=1, B=1, R=2, Q=4, with max score of 24.
pub fn game_phase(board: &Board) -> f32 {
    let knights = board.pieces(Piece::Knight);
    let bishops = board.pieces(Piece::Bishop);
    let rooks = board.pieces(Piece::Rook);
    let queens = board.pieces(Piece::Queen);

    let score = knights.len() + bishops.len() + 2 * rooks.len() + 4 * queens.len();

    (score.min(24) as f32) / 24.0
}
