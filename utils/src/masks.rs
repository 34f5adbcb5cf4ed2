use cozy_chess::{BitBoard, Color, File, Square};

const FILE_A: u64 = 0x0101_0101_0101_0101;

/// Files adjacent to each file: [file].
pub static ISOLATED_MASKS: [BitBoard; 8] = {
    let mut table = [BitBoard::EMPTY; 8];
    let mut file_idx = 0;
    while file_idx < 8 {
        let mut mask = 0u64;
        if file_idx > 0 {
            mask |= FILE_A << (file_idx - 1);
        }
        if file_idx < 7 {
            mask |= FILE_A << (file_idx + 1);
        }
        table[file_idx] = BitBoard(mask);
        file_idx += 1;
    }
    table
};

/// Squares strictly ahead of a pawn on its own file: [color][square].
pub static IN_FRONT_MASKS: [[BitBoard; 64]; 2] = forward_masks(0);

/// Squares strictly ahead of a pawn on its own and adjacent files: [color][square].
/// No enemy pawn may stand here for the pawn to be passed.
///
/// <https://www.chessprogramming.org/Passed_Pawn>
pub static PASSED_MASKS: [[BitBoard; 64]; 2] = forward_masks(1);

/// King squares from which the defender still catches a pawn when the
/// pawn's side is to move: [color][pawn square].
///
/// <https://www.chessprogramming.org/Rule_of_the_Square>
pub static SQUARE_RULE_MASKS: [[BitBoard; 64]; 2] = square_rule_masks(0);

/// Same as [`SQUARE_RULE_MASKS`], widened by one tempo for when the
/// defender is to move.
pub static SQUARE_RULE_EX_MASKS: [[BitBoard; 64]; 2] = square_rule_masks(1);

/// Chebyshev (king step) distance between two squares: [from][to].
pub static DISTANCE: [[u8; 64]; 64] = {
    let mut table = [[0u8; 64]; 64];
    let mut from = 0;
    while from < 64 {
        let mut to = 0;
        while to < 64 {
            table[from][to] = chebyshev(from as i8, to as i8);
            to += 1;
        }
        from += 1;
    }
    table
};

#[inline(always)]
pub fn isolated(file: File) -> BitBoard {
    ISOLATED_MASKS[file as usize]
}

#[inline(always)]
pub fn in_front(color: Color, sq: Square) -> BitBoard {
    IN_FRONT_MASKS[color as usize][sq as usize]
}

#[inline(always)]
pub fn passed(color: Color, sq: Square) -> BitBoard {
    PASSED_MASKS[color as usize][sq as usize]
}

#[inline(always)]
pub fn square_rule(color: Color, sq: Square) -> BitBoard {
    SQUARE_RULE_MASKS[color as usize][sq as usize]
}

#[inline(always)]
pub fn square_rule_ex(color: Color, sq: Square) -> BitBoard {
    SQUARE_RULE_EX_MASKS[color as usize][sq as usize]
}

#[inline(always)]
pub fn distance(from: Square, to: Square) -> i32 {
    DISTANCE[from as usize][to as usize] as i32
}

/// Shifts every square one rank forward from `color`'s point of view.
/// Squares pushed past the last rank fall off.
#[inline(always)]
pub fn up(bb: BitBoard, color: Color) -> BitBoard {
    match color {
        Color::White => BitBoard(bb.0 << 8),
        Color::Black => BitBoard(bb.0 >> 8),
    }
}

/// The square one step forward from `sq` for `color`, if still on the board.
#[inline(always)]
pub fn step(color: Color, sq: Square) -> Option<Square> {
    match color {
        Color::White => sq.try_offset(0, 1),
        Color::Black => sq.try_offset(0, -1),
    }
}

/// Rank of `sq` counted from `color`'s own back rank (0..=7).
#[inline(always)]
pub fn relative_rank(color: Color, sq: Square) -> usize {
    match color {
        Color::White => sq.rank() as usize,
        Color::Black => 7 - sq.rank() as usize,
    }
}

const fn chebyshev(from: i8, to: i8) -> u8 {
    let file_diff = (from % 8 - to % 8).abs();
    let rank_diff = (from / 8 - to / 8).abs();
    if file_diff > rank_diff {
        file_diff as u8
    } else {
        rank_diff as u8
    }
}

const fn forward_masks(width: i8) -> [[BitBoard; 64]; 2] {
    let mut table = [[BitBoard::EMPTY; 64]; 2];
    let mut square_idx = 0;
    while square_idx < 64 {
        let file_idx = (square_idx % 8) as i8;
        let rank_idx = (square_idx / 8) as i8;

        table[0][square_idx] = BitBoard(make_forward_mask(rank_idx, file_idx, 1, width));
        table[1][square_idx] = BitBoard(make_forward_mask(rank_idx, file_idx, -1, width));

        square_idx += 1;
    }
    table
}

/// Every square ahead of (rank_idx, file_idx) within `width` files either side.
const fn make_forward_mask(
    mut rank_idx: i8,
    file_idx: i8,
    step: i8, // +1 for white, -1 for black
    width: i8,
) -> u64 {
    let mut mask = 0u64;
    rank_idx += step;
    while rank_idx >= 0 && rank_idx < 8 {
        let mut scan_file = file_idx - width;
        while scan_file <= file_idx + width {
            if scan_file >= 0 && scan_file < 8 {
                mask |= 1u64 << ((rank_idx as u64) * 8 + scan_file as u64);
            }
            scan_file += 1;
        }
        rank_idx += step;
    }
    mask
}

// A pawn with n moves left reaches the queening square q after n of its own
// moves. With the pawn's side to move the defender gets n - 1 moves plus the
// capture, so it must start within n of q; a defender on move gets one more.
const fn square_rule_masks(tempo: i8) -> [[BitBoard; 64]; 2] {
    let mut table = [[BitBoard::EMPTY; 64]; 2];
    let mut color_idx = 0;
    while color_idx < 2 {
        let mut square_idx = 0;
        while square_idx < 64 {
            let file_idx = (square_idx % 8) as i8;
            let rank_idx = (square_idx / 8) as i8;
            let relative = if color_idx == 0 { rank_idx } else { 7 - rank_idx };

            if relative >= 1 && relative <= 6 {
                let mut moves = 7 - relative;
                if relative == 1 {
                    moves -= 1; // double push
                }
                let queening = if color_idx == 0 { 56 + file_idx } else { file_idx };

                let mut mask = 0u64;
                let mut king = 0;
                while king < 64 {
                    if (chebyshev(king as i8, queening) as i8) <= moves + tempo {
                        mask |= 1u64 << king;
                    }
                    king += 1;
                }
                table[color_idx][square_idx] = BitBoard(mask);
            }
            square_idx += 1;
        }
        color_idx += 1;
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_isolated_masks_edges() {
        assert_eq!(isolated(File::A), File::B.bitboard());
        assert_eq!(isolated(File::H), File::G.bitboard());
        assert_eq!(isolated(File::E), File::D.bitboard() | File::F.bitboard());
    }

    #[test]
    fn test_in_front_is_strictly_ahead() {
        let mask = in_front(Color::White, Square::E4);
        assert!(mask.has(Square::E5));
        assert!(mask.has(Square::E8));
        assert!(!mask.has(Square::E4));
        assert!(!mask.has(Square::E3));
        assert_eq!(mask.len(), 4);

        let mask = in_front(Color::Black, Square::E4);
        assert!(mask.has(Square::E1));
        assert!(!mask.has(Square::E5));
        assert_eq!(mask.len(), 3);
    }

    #[test]
    fn test_passed_mask_covers_adjacent_files() {
        let mask = passed(Color::White, Square::A6);
        assert!(mask.has(Square::A7));
        assert!(mask.has(Square::B8));
        assert!(!mask.has(Square::C7));
        assert_eq!(mask.len(), 4);
    }

    #[test]
    fn test_distance() {
        assert_eq!(distance(Square::A1, Square::H8), 7);
        assert_eq!(distance(Square::E4, Square::E4), 0);
        assert_eq!(distance(Square::B2, Square::D3), 2);
    }

    #[test]
    fn test_up_shifts_towards_promotion() {
        let bb = Square::E4.bitboard();
        assert_eq!(up(bb, Color::White), Square::E5.bitboard());
        assert_eq!(up(bb, Color::Black), Square::E3.bitboard());
        assert!(up(Square::E8.bitboard(), Color::White).is_empty());
    }

    #[test]
    fn test_square_rule() {
        // e5 pawn needs 3 moves to reach e8
        let tight = square_rule(Color::White, Square::E5);
        let wide = square_rule_ex(Color::White, Square::E5);
        assert!(tight.has(Square::B5));
        assert!(!tight.has(Square::A5));
        assert!(wide.has(Square::A5));
        assert!(!wide.has(Square::A1));
        assert!((tight & !wide).is_empty());

        // Double push from the second rank
        let black = square_rule(Color::Black, Square::D7);
        assert!(black.has(Square::H6));
        assert!(!black.has(Square::H7));
    }

    #[test]
    fn test_step() {
        assert_eq!(step(Color::White, Square::E4), Some(Square::E5));
        assert_eq!(step(Color::Black, Square::E4), Some(Square::E3));
        assert_eq!(step(Color::White, Square::E8), None);
    }

    #[test]
    fn test_relative_rank() {
        assert_eq!(relative_rank(Color::White, Square::C2), 1);
        assert_eq!(relative_rank(Color::Black, Square::C7), 1);
        assert_eq!(relative_rank(Color::Black, Square::C2), 6);
    }
}
