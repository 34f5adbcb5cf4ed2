use cozy_chess::{Board, Color, Piece};

/// Key of a board without pawns. Non-zero so that a zeroed cache slot
/// never claims to hold a real pawn structure.
pub const NO_PAWNS_KEY: u64 = 0x6A09_E667_F3BC_C908;

const SEED: u64 = 0x2545_F491_4F6C_DD1D;

/// Random keys for pawns: [color][square]. Generated at compile time from a
/// fixed seed so keys are identical across runs.
///
/// <https://www.chessprogramming.org/Zobrist_Hashing>
pub static PAWN_KEYS: [[u64; 64]; 2] = {
    let mut table = [[0u64; 64]; 2];
    let mut state = SEED;
    let mut color_idx = 0;
    while color_idx < 2 {
        let mut square_idx = 0;
        while square_idx < 64 {
            let (next, key) = splitmix64(state);
            state = next;
            table[color_idx][square_idx] = key;
            square_idx += 1;
        }
        color_idx += 1;
    }
    table
};

const fn splitmix64(state: u64) -> (u64, u64) {
    let state = state.wrapping_add(0x9E37_79B9_7F4A_7C15);
    let mut z = state;
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    (state, z ^ (z >> 31))
}

/// Hash of the pawn placement only. Positions that differ in pieces other
/// than pawns share a key.
pub fn pawn_key(board: &Board) -> u64 {
    let mut key = NO_PAWNS_KEY;
    for color in [Color::White, Color::Black] {
        for sq in board.colored_pieces(color, Piece::Pawn) {
            key ^= PAWN_KEYS[color as usize][sq as usize];
        }
    }
    key
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pawnless_board_has_non_zero_key() {
        let board: Board = "k7/8/8/8/8/8/8/K7 w - - 0 1".parse().unwrap();
        assert_eq!(pawn_key(&board), NO_PAWNS_KEY);
        assert_ne!(pawn_key(&board), 0);
    }

    #[test]
    fn test_pieces_do_not_change_key() {
        let a: Board = "k7/p7/8/8/8/8/4P3/K7 w - - 0 1".parse().unwrap();
        let b: Board = "k7/p7/8/3q4/8/2N5/4P3/K7 b - - 0 1".parse().unwrap();
        assert_eq!(pawn_key(&a), pawn_key(&b));
    }

    #[test]
    fn test_pawn_color_matters() {
        let white: Board = "k7/8/8/8/8/8/4P3/K7 w - - 0 1".parse().unwrap();
        let black: Board = "k7/8/8/8/8/8/4p3/K7 w - - 0 1".parse().unwrap();
        assert_ne!(pawn_key(&white), pawn_key(&black));
    }

    #[test]
    fn test_keys_are_distinct() {
        let mut keys: Vec<u64> = PAWN_KEYS.iter().flatten().copied().collect();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), 128);
    }
}
