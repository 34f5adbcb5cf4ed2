use evaluation::Score;

const fn s(midgame: i32, endgame: i32) -> Score {
    Score::new(midgame, endgame)
}

#[derive(Debug, Clone, Copy)]
pub struct HCEConfig {
    // Global weights in percent per phase, applied to the white - black totals
    pub pawn_structure_weight: Score,
    pub passed_pawn_weight: Score,
    pub king_cover_weight: Score,

    // Pawn structure, tables indexed by file
    pub isolated_pawn_penalty: [Score; 8],
    pub weak_isolated_pawn_penalty: [Score; 8], // isolated on a file without enemy pawns ahead
    pub doubled_pawn_penalty: [Score; 8],
    pub backward_pawn_penalty: [Score; 8],
    pub weak_backward_pawn_penalty: [Score; 8],
    pub unsupported_pawn_penalty: Score,
    pub semi_passed_pawn_bonus: [Score; 8], // by relative rank

    // Passed pawns, tables indexed by relative rank
    pub passed_pawn_bonus: [Score; 8],
    pub passed_pawn_extra: [i32; 8], // multiplier for king proximity and safe advance
    pub rival_king_distance_weight: i32,
    pub own_king_distance_weight: i32,
    pub protected_path_bonus: i32, // every square ahead defended
    pub protected_step_bonus: i32, // only the next square defended
    pub free_path_bonus: i32,      // no square ahead attacked
    pub free_step_bonus: i32,      // next square not attacked
    pub unstoppable_pawn_bonus: i32,

    // King cover
    pub king_shield_r1_bonus: i32, // pawns one rank ahead of the king
    pub king_shield_r2_bonus: i32, // pawns two ranks ahead of the king
    pub king_open_file_penalty: i32, // no pawn on either side
    pub king_semi_open_file_penalty: i32, // no our pawn, enemy pawn exists
    pub king_thin_cover_penalty: i32, // only 1 of our pawns in window

    pub pawn_cache_entries: usize,
}

impl Default for HCEConfig {
    fn default() -> Self {
        Self {
            pawn_structure_weight: s(100, 100),
            passed_pawn_weight: s(100, 100),
            king_cover_weight: s(100, 100),

            isolated_pawn_penalty: [
                s(12, 15),
                s(18, 17),
                s(20, 17),
                s(20, 17),
                s(20, 17),
                s(20, 17),
                s(18, 17),
                s(12, 15),
            ],
            weak_isolated_pawn_penalty: [
                s(18, 22),
                s(27, 25),
                s(30, 25),
                s(30, 25),
                s(30, 25),
                s(30, 25),
                s(27, 25),
                s(18, 22),
            ],
            doubled_pawn_penalty: [
                s(6, 14),
                s(9, 15),
                s(9, 15),
                s(9, 15),
                s(9, 15),
                s(9, 15),
                s(9, 15),
                s(6, 14),
            ],
            backward_pawn_penalty: [
                s(10, 12),
                s(15, 13),
                s(17, 13),
                s(17, 13),
                s(17, 13),
                s(17, 13),
                s(15, 13),
                s(10, 12),
            ],
            weak_backward_pawn_penalty: [
                s(15, 18),
                s(22, 19),
                s(25, 19),
                s(25, 19),
                s(25, 19),
                s(25, 19),
                s(22, 19),
                s(15, 18),
            ],
            unsupported_pawn_penalty: s(10, 5),
            semi_passed_pawn_bonus: [
                s(0, 0),
                s(5, 8),
                s(5, 8),
                s(11, 17),
                s(22, 34),
                s(44, 68),
                s(0, 0),
                s(0, 0),
            ],

            passed_pawn_bonus: [
                s(0, 0),
                s(2, 6),
                s(7, 12),
                s(15, 24),
                s(30, 44),
                s(52, 70),
                s(80, 100),
                s(0, 0),
            ],
            passed_pawn_extra: [0, 0, 0, 1, 3, 6, 10, 0],
            rival_king_distance_weight: 5,
            own_king_distance_weight: 2,
            protected_path_bonus: 6,
            protected_step_bonus: 4,
            free_path_bonus: 15,
            free_step_bonus: 9,
            unstoppable_pawn_bonus: 800,

            king_shield_r1_bonus: 12,
            king_shield_r2_bonus: 6,
            king_open_file_penalty: 24,
            king_semi_open_file_penalty: 12,
            king_thin_cover_penalty: 6,

            pawn_cache_entries: 16384,
        }
    }
}
