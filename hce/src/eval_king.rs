use super::HCEConfig;
use crate::context::EvalContext;
use cozy_chess::{BitBoard, Color};
use evaluation::Score;
use utils::masks::{isolated, up};

// Pawn cover in front of the king. Depends only on pawns and the king
// square, so the result is kept in the pawn cache next to the structure.
// Middlegame only: the king leaves its shelter in the endgame.
#[inline(always)]
pub(crate) fn evaluate(ctx: &EvalContext, color: Color, config: &HCEConfig) -> Score {
    let window = king_files_window(ctx, color);
    let my_pawns = ctx.pawns_for(color) & window;
    let their_pawns = ctx.pawns_for(!color) & window;

    let mut cover = pawn_shield_bonus(ctx, color, my_pawns, config);
    cover -= king_file_penalty(my_pawns, their_pawns, config);

    Score::new(cover, 0)
}

// Own pawns one and two ranks ahead of the king, the closer ones weigh more.
#[inline(always)]
fn pawn_shield_bonus(ctx: &EvalContext, color: Color, my_pawns: BitBoard, config: &HCEConfig) -> i32 {
    let rank = ctx.king_sq_for(color).rank().bitboard();
    let front_rank_1 = up(rank, color);
    let front_rank_2 = up(front_rank_1, color);

    let shield_r1 = (my_pawns & front_rank_1).len() as i32;
    let shield_r2 = (my_pawns & front_rank_2).len() as i32;
    shield_r1 * config.king_shield_r1_bonus + shield_r2 * config.king_shield_r2_bonus
}

// Open/semi-open files next to the king increase exposure.
#[inline(always)]
fn king_file_penalty(my_pawns: BitBoard, their_pawns: BitBoard, config: &HCEConfig) -> i32 {
    match my_pawns.len() {
        0 if their_pawns.is_empty() => config.king_open_file_penalty,
        0 => config.king_semi_open_file_penalty,
        1 => config.king_thin_cover_penalty,
        _ => 0,
    }
}

#[inline(always)]
fn king_files_window(ctx: &EvalContext, color: Color) -> BitBoard {
    let file = ctx.king_sq_for(color).file();
    file.bitboard() | isolated(file)
}
