use super::HCEConfig;
use crate::context::EvalContext;
use cozy_chess::{get_rook_moves, BitBoard, Color, Square};
use evaluation::Score;
use utils::masks::{distance, in_front, relative_rank, square_rule, square_rule_ex, step};
use utils::{has_non_pawn_material, majors};

/// Scores the passed pawns of `color` found by the structure pass.
pub(crate) fn evaluate(
    ctx: &EvalContext,
    color: Color,
    passers: BitBoard,
    config: &HCEConfig,
) -> Score {
    let board = ctx.board();
    let rival = !color;

    // With only king and pawns left the rival can stop a passer with the king alone
    let chase = !has_non_pawn_material(board, rival);

    let mut score = Score::ZERO;
    for sq in passers {
        let rank = relative_rank(color, sq);
        let mut bonus = config.passed_pawn_bonus[rank];

        if rank > 1 {
            if let Some(next) = step(color, sq) {
                let extra = config.passed_pawn_extra[rank];

                bonus.endgame += king_proximity(ctx, color, next, config) * extra;

                let boost = advance_safety(ctx, color, sq, next, config);
                if boost > 0 {
                    bonus.adjust(extra * boost);
                }
            }
        }

        if chase && is_unstoppable(ctx, color, sq) {
            bonus.endgame += config.unstoppable_pawn_bonus;
        }

        score.add(bonus);
    }

    score
}

// Rival king far from the step square is good, own king close is good
#[inline(always)]
fn king_proximity(ctx: &EvalContext, color: Color, next: Square, config: &HCEConfig) -> i32 {
    distance(ctx.king_sq_for(!color), next) * config.rival_king_distance_weight
        - distance(ctx.king_sq_for(color), next) * config.own_king_distance_weight
}

// Bonus for a free and protected path, before the `extra` multiplier.
fn advance_safety(
    ctx: &EvalContext,
    color: Color,
    sq: Square,
    next: Square,
    config: &HCEConfig,
) -> i32 {
    let board = ctx.board();
    let rival = !color;

    if board.occupied().has(next) {
        return 0;
    }

    let mut boost = 0;

    let mut attacked = in_front(color, sq);
    let protected = attacked & ctx.attacks_for(color);
    if protected == attacked {
        boost += config.protected_path_bonus;
    } else if protected.has(next) {
        boost += config.protected_step_bonus;
    }

    // A rook or queen behind the pawn on its file x-rays the whole path.
    // Without one only squares the rival attacks or occupies count.
    let behind = in_front(rival, sq) & majors(board, rival);
    if (behind & get_rook_moves(sq, board.occupied())).is_empty() {
        attacked &= ctx.attacks_for(rival) | board.colors(rival);
    }

    if attacked.is_empty() {
        boost += config.free_path_bonus;
    } else if !attacked.has(next) {
        boost += config.free_step_bonus;
    }

    boost
}

// https://www.chessprogramming.org/Rule_of_the_Square
fn is_unstoppable(ctx: &EvalContext, color: Color, sq: Square) -> bool {
    let board = ctx.board();

    // Own pieces in front would have to move out of the way first
    if !(board.colors(color) & in_front(color, sq)).is_empty() {
        return false;
    }

    // The defending king gets one more tempo when it is the side to move
    let mask = if board.side_to_move() == color {
        square_rule(color, sq)
    } else {
        square_rule_ex(color, sq)
    };
    !mask.has(ctx.king_sq_for(!color))
}
