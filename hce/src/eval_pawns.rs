use super::HCEConfig;
use crate::context::EvalContext;
use cozy_chess::{get_pawn_attacks, BitBoard, Color, Square};
use evaluation::Score;
use utils::masks::{in_front, isolated, passed, relative_rank, step, up};

/// Structural predicates for a single pawn.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PawnFlags {
    pub isolated: bool,    // no own pawn on adjacent files
    pub exposed: bool,     // no enemy pawn ahead on the same file
    pub doubled: bool,     // own pawn ahead on the same file
    pub supported: bool,   // own pawn beside it or one rank behind on an adjacent file
    pub passed: bool,
    pub backward: bool,
    pub semi_passed: bool, // candidate: own helpers outnumber the enemy sentries
}

pub fn classify(sq: Square, color: Color, my_pawns: BitBoard, enemy_pawns: BitBoard) -> PawnFlags {
    let file = sq.file();
    let neighbours = isolated(file);
    let rank = sq.rank().bitboard();

    let isolated = (neighbours & my_pawns).is_empty();
    let exposed = (in_front(color, sq) & enemy_pawns).is_empty();
    let doubled = !(in_front(color, sq) & my_pawns).is_empty();
    let supported = !(neighbours & (rank | up(rank, !color)) & my_pawns).is_empty();

    // A pawn with a friend in front of it is never the passer on its file
    let passed = !doubled && (passed(color, sq) & enemy_pawns).is_empty();

    let backward = !passed
        && !supported
        && !isolated
        && is_backward(sq, color, my_pawns, enemy_pawns);

    let semi_passed = exposed
        && !isolated
        && !passed
        && !backward
        && is_semi_passed(sq, color, my_pawns, enemy_pawns);

    PawnFlags {
        isolated,
        exposed,
        doubled,
        supported,
        passed,
        backward,
        semi_passed,
    }
}

/// Scores the pawn structure of `color` and returns it with the set of its
/// passed pawns.
pub(crate) fn evaluate(ctx: &EvalContext, color: Color, config: &HCEConfig) -> (Score, BitBoard) {
    let my_pawns = ctx.pawns_for(color);
    let enemy_pawns = ctx.pawns_for(!color);

    let mut score = Score::ZERO;
    let mut passers = BitBoard::EMPTY;

    for sq in my_pawns {
        let flags = classify(sq, color, my_pawns, enemy_pawns);
        let file = sq.file() as usize;

        if flags.passed {
            passers |= sq.bitboard();
        }

        if flags.isolated {
            if flags.exposed {
                score.sub(config.weak_isolated_pawn_penalty[file]);
            } else {
                score.sub(config.isolated_pawn_penalty[file]);
            }
        } else if !flags.supported {
            score.sub(config.unsupported_pawn_penalty);
        }

        if flags.doubled {
            score.sub(config.doubled_pawn_penalty[file]);
        }

        if flags.backward {
            if flags.exposed {
                score.sub(config.weak_backward_pawn_penalty[file]);
            } else {
                score.sub(config.backward_pawn_penalty[file]);
            }
        }

        if flags.semi_passed {
            score.add(config.semi_passed_pawn_bonus[relative_rank(color, sq)]);
        }
    }

    (score, passers)
}

// https://www.chessprogramming.org/Backward_Pawn
//
// Only asked for pawns that are neither passed, supported nor isolated.
fn is_backward(sq: Square, color: Color, my_pawns: BitBoard, enemy_pawns: BitBoard) -> bool {
    let attacks = get_pawn_attacks(sq, color);

    // Not backward while it is attacking enemy pawns
    if !(attacks & enemy_pawns).is_empty() {
        return false;
    }

    // Friendly pawns behind on adjacent files can still come up to help
    if !(passed(!color, sq) & isolated(sq.file()) & my_pawns).is_empty() {
        return false;
    }

    // Enemy pawns guarding the next two steps hold it back
    let one = up(attacks, color);
    let two = up(one, color);
    !((one | two) & enemy_pawns).is_empty()
}

fn is_semi_passed(sq: Square, color: Color, my_pawns: BitBoard, enemy_pawns: BitBoard) -> bool {
    let Some(next) = step(color, sq) else {
        return false;
    };
    let neighbours = isolated(sq.file());

    let helpers = passed(!color, next) & neighbours & my_pawns;
    let sentries = passed(color, sq) & neighbours & enemy_pawns;
    helpers.len() >= sentries.len()
}
