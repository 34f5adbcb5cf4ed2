mod config;
mod context;
mod eval_king;
mod eval_passers;
mod eval_pawns;
mod pawn_cache;

pub use config::HCEConfig;
pub use eval_pawns::{classify, PawnFlags};
pub use pawn_cache::{PawnCache, PawnEntry, UNSET_KING};

use context::EvalContext;
use cozy_chess::Color;
use evaluation::{Score, Term, Tracer, HCE};
use utils::Position;

/// Hand-Crafted Evaluation of the pawn structure: structure, passed pawns
/// and king cover, with the structure memoized in a private pawn cache.
///
/// <https://www.chessprogramming.org/Pawn_Structure>
pub struct Evaluator {
    config: HCEConfig,
    pawn_cache: PawnCache,
}

impl Evaluator {
    pub fn new(config: HCEConfig) -> Self {
        Self {
            pawn_cache: PawnCache::new(config.pawn_cache_entries),
            config,
        }
    }

    pub fn config(&self) -> &HCEConfig {
        &self.config
    }

    /// Forgets every cached structure, e.g. on a new game.
    pub fn clear_cache(&mut self) {
        self.pawn_cache.clear();
    }

    /// Two-phase score from White's perspective.
    pub fn score(&mut self, position: &Position) -> Score {
        self.run(position, false, &mut ())
    }

    /// Same as [`Evaluator::score`] but bypasses cache reuse and reports the
    /// white and black halves of every term to `tracer`.
    pub fn trace<T: Tracer>(&mut self, position: &Position, tracer: &mut T) -> Score {
        self.run(position, true, tracer)
    }

    fn run<T: Tracer>(&mut self, position: &Position, trace: bool, tracer: &mut T) -> Score {
        let key = position.pawn_key();
        let mut eval = Evaluation {
            ctx: EvalContext::new(position, trace),
            config: &self.config,
            pawns: self.pawn_cache.probe(key),
            key,
            tracer,
            score: Score::ZERO,
        };

        eval.analyze_pawns();
        eval.analyze_passers();
        eval.analyze_king_cover();

        eval.score
    }
}

impl HCE for Evaluator {
    fn name(&self) -> String {
        "HCE".to_string()
    }

    /// Evaluates from White's perspective. Positive = White advantage.
    fn evaluate(&mut self, position: &Position, phase: f32) -> i16 {
        self.score(position).blend(phase)
    }
}

// State of a single evaluation call
struct Evaluation<'a, T: Tracer> {
    ctx: EvalContext<'a>,
    config: &'a HCEConfig,
    pawns: &'a mut PawnEntry,
    key: u64,
    tracer: &'a mut T,
    score: Score,
}

impl<T: Tracer> Evaluation<'_, T> {
    fn analyze_pawns(&mut self) {
        // Tracing always recomputes so every term gets reported
        if self.pawns.key != self.key || self.ctx.trace {
            let (white, white_passers) = eval_pawns::evaluate(&self.ctx, Color::White, self.config);
            let (black, black_passers) = eval_pawns::evaluate(&self.ctx, Color::Black, self.config);

            self.pawns
                .score
                .clear()
                .add(white)
                .sub(black)
                .apply(self.config.pawn_structure_weight);
            self.pawns.passers = [white_passers, black_passers];
            self.pawns.key = self.key;

            // Cover was computed for another structure
            self.pawns.king = [UNSET_KING; Color::NUM];

            if self.ctx.trace {
                self.tracer.checkpoint(Term::Pawns, white, black);
            }
        }

        self.score.add(self.pawns.score);
    }

    fn analyze_passers(&mut self) {
        let white = eval_passers::evaluate(
            &self.ctx,
            Color::White,
            self.pawns.passers[Color::White as usize],
            self.config,
        );
        let black = eval_passers::evaluate(
            &self.ctx,
            Color::Black,
            self.pawns.passers[Color::Black as usize],
            self.config,
        );

        let mut score = Score::ZERO;
        score.add(white).sub(black).apply(self.config.passed_pawn_weight);
        self.score.add(score);

        if self.ctx.trace {
            self.tracer.checkpoint(Term::Passers, white, black);
        }
    }

    fn analyze_king_cover(&mut self) {
        for color in Color::ALL {
            let king = self.ctx.king_sq_for(color) as u8;
            if self.pawns.king[color as usize] != king {
                self.pawns.cover[color as usize] = eval_king::evaluate(&self.ctx, color, self.config);
                self.pawns.king[color as usize] = king;
            }
        }

        let mut score = Score::ZERO;
        score
            .add(self.pawns.cover[Color::White as usize])
            .sub(self.pawns.cover[Color::Black as usize])
            .apply(self.config.king_cover_weight);
        self.score.add(score);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cozy_chess::{Board, Piece};
    use evaluation::Breakdown;

    const MIDDLEGAME: &str = "r3k3/pp3ppp/8/3p4/8/8/PPP2PPP/R3K3 w - - 0 1";
    const MIDDLEGAME_MIRRORED: &str = "r3k3/ppp2ppp/8/8/3P4/8/PP3PPP/R3K3 b - - 0 1";
    const RACE: &str = "8/p7/8/4P3/8/8/8/k6K w - - 0 1";
    const BACKWARD: &str = "4k3/8/8/2p5/4P3/3P4/8/4K3 w - - 0 1";

    fn board(fen: &str) -> Board {
        fen.parse().unwrap()
    }

    fn cold_score(fen: &str) -> Score {
        let board = board(fen);
        Evaluator::new(HCEConfig::default()).score(&Position::new(&board))
    }

    #[test]
    fn test_cached_score_is_stable() {
        let board = board(MIDDLEGAME);
        let mut evaluator = Evaluator::new(HCEConfig::default());

        let first = evaluator.score(&Position::new(&board));
        let key = Position::new(&board).pawn_key();
        let entry = *evaluator.pawn_cache.probe(key);

        let second = evaluator.score(&Position::new(&board));
        assert_eq!(first, second);
        assert_eq!(entry, *evaluator.pawn_cache.probe(key));
        assert_eq!(entry.key, key);
    }

    #[test]
    fn test_trace_matches_cold_score() {
        let board = board(BACKWARD);
        let position = Position::new(&board);
        let mut evaluator = Evaluator::new(HCEConfig::default());

        // Warm the slot first, tracing must still run both passes
        evaluator.score(&position);

        let mut breakdown = Breakdown::new();
        let traced = evaluator.trace(&position, &mut breakdown);
        assert_eq!(traced, cold_score(BACKWARD));

        let terms: Vec<Term> = breakdown.checkpoints().iter().map(|c| c.term).collect();
        assert_eq!(terms, vec![Term::Pawns, Term::Passers]);

        let pawns = breakdown.get(Term::Pawns).unwrap();
        assert_eq!(pawns.white, Score::new(-35, -24));
        assert_eq!(pawns.black, Score::new(-30, -25));
    }

    #[test]
    fn test_untraced_reports_nothing() {
        struct Panics;
        impl Tracer for Panics {
            fn checkpoint(&mut self, term: Term, _white: Score, _black: Score) {
                panic!("unexpected checkpoint {term}");
            }
        }

        let board = board(RACE);
        let position = Position::new(&board);
        let mut evaluator = Evaluator::new(HCEConfig::default());
        evaluator.run(&position, false, &mut Panics);
    }

    #[test]
    fn test_collision_recomputes() {
        let config = HCEConfig {
            pawn_cache_entries: 1,
            ..HCEConfig::default()
        };
        let a = board(MIDDLEGAME);
        let b = board(RACE);
        let mut evaluator = Evaluator::new(config);

        let cold_a = evaluator.score(&Position::new(&a));
        evaluator.score(&Position::new(&b));
        let again = evaluator.score(&Position::new(&a));

        assert_eq!(again, cold_a);
        assert_eq!(again, cold_score(MIDDLEGAME));
    }

    #[test]
    fn test_cached_passers_match_structure_pass() {
        let board = board(BACKWARD);
        let position = Position::new(&board);
        let mut evaluator = Evaluator::new(HCEConfig::default());
        evaluator.score(&position);

        let ctx = EvalContext::new(&position, false);
        let entry = *evaluator.pawn_cache.probe(position.pawn_key());
        for color in Color::ALL {
            let (_, passers) = eval_pawns::evaluate(&ctx, color, &HCEConfig::default());
            assert_eq!(entry.passers[color as usize], passers);
            assert!((passers & !board.colored_pieces(color, Piece::Pawn)).is_empty());
        }
    }

    #[test]
    fn test_king_move_refreshes_cover() {
        // Same pawns, the white king walked from g1 to e1
        let sheltered = "4k3/pp3ppp/8/8/8/8/PP3PPP/6K1 w - - 0 1";
        let exposed = "4k3/pp3ppp/8/8/8/8/PP3PPP/4K3 w - - 0 1";

        let mut evaluator = Evaluator::new(HCEConfig::default());
        let a = board(sheltered);
        let b = board(exposed);
        let pa = Position::new(&a);
        let pb = Position::new(&b);
        assert_eq!(pa.pawn_key(), pb.pawn_key());

        let first = evaluator.score(&pa);
        let second = evaluator.score(&pb);
        assert_eq!(second, cold_score(exposed));
        assert_ne!(first, second);

        let entry = *evaluator.pawn_cache.probe(pb.pawn_key());
        assert_eq!(entry.king[Color::White as usize], b.king(Color::White) as u8);
        assert_eq!(entry.king[Color::Black as usize], b.king(Color::Black) as u8);
    }

    #[test]
    fn test_new_structure_unsets_kings() {
        let board = board(BACKWARD);
        let position = Position::new(&board);
        let mut evaluator = Evaluator::new(HCEConfig::default());

        let mut eval = Evaluation {
            ctx: EvalContext::new(&position, false),
            config: &evaluator.config,
            pawns: evaluator.pawn_cache.probe(position.pawn_key()),
            key: position.pawn_key(),
            tracer: &mut (),
            score: Score::ZERO,
        };
        eval.analyze_pawns();
        assert_eq!(eval.pawns.king, [UNSET_KING; 2]);
        eval.analyze_king_cover();
        assert_ne!(eval.pawns.king, [UNSET_KING; 2]);
    }

    #[test]
    fn test_mirrored_position_negates_score() {
        let white = cold_score(MIDDLEGAME);
        let black = cold_score(MIDDLEGAME_MIRRORED);
        assert_eq!(white, -black);
        assert_ne!(white, Score::ZERO);
    }

    #[test]
    fn test_clear_cache() {
        let board = board(RACE);
        let position = Position::new(&board);
        let mut evaluator = Evaluator::new(HCEConfig::default());
        evaluator.score(&position);
        evaluator.clear_cache();
        assert_eq!(*evaluator.pawn_cache.probe(position.pawn_key()), PawnEntry::default());
    }

    #[test]
    fn test_weights_scale_terms() {
        let board = board(RACE);
        let position = Position::new(&board);
        let base = Evaluator::new(HCEConfig::default()).score(&position);
        let muted = Evaluator::new(HCEConfig {
            passed_pawn_weight: Score::ZERO,
            pawn_structure_weight: Score::ZERO,
            king_cover_weight: Score::ZERO,
            ..HCEConfig::default()
        })
        .score(&position);

        assert_eq!(muted, Score::ZERO);
        assert!(base.endgame > 800);
    }

    #[test]
    fn test_hce_blends_by_phase() {
        let board = board(MIDDLEGAME);
        let position = Position::new(&board);
        let mut evaluator = Evaluator::new(HCEConfig::default());
        let score = evaluator.score(&position);

        assert_eq!(evaluator.name(), "HCE");
        assert_eq!(evaluator.evaluate(&position, 1.0), score.midgame as i16);
        assert_eq!(evaluator.evaluate(&position, 0.0), score.endgame as i16);
    }
}
