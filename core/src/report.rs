use std::fmt;

use evaluation::{Breakdown, Score};

/// Result of evaluating one position, printed in input order.
pub struct Report {
    pub fen: String,
    pub score: Score,
    pub phase: f32,
    pub centipawns: i16,
    pub breakdown: Option<Breakdown>,
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.fen)?;
        writeln!(
            f,
            "  eval {:+} cp (mg/eg {}, phase {:.2})",
            self.centipawns, self.score, self.phase
        )?;

        if let Some(breakdown) = &self.breakdown {
            writeln!(f, "  {:<10}{:>12}{:>12}", "term", "white", "black")?;
            for checkpoint in breakdown.checkpoints() {
                writeln!(
                    f,
                    "  {:<10}{:>12}{:>12}",
                    checkpoint.term.name(),
                    checkpoint.white.to_string(),
                    checkpoint.black.to_string()
                )?;
            }
        }

        Ok(())
    }
}
