use arrayvec::ArrayVec;
use std::fmt;

use crate::Score;

/// Evaluation terms reported while tracing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Term {
    Pawns,
    Passers,
}

impl Term {
    pub const ALL: [Term; 2] = [Term::Pawns, Term::Passers];

    pub fn name(self) -> &'static str {
        match self {
            Term::Pawns => "Pawns",
            Term::Passers => "Passers",
        }
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Diagnostics hook. Receives the white and black halves of a term right
/// after the term has been computed.
pub trait Tracer {
    fn checkpoint(&mut self, term: Term, white: Score, black: Score);
}

/// Diagnostics off.
impl Tracer for () {
    #[inline(always)]
    fn checkpoint(&mut self, _term: Term, _white: Score, _black: Score) {}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Checkpoint {
    pub term: Term,
    pub white: Score,
    pub black: Score,
}

/// Collects one checkpoint per term, in the order terms were first reported.
/// Reporting a term again replaces its earlier values.
#[derive(Debug, Clone, Default)]
pub struct Breakdown {
    checkpoints: ArrayVec<Checkpoint, { Term::ALL.len() }>,
}

impl Breakdown {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn checkpoints(&self) -> &[Checkpoint] {
        &self.checkpoints
    }

    pub fn get(&self, term: Term) -> Option<&Checkpoint> {
        self.checkpoints.iter().find(|c| c.term == term)
    }

    pub fn clear(&mut self) {
        self.checkpoints.clear();
    }
}

impl Tracer for Breakdown {
    fn checkpoint(&mut self, term: Term, white: Score, black: Score) {
        let checkpoint = Checkpoint { term, white, black };
        match self.checkpoints.iter_mut().find(|c| c.term == term) {
            Some(existing) => *existing = checkpoint,
            None => self.checkpoints.push(checkpoint),
        }
    }
}
