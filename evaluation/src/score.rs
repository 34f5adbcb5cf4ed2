use std::fmt;
use std::ops::{AddAssign, Neg, SubAssign};

/// Middlegame (mg) and endgame (eg) value pair, interpolated by game phase
/// once evaluation is complete.
///
/// The mutating methods return `&mut Self` so terms can be combined in
/// order, e.g. `total.clear().add(white).sub(black).apply(weight)`.
///
/// <https://www.chessprogramming.org/Tapered_Eval>
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Score {
    pub midgame: i32,
    pub endgame: i32,
}

impl Score {
    pub const ZERO: Score = Score::new(0, 0);

    #[inline(always)]
    pub const fn new(midgame: i32, endgame: i32) -> Self {
        Self { midgame, endgame }
    }

    #[inline(always)]
    pub fn clear(&mut self) -> &mut Self {
        *self = Self::ZERO;
        self
    }

    #[inline(always)]
    pub fn add(&mut self, other: Score) -> &mut Self {
        self.midgame += other.midgame;
        self.endgame += other.endgame;
        self
    }

    #[inline(always)]
    pub fn sub(&mut self, other: Score) -> &mut Self {
        self.midgame -= other.midgame;
        self.endgame -= other.endgame;
        self
    }

    /// Scales both phases by a weight given in percent per phase.
    #[inline(always)]
    pub fn apply(&mut self, weight: Score) -> &mut Self {
        self.midgame = self.midgame * weight.midgame / 100;
        self.endgame = self.endgame * weight.endgame / 100;
        self
    }

    /// Nudges the endgame value only.
    #[inline(always)]
    pub fn adjust(&mut self, delta: i32) -> &mut Self {
        self.endgame += delta;
        self
    }

    /// Returns the interpolated value based on game phase (1.0 = opening, 0.0 = endgame).
    #[inline(always)]
    pub fn blend(self, phase: f32) -> i16 {
        ((self.midgame as f32 * phase) + (self.endgame as f32 * (1.0 - phase))).round() as i16
    }
}

impl AddAssign for Score {
    #[inline(always)]
    fn add_assign(&mut self, rhs: Score) {
        self.add(rhs);
    }
}

impl SubAssign for Score {
    #[inline(always)]
    fn sub_assign(&mut self, rhs: Score) {
        self.sub(rhs);
    }
}

impl Neg for Score {
    type Output = Score;

    #[inline(always)]
    fn neg(self) -> Score {
        Score::new(-self.midgame, -self.endgame)
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.midgame, self.endgame)
    }
}
