use cozy_chess::{BitBoard, Color};
use evaluation::Score;

/// Marks a king square that has not been evaluated for the cached structure.
/// Never equal to a real square index (0..=63).
pub const UNSET_KING: u8 = 0xFF;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PawnEntry {
    pub key: u64,
    pub score: Score,
    pub king: [u8; Color::NUM],
    pub cover: [Score; Color::NUM],
    pub passers: [BitBoard; Color::NUM],
}

impl Default for PawnEntry {
    fn default() -> Self {
        Self {
            key: 0,
            score: Score::ZERO,
            king: [UNSET_KING; Color::NUM],
            cover: [Score::ZERO; Color::NUM],
            passers: [BitBoard::EMPTY; Color::NUM],
        }
    }
}

// Pawn structures change very little between moves, so the structure score
// and the passed pawn sets are reused while the pawn key stays the same.
//
// Direct mapped: a key owns exactly one slot and a colliding key simply
// overwrites it. Every reuse is gated on `entry.key == key`.
//
// Not synchronized. Each thread must own its own cache, a shared one would
// let a reader see a matching key next to a half written payload.
pub struct PawnCache {
    entries: Vec<PawnEntry>,
    mask: usize,
}

impl PawnCache {
    /// Capacity is rounded up to a power of two, with at least one slot.
    pub fn new(entries: usize) -> Self {
        let size = entries.max(1).next_power_of_two();
        Self {
            entries: vec![PawnEntry::default(); size],
            mask: size - 1,
        }
    }

    #[inline(always)]
    pub(crate) fn index(&self, key: u64) -> usize {
        (key as usize) & self.mask
    }

    /// Returns the slot for `key`. The slot may hold another structure,
    /// callers must compare `key` before trusting its contents.
    #[inline(always)]
    pub fn probe(&mut self, key: u64) -> &mut PawnEntry {
        let index = self.index(key);
        &mut self.entries[index]
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.fill(PawnEntry::default());
    }
}
