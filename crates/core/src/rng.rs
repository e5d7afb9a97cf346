//! RNG module - uniform next-piece selection
//!
//! The game keeps a single lookahead slot: the kind that spawns next. After
//! every spawn the slot is refilled with a kind drawn uniformly from all
//! seven, independent of history (no bag).
//!
//! A small seeded LCG keeps games reproducible for tests and replays.

use crate::types::PieceKind;

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    ///
    /// Multiply-shift on the full word, so the weak low bits of the LCG do
    /// not decide the result.
    pub fn next_range(&mut self, max: u32) -> u32 {
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
    }

    /// Current internal state
    pub fn state(&self) -> u32 {
        self.state
    }
}

/// Single-slot lookahead of the next piece kind
#[derive(Debug, Clone)]
pub struct NextKindQueue {
    next: PieceKind,
    rng: SimpleRng,
    seed: u32,
}

impl NextKindQueue {
    /// Create a queue with the given seed and fill the lookahead slot
    pub fn new(seed: u32) -> Self {
        let mut rng = SimpleRng::new(seed);
        let next = Self::roll(&mut rng);
        Self { next, rng, seed }
    }

    fn roll(rng: &mut SimpleRng) -> PieceKind {
        PieceKind::ALL[rng.next_range(PieceKind::ALL.len() as u32) as usize]
    }

    /// The kind that will spawn next
    pub fn peek(&self) -> PieceKind {
        self.next
    }

    /// Take the queued kind and refill the slot
    pub fn draw(&mut self) -> PieceKind {
        let kind = self.next;
        self.next = Self::roll(&mut self.rng);
        kind
    }

    /// Seed the queue was created with (for restarting with the same sequence)
    pub fn seed(&self) -> u32 {
        self.seed
    }

    /// Current RNG state; reseeding a new queue with it continues the stream
    pub fn rng_state(&self) -> u32 {
        self.rng.state()
    }
}

impl Default for NextKindQueue {
    fn default() -> Self {
        Self::new(1)
    }
}
