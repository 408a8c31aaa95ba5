//! 16-bit maximal-length linear-feedback shift register.
//!
//! Galois form with taps at bits 16, 14, 13 and 11. From any non-zero seed the
//! register walks all 65535 non-zero states before repeating. The same stream
//! feeds burst timing and the noise texture of the click tail, so a given
//! trigger sequence always renders bit-identically.

/// Seed loaded at construction and whenever the register would lock up at 0.
pub const LFSR_SEED: u16 = 0xACE1;

/// Feedback mask for the x^16 + x^14 + x^13 + x^11 + 1 polynomial.
pub const LFSR_TAPS: u16 = 0xB400;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lfsr {
    state: u16,
}

impl Default for Lfsr {
    fn default() -> Self {
        Self::new()
    }
}

impl Lfsr {
    pub fn new() -> Self {
        Self { state: LFSR_SEED }
    }

    /// Starts from `seed`, substituting [`LFSR_SEED`] for zero.
    pub fn with_seed(seed: u16) -> Self {
        let mut lfsr = Self::new();
        lfsr.seed(seed);
        lfsr
    }

    pub fn init(&mut self) {
        self.state = LFSR_SEED;
    }

    #[inline]
    pub fn seed(&mut self, seed: u16) {
        self.state = if seed == 0 { LFSR_SEED } else { seed };
    }

    #[inline]
    pub fn state(&self) -> u16 {
        self.state
    }

    /// Advances the register by one step and returns the new state.
    #[inline]
    pub fn next(&mut self) -> u16 {
        let lsb = self.state & 1;
        let mut state = self.state >> 1;
        if lsb != 0 {
            state ^= LFSR_TAPS;
        }
        if state == 0 {
            state = LFSR_SEED;
        }
        self.state = state;
        state
    }

    /// Draws a value in `min..=max`. Swapped bounds are accepted.
    #[inline]
    pub fn ranged(&mut self, min: u16, max: u16) -> u16 {
        let (min, max) = if min > max { (max, min) } else { (min, max) };
        let span = (max - min) as u32 + 1;
        min + (self.next() as u32 % span) as u16
    }

    /// Draws a value centered on zero: `(r & mask) - offset`.
    #[inline]
    pub fn centered(&mut self, mask: u16, offset: i32) -> i32 {
        (self.next() & mask) as i32 - offset
    }
}
