//! Geiger click waveform data.
//!
//! The attack is a recorded tube discharge trimmed to 64 samples at 16 kHz.
//! Its gain curve is derived from a 16-bit exponential decay factor and is
//! evaluated at compile time.

/// Samples played from the recorded attack before switching to the tail.
pub const ATTACK_SAMPLES: usize = 64;

/// Attack envelope value at the first sample (full scale).
pub const ATTACK_INITIAL_ENVELOPE: u16 = 65535;

/// Per-sample attack decay factor, as `value / 65536`.
pub const ATTACK_DECAY_FACTOR: u16 = 65535;

/// Recorded attack waveform.
#[rustfmt::skip]
pub static GEIGER_ATTACK: [i16; ATTACK_SAMPLES] = [
    -24832, -14592, 24320, 32512, 6400, -19712, -13568, 11776,
    30464, 27904, 2816, -29440, -26624, 5120, 18688, 8448,
    -13312, -28672, -768, 19712, 3072, -14848, -8704, -2048,
    3072, 2304, -7680, -4864, 6400, 9472, -1536, -1280,
    -7450, -3917, 5842, 6989, 1231, -3393, -2090, 1623,
    3757, 3080, 278, -2602, -2105, 362, 1183, 479,
    -675, -1301, -31, 716, 100, -432, -227, -48,
    64, 43, -128, -73, 86, 113, -16, -12,
];

/// Attack gain per sample index.
pub static ATTACK_ENVELOPE: [u16; ATTACK_SAMPLES] =
    exponential_decay(ATTACK_INITIAL_ENVELOPE, ATTACK_DECAY_FACTOR);

/// Applies one 16-bit fixed-point decay step.
#[inline]
pub const fn decay_step(value: u16, factor: u16) -> u16 {
    ((value as u32 * factor as u32) >> 16) as u16
}

/// Builds an envelope table by applying `factor` iteratively to `initial`.
pub const fn exponential_decay<const N: usize>(initial: u16, factor: u16) -> [u16; N] {
    let mut table = [0; N];
    let mut value = initial;
    let mut i = 0;
    while i < N {
        table[i] = value;
        value = decay_step(value, factor);
        i += 1;
    }
    table
}
