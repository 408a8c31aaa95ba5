//! Single Geiger click voice.
//!
//! A click is a recorded 64-sample attack shaped by a precomputed envelope,
//! followed by a damped ~440 Hz tone with slight pitch jitter and a little
//! blended noise. The tail envelope decays exponentially in 16-bit fixed point
//! until it reaches zero or the tail runs out of time.

use crate::mixer::saturate;
use crate::noise::Lfsr;
use crate::resources::geiger::decay_step;
use crate::resources::{ATTACK_ENVELOPE, ATTACK_SAMPLES, GEIGER_ATTACK, LUT_SINE};
use crate::SampleRate;

/// Total voice lifetime in samples (80 ms at 16 kHz).
pub const TAIL_MAX_SAMPLES: u16 = 1280;

/// Tail envelope at the start of a click.
pub const TAIL_INITIAL_ENVELOPE: u16 = 10_000;

/// Per-sample tail decay factor, as `value / 65536` (~0.996).
pub const TAIL_DECAY_FACTOR: u16 = 65_300;

/// Frequency of the damped tail tone.
pub const TAIL_BASE_FREQUENCY_HZ: u32 = 440;

const TAIL_JITTER_MASK: u16 = 0x3F;
const TAIL_JITTER_OFFSET: i32 = 32;
const TAIL_NOISE_MASK: u16 = 0x03FF;
const TAIL_NOISE_OFFSET: i32 = 512;
const TAIL_NOISE_SHIFT: u32 = 14;

/// Tail parameters derived from the sample rate once per engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TailParams {
    /// Increment of the 16-bit tail phase accumulator at the base frequency.
    pub base_phase_step: u16,
}

impl TailParams {
    pub fn new(sample_rate: SampleRate) -> Self {
        Self {
            base_phase_step: sample_rate.phase_step_16(TAIL_BASE_FREQUENCY_HZ),
        }
    }
}

impl Default for TailParams {
    fn default() -> Self {
        Self::new(SampleRate::default())
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ClickVoice {
    active: bool,
    position: u16,
    tail_envelope: u16,
    tail_phase: u16,
}

impl ClickVoice {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn init(&mut self) {
        *self = Self::default();
    }

    /// Restarts the click from its first attack sample.
    pub fn trigger(&mut self) {
        self.active = true;
        self.position = 0;
        self.tail_envelope = TAIL_INITIAL_ENVELOPE;
        self.tail_phase = 0;
    }

    /// Silences the voice immediately.
    #[inline]
    pub fn clear(&mut self) {
        self.active = false;
    }

    /// True while the voice still has samples left to produce.
    #[inline]
    pub fn is_active(&self) -> bool {
        self.active && self.position < TAIL_MAX_SAMPLES
    }

    /// Samples rendered since the last trigger.
    #[inline]
    pub fn position(&self) -> u16 {
        self.position
    }

    #[inline]
    pub fn tail_envelope(&self) -> u16 {
        self.tail_envelope
    }

    /// Renders one sample. Idle voices return 0 without touching the noise source.
    #[inline]
    pub fn next(&mut self, noise: &mut Lfsr, tail: &TailParams) -> i16 {
        if !self.active {
            return 0;
        }

        if self.position >= TAIL_MAX_SAMPLES {
            self.active = false;
            return 0;
        }

        let index = self.position as usize;
        let sample = if index < ATTACK_SAMPLES {
            let scaled = (GEIGER_ATTACK[index] as i32 * ATTACK_ENVELOPE[index] as i32) >> 16;
            scaled as i16
        } else {
            if self.tail_envelope == 0 {
                self.active = false;
                return 0;
            }
            self.next_tail_sample(noise, tail)
        };

        self.position += 1;
        sample
    }

    #[inline]
    fn next_tail_sample(&mut self, noise: &mut Lfsr, tail: &TailParams) -> i16 {
        let jitter = noise.centered(TAIL_JITTER_MASK, TAIL_JITTER_OFFSET);
        let step = (tail.base_phase_step as i32 + jitter).max(0);
        self.tail_phase = self.tail_phase.wrapping_add(step as u16);

        let envelope = self.tail_envelope as i32;
        let tone = (LUT_SINE[(self.tail_phase >> 8) as usize] as i32 * envelope) >> 16;
        let grain = noise.centered(TAIL_NOISE_MASK, TAIL_NOISE_OFFSET);
        let hiss = (grain * envelope) >> TAIL_NOISE_SHIFT;

        self.tail_envelope = decay_step(self.tail_envelope, TAIL_DECAY_FACTOR);

        saturate(tone + hiss)
    }
}
