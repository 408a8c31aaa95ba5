//! Square-wave beep generator driven by a 32-bit phase accumulator.

use crate::SampleRate;

/// Lowest beep frequency; requests below are raised to it.
pub const BEEP_MIN_FREQ_HZ: u16 = 200;

/// Highest beep frequency; requests above are lowered to it.
pub const BEEP_MAX_FREQ_HZ: u16 = 3000;

/// Output amplitude per level step. Level 255 maps to 32640.
pub const BEEP_AMPLITUDE_PER_LEVEL: i32 = 128;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BeepOscillator {
    phase: u32,
    phase_step: u32,
    samples_remaining: u32,
    level: u8,

    sample_rate: SampleRate,
}

impl Default for BeepOscillator {
    fn default() -> Self {
        Self::new(SampleRate::default())
    }
}

impl BeepOscillator {
    pub fn new(sample_rate: SampleRate) -> Self {
        Self {
            phase: 0,
            phase_step: 0,
            samples_remaining: 0,
            level: 0,
            sample_rate,
        }
    }

    pub fn init(&mut self) {
        self.stop();
    }

    /// (Re)starts a tone. Frequency is clamped to the supported range; a zero
    /// duration or zero level silences the oscillator instead.
    pub fn start(&mut self, freq_hz: u16, duration_ms: u16, level: u8) {
        let freq_hz = freq_hz.clamp(BEEP_MIN_FREQ_HZ, BEEP_MAX_FREQ_HZ);
        let samples = self.sample_rate.samples_for_ms(duration_ms);

        if samples == 0 || level == 0 {
            self.samples_remaining = 0;
            self.level = 0;
            return;
        }

        self.level = level;
        self.samples_remaining = samples;
        self.phase_step = self.sample_rate.phase_step_32(freq_hz as u32);
    }

    /// Clears all oscillator state.
    pub fn stop(&mut self) {
        self.phase = 0;
        self.phase_step = 0;
        self.samples_remaining = 0;
        self.level = 0;
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.samples_remaining > 0
    }

    #[inline]
    pub fn samples_remaining(&self) -> u32 {
        self.samples_remaining
    }

    #[inline]
    pub fn phase_step(&self) -> u32 {
        self.phase_step
    }

    #[inline]
    pub fn next(&mut self) -> i16 {
        if !self.is_active() {
            return 0;
        }

        let high = self.phase & 0x8000_0000 != 0;
        self.phase = self.phase.wrapping_add(self.phase_step);
        self.samples_remaining -= 1;

        let amplitude = self.level as i32 * BEEP_AMPLITUDE_PER_LEVEL;
        if high {
            amplitude as i16
        } else {
            -amplitude as i16
        }
    }
}
