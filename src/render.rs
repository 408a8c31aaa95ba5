//! Offline renderer approximating the analog output stage.
//!
//! The device plays engine samples through PWM and a first-order RC filter.
//! For listening tests on a host, the renderer holds each engine sample for
//! `output_rate / engine_rate` output samples and runs the result through the
//! same one-pole low pass. Floating point is confined to this module and is
//! never touched by [`Engine::tick`].

use crate::engine::Engine;

/// Default output rate of the renderer in Hz.
pub const OUTPUT_SAMPLE_RATE_HZ: u32 = 48_000;

/// Default corner frequency of the output RC filter in Hz.
pub const RC_CUTOFF_HZ: f32 = 3_000.0;

/// First-order low pass matching the analog RC stage.
#[derive(Debug, Default, Clone, Copy)]
pub struct RcFilter {
    alpha: f32,
    state: f32,
}

impl RcFilter {
    pub fn new(cutoff_hz: f32, sample_rate_hz: f32) -> Self {
        let omega = 2.0 * core::f32::consts::PI * cutoff_hz;
        Self {
            alpha: omega / (omega + sample_rate_hz),
            state: 0.0,
        }
    }

    pub fn reset(&mut self) {
        self.state = 0.0;
    }

    #[inline]
    pub fn process(&mut self, x: f32) -> f32 {
        self.state += self.alpha * (x - self.state);
        self.state
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Renderer {
    filter: RcFilter,
    upsample_factor: u32,
    output_rate_hz: u32,

    held_sample: i16,
    hold_remaining: u32,
}

impl Renderer {
    /// Renderer for an engine running at `engine_rate_hz`. The upsample
    /// factor is the integer ratio of the rates, at least 1.
    pub fn new(engine_rate_hz: u32, output_rate_hz: u32, cutoff_hz: f32) -> Self {
        let upsample_factor = (output_rate_hz / engine_rate_hz.max(1)).max(1);
        Self {
            filter: RcFilter::new(cutoff_hz, output_rate_hz as f32),
            upsample_factor,
            output_rate_hz,
            held_sample: 0,
            hold_remaining: 0,
        }
    }

    /// Renderer matching `engine` with the default output rate and cutoff.
    pub fn for_engine(engine: &Engine) -> Self {
        Self::new(engine.sample_rate().hz, OUTPUT_SAMPLE_RATE_HZ, RC_CUTOFF_HZ)
    }

    pub fn reset(&mut self) {
        self.filter.reset();
        self.held_sample = 0;
        self.hold_remaining = 0;
    }

    #[inline]
    pub fn output_rate_hz(&self) -> u32 {
        self.output_rate_hz
    }

    #[inline]
    pub fn upsample_factor(&self) -> u32 {
        self.upsample_factor
    }

    /// Next filtered output sample in `-1.0..=1.0`. Ticks `engine` once every
    /// `upsample_factor` calls.
    #[inline]
    pub fn next(&mut self, engine: &mut Engine) -> f32 {
        if self.hold_remaining == 0 {
            self.held_sample = engine.tick();
            self.hold_remaining = self.upsample_factor - 1;
        } else {
            self.hold_remaining -= 1;
        }

        let x = self.held_sample as f32 / 32768.0;
        self.filter.process(x).clamp(-1.0, 1.0)
    }

    /// Next filtered output sample as 16-bit PCM, truncated toward zero.
    #[inline]
    pub fn next_pcm(&mut self, engine: &mut Engine) -> i16 {
        (self.next(engine) * 32767.0) as i16
    }

    pub fn render(&mut self, engine: &mut Engine, out: &mut [i16]) {
        for sample in out.iter_mut() {
            *sample = self.next_pcm(engine);
        }
    }

    /// Output samples covering `duration_ms`.
    pub fn samples_for_ms(&self, duration_ms: u32) -> usize {
        (duration_ms as u64 * self.output_rate_hz as u64 / 1000) as usize
    }
}
