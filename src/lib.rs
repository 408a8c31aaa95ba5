//! Audio synthesis engine for the anomaly detector handheld.
//!
//! The engine turns discrete trigger events (Geiger clicks, randomized click
//! bursts, square-wave beeps and named alert patterns) into a continuous stream
//! of signed 16-bit PCM samples. Everything on the per-sample path is integer
//! fixed-point, allocation-free and O(1), so [`Engine::tick`] can be called
//! straight from a timer interrupt.
//!
//! ```
//! use anomaly_audio::{BeepPattern, Engine};
//!
//! let mut engine = Engine::default();
//! engine.trigger_click();
//! engine.start_pattern(BeepPattern::Double);
//!
//! let first = engine.tick();
//! assert_ne!(first, 0);
//! ```

#![cfg_attr(not(test), no_std)]

pub mod beep;
pub mod click;
pub mod command;
pub mod config;
pub mod engine;
pub mod error;
pub mod mixer;
pub mod noise;
pub mod render;
pub mod resources;
pub mod shared;
pub mod volume;

pub use beep::pattern::BeepPattern;
pub use command::{Command, CommandQueue, Controller};
pub use config::{EngineConfig, VoiceAllocation};
pub use engine::Engine;
pub use error::Error;
pub use shared::SharedEngine;
pub use volume::Volume;

/// Canonical engine sample rate in Hz.
pub const SAMPLE_RATE_HZ: u32 = 16_000;

/// Number of click voice slots compiled into the pool.
pub const MAX_VOICES: usize = 4;

/// Length of the offline snapshot renders in milliseconds.
pub const SNAPSHOT_DURATION_MS: u32 = 2_000;

/// Sample rate context for the integer timing and phase calculations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SampleRate {
    /// Sample rate in Hz
    pub hz: u32,
}

impl SampleRate {
    /// Create a new sample rate context. Only rates accepted by
    /// [`EngineConfig::validate`] give meaningful timing; a zero rate yields
    /// zero-length durations instead of a division by zero.
    pub const fn new(hz: u32) -> Self {
        Self { hz }
    }

    /// Number of samples covering `duration_ms`, rounded up.
    #[inline]
    pub const fn samples_for_ms(&self, duration_ms: u16) -> u32 {
        ((duration_ms as u64 * self.hz as u64 + 999) / 1000) as u32
    }

    /// Rounded increment for a 32-bit phase accumulator running at `freq_hz`.
    #[inline]
    pub const fn phase_step_32(&self, freq_hz: u32) -> u32 {
        let hz = self.divisor();
        let numerator = (freq_hz as u64) << 32;
        ((numerator + hz / 2) / hz) as u32
    }

    /// Rounded increment for a 16-bit phase accumulator running at `freq_hz`.
    #[inline]
    pub const fn phase_step_16(&self, freq_hz: u32) -> u16 {
        let hz = self.divisor();
        let numerator = (freq_hz as u64) << 16;
        let step = (numerator + hz / 2) / hz;
        if step > u16::MAX as u64 {
            u16::MAX
        } else {
            step as u16
        }
    }

    /// A zero rate divides as 1 Hz.
    #[inline]
    const fn divisor(&self) -> u64 {
        if self.hz == 0 {
            1
        } else {
            self.hz as u64
        }
    }
}

impl Default for SampleRate {
    fn default() -> Self {
        Self::new(SAMPLE_RATE_HZ)
    }
}
