//! Engine configuration.

use crate::error::Error;
use crate::{SampleRate, MAX_VOICES, SAMPLE_RATE_HZ};

/// Lowest accepted sample rate in Hz.
pub const MIN_SAMPLE_RATE_HZ: u32 = 4_000;

/// Highest accepted sample rate in Hz.
pub const MAX_SAMPLE_RATE_HZ: u32 = 96_000;

/// Default shortest spacing between burst clicks (2 ms at 16 kHz).
pub const BURST_MIN_DELAY_SAMPLES: u16 = 32;

/// Default longest spacing between burst clicks (32 ms at 16 kHz).
pub const BURST_MAX_DELAY_SAMPLES: u16 = 512;

/// How a click trigger picks its voice slot.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum VoiceAllocation {
    /// Every trigger silences all slots and restarts slot 0.
    #[default]
    Monophonic,
    /// Triggers take the first idle slot, or steal the oldest sounding one.
    Polyphonic,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    /// Output sample rate in Hz. Default is `16000`.
    pub sample_rate_hz: u32,

    /// Click slots in use, from `1` to [`MAX_VOICES`]. Default is `1`.
    pub max_voices: usize,

    /// Slot selection policy. Default is [`VoiceAllocation::Monophonic`].
    pub voice_allocation: VoiceAllocation,

    /// Lower bound of the burst click spacing in samples. Default is `32`.
    pub burst_delay_min_samples: u16,

    /// Upper bound of the burst click spacing in samples. Default is `512`.
    pub burst_delay_max_samples: u16,

    /// Duck the click channel to ~40 % while a beep sounds. Default is `true`.
    pub attenuate_clicks_during_beep: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            sample_rate_hz: SAMPLE_RATE_HZ,
            max_voices: 1,
            voice_allocation: VoiceAllocation::Monophonic,
            burst_delay_min_samples: BURST_MIN_DELAY_SAMPLES,
            burst_delay_max_samples: BURST_MAX_DELAY_SAMPLES,
            attenuate_clicks_during_beep: true,
        }
    }
}

impl EngineConfig {
    pub fn validate(&self) -> Result<(), Error> {
        if !(MIN_SAMPLE_RATE_HZ..=MAX_SAMPLE_RATE_HZ).contains(&self.sample_rate_hz) {
            return Err(Error::InvalidSampleRate(self.sample_rate_hz));
        }
        if self.max_voices == 0 || self.max_voices > MAX_VOICES {
            return Err(Error::InvalidVoiceCount(self.max_voices));
        }
        if self.burst_delay_min_samples == 0
            || self.burst_delay_min_samples > self.burst_delay_max_samples
        {
            return Err(Error::InvalidBurstWindow {
                min: self.burst_delay_min_samples,
                max: self.burst_delay_max_samples,
            });
        }
        Ok(())
    }

    #[inline]
    pub fn sample_rate(&self) -> SampleRate {
        SampleRate::new(self.sample_rate_hz)
    }
}
