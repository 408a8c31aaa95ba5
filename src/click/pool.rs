//! Fixed-size pool of click voices.

use super::voice::{ClickVoice, TailParams};
use crate::config::VoiceAllocation;
use crate::noise::Lfsr;
use crate::MAX_VOICES;

#[derive(Debug, Clone)]
pub struct VoicePool {
    voices: [ClickVoice; MAX_VOICES],
    num_voices: usize,
    allocation: VoiceAllocation,
    tail: TailParams,
}

impl VoicePool {
    /// Creates a pool using the first `num_voices` slots (clamped to `1..=MAX_VOICES`).
    pub fn new(num_voices: usize, allocation: VoiceAllocation, tail: TailParams) -> Self {
        Self {
            voices: [ClickVoice::new(); MAX_VOICES],
            num_voices: num_voices.clamp(1, MAX_VOICES),
            allocation,
            tail,
        }
    }

    pub fn init(&mut self) {
        for voice in self.voices.iter_mut() {
            voice.init();
        }
    }

    /// Starts a click according to the allocation policy and returns the slot used.
    pub fn trigger(&mut self) -> usize {
        let slot = match self.allocation {
            VoiceAllocation::Monophonic => {
                self.clear();
                0
            }
            VoiceAllocation::Polyphonic => self.allocate(),
        };
        self.voices[slot].trigger();
        slot
    }

    /// Silences every slot.
    pub fn clear(&mut self) {
        for voice in self.voices.iter_mut() {
            voice.clear();
        }
    }

    pub fn voices(&self) -> &[ClickVoice] {
        &self.voices[..self.num_voices]
    }

    pub fn active_voices(&self) -> usize {
        self.voices().iter().filter(|v| v.is_active()).count()
    }

    /// Sum of all voice outputs for one sample, before attenuation.
    #[inline]
    pub fn next(&mut self, noise: &mut Lfsr) -> i32 {
        let tail = self.tail;
        self.voices[..self.num_voices]
            .iter_mut()
            .map(|voice| voice.next(noise, &tail) as i32)
            .sum()
    }

    fn allocate(&self) -> usize {
        let voices = self.voices();
        if let Some(idle) = voices.iter().position(|v| !v.is_active()) {
            return idle;
        }
        voices
            .iter()
            .enumerate()
            .max_by_key(|(_, v)| v.position())
            .map(|(slot, _)| slot)
            .unwrap_or(0)
    }
}
