//! The audio engine: trigger/control API and the per-sample tick.
//!
//! All state lives in one owned [`Engine`] value. Control calls mutate it,
//! [`Engine::tick`] advances it by exactly one sample. Constructing a fresh
//! engine, or calling [`Engine::init`], restores every component to its
//! power-on state.

use log::debug;

use crate::beep::oscillator::BeepOscillator;
use crate::beep::pattern::{BeepPattern, PatternSequencer};
use crate::click::burst::BurstScheduler;
use crate::click::pool::VoicePool;
use crate::click::voice::TailParams;
use crate::command::{Command, Receiver};
use crate::config::EngineConfig;
use crate::error::Error;
use crate::mixer::Mixer;
use crate::noise::Lfsr;
use crate::volume::Volume;
use crate::SampleRate;

#[derive(Debug, Clone)]
pub struct Engine {
    config: EngineConfig,

    noise: Lfsr,
    voices: VoicePool,
    burst: BurstScheduler,
    beep: BeepOscillator,
    pattern: PatternSequencer,
    mixer: Mixer,

    volume: Volume,
}

impl Default for Engine {
    fn default() -> Self {
        Self::build(EngineConfig::default())
    }
}

impl Engine {
    /// Creates an engine after validating `config`.
    pub fn new(config: EngineConfig) -> Result<Self, Error> {
        if let Err(err) = config.validate() {
            debug!("rejecting engine config {config:?}: {err}");
            return Err(err);
        }
        Ok(Self::build(config))
    }

    fn build(config: EngineConfig) -> Self {
        let sample_rate = config.sample_rate();
        debug!(
            "audio engine at {} Hz, {} voice(s), {:?}",
            sample_rate.hz, config.max_voices, config.voice_allocation
        );

        Self {
            config,
            noise: Lfsr::new(),
            voices: VoicePool::new(
                config.max_voices,
                config.voice_allocation,
                TailParams::new(sample_rate),
            ),
            burst: BurstScheduler::new(
                config.burst_delay_min_samples,
                config.burst_delay_max_samples,
            ),
            beep: BeepOscillator::new(sample_rate),
            pattern: PatternSequencer::new(sample_rate),
            mixer: Mixer::new(config.attenuate_clicks_during_beep),
            volume: Volume::default(),
        }
    }

    /// Resets all state, including the noise seed and the volume.
    pub fn init(&mut self) {
        self.noise.init();
        self.voices.init();
        self.burst.init();
        self.beep.init();
        self.pattern.init();
        self.volume = Volume::default();
    }

    /// Reseeds the noise generator. A zero seed selects the default seed.
    pub fn seed(&mut self, seed: u16) {
        self.noise.seed(seed);
    }

    #[inline]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    #[inline]
    pub fn sample_rate(&self) -> SampleRate {
        self.config.sample_rate()
    }

    // Geiger clicks

    /// Starts a single click immediately.
    pub fn trigger_click(&mut self) {
        self.voices.trigger();
    }

    /// Schedules `min_count..=max_count` clicks at random spacing. Does nothing
    /// when both counts are zero.
    pub fn trigger_burst(&mut self, min_count: u8, max_count: u8) {
        self.burst.trigger(min_count, max_count, &mut self.noise);
    }

    // Beeps

    /// Starts a square-wave tone. `freq_hz` is clamped to 200..=3000; a zero
    /// duration or level silences the oscillator.
    pub fn beep_start(&mut self, freq_hz: u16, duration_ms: u16, level: u8) {
        self.beep.start(freq_hz, duration_ms, level);
    }

    /// Stops the tone and any running pattern. Clicks and bursts keep going.
    pub fn stop_all(&mut self) {
        self.beep.stop();
        self.pattern.stop();
    }

    /// Starts the pattern with the given id; unknown ids play
    /// [`BeepPattern::Single`].
    pub fn pattern_start(&mut self, id: u8) {
        self.start_pattern(BeepPattern::from(id));
    }

    pub fn start_pattern(&mut self, pattern: BeepPattern) {
        self.pattern.start(pattern);
    }

    // Volume

    /// Stores the master volume in percent (clamped to 100). The value is
    /// advisory and is not applied by [`Engine::tick`].
    pub fn set_volume(&mut self, percent: u8) {
        self.volume.set(percent);
    }

    #[inline]
    pub fn volume(&self) -> u8 {
        self.volume.percent()
    }

    #[inline]
    pub fn master_volume(&self) -> Volume {
        self.volume
    }

    // Queries

    #[inline]
    pub fn is_beep_active(&self) -> bool {
        self.beep.is_active()
    }

    #[inline]
    pub fn is_pattern_active(&self) -> bool {
        self.pattern.is_active()
    }

    #[inline]
    pub fn is_burst_active(&self) -> bool {
        self.burst.is_active()
    }

    #[inline]
    pub fn active_voices(&self) -> usize {
        self.voices.active_voices()
    }

    #[inline]
    pub fn voices(&self) -> &VoicePool {
        &self.voices
    }

    #[inline]
    pub fn burst(&self) -> &BurstScheduler {
        &self.burst
    }

    /// Executes a deferred trigger call.
    pub fn apply(&mut self, command: Command) {
        match command {
            Command::TriggerClick => self.trigger_click(),
            Command::TriggerBurst {
                min_count,
                max_count,
            } => self.trigger_burst(min_count, max_count),
            Command::BeepStart {
                freq_hz,
                duration_ms,
                level,
            } => self.beep_start(freq_hz, duration_ms, level),
            Command::StopAll => self.stop_all(),
            Command::PatternStart(pattern) => self.start_pattern(pattern),
            Command::SetVolume(percent) => self.set_volume(percent),
        }
    }

    /// Renders the next sample.
    ///
    /// Advances the burst scheduler and the pattern sequencer by one sample,
    /// then mixes the click voices with the beep oscillator and saturates the
    /// result. Bounded, allocation-free and O(1).
    #[inline]
    pub fn tick(&mut self) -> i16 {
        if self.burst.advance(&mut self.noise) {
            self.voices.trigger();
        }

        self.pattern.advance(&mut self.beep);

        let beep_active = self.beep.is_active();
        let clicks = self.voices.next(&mut self.noise);
        let beep = self.beep.next();

        self.mixer.mix(clicks, beep, beep_active)
    }

    /// Applies pending queued commands, then renders the next sample.
    #[inline]
    pub fn tick_with<const N: usize>(&mut self, receiver: &mut Receiver<'_, N>) -> i16 {
        receiver.drain(self);
        self.tick()
    }

    /// Fills `out` with consecutive samples.
    pub fn render(&mut self, out: &mut [i16]) {
        for sample in out.iter_mut() {
            *sample = self.tick();
        }
    }
}
