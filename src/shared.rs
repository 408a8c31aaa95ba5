//! Engine shared between threads behind a spin lock.
//!
//! Meant for hosted drivers where the audio callback and the control logic run
//! on separate threads. The lock is only held for a single trigger call or a
//! single tick. Interrupt handlers that can preempt the control context should
//! use the [`command`](crate::command) queue instead.

use log::debug;
use spin::Mutex;

use crate::beep::pattern::BeepPattern;
use crate::command::Command;
use crate::config::EngineConfig;
use crate::engine::Engine;
use crate::error::Error;

#[derive(Debug)]
pub struct SharedEngine {
    engine: Mutex<Engine>,
}

impl Default for SharedEngine {
    fn default() -> Self {
        Self::from_engine(Engine::default())
    }
}

impl SharedEngine {
    pub fn new(config: EngineConfig) -> Result<Self, Error> {
        Ok(Self::from_engine(Engine::new(config)?))
    }

    pub fn from_engine(engine: Engine) -> Self {
        Self {
            engine: Mutex::new(engine),
        }
    }

    /// Resets all engine state to its defaults.
    pub fn init(&self) {
        debug!("resetting shared engine");
        self.engine.lock().init();
    }

    pub fn trigger_click(&self) {
        self.engine.lock().trigger_click();
    }

    pub fn trigger_burst(&self, min_count: u8, max_count: u8) {
        self.engine.lock().trigger_burst(min_count, max_count);
    }

    pub fn beep_start(&self, freq_hz: u16, duration_ms: u16, level: u8) {
        self.engine.lock().beep_start(freq_hz, duration_ms, level);
    }

    pub fn stop_all(&self) {
        self.engine.lock().stop_all();
    }

    pub fn pattern_start(&self, id: u8) {
        self.engine.lock().pattern_start(id);
    }

    pub fn start_pattern(&self, pattern: BeepPattern) {
        self.engine.lock().start_pattern(pattern);
    }

    pub fn apply(&self, command: Command) {
        self.engine.lock().apply(command);
    }

    pub fn set_volume(&self, percent: u8) {
        self.engine.lock().set_volume(percent);
    }

    pub fn volume(&self) -> u8 {
        self.engine.lock().volume()
    }

    /// Renders one sample, spinning while a trigger call holds the lock.
    pub fn tick(&self) -> i16 {
        self.engine.lock().tick()
    }

    /// Renders one sample if the lock is free, otherwise returns `None`
    /// without waiting.
    pub fn try_tick(&self) -> Option<i16> {
        self.engine.try_lock().map(|mut engine| engine.tick())
    }

    /// Fills `out` with consecutive samples under a single lock.
    pub fn fill(&self, out: &mut [i16]) {
        let mut engine = self.engine.lock();
        for sample in out.iter_mut() {
            *sample = engine.tick();
        }
    }

    /// Runs `f` with exclusive access to the engine.
    pub fn with<R>(&self, f: impl FnOnce(&mut Engine) -> R) -> R {
        f(&mut *self.engine.lock())
    }
}
