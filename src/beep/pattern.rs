//! Named alert patterns and the sample-clocked sequencer that plays them.
//!
//! A pattern is a short list of tone and gap steps. The sequencer loads one
//! step whenever the previous one has run out, starting the beep oscillator on
//! tone steps. It only ever advances from [`PatternSequencer::advance`], so the
//! timing is exact to the sample.

use super::oscillator::BeepOscillator;
use crate::SampleRate;

pub const BEEP_SINGLE_FREQ_HZ: u16 = 1000;
pub const BEEP_SINGLE_DURATION_MS: u16 = 200;
pub const BEEP_SINGLE_LEVEL: u8 = 192;

pub const BEEP_DOUBLE_FREQ_HZ: u16 = 1000;
pub const BEEP_DOUBLE_TONE_DURATION_MS: u16 = 150;
pub const BEEP_DOUBLE_GAP_DURATION_MS: u16 = 150;
pub const BEEP_DOUBLE_LEVEL: u8 = 192;

pub const BEEP_ERROR_FREQ_HZ: u16 = 400;
pub const BEEP_ERROR_DURATION_MS: u16 = 700;
pub const BEEP_ERROR_LEVEL: u8 = 224;

pub const BEEP_ALERT_FREQ_HZ: u16 = 2000;
pub const BEEP_ALERT_DURATION_MS: u16 = 80;
pub const BEEP_ALERT_LEVEL: u8 = 224;

/// One step of a pattern: a tone or a silent gap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatternStep {
    pub is_tone: bool,
    pub freq_hz: u16,
    pub duration_ms: u16,
    pub level: u8,
}

impl PatternStep {
    pub const fn tone(freq_hz: u16, duration_ms: u16, level: u8) -> Self {
        Self {
            is_tone: true,
            freq_hz,
            duration_ms,
            level,
        }
    }

    pub const fn gap(duration_ms: u16) -> Self {
        Self {
            is_tone: false,
            freq_hz: 0,
            duration_ms,
            level: 0,
        }
    }
}

const PATTERN_SINGLE: [PatternStep; 1] = [PatternStep::tone(
    BEEP_SINGLE_FREQ_HZ,
    BEEP_SINGLE_DURATION_MS,
    BEEP_SINGLE_LEVEL,
)];

const PATTERN_DOUBLE: [PatternStep; 3] = [
    PatternStep::tone(
        BEEP_DOUBLE_FREQ_HZ,
        BEEP_DOUBLE_TONE_DURATION_MS,
        BEEP_DOUBLE_LEVEL,
    ),
    PatternStep::gap(BEEP_DOUBLE_GAP_DURATION_MS),
    PatternStep::tone(
        BEEP_DOUBLE_FREQ_HZ,
        BEEP_DOUBLE_TONE_DURATION_MS,
        BEEP_DOUBLE_LEVEL,
    ),
];

const PATTERN_ERROR: [PatternStep; 1] = [PatternStep::tone(
    BEEP_ERROR_FREQ_HZ,
    BEEP_ERROR_DURATION_MS,
    BEEP_ERROR_LEVEL,
)];

const PATTERN_ALERT: [PatternStep; 1] = [PatternStep::tone(
    BEEP_ALERT_FREQ_HZ,
    BEEP_ALERT_DURATION_MS,
    BEEP_ALERT_LEVEL,
)];

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum BeepPattern {
    /// One 200 ms tone at 1 kHz.
    #[default]
    Single = 0,
    /// Two 150 ms tones at 1 kHz separated by 150 ms of silence.
    Double = 1,
    /// One long 700 ms low tone at 400 Hz.
    Error = 2,
    /// One short 80 ms high tone at 2 kHz.
    Alert = 3,
}

impl BeepPattern {
    pub fn steps(&self) -> &'static [PatternStep] {
        match self {
            Self::Single => &PATTERN_SINGLE,
            Self::Double => &PATTERN_DOUBLE,
            Self::Error => &PATTERN_ERROR,
            Self::Alert => &PATTERN_ALERT,
        }
    }

    /// Total pattern length in samples.
    pub fn duration_samples(&self, sample_rate: SampleRate) -> u32 {
        self.steps()
            .iter()
            .map(|step| sample_rate.samples_for_ms(step.duration_ms))
            .sum()
    }
}

/// Unknown ids fall back to [`BeepPattern::Single`].
impl From<u8> for BeepPattern {
    fn from(id: u8) -> Self {
        match id {
            1 => Self::Double,
            2 => Self::Error,
            3 => Self::Alert,
            _ => Self::Single,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternSequencer {
    steps: Option<&'static [PatternStep]>,
    step_index: u8,
    samples_remaining_in_step: u32,
    active: bool,

    sample_rate: SampleRate,
}

impl Default for PatternSequencer {
    fn default() -> Self {
        Self::new(SampleRate::default())
    }
}

impl PatternSequencer {
    pub fn new(sample_rate: SampleRate) -> Self {
        Self {
            steps: None,
            step_index: 0,
            samples_remaining_in_step: 0,
            active: false,
            sample_rate,
        }
    }

    pub fn init(&mut self) {
        self.stop();
    }

    pub fn start(&mut self, pattern: BeepPattern) {
        let steps = pattern.steps();
        self.steps = Some(steps);
        self.step_index = 0;
        self.samples_remaining_in_step = 0;
        self.active = !steps.is_empty();
    }

    pub fn stop(&mut self) {
        self.steps = None;
        self.step_index = 0;
        self.samples_remaining_in_step = 0;
        self.active = false;
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Index of the next step to load.
    #[inline]
    pub fn step_index(&self) -> u8 {
        self.step_index
    }

    /// Advances one sample, starting `oscillator` when a tone step begins.
    #[inline]
    pub fn advance(&mut self, oscillator: &mut BeepOscillator) {
        if !self.active {
            return;
        }
        let Some(steps) = self.steps else {
            self.active = false;
            return;
        };

        if self.samples_remaining_in_step == 0 {
            let Some(step) = steps.get(self.step_index as usize) else {
                self.active = false;
                return;
            };

            self.samples_remaining_in_step = self.sample_rate.samples_for_ms(step.duration_ms);
            if step.is_tone {
                oscillator.start(step.freq_hz, step.duration_ms, step.level);
            }
            self.step_index += 1;
        }

        if self.samples_remaining_in_step > 0 {
            self.samples_remaining_in_step -= 1;
        }
    }
}
