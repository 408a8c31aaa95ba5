//! Master volume.
//!
//! The engine always renders at full internal amplitude. Volume is applied
//! downstream, typically when a sample is mapped to a PWM compare value in the
//! audio timer interrupt.

/// Full-scale volume in percent.
pub const MAX_VOLUME: u8 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Volume {
    percent: u8,
}

impl Default for Volume {
    fn default() -> Self {
        Self::new(MAX_VOLUME)
    }
}

impl Volume {
    /// Values above 100 are clamped.
    pub const fn new(percent: u8) -> Self {
        Self {
            percent: if percent > MAX_VOLUME {
                MAX_VOLUME
            } else {
                percent
            },
        }
    }

    #[inline]
    pub fn set(&mut self, percent: u8) {
        *self = Self::new(percent);
    }

    #[inline]
    pub fn percent(&self) -> u8 {
        self.percent
    }

    #[inline]
    pub fn is_muted(&self) -> bool {
        self.percent == 0
    }

    /// Scales `sample` linearly by the volume.
    #[inline]
    pub fn apply(&self, sample: i16) -> i16 {
        (sample as i32 * self.percent as i32 / MAX_VOLUME as i32) as i16
    }

    /// Maps `sample` to a PWM compare value in `0..=period`. Silence sits at
    /// mid-scale so a muted output holds the line steady.
    #[inline]
    pub fn pwm_duty(&self, sample: i16, period: u32) -> u32 {
        let unsigned = (self.apply(sample) as i32 + 32768) as u64;
        ((unsigned * period as u64) >> 16) as u32
    }
}
