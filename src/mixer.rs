//! Click/beep summing with ducking and saturation.

/// Click gain while a beep sounds, as `value / 256` (~0.4).
pub const CLICK_ATTENUATION_WHILE_BEEP: i32 = 102;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mixer {
    attenuate_clicks: bool,
}

impl Default for Mixer {
    fn default() -> Self {
        Self::new(true)
    }
}

impl Mixer {
    pub fn new(attenuate_clicks: bool) -> Self {
        Self { attenuate_clicks }
    }

    /// Combines the summed click voices with the beep sample. `beep_active` is
    /// the oscillator state before it rendered `beep`.
    #[inline]
    pub fn mix(&self, clicks: i32, beep: i16, beep_active: bool) -> i16 {
        let clicks = if beep_active && self.attenuate_clicks {
            clicks * CLICK_ATTENUATION_WHILE_BEEP / 256
        } else {
            clicks
        };
        saturate(clicks + beep as i32)
    }
}

/// Clamps to the signed 16-bit range.
#[inline]
pub fn saturate(x: i32) -> i16 {
    x.clamp(i16::MIN as i32, i16::MAX as i32) as i16
}
