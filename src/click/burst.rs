//! Randomized click bursts.
//!
//! A burst arms a random number of clicks and spaces them by random sample
//! counts drawn from a fixed window. It never blocks: the scheduler is advanced
//! once per sample and reports when the next click is due.

use crate::config::{BURST_MAX_DELAY_SAMPLES, BURST_MIN_DELAY_SAMPLES};
use crate::noise::Lfsr;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BurstScheduler {
    active: bool,
    remaining: u8,
    next_delay: u16,

    min_delay: u16,
    max_delay: u16,
}

impl Default for BurstScheduler {
    fn default() -> Self {
        Self::new(BURST_MIN_DELAY_SAMPLES, BURST_MAX_DELAY_SAMPLES)
    }
}

impl BurstScheduler {
    pub fn new(min_delay: u16, max_delay: u16) -> Self {
        Self {
            active: false,
            remaining: 0,
            next_delay: 0,
            min_delay,
            max_delay,
        }
    }

    pub fn init(&mut self) {
        self.active = false;
        self.remaining = 0;
        self.next_delay = 0;
    }

    /// Arms a burst of `min_count..=max_count` clicks. Returns the drawn count,
    /// or `None` when both bounds are zero and nothing was armed.
    pub fn trigger(&mut self, min_count: u8, max_count: u8, noise: &mut Lfsr) -> Option<u8> {
        if min_count == 0 && max_count == 0 {
            return None;
        }

        let min_count = min_count.max(1);
        let max_count = max_count.max(min_count);
        let count = noise.ranged(min_count as u16, max_count as u16) as u8;

        self.active = true;
        self.remaining = count;
        self.next_delay = self.draw_delay(noise);
        Some(count)
    }

    /// Cancels a pending burst.
    pub fn cancel(&mut self) {
        self.init();
    }

    /// Advances one sample. Returns `true` when a click must fire now.
    #[inline]
    pub fn advance(&mut self, noise: &mut Lfsr) -> bool {
        if !self.active {
            return false;
        }

        if self.next_delay > 0 {
            self.next_delay -= 1;
        }

        if self.next_delay != 0 || self.remaining == 0 {
            return false;
        }

        self.remaining -= 1;
        if self.remaining == 0 {
            self.active = false;
        } else {
            self.next_delay = self.draw_delay(noise);
        }
        true
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Clicks still to fire.
    #[inline]
    pub fn remaining(&self) -> u8 {
        self.remaining
    }

    /// Samples until the next click.
    #[inline]
    pub fn next_delay(&self) -> u16 {
        self.next_delay
    }

    #[inline]
    fn draw_delay(&self, noise: &mut Lfsr) -> u16 {
        noise.ranged(self.min_delay, self.max_delay)
    }
}
