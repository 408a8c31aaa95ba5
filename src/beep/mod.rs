//! Square-wave beeps and the alert pattern sequencer.

pub mod oscillator;
pub mod pattern;

pub use oscillator::BeepOscillator;
pub use pattern::{BeepPattern, PatternSequencer, PatternStep};
