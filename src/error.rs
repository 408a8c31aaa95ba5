//! Error type shared by configuration and command submission.

use thiserror::Error;

/// Errors reported by the engine. Trigger calls never fail; only building an
/// engine from a configuration and queueing commands can.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// Sample rate outside the supported range.
    #[error("unsupported sample rate: {0} Hz")]
    InvalidSampleRate(u32),
    /// Voice count of zero or above the compiled pool size.
    #[error("voice count must be between 1 and 4, got {0}")]
    InvalidVoiceCount(usize),
    /// Burst spacing window that is empty or starts at zero.
    #[error("invalid burst delay window {min}..={max}")]
    InvalidBurstWindow {
        /// Lower bound in samples
        min: u16,
        /// Upper bound in samples
        max: u16,
    },
    /// The command queue has no free slot.
    #[error("command queue full")]
    QueueFull,
}
