//! Pseudo-random sources.

pub mod lfsr;

pub use lfsr::Lfsr;
