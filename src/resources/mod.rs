//! Static lookup tables.

pub mod geiger;
pub mod sine;

pub use geiger::{ATTACK_ENVELOPE, ATTACK_SAMPLES, GEIGER_ATTACK};
pub use sine::{LUT_SINE, SINE_LUT_SIZE};
