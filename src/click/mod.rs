//! Geiger click synthesis: voices, the voice pool and the burst scheduler.

pub mod burst;
pub mod pool;
pub mod voice;

pub use burst::BurstScheduler;
pub use pool::VoicePool;
pub use voice::ClickVoice;
