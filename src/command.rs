//! Lock-free command queue between the control context and the audio tick.
//!
//! The UI side holds a [`Controller`] and enqueues [`Command`]s; the audio
//! interrupt holds a [`Receiver`] and drains it at the start of every tick via
//! [`Engine::tick_with`]. The queue is a bounded single-producer,
//! single-consumer ring, so neither side ever blocks or observes a half
//! written engine state.
//!
//! ```
//! use anomaly_audio::{BeepPattern, CommandQueue, Engine};
//!
//! let mut queue: CommandQueue<8> = CommandQueue::new();
//! let (mut controller, mut receiver) = queue.split();
//! let mut engine = Engine::default();
//!
//! controller.start_pattern(BeepPattern::Alert).unwrap();
//! assert_ne!(engine.tick_with(&mut receiver), 0);
//! ```

use heapless::spsc::{Consumer, Producer, Queue};
use log::{trace, warn};

use crate::beep::pattern::BeepPattern;
use crate::engine::Engine;
use crate::error::Error;

/// A deferred trigger call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    TriggerClick,
    TriggerBurst {
        min_count: u8,
        max_count: u8,
    },
    BeepStart {
        freq_hz: u16,
        duration_ms: u16,
        level: u8,
    },
    StopAll,
    PatternStart(BeepPattern),
    SetVolume(u8),
}

/// Backing storage for the queue. Holds up to `N - 1` pending commands.
#[derive(Debug)]
pub struct CommandQueue<const N: usize> {
    queue: Queue<Command, N>,
}

impl<const N: usize> Default for CommandQueue<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> CommandQueue<N> {
    pub const fn new() -> Self {
        Self {
            queue: Queue::new(),
        }
    }

    /// Splits the queue into its producer and consumer halves.
    pub fn split(&mut self) -> (Controller<'_, N>, Receiver<'_, N>) {
        let (producer, consumer) = self.queue.split();
        (Controller { producer }, Receiver { consumer })
    }
}

/// Producer half, used from the control context.
pub struct Controller<'a, const N: usize> {
    producer: Producer<'a, Command, N>,
}

impl<const N: usize> Controller<'_, N> {
    pub fn send(&mut self, command: Command) -> Result<(), Error> {
        match self.producer.enqueue(command) {
            Ok(()) => {
                trace!("queued {command:?}");
                Ok(())
            }
            Err(command) => {
                warn!("command queue full, dropping {command:?}");
                Err(Error::QueueFull)
            }
        }
    }

    pub fn trigger_click(&mut self) -> Result<(), Error> {
        self.send(Command::TriggerClick)
    }

    pub fn trigger_burst(&mut self, min_count: u8, max_count: u8) -> Result<(), Error> {
        self.send(Command::TriggerBurst {
            min_count,
            max_count,
        })
    }

    pub fn beep_start(&mut self, freq_hz: u16, duration_ms: u16, level: u8) -> Result<(), Error> {
        self.send(Command::BeepStart {
            freq_hz,
            duration_ms,
            level,
        })
    }

    pub fn stop_all(&mut self) -> Result<(), Error> {
        self.send(Command::StopAll)
    }

    /// Unknown ids fall back to [`BeepPattern::Single`].
    pub fn pattern_start(&mut self, id: u8) -> Result<(), Error> {
        self.start_pattern(BeepPattern::from(id))
    }

    pub fn start_pattern(&mut self, pattern: BeepPattern) -> Result<(), Error> {
        self.send(Command::PatternStart(pattern))
    }

    pub fn set_volume(&mut self, percent: u8) -> Result<(), Error> {
        self.send(Command::SetVolume(percent))
    }
}

/// Consumer half, drained by the audio tick.
pub struct Receiver<'a, const N: usize> {
    consumer: Consumer<'a, Command, N>,
}

impl<const N: usize> Receiver<'_, N> {
    #[inline]
    pub fn next(&mut self) -> Option<Command> {
        self.consumer.dequeue()
    }

    /// Applies pending commands to `engine` in submission order. At most `N`
    /// commands are taken per call, even if the producer keeps pushing.
    #[inline]
    pub fn drain(&mut self, engine: &mut Engine) {
        for _ in 0..N {
            let Some(command) = self.consumer.dequeue() else {
                break;
            };
            engine.apply(command);
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        !self.consumer.ready()
    }
}
