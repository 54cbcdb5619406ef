//! Bulkmail engine: timers backing the simulated send progress.
mod jitter;
mod timer;
mod types;

pub use jitter::{TickJitter, UniformTickJitter, TICK_BASE, TICK_JITTER_MS};
pub use timer::{TimerHandle, CONNECT_DELAY};
pub use types::{RunId, TimerEvent};
