use crate::RunId;

/// Timer requests emitted by `update` for the host to execute.
///
/// The core never carries durations; the connect delay and per-tick
/// jitter are owned by the timer engine. The resulting progress is a
/// UX simulation only and carries no delivery guarantee.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Arm the one-shot connect delay for a run.
    ScheduleConnect { run_id: RunId },
    /// Arm the next jittered send tick for a run.
    ScheduleTick { run_id: RunId },
    /// Drop a pending connect delay (the first tick won the race).
    CancelConnect { run_id: RunId },
    /// Stop all timers for a run and drop its bookkeeping.
    CancelRun { run_id: RunId },
}
