pub type RunId = u64;

/// Elapsed timer notifications delivered back to the host event loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerEvent {
    /// The one-shot connect delay elapsed.
    ConnectElapsed { run_id: RunId },
    /// One jittered send tick elapsed.
    TickElapsed { run_id: RunId },
}
