use crate::RunId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User edited the recipient input box (raw textarea text).
    InputChanged(String),
    /// User submitted the form for sending.
    SendSubmitted,
    /// The one-shot connect delay elapsed for a run.
    ConnectElapsed { run_id: RunId },
    /// One simulated per-recipient send step elapsed for a run.
    TickElapsed { run_id: RunId },
    /// Fallback for placeholder wiring.
    NoOp,
}
