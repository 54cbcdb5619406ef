use crate::error::SubmitError;
use crate::view_model::ComposeViewModel;

pub type RunId = u64;

/// Stage of the simulated send run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Connecting,
    Sending,
    Done,
}

/// Per-recipient send status badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecipientStatus {
    Pending,
    Sent,
}

/// One simulated send run. Exactly one may be live at a time; a new
/// submission supersedes (and cancels the timers of) the previous one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendRun {
    pub(crate) run_id: RunId,
    pub(crate) recipients: Vec<String>,
    pub(crate) completed: usize,
    pub(crate) total: usize,
    pub(crate) phase: Phase,
    pub(crate) statuses: Vec<RecipientStatus>,
}

impl SendRun {
    pub fn run_id(&self) -> RunId {
        self.run_id
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn completed(&self) -> usize {
        self.completed
    }

    pub fn total(&self) -> usize {
        self.total
    }
}

/// Outcome of applying a tick event to the state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TickOutcome {
    /// Stale run id, or the run already finished.
    Ignored,
    Advanced { first: bool, done: bool },
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ComposeState {
    input: String,
    next_run_id: RunId,
    run: Option<SendRun>,
    last_error: Option<SubmitError>,
    dirty: bool,
}

impl ComposeState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> ComposeViewModel {
        ComposeViewModel::project(self)
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn active_run(&self) -> Option<&SendRun> {
        self.run.as_ref()
    }

    pub fn last_error(&self) -> Option<&SubmitError> {
        self.last_error.as_ref()
    }

    /// Returns and clears the dirty flag. Hosts re-render when this is set.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn set_input(&mut self, raw: String) {
        self.input = raw;
        self.dirty = true;
    }

    pub(crate) fn set_error(&mut self, error: SubmitError) {
        self.last_error = Some(error);
        self.dirty = true;
    }

    pub(crate) fn clear_error(&mut self) {
        if self.last_error.take().is_some() {
            self.dirty = true;
        }
    }

    /// Removes the current run, if any, so its timers can be cancelled.
    pub(crate) fn take_run(&mut self) -> Option<SendRun> {
        self.run.take()
    }

    /// Creates a fresh run in `Idle` with every recipient `Pending`.
    pub(crate) fn start_run(&mut self, recipients: Vec<String>) -> RunId {
        self.next_run_id += 1;
        let run_id = self.next_run_id;
        let total = recipients.len();
        self.run = Some(SendRun {
            run_id,
            statuses: vec![RecipientStatus::Pending; total],
            recipients,
            completed: 0,
            total,
            phase: Phase::Idle,
        });
        self.dirty = true;
        run_id
    }

    /// Applies the connect delay. Ignored when stale or when the run has
    /// already left `Idle`: a late connect callback must not clobber the
    /// `Sending` status once ticking has begun.
    pub(crate) fn apply_connect(&mut self, run_id: RunId) {
        let Some(run) = self.run.as_mut() else {
            return;
        };
        if run.run_id != run_id || run.phase != Phase::Idle {
            return;
        }
        run.phase = Phase::Connecting;
        self.dirty = true;
    }

    /// Applies one send tick, advancing `completed` and flipping the
    /// matching status badge. `Done` is entered exactly once, when the
    /// last recipient completes.
    pub(crate) fn apply_tick(&mut self, run_id: RunId) -> TickOutcome {
        let Some(run) = self.run.as_mut() else {
            return TickOutcome::Ignored;
        };
        if run.run_id != run_id || run.phase == Phase::Done {
            return TickOutcome::Ignored;
        }
        let first = run.phase != Phase::Sending;
        run.phase = Phase::Sending;
        run.completed += 1;
        run.statuses[run.completed - 1] = RecipientStatus::Sent;
        let done = run.completed == run.total;
        if done {
            run.phase = Phase::Done;
        }
        self.dirty = true;
        TickOutcome::Advanced { first, done }
    }
}
