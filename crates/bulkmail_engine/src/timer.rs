use std::collections::HashMap;
use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use sim_logging::sim_debug;
use tokio_util::sync::CancellationToken;

use crate::jitter::TickJitter;
use crate::{RunId, TimerEvent};

/// Delay before the cosmetic "connecting" status appears.
pub const CONNECT_DELAY: Duration = Duration::from_millis(800);

enum TimerCommand {
    ScheduleConnect { run_id: RunId },
    ScheduleTick { run_id: RunId },
    CancelConnect { run_id: RunId },
    CancelRun { run_id: RunId },
}

/// Cancellation scopes for one run: `connect` covers only the pending
/// connect delay, `run` covers every timer scheduled under the run.
#[derive(Default)]
struct RunTokens {
    run: CancellationToken,
    connect: CancellationToken,
}

/// Handle to the timer thread driving simulated send runs.
///
/// Commands are processed in order on a dedicated thread that owns a
/// tokio runtime; elapsed timers come back through [`TimerHandle::try_recv`].
/// Delays are simulation only and say nothing about real delivery.
pub struct TimerHandle {
    cmd_tx: mpsc::Sender<TimerCommand>,
    event_rx: mpsc::Receiver<TimerEvent>,
}

impl TimerHandle {
    pub fn new(jitter: Arc<dyn TickJitter>) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();

        thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
            let mut runs: HashMap<RunId, RunTokens> = HashMap::new();
            while let Ok(command) = cmd_rx.recv() {
                handle_command(&runtime, &mut runs, command, &event_tx, jitter.as_ref());
            }
        });

        Self { cmd_tx, event_rx }
    }

    /// Arms the one-shot connect delay for `run_id`.
    pub fn schedule_connect(&self, run_id: RunId) {
        let _ = self.cmd_tx.send(TimerCommand::ScheduleConnect { run_id });
    }

    /// Arms the next send tick for `run_id` with a freshly drawn jitter.
    pub fn schedule_tick(&self, run_id: RunId) {
        let _ = self.cmd_tx.send(TimerCommand::ScheduleTick { run_id });
    }

    /// Drops a pending connect delay, if one is still armed.
    pub fn cancel_connect(&self, run_id: RunId) {
        let _ = self.cmd_tx.send(TimerCommand::CancelConnect { run_id });
    }

    /// Stops every timer for `run_id` and forgets the run.
    pub fn cancel_run(&self, run_id: RunId) {
        let _ = self.cmd_tx.send(TimerCommand::CancelRun { run_id });
    }

    pub fn try_recv(&self) -> Option<TimerEvent> {
        self.event_rx.try_recv().ok()
    }
}

fn handle_command(
    runtime: &tokio::runtime::Runtime,
    runs: &mut HashMap<RunId, RunTokens>,
    command: TimerCommand,
    event_tx: &mpsc::Sender<TimerEvent>,
    jitter: &dyn TickJitter,
) {
    match command {
        TimerCommand::ScheduleConnect { run_id } => {
            let tokens = runs.entry(run_id).or_default();
            sim_debug!("run {}: connect delay armed", run_id);
            runtime.spawn(wait_connect(
                run_id,
                tokens.run.clone(),
                tokens.connect.clone(),
                event_tx.clone(),
            ));
        }
        TimerCommand::ScheduleTick { run_id } => {
            // Drawn here, not in the task, so commands stay ordered with
            // their delays even under a deterministic jitter source.
            let delay = jitter.tick_delay();
            let tokens = runs.entry(run_id).or_default();
            sim_debug!("run {}: tick armed after {:?}", run_id, delay);
            runtime.spawn(wait_tick(
                run_id,
                delay,
                tokens.run.clone(),
                event_tx.clone(),
            ));
        }
        TimerCommand::CancelConnect { run_id } => {
            if let Some(tokens) = runs.get(&run_id) {
                tokens.connect.cancel();
            }
        }
        TimerCommand::CancelRun { run_id } => {
            if let Some(tokens) = runs.remove(&run_id) {
                sim_debug!("run {}: cancelled", run_id);
                tokens.connect.cancel();
                tokens.run.cancel();
            }
        }
    }
}

async fn wait_connect(
    run_id: RunId,
    run: CancellationToken,
    connect: CancellationToken,
    event_tx: mpsc::Sender<TimerEvent>,
) {
    tokio::select! {
        _ = run.cancelled() => {}
        _ = connect.cancelled() => {}
        _ = tokio::time::sleep(CONNECT_DELAY) => {
            let _ = event_tx.send(TimerEvent::ConnectElapsed { run_id });
        }
    }
}

async fn wait_tick(
    run_id: RunId,
    delay: Duration,
    run: CancellationToken,
    event_tx: mpsc::Sender<TimerEvent>,
) {
    tokio::select! {
        _ = run.cancelled() => {}
        _ = tokio::time::sleep(delay) => {
            let _ = event_tx.send(TimerEvent::TickElapsed { run_id });
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[tokio::test(start_paused = true)]
    async fn connect_fires_after_delay() {
        let (event_tx, event_rx) = mpsc::channel();
        let run = CancellationToken::new();
        let connect = CancellationToken::new();

        wait_connect(7, run, connect, event_tx).await;

        assert_eq!(
            event_rx.try_recv().ok(),
            Some(TimerEvent::ConnectElapsed { run_id: 7 })
        );
    }

    #[tokio::test(start_paused = true)]
    async fn cancelled_connect_stays_silent() {
        let (event_tx, event_rx) = mpsc::channel();
        let run = CancellationToken::new();
        let connect = CancellationToken::new();
        connect.cancel();

        wait_connect(7, run, connect, event_tx).await;

        assert!(event_rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn tick_fires_after_its_jittered_delay() {
        let (event_tx, event_rx) = mpsc::channel();
        let run = CancellationToken::new();

        wait_tick(3, Duration::from_millis(1200), run, event_tx).await;

        assert_eq!(
            event_rx.try_recv().ok(),
            Some(TimerEvent::TickElapsed { run_id: 3 })
        );
    }

    #[tokio::test(start_paused = true)]
    async fn cancelled_run_silences_pending_tick() {
        let (event_tx, event_rx) = mpsc::channel();
        let run = CancellationToken::new();
        run.cancel();

        wait_tick(3, Duration::from_millis(1200), run, event_tx).await;

        assert!(event_rx.try_recv().is_err());
    }
}
