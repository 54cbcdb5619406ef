use crate::state::TickOutcome;
use crate::{parse_recipients, ComposeState, Effect, Msg, SubmitError, MAX_RECIPIENTS};

/// Minimum recipient count for which a simulated progress run is started.
/// A single recipient gets only a plain sending indicator from the host,
/// never a progress animation.
pub const SIMULATED_SEND_MIN: usize = 2;

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: ComposeState, msg: Msg) -> (ComposeState, Vec<Effect>) {
    let effects = match msg {
        Msg::InputChanged(raw) => {
            state.set_input(raw);
            Vec::new()
        }
        Msg::SendSubmitted => {
            let recipients = parse_recipients(state.input());
            if recipients.is_empty() {
                state.set_error(SubmitError::NoRecipients);
                return (state, Vec::new());
            }
            if recipients.len() > MAX_RECIPIENTS {
                state.set_error(SubmitError::TooManyRecipients {
                    count: recipients.len(),
                });
                return (state, Vec::new());
            }
            state.clear_error();

            let total = recipients.len();
            let superseded = state.take_run();
            let mut effects = Vec::with_capacity(3);
            // Cancel-before-replace: the old run's timers must stop before
            // a new run may own the shared render targets.
            if let Some(old) = superseded {
                effects.push(Effect::CancelRun {
                    run_id: old.run_id,
                });
            }
            if total >= SIMULATED_SEND_MIN {
                let run_id = state.start_run(recipients);
                effects.push(Effect::ScheduleConnect { run_id });
                effects.push(Effect::ScheduleTick { run_id });
            }
            effects
        }
        Msg::ConnectElapsed { run_id } => {
            state.apply_connect(run_id);
            Vec::new()
        }
        Msg::TickElapsed { run_id } => match state.apply_tick(run_id) {
            TickOutcome::Ignored => Vec::new(),
            TickOutcome::Advanced { first, done } => {
                let mut effects = Vec::with_capacity(2);
                if first {
                    // The first tick wins the race against the connect
                    // delay; drop the pending callback.
                    effects.push(Effect::CancelConnect { run_id });
                }
                if done {
                    effects.push(Effect::CancelRun { run_id });
                } else {
                    // One-shot chain: rescheduling per tick redraws the
                    // jitter for every step.
                    effects.push(Effect::ScheduleTick { run_id });
                }
                effects
            }
        },
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}
