use std::sync::Once;

use bulkmail_core::{update, ComposeState, Effect, Msg, Phase, RecipientStatus};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(sim_logging::initialize_for_tests);
}

/// Submits `total` distinct recipients and returns the started state.
fn start_run(total: usize) -> ComposeState {
    let input = (0..total)
        .map(|i| format!("user{i}@example.com"))
        .collect::<Vec<_>>()
        .join(", ");
    let state = ComposeState::new();
    let (state, _) = update(state, Msg::InputChanged(input));
    let (state, effects) = update(state, Msg::SendSubmitted);
    assert_eq!(effects.len(), 2);
    state
}

#[test]
fn connect_delay_sets_connecting_status() {
    init_logging();
    let state = start_run(3);

    let (mut state, effects) = update(state, Msg::ConnectElapsed { run_id: 1 });

    assert!(effects.is_empty());
    assert_eq!(state.active_run().unwrap().phase(), Phase::Connecting);
    assert_eq!(
        state.view().progress.unwrap().status_line,
        "Connecting to email server..."
    );
    assert!(state.consume_dirty());
}

#[test]
fn first_tick_enters_sending_and_cancels_connect() {
    init_logging();
    let state = start_run(3);

    let (state, effects) = update(state, Msg::TickElapsed { run_id: 1 });

    assert_eq!(
        effects,
        vec![
            Effect::CancelConnect { run_id: 1 },
            Effect::ScheduleTick { run_id: 1 },
        ]
    );
    let view = state.view();
    let progress = view.progress.unwrap();
    assert_eq!(progress.percent, 33);
    assert_eq!(progress.status_line, "Sending email 1 of 3...");
    assert_eq!(progress.rows[0].status, RecipientStatus::Sent);
    assert_eq!(progress.rows[1].status, RecipientStatus::Pending);
}

#[test]
fn late_connect_does_not_clobber_sending() {
    init_logging();
    let state = start_run(3);
    let (mut state, _effects) = update(state, Msg::TickElapsed { run_id: 1 });
    assert!(state.consume_dirty());

    let (mut state, effects) = update(state, Msg::ConnectElapsed { run_id: 1 });

    assert!(effects.is_empty());
    assert_eq!(state.active_run().unwrap().phase(), Phase::Sending);
    assert_eq!(
        state.view().progress.unwrap().status_line,
        "Sending email 1 of 3..."
    );
    assert!(!state.consume_dirty());
}

#[test]
fn run_completes_after_exactly_total_ticks() {
    init_logging();
    for total in 2..=6 {
        let mut state = start_run(total);
        let mut done_transitions = 0;
        for step in 1..=total {
            let (next, effects) = update(state, Msg::TickElapsed { run_id: 1 });
            state = next;
            let run = state.active_run().unwrap();
            assert_eq!(run.completed(), step);
            if step == total {
                assert_eq!(run.phase(), Phase::Done);
                assert!(effects.contains(&Effect::CancelRun { run_id: 1 }));
                assert!(!effects.contains(&Effect::ScheduleTick { run_id: 1 }));
                done_transitions += 1;
            } else {
                assert_eq!(run.phase(), Phase::Sending);
                assert!(effects.contains(&Effect::ScheduleTick { run_id: 1 }));
            }
        }
        assert_eq!(done_transitions, 1);

        let view = state.view();
        let progress = view.progress.unwrap();
        assert_eq!(progress.percent, 100);
        assert!(progress.done);
        assert_eq!(progress.status_line, "All emails queued for delivery!");
        assert!(progress
            .rows
            .iter()
            .all(|row| row.status == RecipientStatus::Sent));
    }
}

#[test]
fn ticks_after_done_are_ignored() {
    init_logging();
    let mut state = start_run(2);
    for _ in 0..2 {
        let (next, _effects) = update(state, Msg::TickElapsed { run_id: 1 });
        state = next;
    }
    assert!(state.consume_dirty());
    let before = state.clone();

    let (mut state, effects) = update(state, Msg::TickElapsed { run_id: 1 });

    assert!(effects.is_empty());
    assert_eq!(state, before);
    assert!(!state.consume_dirty());
}

#[test]
fn percent_is_rounded_and_capped() {
    init_logging();
    let state = start_run(3);

    let (state, _) = update(state, Msg::TickElapsed { run_id: 1 });
    assert_eq!(state.view().progress.unwrap().percent, 33);

    let (state, _) = update(state, Msg::TickElapsed { run_id: 1 });
    assert_eq!(state.view().progress.unwrap().percent, 67);

    let (state, _) = update(state, Msg::TickElapsed { run_id: 1 });
    assert_eq!(state.view().progress.unwrap().percent, 100);
}
