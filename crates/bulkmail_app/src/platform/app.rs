//! Terminal host for the compose core: reads the recipient line, drives
//! the update loop, and animates the simulated send progress.

use std::io::{self, BufRead, Write};
use std::path::Path;
use std::sync::{mpsc, Arc};
use std::time::Duration;

use bulkmail_core::{update, ComposeState, Msg};
use bulkmail_engine::{TimerEvent, TimerHandle, UniformTickJitter};
use sim_logging::{sim_info, sim_warn};

use super::persistence::{self, DraftRecord};
use super::{effects, logging, render};

const POLL_INTERVAL: Duration = Duration::from_millis(25);

pub fn run_app() {
    logging::initialize(logging::LogDestination::File);

    let draft_dir = Path::new(".");
    let draft = persistence::load_draft(draft_dir);

    let mut args = std::env::args().skip(1);
    let recipients = match args.next() {
        Some(raw) => raw,
        None => match draft.as_ref().filter(|d| !d.recipients.trim().is_empty()) {
            Some(d) => {
                println!("Restored draft recipients: {}", d.recipients);
                d.recipients.clone()
            }
            None => prompt_recipients(),
        },
    };
    let subject = args
        .next()
        .or_else(|| draft.as_ref().map(|d| d.subject.clone()))
        .unwrap_or_default();
    let body = args
        .next()
        .or_else(|| draft.as_ref().map(|d| d.body.clone()))
        .unwrap_or_default();

    let timers = TimerHandle::new(Arc::new(UniformTickJitter));
    let (msg_tx, msg_rx) = mpsc::channel::<Msg>();

    let mut state = ComposeState::new();
    state = dispatch(state, Msg::InputChanged(recipients.clone()), &timers);
    persistence::save_draft(draft_dir, &DraftRecord::now(recipients, subject, body));

    let mut view = state.view();
    render::render_compose(&view);

    state = dispatch(state, Msg::SendSubmitted, &timers);
    state.consume_dirty();
    view = state.view();

    if view.last_error.is_some() {
        render::render_error(&view);
        return;
    }
    match &view.progress {
        None => {
            // A single recipient gets no progress animation, only a note.
            sim_info!("Single recipient, skipping simulated progress");
            println!("Sending 1 email...");
            println!("Note: sending is simulated and does not confirm delivery.");
            return;
        }
        Some(progress) => {
            sim_info!(
                "Simulated send started for {} recipients",
                view.recipient_count
            );
            render::render_progress(progress);
        }
    }

    let mut ticks_seen = 0u64;
    loop {
        pump_timer_events(&timers, &msg_tx, &mut ticks_seen);

        let mut rendered_done = false;
        while let Ok(msg) = msg_rx.try_recv() {
            state = dispatch(state, msg, &timers);
            if state.consume_dirty() {
                view = state.view();
                if let Some(progress) = &view.progress {
                    render::render_progress(progress);
                    if progress.done {
                        render::render_summary(progress);
                        rendered_done = true;
                    }
                }
            }
        }
        if rendered_done {
            break;
        }
        std::thread::sleep(POLL_INTERVAL);
    }
    sim_info!("Simulated send finished after {} ticks", ticks_seen);
}

/// Applies a message through the pure core and executes resulting effects.
fn dispatch(state: ComposeState, msg: Msg, timers: &TimerHandle) -> ComposeState {
    let (state, effects) = update(state, msg);
    for effect in effects {
        effects::execute(effect, timers);
    }
    state
}

fn pump_timer_events(timers: &TimerHandle, msg_tx: &mpsc::Sender<Msg>, ticks_seen: &mut u64) {
    while let Some(event) = timers.try_recv() {
        let msg = match event {
            TimerEvent::ConnectElapsed { run_id } => Msg::ConnectElapsed { run_id },
            TimerEvent::TickElapsed { run_id } => {
                *ticks_seen += 1;
                sim_logging::set_sim_tick(*ticks_seen);
                Msg::TickElapsed { run_id }
            }
        };
        let _ = msg_tx.send(msg);
    }
}

fn prompt_recipients() -> String {
    print!("Recipient addresses (comma-separated): ");
    let _ = io::stdout().flush();
    let mut line = String::new();
    if io::stdin().lock().read_line(&mut line).is_err() {
        sim_warn!("Failed to read recipients from stdin");
    }
    line.trim_end_matches(['\r', '\n']).to_string()
}
