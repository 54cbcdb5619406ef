use crate::{
    parse_recipients, ComposeState, Phase, RecipientStatus, SubmitError, MAX_RECIPIENTS,
};

/// Recipient count at which the preview list appears.
pub const PREVIEW_THRESHOLD: usize = 5;
/// Maximum entries shown in the preview list.
pub const PREVIEW_CAP: usize = 10;

/// Render-ready projection of the compose state.
///
/// The progress section reflects a local timer simulation, not real
/// delivery acknowledgments; hosts must not present it as authoritative.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ComposeViewModel {
    pub recipient_count: usize,
    pub over_limit: bool,
    pub preview: Vec<String>,
    pub progress: Option<ProgressView>,
    pub last_error: Option<SubmitError>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressView {
    pub percent: u8,
    pub status_line: String,
    pub rows: Vec<RecipientRowView>,
    pub done: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipientRowView {
    pub address: String,
    pub status: RecipientStatus,
}

impl ComposeViewModel {
    pub(crate) fn project(state: &ComposeState) -> Self {
        let recipients = parse_recipients(state.input());
        let preview = if recipients.len() >= PREVIEW_THRESHOLD {
            recipients.iter().take(PREVIEW_CAP).cloned().collect()
        } else {
            Vec::new()
        };

        let progress = state.active_run().map(|run| ProgressView {
            percent: percent(run.completed, run.total),
            status_line: status_line(run.phase, run.completed, run.total),
            rows: run
                .recipients
                .iter()
                .zip(run.statuses.iter())
                .map(|(address, status)| RecipientRowView {
                    address: address.clone(),
                    status: *status,
                })
                .collect(),
            done: run.phase == Phase::Done,
        });

        Self {
            over_limit: recipients.len() > MAX_RECIPIENTS,
            recipient_count: recipients.len(),
            preview,
            progress,
            last_error: state.last_error().cloned(),
        }
    }
}

fn percent(completed: usize, total: usize) -> u8 {
    let raw = (completed as f64 / total as f64 * 100.0).round() as u8;
    raw.min(100)
}

fn status_line(phase: Phase, completed: usize, total: usize) -> String {
    match phase {
        Phase::Idle => "Preparing to send emails...".to_string(),
        Phase::Connecting => "Connecting to email server...".to_string(),
        Phase::Sending => format!("Sending email {completed} of {total}..."),
        Phase::Done => "All emails queued for delivery!".to_string(),
    }
}
