//! Plain-text rendering of the compose view model.

use bulkmail_core::{ComposeViewModel, ProgressView, RecipientStatus};

const BAR_WIDTH: usize = 20;

/// Prints the live recipient count and, above the threshold, the preview.
pub(crate) fn render_compose(view: &ComposeViewModel) {
    println!("Recipients: {}", view.recipient_count);
    if !view.preview.is_empty() {
        for address in &view.preview {
            println!("  - {address}");
        }
    }
    if view.over_limit {
        println!("Too many recipients; reduce the list before sending.");
    }
}

pub(crate) fn render_error(view: &ComposeViewModel) {
    if let Some(error) = &view.last_error {
        eprintln!("Error: {error}");
    }
}

/// Prints one progress snapshot: bar, percent, and status line.
pub(crate) fn render_progress(progress: &ProgressView) {
    println!(
        "[{}] {:>3}%  {}",
        bar(progress.percent),
        progress.percent,
        progress.status_line
    );
}

/// Prints the final per-recipient status badges.
pub(crate) fn render_summary(progress: &ProgressView) {
    for row in &progress.rows {
        let badge = match row.status {
            RecipientStatus::Sent => "sent",
            RecipientStatus::Pending => "pending",
        };
        println!("  {:<8} {}", badge, row.address);
    }
    println!("Note: progress is simulated and does not confirm delivery.");
}

fn bar(percent: u8) -> String {
    let filled = usize::from(percent) * BAR_WIDTH / 100;
    let mut bar = String::with_capacity(BAR_WIDTH);
    for i in 0..BAR_WIDTH {
        bar.push(if i < filled { '#' } else { '-' });
    }
    bar
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bar_fills_proportionally() {
        assert_eq!(bar(0), "-".repeat(BAR_WIDTH));
        assert_eq!(bar(100), "#".repeat(BAR_WIDTH));
        assert_eq!(bar(50).chars().filter(|c| *c == '#').count(), BAR_WIDTH / 2);
    }
}
