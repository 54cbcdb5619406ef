/// Maximum number of recipients accepted per submission.
pub const MAX_RECIPIENTS: usize = 10;

/// Splits raw textarea content into an ordered recipient list.
///
/// Segments are comma-separated, trimmed, and dropped when empty after
/// trimming. Duplicates are kept in input order. No address-format
/// validation happens here; format legality is the server's concern.
pub fn parse_recipients(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(ToOwned::to_owned)
        .collect()
}
