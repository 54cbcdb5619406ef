use thiserror::Error;

use crate::recipients::MAX_RECIPIENTS;

/// Reasons a submission is blocked before any send run is created.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("please enter at least one recipient address")]
    NoRecipients,
    #[error("maximum {} recipients allowed, got {count}", MAX_RECIPIENTS)]
    TooManyRecipients { count: usize },
}
