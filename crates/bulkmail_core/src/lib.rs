//! Bulkmail core: pure state machine for recipient parsing and the
//! simulated send-progress run. No I/O, no clocks, no randomness.
mod effect;
mod error;
mod msg;
mod recipients;
mod state;
mod update;
mod view_model;

pub use effect::Effect;
pub use error::SubmitError;
pub use msg::Msg;
pub use recipients::{parse_recipients, MAX_RECIPIENTS};
pub use state::{ComposeState, Phase, RecipientStatus, RunId, SendRun};
pub use update::{update, SIMULATED_SEND_MIN};
pub use view_model::{
    ComposeViewModel, ProgressView, RecipientRowView, PREVIEW_CAP, PREVIEW_THRESHOLD,
};
