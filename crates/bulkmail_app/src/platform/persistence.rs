//! Draft autosave for the compose form.
//!
//! Best-effort only: load and save failures are logged and otherwise
//! ignored, so a broken draft file never blocks composing.

use std::fs;
use std::io::Write;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sim_logging::{sim_error, sim_info, sim_warn};

const DRAFT_FILENAME: &str = ".bulkmail_draft.ron";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct DraftRecord {
    pub recipients: String,
    pub subject: String,
    pub body: String,
    pub saved_at: DateTime<Utc>,
}

impl DraftRecord {
    pub(crate) fn now(recipients: String, subject: String, body: String) -> Self {
        Self {
            recipients,
            subject,
            body,
            saved_at: Utc::now(),
        }
    }
}

pub(crate) fn load_draft(dir: &Path) -> Option<DraftRecord> {
    let path = dir.join(DRAFT_FILENAME);
    let content = match fs::read_to_string(&path) {
        Ok(text) => text,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return None;
        }
        Err(err) => {
            sim_warn!("Failed to read draft from {:?}: {}", path, err);
            return None;
        }
    };

    match ron::from_str(&content) {
        Ok(draft) => {
            sim_info!("Restored draft from {:?}", path);
            Some(draft)
        }
        Err(err) => {
            sim_warn!("Failed to parse draft from {:?}: {}", path, err);
            None
        }
    }
}

pub(crate) fn save_draft(dir: &Path, draft: &DraftRecord) {
    let pretty = ron::ser::PrettyConfig::new();
    let content = match ron::ser::to_string_pretty(draft, pretty) {
        Ok(text) => text,
        Err(err) => {
            sim_error!("Failed to serialize draft: {}", err);
            return;
        }
    };

    // Temp file plus rename so a crash mid-write never truncates the draft.
    let path = dir.join(DRAFT_FILENAME);
    let result = tempfile::NamedTempFile::new_in(dir)
        .and_then(|mut file| {
            file.write_all(content.as_bytes())?;
            Ok(file)
        })
        .map(|file| file.persist(&path));
    match result {
        Ok(Ok(_)) => {}
        Ok(Err(err)) => sim_error!("Failed to persist draft to {:?}: {}", path, err),
        Err(err) => sim_error!("Failed to write draft in {:?}: {}", dir, err),
    }
}
