//! Check command - validate the store document

use itemtrack::output::{LoadReport, OutputMode};
use itemtrack::storage::LoadSummary;

use super::Session;

/// Load the store document and report what was found
pub fn check(session: &Session, mode: OutputMode) -> anyhow::Result<()> {
    let policy = session.config.storage.load_policy;
    let exists = session.file.exists();
    let summary = if exists {
        session.file.load(policy)?.1
    } else {
        LoadSummary::default()
    };

    LoadReport {
        path: session.file.path().display().to_string(),
        exists,
        policy: policy.to_string(),
        summary,
    }
    .render(mode);

    Ok(())
}
