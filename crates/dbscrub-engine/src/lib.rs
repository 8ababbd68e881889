use std::path::Path;

use dbscrub_core::{FileContent, Result};
use dbscrub_security::Redactor;

/// File the tool operates on, relative to the working directory
pub const TARGET_FILE: &str = "server.js";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// No file at the path; nothing was touched
    Missing,
    /// Redaction changed nothing, so the file was not written
    Unchanged,
    /// The file was rewritten
    Redacted { count: usize },
}

/// Redact credential URLs in the file at `path`, writing only if the text changed.
pub fn run(path: &Path) -> Result<RunOutcome> {
    let content = FileContent::load(path)?;
    tracing::debug!(path = %path.display(), exists = content.exists, "Loaded target file");

    if !content.exists {
        return Ok(RunOutcome::Missing);
    }

    if content.dropped_bytes > 0 {
        tracing::warn!(
            path = %path.display(),
            dropped = content.dropped_bytes,
            "Dropped bytes that are not valid UTF-8"
        );
    }

    let (redacted, info) = Redactor::new().redact(&content.text);

    if redacted == content.text {
        tracing::info!(path = %path.display(), "No credentials to redact");
        return Ok(RunOutcome::Unchanged);
    }

    content.overwrite(&redacted)?;

    // text changed, so at least one match was replaced
    let count = info.map(|i| i.count).unwrap_or_default();
    tracing::info!(path = %path.display(), count, "Redacted MySQL passwords");

    Ok(RunOutcome::Redacted { count })
}

/// Run against `server.js` in the current directory.
pub fn run_default() -> Result<RunOutcome> {
    run(Path::new(TARGET_FILE))
}
