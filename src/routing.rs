//! Routing-instruction block maintenance in the shared host config file.
//!
//! The host file (by default `~/.gemini/GEMINI.md`) belongs to the user
//! and to other tooling; this crate owns only the text between the two
//! markers below. Everything outside the block must survive byte for
//! byte, so the merge and strip logic lives in pure string functions and
//! the file wrappers stay thin.

use crate::error::Result;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

pub const MARKER_START: &str = "<!-- SUBAGENT-ROUTING -->";
pub const MARKER_END: &str = "<!-- /SUBAGENT-ROUTING -->";

/// Canonical block content, markers included.
pub const ROUTING_SECTION: &str = include_str!("../templates/routing-section.md");

/// Outcome of a removal attempt, for the caller to report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoveOutcome {
    Removed,
    NotPresent,
    /// Start marker without a matching end marker; the file was left
    /// untouched rather than risk a partial edit
    Malformed,
}

/// Merge the canonical section into existing content.
///
/// Returns None when the content already carries the start marker: an
/// existing block is never rewritten, even if its text has drifted from
/// the current canonical version.
pub fn merge_section(content: &str, section: &str) -> Option<String> {
    if content.contains(MARKER_START) {
        return None;
    }

    let mut merged = String::with_capacity(content.len() + section.len() + 1);
    merged.push_str(content);
    if !content.is_empty() && !content.ends_with('\n') {
        merged.push('\n');
    }
    merged.push_str(section);
    Some(merged)
}

/// Strip the delimited block from content.
///
/// On success the remainder is trimmed and, if non-empty, normalized to
/// end with exactly one newline.
pub fn strip_section(content: &str) -> (RemoveOutcome, Option<String>) {
    let Some(start) = content.find(MARKER_START) else {
        return (RemoveOutcome::NotPresent, None);
    };

    // The end marker must follow the start marker
    let Some(end_offset) = content[start..].find(MARKER_END) else {
        return (RemoveOutcome::Malformed, None);
    };
    let end = start + end_offset + MARKER_END.len();

    let remaining = format!("{}{}", &content[..start], &content[end..]);
    let trimmed = remaining.trim();
    let normalized = if trimmed.is_empty() {
        String::new()
    } else {
        format!("{}\n", trimmed)
    };
    (RemoveOutcome::Removed, Some(normalized))
}

/// Guarantee `path` exists and contains exactly one routing block.
pub fn ensure_section(path: &Path) -> Result<()> {
    let content = match fs::read_to_string(path) {
        Ok(content) => Some(content),
        Err(e) if e.kind() == ErrorKind::NotFound => None,
        Err(e) => return Err(e.into()),
    };

    match content {
        None => {
            // Best effort: a failed mkdir is only warned about so the
            // write below can produce its own, clearer error
            if let Some(parent) = path.parent() {
                if let Err(e) = fs::create_dir_all(parent) {
                    eprintln!(
                        "⚠ Warning: failed to create directory {}: {}",
                        parent.display(),
                        e
                    );
                }
            }
            fs::write(path, ROUTING_SECTION)?;
        }
        Some(existing) => {
            if let Some(merged) = merge_section(&existing, ROUTING_SECTION) {
                fs::write(path, merged)?;
            }
        }
    }

    Ok(())
}

/// Remove any routing block from `path`, if the file exists.
pub fn remove_section(path: &Path) -> Result<RemoveOutcome> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(RemoveOutcome::NotPresent),
        Err(e) => return Err(e.into()),
    };

    let (outcome, rewritten) = strip_section(&content);
    if let Some(rewritten) = rewritten {
        fs::write(path, rewritten)?;
    }
    Ok(outcome)
}
