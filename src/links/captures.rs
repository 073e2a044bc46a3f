//! Related-capture detection and grouping.
//!
//! A capture is an auxiliary markdown note whose basename starts with the
//! current daily note's basename and is strictly longer, e.g.
//! `2025-07-25 meeting` under `2025-07-25`. The strictly-longer check is
//! what excludes the daily note itself. No separator is required after the
//! prefix, so `2025-07-255` also counts; the integration tests pin that
//! edge case down.

use crate::constants::NOTE_EXTENSION;
use crate::vault::{NoteRef, VaultIndex};
use tracing::debug;

/// Captures related to the current daily note, split into the current
/// folder's entries and per-folder groups for the rest of the vault.
#[derive(Debug, Default)]
pub struct CaptureGroups {
    /// Captures inside the current note's own folder, sorted by basename.
    pub local: Vec<NoteRef>,
    /// Captures elsewhere in the vault, grouped by containing folder.
    /// Groups are sorted by folder path, entries by basename.
    pub remote: Vec<(String, Vec<NoteRef>)>,
}

impl CaptureGroups {
    /// Whether no captures were found anywhere.
    pub fn is_empty(&self) -> bool {
        self.local.is_empty() && self.remote.is_empty()
    }
}

fn is_capture_of(current: &NoteRef, candidate: &NoteRef) -> bool {
    candidate.path != current.path
        && candidate.extension == NOTE_EXTENSION
        && candidate.basename.len() > current.basename.len()
        && candidate.basename.starts_with(&current.basename)
}

/// Collects the capture groups for `current` from the vault index.
///
/// The current folder is scanned for local entries; every other folder in
/// the vault contributes to the remote groups. The current note itself is
/// excluded by the strictly-longer basename rule.
pub fn collect_captures(vault: &dyn VaultIndex, current: &NoteRef, trace: bool) -> CaptureGroups {
    let current_folder = current.folder();

    let mut local: Vec<NoteRef> = vault
        .list_children(current_folder)
        .into_iter()
        .filter(|note| is_capture_of(current, note))
        .collect();
    local.sort_by(|a, b| a.basename.cmp(&b.basename));

    let mut remote: Vec<(String, Vec<NoteRef>)> = Vec::new();
    for note in vault.markdown_notes() {
        if note.folder() == current_folder || !is_capture_of(current, &note) {
            continue;
        }
        let folder = note.folder().to_string();
        match remote.iter_mut().find(|(path, _)| *path == folder) {
            Some((_, entries)) => entries.push(note),
            None => remote.push((folder, vec![note])),
        }
    }
    for (_, entries) in remote.iter_mut() {
        entries.sort_by(|a, b| a.basename.cmp(&b.basename));
    }
    remote.sort_by(|a, b| a.0.cmp(&b.0));

    if trace {
        debug!(
            local = local.len(),
            remote_groups = remote.len(),
            "capture scan finished"
        );
    }
    CaptureGroups { local, remote }
}
