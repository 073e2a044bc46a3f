//! In-memory implementation of the vault lookup service.
//!
//! `MemoryVault` backs the [`VaultIndex`] trait with a plain list of paths.
//! Hosts that already hold their file listing in memory can populate one
//! directly, and the test suites use it as their fixture.

use super::{NoteRef, VaultIndex};

/// An in-memory note index built from vault-relative paths.
///
/// # Examples
///
/// ```
/// use daylink::{MemoryVault, VaultIndex};
///
/// let vault = MemoryVault::new(
///     vec!["Journal/2025-07-24.md", "Journal/2025-07-25.md"],
///     Some("Journal/2025-07-25.md"),
/// );
///
/// assert_eq!(vault.list_children("Journal").len(), 2);
/// assert_eq!(vault.active_note().unwrap().basename, "2025-07-25");
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryVault {
    notes: Vec<NoteRef>,
    active: Option<String>,
}

impl MemoryVault {
    /// Builds a vault from note paths and an optional active-note path.
    ///
    /// The active path does not have to appear in `paths`; an inconsistent
    /// pair models a host whose workspace and index disagree, which the
    /// generator must survive.
    pub fn new<I, S>(paths: I, active: Option<S>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        MemoryVault {
            notes: paths.into_iter().map(NoteRef::new).collect(),
            active: active.map(Into::into),
        }
    }

    /// Number of notes in the index.
    pub fn len(&self) -> usize {
        self.notes.len()
    }

    /// Whether the index holds no notes.
    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }
}

impl VaultIndex for MemoryVault {
    fn active_note(&self) -> Option<NoteRef> {
        self.active.as_deref().map(NoteRef::new)
    }

    fn list_children(&self, folder: &str) -> Vec<NoteRef> {
        self.notes
            .iter()
            .filter(|note| note.folder() == folder)
            .cloned()
            .collect()
    }

    fn list_subfolders(&self, folder: &str) -> Vec<String> {
        let mut names: Vec<String> = Vec::new();
        for note in &self.notes {
            let container = note.folder();
            let relative = if folder.is_empty() {
                container
            } else if let Some(rest) = container
                .strip_prefix(folder)
                .and_then(|rest| rest.strip_prefix('/'))
            {
                rest
            } else {
                continue;
            };
            if relative.is_empty() {
                continue;
            }
            let name = match relative.find('/') {
                Some(slash) => &relative[..slash],
                None => relative,
            };
            if !names.iter().any(|existing| existing == name) {
                names.push(name.to_string());
            }
        }
        names.sort();
        names
    }

    fn markdown_notes(&self) -> Vec<NoteRef> {
        self.notes
            .iter()
            .filter(|note| note.extension == crate::constants::NOTE_EXTENSION)
            .cloned()
            .collect()
    }
}
