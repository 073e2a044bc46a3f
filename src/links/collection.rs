//! Candidate pool and the sorted daily note collection.
//!
//! The pool is folder-agnostic: a vault may keep daily notes in one flat
//! folder or split them into monthly `YYYY-MM` subfolders. When the current
//! note sits inside a monthly folder, the pool widens to every sibling
//! monthly folder under the same grandparent so navigation crosses month
//! boundaries seamlessly.

use crate::daily::is_month_folder;
use crate::vault::{NoteRef, VaultIndex};
use crate::{constants, daily};
use tracing::debug;

/// The chronologically sorted daily notes visible from the current note.
///
/// Rebuilt from the vault index on every invocation; never cached. Ordering
/// is lexicographic on the basename, which equals chronological order for
/// the fixed-width `YYYY-MM-DD` format.
#[derive(Debug)]
pub struct DailyCollection {
    notes: Vec<NoteRef>,
}

impl DailyCollection {
    /// Builds the collection for `current` from the vault index.
    ///
    /// The candidate pool is the current note's folder, widened to all
    /// sibling `YYYY-MM` folders when the current folder is itself a
    /// monthly folder. Candidates are kept when they are markdown files
    /// whose basename is a bare `YYYY-MM-DD` date.
    pub fn build(vault: &dyn VaultIndex, current: &NoteRef, trace: bool) -> Self {
        let folder = current.folder();
        let folder_name = match folder.rfind('/') {
            Some(slash) => &folder[slash + 1..],
            None => folder,
        };

        let mut pool: Vec<NoteRef> = Vec::new();
        if is_month_folder(folder_name) {
            let grandparent = match folder.rfind('/') {
                Some(slash) => &folder[..slash],
                None => "",
            };
            let month_folders: Vec<String> = vault
                .list_subfolders(grandparent)
                .into_iter()
                .filter(|name| is_month_folder(name))
                .collect();
            if trace {
                debug!(
                    grandparent,
                    count = month_folders.len(),
                    "widening pool to sibling monthly folders"
                );
            }
            for name in month_folders {
                let sibling = if grandparent.is_empty() {
                    name
                } else {
                    format!("{}/{}", grandparent, name)
                };
                pool.extend(vault.list_children(&sibling));
            }
        } else {
            if trace {
                debug!(folder, "using current folder as the candidate pool");
            }
            pool = vault.list_children(folder);
        }

        let mut notes: Vec<NoteRef> = pool
            .into_iter()
            .filter(|note| {
                note.extension == constants::NOTE_EXTENSION && daily::is_daily_basename(&note.basename)
            })
            .collect();
        notes.sort_by(|a, b| a.basename.cmp(&b.basename));

        if trace {
            debug!(count = notes.len(), "daily note collection built");
        }
        DailyCollection { notes }
    }

    /// Position of the note with `path`, by path equality.
    pub fn position_of(&self, path: &str) -> Option<usize> {
        self.notes.iter().position(|note| note.path == path)
    }

    /// The note at `index`, if within bounds.
    pub fn get(&self, index: usize) -> Option<&NoteRef> {
        self.notes.get(index)
    }

    /// Number of daily notes in the collection.
    pub fn len(&self) -> usize {
        self.notes.len()
    }

    /// Whether the collection holds no daily notes.
    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vault::MemoryVault;

    #[test]
    fn test_flat_folder_pool_is_local_only() {
        let vault = MemoryVault::new(
            vec![
                "Journal/2025-07-24.md",
                "Journal/2025-07-25.md",
                "Archive/2025-07-26.md",
            ],
            None::<&str>,
        );
        let current = NoteRef::new("Journal/2025-07-25.md");
        let collection = DailyCollection::build(&vault, &current, false);
        assert_eq!(collection.len(), 2);
        assert_eq!(collection.position_of("Archive/2025-07-26.md"), None);
    }

    #[test]
    fn test_monthly_folder_pool_spans_sibling_months() {
        let vault = MemoryVault::new(
            vec![
                "Journal/2025-07/2025-07-30.md",
                "Journal/2025-07/2025-07-31.md",
                "Journal/2025-08/2025-08-01.md",
                "Journal/Templates/2025-01-01.md",
            ],
            None::<&str>,
        );
        let current = NoteRef::new("Journal/2025-07/2025-07-31.md");
        let collection = DailyCollection::build(&vault, &current, false);
        // Templates is not a YYYY-MM folder, so its note stays out.
        assert_eq!(collection.len(), 3);
        assert_eq!(collection.position_of("Journal/2025-08/2025-08-01.md"), Some(2));
    }

    #[test]
    fn test_monthly_folders_at_vault_root() {
        let vault = MemoryVault::new(
            vec!["2025-07/2025-07-31.md", "2025-08/2025-08-01.md"],
            None::<&str>,
        );
        let current = NoteRef::new("2025-07/2025-07-31.md");
        let collection = DailyCollection::build(&vault, &current, false);
        assert_eq!(collection.len(), 2);
    }

    #[test]
    fn test_filters_non_daily_and_non_markdown() {
        let vault = MemoryVault::new(
            vec![
                "Journal/2025-07-25.md",
                "Journal/2025-07-25 meeting.md",
                "Journal/2025-07-26.txt",
                "Journal/ideas.md",
            ],
            None::<&str>,
        );
        let current = NoteRef::new("Journal/2025-07-25.md");
        let collection = DailyCollection::build(&vault, &current, false);
        assert_eq!(collection.len(), 1);
    }

    #[test]
    fn test_sort_is_lexicographic_on_fixed_width_dates() {
        let vault = MemoryVault::new(
            vec!["Journal/2025-08-01.md", "Journal/2025-07-31.md"],
            None::<&str>,
        );
        let current = NoteRef::new("Journal/2025-07-31.md");
        let collection = DailyCollection::build(&vault, &current, false);
        assert_eq!(collection.get(0).unwrap().basename, "2025-07-31");
        assert_eq!(collection.get(1).unwrap().basename, "2025-08-01");
    }
}
