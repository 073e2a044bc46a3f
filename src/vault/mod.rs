//! Note records and the host lookup boundary.
//!
//! The generator never touches a filesystem or a host plugin API directly.
//! Instead the host exposes its already-loaded note listing through the
//! [`VaultIndex`] trait, and every note is represented by the [`NoteRef`]
//! value record. This keeps the pipeline pure and independently testable
//! against in-memory fixtures.
//!
//! Paths are vault-relative with `/` separators and no leading slash; the
//! vault root is the empty folder path `""`.

mod memory;

pub use memory::MemoryVault;

/// A reference to a single note in the vault.
///
/// `NoteRef` is an immutable value record constructed from a vault-relative
/// path. The generator only reads these; ownership stays with the host (or
/// with the [`MemoryVault`] holding them).
///
/// # Examples
///
/// ```
/// use daylink::NoteRef;
///
/// let note = NoteRef::new("Journal/2025-07/2025-07-25.md");
/// assert_eq!(note.basename, "2025-07-25");
/// assert_eq!(note.extension, "md");
/// assert_eq!(note.folder(), "Journal/2025-07");
/// assert_eq!(note.file_name(), "2025-07-25.md");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteRef {
    /// Vault-relative path, unique within the vault.
    pub path: String,
    /// File name without its extension.
    pub basename: String,
    /// File extension without the dot; empty when the name has none.
    pub extension: String,
}

impl NoteRef {
    /// Creates a note reference from a vault-relative path, splitting the
    /// final component into basename and extension.
    pub fn new(path: impl Into<String>) -> Self {
        let path = path.into();
        let name = match path.rfind('/') {
            Some(slash) => &path[slash + 1..],
            None => &path[..],
        };
        let (basename, extension) = match name.rfind('.') {
            // A leading dot is part of the name, not an extension marker.
            Some(0) | None => (name.to_string(), String::new()),
            Some(dot) => (name[..dot].to_string(), name[dot + 1..].to_string()),
        };
        NoteRef {
            path,
            basename,
            extension,
        }
    }

    /// Returns the containing-folder path, or `""` for a note at the vault
    /// root.
    pub fn folder(&self) -> &str {
        match self.path.rfind('/') {
            Some(slash) => &self.path[..slash],
            None => "",
        }
    }

    /// Returns the file name including its extension.
    pub fn file_name(&self) -> &str {
        match self.path.rfind('/') {
            Some(slash) => &self.path[slash + 1..],
            None => &self.path,
        }
    }
}

/// Read-only lookup service over the host's note index.
///
/// This is the entire contract between the generator and its host. All
/// methods return snapshots; the generator re-queries on every invocation
/// and caches nothing across calls.
pub trait VaultIndex {
    /// The note currently open in the host workspace, if any.
    fn active_note(&self) -> Option<NoteRef>;

    /// Notes directly inside `folder` (non-recursive). `""` addresses the
    /// vault root.
    fn list_children(&self, folder: &str) -> Vec<NoteRef>;

    /// Names of the immediate subfolders of `folder`, without their parent
    /// path. Supports the sibling-month-folder search.
    fn list_subfolders(&self, folder: &str) -> Vec<String>;

    /// Every markdown note in the vault, regardless of folder. Supports
    /// the vault-wide capture scan.
    fn markdown_notes(&self) -> Vec<NoteRef>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_note_ref_splits_basename_and_extension() {
        let note = NoteRef::new("Journal/2025-07-25.md");
        assert_eq!(note.path, "Journal/2025-07-25.md");
        assert_eq!(note.basename, "2025-07-25");
        assert_eq!(note.extension, "md");
    }

    #[test]
    fn test_note_ref_at_vault_root() {
        let note = NoteRef::new("2025-07-25.md");
        assert_eq!(note.folder(), "");
        assert_eq!(note.file_name(), "2025-07-25.md");
    }

    #[test]
    fn test_note_ref_without_extension() {
        let note = NoteRef::new("Journal/notes");
        assert_eq!(note.basename, "notes");
        assert_eq!(note.extension, "");
    }

    #[test]
    fn test_note_ref_dotfile_has_no_extension() {
        let note = NoteRef::new("Journal/.hidden");
        assert_eq!(note.basename, ".hidden");
        assert_eq!(note.extension, "");
    }

    #[test]
    fn test_note_ref_basename_keeps_spaces() {
        let note = NoteRef::new("Journal/2025-07-25 meeting notes.md");
        assert_eq!(note.basename, "2025-07-25 meeting notes");
        assert_eq!(note.file_name(), "2025-07-25 meeting notes.md");
    }

    #[test]
    fn test_nested_folder_path() {
        let note = NoteRef::new("Journal/2025-07/2025-07-25.md");
        assert_eq!(note.folder(), "Journal/2025-07");
    }
}
