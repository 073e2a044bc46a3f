/*!
# Daylink

Daylink renders the navigation block for a daily note in a Markdown
knowledge base: links to the chronologically previous and next daily notes,
a link to the week's review note, and a list of same-day "capture" files.
The host application supplies an in-memory index of its notes; daylink
performs no I/O of its own and never fails — every error condition resolves
to a human-readable fallback string so the host's rendering pipeline is
never interrupted.

## Core Features

- Previous/next links with "Yesterday"/"Tomorrow" labels for adjacent days
- Folder-agnostic: works with a flat daily-notes folder or monthly
  `YYYY-MM` subfolders
- Weekly review link derived from the ISO week of the current note
- "Today's Captures" section for files sharing the current note's date
  prefix, grouped by folder

## Architecture

The codebase follows a modular architecture with clear separation of concerns:

- `vault`: The host boundary — note records and the lookup trait
- `daily`: Date-pattern recognition and calendar logic
- `links`: The link-generation pipeline and rendering
- `config`: Recognized generator options
- `errors`: Fallback-string error taxonomy

## Usage Example

```rust
use daylink::{generate_daily_links, LinkOptions, MemoryVault};

let vault = MemoryVault::new(
    vec![
        "Journal/2025-07-24.md",
        "Journal/2025-07-25.md",
        "Journal/2025-07-26.md",
    ],
    Some("Journal/2025-07-25.md"),
);

let block = generate_daily_links(&vault, &LinkOptions::default());
assert!(block.contains("[[Journal/2025-07-24.md|Yesterday]]"));
```
*/

/// Recognized generator options
pub mod config;
/// Constants used throughout the crate
pub mod constants;
/// Date-pattern recognition and calendar logic for daily notes
pub mod daily;
/// Error types and the fallback-string taxonomy
pub mod errors;
/// The link-generation pipeline
pub mod links;
/// Note records and the host lookup boundary
pub mod vault;

// Re-export important types for convenience
pub use config::LinkOptions;
pub use errors::{NavError, NavResult};
pub use links::generate_daily_links;
pub use vault::{MemoryVault, NoteRef, VaultIndex};
