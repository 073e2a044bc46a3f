//! Constants used throughout the crate.
//!
//! This module contains all constants used by the link generator, organized
//! into logical groups. Having constants centralized makes them easier to
//! find, modify, and reference consistently.

// File System Parameters
/// File extension (without the dot) a note must carry to participate in
/// navigation and capture collection.
pub const NOTE_EXTENSION: &str = "md";

// Date/Time Logic
/// Date format string for daily note basenames (YYYY-MM-DD).
pub const DATE_FORMAT_ISO: &str = "%Y-%m-%d";

// Rendering
/// Separator between links on the navigation line.
pub const LINK_SEPARATOR: &str = " | ";
/// Line-break marker used between rendered pieces. The host embeds the
/// output inline, so a literal newline would not render as a break.
pub const LINE_BREAK: &str = "<br>";
/// Label for a previous note exactly one calendar day back.
pub const LABEL_YESTERDAY: &str = "Yesterday";
/// Label for a next note exactly one calendar day ahead.
pub const LABEL_TOMORROW: &str = "Tomorrow";
/// Header line opening the captures section in the default (inline) form.
pub const CAPTURES_HEADER: &str = "**Today's Captures:**";
/// Title used when the captures header renders as a Markdown heading.
pub const CAPTURES_TITLE: &str = "Today's Captures";
/// Namespace folder for weekly review notes.
pub const WEEKLY_FOLDER: &str = "Weekly Reviews";
/// Placeholder shown on the navigation line when no neighboring daily
/// notes exist.
pub const NO_NEIGHBORS_PLACEHOLDER: &str = "No other daily notes found in this folder";

// Option Validation
/// Smallest Markdown heading level accepted for `headerLevel`.
pub const MIN_HEADER_LEVEL: u8 = 1;
/// Largest Markdown heading level accepted for `headerLevel`.
pub const MAX_HEADER_LEVEL: u8 = 6;
