//! The link-generation pipeline.
//!
//! One linear pass per invocation: build the candidate pool, filter and
//! sort it into the daily collection, locate the current note, derive the
//! neighbor links and the weekly review link, collect same-day captures,
//! and render the final Markdown block. Stateless and idempotent; nothing
//! is retained across calls.

pub mod captures;
pub mod collection;

use crate::config::LinkOptions;
use crate::constants::{
    CAPTURES_HEADER, CAPTURES_TITLE, LABEL_TOMORROW, LABEL_YESTERDAY, LINE_BREAK, LINK_SEPARATOR,
    NO_NEIGHBORS_PLACEHOLDER, WEEKLY_FOLDER,
};
use crate::daily;
use crate::errors::{NavError, NavResult};
use crate::vault::VaultIndex;
use captures::CaptureGroups;
use chrono::NaiveDate;
use collection::DailyCollection;
use tracing::debug;

/// Which neighbor of the current note a link points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Previous,
    Next,
}

/// Generates the navigation block for the currently active daily note.
///
/// Returns a Markdown-formatted string for direct embedding into the host
/// document: a navigation line with previous/next links and a weekly
/// review link, followed by a "Today's Captures" section when same-day
/// capture files exist.
///
/// This function never fails. Every error condition resolves to a fixed
/// human-readable fallback string:
/// - no active note, or an active note whose basename is not a valid
///   `YYYY-MM-DD` date, yields `Not a valid daily note.`
/// - an active note missing from the computed collection yields
///   `Could not find current note in the vault's daily notes.`
///
/// A valid daily note without neighbors is not an error; the navigation
/// line carries a placeholder instead.
///
/// # Examples
///
/// ```
/// use daylink::{generate_daily_links, LinkOptions, MemoryVault};
///
/// let vault = MemoryVault::new(
///     vec!["2025-07-24.md", "2025-07-25.md", "2025-07-26.md"],
///     Some("2025-07-25.md"),
/// );
/// let block = generate_daily_links(&vault, &LinkOptions::default());
/// assert_eq!(
///     block,
///     "[[2025-07-24.md|Yesterday]] | [[2025-07-26.md|Tomorrow]] | [[Weekly Reviews/2025-W30]]"
/// );
/// ```
pub fn generate_daily_links(vault: &dyn VaultIndex, options: &LinkOptions) -> String {
    match generate_inner(vault, options) {
        Ok(text) => text,
        Err(error) => {
            if options.debug {
                debug!(%error, "link generation resolved to a fallback string");
            }
            error.to_string()
        }
    }
}

fn generate_inner(vault: &dyn VaultIndex, options: &LinkOptions) -> NavResult<String> {
    let trace = options.debug;

    let current = vault.active_note().ok_or(NavError::NoActiveNote)?;
    if trace {
        debug!(path = %current.path, "active note");
    }

    let current_date =
        daily::parse_daily_date(&current.basename).ok_or(NavError::NotADailyNote)?;

    let collection = DailyCollection::build(vault, &current, trace);
    let current_index = collection
        .position_of(&current.path)
        .ok_or(NavError::NotInCollection)?;
    if trace {
        debug!(
            current_index,
            collection_len = collection.len(),
            "located current note"
        );
    }

    let previous = neighbor_link(&collection, current_index, Direction::Previous, current_date);
    let next = neighbor_link(&collection, current_index, Direction::Next, current_date);
    if trace {
        debug!(
            has_previous = previous.is_some(),
            has_next = next.is_some(),
            "neighbor links derived"
        );
    }

    let mut nav_parts: Vec<String> = Vec::new();
    match (previous, next) {
        (None, None) => nav_parts.push(NO_NEIGHBORS_PLACEHOLDER.to_string()),
        (prev, nxt) => {
            nav_parts.extend(prev);
            nav_parts.extend(nxt);
        }
    }
    nav_parts.push(wikilink(
        &format!("{}/{}", WEEKLY_FOLDER, daily::weekly_note_name(current_date)),
        None,
    ));
    let nav_line = nav_parts.join(LINK_SEPARATOR);

    let groups = captures::collect_captures(vault, &current, trace);
    match render_captures(&groups, options.effective_header_level()) {
        Some(section) => Ok(format!("{}{}{}", nav_line, LINE_BREAK, section)),
        None => Ok(nav_line),
    }
}

/// Renders a `[[path|label]]` display link, or `[[path]]` without a label.
fn wikilink(path: &str, label: Option<&str>) -> String {
    match label {
        Some(label) => format!("[[{}|{}]]", path, label),
        None => format!("[[{}]]", path),
    }
}

/// Derives the link to the collection neighbor in `direction`, if any.
///
/// The label is "Yesterday"/"Tomorrow" only when the neighbor is exactly
/// one calendar day away from the current note's own date; any larger gap
/// renders the neighbor's raw date string.
fn neighbor_link(
    collection: &DailyCollection,
    current_index: usize,
    direction: Direction,
    current_date: NaiveDate,
) -> Option<String> {
    let target_index = match direction {
        Direction::Previous => current_index.checked_sub(1)?,
        Direction::Next => current_index.checked_add(1)?,
    };
    let target = collection.get(target_index)?;

    let target_date = daily::parse_daily_date(&target.basename);
    let label = match (direction, target_date) {
        (Direction::Previous, Some(date)) if daily::is_days_offset(current_date, date, -1) => {
            LABEL_YESTERDAY
        }
        (Direction::Next, Some(date)) if daily::is_days_offset(current_date, date, 1) => {
            LABEL_TOMORROW
        }
        _ => target.basename.as_str(),
    };
    Some(wikilink(&target.path, Some(label)))
}

/// Renders the captures section, or `None` when there are no captures.
///
/// Local entries come first, then each remote folder as a labeled group.
/// Pieces are separated by `<br>` so the section renders inside the host's
/// inline context.
fn render_captures(groups: &CaptureGroups, header_level: Option<u8>) -> Option<String> {
    if groups.is_empty() {
        return None;
    }

    let mut pieces: Vec<String> = Vec::new();
    pieces.push(match header_level {
        Some(level) => format!("{} {}", "#".repeat(level as usize), CAPTURES_TITLE),
        None => CAPTURES_HEADER.to_string(),
    });
    for note in &groups.local {
        pieces.push(wikilink(&note.path, Some(note.file_name())));
    }
    for (folder, entries) in &groups.remote {
        pieces.push(format!("*{}:*", folder));
        for note in entries {
            pieces.push(wikilink(&note.path, Some(note.file_name())));
        }
    }
    Some(pieces.join(LINE_BREAK))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vault::{MemoryVault, NoteRef};

    #[test]
    fn test_wikilink_with_and_without_label() {
        assert_eq!(wikilink("a/b.md", Some("B")), "[[a/b.md|B]]");
        assert_eq!(wikilink("Weekly Reviews/2025-W30", None), "[[Weekly Reviews/2025-W30]]");
    }

    #[test]
    fn test_neighbor_link_out_of_bounds() {
        let vault = MemoryVault::new(vec!["2025-07-25.md"], None::<&str>);
        let current = NoteRef::new("2025-07-25.md");
        let collection = DailyCollection::build(&vault, &current, false);
        let date = daily::parse_daily_date("2025-07-25").unwrap();
        assert_eq!(neighbor_link(&collection, 0, Direction::Previous, date), None);
        assert_eq!(neighbor_link(&collection, 0, Direction::Next, date), None);
    }

    #[test]
    fn test_neighbor_link_adjacent_day_labels() {
        let vault = MemoryVault::new(
            vec!["2025-07-24.md", "2025-07-25.md", "2025-07-26.md"],
            None::<&str>,
        );
        let current = NoteRef::new("2025-07-25.md");
        let collection = DailyCollection::build(&vault, &current, false);
        let date = daily::parse_daily_date("2025-07-25").unwrap();
        assert_eq!(
            neighbor_link(&collection, 1, Direction::Previous, date),
            Some("[[2025-07-24.md|Yesterday]]".to_string())
        );
        assert_eq!(
            neighbor_link(&collection, 1, Direction::Next, date),
            Some("[[2025-07-26.md|Tomorrow]]".to_string())
        );
    }

    #[test]
    fn test_neighbor_link_gap_renders_raw_date() {
        let vault = MemoryVault::new(vec!["2025-07-20.md", "2025-07-25.md"], None::<&str>);
        let current = NoteRef::new("2025-07-25.md");
        let collection = DailyCollection::build(&vault, &current, false);
        let date = daily::parse_daily_date("2025-07-25").unwrap();
        assert_eq!(
            neighbor_link(&collection, 1, Direction::Previous, date),
            Some("[[2025-07-20.md|2025-07-20]]".to_string())
        );
    }

    #[test]
    fn test_render_captures_empty_is_none() {
        let groups = CaptureGroups::default();
        assert_eq!(render_captures(&groups, None), None);
    }

    #[test]
    fn test_render_captures_heading_variant() {
        let groups = CaptureGroups {
            local: vec![NoteRef::new("2025-07-25 ideas.md")],
            remote: Vec::new(),
        };
        let section = render_captures(&groups, Some(3)).unwrap();
        assert!(section.starts_with("### Today's Captures<br>"));
    }
}
