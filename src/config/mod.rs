//! Options recognized by the link generator.
//!
//! This module defines `LinkOptions`, the small options record a host hands
//! to [`generate_daily_links`](crate::links::generate_daily_links). The
//! record deserializes from the host's configuration blob with serde;
//! unrecognized keys are ignored and every field has a default, so an empty
//! object is always valid.
//!
//! # Recognized Options
//!
//! - `debug`: emit diagnostic trace events for each decision (default false)
//! - `headerLevel`: render the captures header as a Markdown heading of
//!   this level instead of the inline bold form

use crate::constants::{MAX_HEADER_LEVEL, MIN_HEADER_LEVEL};
use serde::Deserialize;

/// Options controlling diagnostics and rendering variants.
///
/// # Examples
///
/// Constructing options directly:
/// ```
/// use daylink::LinkOptions;
///
/// let options = LinkOptions {
///     debug: true,
///     header_level: None,
/// };
/// assert!(options.debug);
/// ```
///
/// Deserializing from a host configuration blob:
/// ```
/// use daylink::LinkOptions;
///
/// let options: LinkOptions = serde_json::from_str(r#"{"headerLevel": 3}"#).unwrap();
/// assert_eq!(options.header_level, Some(3));
/// assert!(!options.debug);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LinkOptions {
    /// When true, the generator emits `tracing` events describing each
    /// decision it takes. Purely observational; the returned text is
    /// identical either way.
    pub debug: bool,

    /// Optional Markdown heading level for the captures section header.
    ///
    /// When set, `**Today's Captures:**` is replaced by a heading of this
    /// level (clamped to 1..=6). When absent, the default inline bold form
    /// is used.
    pub header_level: Option<u8>,
}

impl LinkOptions {
    /// Returns the heading level to render with, clamped to the valid
    /// Markdown range, or `None` when the default inline header applies.
    pub fn effective_header_level(&self) -> Option<u8> {
        self.header_level
            .map(|level| level.clamp(MIN_HEADER_LEVEL, MAX_HEADER_LEVEL))
    }
}
