//! Error handling utilities for the link generator.
//!
//! This module provides the central error type `NavError`, which represents
//! the failure modes of link generation, as well as the convenience type
//! alias `NavResult` for functions that can return these errors.
//!
//! Every variant's `Display` output is the exact fallback string the host
//! receives: the public entry point converts errors to text instead of
//! propagating them, so generation can never interrupt the host's rendering
//! pipeline.

use thiserror::Error;

/// Represents the failure modes of daily link generation.
///
/// Each variant formats to the fallback string shown to the reader in place
/// of the navigation block. Note that a daily note without neighbors is not
/// an error — it renders a placeholder on the navigation line instead.
///
/// # Examples
///
/// ```
/// use daylink::errors::NavError;
///
/// let error = NavError::NoActiveNote;
/// assert_eq!(format!("{}", error), "Not a valid daily note.");
///
/// let error = NavError::NotInCollection;
/// assert!(format!("{}", error).contains("Could not find current note"));
/// ```
#[derive(Debug, Error, PartialEq, Eq)]
pub enum NavError {
    /// No note is currently active in the host workspace.
    #[error("Not a valid daily note.")]
    NoActiveNote,

    /// The active note's basename does not match the `YYYY-MM-DD` daily
    /// note format. Deliberately shares its fallback string with
    /// [`NavError::NoActiveNote`]; the reader only needs to know the
    /// navigation block does not apply here.
    #[error("Not a valid daily note.")]
    NotADailyNote,

    /// The active note is valid but absent from the computed daily note
    /// collection. Defensive: this indicates the host's index and active
    /// note disagree, which should not occur when scope computation is
    /// correct.
    #[error("Could not find current note in the vault's daily notes.")]
    NotInCollection,
}

/// A type alias for `Result<T, NavError>` to simplify function signatures.
///
/// Used by the internal stages of the pipeline; the public entry point
/// flattens the error into its fallback string.
///
/// # Examples
///
/// ```
/// use daylink::errors::{NavError, NavResult};
///
/// fn locate(index: Option<usize>) -> NavResult<usize> {
///     index.ok_or(NavError::NotInCollection)
/// }
///
/// assert_eq!(locate(Some(2)), Ok(2));
/// ```
pub type NavResult<T> = Result<T, NavError>;
