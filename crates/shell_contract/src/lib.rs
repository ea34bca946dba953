//! Shared contract types between the shell window manager and the apps it hosts.
//!
//! Whoever configures the shell owns the registration list: the window manager
//! reads [`AppDefinition`] values but never mutates them, and keys every live
//! window entry by [`AppId`].

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

use leptos::{Callback, View};
use serde::{Deserialize, Serialize};
use thiserror::Error;

const MAX_APP_ID_LEN: usize = 64;

/// Stable identifier for a registered application.
///
/// An id is one or more dot-separated segments of lowercase ASCII letters,
/// digits, and hyphens; each segment starts with a letter and does not end
/// with a hyphen. The id doubles as the registry key and as a DOM id suffix
/// for the window surface, so the policy is deliberately strict.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AppId(String);

/// Validation failures for [`AppId::new`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AppIdError {
    /// The raw id was empty.
    #[error("application id must not be empty")]
    Empty,
    /// The raw id exceeded the length ceiling.
    #[error("application id `{0}` is longer than {MAX_APP_ID_LEN} bytes")]
    TooLong(String),
    /// A segment was empty, started with a non-letter, ended with a hyphen,
    /// or contained a character outside `[a-z0-9-]`.
    #[error("application id `{0}` contains an invalid segment")]
    InvalidSegment(String),
}

impl AppId {
    /// Returns an app identifier when `raw` conforms to the id policy.
    ///
    /// # Errors
    ///
    /// Returns an [`AppIdError`] describing the first policy violation.
    pub fn new(raw: impl Into<String>) -> Result<Self, AppIdError> {
        let raw = raw.into();
        if raw.is_empty() {
            return Err(AppIdError::Empty);
        }
        if raw.len() > MAX_APP_ID_LEN {
            return Err(AppIdError::TooLong(raw));
        }
        if !raw.split('.').all(is_valid_segment) {
            return Err(AppIdError::InvalidSegment(raw));
        }
        Ok(Self(raw))
    }

    /// Creates an id without validation for compile-time trusted constants.
    pub fn trusted(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Returns the string form of the identifier.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for AppId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

fn is_valid_segment(segment: &str) -> bool {
    let Some(first) = segment.as_bytes().first() else {
        return false;
    };
    first.is_ascii_lowercase()
        && !segment.ends_with('-')
        && segment
            .bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-')
}

/// Static registration for one launchable application.
///
/// `icon` and `render` produce the launcher glyph and the window body
/// respectively; both are invoked by the shell on demand.
#[derive(Clone)]
pub struct AppDefinition {
    /// Unique, stable registry key.
    pub id: AppId,
    /// Human-readable launcher and title-bar text.
    pub title: String,
    /// Renders the launcher/dock glyph for this app.
    pub icon: Callback<(), View>,
    /// Renders the window body content for this app.
    pub render: Callback<(), View>,
}

impl AppDefinition {
    /// Bundles an app registration from its parts.
    pub fn new(
        id: AppId,
        title: impl Into<String>,
        icon: Callback<(), View>,
        render: Callback<(), View>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            icon,
            render,
        }
    }
}

impl std::fmt::Debug for AppDefinition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppDefinition")
            .field("id", &self.id)
            .field("title", &self.title)
            .finish_non_exhaustive()
    }
}

impl PartialEq for AppDefinition {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id && self.title == other.title
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_and_namespaced_ids() {
        for raw in ["settings", "org.example.notes", "paint-2"] {
            assert_eq!(AppId::new(raw), Ok(AppId::trusted(raw)), "{raw}");
        }
    }

    #[test]
    fn rejects_malformed_ids() {
        assert_eq!(AppId::new(""), Err(AppIdError::Empty));
        let long = "a".repeat(MAX_APP_ID_LEN + 1);
        assert_eq!(AppId::new(long.clone()), Err(AppIdError::TooLong(long)));
        for raw in ["Settings", "2fast", ".notes", "notes.", "no_tes", "app-"] {
            assert_eq!(
                AppId::new(raw),
                Err(AppIdError::InvalidSegment(raw.to_string())),
                "{raw}"
            );
        }
    }
}
